use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fields posted by the booking form. The hotel comes from the session.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingForm {
    pub check_in: chrono::NaiveDate,
    pub check_out: chrono::NaiveDate,
    pub total_price: f64,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    pub hotel_id: i64,
    pub check_in: chrono::NaiveDate,
    pub check_out: chrono::NaiveDate,
    pub total_price: f64,
}

impl CreateBooking {
    pub fn new(hotel_id: i64, form: BookingForm) -> Self {
        Self {
            hotel_id,
            check_in: form.check_in,
            check_out: form.check_out,
            total_price: form.total_price,
        }
    }
}

/// Whatever the booking endpoint returns on success. Any JSON object is
/// accepted; the id and price are picked up when they are usable.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct BookingConfirmation(serde_json::Map<String, Value>);

impl BookingConfirmation {
    /// The booking id, when it is a whole number or a numeric string.
    pub fn id(&self) -> Option<i64> {
        match self.0.get("id")? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn total_price(&self) -> Option<f64> {
        match self.0.get("totalPrice")? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}
