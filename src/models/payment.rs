use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PaymentForm {
    pub booking_id: i64,
    pub amount: f64,
    #[validate(length(min = 1))]
    pub provider_txn_id: String,
    #[serde(default)]
    pub succeed: Option<bool>,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProcessPayment {
    pub booking_id: i64,
    pub amount: f64,
    pub provider_txn_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub succeed: Option<bool>,
}

impl ProcessPayment {
    /// Builds the request body. The outcome flag is only forwarded when the
    /// deployment allows callers to choose it.
    pub fn from_form(form: PaymentForm, allow_outcome_override: bool) -> Self {
        Self {
            booking_id: form.booking_id,
            amount: form.amount,
            provider_txn_id: form.provider_txn_id,
            succeed: if allow_outcome_override {
                Some(form.succeed.unwrap_or(false))
            } else {
                None
            },
        }
    }
}

/// A booking reference exactly as the payment service echoed it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BookingRef {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for BookingRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingRef::Number(n) => write!(f, "{n}"),
            BookingRef::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResult {
    pub payment_status: String,
    pub booking_id: BookingRef,
}

impl PaymentResult {
    pub fn summary(&self) -> String {
        format!(
            "Payment {} for booking {}",
            self.payment_status, self.booking_id
        )
    }
}
