//! Per-user state carried between pages.
//!
//! Nothing is kept server side: the session token and the current selection
//! live in cookies on the client, one cookie per key.

use std::future::{ready, Ready};

use actix_web::{
    cookie::{Cookie, SameSite},
    dev::Payload,
    FromRequest, HttpRequest,
};

pub const TOKEN: &str = "token";
pub const HOTEL_ID: &str = "hotelId";
pub const BOOKING_ID: &str = "bookingId";
pub const BOOKING_AMOUNT: &str = "bookingAmount";

pub const ALL_KEYS: [&str; 4] = [TOKEN, HOTEL_ID, BOOKING_ID, BOOKING_AMOUNT];

/// Snapshot of the persisted keys sent with a request. Values that are empty
/// or fail to parse count as absent.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Session {
    token: Option<String>,
    hotel_id: Option<i64>,
    booking_id: Option<i64>,
    booking_amount: Option<f64>,
}

impl Session {
    pub fn from_cookies(req: &HttpRequest) -> Self {
        let value = |name: &str| {
            req.cookie(name)
                .map(|cookie| cookie.value().to_string())
                .filter(|value| !value.is_empty())
        };
        Self {
            token: value(TOKEN),
            hotel_id: value(HOTEL_ID).and_then(|v| v.parse().ok()),
            booking_id: value(BOOKING_ID).and_then(|v| v.parse().ok()),
            booking_amount: value(BOOKING_AMOUNT).and_then(|v| v.parse().ok()),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn hotel_id(&self) -> Option<i64> {
        self.hotel_id
    }

    pub fn booking_id(&self) -> Option<i64> {
        self.booking_id
    }

    pub fn booking_amount(&self) -> Option<f64> {
        self.booking_amount
    }
}

impl FromRequest for Session {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Ok(Session::from_cookies(req)))
    }
}

/// Cookie that stores `value` under `name` until it is replaced or cleared.
pub fn persist(name: &'static str, value: impl Into<String>) -> Cookie<'static> {
    Cookie::build(name, value.into())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish()
}

/// Cookie that clears `name` on the client.
pub fn clear(name: &'static str) -> Cookie<'static> {
    let mut cookie = persist(name, "");
    cookie.make_removal();
    cookie
}
