use std::{fmt, time::Duration};

use actix_web::{
    http::{header, header::ContentType},
    HttpResponse, HttpResponseBuilder,
};
use askama::Template;

use crate::models::hotel::{Hotel, HotelSearch};

/// Timed navigation rendered as `<meta http-equiv="refresh">`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Refresh {
    pub url: &'static str,
    pub delay: Duration,
}

impl Refresh {
    pub fn new(url: &'static str, delay: Duration) -> Self {
        Self { url, delay }
    }
}

impl fmt::Display for Refresh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};url={}", self.delay.as_secs_f64(), self.url)
    }
}

#[derive(Template, Default)]
#[template(path = "login.html")]
pub struct LoginPage<'a> {
    pub message: Option<&'a str>,
    pub refresh: Option<Refresh>,
}

#[derive(Template, Default)]
#[template(path = "register.html")]
pub struct RegisterPage<'a> {
    pub message: Option<&'a str>,
    pub refresh: Option<Refresh>,
}

#[derive(Template)]
#[template(path = "hotels.html")]
pub struct HotelsPage<'a> {
    pub hotels: &'a [Hotel],
    pub search: &'a HotelSearch,
    pub message: Option<&'a str>,
    pub refresh: Option<Refresh>,
}

#[derive(Template, Default)]
#[template(path = "booking.html")]
pub struct BookingPage<'a> {
    pub hotel_id: Option<i64>,
    /// Details of the selected hotel, when the API could provide them.
    pub hotel: Option<&'a Hotel>,
    pub message: Option<&'a str>,
    pub refresh: Option<Refresh>,
}

#[derive(Template, Default)]
#[template(path = "payment.html")]
pub struct PaymentPage<'a> {
    pub booking_id: Option<i64>,
    pub amount: Option<f64>,
    pub allow_outcome_override: bool,
    pub result: Option<&'a str>,
    pub refresh: Option<Refresh>,
}

/// Renders `template` as the body of `builder`'s response.
pub fn page<T: Template>(mut builder: HttpResponseBuilder, template: &T) -> HttpResponse {
    match template.render() {
        Ok(body) => builder.content_type(ContentType::html()).body(body),
        Err(e) => {
            log::error!("Failed to render page: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn render<T: Template>(template: &T) -> HttpResponse {
    page(HttpResponse::Ok(), template)
}

/// Immediate navigation to `location`.
pub fn redirect(location: &str) -> HttpResponseBuilder {
    let mut builder = HttpResponse::SeeOther();
    builder.insert_header((header::LOCATION, location));
    builder
}
