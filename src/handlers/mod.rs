pub mod auth;
pub mod bookings;
pub mod hotels;
pub mod payments;

use actix_web::HttpResponse;

use crate::views;

pub async fn index() -> HttpResponse {
    views::redirect("/hotels").finish()
}
