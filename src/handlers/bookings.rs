use actix_web::{web, HttpResponse};

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::models::booking::{BookingForm, CreateBooking};
use crate::session::{self, Session};
use crate::views::{self, BookingPage, Refresh};

pub const BOOKING_FAILED: &str = "Booking failed";
pub const BOOKING_SUCCEEDED: &str = "Booking successful!";

pub async fn booking_page(api: web::Data<ApiClient>, session: Session) -> HttpResponse {
    let Some(token) = session.token() else {
        return views::redirect("/login").finish();
    };

    let hotel = match session.hotel_id() {
        Some(id) => match api.get_hotel(token, id).await {
            Ok(hotel) => Some(hotel),
            Err(e) => {
                log::warn!("Could not load details for hotel {id}: {e}");
                None
            }
        },
        None => None,
    };

    views::render(&BookingPage {
        hotel_id: session.hotel_id(),
        hotel: hotel.as_ref(),
        ..Default::default()
    })
}

pub async fn create_booking(
    api: web::Data<ApiClient>,
    config: web::Data<AppConfig>,
    session: Session,
    form: Result<web::Form<BookingForm>, actix_web::Error>,
) -> HttpResponse {
    let failed = || {
        views::render(&BookingPage {
            hotel_id: session.hotel_id(),
            message: Some(BOOKING_FAILED),
            ..Default::default()
        })
    };

    let (Some(token), Some(hotel_id)) = (session.token(), session.hotel_id()) else {
        log::warn!("Booking submitted without a session token or hotel selection");
        return failed();
    };
    let form = match form {
        Ok(form) => form.into_inner(),
        Err(e) => {
            log::warn!("Rejected booking form: {e}");
            return failed();
        }
    };

    let booking = CreateBooking::new(hotel_id, form);
    match api.create_booking(token, &booking).await {
        Ok(confirmation) => {
            log::info!("Booked hotel {hotel_id} ({:?})", confirmation.id());
            let mut response = HttpResponse::Ok();
            if let Some(id) = confirmation.id() {
                let amount = confirmation.total_price().unwrap_or(booking.total_price);
                response
                    .cookie(session::persist(session::BOOKING_ID, id.to_string()))
                    .cookie(session::persist(session::BOOKING_AMOUNT, amount.to_string()));
            }
            views::page(
                response,
                &BookingPage {
                    hotel_id: Some(hotel_id),
                    message: Some(BOOKING_SUCCEEDED),
                    refresh: Some(Refresh::new("/payment", config.booking_redirect_delay)),
                    ..Default::default()
                },
            )
        }
        Err(e) => {
            log::warn!("Booking hotel {hotel_id} failed: {e}");
            failed()
        }
    }
}
