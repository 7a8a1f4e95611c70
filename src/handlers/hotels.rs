use actix_web::{web, HttpResponse};

use crate::api::ApiClient;
use crate::models::hotel::HotelSearch;
use crate::session::{self, Session};
use crate::views::{self, HotelsPage};

pub const LOAD_FAILED: &str = "Failed to load hotels";

pub async fn get_hotels(
    api: web::Data<ApiClient>,
    session: Session,
    params: web::Query<HotelSearch>,
) -> HttpResponse {
    // No token, no request.
    let Some(token) = session.token() else {
        return views::redirect("/login").finish();
    };

    let hotels = if params.is_empty() {
        api.list_hotels(token).await
    } else {
        api.search_hotels(token, &params).await
    };

    match hotels {
        Ok(hotels) => views::render(&HotelsPage {
            hotels: &hotels,
            search: &params,
            message: None,
            refresh: None,
        }),
        Err(e) if e.is_unauthorized() => {
            log::warn!("Session token rejected, sending client back to login");
            let mut response = views::redirect("/login");
            response.cookie(session::clear(session::TOKEN));
            response.finish()
        }
        Err(e) => {
            log::error!("Error fetching hotels: {e}");
            views::render(&HotelsPage {
                hotels: &[],
                search: &params,
                message: Some(LOAD_FAILED),
                refresh: None,
            })
        }
    }
}

/// Remembers the chosen hotel and moves on to the booking form.
pub async fn select_hotel(path: web::Path<i64>) -> HttpResponse {
    let id = path.into_inner();
    let mut response = views::redirect("/booking");
    response.cookie(session::persist(session::HOTEL_ID, id.to_string()));
    response.finish()
}
