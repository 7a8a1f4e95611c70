pub mod api;
pub mod config;
pub mod handlers;
pub mod models;
pub mod session;
pub mod views;

use actix_web::web;

/// Registers every page of the booking flow.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::index))
        .service(
            web::resource("/login")
                .route(web::get().to(handlers::auth::login_page))
                .route(web::post().to(handlers::auth::login)),
        )
        .service(
            web::resource("/register")
                .route(web::get().to(handlers::auth::register_page))
                .route(web::post().to(handlers::auth::register)),
        )
        .route("/logout", web::post().to(handlers::auth::logout))
        .service(
            web::scope("/hotels")
                .route("", web::get().to(handlers::hotels::get_hotels))
                .route(
                    "/{id}/select",
                    web::get().to(handlers::hotels::select_hotel),
                ),
        )
        .service(
            web::resource("/booking")
                .route(web::get().to(handlers::bookings::booking_page))
                .route(web::post().to(handlers::bookings::create_booking)),
        )
        .service(
            web::resource("/payment")
                .route(web::get().to(handlers::payments::payment_page))
                .route(web::post().to(handlers::payments::process_payment)),
        );
}
