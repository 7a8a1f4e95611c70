use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;

use hotel_booking_web::{api::ApiClient, config::AppConfig, routes};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env().map_err(|e| {
        log::error!("Invalid configuration: {e}");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;
    let api = ApiClient::new(&config).map_err(|e| {
        log::error!("Failed to build API client: {e}");
        std::io::Error::other(e)
    })?;

    log::info!("Forwarding API calls to {}", config.api_base_url);
    log::info!(
        "Starting server at http://{}:{}",
        config.bind_addr,
        config.port
    );

    let bind = (config.bind_addr.clone(), config.port);
    let api_data = web::Data::new(api);
    let config_data = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            .app_data(api_data.clone())
            .app_data(config_data.clone())
            .wrap(middleware::Logger::default())
            .configure(routes)
    })
    .bind(bind)?
    .run()
    .await
}
