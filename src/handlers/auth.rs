use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::models::auth::{LoginRequest, RegisterRequest};
use crate::session;
use crate::views::{self, LoginPage, Refresh, RegisterPage};

pub const LOGIN_FAILED: &str = "Invalid credentials";
pub const LOGIN_SUCCEEDED: &str = "Login successful!";
pub const REGISTER_FAILED: &str = "Registration failed";
pub const REGISTER_SUCCEEDED: &str = "Registration successful!";

pub async fn login_page() -> HttpResponse {
    views::render(&LoginPage::default())
}

pub async fn login(
    api: web::Data<ApiClient>,
    config: web::Data<AppConfig>,
    form: Result<web::Form<LoginRequest>, actix_web::Error>,
) -> HttpResponse {
    let failed = || {
        views::render(&LoginPage {
            message: Some(LOGIN_FAILED),
            refresh: None,
        })
    };

    let credentials = match form {
        Ok(form) => form.into_inner(),
        Err(e) => {
            log::warn!("Rejected login form: {e}");
            return failed();
        }
    };
    if credentials.validate().is_err() {
        return failed();
    }

    match api.login(&credentials).await {
        Ok(auth) => {
            log::info!("User {} logged in", credentials.username);
            let mut response = HttpResponse::Ok();
            response.cookie(session::persist(session::TOKEN, auth.token));
            views::page(
                response,
                &LoginPage {
                    message: Some(LOGIN_SUCCEEDED),
                    refresh: Some(Refresh::new("/hotels", config.login_redirect_delay)),
                },
            )
        }
        Err(e) => {
            log::warn!("Login failed for {}: {e}", credentials.username);
            failed()
        }
    }
}

pub async fn register_page() -> HttpResponse {
    views::render(&RegisterPage::default())
}

pub async fn register(
    api: web::Data<ApiClient>,
    config: web::Data<AppConfig>,
    form: Result<web::Form<RegisterRequest>, actix_web::Error>,
) -> HttpResponse {
    let failed = || {
        views::render(&RegisterPage {
            message: Some(REGISTER_FAILED),
            refresh: None,
        })
    };

    let registration = match form {
        Ok(form) => form.into_inner(),
        Err(e) => {
            log::warn!("Rejected registration form: {e}");
            return failed();
        }
    };
    if let Err(e) = registration.validate() {
        log::warn!("Invalid registration for {}: {e}", registration.username);
        return failed();
    }

    match api.register(&registration).await {
        Ok(()) => {
            log::info!("Registered user {}", registration.username);
            views::render(&RegisterPage {
                message: Some(REGISTER_SUCCEEDED),
                refresh: Some(Refresh::new("/login", config.login_redirect_delay)),
            })
        }
        Err(e) => {
            log::warn!("Registration failed for {}: {e}", registration.username);
            failed()
        }
    }
}

/// Forgets everything persisted for this client.
pub async fn logout() -> HttpResponse {
    let mut response = views::redirect("/login");
    for key in session::ALL_KEYS {
        response.cookie(session::clear(key));
    }
    response.finish()
}
