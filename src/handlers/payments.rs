use actix_web::{web, HttpResponse};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::api::{ApiClient, ApiError};
use crate::config::AppConfig;
use crate::models::payment::{PaymentForm, ProcessPayment};
use crate::session::Session;
use crate::views::{self, PaymentPage};

pub const PAYMENT_FAILED: &str = "Payment failed!";

/// Why a payment attempt ended in `PAYMENT_FAILED`.
#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("unreadable payment form: {0}")]
    Form(#[from] actix_web::Error),

    #[error("invalid payment form: {0}")]
    Invalid(#[from] ValidationErrors),

    #[error(transparent)]
    Api(#[from] ApiError),
}

pub async fn payment_page(config: web::Data<AppConfig>, session: Session) -> HttpResponse {
    views::render(&PaymentPage {
        booking_id: session.booking_id(),
        amount: session.booking_amount(),
        allow_outcome_override: config.payment_outcome_override,
        ..Default::default()
    })
}

pub async fn process_payment(
    api: web::Data<ApiClient>,
    config: web::Data<AppConfig>,
    session: Session,
    form: Result<web::Form<PaymentForm>, actix_web::Error>,
) -> HttpResponse {
    let result = match submit(&api, &config, form).await {
        Ok(summary) => summary,
        Err(e) => {
            log::error!("Payment failed: {e}");
            PAYMENT_FAILED.to_string()
        }
    };

    views::render(&PaymentPage {
        booking_id: session.booking_id(),
        amount: session.booking_amount(),
        allow_outcome_override: config.payment_outcome_override,
        result: Some(&result),
        refresh: None,
    })
}

async fn submit(
    api: &ApiClient,
    config: &AppConfig,
    form: Result<web::Form<PaymentForm>, actix_web::Error>,
) -> Result<String, PaymentError> {
    let form = form?.into_inner();
    form.validate()?;
    let payment = ProcessPayment::from_form(form, config.payment_outcome_override);
    let result = api.process_payment(&payment).await?;
    log::info!(
        "Payment for booking {} returned {}",
        result.booking_id,
        result.payment_status
    );
    Ok(result.summary())
}
