use reqwest::StatusCode;
use thiserror::Error;

/// Failures talking to the booking API. Pages collapse all of these into one
/// message; the variant only matters for logging and for spotting an
/// expired session.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("API responded with {0}")]
    Status(StatusCode),

    #[error("could not decode response body: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status(status) if *status == StatusCode::UNAUTHORIZED)
    }
}
