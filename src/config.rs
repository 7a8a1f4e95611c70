use std::{env, str::FromStr, time::Duration};

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{name} has an invalid value: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub bind_addr: String,
    pub port: u16,
    /// How long the login and register pages show their message before moving on.
    pub login_redirect_delay: Duration,
    pub booking_redirect_delay: Duration,
    pub request_timeout: Option<Duration>,
    /// Lets the payment form choose the outcome sent to the payment service.
    pub payment_outcome_override: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".to_string(),
            bind_addr: "127.0.0.1".to_string(),
            port: 3000,
            login_redirect_delay: Duration::from_millis(1000),
            booking_redirect_delay: Duration::from_millis(1500),
            request_timeout: None,
            payment_outcome_override: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            api_base_url: lookup("API_BASE_URL").unwrap_or(defaults.api_base_url),
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            port: parse(&lookup, "PORT")?.unwrap_or(defaults.port),
            login_redirect_delay: parse(&lookup, "LOGIN_REDIRECT_DELAY_MS")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.login_redirect_delay),
            booking_redirect_delay: parse(&lookup, "BOOKING_REDIRECT_DELAY_MS")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.booking_redirect_delay),
            request_timeout: parse(&lookup, "REQUEST_TIMEOUT_SECS")?.map(Duration::from_secs),
            payment_outcome_override: parse(&lookup, "PAYMENT_OUTCOME_OVERRIDE")?
                .unwrap_or(defaults.payment_outcome_override),
        })
    }
}

fn parse<F, T>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}
