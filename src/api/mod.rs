mod error;

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

pub use crate::api::error::ApiError;
use crate::config::AppConfig;
use crate::models::{
    auth::{AuthResponse, LoginRequest, RegisterRequest},
    booking::{BookingConfirmation, CreateBooking},
    hotel::{Hotel, HotelSearch},
    payment::{PaymentResult, ProcessPayment},
};

pub type Result<T> = std::result::Result<T, ApiError>;

/// Client for the booking REST API. Cheap to clone; clones share the
/// connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http_client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().map_err(ApiError::Transport)?;
        Ok(Self::with_client(http_client, &config.api_base_url))
    }

    pub fn with_client(http_client: Client, base_url: &str) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse> {
        let builder = self.http_client.post(self.url("/api/auth/login")).json(credentials);
        decode(send(builder).await?).await
    }

    /// Registers an account. The response body is not used.
    pub async fn register(&self, registration: &RegisterRequest) -> Result<()> {
        let builder = self
            .http_client
            .post(self.url("/api/auth/register"))
            .json(registration);
        send(builder).await?;
        Ok(())
    }

    pub async fn list_hotels(&self, token: &str) -> Result<Vec<Hotel>> {
        let builder = self.http_client.get(self.url("/api/hotels")).bearer_auth(token);
        decode(send(builder).await?).await
    }

    pub async fn search_hotels(&self, token: &str, search: &HotelSearch) -> Result<Vec<Hotel>> {
        let builder = self
            .http_client
            .get(self.url("/api/hotels/search"))
            .query(&search.query())
            .bearer_auth(token);
        decode(send(builder).await?).await
    }

    pub async fn get_hotel(&self, token: &str, id: i64) -> Result<Hotel> {
        let builder = self
            .http_client
            .get(self.url(&format!("/api/hotels/{id}")))
            .bearer_auth(token);
        decode(send(builder).await?).await
    }

    pub async fn create_booking(
        &self,
        token: &str,
        booking: &CreateBooking,
    ) -> Result<BookingConfirmation> {
        let builder = self
            .http_client
            .post(self.url("/api/bookings"))
            .bearer_auth(token)
            .json(booking);
        decode(send(builder).await?).await
    }

    pub async fn process_payment(&self, payment: &ProcessPayment) -> Result<PaymentResult> {
        let builder = self.http_client.post(self.url("/payments/process")).json(payment);
        decode(send(builder).await?).await
    }
}

async fn send(builder: RequestBuilder) -> Result<Response> {
    let response = builder.send().await.map_err(ApiError::Transport)?;
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status));
    }
    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    response.json().await.map_err(ApiError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn setup() -> (MockServer, ApiClient) {
        let server = MockServer::start().await;
        let client = ApiClient::with_client(Client::new(), &server.uri());
        (server, client)
    }

    #[actix_web::test]
    async fn login_posts_credentials_and_returns_token() {
        let (server, client) = setup().await;

        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .and(body_json(serde_json::json!({"username": "ana", "password": "pw"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"token": "abc.def"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let credentials = LoginRequest {
            username: "ana".into(),
            password: "pw".into(),
        };
        let auth = client.login(&credentials).await.unwrap();
        assert_eq!(auth.token, "abc.def");
    }

    #[actix_web::test]
    async fn non_success_status_is_reported() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/hotels"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = client.list_hotels("stale").await.unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[actix_web::test]
    async fn search_sends_city_and_bearer_token() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/hotels/search"))
            .and(query_param("city", "Lisbon"))
            .and(header("Authorization", "Bearer t0k"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 3, "name": "Tejo", "city": "Lisbon", "description": "River view", "rating": 4.5}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let search = HotelSearch {
            city: Some("Lisbon".into()),
            name: None,
        };
        let hotels = client.search_hotels("t0k", &search).await.unwrap();
        assert_eq!(hotels.len(), 1);
        assert_eq!(hotels[0].name(), "Tejo");
        assert_eq!(hotels[0].rating, Some(4.5));
    }

    #[actix_web::test]
    async fn search_forwards_name_filter() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/hotels/search"))
            .and(query_param("name", "Tejo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 3, "name": "Tejo", "city": "Lisbon", "description": null, "rating": null}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let search = HotelSearch {
            city: None,
            name: Some("Tejo".into()),
        };
        let hotels = client.search_hotels("t0k", &search).await.unwrap();
        assert_eq!(hotels[0].id, 3);
    }

    #[actix_web::test]
    async fn get_hotel_fetches_by_id() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/hotels/9"))
            .and(header("Authorization", "Bearer t0k"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(
                {"id": 9, "name": "Sal", "city": "Lisbon", "description": "Old town", "rating": 3.9}
            )))
            .expect(1)
            .mount(&server)
            .await;

        let hotel = client.get_hotel("t0k", 9).await.unwrap();
        assert_eq!(hotel.name(), "Sal");
    }

    #[actix_web::test]
    async fn malformed_booking_response_is_a_decode_error() {
        let (server, client) = setup().await;

        Mock::given(method("POST"))
            .and(path("/api/bookings"))
            .respond_with(ResponseTemplate::new(201).set_body_string("created"))
            .mount(&server)
            .await;

        let booking = CreateBooking {
            hotel_id: 1,
            check_in: chrono::NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            check_out: chrono::NaiveDate::from_ymd_opt(2026, 3, 4).unwrap(),
            total_price: 300.0,
        };
        let err = client.create_booking("t0k", &booking).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
