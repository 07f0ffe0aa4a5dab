//! HTTP client for the YooKassa payments API

use crate::error::{Result, YooKassaError};
use crate::types::Payment;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use tracing::debug;
use uuid::Uuid;

/// Production base URL of the YooKassa API
pub const BASE_URL: &str = "https://api.yookassa.ru/v3/";

/// Header carrying the per-request idempotency key
const IDEMPOTENCE_KEY: &str = "Idempotence-Key";

/// Client for the YooKassa payments API.
///
/// Holds the shop credentials and a reusable HTTP transport and keeps no
/// per-call state, so a single client can be shared across tasks and
/// cloned cheaply.
#[derive(Debug, Clone)]
pub struct YooKassaClient {
    /// Shop identifier, used as the basic-auth username
    shop_id: String,
    /// Shop secret key, used as the basic-auth password
    shop_secret: String,
    /// Base URL all endpoint paths are joined onto
    base_url: String,
    /// HTTP client
    http: reqwest::Client,
}

impl YooKassaClient {
    /// Create a new client authenticating as the given shop.
    ///
    /// Credentials are not validated here; a wrong pair surfaces as an
    /// authentication error from the service on the first call.
    pub fn new(shop_id: impl Into<String>, shop_secret: impl Into<String>) -> Self {
        Self::with_base_url(shop_id, shop_secret, BASE_URL)
    }

    /// Create a client against a non-default base URL, e.g. a test double
    pub fn with_base_url(
        shop_id: impl Into<String>,
        shop_secret: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            shop_id: shop_id.into(),
            shop_secret: shop_secret.into(),
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Shop identifier this client authenticates as
    pub fn shop_id(&self) -> &str {
        &self.shop_id
    }

    /// Base URL this client targets
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a new payment.
    ///
    /// `request` carries the amount (required by the service), plus any
    /// description, confirmation flow, capture flag and metadata. The
    /// returned payment has the server-assigned `id` and `status`.
    pub async fn create_payment(&self, request: &Payment) -> Result<Payment> {
        let body = serde_json::to_string(request).map_err(YooKassaError::Serialize)?;
        self.execute(Method::POST, "payments", Some(body)).await
    }

    /// Fetch the current state of the payment with `payment_id`
    pub async fn get_payment(&self, payment_id: &str) -> Result<Payment> {
        Self::require_id(payment_id)?;
        self.execute(Method::GET, &format!("payments/{payment_id}"), None)
            .await
    }

    /// Capture a payment that is waiting for capture.
    ///
    /// The capture endpoint wants a JSON body, so an empty object is sent.
    pub async fn capture_payment(&self, payment_id: &str) -> Result<Payment> {
        Self::require_id(payment_id)?;
        self.execute(
            Method::POST,
            &format!("payments/{payment_id}/capture"),
            Some("{}".to_string()),
        )
        .await
    }

    /// Cancel a payment that has not been captured yet
    pub async fn cancel_payment(&self, payment_id: &str) -> Result<Payment> {
        Self::require_id(payment_id)?;
        self.execute(Method::POST, &format!("payments/{payment_id}/cancel"), None)
            .await
    }

    fn require_id(payment_id: &str) -> Result<()> {
        if payment_id.is_empty() {
            return Err(YooKassaError::EmptyPaymentId);
        }
        Ok(())
    }

    fn join_url(base: &str, path: &str) -> String {
        let base = base.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Shared request/response exchange behind all four operations.
    ///
    /// Every call carries basic auth, a JSON content type and a freshly
    /// minted `Idempotence-Key`. The service deduplicates on that key, so a
    /// caller-level retry is a brand-new operation from its point of view.
    async fn execute(&self, method: Method, path: &str, body: Option<String>) -> Result<Payment> {
        let url = Self::join_url(&self.base_url, path);
        debug!(%method, %url, "sending request");

        let mut request = self
            .http
            .request(method, &url)
            .basic_auth(&self.shop_id, Some(&self.shop_secret))
            .header(CONTENT_TYPE, "application/json")
            .header(IDEMPOTENCE_KEY, Uuid::new_v4().to_string());

        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;

        // The API answers 200 for every operation, creation included;
        // anything else, 2xx or not, is a failure.
        let status = response.status();
        if status != StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("Unknown Error: {}", e));
            return Err(YooKassaError::api(status, body));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(YooKassaError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = YooKassaClient::new("285473", "test_secret");
        assert_eq!(client.base_url(), BASE_URL);
        assert_eq!(client.shop_id(), "285473");
    }

    #[test]
    fn test_client_with_base_url() {
        let client = YooKassaClient::with_base_url("285473", "test_secret", "http://127.0.0.1:9");
        assert_eq!(client.base_url(), "http://127.0.0.1:9");
    }

    #[test]
    fn test_join_url_handles_slashes() {
        assert_eq!(
            YooKassaClient::join_url("https://api.test/v3/", "payments"),
            "https://api.test/v3/payments"
        );
        assert_eq!(
            YooKassaClient::join_url("https://api.test/v3", "/payments"),
            "https://api.test/v3/payments"
        );
    }
}
