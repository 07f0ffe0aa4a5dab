//! Error types for the yookassa library

use thiserror::Error;

/// Result type alias for YooKassa operations
pub type Result<T> = std::result::Result<T, YooKassaError>;

/// Main error type for YooKassa API operations
#[derive(Error, Debug)]
pub enum YooKassaError {
    /// An identifier-taking operation was called with an empty payment ID.
    /// Raised before any network I/O happens.
    #[error("payment ID cannot be empty")]
    EmptyPaymentId,

    /// The request payload could not be serialized to JSON
    #[error("error serializing request: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Request construction or network/TLS/DNS failure reaching the API host
    #[error("error sending request: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-200 status; carries the raw response body
    #[error("API error: {status}, body: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    /// A 200 response body did not parse into the expected shape
    #[error("error decoding response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl YooKassaError {
    /// Create an API error from a status code and raw body text
    pub fn api(status: reqwest::StatusCode, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }

    /// True when the remote service rejected the call
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// HTTP status of an API rejection, if this is one
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_api_error_display_keeps_status_and_body() {
        let err = YooKassaError::api(StatusCode::BAD_REQUEST, r#"{"code":"invalid_request"}"#);
        let text = err.to_string();
        assert!(text.contains("400"));
        assert!(text.contains(r#"{"code":"invalid_request"}"#));
    }

    #[test]
    fn test_status_accessor() {
        let err = YooKassaError::api(StatusCode::NOT_FOUND, "missing");
        assert!(err.is_api());
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(YooKassaError::EmptyPaymentId.status(), None);
    }
}
