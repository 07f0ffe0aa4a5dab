//! # yookassa - YooKassa payments API client
//!
//! Client bindings for the YooKassa HTTP API: create, fetch, capture and
//! cancel payments on behalf of a shop. Each operation is a single
//! authenticated request/response exchange; retry policy, webhook handling
//! and rate limiting are left to the caller.
//!
//! ```no_run
//! use yookassa::{Amount, Confirmation, Payment, YooKassaClient};
//!
//! # async fn run() -> yookassa::Result<()> {
//! let client = YooKassaClient::new("285473", "live_secret");
//!
//! let request = Payment::new(Amount::new("100.00", "RUB"))
//!     .with_confirmation(Confirmation::redirect("https://example.com/return"))
//!     .with_capture(true);
//!
//! let payment = client.create_payment(&request).await?;
//! println!("created {:?} with status {:?}", payment.id, payment.status);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod types;

// Re-exports for convenience
pub use client::{YooKassaClient, BASE_URL};
pub use error::{Result, YooKassaError};
pub use types::*;

/// Current version of the yookassa library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_base_url_is_versioned() {
        assert!(BASE_URL.starts_with("https://"));
        assert!(BASE_URL.ends_with("/v3/"));
    }
}
