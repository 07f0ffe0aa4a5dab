//! Data transfer types for the YooKassa payments API

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Monetary value with its ISO 4217 currency code.
///
/// The value stays a decimal string on the wire ("100.00", not 100.0)
/// so no floating-point precision is lost.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Amount {
    pub value: String,
    pub currency: String,
}

impl Amount {
    /// Create a new amount from a decimal string and a 3-letter currency code
    pub fn new(value: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            currency: currency.into(),
        }
    }
}

/// Masked bank card details, populated by the service
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// First 6 digits of the card number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first6: Option<String>,
    /// Last 4 digits of the card number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last4: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_month: Option<String>,
    /// Card brand (MIR, Visa, MasterCard, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,
    /// Two-letter country code of the issuing bank
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer_country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer_name: Option<String>,
    /// Channel the card came through (apple_pay, google_pay, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Confirmation scenario code
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmationType {
    /// Payer is redirected to the gateway's payment page
    Redirect,
}

/// Confirmation flow descriptor.
///
/// Only the redirect scenario exists today; the `type` tag leaves room
/// for the other scenarios the API defines.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Confirmation {
    #[serde(rename = "type")]
    pub confirmation_type: ConfirmationType,
    /// URL the payer is sent to to complete the payment (server-populated)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_url: Option<String>,
    /// URL the payer returns to afterwards; the service caps it at 2048 chars
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
}

impl Confirmation {
    /// Redirect confirmation sending the payer back to `return_url`
    pub fn redirect(return_url: impl Into<String>) -> Self {
        Self {
            confirmation_type: ConfirmationType::Redirect,
            confirmation_url: None,
            return_url: Some(return_url.into()),
        }
    }
}

/// Payment method attached to a payment, keyed by its `type` tag.
///
/// New methods are added as variants without touching existing call sites.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaymentMethod {
    BankCard(BankCard),
}

/// Bank card payment method
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BankCard {
    /// Identifier of the saved payment method
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Whether the method was saved for repeat payments
    #[serde(default, skip_serializing_if = "is_false")]
    pub saved: bool,
    /// Display title of the payment method
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
}

/// A payment resource as sent to and returned by the API.
///
/// Server-assigned fields (`id`, `status`, `payment_method`) are empty on a
/// creation request and filled in on every response. Values are never
/// mutated in place; each operation returns a fresh snapshot of the remote
/// state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Free-form status string ("pending", "succeeded", "canceled", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub amount: Amount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Caller-defined key-value pairs, echoed back by the service
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation: Option<Confirmation>,
    /// Capture immediately instead of holding the funds
    #[serde(default, skip_serializing_if = "is_false")]
    pub capture: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
}

impl Payment {
    /// New payment request for the given amount
    pub fn new(amount: Amount) -> Self {
        Self {
            amount,
            ..Self::default()
        }
    }

    /// Set the payment description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the confirmation flow
    pub fn with_confirmation(mut self, confirmation: Confirmation) -> Self {
        self.confirmation = Some(confirmation);
        self
    }

    /// Set the capture flag
    pub fn with_capture(mut self, capture: bool) -> Self {
        self.capture = capture;
        self
    }

    /// Attach one metadata key-value pair
    pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}
