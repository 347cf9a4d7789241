//! Payment request input to the payment-code codec
//!
//! Constructed fresh per generation request from values the route handlers
//! have already extracted out of validated HTTP bodies. Immutable; nothing
//! here is persisted by the core — storing the resulting code string is the
//! caller's responsibility.

use serde::{Deserialize, Serialize};

/// Logical input for one static payment-code generation.
///
/// The amount stays a string until the codec parses it with `rust_decimal`;
/// deserializing straight into a float would silently lose precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Transaction amount as a decimal string, e.g. `"10.00"`. Validated and
    /// normalized to exactly 2 fractional digits by the codec.
    pub amount: String,
    /// Recipient identifier: a Pix key (e-mail, phone, EVP). Opaque to the
    /// codec beyond its length.
    pub recipient_key: String,
    /// Recipient display name shown by the payer's banking app.
    pub merchant_name: String,
    /// Recipient city.
    pub merchant_city: String,
}

impl PaymentRequest {
    pub fn new(
        amount: impl Into<String>,
        recipient_key: impl Into<String>,
        merchant_name: impl Into<String>,
        merchant_city: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            recipient_key: recipient_key.into(),
            merchant_name: merchant_name.into(),
            merchant_city: merchant_city.into(),
        }
    }
}
