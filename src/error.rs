//! Error types for the payterm library

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias for payterm operations
pub type Result<T> = std::result::Result<T, PaytermError>;

/// Main error type for payterm operations
#[derive(Error, Debug)]
pub enum PaytermError {
    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Base64 encoding/decoding error
    #[error("Base64 error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Currency code is missing
    #[error("Currency code cannot be empty")]
    EmptyCurrencyCode,

    /// Currency code is not a well-formed ISO 4217 code
    #[error("Invalid currency code: {code}")]
    InvalidCurrencyCode { code: String },

    /// Total amount is negative
    #[error("Total amount cannot be negative: {amount}")]
    NegativeTotalAmount { amount: Decimal },

    /// Tip amount is zero or negative
    #[error("Tip amount must be greater than zero: {amount}")]
    NonPositiveTipAmount { amount: Decimal },

    /// Foreign transaction ID exceeds the maximum length
    #[error("Foreign transaction ID must not exceed 128 characters: got {length}")]
    ForeignTransactionIdTooLong { length: usize },

    /// Foreign transaction ID contains characters outside printable ASCII
    #[error("Foreign transaction ID can only contain printable ASCII characters")]
    ForeignTransactionIdNotPrintableAscii,

    /// Request currency does not match the merchant account currency
    #[error("Currency mismatch: request uses {requested}, merchant is configured for {merchant}")]
    CurrencyMismatch { requested: String, merchant: String },
}

impl PaytermError {
    /// Create an invalid currency code error
    pub fn invalid_currency_code(code: impl Into<String>) -> Self {
        Self::InvalidCurrencyCode { code: code.into() }
    }

    /// Create a currency mismatch error
    pub fn currency_mismatch(requested: impl Into<String>, merchant: impl Into<String>) -> Self {
        Self::CurrencyMismatch {
            requested: requested.into(),
            merchant: merchant.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_offending_value() {
        let error = PaytermError::invalid_currency_code("EURO");
        assert!(error.to_string().contains("EURO"));

        let error = PaytermError::ForeignTransactionIdTooLong { length: 200 };
        assert!(error.to_string().contains("200"));

        let error = PaytermError::currency_mismatch("USD", "EUR");
        let message = error.to_string();
        assert!(message.contains("USD"));
        assert!(message.contains("EUR"));
    }
}
