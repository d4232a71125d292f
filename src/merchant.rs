//! Merchant account information

use serde::{Deserialize, Serialize};

/// The merchant account a checkout is processed against
///
/// Carries the subset of account information a client needs ahead of a
/// checkout. The authoritative record lives with the payment service,
/// which also decides which currencies the account may settle in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Merchant {
    /// Identifier of the merchant account
    #[serde(rename = "merchantCode")]
    merchant_code: String,
    /// ISO 4217 code of the currency the account settles in
    #[serde(rename = "currencyCode")]
    currency_code: String,
}

impl Merchant {
    /// Create a new merchant account description
    pub fn new(merchant_code: impl Into<String>, currency_code: impl Into<String>) -> Self {
        Self {
            merchant_code: merchant_code.into(),
            currency_code: currency_code.into(),
        }
    }

    /// Identifier of the merchant account
    pub fn merchant_code(&self) -> &str {
        &self.merchant_code
    }

    /// ISO 4217 code of the currency the account settles in
    pub fn currency_code(&self) -> &str {
        &self.currency_code
    }
}
