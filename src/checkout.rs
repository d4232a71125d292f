//! Checkout request construction and validation

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::currency;
use crate::error::{PaytermError, Result};
use crate::merchant::Merchant;
use crate::options::{PaymentOptions, SkipScreenOptions};

/// Maximum length of a foreign transaction ID in characters
pub const FOREIGN_TRANSACTION_ID_MAX_LEN: usize = 128;

/// Encapsulates all information needed to start a checkout
///
/// A request is created with [`CheckoutRequest::new`], optionally refined
/// with the builder methods, and then handed to the checkout engine. The
/// total amount, title, currency code and payment options are fixed at
/// construction; the foreign transaction ID, tip amount and skip screen
/// options may still be changed afterwards.
///
/// ```
/// use payterm::{currency, CheckoutRequest, PaymentOptions};
/// use rust_decimal::Decimal;
///
/// let mut request = CheckoutRequest::new(Decimal::new(1250, 2), currency::EUR)?
///     .with_title("Flat white")
///     .with_payment_options(PaymentOptions::CARD_READER);
/// request.set_tip_amount(Decimal::new(150, 2))?;
/// # Ok::<(), payterm::PaytermError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// The total amount to be charged to the customer
    #[serde(rename = "totalAmount")]
    total_amount: Decimal,
    /// Title shown in the merchant's history and on customer receipts
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    /// ISO 4217 code of the currency the total is charged in
    #[serde(rename = "currencyCode")]
    currency_code: String,
    /// Restrictions on the payment methods offered
    #[serde(rename = "paymentOptions", default)]
    payment_options: PaymentOptions,
    /// Externally assigned transaction identifier
    #[serde(rename = "foreignTransactionId", skip_serializing_if = "Option::is_none")]
    foreign_transaction_id: Option<String>,
    /// Additional tip charged on top of the total amount
    #[serde(rename = "tipAmount", skip_serializing_if = "Option::is_none")]
    tip_amount: Option<Decimal>,
    /// Screens bypassed during the checkout flow
    #[serde(rename = "skipScreenOptions", default)]
    skip_screen_options: SkipScreenOptions,
}

impl CheckoutRequest {
    /// Create a new checkout request
    ///
    /// The currency code has to match the currency of the merchant account
    /// the checkout runs against. Payment options default to
    /// [`PaymentOptions::ANY`]; use
    /// [`with_payment_options`](Self::with_payment_options) to restrict the
    /// payment methods offered.
    ///
    /// Fails with [`PaytermError::EmptyCurrencyCode`] when the currency
    /// code is empty.
    pub fn new(total_amount: Decimal, currency_code: impl Into<String>) -> Result<Self> {
        let currency_code = currency_code.into();
        if currency_code.is_empty() {
            return Err(PaytermError::EmptyCurrencyCode);
        }
        Ok(Self {
            total_amount,
            title: None,
            currency_code,
            payment_options: PaymentOptions::ANY,
            foreign_transaction_id: None,
            tip_amount: None,
            skip_screen_options: SkipScreenOptions::None,
        })
    }

    /// Set the title shown in the merchant's history and on customer receipts
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Restrict the payment methods offered during the checkout
    pub fn with_payment_options(mut self, payment_options: PaymentOptions) -> Self {
        self.payment_options = payment_options;
        self
    }

    /// The total amount to be charged to the customer
    pub fn total_amount(&self) -> Decimal {
        self.total_amount
    }

    /// Title shown in the merchant's history and on customer receipts
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// ISO 4217 code of the currency the total is charged in
    pub fn currency_code(&self) -> &str {
        &self.currency_code
    }

    /// Restrictions on the payment methods offered
    pub fn payment_options(&self) -> PaymentOptions {
        self.payment_options
    }

    /// Externally assigned transaction identifier
    pub fn foreign_transaction_id(&self) -> Option<&str> {
        self.foreign_transaction_id.as_deref()
    }

    /// Additional tip charged on top of the total amount
    pub fn tip_amount(&self) -> Option<Decimal> {
        self.tip_amount
    }

    /// Screens bypassed during the checkout flow
    pub fn skip_screen_options(&self) -> SkipScreenOptions {
        self.skip_screen_options
    }

    /// The full amount the customer is charged, including any tip
    pub fn total_with_tip(&self) -> Decimal {
        self.total_amount + self.tip_amount.unwrap_or(Decimal::ZERO)
    }

    /// Associate an externally assigned transaction identifier with this request
    ///
    /// The identifier has to be unique within the merchant account it is
    /// used with; uniqueness is checked by the payment service, not here.
    /// Use [`generate_foreign_transaction_id`](Self::generate_foreign_transaction_id)
    /// when no identifier scheme of your own is in place.
    ///
    /// Fails when the identifier is longer than
    /// [`FOREIGN_TRANSACTION_ID_MAX_LEN`] characters or contains characters
    /// outside printable ASCII.
    pub fn set_foreign_transaction_id(&mut self, id: impl Into<String>) -> Result<()> {
        let id = id.into();
        validate_foreign_transaction_id(&id)?;
        self.foreign_transaction_id = Some(id);
        Ok(())
    }

    /// Remove the foreign transaction identifier
    pub fn clear_foreign_transaction_id(&mut self) {
        self.foreign_transaction_id = None;
    }

    /// Set an additional tip to be charged on top of the total amount
    ///
    /// Fails unless the tip is strictly greater than zero.
    pub fn set_tip_amount(&mut self, tip_amount: Decimal) -> Result<()> {
        if tip_amount <= Decimal::ZERO {
            return Err(PaytermError::NonPositiveTipAmount { amount: tip_amount });
        }
        self.tip_amount = Some(tip_amount);
        Ok(())
    }

    /// Remove the tip
    pub fn clear_tip_amount(&mut self) {
        self.tip_amount = None;
    }

    /// Choose which screens the checkout flow bypasses
    pub fn set_skip_screen_options(&mut self, skip_screen_options: SkipScreenOptions) {
        self.skip_screen_options = skip_screen_options;
    }

    /// Generate an identifier suitable for use as a foreign transaction ID
    pub fn generate_foreign_transaction_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Validate the request before handing it to the checkout engine
    ///
    /// Checks everything that can be checked without the payment service:
    /// the shape of the currency code, the sign of the amounts and the
    /// foreign transaction ID constraints. Uniqueness of the foreign
    /// transaction ID and whether the merchant account accepts the
    /// currency are checked by the service during the checkout.
    pub fn validate(&self) -> Result<()> {
        currency::validate_code(&self.currency_code)?;
        if self.total_amount < Decimal::ZERO {
            return Err(PaytermError::NegativeTotalAmount {
                amount: self.total_amount,
            });
        }
        if let Some(tip_amount) = self.tip_amount {
            if tip_amount <= Decimal::ZERO {
                return Err(PaytermError::NonPositiveTipAmount { amount: tip_amount });
            }
        }
        if let Some(id) = &self.foreign_transaction_id {
            validate_foreign_transaction_id(id)?;
        }
        Ok(())
    }

    /// Validate the request against the merchant it will be charged to
    ///
    /// Runs [`validate`](Self::validate) and additionally checks that the
    /// request currency matches the merchant's account currency, the
    /// mismatch the payment service would otherwise reject at checkout
    /// time.
    pub fn validate_for_merchant(&self, merchant: &Merchant) -> Result<()> {
        self.validate()?;
        if self.currency_code != merchant.currency_code() {
            warn!(
                "Checkout currency {} does not match merchant currency {}",
                self.currency_code,
                merchant.currency_code()
            );
            return Err(PaytermError::currency_mismatch(
                &self.currency_code,
                merchant.currency_code(),
            ));
        }
        Ok(())
    }

    /// Decode a request from its JSON representation
    ///
    /// The decoded request is validated before it is returned.
    pub fn from_json(json: &str) -> Result<Self> {
        let request: CheckoutRequest = serde_json::from_str(json)?;
        request.validate()?;
        Ok(request)
    }

    /// Encode the request as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a base64-encoded request
    ///
    /// The decoded request is validated before it is returned.
    pub fn from_base64(encoded: &str) -> Result<Self> {
        use base64::{engine::general_purpose, Engine as _};
        let decoded = general_purpose::STANDARD.decode(encoded)?;
        let request: CheckoutRequest = serde_json::from_slice(&decoded)?;
        request.validate()?;
        Ok(request)
    }

    /// Encode the request to base64 for hand-off across a process boundary
    pub fn to_base64(&self) -> Result<String> {
        use base64::{engine::general_purpose, Engine as _};
        let json = serde_json::to_string(self)?;
        Ok(general_purpose::STANDARD.encode(json))
    }
}

/// Check the locally enforceable constraints on a foreign transaction ID
fn validate_foreign_transaction_id(id: &str) -> Result<()> {
    if !id.bytes().all(|b| matches!(b, 0x20..=0x7e)) {
        return Err(PaytermError::ForeignTransactionIdNotPrintableAscii);
    }
    if id.len() > FOREIGN_TRANSACTION_ID_MAX_LEN {
        return Err(PaytermError::ForeignTransactionIdTooLong { length: id.len() });
    }
    Ok(())
}
