//! # payterm - in-person checkout request types
//!
//! Value types used to configure a checkout against the Payterm payment
//! terminal service. This library covers the construction, validation and
//! interchange encoding of [`CheckoutRequest`] objects; the checkout
//! itself (card reader communication, settlement, receipts, UI) is
//! performed by the engine that consumes them.

pub mod checkout;
pub mod currency;
pub mod error;
pub mod merchant;
pub mod options;

// Re-exports for convenience
pub use checkout::{CheckoutRequest, FOREIGN_TRANSACTION_ID_MAX_LEN};
pub use error::{PaytermError, Result};
pub use merchant::Merchant;
pub use options::{PaymentOptions, SkipScreenOptions};

/// Current version of the payterm library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
