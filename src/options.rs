//! Payment method restrictions and checkout screen flags

use std::ops::{BitAnd, BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

/// Restrictions on the payment methods offered during a checkout
///
/// The zero value [`PaymentOptions::ANY`] places no restriction on the
/// payment method. Individual flags combine with `|`:
///
/// ```
/// use payterm::PaymentOptions;
///
/// let options = PaymentOptions::CARD_READER | PaymentOptions::MOBILE_PAYMENT;
/// assert!(options.contains(PaymentOptions::CARD_READER));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentOptions(u32);

impl PaymentOptions {
    /// No restriction on the payment method
    pub const ANY: PaymentOptions = PaymentOptions(0);
    /// Offer card reader payments
    pub const CARD_READER: PaymentOptions = PaymentOptions(1);
    /// Offer mobile payments
    pub const MOBILE_PAYMENT: PaymentOptions = PaymentOptions(1 << 1);

    /// Raw bit representation of the options
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Reconstruct options from a raw bit representation, dropping unknown bits
    pub const fn from_bits_truncate(bits: u32) -> Self {
        PaymentOptions(bits & (Self::CARD_READER.0 | Self::MOBILE_PAYMENT.0))
    }

    /// Whether no restriction is placed on the payment method
    pub const fn is_any(self) -> bool {
        self.0 == 0
    }

    /// Whether every flag in `other` is also set in `self`
    pub const fn contains(self, other: PaymentOptions) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether a checkout restricted to these options may use `method`
    ///
    /// An unrestricted request allows every method.
    pub const fn allows(self, method: PaymentOptions) -> bool {
        self.is_any() || self.0 & method.0 != 0
    }
}

impl BitOr for PaymentOptions {
    type Output = PaymentOptions;

    fn bitor(self, rhs: PaymentOptions) -> PaymentOptions {
        PaymentOptions(self.0 | rhs.0)
    }
}

impl BitOrAssign for PaymentOptions {
    fn bitor_assign(&mut self, rhs: PaymentOptions) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for PaymentOptions {
    type Output = PaymentOptions;

    fn bitand(self, rhs: PaymentOptions) -> PaymentOptions {
        PaymentOptions(self.0 & rhs.0)
    }
}

/// Screens that may be bypassed during the checkout flow
///
/// Defaults to [`SkipScreenOptions::None`]. When set to
/// [`SkipScreenOptions::SuccessScreen`], the checkout is dismissed without
/// further user interaction once the payment succeeds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SkipScreenOptions {
    /// Show every screen
    #[default]
    None,
    /// Skip the success confirmation screen
    SuccessScreen,
}
