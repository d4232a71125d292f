//! Comprehensive error handling tests for payterm

use payterm::PaytermError;
use rust_decimal::Decimal;

#[test]
fn test_empty_currency_code_error() {
    let error = PaytermError::EmptyCurrencyCode;

    let error_msg = error.to_string();
    assert!(
        error_msg.contains("Currency code cannot be empty"),
        "Error message MUST say the currency code is empty - actual: {}",
        error_msg
    );
}

#[test]
fn test_invalid_currency_code_error() {
    let error = PaytermError::invalid_currency_code("euros");

    let error_msg = error.to_string();
    assert!(
        error_msg.contains("Invalid currency code"),
        "Error message MUST contain 'Invalid currency code' - actual: {}",
        error_msg
    );
    assert!(
        error_msg.contains("euros"),
        "Error message MUST contain the rejected code - actual: {}",
        error_msg
    );
}

#[test]
fn test_negative_total_amount_error() {
    let error = PaytermError::NegativeTotalAmount {
        amount: Decimal::new(-1050, 2),
    };

    let error_msg = error.to_string();
    assert!(
        error_msg.contains("Total amount cannot be negative"),
        "Error message MUST contain 'Total amount cannot be negative' - actual: {}",
        error_msg
    );
    assert!(
        error_msg.contains("-10.50"),
        "Error message MUST contain the offending amount - actual: {}",
        error_msg
    );
}

#[test]
fn test_non_positive_tip_amount_error() {
    let error = PaytermError::NonPositiveTipAmount {
        amount: Decimal::ZERO,
    };

    let error_msg = error.to_string();
    assert!(
        error_msg.contains("Tip amount must be greater than zero"),
        "Error message MUST contain 'Tip amount must be greater than zero' - actual: {}",
        error_msg
    );
}

#[test]
fn test_foreign_transaction_id_too_long_error() {
    let error = PaytermError::ForeignTransactionIdTooLong { length: 301 };

    let error_msg = error.to_string();
    assert!(
        error_msg.contains("128"),
        "Error message MUST name the 128 character limit - actual: {}",
        error_msg
    );
    assert!(
        error_msg.contains("301"),
        "Error message MUST contain the actual length - actual: {}",
        error_msg
    );
}

#[test]
fn test_foreign_transaction_id_charset_error() {
    let error = PaytermError::ForeignTransactionIdNotPrintableAscii;

    let error_msg = error.to_string();
    assert!(
        error_msg.contains("printable ASCII"),
        "Error message MUST mention printable ASCII - actual: {}",
        error_msg
    );
}

#[test]
fn test_currency_mismatch_error() {
    let error = PaytermError::currency_mismatch("USD", "EUR");

    let error_msg = error.to_string();
    assert!(
        error_msg.contains("Currency mismatch"),
        "Error message MUST contain 'Currency mismatch' - actual: {}",
        error_msg
    );
    assert!(
        error_msg.contains("USD") && error_msg.contains("EUR"),
        "Error message MUST name both currencies - actual: {}",
        error_msg
    );
}

#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<payterm::CheckoutRequest>("{not json").unwrap_err();
    let error: PaytermError = json_error.into();

    let error_msg = error.to_string();
    assert!(
        error_msg.contains("JSON error"),
        "Error message MUST contain 'JSON error' - actual: {}",
        error_msg
    );
}

#[test]
fn test_errors_implement_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
    assert_error::<PaytermError>();
}
