#![cfg(feature = "client")]

use std::time::Duration;

use gutschein::client::*;
use gutschein::core::Discount;
use rust_decimal_macros::dec;
use url::Url;

fn test_client() -> VoucherClient {
    VoucherClient::builder("app-id", "client-token")
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap()
}

// ---------------------------------------------------------------------------
// Fail-fast paths (no network involved)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_code_fails_fast() {
    let err = test_client().validate("").await.unwrap_err();
    assert!(matches!(err, ValidateError::MissingCode));
}

#[tokio::test]
async fn whitespace_only_code_fails_fast() {
    let err = test_client().validate(" \r\n\t ").await.unwrap_err();
    assert!(matches!(err, ValidateError::MissingCode));
}

#[tokio::test]
async fn empty_credentials_fail_fast() {
    let client = VoucherClient::builder("", "").build().unwrap();
    let err = client.validate("SUMMER-10").await.unwrap_err();
    assert!(matches!(err, ValidateError::MissingConfiguration));
}

#[tokio::test]
async fn one_credential_is_enough_to_pass_the_guard() {
    // Only both-empty counts as missing configuration; a lone token
    // reaches the code check.
    let client = VoucherClient::builder("", "client-token").build().unwrap();
    let err = client.validate("  ").await.unwrap_err();
    assert!(matches!(err, ValidateError::MissingCode));
}

// ---------------------------------------------------------------------------
// Client construction & identity
// ---------------------------------------------------------------------------

#[test]
fn set_identity_replaces_tracking_id() {
    let mut client = test_client();
    assert!(client.config().tracking_id.is_none());

    client.set_identity("gustav@example.com");
    assert_eq!(client.config().tracking_id.as_deref(), Some("gustav@example.com"));

    client.set_identity("other@example.com");
    assert_eq!(client.config().tracking_id.as_deref(), Some("other@example.com"));
}

#[test]
fn clone_shares_configuration() {
    let client = VoucherClient::builder("app-id", "client-token")
        .tracking_id("gustav@example.com")
        .endpoint(Url::parse("https://bouncer.example.net/v1/validate").unwrap())
        .build()
        .unwrap();
    let clone = client.clone();
    assert_eq!(clone.config().tracking_id, client.config().tracking_id);
    assert_eq!(clone.config().endpoint, client.config().endpoint);
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[test]
fn validation_result_from_wire() {
    let json = r#"{
        "code": "SUMMER-10",
        "valid": true,
        "discount": {"type": "AMOUNT", "amount_off": 500},
        "tracking_id": "gustav@example.com",
        "campaign": "Summer 2026",
        "metadata": {"segment": "returning"}
    }"#;
    let result: ValidationResult = serde_json::from_str(json).unwrap();
    assert!(result.valid);
    assert_eq!(result.voucher.code.as_deref(), Some("SUMMER-10"));
    assert_eq!(result.voucher.campaign.as_deref(), Some("Summer 2026"));
    assert_eq!(
        result.voucher.discount,
        Some(Discount::Amount { amount_off: 500 })
    );
    assert_eq!(result.tracking_id.as_deref(), Some("gustav@example.com"));
    assert!(result.extra.contains_key("metadata"));
}

#[test]
fn validation_result_requires_valid_field() {
    assert!(serde_json::from_str::<ValidationResult>(r#"{"code":"SUMMER-10"}"#).is_err());
}

#[test]
fn validation_result_feeds_pricing() {
    use gutschein::core::calculate_price;

    let json = r#"{"valid":true,"discount":{"type":"PERCENT","percent_off":10}}"#;
    let result: ValidationResult = serde_json::from_str(json).unwrap();
    let price = calculate_price(dec!(100), &result.voucher, None).unwrap();
    assert_eq!(price, dec!(90.00));
}

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

#[test]
fn error_display_fixed_messages() {
    let e = ValidateError::UnexpectedResponse { context: None };
    assert_eq!(e.to_string(), "Unexpected response structure.");

    let e = ValidateError::UnexpectedStatus {
        status: 503,
        body: String::new(),
    };
    assert!(e.to_string().starts_with("Unexpected status code."));
    assert!(e.to_string().contains("503"));

    let e = ValidateError::Network("connection refused".into());
    assert!(e.to_string().contains("connection refused"));
}
