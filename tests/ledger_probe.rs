//! Ledger client tests against a mock TronGrid API.

use std::time::Duration;

use tron_scanner::config::LedgerConfig;
use tron_scanner::ledger::{Balance, BalanceOutcome, BalanceProbe, LedgerClient, LedgerError};

mod common;

const ADDRESS: &str = "TPFaa9mnTi9s5YJavKnqHNkBdYH2C8KGBM";

fn client_for(base_url: String) -> LedgerClient {
    LedgerClient::new(LedgerConfig {
        base_url,
        timeout_secs: 2,
        system_proxy: false,
        ..LedgerConfig::default()
    })
    .unwrap()
}

#[tokio::test]
async fn test_empty_data_is_zero() {
    let ledger = common::start_fixed_ledger(200, r#"{"data": [], "success": true, "meta": {}}"#).await;
    let client = client_for(ledger.base_url());

    assert_eq!(client.probe(ADDRESS).await, BalanceOutcome::Zero);
    assert_eq!(ledger.request_count(), 1);
}

#[tokio::test]
async fn test_missing_data_is_zero() {
    let ledger = common::start_fixed_ledger(200, r#"{"success": true}"#).await;
    let client = client_for(ledger.base_url());

    assert_eq!(client.probe(ADDRESS).await, BalanceOutcome::Zero);
}

#[tokio::test]
async fn test_balance_is_converted_from_sun() {
    let ledger = common::start_fixed_ledger(200, r#"{"data":[{"balance": 5000000}]}"#).await;
    let client = client_for(ledger.base_url());

    let outcome = client.probe(ADDRESS).await;
    assert_eq!(outcome, BalanceOutcome::Amount(Balance::from_sun(5_000_000)));
    assert!(outcome.is_funded());
    if let BalanceOutcome::Amount(balance) = outcome {
        assert_eq!(balance.as_trx(), 5.0);
    }
}

#[tokio::test]
async fn test_server_error_is_transient() {
    let ledger = common::start_fixed_ledger(500, "upstream exploded").await;
    let client = client_for(ledger.base_url());

    match client.probe(ADDRESS).await {
        BalanceOutcome::TransientError(detail) => assert!(detail.contains("500")),
        other => panic!("expected transient error, got {:?}", other),
    }

    let err = client.account_balance(ADDRESS).await.unwrap_err();
    assert!(matches!(err, LedgerError::Status(500)));
}

#[tokio::test]
async fn test_rate_limited_is_transient() {
    let ledger = common::start_fixed_ledger(429, r#"{"Error": "rate limited"}"#).await;
    let client = client_for(ledger.base_url());

    assert!(matches!(client.probe(ADDRESS).await, BalanceOutcome::TransientError(_)));
}

#[tokio::test]
async fn test_malformed_body_is_transient() {
    let ledger = common::start_fixed_ledger(200, "<html>maintenance</html>").await;
    let client = client_for(ledger.base_url());

    match client.probe(ADDRESS).await {
        BalanceOutcome::TransientError(detail) => assert!(detail.contains("malformed")),
        other => panic!("expected transient error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_slow_api_times_out() {
    let ledger = common::start_programmable_ledger(|_| async {
        tokio::time::sleep(Duration::from_secs(5)).await;
        (200, r#"{"data": []}"#.to_string())
    })
    .await;
    let client = LedgerClient::new(LedgerConfig {
        base_url: ledger.base_url(),
        timeout_secs: 1,
        system_proxy: false,
        ..LedgerConfig::default()
    })
    .unwrap();

    let started = std::time::Instant::now();
    let err = client.account_balance(ADDRESS).await.unwrap_err();

    assert!(matches!(err, LedgerError::Timeout(1)));
    assert!(started.elapsed() < Duration::from_secs(3));
}

#[tokio::test]
async fn test_request_shape() {
    let ledger = common::start_fixed_ledger(200, r#"{"data": []}"#).await;
    let client = LedgerClient::new(LedgerConfig {
        base_url: format!("{}/", ledger.base_url()),
        api_key: Some("secret-key".into()),
        system_proxy: false,
        ..LedgerConfig::default()
    })
    .unwrap();

    client.probe(ADDRESS).await;

    let requests = ledger.requests.lock().unwrap();
    let head = requests[0].1.to_ascii_lowercase();
    assert!(head.starts_with(&format!("get /v1/accounts/{} http/1.1", ADDRESS.to_ascii_lowercase())));
    assert!(head.contains("user-agent: mozilla/5.0"));
    assert!(head.contains("accept: application/json"));
    assert!(head.contains("tron-pro-api-key: secret-key"));
}

#[tokio::test]
async fn test_invalid_address_makes_no_request() {
    let ledger = common::start_fixed_ledger(200, r#"{"data": []}"#).await;
    let client = client_for(ledger.base_url());

    assert_eq!(client.probe("T-too-short").await, BalanceOutcome::InvalidAddress);
    assert_eq!(client.probe("APFaa9mnTi9s5YJavKnqHNkBdYH2C8KGBM").await, BalanceOutcome::InvalidAddress);

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(ledger.request_count(), 0);
}
