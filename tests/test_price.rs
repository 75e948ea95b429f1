mod common;

use capintel::domain::error::DomainError;
use capintel::domain::ports::clock::FixedClock;
use capintel::domain::ports::price_provider::ProviderError;
use capintel::domain::values::asset_class::AssetClass;
use capintel::domain::values::horizon::Horizon;
use capintel::domain::values::signal_request::SignalRequest;
use capintel::CapIntel;
use common::{at, StubProvider};
use std::sync::Arc;

fn with_provider(provider: Arc<StubProvider>) -> CapIntel {
    CapIntel::with_providers(provider, Arc::new(FixedClock(at(2026, 1, 15, 12, 0, 0))))
}

#[tokio::test]
async fn test_last_price_from_provider() {
    let provider = Arc::new(StubProvider::with_price(65_000.0));
    let ci = with_provider(provider.clone());
    let price = ci.last_price(AssetClass::Crypto, "BTCUSDT").await.unwrap();
    assert_eq!(price, 65_000.0);
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_provider_error_is_surfaced() {
    let ci = with_provider(Arc::new(StubProvider::failing()));
    let err = ci.last_price(AssetClass::Equity, "AAPL").await.unwrap_err();
    assert!(matches!(err, DomainError::Provider(ProviderError::Network(_))));
    assert!(err.to_string().contains("AAPL"));
}

#[tokio::test]
async fn test_zero_quote_is_rejected() {
    let ci = with_provider(Arc::new(StubProvider::with_price(0.0)));
    let err = ci.last_price(AssetClass::Equity, "AAPL").await.unwrap_err();
    assert!(matches!(err, DomainError::Provider(ProviderError::NotFound(_))));
}

#[tokio::test]
async fn test_blank_ticker_skips_provider() {
    let provider = Arc::new(StubProvider::with_price(1.0));
    let ci = with_provider(provider.clone());
    assert!(ci.last_price(AssetClass::Crypto, "  ").await.is_err());
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_signal_fetches_price_when_missing() {
    let provider = Arc::new(StubProvider::with_price(230.0));
    let ci = with_provider(provider.clone());
    let request = SignalRequest::new("AAPL", AssetClass::Equity, Horizon::Swing).unwrap();

    let fetched = ci.signal(&request, None).await.unwrap();
    let manual = ci.build_signal(&request, 230.0).unwrap();
    assert_eq!(fetched, manual);
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_manual_price_works_when_provider_is_down() {
    let provider = Arc::new(StubProvider::failing());
    let ci = with_provider(provider.clone());
    let request = SignalRequest::new("AAPL", AssetClass::Equity, Horizon::Swing).unwrap();

    assert!(ci.signal(&request, None).await.is_err());
    let signal = ci.signal(&request, Some(230.0)).await.unwrap();
    assert_eq!(signal.ticker(), "AAPL");
    assert_eq!(provider.call_count(), 1);
}
