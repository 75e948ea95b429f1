//! Shared test helpers.
#![allow(dead_code)]

use async_trait::async_trait;
use capintel::domain::entities::signal::Signal;
use capintel::domain::ports::clock::FixedClock;
use capintel::domain::ports::price_provider::{PriceProvider, ProviderError};
use capintel::domain::values::action::Action;
use capintel::domain::values::asset_class::AssetClass;
use capintel::domain::values::horizon::Horizon;
use capintel::domain::values::signal_request::SignalRequest;
use capintel::CapIntel;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Answers every lookup with the same price, or with an error when `price` is `None`.
pub struct StubProvider {
    pub price: Option<f64>,
    pub calls: AtomicUsize,
}

impl StubProvider {
    pub fn with_price(price: f64) -> Self {
        Self {
            price: Some(price),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            price: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PriceProvider for StubProvider {
    fn name(&self) -> &str {
        "stub"
    }

    async fn get_last_price(&self, _asset_class: AssetClass, ticker: &str) -> Result<f64, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.price
            .ok_or_else(|| ProviderError::Network(format!("stub has no price for {ticker}")))
    }
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
}

pub fn setup_at(now: DateTime<Utc>) -> CapIntel {
    CapIntel::with_providers(Arc::new(StubProvider::with_price(100.0)), Arc::new(FixedClock(now)))
}

pub fn setup() -> CapIntel {
    setup_at(at(2026, 1, 15, 12, 0, 0))
}

/// First synthetic ticker whose signal today has `action`.
pub fn find_signal(ci: &CapIntel, action: Action, asset_class: AssetClass, horizon: Horizon, price: f64) -> Signal {
    for i in 0..1000 {
        let request = SignalRequest::new(&format!("T{i}"), asset_class, horizon).unwrap();
        let signal = ci.build_signal(&request, price).unwrap();
        if signal.action() == action {
            return signal;
        }
    }
    panic!("no {action} signal among 1000 tickers");
}
