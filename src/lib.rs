pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logger;

use crate::application::backtest::{toy_backtest, BacktestParams};
use crate::application::fetch_price::FetchPriceUseCase;
use crate::application::generate_signal::GenerateSignalUseCase;
use crate::config::Config;
use crate::domain::entities::backtest_result::BacktestResult;
use crate::domain::entities::signal::Signal;
use crate::domain::error::DomainError;
use crate::domain::ports::clock::{Clock, SystemClock};
use crate::domain::ports::price_provider::PriceProvider;
use crate::domain::values::asset_class::AssetClass;
use crate::domain::values::signal_request::SignalRequest;
use crate::infrastructure::providers::polygon::PolygonProvider;
use std::sync::Arc;

pub struct CapIntel {
    fetch_price_uc: FetchPriceUseCase,
    generate_signal_uc: GenerateSignalUseCase,
}

impl CapIntel {
    /// Polygon prices and the system clock.
    pub fn new(config: &Config) -> Result<Self, DomainError> {
        Ok(Self::with_providers(
            Arc::new(PolygonProvider::from_config(config)?),
            Arc::new(SystemClock),
        ))
    }

    pub fn with_providers(provider: Arc<dyn PriceProvider>, clock: Arc<dyn Clock>) -> Self {
        Self {
            fetch_price_uc: FetchPriceUseCase::new(provider),
            generate_signal_uc: GenerateSignalUseCase::new(clock),
        }
    }

    pub async fn last_price(&self, asset_class: AssetClass, ticker: &str) -> Result<f64, DomainError> {
        self.fetch_price_uc.execute(asset_class, ticker).await
    }

    pub fn build_signal(&self, request: &SignalRequest, last_price: f64) -> Result<Signal, DomainError> {
        self.generate_signal_uc.execute(request, last_price)
    }

    /// Build a signal, looking the price up when none is given.
    pub async fn signal(&self, request: &SignalRequest, price: Option<f64>) -> Result<Signal, DomainError> {
        let last_price = match price {
            Some(p) => p,
            None => self.last_price(request.asset_class(), request.ticker()).await?,
        };
        self.build_signal(request, last_price)
    }

    pub fn backtest(&self, signal: &Signal, params: &BacktestParams) -> Result<BacktestResult, DomainError> {
        toy_backtest(signal, params)
    }
}
