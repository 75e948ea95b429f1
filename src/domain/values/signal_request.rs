use crate::domain::error::DomainError;
use crate::domain::values::asset_class::AssetClass;
use crate::domain::values::horizon::Horizon;

/// What the user asked a signal for. The ticker is trimmed and upper-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalRequest {
    ticker: String,
    asset_class: AssetClass,
    horizon: Horizon,
}

impl SignalRequest {
    pub fn new(ticker: &str, asset_class: AssetClass, horizon: Horizon) -> Result<Self, DomainError> {
        let ticker = ticker.trim().to_uppercase();
        if ticker.is_empty() {
            return Err(DomainError::InvalidInput("ticker must not be empty".into()));
        }
        Ok(Self {
            ticker,
            asset_class,
            horizon,
        })
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn asset_class(&self) -> AssetClass {
        self.asset_class
    }

    pub fn horizon(&self) -> Horizon {
        self.horizon
    }

    /// `TICKER-asset_class-horizon`, the per-day seed key.
    pub fn seed_key(&self) -> String {
        format!("{}-{}-{}", self.ticker, self.asset_class, self.horizon)
    }
}
