use crate::domain::values::asset_class::AssetClass;
use async_trait::async_trait;
use thiserror::Error;

/// Why a price lookup failed. Every variant carries a message fit for display.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Price API key is not set. Put POLYGON_API_KEY in the environment or .env")]
    MissingCredential,

    #[error("HTTP client setup failed: {0}")]
    Client(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Cannot parse crypto pair from '{0}'")]
    UnparseablePair(String),

    #[error("No price for {0}")]
    NotFound(String),
}

/// Source of the last traded price for a ticker.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &str;

    async fn get_last_price(&self, asset_class: AssetClass, ticker: &str) -> Result<f64, ProviderError>;
}
