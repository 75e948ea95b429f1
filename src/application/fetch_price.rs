use crate::domain::error::DomainError;
use crate::domain::ports::price_provider::{PriceProvider, ProviderError};
use crate::domain::values::asset_class::AssetClass;
use std::sync::Arc;
use tracing::{info, warn};

pub struct FetchPriceUseCase {
    provider: Arc<dyn PriceProvider>,
}

impl FetchPriceUseCase {
    pub fn new(provider: Arc<dyn PriceProvider>) -> Self {
        Self { provider }
    }

    /// One best-effort lookup. A non-positive quote counts as missing.
    pub async fn execute(&self, asset_class: AssetClass, ticker: &str) -> Result<f64, DomainError> {
        let ticker = ticker.trim();
        if ticker.is_empty() {
            return Err(DomainError::InvalidInput("ticker must not be empty".into()));
        }

        match self.provider.get_last_price(asset_class, ticker).await {
            Ok(price) if price.is_finite() && price > 0.0 => {
                info!(provider = self.provider.name(), ticker, price, "fetched last price");
                Ok(price)
            }
            Ok(price) => Err(ProviderError::NotFound(format!(
                "{ticker}: provider returned {price}"
            ))
            .into()),
            Err(e) => {
                warn!(provider = self.provider.name(), ticker, error = %e, "price lookup failed");
                Err(e.into())
            }
        }
    }
}
