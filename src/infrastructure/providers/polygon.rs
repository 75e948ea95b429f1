use super::pair::normalize_crypto_pair;
use crate::config::Config;
use crate::domain::ports::price_provider::{PriceProvider, ProviderError};
use crate::domain::values::asset_class::AssetClass;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "https://api.polygon.io";

/// Last-price lookups against the Polygon REST API.
///
/// Each lookup tries the last-trade endpoint first and falls back to the
/// most recent one-minute aggregate bar.
pub struct PolygonProvider {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct LastTradeResponse {
    results: Option<LastTrade>,
}

#[derive(Debug, Deserialize)]
struct LastTrade {
    #[serde(alias = "p")]
    price: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct LastCryptoResponse {
    last: Option<LastTrade>,
    #[serde(rename = "lastTrade")]
    last_trade: Option<LastTrade>,
}

#[derive(Debug, Deserialize)]
struct AggsResponse {
    results: Option<Vec<AggBar>>,
}

#[derive(Debug, Deserialize)]
struct AggBar {
    c: Option<f64>,
}

fn positive(price: Option<f64>) -> Option<f64> {
    price.filter(|p| p.is_finite() && *p > 0.0)
}

fn parse_last_trade(body: &str) -> Result<Option<f64>, ProviderError> {
    let data: LastTradeResponse =
        serde_json::from_str(body).map_err(|e| ProviderError::Parse(e.to_string()))?;
    Ok(positive(data.results.and_then(|r| r.price)))
}

fn parse_last_crypto(body: &str) -> Result<Option<f64>, ProviderError> {
    let data: LastCryptoResponse =
        serde_json::from_str(body).map_err(|e| ProviderError::Parse(e.to_string()))?;
    let last = positive(data.last.and_then(|t| t.price));
    Ok(last.or_else(|| positive(data.last_trade.and_then(|t| t.price))))
}

fn parse_latest_close(body: &str) -> Result<Option<f64>, ProviderError> {
    let data: AggsResponse =
        serde_json::from_str(body).map_err(|e| ProviderError::Parse(e.to_string()))?;
    Ok(positive(
        data.results
            .unwrap_or_default()
            .first()
            .and_then(|bar| bar.c),
    ))
}

/// `(from, to)` dates covering the last `hours_back` hours.
fn date_range_utc(now: DateTime<Utc>, hours_back: i64) -> (String, String) {
    let start = now - Duration::hours(hours_back);
    (
        start.format("%Y-%m-%d").to_string(),
        now.format("%Y-%m-%d").to_string(),
    )
}

impl PolygonProvider {
    pub fn new(
        api_key: Option<String>,
        base_url: Option<String>,
        timeout: std::time::Duration,
    ) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::Client(e.to_string()))?;
        Ok(Self {
            client,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ProviderError> {
        Self::new(
            config.polygon_api_key.clone(),
            Some(config.polygon_base_url.clone()),
            config.http_timeout,
        )
    }

    fn api_key(&self) -> Result<&str, ProviderError> {
        self.api_key
            .as_deref()
            .ok_or(ProviderError::MissingCredential)
    }

    /// GET `url` and pull a price out of a 200 body with `extract`.
    async fn fetch(
        &self,
        url: &str,
        api_key: &str,
        extract: fn(&str) -> Result<Option<f64>, ProviderError>,
    ) -> Result<f64, ProviderError> {
        debug!(url, "polygon request");
        let resp = self
            .client
            .get(url)
            .bearer_auth(api_key)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if status != StatusCode::OK {
            return Err(ProviderError::Network(format!("Polygon API {status}: {body}")));
        }
        extract(&body)?.ok_or_else(|| ProviderError::NotFound(format!("no price in response from {url}")))
    }

    /// Primary endpoint, then the aggregate-bar fallback.
    async fn fetch_with_fallback(
        &self,
        label: &str,
        primary_url: &str,
        primary_extract: fn(&str) -> Result<Option<f64>, ProviderError>,
        fallback_url: &str,
    ) -> Result<f64, ProviderError> {
        let api_key = self.api_key()?;
        match self.fetch(primary_url, api_key, primary_extract).await {
            Ok(price) => return Ok(price),
            Err(e) => warn!(ticker = label, error = %e, "last-trade lookup failed, trying aggregates"),
        }
        self.fetch(fallback_url, api_key, parse_latest_close)
            .await
            .map_err(|e| ProviderError::NotFound(format!("{label}: {e}")))
    }

    pub async fn last_trade_equity(&self, ticker: &str) -> Result<f64, ProviderError> {
        let ticker = ticker.trim().to_uppercase();
        let (from, to) = date_range_utc(Utc::now(), 48);
        let primary = format!("{}/v2/last/trade/{ticker}", self.base_url);
        let fallback = format!(
            "{}/v2/aggs/ticker/{ticker}/range/1/minute/{from}/{to}?adjusted=true&sort=desc&limit=1",
            self.base_url
        );
        self.fetch_with_fallback(&ticker, &primary, parse_last_trade, &fallback)
            .await
    }

    pub async fn last_trade_crypto(&self, pair: &str) -> Result<f64, ProviderError> {
        let (base, quote) = normalize_crypto_pair(pair)?;
        let (from, to) = date_range_utc(Utc::now(), 72);
        let primary = format!("{}/v1/last/crypto/{base}/{quote}", self.base_url);
        let fallback = format!(
            "{}/v2/aggs/ticker/X:{base}{quote}/range/1/minute/{from}/{to}?sort=desc&limit=1",
            self.base_url
        );
        let label = format!("{base}/{quote}");
        self.fetch_with_fallback(&label, &primary, parse_last_crypto, &fallback)
            .await
    }
}

#[async_trait]
impl PriceProvider for PolygonProvider {
    fn name(&self) -> &str {
        "polygon"
    }

    async fn get_last_price(&self, asset_class: AssetClass, ticker: &str) -> Result<f64, ProviderError> {
        match asset_class {
            AssetClass::Equity => self.last_trade_equity(ticker).await,
            AssetClass::Crypto => self.last_trade_crypto(ticker).await,
        }
    }
}
