use crate::domain::ports::price_provider::ProviderError;

/// Quote currencies recognised as a ticker suffix, longest-first where they overlap.
const KNOWN_QUOTES: [&str; 5] = ["USDT", "USD", "EUR", "GBP", "RUB"];

/// Split a crypto ticker into `(base, quote)`.
///
/// Accepts `BTCUSD`, `BTC/USDT`, `BTCUSDT`, `X:BTCUSD`, `btc-usd` and similar.
pub fn normalize_crypto_pair(ticker: &str) -> Result<(String, String), ProviderError> {
    let cleaned = ticker
        .trim()
        .to_uppercase()
        .replace("X:", "")
        .replace([':', '-', '_'], "");

    if cleaned.contains('/') {
        let mut parts = cleaned.split('/');
        return match (parts.next(), parts.next(), parts.next()) {
            (Some(base), Some(quote), None) if !base.is_empty() && !quote.is_empty() => {
                Ok((base.to_string(), quote.to_string()))
            }
            _ => Err(ProviderError::UnparseablePair(ticker.to_string())),
        };
    }

    for quote in KNOWN_QUOTES {
        if let Some(base) = cleaned.strip_suffix(quote) {
            if !base.is_empty() {
                return Ok((base.to_string(), quote.to_string()));
            }
        }
    }

    if cleaned.len() >= 6 && cleaned.is_ascii() {
        let (base, quote) = cleaned.split_at(3);
        return Ok((base.to_string(), quote.to_string()));
    }

    Err(ProviderError::UnparseablePair(ticker.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(t: &str) -> (String, String) {
        normalize_crypto_pair(t).unwrap()
    }

    #[test]
    fn test_suffix_forms() {
        assert_eq!(pair("BTCUSD"), ("BTC".into(), "USD".into()));
        assert_eq!(pair("BTCUSDT"), ("BTC".into(), "USDT".into()));
        assert_eq!(pair("ethEUR"), ("ETH".into(), "EUR".into()));
        assert_eq!(pair("SOLRUB"), ("SOL".into(), "RUB".into()));
    }

    #[test]
    fn test_prefixed_and_separated_forms() {
        assert_eq!(pair("X:BTCUSD"), ("BTC".into(), "USD".into()));
        assert_eq!(pair("btc-usd"), ("BTC".into(), "USD".into()));
        assert_eq!(pair("DOGE_GBP"), ("DOGE".into(), "GBP".into()));
    }

    #[test]
    fn test_slash_form() {
        assert_eq!(pair("BTC/USDT"), ("BTC".into(), "USDT".into()));
        assert_eq!(pair("x:eth/btc"), ("ETH".into(), "BTC".into()));
    }

    #[test]
    fn test_three_three_fallback() {
        assert_eq!(pair("ETHBTC"), ("ETH".into(), "BTC".into()));
    }

    #[test]
    fn test_unparseable() {
        for bad in ["USD", "BTC", "", "A/B/C", "/USD", "BTC/"] {
            assert!(
                matches!(normalize_crypto_pair(bad), Err(ProviderError::UnparseablePair(_))),
                "{bad} should not parse"
            );
        }
    }
}
