use crate::infrastructure::providers::polygon::DEFAULT_BASE_URL;
use std::env;
use std::time::Duration;

/// Keys checked in order for the Polygon credential.
const API_KEY_VARS: [&str; 3] = ["POLYGON_API_KEY", "POLYGON_KEY", "API_KEY"];

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Runtime configuration read from the environment (and `.env`, loaded by the binary).
#[derive(Debug, Clone)]
pub struct Config {
    pub polygon_api_key: Option<String>,
    pub polygon_base_url: String,
    pub http_timeout: Duration,
}

fn env_opt(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn env_u64(name: &str, default: u64) -> u64 {
    env_opt(name)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            polygon_api_key: API_KEY_VARS.iter().find_map(|name| env_opt(name)),
            polygon_base_url: env_opt("CAPINTEL_POLYGON_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            http_timeout: Duration::from_secs(env_u64("CAPINTEL_HTTP_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS).max(1)),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            polygon_api_key: None,
            polygon_base_url: DEFAULT_BASE_URL.to_string(),
            http_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
