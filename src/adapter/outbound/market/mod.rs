//! Token market data sources.

pub mod dexscreener;
pub mod pumpfun;
pub mod settings;

use reqwest::Client as HttpClient;
use serde_json::Value;
use tracing::warn;

pub use dexscreener::DexScreener;
pub use pumpfun::PumpFun;
pub use settings::MarketDataConfig;

fn http_client(config: &MarketDataConfig) -> HttpClient {
    HttpClient::builder()
        .timeout(config.timeout())
        .build()
        .unwrap_or_else(|err| {
            warn!(error = %err, "Failed to build HTTP client, using defaults");
            HttpClient::new()
        })
}

/// Render a JSON string or number as text. Anything else counts as missing.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Like [`scalar_text`], but empty strings and zero also count as missing.
fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        _ => scalar_text(value),
    }
}
