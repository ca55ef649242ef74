//! pump.fun coin lookup.

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::settings::{endpoint, MarketDataConfig};
use super::{http_client, scalar_text};
use crate::domain::MarketMeta;
use crate::error::Result;
use crate::port::outbound::market::MarketDataSource;

/// `GET {base}/{mint}` response.
#[derive(Debug, Deserialize)]
pub struct Coin {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub usd_market_cap: Option<Value>,
}

impl From<Coin> for MarketMeta {
    /// pump.fun has no spot price, so `price_usd` stays unavailable.
    fn from(coin: Coin) -> Self {
        Self {
            name: coin.name,
            symbol: coin.symbol,
            market_cap_usd: coin.usd_market_cap.as_ref().and_then(scalar_text),
            price_usd: None,
        }
    }
}

/// Parse a pump.fun body. Empty or non-object bodies mean "unknown coin".
///
/// # Errors
///
/// Returns an error when the body is not valid JSON.
pub fn parse_coin(body: &str) -> Result<Option<MarketMeta>> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    let value: Value = serde_json::from_str(body)?;
    if !value.is_object() {
        return Ok(None);
    }
    let coin: Coin = serde_json::from_value(value)?;
    Ok(Some(coin.into()))
}

/// pump.fun market data source.
pub struct PumpFun {
    http: HttpClient,
    base_url: String,
}

impl PumpFun {
    #[must_use]
    pub fn new(config: &MarketDataConfig) -> Self {
        Self {
            http: http_client(config),
            base_url: config.pumpfun_url.clone(),
        }
    }
}

#[async_trait]
impl MarketDataSource for PumpFun {
    fn name(&self) -> &'static str {
        "pumpfun"
    }

    async fn lookup(&self, mint: &str) -> Result<Option<MarketMeta>> {
        let url = endpoint(&self.base_url, mint);
        debug!(url = %url, "Fetching pump.fun coin");

        let body = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        parse_coin(&body)
    }
}
