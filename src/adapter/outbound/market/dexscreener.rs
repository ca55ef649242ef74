//! DexScreener token lookup.

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::settings::{endpoint, MarketDataConfig};
use super::{http_client, truthy_text};
use crate::domain::MarketMeta;
use crate::error::Result;
use crate::port::outbound::market::MarketDataSource;

/// `GET {base}/{mint}` response.
#[derive(Debug, Deserialize)]
pub struct TokenPairsResponse {
    #[serde(default)]
    pub pairs: Option<Vec<Pair>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pair {
    #[serde(default)]
    pub base_token: Option<BaseToken>,
    #[serde(default)]
    pub market_cap: Option<Value>,
    #[serde(default)]
    pub price_usd: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct BaseToken {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
}

impl TokenPairsResponse {
    /// Metadata from the first pair, when it carries a base token, market
    /// cap and USD price.
    #[must_use]
    pub fn into_meta(self) -> Option<MarketMeta> {
        let pair = self.pairs?.into_iter().next()?;
        let market_cap = pair.market_cap.as_ref().and_then(truthy_text)?;
        let price = pair.price_usd.as_ref().and_then(truthy_text)?;
        let base = pair.base_token?;

        Some(MarketMeta {
            name: base.name,
            symbol: base.symbol,
            market_cap_usd: Some(market_cap),
            price_usd: Some(price),
        })
    }
}

/// DexScreener market data source.
pub struct DexScreener {
    http: HttpClient,
    base_url: String,
}

impl DexScreener {
    #[must_use]
    pub fn new(config: &MarketDataConfig) -> Self {
        Self {
            http: http_client(config),
            base_url: config.dexscreener_url.clone(),
        }
    }
}

#[async_trait]
impl MarketDataSource for DexScreener {
    fn name(&self) -> &'static str {
        "dexscreener"
    }

    async fn lookup(&self, mint: &str) -> Result<Option<MarketMeta>> {
        let url = endpoint(&self.base_url, mint);
        debug!(url = %url, "Fetching DexScreener pairs");

        let response: TokenPairsResponse = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.into_meta())
    }
}
