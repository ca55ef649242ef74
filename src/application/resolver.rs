//! Market data resolution with ordered fallback.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::MarketMeta;
use crate::port::outbound::market::MarketDataSource;

/// Walks an ordered list of sources and returns the first usable answer.
///
/// Source failures are logged and never surface to the caller; when every
/// source comes up empty the result is [`MarketMeta::unavailable`].
pub struct MarketDataResolver {
    sources: Vec<Arc<dyn MarketDataSource>>,
}

impl MarketDataResolver {
    #[must_use]
    pub fn new(sources: Vec<Arc<dyn MarketDataSource>>) -> Self {
        Self { sources }
    }

    #[must_use]
    pub fn source_names(&self) -> Vec<&'static str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    pub async fn resolve(&self, mint: &str) -> MarketMeta {
        for source in &self.sources {
            debug!(source = source.name(), mint, "Fetching ticker info");

            match source.lookup(mint).await {
                Ok(Some(meta)) => return meta,
                Ok(None) => debug!(source = source.name(), mint, "No market data"),
                Err(e) => warn!(
                    source = source.name(),
                    mint,
                    error = %e,
                    "Market data lookup failed"
                ),
            }
        }

        info!(mint, "Failed to get ticker info");
        MarketMeta::unavailable()
    }
}
