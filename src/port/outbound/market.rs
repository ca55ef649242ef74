//! Market data port.

use async_trait::async_trait;

use crate::domain::MarketMeta;
use crate::error::Result;

/// One upstream source of token market data.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Look up a token by mint.
    ///
    /// `Ok(None)` means the source answered but has no usable data for the mint.
    async fn lookup(&self, mint: &str) -> Result<Option<MarketMeta>>;
}
