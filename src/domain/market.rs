//! Token market metadata shown in trade alerts.

/// Placeholder rendered for any unavailable field.
pub const UNAVAILABLE: &str = "N/A";

/// Market data for one token mint.
///
/// Every field is independently optional; a missing value renders as `N/A`.
/// Numbers are kept as the upstream API reported them so alerts show the
/// same precision the source does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarketMeta {
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub market_cap_usd: Option<String>,
    pub price_usd: Option<String>,
}

impl MarketMeta {
    /// Metadata with every field unavailable.
    #[must_use]
    pub fn unavailable() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNAVAILABLE)
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        self.symbol.as_deref().unwrap_or(UNAVAILABLE)
    }

    #[must_use]
    pub fn market_cap_usd(&self) -> &str {
        self.market_cap_usd.as_deref().unwrap_or(UNAVAILABLE)
    }

    #[must_use]
    pub fn price_usd(&self) -> &str {
        self.price_usd.as_deref().unwrap_or(UNAVAILABLE)
    }

    /// True when no field carries data.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        self.name.is_none()
            && self.symbol.is_none()
            && self.market_cap_usd.is_none()
            && self.price_usd.is_none()
    }
}
