//! Market data endpoint configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

/// `[market_data]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketDataConfig {
    /// Base of the DexScreener token endpoint; the mint is appended.
    #[serde(default = "default_dexscreener_url")]
    pub dexscreener_url: String,
    /// Base of the pump.fun coin endpoint; the mint is appended.
    #[serde(default = "default_pumpfun_url")]
    pub pumpfun_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_dexscreener_url() -> String {
    "https://api.dexscreener.com/latest/dex/tokens".into()
}

fn default_pumpfun_url() -> String {
    "https://frontend-api.pump.fun/coins".into()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for MarketDataConfig {
    fn default() -> Self {
        Self {
            dexscreener_url: default_dexscreener_url(),
            pumpfun_url: default_pumpfun_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl MarketDataConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check field values.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("market_data.dexscreener_url", &self.dexscreener_url),
            ("market_data.pumpfun_url", &self.pumpfun_url),
        ] {
            url::Url::parse(value).map_err(|e| ConfigError::InvalidValue {
                field,
                reason: e.to_string(),
            })?;
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "market_data.timeout_secs",
                reason: "must be greater than 0".into(),
            });
        }
        Ok(())
    }
}

/// `{base}/{mint}` with any trailing slash on `base` removed.
pub(crate) fn endpoint(base: &str, mint: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), mint)
}
