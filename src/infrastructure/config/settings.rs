//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file with environment variable overrides
//! for secrets and endpoints (`TELEGRAM_BOT_TOKEN`, `TELEGRAM_ALLOWED_CHATS`,
//! `SOLANA_RPC_URL`, `SOLANA_WS_URL`).
//!
//! # Example
//!
//! ```no_run
//! use solwatch::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use super::logging::LoggingConfig;
use super::telegram::TelegramAppConfig;
use crate::adapter::outbound::market::MarketDataConfig;
use crate::adapter::outbound::solana::SolanaConfig;
use crate::domain::{ChatId, ClassifierConfig, Wallet, WalletAddress};
use crate::error::{ConfigError, Result};

/// A wallet tracked from startup, declared under `[[wallets]]`.
#[derive(Debug, Clone, Deserialize)]
pub struct WalletSeed {
    pub address: String,
    #[serde(default)]
    pub label: String,
    /// Chat that owns the wallet and receives its alerts.
    pub chat_id: i64,
}

impl WalletSeed {
    fn to_wallet(&self) -> std::result::Result<Wallet, ConfigError> {
        let address =
            WalletAddress::parse(&self.address).map_err(|e| ConfigError::InvalidValue {
                field: "wallets.address",
                reason: e.to_string(),
            })?;
        Ok(Wallet::new(address, self.label.as_str(), ChatId(self.chat_id)))
    }
}

/// Main application configuration.
///
/// Every section is optional; an empty file yields a mainnet setup with
/// Telegram disabled.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Solana RPC and PubSub endpoints.
    #[serde(default)]
    pub solana: SolanaConfig,

    /// Token market data sources.
    #[serde(default)]
    pub market_data: MarketDataConfig,

    /// Trade classification rules.
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// Telegram bot settings.
    #[serde(default)]
    pub telegram: TelegramAppConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Wallets tracked from startup.
    #[serde(default)]
    pub wallets: Vec<WalletSeed>,
}

/// Read a non-blank environment variable.
fn env_value(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Config {
    /// Parse configuration from TOML content and apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;

        if let Some(rpc_url) = env_value("SOLANA_RPC_URL") {
            config.solana.rpc_url = rpc_url;
        }
        if let Some(ws_url) = env_value("SOLANA_WS_URL") {
            config.solana.ws_url = Some(ws_url);
        }
        // Never read from the config file.
        config.telegram.bot_token = env_value("TELEGRAM_BOT_TOKEN");
        if let Some(chats) = env_value("TELEGRAM_ALLOWED_CHATS") {
            config.telegram.extend_allowed_chats(&chats)?;
        }

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// malformed, or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        self.solana.validate()?;
        self.market_data.validate()?;

        if self.classifier.dust_threshold < Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "classifier.dust_threshold",
                reason: "must be 0 or greater".to_string(),
            }
            .into());
        }

        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("expected pretty or json, got {}", self.logging.format),
            }
            .into());
        }

        if self.telegram.enabled && self.telegram.bot_token.is_none() {
            return Err(ConfigError::MissingField {
                field: "TELEGRAM_BOT_TOKEN",
            }
            .into());
        }

        let mut seen = HashSet::new();
        for seed in &self.wallets {
            let wallet = seed.to_wallet()?;
            if !seen.insert(wallet.address().clone()) {
                return Err(ConfigError::InvalidValue {
                    field: "wallets.address",
                    reason: format!("{} listed more than once", seed.address),
                }
                .into());
            }
        }

        Ok(())
    }

    /// Startup wallets as domain entries.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an invalid address; cannot
    /// happen on a config that passed [`Config::load`].
    #[allow(clippy::result_large_err)]
    pub fn seed_wallets(&self) -> Result<Vec<Wallet>> {
        self.wallets
            .iter()
            .map(|seed| seed.to_wallet().map_err(Into::into))
            .collect()
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
