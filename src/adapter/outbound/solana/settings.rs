//! Solana connection configuration.

use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::error::ConfigError;

/// Commitment level for subscriptions and transaction lookups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    Processed,
    #[default]
    Confirmed,
    Finalized,
}

impl Commitment {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Processed => "processed",
            Self::Confirmed => "confirmed",
            Self::Finalized => "finalized",
        }
    }

    /// Commitment accepted by `getTransaction`, which rejects `processed`.
    #[must_use]
    pub const fn for_transaction_lookup(self) -> Self {
        match self {
            Self::Processed => Self::Confirmed,
            other => other,
        }
    }
}

impl std::fmt::Display for Commitment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `[solana]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct SolanaConfig {
    /// JSON-RPC HTTP endpoint.
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,
    /// PubSub WebSocket endpoint. Derived from `rpc_url` when unset.
    #[serde(default)]
    pub ws_url: Option<String>,
    #[serde(default)]
    pub commitment: Commitment,
    /// Delay before reconnecting a dropped WebSocket.
    #[serde(default = "default_reconnect_delay_ms")]
    pub reconnect_delay_ms: u64,
    /// Timeout for RPC calls and subscription acknowledgements.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_rpc_url() -> String {
    "https://api.mainnet-beta.solana.com".into()
}

const fn default_reconnect_delay_ms() -> u64 {
    3_000
}

const fn default_request_timeout_secs() -> u64 {
    15
}

impl Default for SolanaConfig {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            ws_url: None,
            commitment: Commitment::default(),
            reconnect_delay_ms: default_reconnect_delay_ms(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl SolanaConfig {
    #[must_use]
    pub const fn reconnect_delay(&self) -> Duration {
        Duration::from_millis(self.reconnect_delay_ms)
    }

    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// The WebSocket endpoint, either configured or derived from `rpc_url`
    /// by swapping `http(s)` for `ws(s)`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a URL does not parse or
    /// uses an unsupported scheme.
    pub fn websocket_url(&self) -> Result<String, ConfigError> {
        if let Some(ws_url) = &self.ws_url {
            let parsed = parse_url("solana.ws_url", ws_url)?;
            if !matches!(parsed.scheme(), "ws" | "wss") {
                return Err(ConfigError::InvalidValue {
                    field: "solana.ws_url",
                    reason: format!("expected ws:// or wss://, got {}://", parsed.scheme()),
                });
            }
            return Ok(ws_url.clone());
        }

        let mut url = parse_url("solana.rpc_url", &self.rpc_url)?;
        let scheme = match url.scheme() {
            "https" => "wss",
            "http" => "ws",
            other => {
                return Err(ConfigError::InvalidValue {
                    field: "solana.rpc_url",
                    reason: format!("expected http:// or https://, got {other}://"),
                })
            }
        };
        url.set_scheme(scheme)
            .map_err(|()| ConfigError::InvalidValue {
                field: "solana.rpc_url",
                reason: "cannot derive websocket url".into(),
            })?;
        Ok(url.to_string())
    }

    /// Check field values.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rpc_url.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "solana.rpc_url",
            });
        }
        self.websocket_url()?;
        if self.reconnect_delay_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "solana.reconnect_delay_ms",
                reason: "must be greater than 0".into(),
            });
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "solana.request_timeout_secs",
                reason: "must be greater than 0".into(),
            });
        }
        Ok(())
    }
}

fn parse_url(field: &'static str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|e| ConfigError::InvalidValue {
        field,
        reason: e.to_string(),
    })
}
