//! Telegram bot configuration.

use serde::Deserialize;

use crate::error::ConfigError;

/// `[telegram]` section.
///
/// The bot token never lives in the config file; it is read from
/// `TELEGRAM_BOT_TOKEN` when the config is parsed. `TELEGRAM_ALLOWED_CHATS`
/// (comma-separated chat ids) extends `allowed_chats`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TelegramAppConfig {
    /// Start the bot (alerts and chat commands).
    #[serde(default)]
    pub enabled: bool,
    /// Chats allowed to send commands. Empty admits every chat.
    #[serde(default)]
    pub allowed_chats: Vec<i64>,
    #[serde(skip)]
    pub bot_token: Option<String>,
}

impl TelegramAppConfig {
    /// True when the bot is enabled and a token is available.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.enabled && self.bot_token.is_some()
    }

    /// Add comma-separated chat ids to the allow-list, skipping duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when an entry is not a chat id;
    /// the list is left unchanged.
    pub fn extend_allowed_chats(&mut self, raw: &str) -> Result<(), ConfigError> {
        let chats = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<i64>().map_err(|e| ConfigError::InvalidValue {
                    field: "TELEGRAM_ALLOWED_CHATS",
                    reason: format!("{s}: {e}"),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        for chat in chats {
            if !self.allowed_chats.contains(&chat) {
                self.allowed_chats.push(chat);
            }
        }
        Ok(())
    }
}
