//! Telegram command execution against the wallet tracker.

use std::sync::Arc;

use crate::domain::ChatId;
use crate::port::inbound::tracking::WalletTracking;

use super::command::{command_help, welcome_text, WalletCommand};

/// Command executor for wallet management commands.
#[derive(Clone)]
pub struct TelegramControl {
    tracking: Arc<dyn WalletTracking>,
}

impl TelegramControl {
    pub fn new(tracking: Arc<dyn WalletTracking>) -> Self {
        Self { tracking }
    }

    /// Run `command` on behalf of `chat` and return the reply text.
    pub async fn execute(&self, chat: ChatId, command: WalletCommand) -> String {
        match command {
            WalletCommand::Start => welcome_text(),
            WalletCommand::Help => command_help().to_string(),
            WalletCommand::List => self.tracking.list(chat),
            WalletCommand::Add { address, label } => {
                if self.tracking.add(chat, &address, &label).await {
                    format!("Successfully added wallet {address} with label \"{label}\"")
                } else {
                    "Wallet already being tracked or invalid address".to_string()
                }
            }
            WalletCommand::Remove { address } => {
                if self.tracking.untrack(&address).await {
                    format!("Successfully stopped tracking wallet {address}")
                } else {
                    "Wallet not found or not being tracked".to_string()
                }
            }
            WalletCommand::Delete { address } => {
                if self.tracking.delete(chat, &address).await {
                    format!("Successfully deleted wallet {address}")
                } else {
                    "Wallet not found or not authorized to delete".to_string()
                }
            }
        }
    }
}
