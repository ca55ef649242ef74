//! Wallet tracking use cases exposed to chat commands.

use async_trait::async_trait;

use crate::domain::{ChatId, Wallet};

/// Wallet management as seen by a chat.
///
/// Addresses arrive as raw user text; implementations validate them.
#[async_trait]
pub trait WalletTracking: Send + Sync {
    /// Start watching `address` for `owner`.
    ///
    /// Returns false when the address is invalid, already tracked by any
    /// chat, or the subscription could not be started.
    async fn add(&self, owner: ChatId, address: &str, label: &str) -> bool;

    /// Stop watching `address` regardless of owner. False when not tracked.
    async fn untrack(&self, address: &str) -> bool;

    /// Remove `address` if `owner` added it. False otherwise.
    async fn delete(&self, owner: ChatId, address: &str) -> bool;

    /// Wallets owned by `owner`, oldest first.
    fn wallets_for(&self, owner: ChatId) -> Vec<Wallet>;

    /// Numbered `"{n}. {address} ({label})"` lines for `owner`'s wallets,
    /// or `"No wallets tracked yet"`.
    fn list(&self, owner: ChatId) -> String {
        render_wallet_list(&self.wallets_for(owner))
    }
}

/// Render wallets as a numbered list starting at 1.
#[must_use]
pub fn render_wallet_list(wallets: &[Wallet]) -> String {
    if wallets.is_empty() {
        return "No wallets tracked yet".to_string();
    }

    wallets
        .iter()
        .enumerate()
        .map(|(i, w)| format!("{}. {} ({})", i + 1, w.address(), w.label()))
        .collect::<Vec<_>>()
        .join("\n")
}
