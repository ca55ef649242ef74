//! Tracked wallet entries.

use super::id::{ChatId, WalletAddress};

/// A wallet being watched on behalf of a chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wallet {
    address: WalletAddress,
    label: String,
    owner: ChatId,
}

impl Wallet {
    /// Create a new wallet entry.
    pub fn new(address: WalletAddress, label: impl Into<String>, owner: ChatId) -> Self {
        Self {
            address,
            label: label.into(),
            owner,
        }
    }

    #[must_use]
    pub const fn address(&self) -> &WalletAddress {
        &self.address
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub const fn owner(&self) -> ChatId {
        self.owner
    }

    /// True when this wallet belongs to `chat`.
    #[must_use]
    pub fn is_owned_by(&self, chat: ChatId) -> bool {
        self.owner == chat
    }
}
