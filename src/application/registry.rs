//! In-memory wallet and subscription registries.
//!
//! Neither registry locks on its own; [`Tracker`](super::tracker::Tracker)
//! owns both behind mutexes.

use crate::domain::{ChatId, SubscriptionId, Wallet, WalletAddress};

/// Tracked wallets in insertion order, at most one entry per address.
#[derive(Debug, Default)]
pub struct WalletRegistry {
    wallets: Vec<Wallet>,
}

impl WalletRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, address: &WalletAddress) -> bool {
        self.wallets.iter().any(|w| w.address() == address)
    }

    #[must_use]
    pub fn get(&self, address: &WalletAddress) -> Option<&Wallet> {
        self.wallets.iter().find(|w| w.address() == address)
    }

    /// Insert unless the address is already present under any owner.
    pub fn insert(&mut self, wallet: Wallet) -> bool {
        if self.contains(wallet.address()) {
            return false;
        }
        self.wallets.push(wallet);
        true
    }

    pub fn remove(&mut self, address: &WalletAddress) -> Option<Wallet> {
        let index = self.wallets.iter().position(|w| w.address() == address)?;
        Some(self.wallets.remove(index))
    }

    /// Remove only if `owner` owns the entry.
    pub fn remove_owned(&mut self, address: &WalletAddress, owner: ChatId) -> Option<Wallet> {
        let index = self
            .wallets
            .iter()
            .position(|w| w.address() == address && w.is_owned_by(owner))?;
        Some(self.wallets.remove(index))
    }

    /// Wallets belonging to `owner`, oldest first.
    #[must_use]
    pub fn owned_by(&self, owner: ChatId) -> Vec<Wallet> {
        self.wallets
            .iter()
            .filter(|w| w.is_owned_by(owner))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn addresses(&self) -> Vec<WalletAddress> {
        self.wallets.iter().map(|w| w.address().clone()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.wallets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.wallets.is_empty()
    }
}

/// Active log subscriptions, one per address.
#[derive(Debug, Default)]
pub struct SubscriptionRegistry {
    entries: Vec<(WalletAddress, SubscriptionId)>,
}

impl SubscriptionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, address: &WalletAddress) -> Option<SubscriptionId> {
        self.entries
            .iter()
            .find(|(a, _)| a == address)
            .map(|(_, id)| *id)
    }

    /// Record a subscription. Returns the existing id instead when the
    /// address is already subscribed.
    pub fn insert(&mut self, address: WalletAddress, id: SubscriptionId) -> Result<(), SubscriptionId> {
        if let Some(existing) = self.get(&address) {
            return Err(existing);
        }
        self.entries.push((address, id));
        Ok(())
    }

    pub fn remove(&mut self, address: &WalletAddress) -> Option<SubscriptionId> {
        let index = self.entries.iter().position(|(a, _)| a == address)?;
        Some(self.entries.remove(index).1)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
