//! Wallet tracking coordinator.
//!
//! [`Tracker`] owns the wallet and subscription registries and drives the
//! alert pipeline for each log event:
//!
//! ```text
//! LogEvent ──► fetch transaction ──► classify ──► resolve market data ──► notify
//! ```
//!
//! Registry locks are never held across an `.await`.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use super::registry::{SubscriptionRegistry, WalletRegistry};
use super::resolver::MarketDataResolver;
use crate::domain::{classify, ChatId, ClassifierConfig, SubscriptionId, Wallet, WalletAddress};
use crate::port::inbound::tracking::WalletTracking;
use crate::port::outbound::chain::{ChainClient, LogEvent, LogFeed};
use crate::port::outbound::notifier::{Event, Notifier, TradeAlert};

/// Shared tracking state and alert pipeline.
pub struct Tracker {
    wallets: Mutex<WalletRegistry>,
    subscriptions: Mutex<SubscriptionRegistry>,
    chain: Arc<dyn ChainClient>,
    feed: Arc<dyn LogFeed>,
    resolver: MarketDataResolver,
    notifier: Arc<dyn Notifier>,
    classifier: ClassifierConfig,
}

impl Tracker {
    pub fn new(
        chain: Arc<dyn ChainClient>,
        feed: Arc<dyn LogFeed>,
        resolver: MarketDataResolver,
        notifier: Arc<dyn Notifier>,
        classifier: ClassifierConfig,
    ) -> Self {
        Self {
            wallets: Mutex::new(WalletRegistry::new()),
            subscriptions: Mutex::new(SubscriptionRegistry::new()),
            chain,
            feed,
            resolver,
            notifier,
            classifier,
        }
    }

    /// Put a wallet in the registry without subscribing.
    ///
    /// Used for startup seeds; call [`Tracker::resubscribe_all`] afterwards.
    pub fn seed(&self, wallet: Wallet) -> bool {
        let address = wallet.address().clone();
        let inserted = self.wallets.lock().insert(wallet);
        if !inserted {
            warn!(wallet = %address, "Seed wallet already present");
        }
        inserted
    }

    /// Track `raw` for `owner`. False if invalid, already present, or the
    /// subscription could not be started (the insert is rolled back).
    pub async fn add(&self, owner: ChatId, raw: &str, label: &str) -> bool {
        let address = match WalletAddress::parse(raw) {
            Ok(address) => address,
            Err(e) => {
                warn!(error = %e, "Error adding wallet");
                return false;
            }
        };

        let inserted = self
            .wallets
            .lock()
            .insert(Wallet::new(address.clone(), label, owner));
        if !inserted {
            info!(wallet = %address, "Wallet already tracked");
            return false;
        }

        if self.subscribe(&address).await.is_none() {
            self.wallets.lock().remove(&address);
            return false;
        }

        info!(wallet = %address, label, chat_id = %owner, "Wallet added");
        true
    }

    /// Remove `raw` if `owner` added it, stopping its subscription.
    pub async fn delete(&self, owner: ChatId, raw: &str) -> bool {
        let Ok(address) = WalletAddress::parse(raw) else {
            return false;
        };

        let owned = self
            .wallets
            .lock()
            .get(&address)
            .is_some_and(|w| w.is_owned_by(owner));
        if !owned {
            debug!(wallet = %address, chat_id = %owner, "Delete refused");
            return false;
        }

        self.untrack(address.as_str()).await;
        self.wallets.lock().remove_owned(&address, owner);
        info!(wallet = %address, chat_id = %owner, "Wallet deleted");
        true
    }

    /// Numbered wallet list for `owner`.
    #[must_use]
    pub fn list(&self, owner: ChatId) -> String {
        WalletTracking::list(self, owner)
    }

    /// Start a log subscription for `raw`. Invalid addresses are logged and
    /// yield `None`; an address that is already subscribed keeps its id.
    pub async fn start(&self, raw: &str) -> Option<SubscriptionId> {
        match WalletAddress::parse(raw) {
            Ok(address) => self.subscribe(&address).await,
            Err(e) => {
                error!(error = %e, "Error tracking transactions");
                None
            }
        }
    }

    async fn subscribe(&self, address: &WalletAddress) -> Option<SubscriptionId> {
        let existing = self.subscriptions.lock().get(address);
        if let Some(existing) = existing {
            warn!(wallet = %address, subscription = %existing, "Already subscribed");
            return Some(existing);
        }

        let id = match self.feed.subscribe(address).await {
            Ok(id) => id,
            Err(e) => {
                error!(wallet = %address, error = %e, "Error tracking transactions");
                return None;
            }
        };

        let raced = self.subscriptions.lock().insert(address.clone(), id).err();
        if let Some(existing) = raced {
            // A concurrent start won; drop ours.
            if let Err(e) = self.feed.unsubscribe(id).await {
                warn!(wallet = %address, error = %e, "Failed to drop duplicate subscription");
            }
            return Some(existing);
        }

        info!(wallet = %address, subscription = %id, "Wallet tracked");
        Some(id)
    }

    /// Stop the subscription for `raw` and forget the wallet.
    ///
    /// False when no subscription exists. The owner is not checked.
    pub async fn untrack(&self, raw: &str) -> bool {
        let id = WalletAddress::parse(raw)
            .ok()
            .and_then(|address| {
                let id = self.subscriptions.lock().remove(&address)?;
                Some((address, id))
            });
        let Some((address, id)) = id else {
            info!(wallet = raw, "No subscription found for address");
            return false;
        };

        if let Err(e) = self.feed.unsubscribe(id).await {
            warn!(wallet = %address, error = %e, "Error stopping wallet tracking");
        }
        self.wallets.lock().remove(&address);

        info!(wallet = %address, "Successfully stopped tracking wallet");
        true
    }

    /// Subscribe every registered wallet that has no subscription yet.
    /// Returns how many are subscribed afterwards.
    pub async fn resubscribe_all(&self) -> usize {
        let addresses = self.wallets.lock().addresses();
        let mut subscribed = 0;

        for address in addresses {
            if self.subscribe(&address).await.is_some() {
                subscribed += 1;
            }
        }

        info!(count = subscribed, "Resubscribed wallets");
        subscribed
    }

    #[must_use]
    pub fn wallet_count(&self) -> usize {
        self.wallets.lock().len()
    }

    #[must_use]
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.lock().len()
    }

    /// Run the alert pipeline for one log event.
    pub async fn handle_event(&self, event: LogEvent) {
        info!(
            wallet = %event.address,
            signature = %event.signature,
            "New transaction detected for wallet"
        );

        if event.failed {
            debug!(signature = %event.signature, "Skipping failed transaction");
            return;
        }

        let tx = match self.chain.fetch_transaction(&event.signature).await {
            Ok(Some(tx)) => tx,
            Ok(None) => {
                info!(signature = %event.signature, "Transaction not found or not confirmed");
                return;
            }
            Err(e) => {
                warn!(signature = %event.signature, error = %e, "Failed to fetch transaction");
                return;
            }
        };

        let wallet = self.wallets.lock().get(&event.address).cloned();
        let Some(wallet) = wallet else {
            info!(wallet = %event.address, "Wallet not found in registry");
            return;
        };

        let Some(classification) = classify(&tx, &self.classifier) else {
            debug!(signature = %event.signature, "Transaction not relevant or significant");
            return;
        };

        let meta = self.resolver.resolve(&classification.token_mint).await;

        self.notifier.notify(Event::TradeDetected(TradeAlert {
            owner: wallet.owner(),
            address: wallet.address().clone(),
            label: wallet.label().to_string(),
            classification,
            meta,
            signature: event.signature,
        }));
    }

    /// Consume log events until the channel closes, one task per event.
    pub async fn run(self: Arc<Self>, mut events: mpsc::UnboundedReceiver<LogEvent>) {
        info!("Tracker event loop started");

        while let Some(event) = events.recv().await {
            let tracker = Arc::clone(&self);
            tokio::spawn(async move { tracker.handle_event(event).await });
        }

        warn!("Log event channel closed, tracker loop exiting");
    }
}

#[async_trait]
impl WalletTracking for Tracker {
    async fn add(&self, owner: ChatId, address: &str, label: &str) -> bool {
        Tracker::add(self, owner, address, label).await
    }

    async fn untrack(&self, address: &str) -> bool {
        Tracker::untrack(self, address).await
    }

    async fn delete(&self, owner: ChatId, address: &str) -> bool {
        Tracker::delete(self, owner, address).await
    }

    fn wallets_for(&self, owner: ChatId) -> Vec<Wallet> {
        self.wallets.lock().owned_by(owner)
    }
}
