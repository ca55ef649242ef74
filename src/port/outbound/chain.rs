//! Chain ports: transaction lookup and per-address log subscriptions.

use async_trait::async_trait;

use crate::domain::{SubscriptionId, TransactionRecord, WalletAddress};
use crate::error::Result;

/// A log notification for a subscribed address.
///
/// Every subscription delivers on the same channel; `address` says which
/// subscription produced the event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    pub address: WalletAddress,
    pub signature: String,
    /// The transaction failed on chain.
    pub failed: bool,
}

/// Fetches confirmed transactions.
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Fetch a transaction by signature.
    ///
    /// Returns `Ok(None)` when the node does not know the transaction (yet).
    async fn fetch_transaction(&self, signature: &str) -> Result<Option<TransactionRecord>>;
}

/// Registers interest in transactions that mention an address.
///
/// Implementations push matching [`LogEvent`]s into the channel handed out
/// at construction.
#[async_trait]
pub trait LogFeed: Send + Sync {
    /// Start delivering log events for `address`.
    async fn subscribe(&self, address: &WalletAddress) -> Result<SubscriptionId>;

    /// Stop a subscription created by [`LogFeed::subscribe`].
    async fn unsubscribe(&self, id: SubscriptionId) -> Result<()>;
}
