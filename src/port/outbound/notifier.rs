//! Notifier port for trade alerts.
//!
//! This module defines the trait for delivering events produced by the
//! tracker, such as a classified buy or sell on a watched wallet.

use crate::domain::{ChatId, Classification, MarketMeta, WalletAddress};

/// Events that can trigger notifications.
#[derive(Debug, Clone)]
pub enum Event {
    /// A watched wallet bought or sold a token.
    TradeDetected(TradeAlert),
}

/// Everything needed to render one trade alert.
#[derive(Debug, Clone)]
pub struct TradeAlert {
    /// Chat that owns the wallet and receives the alert.
    pub owner: ChatId,
    pub address: WalletAddress,
    pub label: String,
    pub classification: Classification,
    pub meta: MarketMeta,
    pub signature: String,
}

/// Trait for notification handlers.
///
/// Notifications are fire-and-forget.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - The `notify` method should not block or perform slow I/O synchronously
pub trait Notifier: Send + Sync {
    /// Handle an event.
    ///
    /// For slow operations (e.g., HTTP calls), implementations should hand
    /// the event to a background task and return.
    fn notify(&self, event: Event);
}

/// Registry of notifiers (composite pattern).
///
/// Broadcasts events to all registered notifiers.
pub struct NotifierRegistry {
    notifiers: Vec<Box<dyn Notifier>>,
}

impl NotifierRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { notifiers: vec![] }
    }

    /// Register a notifier.
    pub fn register(&mut self, notifier: Box<dyn Notifier>) {
        self.notifiers.push(notifier);
    }

    /// Notify all registered notifiers.
    pub fn notify_all(&self, event: Event) {
        for notifier in &self.notifiers {
            notifier.notify(event.clone());
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notifiers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }
}

impl Default for NotifierRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NotifierRegistry {
    fn notify(&self, event: Event) {
        self.notify_all(event);
    }
}

/// A logging notifier that logs events via tracing.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, event: Event) {
        use tracing::info;
        match event {
            Event::TradeDetected(alert) => {
                let c = &alert.classification;
                info!(
                    wallet = %alert.address,
                    label = %alert.label,
                    chat_id = %alert.owner,
                    side = %c.side,
                    mint = %c.token_mint,
                    symbol = alert.meta.symbol(),
                    tokens = %c.token_amount,
                    sol = %c.native_amount,
                    signature = %alert.signature,
                    "Trade detected"
                );
            }
        }
    }
}
