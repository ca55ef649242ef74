use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use solwatch::domain::{SubscriptionId, WalletAddress};
use solwatch::error::{Error, Result};
use solwatch::port::outbound::chain::LogFeed;

/// Log feed that records calls instead of opening a socket.
#[derive(Default)]
pub struct ScriptedFeed {
    next_id: AtomicU64,
    fail_subscribe: AtomicBool,
    fail_unsubscribe: AtomicBool,
    subscribed: Mutex<Vec<(WalletAddress, SubscriptionId)>>,
    unsubscribed: Mutex<Vec<SubscriptionId>>,
}

impl ScriptedFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_subscribe(&self, fail: bool) {
        self.fail_subscribe.store(fail, Ordering::SeqCst);
    }

    pub fn fail_unsubscribe(&self, fail: bool) {
        self.fail_unsubscribe.store(fail, Ordering::SeqCst);
    }

    pub fn subscribed(&self) -> Vec<(WalletAddress, SubscriptionId)> {
        self.subscribed.lock().clone()
    }

    pub fn unsubscribed(&self) -> Vec<SubscriptionId> {
        self.unsubscribed.lock().clone()
    }
}

#[async_trait]
impl LogFeed for ScriptedFeed {
    async fn subscribe(&self, address: &WalletAddress) -> Result<SubscriptionId> {
        if self.fail_subscribe.load(Ordering::SeqCst) {
            return Err(Error::Connection("subscribe refused".into()));
        }
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        self.subscribed.lock().push((address.clone(), id));
        Ok(id)
    }

    async fn unsubscribe(&self, id: SubscriptionId) -> Result<()> {
        self.unsubscribed.lock().push(id);
        if self.fail_unsubscribe.load(Ordering::SeqCst) {
            return Err(Error::Connection("unsubscribe refused".into()));
        }
        Ok(())
    }
}
