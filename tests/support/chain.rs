use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use solwatch::domain::TransactionRecord;
use solwatch::error::{Error, Result};
use solwatch::port::outbound::chain::ChainClient;

/// Chain client backed by a signature map.
#[derive(Default)]
pub struct MemoryChain {
    transactions: Mutex<HashMap<String, TransactionRecord>>,
    failing: bool,
}

impl MemoryChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn insert(&self, tx: TransactionRecord) {
        self.transactions.lock().insert(tx.signature.clone(), tx);
    }
}

#[async_trait]
impl ChainClient for MemoryChain {
    async fn fetch_transaction(&self, signature: &str) -> Result<Option<TransactionRecord>> {
        if self.failing {
            return Err(Error::Connection("rpc unavailable".into()));
        }
        Ok(self.transactions.lock().get(signature).cloned())
    }
}
