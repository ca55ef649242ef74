//! Solana JSON-RPC client over HTTP.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, warn};

use super::dto::{GetTransactionResult, RpcRequest, RpcResponse};
use super::settings::{Commitment, SolanaConfig};
use crate::domain::TransactionRecord;
use crate::error::{Error, Result};
use crate::port::outbound::chain::ChainClient;

/// HTTP JSON-RPC client for a Solana node.
pub struct SolanaRpc {
    http: HttpClient,
    url: String,
    commitment: Commitment,
    next_id: AtomicU64,
}

impl SolanaRpc {
    #[must_use]
    pub fn new(config: &SolanaConfig) -> Self {
        let http = HttpClient::builder()
            .timeout(config.request_timeout())
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            url: config.rpc_url.clone(),
            commitment: config.commitment,
            next_id: AtomicU64::new(1),
        }
    }

    /// Call `method` and decode its `result`.
    ///
    /// A `null` result comes back as `Ok(None)`; an `error` object as
    /// [`Error::Rpc`].
    pub async fn call<T>(&self, method: &str, params: Value) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = RpcRequest::new(id, method, params);

        debug!(method, id, "Sending RPC request");

        let response: RpcResponse<T> = self
            .http
            .post(&self.url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if let Some(error) = response.error {
            return Err(Error::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        Ok(response.result)
    }
}

#[async_trait]
impl ChainClient for SolanaRpc {
    async fn fetch_transaction(&self, signature: &str) -> Result<Option<TransactionRecord>> {
        let params = json!([
            signature,
            {
                "encoding": "json",
                "maxSupportedTransactionVersion": 0,
                "commitment": self.commitment.for_transaction_lookup().as_str(),
            }
        ]);

        let result: Option<GetTransactionResult> = self.call("getTransaction", params).await?;
        Ok(result.map(|tx| tx.into_record(signature)))
    }
}
