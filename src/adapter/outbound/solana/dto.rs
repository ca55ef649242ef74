//! Solana JSON-RPC wire types.
//!
//! Covers the `getTransaction` response (json encoding) and the PubSub
//! frames exchanged for `logsSubscribe`:
//!
//! ```json
//! {"jsonrpc":"2.0","result":24040,"id":1}
//! {"jsonrpc":"2.0","method":"logsNotification","params":{"result":{"context":{"slot":5208469},
//!   "value":{"signature":"5h6x...","err":null,"logs":["..."]}},"subscription":24040}}
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{TokenBalanceEntry, TransactionRecord};

/// JSON-RPC 2.0 request envelope.
#[derive(Debug, Serialize)]
pub struct RpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: Value,
}

impl<'a> RpcRequest<'a> {
    pub fn new(id: u64, method: &'a str, params: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            method,
            params,
        }
    }
}

/// JSON-RPC 2.0 response envelope.
#[derive(Debug, Deserialize)]
pub struct RpcResponse<T> {
    pub result: Option<T>,
    #[serde(default)]
    pub error: Option<RpcErrorBody>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RpcErrorBody {
    pub code: i64,
    pub message: String,
}

/// `getTransaction` result with `"encoding": "json"`.
#[derive(Debug, Deserialize)]
pub struct GetTransactionResult {
    #[serde(default)]
    pub slot: u64,
    pub meta: Option<TransactionMeta>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionMeta {
    #[serde(default)]
    pub err: Option<Value>,
    #[serde(default)]
    pub pre_balances: Vec<u64>,
    #[serde(default)]
    pub post_balances: Vec<u64>,
    #[serde(default)]
    pub pre_token_balances: Option<Vec<UiTokenBalance>>,
    #[serde(default)]
    pub post_token_balances: Option<Vec<UiTokenBalance>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiTokenBalance {
    pub account_index: u32,
    pub mint: String,
    #[serde(default)]
    pub owner: Option<String>,
    pub ui_token_amount: UiTokenAmount,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiTokenAmount {
    #[serde(default)]
    pub ui_amount: Option<f64>,
    #[serde(default)]
    pub ui_amount_string: Option<String>,
}

impl UiTokenAmount {
    /// Exact amount from `uiAmountString`, falling back to the float `uiAmount`.
    #[must_use]
    pub fn to_decimal(&self) -> Option<Decimal> {
        self.ui_amount_string
            .as_deref()
            .and_then(|s| s.parse::<Decimal>().ok())
            .or_else(|| self.ui_amount.and_then(|f| Decimal::try_from(f).ok()))
    }
}

impl From<UiTokenBalance> for TokenBalanceEntry {
    fn from(balance: UiTokenBalance) -> Self {
        Self {
            account_index: Some(balance.account_index),
            ui_amount: balance.ui_token_amount.to_decimal(),
            mint: balance.mint,
            owner: balance.owner,
        }
    }
}

impl GetTransactionResult {
    /// Convert to the domain record. A missing `meta` yields empty snapshots.
    #[must_use]
    pub fn into_record(self, signature: &str) -> TransactionRecord {
        let meta = self.meta.unwrap_or_default();
        let convert = |list: Option<Vec<UiTokenBalance>>| {
            list.unwrap_or_default()
                .into_iter()
                .map(TokenBalanceEntry::from)
                .collect()
        };

        TransactionRecord {
            signature: signature.to_string(),
            pre_balances: meta.pre_balances,
            post_balances: meta.post_balances,
            pre_token_balances: convert(meta.pre_token_balances),
            post_token_balances: convert(meta.post_token_balances),
        }
    }
}

/// Frames received on the PubSub socket.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PubSubMessage {
    /// Subscription notification.
    Notification {
        method: String,
        params: NotificationParams,
    },
    /// Answer to a request we sent.
    Response {
        id: u64,
        #[serde(default)]
        result: Option<Value>,
        #[serde(default)]
        error: Option<RpcErrorBody>,
    },
    /// Unknown or unparseable message.
    Unknown(Value),
}

#[derive(Debug, Deserialize)]
pub struct NotificationParams {
    pub subscription: u64,
    pub result: LogsResult,
}

#[derive(Debug, Deserialize)]
pub struct LogsResult {
    pub value: LogsValue,
}

#[derive(Debug, Deserialize)]
pub struct LogsValue {
    pub signature: String,
    #[serde(default)]
    pub err: Option<Value>,
}
