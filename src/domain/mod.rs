//! Chain-agnostic domain logic: wallets, balance snapshots, trade classification.

pub mod classifier;
pub mod error;
mod id;
mod market;
mod transaction;
mod wallet;

pub use classifier::{classify, Classification, ClassifierConfig, Pairing, Selection, TradeSide};
pub use id::{ChatId, SubscriptionId, WalletAddress};
pub use market::{MarketMeta, UNAVAILABLE};
pub use transaction::{lamports_to_sol, TokenBalanceEntry, TransactionRecord, LAMPORTS_PER_SOL};
pub use wallet::Wallet;
