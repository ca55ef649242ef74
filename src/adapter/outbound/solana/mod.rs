//! Solana integration: JSON-RPC transaction lookups and PubSub log feeds.

pub mod dto;
pub mod logs;
pub mod rpc;
pub mod settings;

pub use logs::SolanaLogFeed;
pub use rpc::SolanaRpc;
pub use settings::{Commitment, SolanaConfig};
