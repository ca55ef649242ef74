//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!   Telegram bot ──► inbound::WalletTracking ──► Tracker
//!                                                  │
//!        ┌─────────────────┬───────────────────────┼──────────────────┐
//!        ▼                 ▼                       ▼                  ▼
//!   ChainClient         LogFeed             MarketDataSource       Notifier
//!  (getTransaction)  (logsSubscribe)     (DexScreener, pump.fun)  (Telegram, log)
//! ```

pub mod inbound;
pub mod outbound;
