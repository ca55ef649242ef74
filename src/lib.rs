//! Solwatch - Solana wallet trade alerts for Telegram.
//!
//! Watches wallet addresses over Solana PubSub, classifies each confirmed
//! transaction as a token buy or sell, enriches it with market data and
//! sends an alert to the chat that registered the wallet.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - [`domain`] - Addresses, wallets, transaction snapshots and the classifier
//! - [`port`] - Traits at the edges: chain access, log feeds, market data,
//!   notifiers and the wallet tracking use case
//! - [`adapter`] - Solana JSON-RPC and PubSub, DexScreener, pump.fun, Telegram
//! - [`application`] - Registries, market data resolution and the [`Tracker`]
//! - [`infrastructure`] - Configuration, logging and runtime wiring
//! - [`cli`] - Command-line entry points
//!
//! # Features
//!
//! - `telegram` (default) - Telegram alert delivery and chat commands
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use solwatch::domain::{classify, ClassifierConfig, TokenBalanceEntry, TradeSide, TransactionRecord};
//!
//! let tx = TransactionRecord {
//!     signature: "sig".into(),
//!     pre_balances: vec![10_000_000_000],
//!     post_balances: vec![9_000_000_000],
//!     pre_token_balances: vec![],
//!     post_token_balances: vec![TokenBalanceEntry::new("Mint", dec!(5))],
//! };
//!
//! let trade = classify(&tx, &ClassifierConfig::default()).unwrap();
//! assert_eq!(trade.side, TradeSide::Buy);
//! assert_eq!(trade.token_amount, dec!(5));
//! ```
//!
//! [`Tracker`]: application::Tracker

pub mod adapter;
pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
