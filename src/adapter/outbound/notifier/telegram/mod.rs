//! Telegram alert delivery and wallet commands.
//!
//! Provides Telegram bot integration for trade alerts and the interactive
//! commands that add, remove and list tracked wallets.

mod auth;
mod command;
mod format;

pub mod control;
pub mod notifier;

pub use format::{escape_html, format_trade_alert};
pub use notifier::{spawn_command_listener, TelegramConfig, TelegramNotifier};
