//! Handler for `check config`.

use std::path::Path;

use crate::cli::output;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Validate the configuration file and print a summary.
///
/// # Errors
///
/// Returns the load or validation error; the binary exits non-zero on it.
pub fn execute_config(path: &Path) -> Result<()> {
    output::section("Configuration");
    output::key_value("Path", path.display());

    let config = Config::load(path)?;
    output::ok("Configuration file is valid");

    output::section("Solana");
    output::key_value("RPC", &config.solana.rpc_url);
    output::key_value("WebSocket", config.solana.websocket_url()?);
    output::key_value("Commitment", config.solana.commitment);

    output::section("Classifier");
    output::key_value("Dust threshold", config.classifier.dust_threshold);
    output::key_value("Pairing", format!("{:?}", config.classifier.pairing));
    output::key_value("Selection", format!("{:?}", config.classifier.selection));

    output::section("Telegram");
    if config.telegram.is_ready() {
        output::ok("Enabled, TELEGRAM_BOT_TOKEN found");
        if config.telegram.allowed_chats.is_empty() {
            output::warn("No allowed_chats set, every chat may send commands");
        } else {
            output::key_value("Allowed chats", config.telegram.allowed_chats.len());
        }
    } else {
        output::warn("Disabled, alerts are only logged");
    }

    output::section("Wallets");
    output::key_value("Seeded", config.wallets.len());

    Ok(())
}
