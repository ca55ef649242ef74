//! Infrastructure configuration modules.

pub mod logging;
pub mod settings;
pub mod telegram;

/// Serializes unit tests that touch process environment variables.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
