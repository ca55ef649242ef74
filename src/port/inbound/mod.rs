//! Inbound (driving) ports consumed by inbound adapters.
//!
//! - [`tracking`]: wallet management used by the Telegram command surface

pub mod tracking;
