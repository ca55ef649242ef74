//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the chain connection, market data lookups,
//! and alert delivery.

pub mod chain;
pub mod market;
pub mod notifier;
