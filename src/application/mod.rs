//! Application services (use cases).
//!
//! These services orchestrate domain logic and coordinate adapters
//! to implement the application's use cases.

pub mod registry;
pub mod resolver;
pub mod tracker;

pub use resolver::MarketDataResolver;
pub use tracker::Tracker;
