//! Domain validation errors.
//!
//! Returned by `parse` constructors when an input violates a domain rule.
//!
//! # Examples
//!
//! ```
//! use solwatch::domain::error::DomainError;
//! use solwatch::domain::WalletAddress;
//!
//! let result = WalletAddress::parse("not-a-key");
//! assert!(matches!(result, Err(DomainError::InvalidAddress { .. })));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Address is not a base58-encoded 32-byte public key.
    #[error("invalid address '{address}': {reason}")]
    InvalidAddress {
        /// The rejected input.
        address: String,
        /// Why it was rejected.
        reason: String,
    },
}
