//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Length of a Solana public key in bytes.
const PUBKEY_BYTES: usize = 32;

/// Longest base58 string that can encode 32 bytes.
const MAX_BASE58_LEN: usize = 44;

/// Wallet address - a validated base58 Solana public key.
///
/// The inner String is private so every instance has passed [`WalletAddress::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WalletAddress(String);

impl WalletAddress {
    /// Parse and validate a wallet address.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidAddress`] when the input is not base58 or
    /// does not decode to exactly 32 bytes.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let invalid = |reason: String| DomainError::InvalidAddress {
            address: raw.to_string(),
            reason,
        };

        if raw.is_empty() || raw.len() > MAX_BASE58_LEN {
            return Err(invalid(format!("length {} out of range", raw.len())));
        }

        let bytes = bs58::decode(raw)
            .into_vec()
            .map_err(|e| invalid(e.to_string()))?;

        if bytes.len() != PUBKEY_BYTES {
            return Err(invalid(format!(
                "decoded to {} bytes, expected {PUBKEY_BYTES}",
                bytes.len()
            )));
        }

        Ok(Self(raw.to_string()))
    }

    /// Get the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for WalletAddress {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<WalletAddress> for String {
    fn from(address: WalletAddress) -> Self {
        address.0
    }
}

/// Chat that owns a wallet and receives its alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatId(pub i64);

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Handle of an active log subscription, assigned by the log feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USDC_MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";

    #[test]
    fn parse_accepts_valid_pubkey() {
        let address = WalletAddress::parse(USDC_MINT).unwrap();
        assert_eq!(address.as_str(), USDC_MINT);
        assert_eq!(address.to_string(), USDC_MINT);
    }

    #[test]
    fn parse_accepts_system_program() {
        assert!(WalletAddress::parse("11111111111111111111111111111111").is_ok());
    }

    #[test]
    fn parse_rejects_non_base58() {
        // '0', 'O', 'I' and 'l' are outside the base58 alphabet.
        let err = WalletAddress::parse("0OIl0OIl0OIl0OIl0OIl0OIl0OIl0OIl").unwrap_err();
        assert!(matches!(err, DomainError::InvalidAddress { .. }));
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert!(WalletAddress::parse("abc").is_err());
        assert!(WalletAddress::parse("").is_err());
        let too_long = format!("{USDC_MINT}{USDC_MINT}");
        assert!(WalletAddress::parse(&too_long).is_err());
    }

    #[test]
    fn deserialize_validates() {
        let ok: Result<WalletAddress, _> = serde_json::from_str(&format!("\"{USDC_MINT}\""));
        assert!(ok.is_ok());

        let bad: Result<WalletAddress, _> = serde_json::from_str("\"nope\"");
        assert!(bad.is_err());
    }
}
