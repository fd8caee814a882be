//! # Core Entities
//!
//! Identity and digest types shared by signature recovery and the feed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ParseError;

// Re-export U256 from primitive-types for use across all crates
pub use primitive_types::U256;

/// A 32-byte keccak256 digest.
pub type Hash = [u8; 32];

/// Length of an Ethereum-style address in bytes.
pub const ADDRESS_LENGTH: usize = 20;

/// A 20-byte Ethereum-style address.
///
/// Derived from the last 20 bytes of keccak256 over an uncompressed
/// secp256k1 public key (without the `0x04` prefix).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Address(pub [u8; ADDRESS_LENGTH]);

impl Address {
    /// The all-zero address.
    pub const ZERO: Address = Address([0u8; ADDRESS_LENGTH]);

    /// Wrap raw address bytes.
    pub const fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Take the trailing 20 bytes of a 32-byte digest.
    pub fn from_digest(digest: &Hash) -> Self {
        let mut bytes = [0u8; ADDRESS_LENGTH];
        bytes.copy_from_slice(&digest[32 - ADDRESS_LENGTH..]);
        Self(bytes)
    }

    /// Raw address bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; ADDRESS_LENGTH]
    }
}

impl From<[u8; ADDRESS_LENGTH]> for Address {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

impl FromStr for Address {
    type Err = ParseError;

    /// Parse a hex address, with or without the `0x` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let decoded = hex::decode(digits).map_err(|e| ParseError::InvalidHex(e.to_string()))?;
        if decoded.len() != ADDRESS_LENGTH {
            return Err(ParseError::InvalidLength {
                expected: ADDRESS_LENGTH,
                actual: decoded.len(),
            });
        }
        let mut bytes = [0u8; ADDRESS_LENGTH];
        bytes.copy_from_slice(&decoded);
        Ok(Self(bytes))
    }
}
