//! # Signed 256-bit Word
//!
//! `primitive-types` only ships unsigned words, so the signed report price is
//! kept as a two's-complement `U256`. Only the operations the oracle needs
//! are provided: byte conversion, sign inspection, ordering and display.

use primitive_types::U256;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Two's-complement signed 256-bit integer.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct I256(U256);

impl I256 {
    /// Zero.
    pub const ZERO: I256 = I256(U256([0; 4]));

    /// Build from the raw two's-complement bit pattern.
    pub const fn from_raw(raw: U256) -> Self {
        Self(raw)
    }

    /// Raw two's-complement bit pattern.
    pub const fn into_raw(self) -> U256 {
        self.0
    }

    /// Decode a big-endian two's-complement word.
    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        Self(U256::from_big_endian(&bytes))
    }

    /// Encode as a big-endian two's-complement word.
    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        self.0.to_big_endian(&mut out);
        out
    }

    pub fn is_negative(&self) -> bool {
        self.0.bit(255)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Magnitude as an unsigned word. `|MIN|` is `2^255`, which still fits.
    pub fn unsigned_abs(&self) -> U256 {
        if self.is_negative() {
            (!self.0).overflowing_add(U256::one()).0
        } else {
            self.0
        }
    }

    /// Narrow to `i128`, `None` if out of range.
    pub fn to_i128(&self) -> Option<i128> {
        let magnitude = self.unsigned_abs();
        let limit = U256::from(i128::MAX as u128);
        if self.is_negative() {
            if magnitude > limit + U256::one() {
                None
            } else if magnitude == limit + U256::one() {
                Some(i128::MIN)
            } else {
                Some(-(magnitude.as_u128() as i128))
            }
        } else if magnitude > limit {
            None
        } else {
            Some(magnitude.as_u128() as i128)
        }
    }
}

impl From<i128> for I256 {
    fn from(value: i128) -> Self {
        let magnitude = U256::from(value.unsigned_abs());
        if value < 0 {
            Self((!magnitude).overflowing_add(U256::one()).0)
        } else {
            Self(magnitude)
        }
    }
}

impl From<i64> for I256 {
    fn from(value: i64) -> Self {
        Self::from(value as i128)
    }
}

impl Ord for I256 {
    fn cmp(&self, other: &Self) -> Ordering {
        // flipping the sign bit maps two's complement onto unsigned order
        let sign = U256::one() << 255;
        (self.0 ^ sign).cmp(&(other.0 ^ sign))
    }
}

impl PartialOrd for I256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for I256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}", self.unsigned_abs())
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl fmt::Debug for I256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "I256({self})")
    }
}
