//! Report wire codec
//!
//! A report is exactly 96 bytes, three big-endian 256-bit words:
//!
//! ```text
//! [0..32)   price               int256 (two's complement)
//! [32..64)  report_round_id     uint256
//! [64..96)  observed_timestamp  uint256, seconds
//! ```
//!
//! Signers sign keccak256 of exactly these bytes.

use super::{OracleError, OracleResult};
use oracle_signature::keccak256;
use primitive_types::U256;
use serde::{Deserialize, Serialize};
use shared_types::{Hash, I256};

/// Length of an encoded report
pub const REPORT_LENGTH: usize = 96;

const WORD: usize = 32;

/// A decoded price observation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub price: I256,
    /// Reporter-side correlation id, unrelated to the ledger index
    pub report_round_id: U256,
    pub observed_timestamp: U256,
}

impl Report {
    pub fn new(price: I256, report_round_id: U256, observed_timestamp: U256) -> Self {
        Self {
            price,
            report_round_id,
            observed_timestamp,
        }
    }

    /// Decode the 96-byte wire layout
    pub fn decode(bytes: &[u8]) -> OracleResult<Self> {
        let bytes: &[u8; REPORT_LENGTH] = bytes
            .try_into()
            .map_err(|_| OracleError::MalformedReport {
                length: bytes.len(),
            })?;

        let mut price = [0u8; WORD];
        price.copy_from_slice(&bytes[..WORD]);

        Ok(Self {
            price: I256::from_be_bytes(price),
            report_round_id: U256::from_big_endian(&bytes[WORD..2 * WORD]),
            observed_timestamp: U256::from_big_endian(&bytes[2 * WORD..]),
        })
    }

    /// Encode to the 96-byte wire layout
    pub fn encode(&self) -> [u8; REPORT_LENGTH] {
        let mut out = [0u8; REPORT_LENGTH];
        out[..WORD].copy_from_slice(&self.price.to_be_bytes());
        self.report_round_id
            .to_big_endian(&mut out[WORD..2 * WORD]);
        self.observed_timestamp
            .to_big_endian(&mut out[2 * WORD..]);
        out
    }

    /// Digest signers sign over
    pub fn digest(&self) -> Hash {
        report_digest(&self.encode())
    }
}

/// keccak256 of the exact report bytes
pub fn report_digest(bytes: &[u8]) -> Hash {
    keccak256(bytes)
}
