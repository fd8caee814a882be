//! # Error Types
//!
//! Errors raised while parsing shared value types from text.

use thiserror::Error;

/// Errors produced when parsing an [`Address`](crate::Address) or similar
/// fixed-width value from its textual form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Input was not valid hexadecimal.
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// Decoded input had the wrong number of bytes.
    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}
