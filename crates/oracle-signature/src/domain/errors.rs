//! # Signature Errors
//!
//! Error types for signature parsing and signer recovery.

use thiserror::Error;

/// Errors that can occur while parsing a signature or recovering its signer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignatureError {
    /// The signature is not exactly 65 bytes.
    #[error("Invalid signature length: expected 65 bytes, got {0}")]
    InvalidLength(usize),

    /// Recovery ID is not 27 or 28 after normalization (raw byte reported).
    #[error("Invalid recovery ID: {0}")]
    InvalidRecoveryId(u8),

    /// R or S is zero or not below the curve order.
    #[error("Invalid signature scalar")]
    InvalidScalar,

    /// No public key could be recovered for this digest and signature.
    #[error("Failed to recover public key")]
    RecoveryFailed,
}

impl SignatureError {
    /// Whether the error is about the byte layout rather than the curve math.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::InvalidLength(_) | Self::InvalidRecoveryId(_))
    }
}
