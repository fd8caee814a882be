//! # Domain Entities
//!
//! The structured form of a 65-byte recoverable signature.

use super::errors::SignatureError;
use serde::{Deserialize, Serialize};

/// Length of a recoverable signature on the wire.
pub const SIGNATURE_LENGTH: usize = 65;

/// Recoverable ECDSA signature on the secp256k1 curve.
///
/// Built only through [`RecoverableSignature::from_slice`] or
/// [`RecoverableSignature::new`], so `v` is always 27 or 28.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoverableSignature {
    /// R component (32 bytes)
    pub r: [u8; 32],
    /// S component (32 bytes)
    pub s: [u8; 32],
    /// Normalized recovery ID (27 or 28)
    pub v: u8,
}

impl RecoverableSignature {
    /// Build from components, normalizing `v` from `{0, 1}` to `{27, 28}`.
    pub fn new(r: [u8; 32], s: [u8; 32], v: u8) -> Result<Self, SignatureError> {
        let normalized = if v < 27 { v + 27 } else { v };
        if normalized != 27 && normalized != 28 {
            return Err(SignatureError::InvalidRecoveryId(v));
        }
        Ok(Self {
            r,
            s,
            v: normalized,
        })
    }

    /// Decode the `r || s || v` wire layout.
    ///
    /// The length is checked before any byte is interpreted.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SignatureError> {
        let bytes: &[u8; SIGNATURE_LENGTH] = bytes
            .try_into()
            .map_err(|_| SignatureError::InvalidLength(bytes.len()))?;

        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..64]);

        Self::new(r, s, bytes[64])
    }

    /// Encode to the 65-byte wire layout.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        let mut out = [0u8; SIGNATURE_LENGTH];
        out[..32].copy_from_slice(&self.r);
        out[32..64].copy_from_slice(&self.s);
        out[64] = self.v;
        out
    }

    /// Recovery id in the `{0, 1}` form used by the curve library.
    pub fn recovery_byte(&self) -> u8 {
        self.v - 27
    }
}
