//! # Inbound Ports (Driving Ports / API)
//!
//! The recovery API consumed by report admission.

use crate::domain::errors::SignatureError;
use shared_types::{Address, Hash};

/// Recover the address that produced a signature over a digest.
///
/// Implementations must be pure and deterministic: the same digest and
/// signature bytes always yield the same result. Implementations must be
/// thread-safe (`Send + Sync`).
pub trait SignerRecovery: Send + Sync {
    /// Recover the signer of `message_hash` from 65 wire bytes.
    ///
    /// # Errors
    /// * `SignatureError::InvalidLength` - not exactly 65 bytes
    /// * `SignatureError::InvalidRecoveryId` - `v` not in `{0, 1, 27, 28}`
    /// * other variants - the bytes parse but name no recoverable key
    fn recover(&self, message_hash: &Hash, signature: &[u8]) -> Result<Address, SignatureError>;
}

impl<T: SignerRecovery + ?Sized> SignerRecovery for std::sync::Arc<T> {
    fn recover(&self, message_hash: &Hash, signature: &[u8]) -> Result<Address, SignatureError> {
        (**self).recover(message_hash, signature)
    }
}
