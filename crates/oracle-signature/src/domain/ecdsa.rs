//! # ECDSA Signer Recovery (secp256k1)
//!
//! Pure domain logic for recovering reporter addresses from signatures.
//!
//! ## Security Notes
//!
//! - **Scalar Range Validation**: R and S must be in [1, n-1]
//! - **Both S Halves Recover**: a high-S signature is normalized before
//!   recovery and yields the same signer as its low-S twin
//! - **Constant-Time Operations**: Uses `subtle` crate for side-channel resistance
//! - Uses k256 crate for cryptographic operations

use super::entities::RecoverableSignature;
use super::errors::SignatureError;
use crate::ports::inbound::SignerRecovery;
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use sha3::{Digest, Keccak256};
use shared_types::{Address, Hash};
use subtle::{Choice, ConstantTimeEq};
use tracing::trace;

/// secp256k1 curve order n
/// n = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141
const SECP256K1_ORDER: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
];

// =============================================================================
// RECOVERER
// =============================================================================

/// Stateless secp256k1 signer recovery.
#[derive(Debug, Clone, Copy, Default)]
pub struct EcdsaRecoverer;

impl EcdsaRecoverer {
    pub fn new() -> Self {
        Self
    }
}

impl SignerRecovery for EcdsaRecoverer {
    fn recover(&self, message_hash: &Hash, signature: &[u8]) -> Result<Address, SignatureError> {
        let signature = RecoverableSignature::from_slice(signature)?;
        recover_address(message_hash, &signature)
    }
}

// =============================================================================
// CORE FUNCTIONS
// =============================================================================

/// Recover the signer's address from a parsed signature.
///
/// R and S must be in [1, n-1]. A high S is folded to `n - s` with the
/// recovery parity flipped, which describes the same signer.
pub fn recover_address(
    message_hash: &Hash,
    signature: &RecoverableSignature,
) -> Result<Address, SignatureError> {
    use zeroize::Zeroize;

    if !is_valid_scalar(&signature.r) || !is_valid_scalar(&signature.s) {
        return Err(SignatureError::InvalidScalar);
    }

    let recovery_id = RecoveryId::try_from(signature.recovery_byte())
        .map_err(|_| SignatureError::InvalidRecoveryId(signature.v))?;

    // sig_bytes is cleared on every path
    let mut sig_bytes = [0u8; 64];
    sig_bytes[..32].copy_from_slice(&signature.r);
    sig_bytes[32..].copy_from_slice(&signature.s);
    let parsed = Signature::from_slice(&sig_bytes);
    sig_bytes.zeroize();
    let sig = parsed.map_err(|_| SignatureError::InvalidScalar)?;
    let (sig, recovery_id) = normalize(sig, recovery_id);

    let recovered_key = VerifyingKey::recover_from_prehash(message_hash, &sig, recovery_id)
        .map_err(|_| SignatureError::RecoveryFailed)?;

    let address = address_from_pubkey(&recovered_key);
    trace!(signer = %address, "recovered signer");
    Ok(address)
}

/// Keccak256 hash function.
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

/// Derive the Ethereum-style address of a public key.
pub fn address_from_pubkey(public_key: &VerifyingKey) -> Address {
    let pubkey_bytes = public_key.to_encoded_point(false);
    let pubkey_slice = pubkey_bytes.as_bytes();

    // Keccak256 hash of public key (without 0x04 prefix)
    let hash = keccak256(&pubkey_slice[1..]);
    Address::from_digest(&hash)
}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Fold a high-S signature into the lower half, flipping the y parity.
fn normalize(sig: Signature, recovery_id: RecoveryId) -> (Signature, RecoveryId) {
    match sig.normalize_s() {
        Some(low) => (
            low,
            RecoveryId::new(!recovery_id.is_y_odd(), recovery_id.is_x_reduced()),
        ),
        None => (sig, recovery_id),
    }
}

/// Check if a scalar value is in valid range [1, n-1] for ECDSA.
fn is_valid_scalar(scalar: &[u8; 32]) -> bool {
    let mut is_zero = Choice::from(1u8);
    for &byte in scalar {
        is_zero &= byte.ct_eq(&0u8);
    }

    let mut less = Choice::from(0u8);
    let mut greater = Choice::from(0u8);

    for i in 0..32 {
        let s_byte = scalar[i];
        let n_byte = SECP256K1_ORDER[i];

        let not_decided = !(less | greater);
        let byte_less = Choice::from((s_byte < n_byte) as u8);
        let byte_greater = Choice::from((s_byte > n_byte) as u8);

        less |= not_decided & byte_less;
        greater |= not_decided & byte_greater;
    }

    (!is_zero & less).into()
}

/// Invert S value: s' = n - s
#[cfg(any(test, feature = "test-helpers"))]
fn invert_s(s: &[u8; 32]) -> [u8; 32] {
    let mut result = [0u8; 32];
    let mut borrow: i32 = 0;

    for i in (0..32).rev() {
        let diff = (SECP256K1_ORDER[i] as i32) - (s[i] as i32) - borrow;
        if diff < 0 {
            result[i] = (diff + 256) as u8;
            borrow = 1;
        } else {
            result[i] = diff as u8;
            borrow = 0;
        }
    }

    result
}

// =============================================================================
// TEST HELPERS
// =============================================================================

/// Key generation and signing for reporters, tests and benchmarks.
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use super::*;
    pub use k256::ecdsa::SigningKey;

    /// Generate a new ECDSA keypair.
    pub fn generate_keypair() -> (SigningKey, VerifyingKey) {
        let signing_key = SigningKey::random(&mut rand::thread_rng());
        let verifying_key = *signing_key.verifying_key();
        (signing_key, verifying_key)
    }

    /// Address of a signing key.
    pub fn address_of(private_key: &SigningKey) -> Address {
        address_from_pubkey(private_key.verifying_key())
    }

    /// Sign a message hash, producing a low-S signature with `v ∈ {27, 28}`.
    pub fn sign(message_hash: &Hash, private_key: &SigningKey) -> RecoverableSignature {
        let (sig, recid) = private_key
            .sign_prehash_recoverable(message_hash)
            .expect("signing failed");

        let (sig, recid) = normalize(sig, recid);
        let sig_bytes = sig.to_bytes();
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&sig_bytes[..32]);
        s.copy_from_slice(&sig_bytes[32..]);

        RecoverableSignature {
            r,
            s,
            v: recid.to_byte() + 27,
        }
    }

    /// Sign and encode to the 65-byte wire layout.
    pub fn sign_bytes(message_hash: &Hash, private_key: &SigningKey) -> Vec<u8> {
        sign(message_hash, private_key).to_bytes().to_vec()
    }

    /// The high-S twin of a low-S signature: `s' = n - s` with the parity flipped.
    pub fn make_malleable(signature: &RecoverableSignature) -> RecoverableSignature {
        RecoverableSignature {
            r: signature.r,
            s: invert_s(&signature.s),
            v: if signature.v == 27 { 28 } else { 27 },
        }
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
