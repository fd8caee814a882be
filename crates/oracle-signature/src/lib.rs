//! # Signature Recovery
//!
//! Recovers the reporter identity behind a 65-byte recoverable secp256k1
//! signature over a report digest.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure cryptographic logic, no I/O
//! - **Ports Layer** (`ports/`): The `SignerRecovery` trait consumed by the feed
//!
//! ## Wire Format
//!
//! A signature is exactly 65 bytes: `r (32) || s (32) || v (1)`. Both
//! recovery-id conventions are accepted: `v ∈ {0, 1}` is normalized by adding
//! 27, after which only 27 and 28 are valid.
//!
//! ## Security Notes
//!
//! - Recovery answers only "who signed this digest". Whether that identity is
//!   trusted is decided by the caller.
//! - High-S and low-S encodings of one signature recover the same signer,
//!   so de-duplication by identity counts them once.

pub mod domain;
pub mod ports;

// Re-export public API
pub use domain::ecdsa::{address_from_pubkey, keccak256, recover_address, EcdsaRecoverer};
pub use domain::entities::{RecoverableSignature, SIGNATURE_LENGTH};
pub use domain::errors::SignatureError;
pub use ports::inbound::SignerRecovery;
pub use shared_types::{Address, Hash};

#[cfg(any(test, feature = "test-helpers"))]
pub use domain::ecdsa::test_helpers;
