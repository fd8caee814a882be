//! Fuzz target for signer recovery.
//!
//! Feeds arbitrary digests and signature bytes of any length through the
//! recovery path used by report admission.
//!
//! ## Running
//!
//! ```bash
//! cd crates/oracle-signature
//! cargo +nightly fuzz run fuzz_signer_recovery
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use oracle_signature::{EcdsaRecoverer, SignatureError, SignerRecovery, SIGNATURE_LENGTH};

/// Fuzz input structure for signer recovery.
#[derive(Debug, arbitrary::Arbitrary)]
struct FuzzInput {
    /// Digest the signature claims to cover
    message_hash: [u8; 32],
    /// Raw signature bytes, any length
    signature: Vec<u8>,
}

fuzz_target!(|input: FuzzInput| {
    let recoverer = EcdsaRecoverer::new();

    // Must NEVER panic, regardless of input
    let result = recoverer.recover(&input.message_hash, &input.signature);

    // 1. Deterministic
    let result2 = recoverer.recover(&input.message_hash, &input.signature);
    assert_eq!(result, result2);

    // 2. Length is checked before anything else
    if input.signature.len() != SIGNATURE_LENGTH {
        assert_eq!(result, Err(SignatureError::InvalidLength(input.signature.len())));
    }

    // 3. A recovered address is never the zero address
    if let Ok(address) = result {
        assert!(!address.is_zero());
    }
});
