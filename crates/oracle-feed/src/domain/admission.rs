//! Report admission
//!
//! Pure validation of a signed report against the current registry and
//! ledger. Nothing here mutates state; the service appends the resulting
//! round only when every check has passed.
//!
//! Check order, short-circuiting:
//! 1. decode
//! 2. freshness (newer than latest, within the drift and age window)
//! 3. signer recovery, membership and de-duplication, per signature in order
//! 4. threshold over the distinct trusted count
//! 5. round index space

use super::{
    report_digest, OracleConfig, OracleError, OracleResult, Report, RoundIndex, RoundLedger,
    SignerPolicy, TrustRegistry,
};
use oracle_signature::SignerRecovery;
use serde::{Deserialize, Serialize};
use shared_types::Address;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Why a signature was left out of the count under `SignerPolicy::SkipUntrusted`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    Untrusted(Address),
    Unrecoverable(String),
}

/// A signature excluded from the count
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedSignature {
    /// Position in the submitted signature list
    pub index: usize,
    pub reason: SkipReason,
}

/// A report that passed every check, ready to be appended
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Admission {
    pub report: Report,
    pub round_index: RoundIndex,
    pub signers: Vec<Address>,
    pub required: usize,
    pub skipped: Vec<SkippedSignature>,
}

/// Result of a successful admission
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdmissionOutcome {
    pub round_index: RoundIndex,
    /// Distinct trusted signers counted
    pub signer_count: usize,
    /// Threshold in force at admission time
    pub required: usize,
    pub skipped: Vec<SkippedSignature>,
}

/// Validate `report_bytes` and its signatures without touching state.
pub fn evaluate<R, S>(
    report_bytes: &[u8],
    signatures: &[S],
    registry: &TrustRegistry,
    ledger: &RoundLedger,
    recoverer: &R,
    config: &OracleConfig,
    now: u64,
) -> OracleResult<Admission>
where
    R: SignerRecovery + ?Sized,
    S: AsRef<[u8]>,
{
    let report = Report::decode(report_bytes)?;

    config.freshness.check(
        report.observed_timestamp,
        ledger.latest_observed_timestamp(),
        now,
    )?;

    let digest = report_digest(report_bytes);

    let mut seen = HashSet::with_capacity(signatures.len());
    let mut signers = Vec::with_capacity(signatures.len());
    let mut skipped = Vec::new();

    for (index, signature) in signatures.iter().enumerate() {
        let signer = match recoverer.recover(&digest, signature.as_ref()) {
            Ok(signer) => signer,
            Err(e) if e.is_malformed() => return Err(OracleError::from_signature(index, e)),
            Err(e) => match config.signer_policy {
                SignerPolicy::Strict => return Err(OracleError::from_signature(index, e)),
                SignerPolicy::SkipUntrusted => {
                    warn!(index, error = %e, "skipping unrecoverable signature");
                    skipped.push(SkippedSignature {
                        index,
                        reason: SkipReason::Unrecoverable(e.to_string()),
                    });
                    continue;
                }
            },
        };

        if !registry.is_trusted(&signer) {
            match config.signer_policy {
                SignerPolicy::Strict => {
                    return Err(OracleError::UntrustedSigner { index, signer });
                }
                SignerPolicy::SkipUntrusted => {
                    warn!(index, %signer, "skipping untrusted signer");
                    skipped.push(SkippedSignature {
                        index,
                        reason: SkipReason::Untrusted(signer),
                    });
                    continue;
                }
            }
        }

        if seen.insert(signer) {
            debug!(index, %signer, "counted trusted signer");
            signers.push(signer);
        } else {
            debug!(index, %signer, "duplicate signer ignored");
        }
    }

    let required = config.threshold.required_signatures(registry.count());
    if signers.len() < required {
        return Err(OracleError::InsufficientSignatures {
            got: signers.len(),
            required,
        });
    }

    let round_index = ledger.next_index()?;

    Ok(Admission {
        report,
        round_index,
        signers,
        required,
        skipped,
    })
}
