//! Error types for the price oracle

use oracle_signature::SignatureError;
use primitive_types::U256;
use shared_types::Address;

/// Oracle error types
///
/// Every failure aborts the whole operation; no state is changed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    #[error("Malformed report: expected 96 bytes, got {length}")]
    MalformedReport { length: usize },

    #[error("Invalid length for signature #{index}: expected 65 bytes, got {length}")]
    InvalidSignatureLength { index: usize, length: usize },

    #[error("Invalid recovery id for signature #{index}: {v}")]
    InvalidRecoveryId { index: usize, v: u8 },

    #[error("Cannot recover signer of signature #{index}: {source}")]
    UnrecoverableSignature {
        index: usize,
        #[source]
        source: SignatureError,
    },

    #[error("Signature #{index} recovers to untrusted signer {signer}")]
    UntrustedSigner { index: usize, signer: Address },

    #[error("Report not newer: observed {observed} <= latest {latest}")]
    NotNewer { observed: U256, latest: U256 },

    #[error("Report too far in future: observed {observed} > max allowed {max_allowed}")]
    TooFarInFuture { observed: U256, max_allowed: u64 },

    #[error("Report too old: observed {observed} < min allowed {min_allowed}")]
    TooOld { observed: U256, min_allowed: u64 },

    #[error("Insufficient signatures: {got} distinct trusted, required {required}")]
    InsufficientSignatures { got: usize, required: usize },

    #[error("Round index space exhausted at {latest}")]
    RoundOverflow { latest: u64 },

    #[error("Round {index} unavailable (latest is {latest})")]
    RoundUnavailable { index: u64, latest: u64 },

    #[error("Reporter already trusted: {0}")]
    AlreadyTrusted(Address),

    #[error("Reporter not trusted: {0}")]
    NotTrusted(Address),

    #[error("Unauthorized caller: {0}")]
    Unauthorized(Address),
}

impl OracleError {
    /// Map a recovery failure for the signature at `index`.
    pub fn from_signature(index: usize, error: SignatureError) -> Self {
        match error {
            SignatureError::InvalidLength(length) => Self::InvalidSignatureLength { index, length },
            SignatureError::InvalidRecoveryId(v) => Self::InvalidRecoveryId { index, v },
            source => Self::UnrecoverableSignature { index, source },
        }
    }

    /// Short, stable label used for log fields and metric labels.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::MalformedReport { .. } => "malformed_report",
            Self::InvalidSignatureLength { .. } => "invalid_signature_length",
            Self::InvalidRecoveryId { .. } => "invalid_recovery_id",
            Self::UnrecoverableSignature { .. } => "unrecoverable_signature",
            Self::UntrustedSigner { .. } => "untrusted_signer",
            Self::NotNewer { .. } => "not_newer",
            Self::TooFarInFuture { .. } => "too_far_in_future",
            Self::TooOld { .. } => "too_old",
            Self::InsufficientSignatures { .. } => "insufficient_signatures",
            Self::RoundOverflow { .. } => "round_overflow",
            Self::RoundUnavailable { .. } => "round_unavailable",
            Self::AlreadyTrusted(_) => "already_trusted",
            Self::NotTrusted(_) => "not_trusted",
            Self::Unauthorized(_) => "unauthorized",
        }
    }
}

/// Result type for oracle operations
pub type OracleResult<T> = Result<T, OracleError>;

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("max_age_secs must be greater than zero")]
    ZeroMaxAge,

    #[error("Invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}

/// Errors raised while assembling an oracle
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Oracle(#[from] OracleError),
}
