//! Driven ports (Outbound dependencies)

use crate::events::OracleEvent;
use shared_types::Address;

pub use oracle_signature::SignerRecovery;

/// Time source for freshness checks and round stamping
pub trait Clock: Send + Sync {
    /// Current unix timestamp in seconds
    fn now(&self) -> u64;

    /// Current block height
    fn block_height(&self) -> u64;
}

/// Sink for oracle notifications
///
/// Called while the oracle state lock is held, so implementations must not
/// block and must not call back into the oracle.
pub trait OracleEventSink: Send + Sync {
    /// Fire-and-forget; delivery failures are the sink's concern
    fn publish(&self, event: OracleEvent);
}

/// Capability check for admin operations
pub trait AccessPolicy: Send + Sync {
    fn is_authorized(&self, caller: &Address) -> bool;
}
