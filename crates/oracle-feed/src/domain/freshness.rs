//! Timestamp freshness policy

use super::{OracleError, OracleResult};
use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// Default tolerance for observations ahead of the local clock (5 minutes)
pub const DEFAULT_MAX_FUTURE_DRIFT_SECS: u64 = 300;

/// Default maximum observation age (1 hour)
pub const DEFAULT_MAX_AGE_SECS: u64 = 3600;

/// Window an observation timestamp must fall into
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FreshnessPolicy {
    pub max_future_drift_secs: u64,
    pub max_age_secs: u64,
}

impl Default for FreshnessPolicy {
    fn default() -> Self {
        Self {
            max_future_drift_secs: DEFAULT_MAX_FUTURE_DRIFT_SECS,
            max_age_secs: DEFAULT_MAX_AGE_SECS,
        }
    }
}

impl FreshnessPolicy {
    /// Check an observation against the latest accepted one and `now`.
    ///
    /// Order: newer than latest, not too far ahead, not too old.
    pub fn check(&self, observed: U256, latest: U256, now: u64) -> OracleResult<()> {
        if observed <= latest {
            return Err(OracleError::NotNewer { observed, latest });
        }

        let max_allowed = now.saturating_add(self.max_future_drift_secs);
        if observed > U256::from(max_allowed) {
            return Err(OracleError::TooFarInFuture {
                observed,
                max_allowed,
            });
        }

        let min_allowed = now.saturating_sub(self.max_age_secs);
        if observed < U256::from(min_allowed) {
            return Err(OracleError::TooOld {
                observed,
                min_allowed,
            });
        }

        Ok(())
    }
}
