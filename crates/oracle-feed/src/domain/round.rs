//! Accepted rounds and the append-only ledger

use super::{OracleError, OracleResult, Report};
use primitive_types::U256;
use serde::{Deserialize, Serialize};
use shared_types::I256;
use std::collections::HashMap;

/// Sequential ledger index; 0 means "no rounds yet"
pub type RoundIndex = u64;

/// An accepted report, immutable once stored
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub price: I256,
    pub report_round_id: U256,
    pub observed_timestamp: U256,
    pub accepted_block_height: u64,
    pub accepted_timestamp: u64,
    /// Distinct trusted signers that attested
    pub signature_count: usize,
}

impl Round {
    pub fn from_report(
        report: &Report,
        accepted_block_height: u64,
        accepted_timestamp: u64,
        signature_count: usize,
    ) -> Self {
        Self {
            price: report.price,
            report_round_id: report.report_round_id,
            observed_timestamp: report.observed_timestamp,
            accepted_block_height,
            accepted_timestamp,
            signature_count,
        }
    }
}

/// Append-only store of accepted rounds.
///
/// Rounds `1..=latest_index` exist and their observation timestamps are
/// strictly increasing. Indices are never reused.
#[derive(Clone, Debug, Default)]
pub struct RoundLedger {
    latest_index: RoundIndex,
    rounds: HashMap<RoundIndex, Round>,
    /// Zero-valued round returned by `latest()` before the first acceptance
    sentinel: Round,
}

impl RoundLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latest_index(&self) -> RoundIndex {
        self.latest_index
    }

    /// Index the next append would receive
    pub fn next_index(&self) -> OracleResult<RoundIndex> {
        self.latest_index
            .checked_add(1)
            .ok_or(OracleError::RoundOverflow {
                latest: self.latest_index,
            })
    }

    /// Store a round under the next index and return that index
    pub(crate) fn append(&mut self, round: Round) -> OracleResult<RoundIndex> {
        let index = self.next_index()?;
        self.rounds.insert(index, round);
        self.latest_index = index;
        Ok(index)
    }

    pub fn get(&self, index: RoundIndex) -> OracleResult<&Round> {
        if index == 0 || index > self.latest_index {
            return Err(OracleError::RoundUnavailable {
                index,
                latest: self.latest_index,
            });
        }
        self.rounds.get(&index).ok_or(OracleError::RoundUnavailable {
            index,
            latest: self.latest_index,
        })
    }

    /// Latest round, or the zero-valued sentinel when none exists
    pub fn latest(&self) -> &Round {
        self.rounds
            .get(&self.latest_index)
            .unwrap_or(&self.sentinel)
    }

    /// Observation time of the latest round, zero when none exists
    pub fn latest_observed_timestamp(&self) -> U256 {
        self.latest().observed_timestamp
    }

    /// Jump the index counter forward, leaving the gap empty
    #[cfg(test)]
    pub(crate) fn fast_forward(&mut self, latest_index: RoundIndex) {
        self.latest_index = latest_index;
    }
}
