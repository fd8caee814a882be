//! Driving ports (Inbound API)

use crate::domain::{AdmissionOutcome, OracleResult, Round, RoundIndex};
use primitive_types::U256;
use shared_types::{Address, I256};

/// `(price, report_round_id, observed_timestamp, accepted_block_height)`
pub type RoundView = (I256, U256, U256, u64);

/// Latest round in the aggregator read shape
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LatestRoundData {
    pub round_index: RoundIndex,
    pub price: I256,
    pub observed_timestamp: U256,
    pub accepted_timestamp: u64,
    /// Always equal to `round_index`
    pub answered_in_round: RoundIndex,
}

/// Report submission, open to any caller
pub trait ReportSubmissionApi: Send + Sync {
    /// Admit a signed report and return the new round index
    ///
    /// `signatures` are 65-byte recoverable signatures over keccak256 of
    /// exactly `report`.
    fn admit(
        &self,
        submitter: Address,
        report: &[u8],
        signatures: &[Vec<u8>],
    ) -> OracleResult<RoundIndex> {
        self.admit_detailed(submitter, report, signatures)
            .map(|outcome| outcome.round_index)
    }

    /// Admit a signed report, reporting counted and skipped signers
    fn admit_detailed(
        &self,
        submitter: Address,
        report: &[u8],
        signatures: &[Vec<u8>],
    ) -> OracleResult<AdmissionOutcome>;
}

/// Read-only price feed queries
pub trait PriceFeedApi: Send + Sync {
    fn is_trusted(&self, reporter: &Address) -> bool;

    /// Trusted reporters; order is not stable across removals
    fn trusted_reporters(&self) -> Vec<Address>;

    fn trusted_count(&self) -> usize;

    /// Threshold for the current registry size
    fn required_signatures(&self) -> usize;

    fn round(&self, index: RoundIndex) -> OracleResult<Round>;

    fn get_round(&self, index: RoundIndex) -> OracleResult<RoundView> {
        self.round(index).map(|r| {
            (
                r.price,
                r.report_round_id,
                r.observed_timestamp,
                r.accepted_block_height,
            )
        })
    }

    /// Zero before the first accepted round
    fn latest_price(&self) -> I256;

    /// Observation time of the latest round, zero before the first
    fn latest_timestamp(&self) -> U256;

    fn latest_round_index(&self) -> RoundIndex;

    fn latest_round_data(&self) -> LatestRoundData;

    fn description(&self) -> String;

    fn decimals(&self) -> u8;

    fn version(&self) -> u64;
}

/// Owner-gated administration
pub trait OracleAdminApi: Send + Sync {
    fn add_trusted_reporter(&self, caller: Address, reporter: Address) -> OracleResult<()>;

    fn remove_trusted_reporter(&self, caller: Address, reporter: Address) -> OracleResult<()>;

    fn set_description(&self, caller: Address, description: String) -> OracleResult<()>;

    fn set_decimals(&self, caller: Address, decimals: u8) -> OracleResult<()>;
}
