//! Notifications published by the oracle
//!
//! One event per successful state change, in state order.

use crate::domain::RoundIndex;
use primitive_types::U256;
use serde::{Deserialize, Serialize};
use shared_types::{Address, I256};

/// Oracle state-change notification
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OracleEvent {
    ReporterAdded {
        reporter: Address,
    },
    ReporterRemoved {
        reporter: Address,
    },
    RoundAccepted {
        round_index: RoundIndex,
        price: I256,
        report_round_id: U256,
        observed_timestamp: U256,
        accepted_timestamp: u64,
        accepted_block_height: u64,
        signature_count: usize,
        submitter: Address,
    },
    DescriptionChanged {
        description: String,
    },
    DecimalsChanged {
        decimals: u8,
    },
}

impl OracleEvent {
    /// Event name used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ReporterAdded { .. } => "reporter_added",
            Self::ReporterRemoved { .. } => "reporter_removed",
            Self::RoundAccepted { .. } => "round_accepted",
            Self::DescriptionChanged { .. } => "description_changed",
            Self::DecimalsChanged { .. } => "decimals_changed",
        }
    }
}
