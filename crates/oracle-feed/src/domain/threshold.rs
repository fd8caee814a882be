//! Acceptance threshold policy

use serde::{Deserialize, Serialize};

/// How many distinct trusted signatures a report needs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdFormula {
    /// `floor(2n/3) + 1`, clamped to `[1, n]`
    #[default]
    SupermajorityPlusOne,
    /// `floor(2n/3)`, clamped to `[1, n]`
    Supermajority,
}

impl ThresholdFormula {
    /// Required distinct signatures for `total` trusted reporters.
    ///
    /// Never below 1 and never above `total` when `total > 0`.
    pub fn required_signatures(self, total: usize) -> usize {
        let two_thirds = total.saturating_mul(2) / 3;
        let raw = match self {
            Self::SupermajorityPlusOne => two_thirds.saturating_add(1),
            Self::Supermajority => two_thirds,
        };
        raw.min(total).max(1)
    }

    /// Parse the configuration spelling.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "supermajority_plus_one" => Some(Self::SupermajorityPlusOne),
            "supermajority" => Some(Self::Supermajority),
            _ => None,
        }
    }
}

/// Required signatures under the default formula.
pub fn required_signatures(total: usize) -> usize {
    ThresholdFormula::default().required_signatures(total)
}
