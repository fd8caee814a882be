//! Trusted reporter registry

use super::{OracleError, OracleResult};
use shared_types::Address;
use std::collections::HashMap;

/// Set of reporters whose signatures count toward acceptance.
///
/// Dense storage plus a position index, so both insertion and removal are
/// O(1). Removal swaps the last entry into the vacated slot, so enumeration
/// order is not stable across removals.
#[derive(Clone, Debug, Default)]
pub struct TrustRegistry {
    reporters: Vec<Address>,
    /// Quick lookup by address
    lookup: HashMap<Address, usize>,
}

impl TrustRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a reporter is currently trusted
    pub fn is_trusted(&self, reporter: &Address) -> bool {
        self.lookup.contains_key(reporter)
    }

    /// Add a reporter
    pub fn add(&mut self, reporter: Address) -> OracleResult<()> {
        if self.is_trusted(&reporter) {
            return Err(OracleError::AlreadyTrusted(reporter));
        }
        self.lookup.insert(reporter, self.reporters.len());
        self.reporters.push(reporter);
        Ok(())
    }

    /// Remove a reporter
    pub fn remove(&mut self, reporter: &Address) -> OracleResult<()> {
        let position = self
            .lookup
            .remove(reporter)
            .ok_or(OracleError::NotTrusted(*reporter))?;

        self.reporters.swap_remove(position);
        if let Some(moved) = self.reporters.get(position) {
            self.lookup.insert(*moved, position);
        }
        Ok(())
    }

    /// Number of trusted reporters
    pub fn count(&self) -> usize {
        self.reporters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reporters.is_empty()
    }

    /// All trusted reporters, in storage order
    pub fn enumerate(&self) -> &[Address] {
        &self.reporters
    }
}
