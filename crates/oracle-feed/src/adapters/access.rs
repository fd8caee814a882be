//! Access policy adapters

use crate::ports::AccessPolicy;
use shared_types::Address;

/// Single-owner capability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnerPolicy {
    owner: Address,
}

impl OwnerPolicy {
    pub fn new(owner: Address) -> Self {
        Self { owner }
    }

    pub fn owner(&self) -> Address {
        self.owner
    }
}

impl AccessPolicy for OwnerPolicy {
    fn is_authorized(&self, caller: &Address) -> bool {
        *caller == self.owner
    }
}
