//! Domain layer for the price oracle
//!
//! Pure logic, no I/O:
//! - registry: trusted reporter set
//! - threshold: required distinct signatures
//! - report: 96-byte wire codec
//! - freshness: observation time window
//! - admission: per-report validation
//! - round: accepted rounds and the ledger

mod admission;
mod config;
mod error;
mod freshness;
mod registry;
mod report;
mod round;
mod threshold;

pub use admission::*;
pub use config::*;
pub use error::*;
pub use freshness::*;
pub use registry::*;
pub use report::*;
pub use round::*;
pub use threshold::*;
