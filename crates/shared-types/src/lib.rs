//! # Shared Types Crate
//!
//! Value types used across the oracle workspace.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: identities, digests and 256-bit words are
//!   defined once here and re-exported by the higher crates.
//! - **Wire Fidelity**: `U256` and [`I256`] hold the full 256-bit values of the
//!   report encoding; nothing is truncated on decode.

pub mod entities;
pub mod errors;
pub mod word;

pub use entities::*;
pub use errors::*;
pub use word::I256;
