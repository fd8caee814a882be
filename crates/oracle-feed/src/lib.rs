//! # oracle-feed
//!
//! Push-style price oracle: admission of signed price reports and the
//! round ledger they produce.
//!
//! ## Architecture
//!
//! A small set of trusted reporters sign observations off-chain. Any relayer
//! submits a report with its signatures; the oracle accepts it only if enough
//! distinct trusted signers attest to it and the observation is fresh and
//! strictly newer than the last accepted one.
//!
//! ```text
//! report + signatures ──→ decode ──→ freshness ──→ recover + membership + dedup
//!                                                          │
//!                          RoundLedger.append ←── threshold(TrustRegistry.count())
//! ```
//!
//! ### Layers
//!
//! - `domain/`: registry, threshold, codec, freshness, admission, ledger
//! - `ports/`: inbound APIs and outbound dependencies (clock, events, access)
//! - `adapters/`: in-memory and broadcast event buses, clocks, owner policy
//! - `service/`: `PriceOracle`, wiring everything under one lock
//!
//! ## Usage
//!
//! ```rust,ignore
//! use oracle_feed::{OracleBuilder, ReportSubmissionApi, PriceFeedApi};
//!
//! let oracle = OracleBuilder::new(owner)
//!     .reporters([alice, bob])
//!     .build()?;
//!
//! let round = oracle.admit(relayer, &report_bytes, &signatures)?;
//! let price = oracle.latest_price();
//! ```

pub mod adapters;
pub mod domain;
pub mod events;
pub mod metrics;
pub mod ports;
pub mod service;

// Re-export main types
pub use adapters::{
    BroadcastEventBus, InMemoryEventBus, ManualClock, NoopEventSink, OwnerPolicy, SystemClock,
    TracingEventSink,
};
pub use domain::{
    report_digest, required_signatures, AdmissionOutcome, BuildError, ConfigError,
    FreshnessPolicy, OracleConfig, OracleError, OracleResult, Report, Round, RoundIndex,
    SignerPolicy, SkipReason, SkippedSignature, ThresholdFormula, REPORT_LENGTH,
};
pub use events::OracleEvent;
pub use ports::{
    AccessPolicy, Clock, LatestRoundData, OracleAdminApi, OracleEventSink, PriceFeedApi,
    ReportSubmissionApi, RoundView, SignerRecovery,
};
pub use service::{OracleBuilder, PriceOracle, ORACLE_VERSION};
