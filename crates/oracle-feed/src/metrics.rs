//! # Oracle Metrics
//!
//! Prometheus metrics for monitoring report admission.
//!
//! ## Usage
//!
//! Enable with the `metrics` feature:
//! ```toml
//! oracle-feed = { path = "...", features = ["metrics"] }
//! ```
//!
//! ## Metrics Exported
//!
//! - `oracle_rounds_accepted_total` - Counter of accepted rounds
//! - `oracle_reports_rejected_total` - Counter of rejected reports (by reason)
//! - `oracle_signatures_recovered_total` - Counter of counted trusted signers
//! - `oracle_admission_latency_seconds` - Histogram of admission times

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{
    register_counter_vec, register_histogram, register_int_counter, CounterVec, Histogram,
    IntCounter,
};

#[cfg(feature = "metrics")]
lazy_static! {
    /// Total rounds accepted
    pub static ref ROUNDS_ACCEPTED: IntCounter = register_int_counter!(
        "oracle_rounds_accepted_total",
        "Total number of reports accepted as rounds"
    )
    .expect("Failed to create ROUNDS_ACCEPTED metric");

    /// Total reports rejected, labeled by rejection reason
    pub static ref REPORTS_REJECTED: CounterVec = register_counter_vec!(
        "oracle_reports_rejected_total",
        "Total number of reports rejected",
        &["reason"]
    )
    .expect("Failed to create REPORTS_REJECTED metric");

    /// Total trusted signers counted toward accepted rounds
    pub static ref SIGNATURES_RECOVERED: IntCounter = register_int_counter!(
        "oracle_signatures_recovered_total",
        "Total number of trusted signers recovered for accepted rounds"
    )
    .expect("Failed to create SIGNATURES_RECOVERED metric");

    /// Histogram of admission latency
    pub static ref ADMISSION_LATENCY: Histogram = register_histogram!(
        "oracle_admission_latency_seconds",
        "Time taken to admit or reject a report in seconds",
        vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25]
    )
    .expect("Failed to create ADMISSION_LATENCY metric");
}

/// Record an accepted round
#[cfg(feature = "metrics")]
pub fn record_round_accepted(signers: usize) {
    ROUNDS_ACCEPTED.inc();
    SIGNATURES_RECOVERED.inc_by(signers as u64);
}

/// Record a rejected report with reason
#[cfg(feature = "metrics")]
pub fn record_report_rejected(reason: &str) {
    REPORTS_REJECTED.with_label_values(&[reason]).inc();
}

/// Record admission latency
#[cfg(feature = "metrics")]
pub fn record_admission_latency(seconds: f64) {
    ADMISSION_LATENCY.observe(seconds);
}

// No-op implementations when metrics feature is disabled
#[cfg(not(feature = "metrics"))]
pub fn record_round_accepted(_signers: usize) {}

#[cfg(not(feature = "metrics"))]
pub fn record_report_rejected(_reason: &str) {}

#[cfg(not(feature = "metrics"))]
pub fn record_admission_latency(_seconds: f64) {}
