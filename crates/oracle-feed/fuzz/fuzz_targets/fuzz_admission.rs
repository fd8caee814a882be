//! Fuzz target for report admission.
//!
//! Arbitrary report bytes and signature lists must never panic and must
//! never change state on rejection.
//!
//! ## Running
//!
//! ```bash
//! cd crates/oracle-feed
//! cargo +nightly fuzz run fuzz_admission
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use oracle_feed::{
    InMemoryEventBus, ManualClock, OracleBuilder, OracleConfig, PriceFeedApi,
    ReportSubmissionApi, SignerPolicy,
};
use oracle_signature::Address;
use std::sync::Arc;

#[derive(Debug, arbitrary::Arbitrary)]
struct FuzzInput {
    now: u64,
    report: Vec<u8>,
    signatures: Vec<Vec<u8>>,
    reporters: Vec<[u8; 20]>,
    skip_untrusted: bool,
}

fuzz_target!(|input: FuzzInput| {
    let mut reporters: Vec<Address> = input.reporters.into_iter().map(Address::new).collect();
    reporters.sort();
    reporters.dedup();

    let config = OracleConfig {
        signer_policy: if input.skip_untrusted {
            SignerPolicy::SkipUntrusted
        } else {
            SignerPolicy::Strict
        },
        ..OracleConfig::default()
    };
    let bus = Arc::new(InMemoryEventBus::new());
    let oracle = match OracleBuilder::new(Address::ZERO)
        .config(config)
        .clock(Arc::new(ManualClock::new(input.now)))
        .event_sink(bus.clone())
        .reporters(reporters)
        .build()
    {
        Ok(oracle) => oracle,
        Err(_) => return,
    };
    let events_before = bus.event_count();

    match oracle.admit(Address::ZERO, &input.report, &input.signatures) {
        Ok(index) => {
            assert_eq!(index, 1);
            assert_eq!(bus.event_count(), events_before + 1);
        }
        Err(_) => {
            assert_eq!(oracle.latest_round_index(), 0);
            assert_eq!(bus.event_count(), events_before);
        }
    }
});
