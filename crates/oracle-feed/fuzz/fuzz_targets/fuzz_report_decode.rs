//! Fuzz target for the report wire codec.
//!
//! ## Running
//!
//! ```bash
//! cd crates/oracle-feed
//! cargo +nightly fuzz run fuzz_report_decode
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use oracle_feed::{OracleError, Report, REPORT_LENGTH};

fuzz_target!(|data: &[u8]| {
    match Report::decode(data) {
        // Any 96 bytes decode, and re-encode to the same bytes
        Ok(report) => {
            assert_eq!(data.len(), REPORT_LENGTH);
            assert_eq!(&report.encode()[..], data);
        }
        Err(e) => {
            assert_eq!(e, OracleError::MalformedReport { length: data.len() });
        }
    }
});
