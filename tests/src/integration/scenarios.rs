//! # Admission Scenarios
//!
//! End-to-end report admission: reporters sign with real keys, a relayer
//! submits, consumers read the ledger.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use oracle_feed::{
        OracleError, OracleEvent, PriceFeedApi, ReportSubmissionApi, ORACLE_VERSION,
    };
    use primitive_types::U256;
    use shared_types::I256;

    // =============================================================================
    // HAPPY PATH
    // =============================================================================

    #[test]
    fn test_two_reporters_sign_first_round() -> anyhow::Result<()> {
        let fx = OracleFixture::new(2)?;
        let (report, signatures) = fx.signed_at(100, GENESIS_TIME, &[0, 1]);

        let index = fx.oracle.admit(relayer(), &report, &signatures)?;

        assert_eq!(index, 1);
        assert_eq!(fx.oracle.latest_round_index(), 1);
        assert_eq!(fx.oracle.latest_price(), I256::from(100i64));
        assert_eq!(
            fx.oracle.get_round(1)?,
            (
                I256::from(100i64),
                U256::one(),
                U256::from(GENESIS_TIME),
                GENESIS_HEIGHT
            )
        );
        Ok(())
    }

    #[test]
    fn test_rounds_advance_with_time() -> anyhow::Result<()> {
        let fx = OracleFixture::new(4)?;

        for step in 1..=10u64 {
            fx.clock.advance(30);
            fx.clock.set_block_height(GENESIS_HEIGHT + step);
            let (report, signatures) = fx.signed_now(1_000 + step as i64, &[0, 1, 2]);
            assert_eq!(fx.oracle.admit(relayer(), &report, &signatures)?, step);
        }

        let data = fx.oracle.latest_round_data();
        assert_eq!(data.round_index, 10);
        assert_eq!(data.answered_in_round, 10);
        assert_eq!(data.price, I256::from(1_010i64));
        assert_eq!(data.accepted_timestamp, GENESIS_TIME + 300);
        assert_eq!(
            fx.oracle.round(10)?.accepted_block_height,
            GENESIS_HEIGHT + 10
        );
        Ok(())
    }

    #[test]
    fn test_signatures_with_zero_one_recovery_ids() -> anyhow::Result<()> {
        let fx = OracleFixture::new(2)?;
        let (report, mut signatures) = fx.signed_now(100, &[0, 1]);
        for sig in &mut signatures {
            sig[64] -= 27;
        }

        assert_eq!(fx.oracle.admit(relayer(), &report, &signatures)?, 1);
        Ok(())
    }

    #[test]
    fn test_high_s_signatures_from_trusted_reporters() -> anyhow::Result<()> {
        let fx = OracleFixture::new(2)?;
        let report = report_bytes(100, 1, GENESIS_TIME);
        let signatures = fx.reporters.sign_high_s(&report, &[0, 1]);

        let outcome = fx.oracle.admit_detailed(relayer(), &report, &signatures)?;
        assert_eq!(outcome.round_index, 1);
        assert_eq!(outcome.signer_count, 2);
        assert!(outcome.skipped.is_empty());
        assert_eq!(fx.oracle.latest_price(), I256::from(100i64));
        Ok(())
    }

    #[test]
    fn test_high_and_low_s_of_one_reporter_count_once() -> anyhow::Result<()> {
        let fx = OracleFixture::new(2)?;
        let report = report_bytes(100, 1, GENESIS_TIME);
        let low = fx.reporters.sign(&report, &[0]);
        let high = fx.reporters.sign_high_s(&report, &[0]);
        assert_ne!(low[0], high[0]);

        assert_eq!(
            fx.oracle
                .admit(relayer(), &report, &[low[0].clone(), high[0].clone()]),
            Err(OracleError::InsufficientSignatures {
                got: 1,
                required: 2
            })
        );
        assert_eq!(fx.oracle.latest_round_index(), 0);
        Ok(())
    }

    #[test]
    fn test_negative_price() -> anyhow::Result<()> {
        let fx = OracleFixture::new(1)?;
        let (report, signatures) = fx.signed_now(-25, &[0]);
        fx.oracle.admit(relayer(), &report, &signatures)?;

        assert_eq!(fx.oracle.latest_price(), I256::from(-25i64));
        assert!(fx.oracle.latest_price().is_negative());
        Ok(())
    }

    #[test]
    fn test_acceptance_event_names_submitter() -> anyhow::Result<()> {
        let fx = OracleFixture::new(2)?;
        let (report, signatures) = fx.signed_now(100, &[1, 0]);
        fx.oracle.admit(relayer(), &report, &signatures)?;

        let last = fx.bus.get_events().pop();
        assert!(matches!(
            last,
            Some(OracleEvent::RoundAccepted {
                round_index: 1,
                signature_count: 2,
                submitter,
                ..
            }) if submitter == relayer()
        ));
        Ok(())
    }

    // =============================================================================
    // REJECTIONS
    // =============================================================================

    #[test]
    fn test_one_signature_when_two_required() -> anyhow::Result<()> {
        let fx = OracleFixture::new(2)?;
        let (report, signatures) = fx.signed_now(100, &[0]);

        assert_eq!(
            fx.oracle.admit(relayer(), &report, &signatures),
            Err(OracleError::InsufficientSignatures {
                got: 1,
                required: 2
            })
        );
        assert_eq!(fx.oracle.latest_round_index(), 0);
        Ok(())
    }

    #[test]
    fn test_same_signature_twice_counts_once() -> anyhow::Result<()> {
        let fx = OracleFixture::new(3)?;
        let (report, signatures) = fx.signed_now(100, &[0, 1]);
        let doubled = vec![
            signatures[0].clone(),
            signatures[0].clone(),
            signatures[1].clone(),
        ];

        assert_eq!(
            fx.oracle.admit(relayer(), &report, &doubled),
            Err(OracleError::InsufficientSignatures {
                got: 2,
                required: 3
            })
        );
        Ok(())
    }

    #[test]
    fn test_freshness_boundaries() -> anyhow::Result<()> {
        let fx = OracleFixture::new(1)?;

        let (report, signatures) = fx.signed_at(100, GENESIS_TIME + 301, &[0]);
        assert!(matches!(
            fx.oracle.admit(relayer(), &report, &signatures),
            Err(OracleError::TooFarInFuture { .. })
        ));

        let (report, signatures) = fx.signed_at(100, GENESIS_TIME - 3601, &[0]);
        assert!(matches!(
            fx.oracle.admit(relayer(), &report, &signatures),
            Err(OracleError::TooOld { .. })
        ));

        let (report, signatures) = fx.signed_at(100, GENESIS_TIME, &[0]);
        assert_eq!(fx.oracle.admit(relayer(), &report, &signatures)?, 1);

        let (report, signatures) = fx.signed_at(101, GENESIS_TIME, &[0]);
        assert!(matches!(
            fx.oracle.admit(relayer(), &report, &signatures),
            Err(OracleError::NotNewer { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_tampered_report_rejected() -> anyhow::Result<()> {
        let fx = OracleFixture::new(1)?;
        let (mut report, signatures) = fx.signed_now(100, &[0]);
        // Relayer inflates the price after signing
        report[31] = 200;

        let result = fx.oracle.admit(relayer(), &report, &signatures);
        assert!(matches!(
            result,
            Err(OracleError::UntrustedSigner { index: 0, .. })
                | Err(OracleError::UnrecoverableSignature { index: 0, .. })
        ));
        assert_eq!(fx.oracle.latest_round_index(), 0);
        Ok(())
    }

    #[test]
    fn test_malformed_inputs() -> anyhow::Result<()> {
        let fx = OracleFixture::new(1)?;
        let (report, signatures) = fx.signed_now(100, &[0]);

        assert_eq!(
            fx.oracle.admit(relayer(), &report[..95], &signatures),
            Err(OracleError::MalformedReport { length: 95 })
        );

        let truncated = vec![signatures[0][..64].to_vec()];
        assert_eq!(
            fx.oracle.admit(relayer(), &report, &truncated),
            Err(OracleError::InvalidSignatureLength {
                index: 0,
                length: 64
            })
        );

        let mut bad_v = signatures[0].clone();
        bad_v[64] = 30;
        assert_eq!(
            fx.oracle.admit(relayer(), &report, &[bad_v]),
            Err(OracleError::InvalidRecoveryId { index: 0, v: 30 })
        );
        Ok(())
    }

    // =============================================================================
    // READS
    // =============================================================================

    #[test]
    fn test_round_reads_are_bounded_and_stable() -> anyhow::Result<()> {
        let fx = OracleFixture::new(1)?;
        let (report, signatures) = fx.signed_now(100, &[0]);
        fx.oracle.admit(relayer(), &report, &signatures)?;
        let first = fx.oracle.get_round(1)?;

        fx.clock.advance(60);
        let (report, signatures) = fx.signed_now(150, &[0]);
        fx.oracle.admit(relayer(), &report, &signatures)?;

        assert_eq!(fx.oracle.get_round(1)?, first);
        assert!(matches!(
            fx.oracle.get_round(0),
            Err(OracleError::RoundUnavailable { index: 0, latest: 2 })
        ));
        assert!(matches!(
            fx.oracle.get_round(3),
            Err(OracleError::RoundUnavailable { index: 3, latest: 2 })
        ));
        assert_eq!(fx.oracle.version(), ORACLE_VERSION);
        Ok(())
    }
}
