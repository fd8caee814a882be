//! # Reporter Churn
//!
//! Registry changes between rounds: trust is evaluated at verification
//! time, thresholds follow the current registry size, and accepted rounds
//! are never revisited.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use oracle_feed::{
        OracleAdminApi, OracleConfig, OracleError, PriceFeedApi, ReportSubmissionApi,
        SignerPolicy, SkipReason, ThresholdFormula,
    };

    fn skip_untrusted() -> OracleConfig {
        OracleConfig {
            signer_policy: SignerPolicy::SkipUntrusted,
            ..OracleConfig::default()
        }
    }

    #[test]
    fn test_removed_reporter_aborts_strict_admission() -> anyhow::Result<()> {
        let fx = OracleFixture::new(2)?;
        let removed = fx.reporters.address(1);
        fx.oracle.remove_trusted_reporter(owner(), removed)?;

        let (report, signatures) = fx.signed_now(100, &[1, 0]);
        assert_eq!(
            fx.oracle.admit(relayer(), &report, &signatures),
            Err(OracleError::UntrustedSigner {
                index: 0,
                signer: removed
            })
        );
        Ok(())
    }

    #[test]
    fn test_removed_reporter_excluded_under_skip_policy() -> anyhow::Result<()> {
        let fx = OracleFixture::with_config(2, skip_untrusted())?;
        let removed = fx.reporters.address(1);
        fx.oracle.remove_trusted_reporter(owner(), removed)?;

        // One trusted reporter left, so its signature alone decides
        let (report, signatures) = fx.signed_now(100, &[1, 0]);
        let outcome = fx.oracle.admit_detailed(relayer(), &report, &signatures)?;

        assert_eq!(outcome.round_index, 1);
        assert_eq!(outcome.signer_count, 1);
        assert_eq!(outcome.required, 1);
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.skipped[0].reason, SkipReason::Untrusted(removed));
        assert_eq!(fx.oracle.round(1)?.signature_count, 1);
        Ok(())
    }

    #[test]
    fn test_skip_policy_still_requires_threshold() -> anyhow::Result<()> {
        let fx = OracleFixture::with_config(3, skip_untrusted())?;
        fx.oracle
            .remove_trusted_reporter(owner(), fx.reporters.address(2))?;

        let (report, signatures) = fx.signed_now(100, &[0, 2]);
        assert_eq!(
            fx.oracle.admit(relayer(), &report, &signatures),
            Err(OracleError::InsufficientSignatures {
                got: 1,
                required: 2
            })
        );
        Ok(())
    }

    #[test]
    fn test_threshold_follows_registry_size() -> anyhow::Result<()> {
        let fx = OracleFixture::new(5)?;
        assert_eq!(fx.oracle.required_signatures(), 4);

        let (report, signatures) = fx.signed_now(100, &[0, 1, 2]);
        assert!(matches!(
            fx.oracle.admit(relayer(), &report, &signatures),
            Err(OracleError::InsufficientSignatures {
                got: 3,
                required: 4
            })
        ));

        fx.oracle
            .remove_trusted_reporter(owner(), fx.reporters.address(4))?;
        assert_eq!(fx.oracle.required_signatures(), 3);
        assert_eq!(fx.oracle.admit(relayer(), &report, &signatures)?, 1);
        Ok(())
    }

    #[test]
    fn test_supermajority_formula() -> anyhow::Result<()> {
        let config = OracleConfig {
            threshold: ThresholdFormula::Supermajority,
            ..OracleConfig::default()
        };
        let fx = OracleFixture::with_config(3, config)?;
        assert_eq!(fx.oracle.required_signatures(), 2);

        let (report, signatures) = fx.signed_now(100, &[0, 1]);
        assert_eq!(fx.oracle.admit(relayer(), &report, &signatures)?, 1);
        Ok(())
    }

    #[test]
    fn test_past_rounds_unaffected_by_removal() -> anyhow::Result<()> {
        let fx = OracleFixture::new(3)?;
        let (report, signatures) = fx.signed_now(100, &[0, 1, 2]);
        fx.oracle.admit(relayer(), &report, &signatures)?;
        let accepted = fx.oracle.round(1)?;

        for i in 0..3 {
            fx.oracle
                .remove_trusted_reporter(owner(), fx.reporters.address(i))?;
        }

        assert_eq!(fx.oracle.trusted_count(), 0);
        assert_eq!(fx.oracle.round(1)?, accepted);
        assert_eq!(fx.oracle.latest_round_index(), 1);
        Ok(())
    }

    #[test]
    fn test_readded_reporter_counts_again() -> anyhow::Result<()> {
        let fx = OracleFixture::new(1)?;
        let reporter = fx.reporters.address(0);
        fx.oracle.remove_trusted_reporter(owner(), reporter)?;
        assert!(!fx.oracle.is_trusted(&reporter));

        fx.oracle.add_trusted_reporter(owner(), reporter)?;
        let (report, signatures) = fx.signed_now(100, &[0]);
        assert_eq!(fx.oracle.admit(relayer(), &report, &signatures)?, 1);
        Ok(())
    }

    #[test]
    fn test_only_owner_changes_registry() -> anyhow::Result<()> {
        let fx = OracleFixture::new(2)?;
        let target = fx.reporters.address(0);

        assert_eq!(
            fx.oracle.remove_trusted_reporter(relayer(), target),
            Err(OracleError::Unauthorized(relayer()))
        );
        assert!(fx.oracle.is_trusted(&target));
        assert_eq!(fx.oracle.trusted_count(), 2);
        Ok(())
    }
}
