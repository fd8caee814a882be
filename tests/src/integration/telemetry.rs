//! # Telemetry Wiring
//!
//! The logging stack installs once per process and the oracle runs
//! unchanged underneath it.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use oracle_feed::{OracleConfig, ReportSubmissionApi, TracingEventSink};
    use oracle_telemetry::{init_tracing, TelemetryConfig, TelemetryError};
    use std::sync::Arc;

    #[test]
    fn test_json_logging_around_admission() -> anyhow::Result<()> {
        let config = TelemetryConfig {
            json_logs: true,
            log_level: "oracle_feed=debug,info".to_string(),
            ..TelemetryConfig::default()
        };
        match init_tracing(&config) {
            Ok(()) | Err(TelemetryError::AlreadyInitialized) => {}
            Err(e) => return Err(e.into()),
        }

        let fx = OracleFixture::with_sink(
            2,
            OracleConfig::default(),
            Arc::new(TracingEventSink),
            Arc::new(oracle_feed::InMemoryEventBus::new()),
        )?;
        let (report, signatures) = fx.signed_now(100, &[0, 1]);
        assert_eq!(fx.oracle.admit(relayer(), &report, &signatures)?, 1);

        // Rejections are logged, not panicked on
        assert!(fx.oracle.admit(relayer(), &report, &signatures).is_err());

        assert!(matches!(
            init_tracing(&TelemetryConfig::default()),
            Err(TelemetryError::AlreadyInitialized)
        ));
        Ok(())
    }
}
