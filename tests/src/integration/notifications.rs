//! # Notification Flows
//!
//! Events leave the oracle in state order, one per successful call, and
//! nothing is published for rejected calls.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use oracle_feed::{
        BroadcastEventBus, InMemoryEventBus, OracleAdminApi, OracleConfig, OracleEvent,
        OracleEventSink, ReportSubmissionApi, TracingEventSink,
    };
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::time::timeout;

    /// Fans every event out to several sinks
    struct Tee(Vec<Arc<dyn OracleEventSink>>);

    impl OracleEventSink for Tee {
        fn publish(&self, event: OracleEvent) {
            for sink in &self.0 {
                sink.publish(event.clone());
            }
        }
    }

    #[tokio::test]
    async fn test_broadcast_subscriber_sees_rounds_in_order() -> anyhow::Result<()> {
        let broadcast = Arc::new(BroadcastEventBus::new(64));
        let mut rx = broadcast.subscribe();
        let bus = Arc::new(InMemoryEventBus::new());
        let fx = OracleFixture::with_sink(2, OracleConfig::default(), broadcast.clone(), bus)?;

        // Initial reporters are announced first
        for _ in 0..2 {
            let event = timeout(Duration::from_secs(1), rx.recv()).await??;
            assert!(matches!(event, OracleEvent::ReporterAdded { .. }));
        }

        for step in 1..=3u64 {
            fx.clock.advance(10);
            let (report, signatures) = fx.signed_now(100 + step as i64, &[0, 1]);
            fx.oracle.admit(relayer(), &report, &signatures)?;
        }

        for expected in 1..=3u64 {
            let event = timeout(Duration::from_secs(1), rx.recv()).await??;
            match event {
                OracleEvent::RoundAccepted { round_index, .. } => {
                    assert_eq!(round_index, expected)
                }
                other => panic!("unexpected event: {:?}", other),
            }
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_subscriber_on_another_task() -> anyhow::Result<()> {
        let broadcast = Arc::new(BroadcastEventBus::default());
        let mut rx = broadcast.subscribe();
        let fx = OracleFixture::with_sink(
            1,
            OracleConfig::default(),
            broadcast.clone(),
            Arc::new(InMemoryEventBus::new()),
        )?;

        let consumer = tokio::spawn(async move {
            let mut prices = Vec::new();
            while let Ok(event) = rx.recv().await {
                if let OracleEvent::RoundAccepted { price, .. } = event {
                    prices.push(price);
                    if prices.len() == 2 {
                        break;
                    }
                }
            }
            prices
        });

        let (report, signatures) = fx.signed_now(100, &[0]);
        fx.oracle.admit(relayer(), &report, &signatures)?;
        fx.clock.advance(1);
        let (report, signatures) = fx.signed_now(101, &[0]);
        fx.oracle.admit(relayer(), &report, &signatures)?;

        let prices = timeout(Duration::from_secs(1), consumer).await??;
        assert_eq!(prices.len(), 2);
        assert_eq!(prices[1].to_i128(), Some(101));
        Ok(())
    }

    #[test]
    fn test_rejections_publish_nothing() -> anyhow::Result<()> {
        let fx = OracleFixture::new(2)?;
        let baseline = fx.bus.event_count();

        let (report, signatures) = fx.signed_now(100, &[0]);
        assert!(fx.oracle.admit(relayer(), &report, &signatures).is_err());
        assert!(fx.oracle.set_decimals(relayer(), 2).is_err());
        assert!(fx
            .oracle
            .add_trusted_reporter(owner(), fx.reporters.address(0))
            .is_err());

        assert_eq!(fx.bus.event_count(), baseline);
        Ok(())
    }

    #[test]
    fn test_multiple_sinks_see_same_sequence() -> anyhow::Result<()> {
        let bus = Arc::new(InMemoryEventBus::new());
        let mirror = Arc::new(InMemoryEventBus::new());
        let sinks: Vec<Arc<dyn OracleEventSink>> =
            vec![bus.clone(), mirror.clone(), Arc::new(TracingEventSink)];
        let tee = Arc::new(Tee(sinks));
        let fx = OracleFixture::with_sink(1, OracleConfig::default(), tee, bus)?;

        fx.oracle.set_description(owner(), "ETH / USD".into())?;
        let (report, signatures) = fx.signed_now(100, &[0]);
        fx.oracle.admit(relayer(), &report, &signatures)?;

        assert_eq!(fx.bus.get_events(), mirror.get_events());
        assert_eq!(mirror.event_count(), 3);
        Ok(())
    }

    #[test]
    fn test_events_serialize_for_transport() -> anyhow::Result<()> {
        let fx = OracleFixture::new(1)?;
        let (report, signatures) = fx.signed_now(100, &[0]);
        fx.oracle.admit(relayer(), &report, &signatures)?;

        for event in fx.bus.get_events() {
            let json = serde_json::to_string(&event)?;
            let back: OracleEvent = serde_json::from_str(&json)?;
            assert_eq!(back, event);
        }
        Ok(())
    }
}
