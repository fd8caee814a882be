//! Event sink adapters
//!
//! Implements the OracleEventSink port for recording, broadcasting and
//! logging notifications.

use crate::events::OracleEvent;
use crate::ports::OracleEventSink;
use tokio::sync::broadcast;
use tracing::{debug, info};

/// In-memory event bus adapter for testing
pub struct InMemoryEventBus {
    events: parking_lot::RwLock<Vec<OracleEvent>>,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self {
            events: parking_lot::RwLock::new(Vec::new()),
        }
    }

    pub fn get_events(&self) -> Vec<OracleEvent> {
        self.events.read().clone()
    }

    pub fn event_count(&self) -> usize {
        self.events.read().len()
    }

    /// Drain recorded events
    pub fn take_events(&self) -> Vec<OracleEvent> {
        std::mem::take(&mut *self.events.write())
    }
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl OracleEventSink for InMemoryEventBus {
    fn publish(&self, event: OracleEvent) {
        self.events.write().push(event);
    }
}

/// Default broadcast channel capacity
pub const DEFAULT_BROADCAST_CAPACITY: usize = 1024;

/// Fan-out event bus over a tokio broadcast channel.
///
/// Sending never blocks. Slow subscribers observe `Lagged` instead of
/// holding back the oracle.
pub struct BroadcastEventBus {
    sender: broadcast::Sender<OracleEvent>,
}

impl BroadcastEventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<OracleEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for BroadcastEventBus {
    fn default() -> Self {
        Self::new(DEFAULT_BROADCAST_CAPACITY)
    }
}

impl OracleEventSink for BroadcastEventBus {
    fn publish(&self, event: OracleEvent) {
        // Err only means nobody is listening
        if let Err(broadcast::error::SendError(event)) = self.sender.send(event) {
            debug!(kind = event.kind(), "no subscribers for oracle event");
        }
    }
}

/// Logs every event at info level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventSink;

impl OracleEventSink for TracingEventSink {
    fn publish(&self, event: OracleEvent) {
        match serde_json::to_string(&event) {
            Ok(payload) => info!(kind = event.kind(), %payload, "oracle event"),
            Err(e) => info!(kind = event.kind(), error = %e, "oracle event (unserializable)"),
        }
    }
}

/// Discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopEventSink;

impl OracleEventSink for NoopEventSink {
    fn publish(&self, _event: OracleEvent) {}
}
