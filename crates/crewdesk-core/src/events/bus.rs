//! Typed event bus built on a tokio broadcast channel.
//!
//! Replaces ad hoc cross-component notification: emitters publish a
//! [`DomainEvent`] and any number of subscribers receive their own copy.
//! Publishing never blocks and never fails; events published while no
//! subscriber exists are dropped.

use tokio::sync::broadcast;
use tracing::trace;

use super::DomainEvent;

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 64;

/// Broadcast-based bus for [`DomainEvent`]s.
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<DomainEvent>,
}

impl EventBus {
    /// Create a bus with the given channel capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publish an event to all current subscribers.
    pub fn publish(&self, event: DomainEvent) {
        // send() errors only when there are no receivers; that is fine.
        match self.tx.send(event) {
            Ok(n) => trace!(receivers = n, "published domain event"),
            Err(_) => trace!("published domain event with no subscribers"),
        }
    }

    /// Subscribe to all future events.
    pub fn subscribe(&self) -> broadcast::Receiver<DomainEvent> {
        self.tx.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}
