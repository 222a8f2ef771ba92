//! Domain events emitted by CrewDesk session and tenant operations.
//!
//! Events are dispatched through the [`bus::EventBus`] and consumed by
//! any component that needs to react to a login, logout, or tenant
//! change without holding a reference to the emitter.

pub mod bus;
pub mod session;
pub mod tenant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use bus::EventBus;
pub use session::SessionEvent;
pub use tenant::TenantEvent;

/// Wrapper for all domain events with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    /// Unique event ID.
    pub id: Uuid,
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// The user who caused the event (if applicable).
    pub actor: Option<String>,
    /// The event payload.
    pub payload: EventPayload,
}

/// Union of all domain event types.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "domain", content = "event")]
pub enum EventPayload {
    /// A session-related event.
    Session(SessionEvent),
    /// A tenant-related event.
    Tenant(TenantEvent),
}

impl DomainEvent {
    /// Create a new domain event.
    pub fn new(actor: Option<String>, payload: EventPayload) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            actor,
            payload,
        }
    }
}
