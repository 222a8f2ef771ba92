//! Tenant-related domain events.

use serde::{Deserialize, Serialize};

/// Events related to the active tenant (company workspace).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TenantEvent {
    /// A tenant was resolved from a subdomain lookup and stored.
    Resolved {
        /// The tenant ID.
        tenant_id: String,
        /// The subdomain that was looked up.
        subdomain: String,
    },
    /// Usage or subscription fields of the active tenant were updated.
    UsageUpdated {
        /// The tenant ID.
        tenant_id: String,
    },
}
