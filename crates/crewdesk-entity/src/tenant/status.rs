//! Tenant and subscription status enumerations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Administrative status of a tenant record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TenantStatus {
    /// The tenant is live.
    Active,
    /// The tenant has been deactivated.
    Inactive,
    /// The tenant has been suspended by a platform operator.
    Suspended,
}

/// Billing status of a tenant's subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    /// In the free trial window.
    Trial,
    /// Paid and current.
    Active,
    /// The subscription lapsed.
    Expired,
    /// The subscription was cancelled.
    Cancelled,
}

impl fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Trial => "trial",
            Self::Active => "active",
            Self::Expired => "expired",
            Self::Cancelled => "cancelled",
        };
        write!(f, "{s}")
    }
}

impl fmt::Display for TenantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Suspended => "suspended",
        };
        write!(f, "{s}")
    }
}
