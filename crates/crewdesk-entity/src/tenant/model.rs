//! Tenant entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::plan::SubscriptionPlan;
use super::status::{SubscriptionStatus, TenantStatus};

/// A registered company workspace using the platform.
///
/// Loaded from persisted storage on startup or resolved from a
/// subdomain lookup; updated by partial merge; replaced, never locally
/// deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    /// Unique tenant identifier.
    pub id: String,
    /// Registered company name.
    pub company_name: String,
    /// Subdomain the workspace is served under.
    pub subdomain: String,
    /// Custom domain, when configured.
    #[serde(default)]
    pub domain: Option<String>,
    /// Administrative status.
    pub status: TenantStatus,
    /// Subscription plan identifier.
    pub subscription_plan: String,
    /// Billing status.
    pub subscription_status: SubscriptionStatus,
    /// When the trial window ends (only meaningful while on trial).
    #[serde(default)]
    pub trial_ends_at: Option<DateTime<Utc>>,
    /// Seat ceiling for this tenant.
    pub max_users: u32,
    /// Currently registered users.
    pub current_users: u32,
    /// Feature flags enabled for this tenant.
    #[serde(default)]
    pub features: Vec<String>,
}

impl Tenant {
    /// Whether the tenant is currently usable.
    ///
    /// Recomputed on every call, never stored: a paid subscription
    /// requires the tenant record itself to be active; a trial
    /// additionally requires the trial window to still be open. Trial
    /// expiry only applies while `subscription_status` is `Trial`; an
    /// `Active` subscription with a stale `trial_ends_at` stays active.
    pub fn is_active(&self) -> bool {
        if self.status != TenantStatus::Active {
            return false;
        }
        match self.subscription_status {
            SubscriptionStatus::Active => true,
            SubscriptionStatus::Trial => self
                .trial_ends_at
                .map(|ends| ends > Utc::now())
                .unwrap_or(false),
            SubscriptionStatus::Expired | SubscriptionStatus::Cancelled => false,
        }
    }

    /// Whether the tenant is on a trial that has lapsed.
    pub fn is_trial_expired(&self) -> bool {
        self.subscription_status == SubscriptionStatus::Trial
            && self
                .trial_ends_at
                .map(|ends| ends <= Utc::now())
                .unwrap_or(false)
    }

    /// An inert placeholder tenant for rendering before one is known.
    ///
    /// Never reported as active; carries the starter plan's feature set
    /// so downstream feature checks behave predictably.
    pub fn fallback() -> Self {
        let plan = SubscriptionPlan::lookup("starter");
        Self {
            id: String::new(),
            company_name: "CrewDesk".to_string(),
            subdomain: String::new(),
            domain: None,
            status: TenantStatus::Inactive,
            subscription_plan: plan.id.to_string(),
            subscription_status: SubscriptionStatus::Trial,
            trial_ends_at: None,
            max_users: plan.max_users,
            current_users: 0,
            features: Vec::new(),
        }
    }

    /// Apply a partial update, overwriting only the fields present.
    pub fn apply(&mut self, patch: TenantPatch) {
        if let Some(company_name) = patch.company_name {
            self.company_name = company_name;
        }
        if let Some(domain) = patch.domain {
            self.domain = Some(domain);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(plan) = patch.subscription_plan {
            self.subscription_plan = plan;
        }
        if let Some(subscription_status) = patch.subscription_status {
            self.subscription_status = subscription_status;
        }
        if let Some(trial_ends_at) = patch.trial_ends_at {
            self.trial_ends_at = Some(trial_ends_at);
        }
        if let Some(max_users) = patch.max_users {
            self.max_users = max_users;
        }
        if let Some(current_users) = patch.current_users {
            self.current_users = current_users;
        }
        if let Some(features) = patch.features {
            self.features = features;
        }
    }
}

/// Partial tenant update: only present fields are merged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantPatch {
    /// New company name.
    #[serde(default)]
    pub company_name: Option<String>,
    /// New custom domain.
    #[serde(default)]
    pub domain: Option<String>,
    /// New administrative status.
    #[serde(default)]
    pub status: Option<TenantStatus>,
    /// New plan identifier.
    #[serde(default)]
    pub subscription_plan: Option<String>,
    /// New billing status.
    #[serde(default)]
    pub subscription_status: Option<SubscriptionStatus>,
    /// New trial end.
    #[serde(default)]
    pub trial_ends_at: Option<DateTime<Utc>>,
    /// New seat ceiling.
    #[serde(default)]
    pub max_users: Option<u32>,
    /// New registered-user count.
    #[serde(default)]
    pub current_users: Option<u32>,
    /// Replacement feature list.
    #[serde(default)]
    pub features: Option<Vec<String>>,
}
