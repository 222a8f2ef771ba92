//! Tenant resolution and persistence.
//!
//! Holds the active company workspace record. Consumers always get a
//! tenant to render: a missing one degrades to an inert default, never
//! an error.

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{info, warn};

use crewdesk_auth::endpoints;
use crewdesk_core::config::ApiConfig;
use crewdesk_core::events::{DomainEvent, EventBus, EventPayload, TenantEvent};
use crewdesk_core::result::AppResult;
use crewdesk_core::traits::KeyValueStore;
use crewdesk_entity::{SubscriptionPlan, SubscriptionStatus, Tenant, TenantPatch, TenantStatus};
use crewdesk_store::keys;

/// Raw workspace record returned by the lookup endpoint.
///
/// Sparse by design: plan-derived fields are defaulted from the static
/// plan catalog when absent.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WorkspaceRecord {
    id: String,
    #[serde(default)]
    company_name: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    subdomain: Option<String>,
    #[serde(default)]
    domain: Option<String>,
    #[serde(default)]
    status: Option<TenantStatus>,
    #[serde(default)]
    plan: Option<String>,
    #[serde(default)]
    subscription_status: Option<SubscriptionStatus>,
    #[serde(default)]
    trial_ends_at: Option<DateTime<Utc>>,
    #[serde(default)]
    max_users: Option<u32>,
    #[serde(default)]
    current_users: Option<u32>,
    #[serde(default)]
    features: Option<Vec<String>>,
}

impl WorkspaceRecord {
    /// Map the raw record into the tenant shape, filling plan-derived
    /// defaults from the catalog.
    fn into_tenant(self, requested_subdomain: &str) -> Tenant {
        let plan_id = self.plan.unwrap_or_else(|| "starter".to_string());
        let plan = SubscriptionPlan::lookup(&plan_id);
        Tenant {
            id: self.id,
            company_name: self
                .company_name
                .or(self.name)
                .unwrap_or_else(|| requested_subdomain.to_string()),
            subdomain: self
                .subdomain
                .unwrap_or_else(|| requested_subdomain.to_string()),
            domain: self.domain,
            status: self.status.unwrap_or(TenantStatus::Active),
            subscription_plan: plan.id.to_string(),
            subscription_status: self.subscription_status.unwrap_or(SubscriptionStatus::Trial),
            trial_ends_at: self.trial_ends_at,
            max_users: self.max_users.unwrap_or(plan.max_users),
            current_users: self.current_users.unwrap_or(0),
            features: self.features.unwrap_or_else(|| plan.feature_list()),
        }
    }
}

/// Resolves, stores, and exposes the active tenant.
#[derive(Debug)]
pub struct TenantManager {
    http: reqwest::Client,
    base_url: String,
    storage: Arc<dyn KeyValueStore>,
    events: EventBus,
    current: RwLock<Option<Tenant>>,
}

impl TenantManager {
    /// Create a manager with no tenant loaded.
    pub fn new(config: &ApiConfig, storage: Arc<dyn KeyValueStore>, events: EventBus) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            storage,
            events,
            current: RwLock::new(None),
        }
    }

    /// Load the persisted tenant, if one exists.
    ///
    /// A corrupt persisted record is removed and ignored.
    pub fn initialize(&self) -> AppResult<Option<Tenant>> {
        let tenant = match self.storage.get(&keys::active_tenant())? {
            Some(raw) => match serde_json::from_str::<Tenant>(&raw) {
                Ok(tenant) => Some(tenant),
                Err(e) => {
                    warn!(error = %e, "discarding corrupt persisted tenant");
                    self.storage.remove(&keys::active_tenant())?;
                    None
                }
            },
            None => None,
        };

        self.set_current(tenant.clone());
        Ok(tenant)
    }

    /// The active tenant, if one is loaded.
    pub fn current(&self) -> Option<Tenant> {
        self.current
            .read()
            .map(|guard| guard.clone())
            .unwrap_or(None)
    }

    /// The active tenant, or the inert default when none is loaded.
    pub fn current_or_default(&self) -> Tenant {
        self.current().unwrap_or_else(Tenant::fallback)
    }

    /// Whether the active tenant is currently usable. Recomputed on
    /// every call; `false` when no tenant is loaded.
    pub fn is_active(&self) -> bool {
        self.current().map(|tenant| tenant.is_active()).unwrap_or(false)
    }

    /// Resolve a tenant from a subdomain lookup.
    ///
    /// Non-fatal by contract: any failure (network, status, parse) is
    /// logged and reported as `None` so the caller can decide fallback
    /// behavior. On success the tenant is stored and persisted.
    pub async fn resolve_subdomain(&self, subdomain: &str) -> Option<Tenant> {
        let url = format!(
            "{}?subdomain={subdomain}",
            endpoints::resolve(&self.base_url, endpoints::workspace_lookup_path()),
        );

        let response = match self.http.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(subdomain, error = %e, "workspace lookup failed");
                return None;
            }
        };
        if !response.status().is_success() {
            warn!(subdomain, status = %response.status(), "workspace lookup rejected");
            return None;
        }

        let record: WorkspaceRecord = match response.json().await {
            Ok(record) => record,
            Err(e) => {
                warn!(subdomain, error = %e, "workspace lookup returned malformed record");
                return None;
            }
        };

        let tenant = record.into_tenant(subdomain);
        if let Err(e) = self.persist(&tenant) {
            warn!(error = %e, "failed to persist resolved tenant");
        }
        self.set_current(Some(tenant.clone()));
        self.events.publish(DomainEvent::new(
            None,
            EventPayload::Tenant(TenantEvent::Resolved {
                tenant_id: tenant.id.clone(),
                subdomain: subdomain.to_string(),
            }),
        ));
        info!(subdomain, tenant = %tenant.company_name, "tenant resolved");
        Some(tenant)
    }

    /// Merge a partial update into the active tenant and persist it.
    /// No-op when no tenant is loaded.
    pub fn update_usage(&self, patch: TenantPatch) -> AppResult<()> {
        let Some(mut tenant) = self.current() else {
            return Ok(());
        };
        tenant.apply(patch);
        self.persist(&tenant)?;
        let tenant_id = tenant.id.clone();
        self.set_current(Some(tenant));
        self.events.publish(DomainEvent::new(
            None,
            EventPayload::Tenant(TenantEvent::UsageUpdated { tenant_id }),
        ));
        Ok(())
    }

    fn persist(&self, tenant: &Tenant) -> AppResult<()> {
        let raw = serde_json::to_string(tenant)?;
        self.storage.set(&keys::active_tenant(), &raw)
    }

    fn set_current(&self, tenant: Option<Tenant>) {
        if let Ok(mut guard) = self.current.write() {
            *guard = tenant;
        }
    }
}
