//! Integration tests for tenant resolution and persistence.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crewdesk_core::config::ApiConfig;
use crewdesk_core::events::{EventBus, EventPayload, TenantEvent};
use crewdesk_core::traits::KeyValueStore;
use crewdesk_entity::{SubscriptionStatus, TenantPatch, TenantStatus};
use crewdesk_session::TenantManager;
use crewdesk_store::MemoryStore;

async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn manager_with(base_url: String, storage: Arc<dyn KeyValueStore>) -> (TenantManager, EventBus) {
    let events = EventBus::default();
    (
        TenantManager::new(&ApiConfig { base_url }, storage, events.clone()),
        events,
    )
}

#[tokio::test]
async fn test_default_tenant_is_inert_before_resolution() {
    let (manager, _events) =
        manager_with("http://unused".to_string(), Arc::new(MemoryStore::new()));
    manager.initialize().unwrap();

    assert!(manager.current().is_none());
    let fallback = manager.current_or_default();
    assert!(!fallback.is_active());
    assert!(!manager.is_active());
}

#[tokio::test]
async fn test_resolve_maps_record_and_defaults_plan_fields() {
    // Sparse record: no maxUsers, no features; the growth plan fills them.
    let app = Router::new().route(
        "/workspaces/lookup",
        get(|| async {
            Json(json!({
                "id": "t-9",
                "companyName": "Acme GmbH",
                "subdomain": "acme",
                "status": "active",
                "plan": "growth",
                "subscriptionStatus": "active"
            }))
        }),
    );
    let base = spawn_backend(app).await;
    let storage: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let (manager, events) = manager_with(base, Arc::clone(&storage));
    let mut rx = events.subscribe();

    let tenant = manager.resolve_subdomain("acme").await.unwrap();
    assert_eq!(tenant.company_name, "Acme GmbH");
    assert_eq!(tenant.subscription_plan, "growth");
    assert_eq!(tenant.max_users, 50);
    assert!(tenant.features.contains(&"payroll".to_string()));
    assert!(tenant.is_active());
    assert!(manager.is_active());

    // Persisted for the next start.
    assert!(storage.get("crewdesk:tenant:active").unwrap().is_some());

    let event = rx.recv().await.unwrap();
    match event.payload {
        EventPayload::Tenant(TenantEvent::Resolved { tenant_id, subdomain }) => {
            assert_eq!(tenant_id, "t-9");
            assert_eq!(subdomain, "acme");
        }
        other => panic!("expected Resolved event, got {other:?}"),
    }
}

#[tokio::test]
async fn test_resolve_failure_is_non_fatal() {
    let app = Router::new().route(
        "/workspaces/lookup",
        get(|| async { (StatusCode::NOT_FOUND, Json(json!({ "message": "no such workspace" }))) }),
    );
    let base = spawn_backend(app).await;
    let (manager, _events) = manager_with(base, Arc::new(MemoryStore::new()));

    assert!(manager.resolve_subdomain("ghost").await.is_none());
    assert!(manager.current().is_none());
}

#[tokio::test]
async fn test_resolve_malformed_record_is_non_fatal() {
    let app = Router::new().route(
        "/workspaces/lookup",
        get(|| async { Json(json!({ "companyName": 42 })) }),
    );
    let base = spawn_backend(app).await;
    let (manager, _events) = manager_with(base, Arc::new(MemoryStore::new()));

    assert!(manager.resolve_subdomain("acme").await.is_none());
}

#[tokio::test]
async fn test_resolve_unreachable_backend_is_non_fatal() {
    let (manager, _events) = manager_with(
        "http://127.0.0.1:1".to_string(),
        Arc::new(MemoryStore::new()),
    );
    assert!(manager.resolve_subdomain("acme").await.is_none());
}

#[tokio::test]
async fn test_update_usage_without_tenant_is_noop() {
    let (manager, _events) =
        manager_with("http://unused".to_string(), Arc::new(MemoryStore::new()));
    manager
        .update_usage(TenantPatch {
            current_users: Some(3),
            ..TenantPatch::default()
        })
        .unwrap();
    assert!(manager.current().is_none());
}

#[tokio::test]
async fn test_update_usage_merges_and_persists_across_restart() {
    let app = Router::new().route(
        "/workspaces/lookup",
        get(|| async {
            Json(json!({
                "id": "t-9",
                "companyName": "Acme GmbH",
                "subdomain": "acme",
                "status": "active",
                "plan": "starter",
                "subscriptionStatus": "trial",
                "trialEndsAt": (chrono::Utc::now() + chrono::Duration::days(14)).to_rfc3339()
            }))
        }),
    );
    let base = spawn_backend(app).await;
    let storage: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let (manager, _events) = manager_with(base.clone(), Arc::clone(&storage));
    manager.resolve_subdomain("acme").await.unwrap();

    manager
        .update_usage(TenantPatch {
            current_users: Some(7),
            subscription_status: Some(SubscriptionStatus::Active),
            ..TenantPatch::default()
        })
        .unwrap();

    let updated = manager.current().unwrap();
    assert_eq!(updated.current_users, 7);
    assert_eq!(updated.subscription_status, SubscriptionStatus::Active);
    assert_eq!(updated.status, TenantStatus::Active);

    // A fresh manager over the same storage sees the merged record.
    let (restarted, _events) = manager_with(base, storage);
    let reloaded = restarted.initialize().unwrap().unwrap();
    assert_eq!(reloaded.current_users, 7);
    assert_eq!(reloaded.subscription_status, SubscriptionStatus::Active);
}

#[tokio::test]
async fn test_corrupt_persisted_tenant_is_discarded() {
    let storage: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    storage.set("crewdesk:tenant:active", "{half a record").unwrap();
    let (manager, _events) = manager_with("http://unused".to_string(), Arc::clone(&storage));

    assert!(manager.initialize().unwrap().is_none());
    assert!(storage.get("crewdesk:tenant:active").unwrap().is_none());
}
