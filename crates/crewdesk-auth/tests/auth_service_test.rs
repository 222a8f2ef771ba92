//! Integration tests for the auth service against a mock backend.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::json;

use crewdesk_auth::{AuthService, Credentials};
use crewdesk_core::config::ApiConfig;
use crewdesk_core::error::ErrorKind;
use crewdesk_entity::{User, UserRole};
use crewdesk_store::{MemoryStore, SessionDomain, SessionVault};

/// Spawn a mock backend and return its base URL.
async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn service(base_url: String, domain: SessionDomain) -> AuthService {
    let vault = SessionVault::new(Arc::new(MemoryStore::new()), domain);
    AuthService::new(&ApiConfig { base_url }, vault)
}

fn jwt_with_exp(exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(json!({ "sub": "u-1", "exp": exp }).to_string());
    format!("{header}.{payload}.sig")
}

fn login_body(role: &str) -> serde_json::Value {
    json!({
        "accessToken": jwt_with_exp(chrono::Utc::now().timestamp() + 900),
        "refreshToken": "refresh-1",
        "user": {
            "id": "u-1",
            "email": "pat@acme.test",
            "firstName": "Pat",
            "lastName": "Lee",
            "role": role,
            "isActive": true
        },
        "device": {
            "deviceId": "d-1",
            "deviceName": "workstation",
            "deviceType": "desktop",
            "os": "linux",
            "isTrusted": false
        }
    })
}

#[tokio::test]
async fn test_login_persists_tokens_user_and_device() {
    let app = Router::new().route(
        "/auth/login",
        post(|| async { Json(login_body("manager")) }),
    );
    let base = spawn_backend(app).await;
    let auth = service(base, SessionDomain::Workspace);

    let response = auth
        .login(&Credentials {
            email: "pat@acme.test".to_string(),
            password: "hunter2".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(response.user.role, UserRole::Manager);
    let vault = auth.vault();
    assert_eq!(vault.refresh_token().unwrap().as_deref(), Some("refresh-1"));
    let stored: User = vault.user().unwrap().unwrap();
    // The persisted copy is normalized: name derived from first + last.
    assert_eq!(stored.name.as_deref(), Some("Pat Lee"));
    assert_eq!(vault.device().unwrap().unwrap().device_id, "d-1");
    assert!(auth.is_authenticated());
}

#[tokio::test]
async fn test_platform_login_rejects_non_super_admin_and_persists_nothing() {
    let app = Router::new().route(
        "/saas/auth/login",
        post(|| async { Json(login_body("manager")) }),
    );
    let base = spawn_backend(app).await;
    let auth = service(base, SessionDomain::Platform);

    let err = auth
        .login(&Credentials {
            email: "pat@acme.test".to_string(),
            password: "hunter2".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::AccessDenied);
    assert!(auth.vault().access_token().unwrap().is_none());
    assert!(auth.vault().user().unwrap().is_none());
    assert!(auth.vault().device().unwrap().is_none());
}

#[tokio::test]
async fn test_workspace_login_rejects_super_admin() {
    let app = Router::new().route(
        "/auth/login",
        post(|| async { Json(login_body("super_admin")) }),
    );
    let base = spawn_backend(app).await;
    let auth = service(base, SessionDomain::Workspace);

    let err = auth
        .login(&Credentials {
            email: "root@crewdesk.test".to_string(),
            password: "hunter2".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::AccessDenied);
    assert!(auth.vault().access_token().unwrap().is_none());
}

#[tokio::test]
async fn test_login_failure_is_classified() {
    let app = Router::new()
        .route(
            "/auth/login",
            post(|| async {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({ "message": "Invalid email or password" })),
                )
            }),
        );
    let base = spawn_backend(app).await;
    let auth = service(base, SessionDomain::Workspace);

    let err = auth
        .login(&Credentials {
            email: "pat@acme.test".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::InvalidCredentials);
}

#[tokio::test]
async fn test_locked_account_message_wins_over_status() {
    let app = Router::new().route(
        "/auth/login",
        post(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": "Account locked after too many attempts" })),
            )
        }),
    );
    let base = spawn_backend(app).await;
    let auth = service(base, SessionDomain::Workspace);

    let err = auth
        .login(&Credentials {
            email: "pat@acme.test".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::AccountLocked);
}

#[tokio::test]
async fn test_malformed_login_response_fails_loudly() {
    let app = Router::new().route(
        "/auth/login",
        post(|| async { Json(json!({ "unexpected": true })) }),
    );
    let base = spawn_backend(app).await;
    let auth = service(base, SessionDomain::Workspace);

    let err = auth
        .login(&Credentials {
            email: "pat@acme.test".to_string(),
            password: "hunter2".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Serialization);
}

#[tokio::test]
async fn test_logout_clears_vault_even_when_server_rejects() {
    let app = Router::new()
        .route(
            "/auth/login",
            post(|| async { Json(login_body("member")) }),
        )
        .route(
            "/auth/logout",
            post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
    let base = spawn_backend(app).await;
    let auth = service(base, SessionDomain::Workspace);

    auth.login(&Credentials {
        email: "pat@acme.test".to_string(),
        password: "hunter2".to_string(),
    })
    .await
    .unwrap();

    auth.logout().await.unwrap();

    let vault = auth.vault();
    assert!(vault.access_token().unwrap().is_none());
    assert!(vault.refresh_token().unwrap().is_none());
    assert!(vault.user().unwrap().is_none());
    assert!(vault.device().unwrap().is_none());
    assert!(!auth.is_authenticated());
}

#[tokio::test]
async fn test_logout_clears_vault_when_server_is_unreachable() {
    // Nothing listens on this port.
    let auth = service("http://127.0.0.1:1".to_string(), SessionDomain::Workspace);
    let vault = auth.vault();
    vault
        .set_tokens(&crewdesk_entity::TokenPair {
            access_token: jwt_with_exp(chrono::Utc::now().timestamp() + 900),
            refresh_token: "refresh-1".to_string(),
        })
        .unwrap();

    auth.logout().await.unwrap();
    assert!(vault.access_token().unwrap().is_none());
    assert!(vault.refresh_token().unwrap().is_none());
}

#[tokio::test]
async fn test_is_authenticated_rejects_expired_token() {
    let auth = service("http://unused".to_string(), SessionDomain::Workspace);
    let vault = auth.vault();
    vault
        .set_tokens(&crewdesk_entity::TokenPair {
            access_token: jwt_with_exp(chrono::Utc::now().timestamp() - 60),
            refresh_token: "refresh-1".to_string(),
        })
        .unwrap();
    vault
        .set_user(&serde_json::from_value(login_body("member")["user"].clone()).unwrap())
        .unwrap();

    assert!(!auth.is_authenticated());
}

#[tokio::test]
async fn test_is_authenticated_rejects_malformed_token() {
    let auth = service("http://unused".to_string(), SessionDomain::Workspace);
    let vault = auth.vault();
    vault
        .set_tokens(&crewdesk_entity::TokenPair {
            access_token: "definitely-not-a-jwt".to_string(),
            refresh_token: "refresh-1".to_string(),
        })
        .unwrap();
    vault
        .set_user(&serde_json::from_value(login_body("member")["user"].clone()).unwrap())
        .unwrap();

    assert!(!auth.is_authenticated());
}

#[tokio::test]
async fn test_platform_is_authenticated_requires_super_admin() {
    let auth = service("http://unused".to_string(), SessionDomain::Platform);
    let vault = auth.vault();
    vault
        .set_tokens(&crewdesk_entity::TokenPair {
            access_token: jwt_with_exp(chrono::Utc::now().timestamp() + 900),
            refresh_token: "refresh-1".to_string(),
        })
        .unwrap();
    vault
        .set_user(&serde_json::from_value(login_body("member")["user"].clone()).unwrap())
        .unwrap();

    assert!(!auth.is_authenticated());
}

#[tokio::test]
async fn test_token_without_user_is_not_authenticated() {
    let auth = service("http://unused".to_string(), SessionDomain::Workspace);
    auth.vault()
        .set_tokens(&crewdesk_entity::TokenPair {
            access_token: jwt_with_exp(chrono::Utc::now().timestamp() + 900),
            refresh_token: "refresh-1".to_string(),
        })
        .unwrap();

    assert!(!auth.is_authenticated());
}
