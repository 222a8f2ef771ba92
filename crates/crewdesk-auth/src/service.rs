//! The auth service: login, logout, and local authentication checks.
//!
//! One implementation serves both session domains; the vault's domain
//! selects the endpoints and the role gate.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crewdesk_core::config::ApiConfig;
use crewdesk_core::error::AppError;
use crewdesk_core::result::AppResult;
use crewdesk_core::types::ApiErrorResponse;
use crewdesk_entity::{Device, DeviceFingerprint, TokenPair, User};
use crewdesk_store::{SessionDomain, SessionVault};

use crate::classify::classify_login_failure;
use crate::{endpoints, fingerprint, jwt};

/// Login credentials.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    /// Login email.
    pub email: String,
    /// Plaintext password, sent only over the login call.
    pub password: String,
}

/// Body of the login request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
    device: &'a DeviceFingerprint,
}

/// Parsed login response.
///
/// Deserialized at the service boundary so a malformed backend payload
/// fails loudly here instead of leaking partial state downstream.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Issued access token.
    pub access_token: String,
    /// Issued refresh token.
    pub refresh_token: String,
    /// The authenticated user.
    pub user: User,
    /// The registered device for this login.
    pub device: Device,
}

impl LoginResponse {
    /// The issued tokens as a pair.
    pub fn token_pair(&self) -> TokenPair {
        TokenPair {
            access_token: self.access_token.clone(),
            refresh_token: self.refresh_token.clone(),
        }
    }
}

/// Performs login/logout HTTP calls, validates role claims, and
/// persists session state through the vault.
#[derive(Debug, Clone)]
pub struct AuthService {
    http: reqwest::Client,
    base_url: String,
    vault: SessionVault,
}

impl AuthService {
    /// Create a service for the domain the vault is scoped to.
    pub fn new(config: &ApiConfig, vault: SessionVault) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            vault,
        }
    }

    /// The vault this service persists through.
    pub fn vault(&self) -> &SessionVault {
        &self.vault
    }

    /// The session domain this service authenticates for.
    pub fn domain(&self) -> SessionDomain {
        self.vault.domain()
    }

    /// Log in with `credentials`.
    ///
    /// Collects a device fingerprint, POSTs it with the credentials,
    /// gates the returned role against the session domain, and persists
    /// tokens, the normalized user, and the device record on success.
    /// Failures are classified into specific error kinds; nothing is
    /// persisted on any failure path.
    pub async fn login(&self, credentials: &Credentials) -> AppResult<LoginResponse> {
        let device = fingerprint::collect();
        let url = endpoints::resolve(&self.base_url, endpoints::login_path(self.domain()));

        let response = self
            .http
            .post(&url)
            .json(&LoginRequest {
                email: &credentials.email,
                password: &credentials.password,
                device: &device,
            })
            .send()
            .await
            .map_err(|e| AppError::network(format!("Login request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body: ApiErrorResponse = response.json().await.unwrap_or_default();
            return Err(classify_login_failure(status.as_u16(), body.text()));
        }

        let login: LoginResponse = response.json().await.map_err(|e| {
            AppError::new(
                crewdesk_core::error::ErrorKind::Serialization,
                format!("Malformed login response: {e}"),
            )
        })?;

        self.check_domain_role(&login.user)?;

        let user = login.user.clone().normalized();
        self.vault.set_tokens(&login.token_pair())?;
        self.vault.set_user(&user)?;
        self.vault.set_device(&login.device)?;

        info!(user = %user.email, domain = ?self.domain(), "login succeeded");
        Ok(login)
    }

    /// Log out: best-effort server call, then unconditionally clear the
    /// vault. Leaving stale credentials behind is worse than losing a
    /// server-side logout audit event.
    pub async fn logout(&self) -> AppResult<()> {
        if let Ok(Some(token)) = self.vault.access_token() {
            let device_id = self
                .vault
                .device()
                .ok()
                .flatten()
                .map(|device| device.device_id);
            let url = endpoints::resolve(&self.base_url, endpoints::logout_path(self.domain()));
            match self
                .http
                .post(&url)
                .bearer_auth(&token)
                .json(&serde_json::json!({ "deviceId": device_id }))
                .send()
                .await
            {
                Ok(response) if !response.status().is_success() => {
                    warn!(status = %response.status(), "server logout rejected; clearing local session anyway");
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(error = %e, "server logout failed; clearing local session anyway");
                }
            }
        }

        self.vault.clear()
    }

    /// Whether a usable session exists locally.
    ///
    /// Requires an access token and a user in the vault, an unexpired
    /// `exp` claim, and (platform domain) the super-admin role.
    /// Storage or decode failures report `false`, never an error.
    pub fn is_authenticated(&self) -> bool {
        let token = match self.vault.access_token() {
            Ok(Some(token)) => token,
            _ => return false,
        };
        let user = match self.vault.user() {
            Ok(Some(user)) => user,
            _ => return false,
        };
        if jwt::is_expired(&token) {
            return false;
        }
        match self.domain() {
            SessionDomain::Platform => user.role.is_super_admin(),
            SessionDomain::Workspace => true,
        }
    }

    fn check_domain_role(&self, user: &User) -> AppResult<()> {
        match self.domain() {
            SessionDomain::Platform if !user.role.is_super_admin() => {
                Err(AppError::access_denied(format!(
                    "Role '{}' cannot sign in to the platform console",
                    user.role
                )))
            }
            SessionDomain::Workspace if user.role.is_super_admin() => {
                Err(AppError::access_denied(
                    "Platform operators must use the platform console login",
                ))
            }
            _ => Ok(()),
        }
    }
}
