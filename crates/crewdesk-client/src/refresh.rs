//! Single-flight token refresh.
//!
//! The backend rotates the refresh token on every refresh call, so two
//! concurrent refresh calls race: the second one presents an
//! already-rotated token and is rejected, killing the session. All
//! concurrent 401-triggered callers therefore await one shared
//! in-flight refresh, which is cleared after it resolves so a later 401
//! starts a fresh one.

use std::sync::Mutex;

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use serde::Serialize;
use tracing::{debug, warn};

use crewdesk_auth::endpoints;
use crewdesk_core::error::AppError;
use crewdesk_core::result::AppResult;
use crewdesk_entity::TokenPair;
use crewdesk_store::SessionVault;

type RefreshFuture = Shared<BoxFuture<'static, Result<String, AppError>>>;

/// Body of the refresh request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RefreshRequest {
    refresh_token: String,
    device_id: Option<String>,
}

/// Coordinates token refresh so at most one refresh call is outstanding
/// per session domain.
pub struct RefreshCoordinator {
    http: reqwest::Client,
    base_url: String,
    vault: SessionVault,
    inflight: Mutex<Option<RefreshFuture>>,
}

impl std::fmt::Debug for RefreshCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshCoordinator")
            .field("base_url", &self.base_url)
            .field("domain", &self.vault.domain())
            .finish()
    }
}

impl RefreshCoordinator {
    /// Create a coordinator for the vault's domain.
    pub fn new(http: reqwest::Client, base_url: String, vault: SessionVault) -> Self {
        Self {
            http,
            base_url,
            vault,
            inflight: Mutex::new(None),
        }
    }

    /// Obtain a fresh access token, joining any refresh already in
    /// flight. Returns the new access token on success; on failure the
    /// session is cleared and `SessionExpired` is returned to every
    /// waiter.
    pub async fn refresh_access_token(&self) -> AppResult<String> {
        let shared = {
            let mut inflight = self
                .inflight
                .lock()
                .map_err(|_| AppError::unknown("refresh coordinator lock poisoned"))?;
            match inflight.as_ref() {
                Some(existing) => {
                    debug!("joining in-flight token refresh");
                    existing.clone()
                }
                None => {
                    let fut = Self::execute(
                        self.http.clone(),
                        self.base_url.clone(),
                        self.vault.clone(),
                    )
                    .boxed()
                    .shared();
                    *inflight = Some(fut.clone());
                    fut
                }
            }
        };

        let result = shared.clone().await;

        // Clear only the future we awaited; a newer refresh started by
        // another caller must stay memoized until it resolves.
        if let Ok(mut inflight) = self.inflight.lock() {
            if inflight
                .as_ref()
                .map(|current| current.ptr_eq(&shared))
                .unwrap_or(false)
            {
                inflight.take();
            }
        }

        result
    }

    /// The actual refresh network call. Any failure clears the session:
    /// a rejected or unreachable refresh means the stored pair can no
    /// longer be trusted.
    async fn execute(
        http: reqwest::Client,
        base_url: String,
        vault: SessionVault,
    ) -> Result<String, AppError> {
        let outcome = Self::request_new_pair(&http, &base_url, &vault).await;
        match outcome {
            Ok(pair) => {
                vault.set_tokens(&pair)?;
                debug!(domain = ?vault.domain(), "token refresh succeeded");
                Ok(pair.access_token)
            }
            Err(err) => {
                warn!(domain = ?vault.domain(), error = %err, "token refresh failed; clearing session");
                let _ = vault.clear();
                Err(AppError::session_expired(format!(
                    "Token refresh failed: {}",
                    err.message
                )))
            }
        }
    }

    async fn request_new_pair(
        http: &reqwest::Client,
        base_url: &str,
        vault: &SessionVault,
    ) -> Result<TokenPair, AppError> {
        let refresh_token = vault
            .refresh_token()?
            .ok_or_else(|| AppError::no_token("No refresh token stored"))?;
        let device_id = vault
            .device()
            .ok()
            .flatten()
            .map(|device| device.device_id);

        let url = endpoints::resolve(base_url, endpoints::refresh_path(vault.domain()));
        let response = http
            .post(&url)
            .json(&RefreshRequest {
                refresh_token,
                device_id,
            })
            .send()
            .await
            .map_err(|e| AppError::network(format!("Refresh request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::unknown(format!(
                "Refresh rejected with status {status}"
            )));
        }

        response.json::<TokenPair>().await.map_err(|e| {
            AppError::new(
                crewdesk_core::error::ErrorKind::Serialization,
                format!("Malformed refresh response: {e}"),
            )
        })
    }
}
