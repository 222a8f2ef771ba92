//! Authenticated API client.

use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crewdesk_auth::endpoints;
use crewdesk_core::config::ApiConfig;
use crewdesk_core::error::AppError;
use crewdesk_core::result::AppResult;
use crewdesk_core::types::ApiErrorResponse;
use crewdesk_store::SessionVault;

use crate::refresh::RefreshCoordinator;

/// HTTP client that issues bearer-authenticated requests against the
/// backend API.
///
/// On a 401 the client performs exactly one coordinated refresh and one
/// retry; any other response passes through unmodified for the caller
/// to interpret. A second 401 after the retry is returned as-is.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    vault: SessionVault,
    refresh: Arc<RefreshCoordinator>,
}

impl ApiClient {
    /// Create a client for the domain the vault is scoped to.
    pub fn new(config: &ApiConfig, vault: SessionVault) -> Self {
        let http = reqwest::Client::new();
        let refresh = Arc::new(RefreshCoordinator::new(
            http.clone(),
            config.base_url.clone(),
            vault.clone(),
        ));
        Self {
            http,
            base_url: config.base_url.clone(),
            vault,
            refresh,
        }
    }

    /// The refresh coordinator shared by all requests of this client.
    pub fn refresh_coordinator(&self) -> Arc<RefreshCoordinator> {
        Arc::clone(&self.refresh)
    }

    /// Issue an authenticated request.
    ///
    /// Fails fast with `NoToken` when the vault holds no access token.
    /// The optional body is serialized as JSON.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> AppResult<Response> {
        let url = endpoints::resolve(&self.base_url, path);
        let token = self
            .vault
            .access_token()?
            .ok_or_else(|| AppError::no_token("No access token available"))?;

        let response = self
            .send(method.clone(), &url, body.as_ref(), &token)
            .await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        debug!(%url, "request returned 401; refreshing and retrying once");
        let fresh_token = self.refresh.refresh_access_token().await?;
        self.send(method, &url, body.as_ref(), &fresh_token).await
    }

    /// `GET path`.
    pub async fn get(&self, path: &str) -> AppResult<Response> {
        self.request(Method::GET, path, None).await
    }

    /// `POST path` with a JSON body.
    pub async fn post(&self, path: &str, body: serde_json::Value) -> AppResult<Response> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// `PUT path` with a JSON body.
    pub async fn put(&self, path: &str, body: serde_json::Value) -> AppResult<Response> {
        self.request(Method::PUT, path, Some(body)).await
    }

    /// `DELETE path`.
    pub async fn delete(&self, path: &str) -> AppResult<Response> {
        self.request(Method::DELETE, path, None).await
    }

    /// `GET path` and parse the body into `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let response = self.get(path).await?;
        parse_json(response).await
    }

    /// `POST path` and parse the body into `T`.
    pub async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> AppResult<T> {
        let response = self.post(path, body).await?;
        parse_json(response).await
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<&serde_json::Value>,
        token: &str,
    ) -> AppResult<Response> {
        let mut request = self
            .http
            .request(method, url)
            .bearer_auth(token)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }
        request
            .send()
            .await
            .map_err(|e| AppError::network(format!("Request failed: {e}")))
    }
}

/// Parse a response body into `T`, mapping non-success statuses to a
/// typed error carrying the backend's message.
pub async fn parse_json<T: DeserializeOwned>(response: Response) -> AppResult<T> {
    let status = response.status();
    if !status.is_success() {
        let body: ApiErrorResponse = response.json().await.unwrap_or_default();
        return Err(AppError::unknown(format!(
            "Request failed with status {status}: {}",
            body.text()
        )));
    }
    response.json::<T>().await.map_err(|e| {
        AppError::new(
            crewdesk_core::error::ErrorKind::Serialization,
            format!("Malformed response body: {e}"),
        )
    })
}
