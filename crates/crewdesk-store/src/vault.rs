//! Domain-scoped session vault.
//!
//! One audited implementation serves both session domains; the domain
//! only selects the key namespace, so the tenant-user session and the
//! platform-admin session can never collide.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crewdesk_core::result::AppResult;
use crewdesk_core::traits::KeyValueStore;
use crewdesk_entity::{Device, TokenPair, User};

use crate::keys;

/// The two independent authentication domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionDomain {
    /// A tenant (company) user session.
    Workspace,
    /// A SaaS platform-operator session.
    Platform,
}

impl SessionDomain {
    /// Key-namespace segment for this domain.
    pub fn segment(&self) -> &'static str {
        match self {
            Self::Workspace => "workspace",
            Self::Platform => "platform",
        }
    }
}

/// Persisted session state for one domain: token pair, user profile,
/// and device record.
///
/// All operations are synchronous key-value reads/writes. No validation
/// happens here; that is the auth service's job.
#[derive(Debug, Clone)]
pub struct SessionVault {
    storage: Arc<dyn KeyValueStore>,
    domain: SessionDomain,
}

impl SessionVault {
    /// Create a vault over `storage` scoped to `domain`.
    pub fn new(storage: Arc<dyn KeyValueStore>, domain: SessionDomain) -> Self {
        Self { storage, domain }
    }

    /// The domain this vault is scoped to.
    pub fn domain(&self) -> SessionDomain {
        self.domain
    }

    /// The underlying storage handle (shared with other vaults).
    pub fn storage(&self) -> Arc<dyn KeyValueStore> {
        Arc::clone(&self.storage)
    }

    /// Persist both tokens of a pair.
    pub fn set_tokens(&self, pair: &TokenPair) -> AppResult<()> {
        self.storage
            .set(&keys::access_token(self.domain), &pair.access_token)?;
        self.storage
            .set(&keys::refresh_token(self.domain), &pair.refresh_token)
    }

    /// The stored access token, if any.
    pub fn access_token(&self) -> AppResult<Option<String>> {
        self.storage.get(&keys::access_token(self.domain))
    }

    /// The stored refresh token, if any.
    pub fn refresh_token(&self) -> AppResult<Option<String>> {
        self.storage.get(&keys::refresh_token(self.domain))
    }

    /// Persist the user profile.
    pub fn set_user(&self, user: &User) -> AppResult<()> {
        let raw = serde_json::to_string(user)?;
        self.storage.set(&keys::user(self.domain), &raw)
    }

    /// The stored user profile, if any.
    ///
    /// A stored value that no longer parses is reported as absent so
    /// callers treat it as a missing (not-authenticated) session.
    pub fn user(&self) -> AppResult<Option<User>> {
        match self.storage.get(&keys::user(self.domain))? {
            Some(raw) => Ok(serde_json::from_str(&raw).ok()),
            None => Ok(None),
        }
    }

    /// Persist the device record.
    pub fn set_device(&self, device: &Device) -> AppResult<()> {
        let raw = serde_json::to_string(device)?;
        self.storage.set(&keys::device(self.domain), &raw)
    }

    /// The stored device record, if any.
    pub fn device(&self) -> AppResult<Option<Device>> {
        match self.storage.get(&keys::device(self.domain))? {
            Some(raw) => Ok(serde_json::from_str(&raw).ok()),
            None => Ok(None),
        }
    }

    /// Set or clear the authenticated flag checked at startup.
    pub fn set_auth_flag(&self, authenticated: bool) -> AppResult<()> {
        if authenticated {
            self.storage.set(&keys::auth_flag(self.domain), "true")
        } else {
            self.storage.remove(&keys::auth_flag(self.domain))
        }
    }

    /// Whether the authenticated flag is set.
    pub fn auth_flag(&self) -> AppResult<bool> {
        Ok(self
            .storage
            .get(&keys::auth_flag(self.domain))?
            .map(|v| v == "true")
            .unwrap_or(false))
    }

    /// Remove every key belonging to this domain. Idempotent.
    pub fn clear(&self) -> AppResult<()> {
        self.storage.remove(&keys::access_token(self.domain))?;
        self.storage.remove(&keys::refresh_token(self.domain))?;
        self.storage.remove(&keys::user(self.domain))?;
        self.storage.remove(&keys::device(self.domain))?;
        self.storage.remove(&keys::auth_flag(self.domain))
    }
}
