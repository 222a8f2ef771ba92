//! Session state machine.
//!
//! Owns the loading → unauthenticated | authenticated lifecycle for one
//! session domain. Constructed explicitly with injected dependencies so
//! tests can run isolated instances side by side.

use std::sync::RwLock;

use tracing::{info, warn};

use crewdesk_auth::{AuthService, Credentials};
use crewdesk_core::events::{DomainEvent, EventBus, EventPayload, SessionEvent};
use crewdesk_core::result::AppResult;
use crewdesk_entity::User;
use crewdesk_store::SessionVault;

/// Sentinel email written by old seed builds; any stored user carrying
/// it is corrupt state to be purged, never a real session.
const SENTINEL_EMAIL: &str = "demo.user@crewdesk.invalid";

/// Reserved ID prefix for locally fabricated placeholder users.
const MOCK_ID_PREFIX: &str = "mock-";

/// Legacy storage keys older builds read the current user from. Login
/// keeps them in sync; purges remove them.
const LEGACY_USER_KEYS: [&str; 2] = ["user", "currentUser"];

/// The session lifecycle states.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Startup state before persisted storage has been examined.
    Loading,
    /// No usable session exists.
    Unauthenticated,
    /// A validated session exists for this user.
    Authenticated(User),
}

/// Manages the session lifecycle for one domain.
#[derive(Debug)]
pub struct SessionManager {
    auth: AuthService,
    vault: SessionVault,
    events: EventBus,
    state: RwLock<SessionState>,
}

impl SessionManager {
    /// Create a manager in the `Loading` state.
    pub fn new(auth: AuthService, events: EventBus) -> Self {
        let vault = auth.vault().clone();
        Self {
            auth,
            vault,
            events,
            state: RwLock::new(SessionState::Loading),
        }
    }

    /// The current state (cloned snapshot).
    pub fn state(&self) -> SessionState {
        self.state
            .read()
            .map(|guard| guard.clone())
            .unwrap_or(SessionState::Unauthenticated)
    }

    /// The current user, when authenticated.
    pub fn current_user(&self) -> Option<User> {
        match self.state() {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// Whether a validated session is active.
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state(), SessionState::Authenticated(_))
    }

    /// Examine persisted storage and settle into a definite state.
    ///
    /// A stored session is accepted only when the auth flag, an access
    /// token, and a non-placeholder user are all present. Anything
    /// partial or corrupt is purged and reported as unauthenticated.
    pub fn initialize(&self) -> AppResult<SessionState> {
        let flag = self.vault.auth_flag()?;
        let token = self.vault.access_token()?;
        let user = self.vault.user()?;

        let state = match (flag, token, user) {
            (true, Some(_), Some(user)) if !is_placeholder(&user) => {
                SessionState::Authenticated(user.normalized())
            }
            (false, None, None) => SessionState::Unauthenticated,
            other => {
                warn!(
                    domain = ?self.vault.domain(),
                    flag = other.0,
                    has_token = other.1.is_some(),
                    "purging invalid persisted session state"
                );
                self.purge()?;
                SessionState::Unauthenticated
            }
        };

        self.set_state(state.clone());
        Ok(state)
    }

    /// Log in and transition to `Authenticated`.
    ///
    /// Errors from the auth service are re-thrown unchanged; the UI
    /// layer owns per-kind messaging.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<User> {
        let response = self
            .auth
            .login(&Credentials {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await?;

        let user = response.user.normalized();
        self.persist_legacy(&user)?;
        self.vault.set_auth_flag(true)?;
        self.set_state(SessionState::Authenticated(user.clone()));

        self.events.publish(DomainEvent::new(
            Some(user.id.clone()),
            EventPayload::Session(SessionEvent::LoggedIn {
                user_id: user.id.clone(),
                email: user.email.clone(),
            }),
        ));
        info!(user = %user.email, "session established");
        Ok(user)
    }

    /// Log out: best-effort server call, then always clear local state.
    pub async fn logout(&self) -> AppResult<()> {
        let user_id = self.current_user().map(|user| user.id);

        let result = self.auth.logout().await;
        if let Err(e) = self.remove_legacy() {
            warn!(error = %e, "failed to remove legacy session keys");
        }
        self.set_state(SessionState::Unauthenticated);
        self.events.publish(DomainEvent::new(
            user_id.clone(),
            EventPayload::Session(SessionEvent::LoggedOut { user_id }),
        ));
        result
    }

    /// Update the current user locally (no server call): normalize,
    /// rewrite every persisted copy, and refresh the in-memory state.
    pub fn update_current_user(&self, user: User) -> AppResult<User> {
        let user = user.normalized();
        self.vault.set_user(&user)?;
        self.persist_legacy(&user)?;
        if self.is_authenticated() {
            self.set_state(SessionState::Authenticated(user.clone()));
        }
        self.events.publish(DomainEvent::new(
            Some(user.id.clone()),
            EventPayload::Session(SessionEvent::UserUpdated {
                user_id: user.id.clone(),
            }),
        ));
        Ok(user)
    }

    fn set_state(&self, state: SessionState) {
        if let Ok(mut guard) = self.state.write() {
            *guard = state;
        }
    }

    fn persist_legacy(&self, user: &User) -> AppResult<()> {
        let raw = serde_json::to_string(user)?;
        let storage = self.vault.storage();
        for key in LEGACY_USER_KEYS {
            storage.set(key, &raw)?;
        }
        Ok(())
    }

    fn remove_legacy(&self) -> AppResult<()> {
        let storage = self.vault.storage();
        for key in LEGACY_USER_KEYS {
            storage.remove(key)?;
        }
        Ok(())
    }

    fn purge(&self) -> AppResult<()> {
        self.vault.clear()?;
        self.remove_legacy()
    }
}

/// Whether a stored user is a known placeholder/mock identity.
fn is_placeholder(user: &User) -> bool {
    user.email.eq_ignore_ascii_case(SENTINEL_EMAIL) || user.id.starts_with(MOCK_ID_PREFIX)
}
