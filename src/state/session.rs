//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by the root component and shared through context. The header, the
//! login form and protected pages read it; only the four transitions below
//! mutate it.
//!
//! DURABILITY
//! ==========
//! `{token, user, isAuthenticated}` is mirrored to one storage slot through a
//! single write path (`persist`) that runs at the end of every transition
//! touching those fields. `is_loading` never leaves memory. Storage failures
//! are logged and swallowed: in-memory state is authoritative for the current
//! page, the stored copy only seeds the next one.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::SessionConfig;
use crate::util::storage::{self, KeyValueStorage, StorageError};

/// Rejected transition input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// `login` was called with an empty or whitespace-only token.
    #[error("login token is empty")]
    EmptyToken,
}

/// In-memory session.
///
/// `is_authenticated` holds exactly when both `user` and `token` are present.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session<U> {
    pub user: Option<U>,
    pub token: Option<String>,
    pub is_authenticated: bool,
    pub is_loading: bool,
}

impl<U> Default for Session<U> {
    fn default() -> Self {
        Self { user: None, token: None, is_authenticated: false, is_loading: false }
    }
}

impl<U> Session<U> {
    /// Whether the authenticated flag agrees with the presence of user and token.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.is_authenticated == (self.user.is_some() && self.token.is_some())
    }
}

/// The persisted subset of a [`Session`].
///
/// Missing keys decode to the empty-session values so payloads written by
/// older builds keep loading.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DurableSession<U> {
    pub token: Option<String>,
    pub user: Option<U>,
    #[serde(default)]
    pub is_authenticated: bool,
}

impl<U> DurableSession<U> {
    /// Restore a session with `is_loading` cleared, or `None` when the
    /// payload contradicts itself. An unauthenticated payload restores the
    /// empty session; stray `token`/`user` fields are dropped.
    fn into_session(self) -> Option<Session<U>> {
        let token_present = self.token.as_deref().is_some_and(|t| !t.trim().is_empty());
        let has_credentials = token_present && self.user.is_some();
        if self.is_authenticated != has_credentials {
            return None;
        }
        if !self.is_authenticated {
            return Some(Session::default());
        }
        Some(Session { user: self.user, token: self.token, is_authenticated: true, is_loading: false })
    }
}

/// Slot layouts accepted on read. Earlier site builds wrapped the projection
/// as `{"state": {...}, "version": n}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredSession<U> {
    Envelope { state: DurableSession<U> },
    Bare(DurableSession<U>),
}

impl<U> StoredSession<U> {
    fn into_durable(self) -> DurableSession<U> {
        match self {
            Self::Envelope { state } | Self::Bare(state) => state,
        }
    }
}

/// Session state plus the storage slot it mirrors to.
#[derive(Clone, Debug)]
pub struct SessionStore<U, S> {
    session: Session<U>,
    storage: S,
    storage_key: String,
}

impl<U, S> SessionStore<U, S>
where
    U: Clone + Serialize + DeserializeOwned,
    S: KeyValueStorage,
{
    /// Build an empty store bound to the configured slot without reading it.
    pub fn new(storage: S, config: &SessionConfig) -> Self {
        Self { session: Session::default(), storage, storage_key: config.storage_key.clone() }
    }

    /// Build the store for this page load, restoring the stored projection
    /// when it is present and well-formed. Anything else yields an empty
    /// session.
    pub fn hydrate(storage: S, config: &SessionConfig) -> Self {
        let mut store = Self::new(storage, config);
        store.restore();
        store
    }

    /// Replace in-memory state with the stored projection, or with the empty
    /// session when the slot is absent or unusable. Clears `is_loading`.
    pub fn restore(&mut self) {
        let key = &self.storage_key;
        self.session = match storage::load_json::<StoredSession<U>, _>(&self.storage, key) {
            Ok(Some(stored)) => stored.into_durable().into_session().unwrap_or_else(|| {
                leptos::logging::warn!("session: discarding inconsistent payload in '{key}'");
                Session::default()
            }),
            Ok(None) | Err(StorageError::Unavailable) => Session::default(),
            Err(e) => {
                leptos::logging::warn!("session: hydrate from '{key}' failed: {e}");
                Session::default()
            }
        };
    }

    /// Install a freshly authenticated user.
    ///
    /// The token must contain a non-whitespace character; nothing else is
    /// checked. A failed storage write does not undo the transition.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyToken`] for a blank token. State is left
    /// untouched in that case.
    pub fn login(&mut self, token: impl Into<String>, user: U) -> Result<(), SessionError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(SessionError::EmptyToken);
        }
        self.session = Session { user: Some(user), token: Some(token), is_authenticated: true, is_loading: false };
        self.persist();
        Ok(())
    }

    /// Reset to the empty session and clear the storage slot. Idempotent.
    pub fn logout(&mut self) {
        self.session = Session::default();
        self.persist();
    }

    /// Replace the user record only, e.g. after a profile refresh.
    pub fn set_user(&mut self, user: U) {
        if !self.session.is_authenticated {
            // A user without credentials never pairs with a token.
            self.session.token = None;
        }
        self.session.user = Some(user);
        self.persist();
    }

    /// Replace the loading flag only. Never touches storage.
    pub fn set_loading(&mut self, loading: bool) {
        self.session.is_loading = loading;
    }

    fn persist(&self) {
        let result = if self.session.is_authenticated {
            storage::save_json(&self.storage, &self.storage_key, &self.durable())
        } else {
            self.storage.remove_item(&self.storage_key)
        };
        if let Err(e) = result {
            leptos::logging::warn!("session: persist to '{}' failed: {e}", self.storage_key);
        }
    }
}

impl<U, S> SessionStore<U, S> {
    #[must_use]
    pub fn session(&self) -> &Session<U> {
        &self.session
    }

    #[must_use]
    pub fn user(&self) -> Option<&U> {
        self.session.user.as_ref()
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.session.token.as_deref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.session.is_loading
    }

    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Snapshot of what would be written to storage right now.
    #[must_use]
    pub fn durable(&self) -> DurableSession<U>
    where
        U: Clone,
    {
        DurableSession {
            token: self.session.token.clone(),
            user: self.session.user.clone(),
            is_authenticated: self.session.is_authenticated,
        }
    }
}
