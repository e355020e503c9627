//! Authenticated-session gate.
//!
//! Owns the "is the user signed in" state the navigation layer branches on.
//! The state is a pure function of the in-memory token: no token means
//! `Unauthenticated`, a token means `Authenticated`, and `Loading` only
//! exists between process start and the one-shot [`SessionGate::bootstrap`].
//!
//! Observers subscribe through a `tokio::sync::watch` channel instead of
//! reading ambient shared state, so exactly one navigation subtree can be
//! active for a given state at any time.

use crate::error::{ReembolsoError, Result};
use crate::session::store::CredentialStore;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{RwLock, watch};

/// The three session states the navigation layer distinguishes.
///
/// Transitions: `Loading` resolves exactly once via `bootstrap` into one of
/// the other two; `sign_in` and `sign_out` move between `Authenticated` and
/// `Unauthenticated`. Nothing returns to `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Persisted token not read yet; no navigation decision may be made.
    Loading,
    Unauthenticated,
    Authenticated,
}

/// Anything that can produce the current bearer token for API calls.
///
/// The HTTP client depends on this trait rather than on the gate directly,
/// so tests can substitute a fixed token.
#[async_trait]
pub trait TokenSource: Send + Sync {
    /// The token to present as `Authorization: Bearer`, if signed in.
    async fn bearer_token(&self) -> Option<String>;
}

struct GateInner {
    token: Option<String>,
    resolved: bool,
}

/// The session gate.
///
/// Holds the in-memory token, mirrors it to the [`CredentialStore`] on
/// sign-in/sign-out, and broadcasts state changes to subscribers.
/// Persistence failures are logged and swallowed: a broken credential file
/// must never lock the user out of the current process, and a failed write
/// only costs the next bootstrap its token.
pub struct SessionGate {
    store: Arc<dyn CredentialStore>,
    inner: RwLock<GateInner>,
    state_tx: watch::Sender<SessionState>,
}

impl SessionGate {
    /// Creates a gate in the `Loading` state.
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        let (state_tx, _) = watch::channel(SessionState::Loading);
        Self {
            store,
            inner: RwLock::new(GateInner {
                token: None,
                resolved: false,
            }),
            state_tx,
        }
    }

    /// Reads the persisted token and resolves the `Loading` state.
    ///
    /// Runs once per gate; later calls return the already-resolved state
    /// without touching storage. A storage read failure is logged and
    /// treated as "no token" - the gate fails open into `Unauthenticated`.
    pub async fn bootstrap(&self) -> SessionState {
        let mut inner = self.inner.write().await;
        if inner.resolved {
            return self.state();
        }

        let token = match self.store.token().await {
            Ok(token) => token,
            Err(err) => {
                tracing::warn!("failed to read persisted session token: {err}");
                None
            }
        };
        // Empty tokens from a corrupt store count as absent.
        inner.token = token.filter(|t| !t.is_empty());
        inner.resolved = true;

        let state = Self::state_for(&inner.token);
        self.state_tx.send_replace(state);
        state
    }

    /// Signs in with a token obtained from a successful auth exchange.
    ///
    /// Rejects an empty token before any state change. Persists the token
    /// best-effort for future bootstraps; a persistence failure is logged,
    /// never surfaced.
    pub async fn sign_in(&self, token: &str) -> Result<()> {
        if token.is_empty() {
            return Err(ReembolsoError::validation(
                "Cannot sign in with an empty session token.",
            ));
        }

        {
            let mut inner = self.inner.write().await;
            inner.token = Some(token.to_string());
            inner.resolved = true;
        }
        self.state_tx.send_replace(SessionState::Authenticated);

        if let Err(err) = self.store.set_token(token).await {
            tracing::warn!("failed to persist session token: {err}");
        }
        Ok(())
    }

    /// Clears the in-memory and persisted token. Idempotent.
    pub async fn sign_out(&self) {
        {
            let mut inner = self.inner.write().await;
            inner.token = None;
            inner.resolved = true;
        }
        self.state_tx.send_replace(SessionState::Unauthenticated);

        if let Err(err) = self.store.remove_token().await {
            tracing::warn!("failed to remove persisted session token: {err}");
        }
    }

    /// The current session state.
    pub fn state(&self) -> SessionState {
        *self.state_tx.borrow()
    }

    /// Whether the gate currently holds a token.
    pub fn is_authenticated(&self) -> bool {
        self.state() == SessionState::Authenticated
    }

    /// Subscribes to state changes (for re-rendering navigation).
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state_tx.subscribe()
    }

    /// The current in-memory token, if signed in.
    pub async fn token(&self) -> Option<String> {
        self.inner.read().await.token.clone()
    }

    fn state_for(token: &Option<String>) -> SessionState {
        if token.is_some() {
            SessionState::Authenticated
        } else {
            SessionState::Unauthenticated
        }
    }
}

#[async_trait]
impl TokenSource for SessionGate {
    async fn bearer_token(&self) -> Option<String> {
        self.token().await
    }
}
