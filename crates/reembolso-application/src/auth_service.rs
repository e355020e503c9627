//! Authentication use case: login with remember-me, logout, registration
//! and password recovery.

use crate::api::AuthApi;
use reembolso_core::session::{CredentialStore, SessionGate};
use reembolso_core::{ReembolsoError, Result};
use std::sync::Arc;

/// Orchestrates the auth endpoints, the session gate and the credential
/// store.
///
/// Local validation failures fire before any network call; remember-me
/// persistence failures are logged and swallowed (losing the prefill is
/// not worth failing a successful login).
pub struct AuthService {
    api: Arc<dyn AuthApi>,
    gate: Arc<SessionGate>,
    store: Arc<dyn CredentialStore>,
}

impl AuthService {
    pub fn new(
        api: Arc<dyn AuthApi>,
        gate: Arc<SessionGate>,
        store: Arc<dyn CredentialStore>,
    ) -> Self {
        Self { api, gate, store }
    }

    /// Exchanges credentials for a token and signs the gate in.
    ///
    /// With `remember_me` set, the email is persisted for the next login
    /// form; with it unset, any previously remembered email is cleared.
    pub async fn login(&self, email: &str, password: &str, remember_me: bool) -> Result<()> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(ReembolsoError::validation(
                "Please fill in e-mail and password.",
            ));
        }

        let token = self.api.login(email, password).await?;
        self.gate.sign_in(&token).await?;

        let remembered = if remember_me {
            self.store.set_last_email(email).await
        } else {
            self.store.remove_last_email().await
        };
        if let Err(err) = remembered {
            tracing::warn!("failed to update remembered email: {err}");
        }

        Ok(())
    }

    /// Signs the gate out and clears the persisted token.
    pub async fn logout(&self) {
        self.gate.sign_out().await;
    }

    /// Creates an account; returns the backend's confirmation message.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<String> {
        if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
            return Err(ReembolsoError::validation("Please fill in all fields."));
        }
        self.api.register(name, email, password).await
    }

    /// Requests a password-reset email.
    pub async fn forgot_password(&self, email: &str) -> Result<String> {
        if email.trim().is_empty() {
            return Err(ReembolsoError::validation("Please enter your e-mail."));
        }
        self.api.forgot_password(email).await
    }

    /// The email to prefill the login form with, if one was remembered.
    ///
    /// Storage failures are logged and read as "nothing remembered".
    pub async fn remembered_email(&self) -> Option<String> {
        match self.store.last_email().await {
            Ok(email) => email,
            Err(err) => {
                tracing::warn!("failed to read remembered email: {err}");
                None
            }
        }
    }
}
