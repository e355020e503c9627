//! Credential persistence trait.
//!
//! The gate and the auth use case talk to persisted storage only through
//! `CredentialStore`; the file-backed implementation lives in the
//! infrastructure crate. Absence of a value is a normal state, not an error.

use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// Key-value storage for the session token and the remembered login email.
///
/// Implementations must treat a missing key as `Ok(None)`. Errors are
/// reserved for genuine storage failures (unreadable file, bad permissions);
/// callers decide whether to surface or swallow them.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Returns the persisted session token, if any.
    async fn token(&self) -> Result<Option<String>>;

    /// Persists the session token for future bootstraps.
    async fn set_token(&self, token: &str) -> Result<()>;

    /// Deletes the persisted session token. Deleting an absent token is Ok.
    async fn remove_token(&self) -> Result<()>;

    /// Returns the last remembered login email, if any.
    async fn last_email(&self) -> Result<Option<String>>;

    /// Persists the login email for form prefill ("remember me").
    async fn set_last_email(&self, email: &str) -> Result<()>;

    /// Deletes the remembered login email.
    async fn remove_last_email(&self) -> Result<()>;
}

/// In-memory `CredentialStore` for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryCredentialStore {
    values: Mutex<HashMap<&'static str, String>>,
}

const TOKEN_KEY: &str = "userToken";
const LAST_EMAIL_KEY: &str = "lastUserEmail";

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn token(&self) -> Result<Option<String>> {
        Ok(self.values.lock().await.get(TOKEN_KEY).cloned())
    }

    async fn set_token(&self, token: &str) -> Result<()> {
        self.values.lock().await.insert(TOKEN_KEY, token.to_string());
        Ok(())
    }

    async fn remove_token(&self) -> Result<()> {
        self.values.lock().await.remove(TOKEN_KEY);
        Ok(())
    }

    async fn last_email(&self) -> Result<Option<String>> {
        Ok(self.values.lock().await.get(LAST_EMAIL_KEY).cloned())
    }

    async fn set_last_email(&self, email: &str) -> Result<()> {
        self.values
            .lock()
            .await
            .insert(LAST_EMAIL_KEY, email.to_string());
        Ok(())
    }

    async fn remove_last_email(&self) -> Result<()> {
        self.values.lock().await.remove(LAST_EMAIL_KEY);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_store_round_trip() {
        let store = MemoryCredentialStore::new();
        assert_eq!(store.token().await.unwrap(), None);

        store.set_token("abc123").await.unwrap();
        assert_eq!(store.token().await.unwrap(), Some("abc123".to_string()));

        store.remove_token().await.unwrap();
        assert_eq!(store.token().await.unwrap(), None);
    }

    #[tokio::test]
    async fn remove_absent_key_is_ok() {
        let store = MemoryCredentialStore::new();
        store.remove_token().await.unwrap();
        store.remove_last_email().await.unwrap();
    }
}
