//! File-backed credential store.
//!
//! Persists the session token (`userToken`) and the remembered login email
//! (`lastUserEmail`) as a single JSON document under the platform config
//! directory. Absent keys are a normal state; only genuine file failures
//! become errors, and the session gate treats even those as "no token".

use crate::paths::ReembolsoPaths;
use crate::storage::atomic_json::AtomicJsonFile;
use async_trait::async_trait;
use reembolso_core::session::CredentialStore;
use reembolso_core::{ReembolsoError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CredentialDocument {
    #[serde(rename = "userToken", skip_serializing_if = "Option::is_none")]
    user_token: Option<String>,
    #[serde(rename = "lastUserEmail", skip_serializing_if = "Option::is_none")]
    last_user_email: Option<String>,
}

/// Storage for the credential document (`credentials.json`).
///
/// Writes are atomic (tmp file + fsync + rename under an advisory lock)
/// and the file is chmodded to 600 on Unix after every save.
pub struct CredentialStorage {
    file: AtomicJsonFile<CredentialDocument>,
}

impl CredentialStorage {
    /// Creates storage at the default path
    /// (`<config dir>/reembolso/credentials.json`).
    pub fn new() -> Result<Self> {
        let path = ReembolsoPaths::credentials_file()
            .map_err(|err| ReembolsoError::config(err.to_string()))?;
        Ok(Self::with_path(path))
    }

    /// Creates storage with a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicJsonFile::new(path),
        }
    }

    fn read(&self) -> Result<CredentialDocument> {
        self.file
            .load()
            .map(Option::unwrap_or_default)
            .map_err(|err| ReembolsoError::data_access(err.to_string()))
    }

    fn write<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut CredentialDocument),
    {
        self.file
            .update(CredentialDocument::default(), |document| {
                f(document);
                Ok(())
            })
            .map_err(|err| ReembolsoError::data_access(err.to_string()))?;
        self.restrict_permissions();
        Ok(())
    }

    /// Best-effort chmod 600; the token is a plaintext credential.
    fn restrict_permissions(&self) {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(0o600);
            if let Err(err) = std::fs::set_permissions(self.file.path(), permissions) {
                tracing::warn!("failed to restrict credential file permissions: {err}");
            }
        }
    }
}

#[async_trait]
impl CredentialStore for CredentialStorage {
    async fn token(&self) -> Result<Option<String>> {
        Ok(self.read()?.user_token)
    }

    async fn set_token(&self, token: &str) -> Result<()> {
        let token = token.to_string();
        self.write(move |document| document.user_token = Some(token))
    }

    async fn remove_token(&self) -> Result<()> {
        self.write(|document| document.user_token = None)
    }

    async fn last_email(&self) -> Result<Option<String>> {
        Ok(self.read()?.last_user_email)
    }

    async fn set_last_email(&self, email: &str) -> Result<()> {
        let email = email.to_string();
        self.write(move |document| document.last_user_email = Some(email))
    }

    async fn remove_last_email(&self) -> Result<()> {
        self.write(|document| document.last_user_email = None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn storage(dir: &TempDir) -> CredentialStorage {
        CredentialStorage::with_path(dir.path().join("credentials.json"))
    }

    #[tokio::test]
    async fn absent_keys_are_none_not_errors() {
        let dir = TempDir::new().unwrap();
        let storage = storage(&dir);
        assert_eq!(storage.token().await.unwrap(), None);
        assert_eq!(storage.last_email().await.unwrap(), None);
    }

    #[tokio::test]
    async fn token_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("credentials.json");

        let storage = CredentialStorage::with_path(path.clone());
        storage.set_token("tok-1").await.unwrap();
        drop(storage);

        let reopened = CredentialStorage::with_path(path);
        assert_eq!(reopened.token().await.unwrap(), Some("tok-1".to_string()));
    }

    #[tokio::test]
    async fn token_and_email_are_independent() {
        let dir = TempDir::new().unwrap();
        let storage = storage(&dir);

        storage.set_token("tok-1").await.unwrap();
        storage.set_last_email("a@b.com").await.unwrap();
        storage.remove_token().await.unwrap();

        assert_eq!(storage.token().await.unwrap(), None);
        assert_eq!(
            storage.last_email().await.unwrap(),
            Some("a@b.com".to_string())
        );
    }

    #[tokio::test]
    async fn remove_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let storage = storage(&dir);
        storage.remove_token().await.unwrap();
        storage.remove_token().await.unwrap();
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn credential_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let storage = storage(&dir);
        storage.set_token("tok-1").await.unwrap();

        let mode = std::fs::metadata(dir.path().join("credentials.json"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
