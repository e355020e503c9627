//! Shared wiring for the commands: config, storage, session gate and the
//! API client, assembled once per invocation.

use reembolso_application::AuthService;
use reembolso_client::ApiClient;
use reembolso_core::session::SessionGate;
use reembolso_core::{ReembolsoError, Result};
use reembolso_infrastructure::{ConfigStorage, CredentialStorage};
use std::sync::Arc;

pub struct AppContext {
    pub client: Arc<ApiClient>,
    pub gate: Arc<SessionGate>,
    store: Arc<CredentialStorage>,
}

impl AppContext {
    /// Loads the configuration, restores any persisted session and builds
    /// the API client on top of the gate.
    pub async fn init() -> Result<Self> {
        let config = ConfigStorage::new()?.load()?;
        let store = Arc::new(CredentialStorage::new()?);
        let gate = Arc::new(SessionGate::new(store.clone()));
        gate.bootstrap().await;

        let client = Arc::new(ApiClient::new(config.api_url).with_token_source(gate.clone()));
        Ok(Self {
            client,
            gate,
            store,
        })
    }

    pub fn auth_service(&self) -> AuthService {
        AuthService::new(self.client.clone(), self.gate.clone(), self.store.clone())
    }

    /// Commands behind the session gate call this before touching the API.
    pub fn require_auth(&self) -> Result<()> {
        if self.gate.is_authenticated() {
            Ok(())
        } else {
            Err(ReembolsoError::validation(
                "Not signed in. Run `reembolso auth login` first.",
            ))
        }
    }
}
