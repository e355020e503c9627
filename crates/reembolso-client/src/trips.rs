//! Trip endpoints.

use crate::client::{ApiClient, MessageResponse};
use reembolso_core::Result;
use reembolso_core::trip::TripRequest;

impl ApiClient {
    /// Saves a trip (create, finish a draft, or update; the backend
    /// matches on the request's `id`).
    pub async fn save_trip(&self, request: &TripRequest) -> Result<String> {
        let http_request = self.authorize(self.post("/api/viagens").json(request)).await;
        let response: MessageResponse = self.send_json(http_request).await?;
        Ok(response.into_message("Viagem salva com sucesso!"))
    }
}
