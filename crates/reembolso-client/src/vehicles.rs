//! Vehicle endpoints.

use crate::client::{ApiClient, MessageResponse};
use reembolso_core::Result;
use reembolso_core::vehicle::{Vehicle, VehicleInput};

impl ApiClient {
    /// Lists the user's vehicles.
    pub async fn vehicles(&self) -> Result<Vec<Vehicle>> {
        let request = self.authorize(self.get("/api/veiculos")).await;
        self.send_json(request).await
    }

    /// Creates a vehicle. Validates the input before any network call.
    pub async fn create_vehicle(&self, input: &VehicleInput) -> Result<String> {
        input.validate()?;
        let request = self.authorize(self.post("/api/veiculos").json(input)).await;
        let response: MessageResponse = self.send_json(request).await?;
        Ok(response.into_message("Veículo cadastrado com sucesso!"))
    }

    /// Updates an existing vehicle.
    pub async fn update_vehicle(&self, id: i64, input: &VehicleInput) -> Result<String> {
        input.validate()?;
        let request = self
            .authorize(self.put(&format!("/api/veiculos/{id}")).json(input))
            .await;
        let response: MessageResponse = self.send_json(request).await?;
        Ok(response.into_message("Veículo atualizado com sucesso!"))
    }
}
