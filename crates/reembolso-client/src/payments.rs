//! Payment endpoints.

use crate::client::{ApiClient, MessageResponse};
use reembolso_core::Result;
use reembolso_core::payment::{PayableTrip, PaymentRequest};

impl ApiClient {
    /// Lists the trips awaiting payment.
    pub async fn payable_trips(&self) -> Result<Vec<PayableTrip>> {
        let request = self.authorize(self.get("/api/pagamentos/apagar")).await;
        self.send_json(request).await
    }

    /// Registers a payment covering the selected trips.
    pub async fn register_payment(&self, payment: &PaymentRequest) -> Result<String> {
        let request = self.authorize(self.post("/api/pagamentos").json(payment)).await;
        let response: MessageResponse = self.send_json(request).await?;
        Ok(response.into_message("Pagamento registrado com sucesso!"))
    }
}
