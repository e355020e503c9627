//! Expense endpoints, including the receipt-image upload.

use crate::client::{ApiClient, MessageResponse};
use reembolso_core::Result;
use reembolso_core::expense::{Expense, ExpenseInput};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

/// Response of `GET /api/despesas`.
#[derive(Debug, Deserialize)]
pub struct ExpensePage {
    #[serde(rename = "despesas")]
    pub expenses: Vec<Expense>,
}

#[derive(Deserialize)]
struct UploadResponse {
    #[serde(rename = "filePath")]
    file_path: String,
}

impl ApiClient {
    /// Lists the most recent expenses, newest first.
    pub async fn expenses(&self, limit: u32) -> Result<ExpensePage> {
        let request = self
            .authorize(self.get(&format!("/api/despesas?limit={limit}")))
            .await;
        self.send_json(request).await
    }

    /// Creates an expense. Validates the input before any network call.
    pub async fn create_expense(&self, input: &ExpenseInput) -> Result<String> {
        input.validate()?;
        let request = self.authorize(self.post("/api/despesas").json(input)).await;
        let response: MessageResponse = self.send_json(request).await?;
        Ok(response.into_message("Despesa cadastrada com sucesso!"))
    }

    /// Updates an existing expense.
    pub async fn update_expense(&self, id: i64, input: &ExpenseInput) -> Result<String> {
        input.validate()?;
        let request = self
            .authorize(self.put(&format!("/api/despesas/{id}")).json(input))
            .await;
        let response: MessageResponse = self.send_json(request).await?;
        Ok(response.into_message("Despesa atualizada com sucesso!"))
    }

    /// Deletes an expense.
    pub async fn delete_expense(&self, id: i64) -> Result<String> {
        let request = self
            .authorize(self.delete(&format!("/api/despesas/{id}")))
            .await;
        let response: MessageResponse = self.send_json(request).await?;
        Ok(response.into_message("Despesa excluída com sucesso!"))
    }

    /// Uploads a receipt image; returns the server path to store on the
    /// expense as `link_comprovante`.
    pub async fn upload_receipt(
        &self,
        file_name: &str,
        mime_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime_type)
            .map_err(|err| {
                reembolso_core::ReembolsoError::validation(format!(
                    "invalid receipt mime type: {err}"
                ))
            })?;
        let form = Form::new().part("comprovante", part);

        let request = self.authorize(self.post("/api/upload").multipart(form)).await;
        let response: UploadResponse = self.send_json(request).await?;
        Ok(response.file_path)
    }
}
