//! Dashboard summary endpoint.

use crate::client::ApiClient;
use reembolso_core::Result;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Home-screen summary figures (`GET /api/dashboard/summary`).
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardSummary {
    /// Trips not yet covered by a payment
    #[serde(rename = "viagens_pendentes")]
    pub pending_trips: i64,
    /// Total reimbursement still owed
    #[serde(rename = "total_a_receber")]
    pub receivable: Decimal,
    /// Distance driven in the current month, in km
    #[serde(rename = "km_mes")]
    pub month_distance: Decimal,
}

impl ApiClient {
    /// Fetches the dashboard summary.
    pub async fn dashboard_summary(&self) -> Result<DashboardSummary> {
        let request = self.authorize(self.get("/api/dashboard/summary")).await;
        self.send_json(request).await
    }
}
