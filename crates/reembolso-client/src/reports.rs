//! Report endpoints.

use crate::client::ApiClient;
use reembolso_core::Result;
use reembolso_core::report::{ReportPeriod, ReportRow};

impl ApiClient {
    /// Fetches the trips report rows for an already-validated period.
    pub async fn trips_report(&self, period: &ReportPeriod) -> Result<Vec<ReportRow>> {
        let path = format!(
            "/api/relatorios/viagens?data_inicio={}&data_fim={}",
            period.start, period.end
        );
        let request = self.authorize(self.get(&path)).await;
        self.send_json(request).await
    }
}
