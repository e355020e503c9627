//! Ports onto the backend API, one per use case.
//!
//! The services depend on these traits rather than on `ApiClient`
//! directly, so tests can substitute canned responses. `ApiClient`
//! implements all of them.

use async_trait::async_trait;
use reembolso_client::ApiClient;
use reembolso_core::Result;
use reembolso_core::payment::{PayableTrip, PaymentRequest};
use reembolso_core::report::{ReportPeriod, ReportRow};

/// Authentication exchanges.
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<String>;
    async fn register(&self, name: &str, email: &str, password: &str) -> Result<String>;
    async fn forgot_password(&self, email: &str) -> Result<String>;
}

/// Payment reconciliation endpoints.
#[async_trait]
pub trait PaymentsApi: Send + Sync {
    async fn payable_trips(&self) -> Result<Vec<PayableTrip>>;
    async fn register_payment(&self, payment: &PaymentRequest) -> Result<String>;
}

/// Report endpoints.
#[async_trait]
pub trait ReportsApi: Send + Sync {
    async fn trips_report(&self, period: &ReportPeriod) -> Result<Vec<ReportRow>>;
}

#[async_trait]
impl AuthApi for ApiClient {
    async fn login(&self, email: &str, password: &str) -> Result<String> {
        ApiClient::login(self, email, password).await
    }

    async fn register(&self, name: &str, email: &str, password: &str) -> Result<String> {
        ApiClient::register(self, name, email, password).await
    }

    async fn forgot_password(&self, email: &str) -> Result<String> {
        ApiClient::forgot_password(self, email).await
    }
}

#[async_trait]
impl PaymentsApi for ApiClient {
    async fn payable_trips(&self) -> Result<Vec<PayableTrip>> {
        ApiClient::payable_trips(self).await
    }

    async fn register_payment(&self, payment: &PaymentRequest) -> Result<String> {
        ApiClient::register_payment(self, payment).await
    }
}

#[async_trait]
impl ReportsApi for ApiClient {
    async fn trips_report(&self, period: &ReportPeriod) -> Result<Vec<ReportRow>> {
        ApiClient::trips_report(self, period).await
    }
}
