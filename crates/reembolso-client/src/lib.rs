//! Typed HTTP client for the Reembolso backend REST API.
//!
//! One [`ApiClient`] per process, shared across the use cases. Bearer
//! tokens come from a [`reembolso_core::TokenSource`] (normally the
//! session gate), so the client itself never stores credentials.

mod auth;
mod client;
mod dashboard;
mod expenses;
mod payments;
mod reports;
mod trips;
mod vehicles;

pub use auth::FORGOT_PASSWORD_FALLBACK;
pub use client::ApiClient;
pub use dashboard::DashboardSummary;
pub use expenses::ExpensePage;
