//! Use cases for the Reembolso client.
//!
//! Each service orchestrates the core domain, the HTTP client and the
//! credential storage behind `Arc<dyn Trait>` seams, so the CLI (or any
//! other front end) only ever touches this crate.

pub mod api;
pub mod auth_service;
pub mod payment_workbench;
pub mod report_service;

pub use auth_service::AuthService;
pub use payment_workbench::PaymentWorkbench;
pub use report_service::{ReportService, TripsReport, format_brl, render_report_html};
