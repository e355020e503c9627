//! Core domain logic for the Reembolso mileage-reimbursement client.
//!
//! This crate holds everything that is pure and synchronous: the session
//! gate state machine, the trip selection and payment reconciliation
//! engine, report aggregation, and the domain models shared with the
//! HTTP client and storage layers. It performs no I/O of its own; storage
//! and network access are behind traits implemented by the outer crates.

pub mod error;
pub mod expense;
pub mod payment;
pub mod report;
pub mod selection;
pub mod session;
pub mod trip;
pub mod vehicle;

pub use error::{ReembolsoError, Result};
pub use payment::{PayableTrip, PaymentMethod, PaymentRequest, build_payment_payload};
pub use report::{ReportPeriod, ReportRow, ReportTotals, aggregate_report};
pub use selection::{SelectionSet, compute_total};
pub use session::{CredentialStore, SessionGate, SessionState, TokenSource};
