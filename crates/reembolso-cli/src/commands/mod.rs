pub mod auth;
pub mod dashboard;
pub mod expenses;
pub mod payments;
pub mod report;
pub mod trips;
pub mod vehicles;
