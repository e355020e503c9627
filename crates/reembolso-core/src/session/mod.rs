//! Session gate: authenticated-state machine and credential persistence traits.

pub mod gate;
pub mod store;

pub use gate::{SessionGate, SessionState, TokenSource};
pub use store::{CredentialStore, MemoryCredentialStore};
