//! File-backed storage.

pub mod atomic_json;
pub mod credential_storage;

pub use atomic_json::{AtomicJsonError, AtomicJsonFile};
pub use credential_storage::CredentialStorage;
