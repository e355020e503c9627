//! Storage and configuration for the Reembolso client.
//!
//! Implements the persistence traits declared in `reembolso-core`: the
//! credential store backing the session gate, and the TOML application
//! configuration (API base URL).

pub mod config_storage;
pub mod paths;
pub mod storage;

pub use config_storage::{AppConfig, ConfigStorage};
pub use paths::ReembolsoPaths;
pub use storage::credential_storage::CredentialStorage;
