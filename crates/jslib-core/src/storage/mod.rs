pub mod config;
pub mod error;

/// Re-export key types
pub use config::{ConfigFormat, LibrarySettings, ProjectSettings, VersionSettings};
pub use error::StorageSystemError;
