//! # Bucket Errors
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BucketError {
    #[error("Bucket '{name}' not found")]
    NotFound { name: String },

    #[error("Bucket '{name}' already exists")]
    AlreadyExists { name: String },

    #[error("Extending would create a cycle: {}", .path.join(" -> "))]
    CycleDetected { path: Vec<String> },

    #[error("Cannot change dependencies of bucket '{name}' after it has been resolved")]
    AlreadyResolved { name: String },

    #[error("Invalid derivation from '{source_bucket}' into '{target}': {reason}")]
    InvalidDerivation {
        target: String,
        source_bucket: String,
        reason: String,
    },
}
