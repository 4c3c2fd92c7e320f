//! # Resolution Errors
//!
//! Every variant names the bucket whose resolution was requested, which for a
//! failure inside a derivation is the downstream bucket that forced it.
use thiserror::Error;

use crate::artifact::error::NotationError;
use crate::bucket::error::BucketError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolutionError {
    #[error(transparent)]
    Bucket(#[from] BucketError),

    #[error("Bucket '{bucket}' is not resolvable")]
    BucketNotResolvable { bucket: String },

    #[error("Bucket '{bucket}' is already being resolved: {}", .chain.join(" -> "))]
    Reentrant { bucket: String, chain: Vec<String> },

    #[error("Could not resolve '{notation}' for bucket '{bucket}' in repository '{repository}': module not found")]
    ModuleNotFound {
        bucket: String,
        notation: String,
        repository: String,
    },

    #[error("Could not resolve '{notation}' for bucket '{bucket}': module does not publish that artifact")]
    ArtifactNotFound { bucket: String, notation: String },

    #[error("Module '{module}' has an invalid dependency: {error}")]
    InvalidModuleDependency {
        module: String,
        #[source]
        error: NotationError,
    },
}
