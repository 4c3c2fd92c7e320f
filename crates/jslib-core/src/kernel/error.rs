//! # Kernel Errors
//!
//! Defines the crate-wide [`Error`] that every subsystem error folds into.
//!
//! Each subsystem keeps its own `thiserror` enum ([`ExtensionError`],
//! [`NotationError`], [`BucketError`], [`ResolutionError`], [`LayoutError`],
//! [`TaskError`], [`StorageSystemError`]); the kernel wraps them so callers can
//! propagate any of them with `?`.
use std::path::PathBuf;
use std::result::Result as StdResult;

use thiserror::Error as ThisError;

use crate::artifact::error::NotationError;
use crate::bucket::error::BucketError;
use crate::extension::error::ExtensionError;
use crate::layout::error::LayoutError;
use crate::resolution::error::ResolutionError;
use crate::storage::error::StorageSystemError;
use crate::task::error::TaskError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("Extension error: {0}")]
    Extension(#[from] ExtensionError),

    #[error("Notation error: {0}")]
    Notation(#[from] NotationError),

    #[error("Bucket error: {0}")]
    Bucket(#[from] BucketError),

    #[error("Resolution error: {0}")]
    Resolution(#[from] ResolutionError),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Task error: {0}")]
    Task(#[from] TaskError),

    #[error("Storage system error: {0}")]
    StorageSystem(#[from] StorageSystemError),

    #[error("Project '{project}' has already been evaluated")]
    AlreadyEvaluated { project: String },

    /// A lifecycle step was requested out of order.
    #[error("Project lifecycle error during {phase}: {message}")]
    Lifecycle { phase: LifecyclePhase, message: String },
}

/// Phases of a project's configuration lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum LifecyclePhase {
    #[error("Apply")]
    Apply,
    #[error("Resolve")]
    Resolve,
}

/// Shorthand for Result with our Error type
pub type Result<T> = StdResult<T, Error>;

impl Error {
    pub fn lifecycle(phase: LifecyclePhase, message: impl Into<String>) -> Self {
        Error::Lifecycle {
            phase,
            message: message.into(),
        }
    }

    pub fn io(source: std::io::Error, operation: impl Into<String>, path: PathBuf) -> Self {
        Error::StorageSystem(StorageSystemError::io(source, operation, path))
    }
}
