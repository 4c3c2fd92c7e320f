//! # Layout Errors
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Source set '{name}' not found")]
    SourceSetNotFound { name: String },

    #[error("Source set '{name}' already exists")]
    SourceSetExists { name: String },
}
