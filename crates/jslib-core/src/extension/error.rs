use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtensionError {
    #[error("Property '{property}' is final and can no longer be changed")]
    Finalized { property: String },

    #[error("Unknown plugin '{name}'")]
    UnknownPlugin { name: String },

    #[error("Property '{property}' has an empty version")]
    EmptyVersion { property: String },
}
