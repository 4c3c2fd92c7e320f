use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("Malformed dependency notation '{notation}': {reason}")]
    Malformed { notation: String, reason: String },
}

impl NotationError {
    pub(crate) fn malformed(notation: &str, reason: impl Into<String>) -> Self {
        NotationError::Malformed {
            notation: notation.to_string(),
            reason: reason.into(),
        }
    }
}
