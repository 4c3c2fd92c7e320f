use std::fmt;

use log::debug;
use serde::Serialize;

use crate::extension::error::ExtensionError;

/// A named version setting with a default.
///
/// The value may be overwritten until [`finalize`](Self::finalize) is called;
/// after that the property is read-only for the rest of the build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionProperty {
    name: String,
    default: String,
    value: Option<String>,
    #[serde(skip)]
    finalized: bool,
}

impl VersionProperty {
    pub fn new(name: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: default.into(),
            value: None,
            finalized: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The effective version: the override if one was set, otherwise the default.
    pub fn get(&self) -> &str {
        self.value.as_deref().unwrap_or(&self.default)
    }

    pub fn default_value(&self) -> &str {
        &self.default
    }

    pub fn is_overridden(&self) -> bool {
        self.value.is_some()
    }

    pub fn set(&mut self, version: impl Into<String>) -> Result<(), ExtensionError> {
        self.ensure_mutable()?;
        let version = version.into();
        debug!("Setting '{}' to '{}'", self.name, version);
        self.value = Some(version);
        Ok(())
    }

    /// Drop any override and fall back to the default.
    pub fn reset(&mut self) -> Result<(), ExtensionError> {
        self.ensure_mutable()?;
        self.value = None;
        Ok(())
    }

    pub fn finalize(&mut self) {
        self.finalized = true;
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    fn ensure_mutable(&self) -> Result<(), ExtensionError> {
        if self.finalized {
            return Err(ExtensionError::Finalized {
                property: self.name.clone(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for VersionProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
