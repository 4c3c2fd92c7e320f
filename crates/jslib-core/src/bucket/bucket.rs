use log::debug;
use serde::Serialize;

use crate::artifact::notation::DependencyNotation;
use crate::bucket::error::BucketError;

/// Lifecycle of a bucket's declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketState {
    /// Declarations may still change
    Unresolved,
    /// Resolution has read the declarations; they are now fixed
    Resolved,
}

/// A named collection of dependency declarations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyBucket {
    name: String,
    description: Option<String>,
    can_be_resolved: bool,
    /// Whether other projects may consume this bucket
    visible: bool,
    declared: Vec<DependencyNotation>,
    state: BucketState,
}

impl DependencyBucket {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            can_be_resolved: true,
            visible: true,
            declared: Vec::new(),
            state: BucketState::Unresolved,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: &str) -> &mut Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn can_be_resolved(&self) -> bool {
        self.can_be_resolved
    }

    pub fn set_can_be_resolved(&mut self, can_be_resolved: bool) -> &mut Self {
        self.can_be_resolved = can_be_resolved;
        self
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) -> &mut Self {
        self.visible = visible;
        self
    }

    /// Declarations made directly on this bucket, in declaration order.
    pub fn dependencies(&self) -> &[DependencyNotation] {
        &self.declared
    }

    /// Declare a dependency. Declaring the same notation twice keeps one entry.
    pub fn add_dependency(&mut self, notation: DependencyNotation) -> Result<(), BucketError> {
        if self.state == BucketState::Resolved {
            return Err(BucketError::AlreadyResolved {
                name: self.name.clone(),
            });
        }
        if !self.declared.contains(&notation) {
            debug!("Bucket '{}' += {}", self.name, notation);
            self.declared.push(notation);
        }
        Ok(())
    }

    pub fn state(&self) -> BucketState {
        self.state
    }

    pub fn is_resolved(&self) -> bool {
        self.state == BucketState::Resolved
    }

    pub(crate) fn mark_resolved(&mut self) {
        self.state = BucketState::Resolved;
    }
}
