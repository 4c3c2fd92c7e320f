use serde::Serialize;

use crate::artifact::notation::{ModuleVersionId, ResolvedArtifact};

/// The artifacts a bucket resolved to, in selection order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedBucket {
    name: String,
    artifacts: Vec<ResolvedArtifact>,
}

impl ResolvedBucket {
    pub fn new(name: &str, artifacts: Vec<ResolvedArtifact>) -> Self {
        Self {
            name: name.to_string(),
            artifacts,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn artifacts(&self) -> &[ResolvedArtifact] {
        &self.artifacts
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Artifact-only notations, e.g. `org.jenkins-ci.plugins:git:3.5.1@hpi`.
    pub fn notations(&self) -> Vec<String> {
        self.artifacts.iter().map(|a| a.to_string()).collect()
    }

    pub fn file_names(&self) -> Vec<String> {
        self.artifacts.iter().map(ResolvedArtifact::file_name).collect()
    }

    pub fn module_versions(&self) -> Vec<&ModuleVersionId> {
        let mut ids: Vec<&ModuleVersionId> = Vec::new();
        for artifact in &self.artifacts {
            if !ids.contains(&&artifact.id) {
                ids.push(&artifact.id);
            }
        }
        ids
    }

    pub fn contains(&self, notation: &str) -> bool {
        self.artifacts.iter().any(|a| a.to_string() == notation)
    }
}
