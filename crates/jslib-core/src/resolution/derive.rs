use serde::Serialize;

use crate::artifact::notation::{DependencyNotation, ResolvedArtifact};
use crate::extension::dependency::LIBRARY_EXTENSION;

/// Extensions that mark a resolved artifact as a Jenkins plugin.
pub const PLUGIN_EXTENSIONS: [&str; 2] = ["hpi", "jpi"];

/// What a derivation produces from the resolved plugin artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DerivedArtifacts {
    /// The plugin packages themselves, keeping their `hpi`/`jpi` extension
    PluginPackages,
    /// The plain library jar published next to each plugin package
    PluginLibraries,
}

impl DerivedArtifacts {
    fn extension_for<'a>(&self, artifact: &'a ResolvedArtifact) -> &'a str {
        match self {
            DerivedArtifacts::PluginPackages => &artifact.extension,
            DerivedArtifacts::PluginLibraries => LIBRARY_EXTENSION,
        }
    }
}

/// Fill `target` from the resolved artifacts of `source`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivationBinding {
    pub target: String,
    pub source: String,
    pub kind: DerivedArtifacts,
}

impl DerivationBinding {
    pub fn new(target: &str, source: &str, kind: DerivedArtifacts) -> Self {
        Self {
            target: target.to_string(),
            source: source.to_string(),
            kind,
        }
    }
}

pub fn is_plugin_artifact(artifact: &ResolvedArtifact) -> bool {
    PLUGIN_EXTENSIONS.contains(&artifact.extension.as_str())
}

/// Map resolved artifacts to `<module-version>@<extension>` declarations.
///
/// Only plugin artifacts are kept; anything else a plugin pulls in
/// transitively is dropped. Output order follows the input, without duplicates.
pub fn derive_dependencies(artifacts: &[ResolvedArtifact], kind: DerivedArtifacts) -> Vec<DependencyNotation> {
    let mut derived: Vec<DependencyNotation> = Vec::new();
    for artifact in artifacts.iter().filter(|a| is_plugin_artifact(a)) {
        let notation = DependencyNotation::new(artifact.id.clone()).with_extension(kind.extension_for(artifact));
        if !derived.contains(&notation) {
            derived.push(notation);
        }
    }
    derived
}
