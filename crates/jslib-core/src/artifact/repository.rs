use std::collections::BTreeMap;
use std::fmt::Debug;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::artifact::error::NotationError;
use crate::artifact::notation::{DependencyNotation, ModuleVersionId};
use crate::storage::config::read_document;
use crate::storage::error::StorageSystemError;

/// A repository declared on a project, by name and location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryDeclaration {
    pub name: String,
    pub url: String,
}

impl RepositoryDeclaration {
    pub fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
        }
    }
}

/// One file a module publishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ArtifactEntry")]
pub struct PublishedArtifact {
    pub extension: String,
    pub classifier: Option<String>,
}

impl PublishedArtifact {
    pub fn new(extension: &str) -> Self {
        Self {
            extension: extension.to_string(),
            classifier: None,
        }
    }
}

/// Fixture files may list an artifact as a bare extension or as a table.
#[derive(Deserialize)]
#[serde(untagged)]
enum ArtifactEntry {
    Extension(String),
    Detailed {
        extension: String,
        #[serde(default)]
        classifier: Option<String>,
    },
}

impl From<ArtifactEntry> for PublishedArtifact {
    fn from(entry: ArtifactEntry) -> Self {
        match entry {
            ArtifactEntry::Extension(extension) => PublishedArtifact {
                extension,
                classifier: None,
            },
            ArtifactEntry::Detailed { extension, classifier } => PublishedArtifact { extension, classifier },
        }
    }
}

fn default_packaging() -> String {
    "jar".to_string()
}

/// Metadata of one module version: what it publishes and what it depends on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    pub group: String,
    pub name: String,
    pub version: String,
    /// Extension of the artifact selected when the module is declared without `@ext`.
    /// `pom` modules publish nothing of their own.
    #[serde(default = "default_packaging")]
    pub packaging: String,
    /// Published files. Empty means only the packaging artifact.
    #[serde(default)]
    pub artifacts: Vec<PublishedArtifact>,
    /// Transitive dependencies, as notations.
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl ModuleDescriptor {
    pub fn new(group: &str, name: &str, version: &str, packaging: &str) -> Self {
        Self {
            group: group.to_string(),
            name: name.to_string(),
            version: version.to_string(),
            packaging: packaging.to_string(),
            artifacts: Vec::new(),
            dependencies: Vec::new(),
        }
    }

    pub fn with_artifact(mut self, extension: &str) -> Self {
        self.artifacts.push(PublishedArtifact::new(extension));
        self
    }

    pub fn with_dependency(mut self, notation: &str) -> Self {
        self.dependencies.push(notation.to_string());
        self
    }

    pub fn id(&self) -> ModuleVersionId {
        ModuleVersionId::new(&self.group, &self.name, &self.version)
    }

    pub fn has_packaging_artifact(&self) -> bool {
        self.packaging != "pom"
    }

    pub fn publishes(&self, extension: &str, classifier: Option<&str>) -> bool {
        if self.artifacts.is_empty() {
            return classifier.is_none() && self.has_packaging_artifact() && self.packaging == extension;
        }
        self.artifacts
            .iter()
            .any(|a| a.extension == extension && a.classifier.as_deref() == classifier)
    }

    pub fn dependency_notations(&self) -> Result<Vec<DependencyNotation>, NotationError> {
        self.dependencies.iter().map(|d| d.parse()).collect()
    }
}

/// Source of module metadata for the resolver.
pub trait ArtifactRepository: Debug {
    fn name(&self) -> &str;

    fn find_module(&self, id: &ModuleVersionId) -> Option<&ModuleDescriptor>;
}

#[derive(Deserialize)]
struct FixtureFile {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    modules: Vec<ModuleDescriptor>,
}

/// An in-memory module index.
#[derive(Debug, Clone, Default)]
pub struct FixtureRepository {
    name: String,
    modules: BTreeMap<ModuleVersionId, ModuleDescriptor>,
}

impl FixtureRepository {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            modules: BTreeMap::new(),
        }
    }

    /// Load a fixture index from a JSON, YAML or TOML file.
    pub fn from_file(path: &Path) -> Result<Self, StorageSystemError> {
        let file: FixtureFile = read_document(path)?;
        let name = file.name.unwrap_or_else(|| {
            path.file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "fixture".to_string())
        });
        let mut repository = Self::new(&name);
        for module in file.modules {
            repository.add_module(module);
        }
        debug!("Loaded fixture repository '{}' with {} modules", repository.name, repository.len());
        Ok(repository)
    }

    /// Add or replace a module.
    pub fn add_module(&mut self, module: ModuleDescriptor) {
        self.modules.insert(module.id(), module);
    }

    pub fn with_module(mut self, module: ModuleDescriptor) -> Self {
        self.add_module(module);
        self
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn modules(&self) -> impl Iterator<Item = &ModuleDescriptor> {
        self.modules.values()
    }
}

impl ArtifactRepository for FixtureRepository {
    fn name(&self) -> &str {
        &self.name
    }

    fn find_module(&self, id: &ModuleVersionId) -> Option<&ModuleDescriptor> {
        self.modules.get(id)
    }
}
