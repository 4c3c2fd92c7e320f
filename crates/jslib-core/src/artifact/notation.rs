use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::artifact::error::NotationError;

/// A module without a version, `group:name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModuleId {
    pub group: String,
    pub name: String,
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.name)
    }
}

/// A module at a specific version, `group:name:version`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModuleVersionId {
    pub group: String,
    pub name: String,
    pub version: String,
}

impl ModuleVersionId {
    pub fn new(group: &str, name: &str, version: &str) -> Self {
        Self {
            group: group.to_string(),
            name: name.to_string(),
            version: version.to_string(),
        }
    }

    pub fn module(&self) -> ModuleId {
        ModuleId {
            group: self.group.clone(),
            name: self.name.clone(),
        }
    }
}

impl fmt::Display for ModuleVersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.version)
    }
}

impl FromStr for ModuleVersionId {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let notation = DependencyNotation::from_str(s)?;
        if notation.classifier.is_some() || notation.extension.is_some() {
            return Err(NotationError::malformed(s, "expected group:name:version"));
        }
        Ok(notation.id)
    }
}

/// A declared dependency, `group:name:version[:classifier][@extension]`.
///
/// A notation with an explicit extension is artifact-only: it selects exactly
/// that artifact and none of the module's transitive dependencies. The version
/// may be empty; such a notation parses but never resolves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DependencyNotation {
    pub id: ModuleVersionId,
    pub classifier: Option<String>,
    pub extension: Option<String>,
}

impl DependencyNotation {
    pub fn new(id: ModuleVersionId) -> Self {
        Self {
            id,
            classifier: None,
            extension: None,
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = Some(classifier.into());
        self
    }

    pub fn is_artifact_only(&self) -> bool {
        self.extension.is_some()
    }
}

impl fmt::Display for DependencyNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)?;
        if let Some(classifier) = &self.classifier {
            write!(f, ":{}", classifier)?;
        }
        if let Some(extension) = &self.extension {
            write!(f, "@{}", extension)?;
        }
        Ok(())
    }
}

impl FromStr for DependencyNotation {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (coordinates, extension) = match s.split_once('@') {
            Some((_, "")) => return Err(NotationError::malformed(s, "empty extension after '@'")),
            Some((_, ext)) if ext.contains('@') => {
                return Err(NotationError::malformed(s, "more than one '@'"));
            }
            Some((coords, ext)) => (coords, Some(ext.to_string())),
            None => (s, None),
        };

        let parts: Vec<&str> = coordinates.split(':').collect();
        let (group, name, version, classifier) = match parts.as_slice() {
            [group, name, version] => (*group, *name, *version, None),
            [group, name, version, classifier] if !classifier.is_empty() => {
                (*group, *name, *version, Some(classifier.to_string()))
            }
            _ => {
                return Err(NotationError::malformed(
                    s,
                    "expected group:name:version[:classifier][@extension]",
                ));
            }
        };
        if group.is_empty() || name.is_empty() {
            return Err(NotationError::malformed(s, "group and name must not be empty"));
        }

        Ok(Self {
            id: ModuleVersionId::new(group, name, version),
            classifier,
            extension,
        })
    }
}

/// One file selected by resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ResolvedArtifact {
    pub id: ModuleVersionId,
    pub extension: String,
    pub classifier: Option<String>,
}

impl ResolvedArtifact {
    pub fn new(id: ModuleVersionId, extension: &str, classifier: Option<&str>) -> Self {
        Self {
            id,
            extension: extension.to_string(),
            classifier: classifier.map(str::to_string),
        }
    }

    /// `name-version[-classifier].extension`
    pub fn file_name(&self) -> String {
        match &self.classifier {
            Some(classifier) => format!(
                "{}-{}-{}.{}",
                self.id.name, self.id.version, classifier, self.extension
            ),
            None => format!("{}-{}.{}", self.id.name, self.id.version, self.extension),
        }
    }

    /// The artifact-only notation that selects exactly this file.
    pub fn notation(&self) -> DependencyNotation {
        DependencyNotation {
            id: self.id.clone(),
            classifier: self.classifier.clone(),
            extension: Some(self.extension.clone()),
        }
    }
}

impl fmt::Display for ResolvedArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notation())
    }
}
