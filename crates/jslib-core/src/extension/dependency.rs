use std::fmt;

use serde::Serialize;

use crate::artifact::notation::{DependencyNotation, ModuleVersionId};
use crate::extension::error::ExtensionError;
use crate::extension::version::VersionProperty;

/// Extension of a Jenkins plugin package.
pub const HPI_EXTENSION: &str = "hpi";
/// Extension of the plain library jar published next to each plugin package.
pub const LIBRARY_EXTENSION: &str = "jar";

/// A Jenkins plugin the shared library depends on, with a mutable version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginDependencyDescriptor {
    /// The name the plugin is configured under (`git`, `workflow-api`, ...)
    name: String,
    group: String,
    artifact_id: String,
    version: VersionProperty,
}

impl PluginDependencyDescriptor {
    pub fn new(name: &str, group: &str, artifact_id: &str, default_version: &str) -> Self {
        Self {
            name: name.to_string(),
            group: group.to_string(),
            artifact_id: artifact_id.to_string(),
            version: VersionProperty::new(version_property_name(name), default_version),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> &str {
        self.version.get()
    }

    pub fn version_property(&self) -> &VersionProperty {
        &self.version
    }

    pub fn set_version(&mut self, version: impl Into<String>) -> Result<(), ExtensionError> {
        self.version.set(version)
    }

    pub(crate) fn finalize(&mut self) {
        self.version.finalize();
    }

    /// `group:artifact:version`, with no extension suffix.
    pub fn as_string_notation(&self) -> String {
        format!("{}:{}:{}", self.group, self.artifact_id, self.version())
    }

    /// The plugin package coordinate, `group:artifact:version@<extension>`.
    pub fn package_notation(&self, extension: &str) -> String {
        format!("{}@{}", self.as_string_notation(), extension)
    }

    pub fn hpi_notation(&self) -> String {
        self.package_notation(HPI_EXTENSION)
    }

    pub fn library_notation(&self) -> String {
        self.package_notation(LIBRARY_EXTENSION)
    }

    pub fn module_version_id(&self) -> ModuleVersionId {
        ModuleVersionId::new(&self.group, &self.artifact_id, self.version())
    }

    /// The logical declaration added to the plugin-declarations bucket.
    pub fn to_notation(&self) -> DependencyNotation {
        DependencyNotation::new(self.module_version_id())
    }
}

/// `workflow-api` becomes `workflowApiPluginVersion`.
fn version_property_name(plugin: &str) -> String {
    let mut property = String::with_capacity(plugin.len() + 13);
    let mut upper_next = false;
    for c in plugin.chars() {
        if c == '-' {
            upper_next = true;
        } else if upper_next {
            property.extend(c.to_uppercase());
            upper_next = false;
        } else {
            property.push(c);
        }
    }
    property.push_str("PluginVersion");
    property
}

impl fmt::Display for PluginDependencyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string_notation())
    }
}
