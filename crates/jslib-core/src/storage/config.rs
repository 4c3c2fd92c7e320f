use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::extension::error::ExtensionError;
use crate::extension::SharedLibraryExtension;
use crate::storage::error::StorageSystemError;

/// Supported settings file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// JSON format (.json)
    Json,
    /// YAML format (.yaml, .yml) - requires "yaml-config" feature
    #[cfg(feature = "yaml-config")]
    Yaml,
    /// TOML format (.toml) - requires "toml-config" feature
    #[cfg(feature = "toml-config")]
    Toml,
}

impl ConfigFormat {
    /// Get the file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ConfigFormat::Json => "json",
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => "yaml",
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => "toml",
        }
    }

    /// Determine format from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| match ext.to_lowercase().as_str() {
                "json" => Some(ConfigFormat::Json),
                #[cfg(feature = "yaml-config")]
                "yaml" | "yml" => Some(ConfigFormat::Yaml),
                #[cfg(feature = "toml-config")]
                "toml" => Some(ConfigFormat::Toml),
                _ => None,
            })
    }

    /// Deserialize a document in this format
    pub fn deserialize<T: DeserializeOwned>(&self, data: &str) -> Result<T, StorageSystemError> {
        match self {
            ConfigFormat::Json => serde_json::from_str(data).map_err(|e| deserialization_error(*self, e)),
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => serde_yaml::from_str(data).map_err(|e| deserialization_error(*self, e)),
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => toml::from_str(data).map_err(|e| deserialization_error(*self, e)),
        }
    }

    /// Serialize a document to this format
    pub fn serialize<T: Serialize>(&self, value: &T) -> Result<String, StorageSystemError> {
        match self {
            ConfigFormat::Json => serde_json::to_string_pretty(value).map_err(|e| serialization_error(*self, e)),
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => serde_yaml::to_string(value).map_err(|e| serialization_error(*self, e)),
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => toml::to_string_pretty(value).map_err(|e| serialization_error(*self, e)),
        }
    }
}

fn deserialization_error<E>(format: ConfigFormat, source: E) -> StorageSystemError
where
    E: std::error::Error + Send + Sync + 'static,
{
    StorageSystemError::DeserializationError {
        format: format.extension().to_string(),
        source: Box::new(source),
    }
}

fn serialization_error<E>(format: ConfigFormat, source: E) -> StorageSystemError
where
    E: std::error::Error + Send + Sync + 'static,
{
    StorageSystemError::SerializationError {
        format: format.extension().to_string(),
        source: Box::new(source),
    }
}

/// Read and deserialize a document, choosing the format from the file extension.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, StorageSystemError> {
    let format = ConfigFormat::from_path(path)
        .ok_or_else(|| StorageSystemError::UnsupportedConfigFormat(path.display().to_string()))?;
    let data = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => StorageSystemError::FileNotFound(path.to_path_buf()),
        _ => StorageSystemError::io(e, "read_to_string", path.to_path_buf()),
    })?;
    debug!("Reading {} document from {}", format.extension(), path.display());
    format.deserialize(&data)
}

/// Project identity overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ProjectSettings {
    pub name: Option<String>,
    pub version: Option<String>,
    /// Relative paths are taken from the project directory
    pub build_dir: Option<PathBuf>,
}

/// Platform version overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct VersionSettings {
    pub groovy: Option<String>,
    pub core: Option<String>,
    pub test_harness: Option<String>,
    pub pipeline_unit: Option<String>,
}

/// Contents of a `jslib.toml` (or `.yaml` / `.json`) settings file.
///
/// ```toml
/// [project]
/// name = "pipeline-library"
/// build-dir = "out"
///
/// [versions]
/// core = "2.100.0"
///
/// [plugins]
/// git = "3.6.0"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LibrarySettings {
    pub project: ProjectSettings,
    pub versions: VersionSettings,
    /// Plugin name (`git`, `workflow-cps`, ...) to version
    pub plugins: BTreeMap<String, String>,
}

impl LibrarySettings {
    pub fn load(path: &Path) -> Result<Self, StorageSystemError> {
        read_document(path)
    }

    /// Settings that pin every version to the extension's current value.
    pub fn from_extension(extension: &SharedLibraryExtension) -> Self {
        Self {
            project: ProjectSettings::default(),
            versions: VersionSettings {
                groovy: Some(extension.groovy_version().to_string()),
                core: Some(extension.core_version().to_string()),
                test_harness: Some(extension.test_harness_version().to_string()),
                pipeline_unit: Some(extension.pipeline_unit_version().to_string()),
            },
            plugins: extension
                .plugin_dependencies()
                .iter()
                .map(|p| (p.name().to_string(), p.version().to_string()))
                .collect(),
        }
    }

    /// Write the settings, refusing to replace an existing file.
    pub fn save(&self, path: &Path) -> Result<(), StorageSystemError> {
        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| StorageSystemError::UnsupportedConfigFormat(path.display().to_string()))?;
        if path.exists() {
            return Err(StorageSystemError::ResourceExists(path.to_path_buf()));
        }
        let data = format.serialize(self)?;
        fs::write(path, data).map_err(|e| StorageSystemError::io(e, "write", path.to_path_buf()))
    }

    /// Copy every configured version onto the extension.
    pub fn apply_to(&self, extension: &mut SharedLibraryExtension) -> Result<(), ExtensionError> {
        if let Some(version) = &self.versions.groovy {
            extension.set_groovy_version(version.as_str())?;
        }
        if let Some(version) = &self.versions.core {
            extension.set_core_version(version.as_str())?;
        }
        if let Some(version) = &self.versions.test_harness {
            extension.set_test_harness_version(version.as_str())?;
        }
        if let Some(version) = &self.versions.pipeline_unit {
            extension.set_pipeline_unit_version(version.as_str())?;
        }
        for (plugin, version) in &self.plugins {
            if version.trim().is_empty() {
                warn!("Settings give plugin '{}' an empty version", plugin);
            }
            extension.set_plugin_version(plugin, version.as_str())?;
        }
        Ok(())
    }
}
