use log::info;
use serde::Serialize;

use crate::artifact::notation::{DependencyNotation, ModuleVersionId};
use crate::extension::error::ExtensionError;
use crate::extension::spec::PluginDependencySpec;
use crate::extension::version::VersionProperty;
use crate::kernel::constants::{
    CORE_MODULE, DEFAULT_CORE_VERSION, DEFAULT_GROOVY_VERSION, DEFAULT_PIPELINE_UNIT_VERSION,
    DEFAULT_TEST_HARNESS_VERSION, GROOVY_MODULE, PIPELINE_UNIT_MODULE, TEST_HARNESS_MODULE,
    WAR_MODULE,
};

/// `group:name` plus a version, without reparsing the version.
fn module_notation(module: &str, version: &str) -> DependencyNotation {
    let (group, name) = module.split_once(':').unwrap_or(("", module));
    DependencyNotation::new(ModuleVersionId::new(group, name, version))
}

/// The `sharedLibrary` extension.
///
/// Holds the Groovy, Jenkins core, test harness and pipeline-unit versions plus
/// the nested plugin versions. Every setter fails once the extension has been
/// finalized, which [`Project::evaluate`](crate::kernel::Project::evaluate) does
/// before any dependency is wired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharedLibraryExtension {
    groovy_version: VersionProperty,
    core_version: VersionProperty,
    pipeline_unit_version: VersionProperty,
    test_harness_version: VersionProperty,
    plugin_dependencies: PluginDependencySpec,
    #[serde(skip)]
    finalized: bool,
}

impl SharedLibraryExtension {
    pub fn new() -> Self {
        Self {
            groovy_version: VersionProperty::new("groovyVersion", DEFAULT_GROOVY_VERSION),
            core_version: VersionProperty::new("coreVersion", DEFAULT_CORE_VERSION),
            pipeline_unit_version: VersionProperty::new("pipelineUnitVersion", DEFAULT_PIPELINE_UNIT_VERSION),
            test_harness_version: VersionProperty::new("testHarnessVersion", DEFAULT_TEST_HARNESS_VERSION),
            plugin_dependencies: PluginDependencySpec::new(),
            finalized: false,
        }
    }

    pub fn groovy_version(&self) -> &str {
        self.groovy_version.get()
    }

    pub fn set_groovy_version(&mut self, version: impl Into<String>) -> Result<(), ExtensionError> {
        self.groovy_version.set(version)
    }

    pub fn core_version(&self) -> &str {
        self.core_version.get()
    }

    pub fn set_core_version(&mut self, version: impl Into<String>) -> Result<(), ExtensionError> {
        self.core_version.set(version)
    }

    pub fn pipeline_unit_version(&self) -> &str {
        self.pipeline_unit_version.get()
    }

    pub fn set_pipeline_unit_version(&mut self, version: impl Into<String>) -> Result<(), ExtensionError> {
        self.pipeline_unit_version.set(version)
    }

    pub fn test_harness_version(&self) -> &str {
        self.test_harness_version.get()
    }

    pub fn set_test_harness_version(&mut self, version: impl Into<String>) -> Result<(), ExtensionError> {
        self.test_harness_version.set(version)
    }

    pub fn set_plugin_version(&mut self, name: &str, version: impl Into<String>) -> Result<(), ExtensionError> {
        self.plugin_dependencies.set_version(name, version)
    }

    pub fn groovy_dependency(&self) -> String {
        format!("{}:{}", GROOVY_MODULE, self.groovy_version())
    }

    pub fn core_dependency(&self) -> String {
        format!("{}:{}", CORE_MODULE, self.core_version())
    }

    pub fn test_harness_dependency(&self) -> String {
        format!("{}:{}", TEST_HARNESS_MODULE, self.test_harness_version())
    }

    /// The Jenkins war matching the configured core version.
    pub fn jenkins_war(&self) -> String {
        format!("{}:{}", WAR_MODULE, self.core_version())
    }

    pub fn pipeline_unit_dependency(&self) -> String {
        format!("{}:{}", PIPELINE_UNIT_MODULE, self.pipeline_unit_version())
    }

    // Notations are built from the parts so a version is carried verbatim;
    // an unusable one only fails once the notation is resolved.

    pub fn groovy_notation(&self) -> DependencyNotation {
        module_notation(GROOVY_MODULE, self.groovy_version())
    }

    pub fn core_notation(&self) -> DependencyNotation {
        module_notation(CORE_MODULE, self.core_version())
    }

    pub fn test_harness_notation(&self) -> DependencyNotation {
        module_notation(TEST_HARNESS_MODULE, self.test_harness_version())
    }

    pub fn jenkins_war_notation(&self) -> DependencyNotation {
        module_notation(WAR_MODULE, self.core_version())
    }

    pub fn pipeline_unit_notation(&self) -> DependencyNotation {
        module_notation(PIPELINE_UNIT_MODULE, self.pipeline_unit_version())
    }

    pub fn plugin_dependencies(&self) -> &PluginDependencySpec {
        &self.plugin_dependencies
    }

    pub fn plugin_dependencies_mut(&mut self) -> &mut PluginDependencySpec {
        &mut self.plugin_dependencies
    }

    /// The top-level version properties, in a stable order.
    pub fn version_properties(&self) -> [&VersionProperty; 4] {
        [
            &self.groovy_version,
            &self.core_version,
            &self.pipeline_unit_version,
            &self.test_harness_version,
        ]
    }

    /// Freeze every property. Calling this more than once has no further effect.
    pub fn finalize(&mut self) {
        if self.finalized {
            return;
        }
        self.groovy_version.finalize();
        self.core_version.finalize();
        self.pipeline_unit_version.finalize();
        self.test_harness_version.finalize();
        self.plugin_dependencies.finalize();
        self.finalized = true;
        info!("Shared library extension finalized (core {})", self.core_version());
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }
}

impl Default for SharedLibraryExtension {
    fn default() -> Self {
        Self::new()
    }
}
