use log::warn;
use serde::Serialize;

use crate::extension::dependency::PluginDependencyDescriptor;
use crate::extension::error::ExtensionError;
use crate::kernel::constants::{PLUGINS_GROUP, WORKFLOW_PLUGINS_GROUP};

pub const GIT: &str = "git";
pub const WORKFLOW_API: &str = "workflow-api";
pub const WORKFLOW_BASIC_STEPS: &str = "workflow-basic-steps";
pub const WORKFLOW_CPS: &str = "workflow-cps";
pub const WORKFLOW_DURABLE_TASK_STEP: &str = "workflow-durable-task-step";
pub const WORKFLOW_GLOBAL_CPS_LIBRARY: &str = "workflow-global-cps-library";
pub const WORKFLOW_JOB: &str = "workflow-job";
pub const WORKFLOW_MULTIBRANCH: &str = "workflow-multibranch";
pub const WORKFLOW_SCM_STEP: &str = "workflow-scm-step";
pub const WORKFLOW_STEP_API: &str = "workflow-step-api";
pub const WORKFLOW_SUPPORT: &str = "workflow-support";

/// name, group, artifact id, baseline version
const PLUGIN_TABLE: [(&str, &str, &str, &str); 11] = [
    (GIT, PLUGINS_GROUP, "git", "3.5.1"),
    (WORKFLOW_API, WORKFLOW_PLUGINS_GROUP, "workflow-api", "2.22"),
    (WORKFLOW_BASIC_STEPS, WORKFLOW_PLUGINS_GROUP, "workflow-basic-steps", "2.6"),
    (WORKFLOW_CPS, WORKFLOW_PLUGINS_GROUP, "workflow-cps", "2.40"),
    (WORKFLOW_DURABLE_TASK_STEP, WORKFLOW_PLUGINS_GROUP, "workflow-durable-task-step", "2.15"),
    (WORKFLOW_GLOBAL_CPS_LIBRARY, WORKFLOW_PLUGINS_GROUP, "workflow-cps-global-lib", "2.9"),
    (WORKFLOW_JOB, WORKFLOW_PLUGINS_GROUP, "workflow-job", "2.14.1"),
    (WORKFLOW_MULTIBRANCH, WORKFLOW_PLUGINS_GROUP, "workflow-multibranch", "2.16"),
    (WORKFLOW_SCM_STEP, WORKFLOW_PLUGINS_GROUP, "workflow-scm-step", "2.6"),
    (WORKFLOW_STEP_API, WORKFLOW_PLUGINS_GROUP, "workflow-step-api", "2.13"),
    (WORKFLOW_SUPPORT, WORKFLOW_PLUGINS_GROUP, "workflow-support", "2.15"),
];

/// The ordered set of pipeline plugins a shared library is built against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginDependencySpec {
    plugins: Vec<PluginDependencyDescriptor>,
}

impl PluginDependencySpec {
    pub fn new() -> Self {
        let plugins = PLUGIN_TABLE
            .iter()
            .map(|(name, group, artifact, version)| {
                PluginDependencyDescriptor::new(name, group, artifact, version)
            })
            .collect();
        Self { plugins }
    }

    /// All plugin descriptors, in declaration order.
    pub fn plugin_dependencies(&self) -> &[PluginDependencyDescriptor] {
        &self.plugins
    }

    pub fn iter(&self) -> impl Iterator<Item = &PluginDependencyDescriptor> {
        self.plugins.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.plugins.iter().map(|p| p.name()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&PluginDependencyDescriptor> {
        self.plugins.iter().find(|p| p.name() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut PluginDependencyDescriptor> {
        self.plugins.iter_mut().find(|p| p.name() == name)
    }

    pub fn set_version(&mut self, name: &str, version: impl Into<String>) -> Result<(), ExtensionError> {
        self.get_mut(name)
            .ok_or_else(|| ExtensionError::UnknownPlugin {
                name: name.to_string(),
            })?
            .set_version(version)
    }

    /// Every plugin must carry a non-empty version by the time it is resolved.
    pub fn validate(&self) -> Result<(), ExtensionError> {
        for plugin in &self.plugins {
            if plugin.version().trim().is_empty() {
                warn!("Plugin '{}' has no version", plugin.name());
                return Err(ExtensionError::EmptyVersion {
                    property: plugin.version_property().name().to_string(),
                });
            }
        }
        Ok(())
    }

    pub(crate) fn finalize(&mut self) {
        for plugin in &mut self.plugins {
            plugin.finalize();
        }
    }
}

impl Default for PluginDependencySpec {
    fn default() -> Self {
        Self::new()
    }
}
