// crates/jslib-core/src/extension/tests/dependency_tests.rs
#![cfg(test)]

use crate::extension::spec::{self, PluginDependencySpec};
use crate::extension::{ExtensionError, PluginDependencyDescriptor};

#[test]
fn test_descriptor_notations() {
    let git = PluginDependencyDescriptor::new("git", "org.jenkins-ci.plugins", "git", "3.5.1");
    assert_eq!(git.as_string_notation(), "org.jenkins-ci.plugins:git:3.5.1");
    assert_eq!(git.hpi_notation(), "org.jenkins-ci.plugins:git:3.5.1@hpi");
    assert_eq!(git.library_notation(), "org.jenkins-ci.plugins:git:3.5.1@jar");
    assert_eq!(git.package_notation("jpi"), "org.jenkins-ci.plugins:git:3.5.1@jpi");
    assert_eq!(git.to_notation().to_string(), "org.jenkins-ci.plugins:git:3.5.1");
    assert_eq!(format!("{}", git), "org.jenkins-ci.plugins:git:3.5.1");
}

#[test]
fn test_descriptor_version_property_name() {
    let plugin = PluginDependencyDescriptor::new(
        "workflow-durable-task-step",
        "org.jenkins-ci.plugins.workflow",
        "workflow-durable-task-step",
        "2.15",
    );
    assert_eq!(plugin.version_property().name(), "workflowDurableTaskStepPluginVersion");
}

#[test]
fn test_spec_contains_exactly_the_pipeline_plugins_in_order() {
    let plugins = PluginDependencySpec::new();
    assert_eq!(
        plugins.names(),
        vec![
            "git",
            "workflow-api",
            "workflow-basic-steps",
            "workflow-cps",
            "workflow-durable-task-step",
            "workflow-global-cps-library",
            "workflow-job",
            "workflow-multibranch",
            "workflow-scm-step",
            "workflow-step-api",
            "workflow-support",
        ]
    );
}

#[test]
fn test_spec_default_coordinates() {
    let plugins = PluginDependencySpec::new();
    let notations: Vec<String> = plugins.iter().map(|p| p.as_string_notation()).collect();
    assert_eq!(
        notations,
        vec![
            "org.jenkins-ci.plugins:git:3.5.1",
            "org.jenkins-ci.plugins.workflow:workflow-api:2.22",
            "org.jenkins-ci.plugins.workflow:workflow-basic-steps:2.6",
            "org.jenkins-ci.plugins.workflow:workflow-cps:2.40",
            "org.jenkins-ci.plugins.workflow:workflow-durable-task-step:2.15",
            "org.jenkins-ci.plugins.workflow:workflow-cps-global-lib:2.9",
            "org.jenkins-ci.plugins.workflow:workflow-job:2.14.1",
            "org.jenkins-ci.plugins.workflow:workflow-multibranch:2.16",
            "org.jenkins-ci.plugins.workflow:workflow-scm-step:2.6",
            "org.jenkins-ci.plugins.workflow:workflow-step-api:2.13",
            "org.jenkins-ci.plugins.workflow:workflow-support:2.15",
        ]
    );
}

#[test]
fn test_string_notation_never_carries_an_extension() {
    let mut plugins = PluginDependencySpec::new();
    plugins.set_version(spec::WORKFLOW_CPS, "2.41").unwrap();
    for plugin in plugins.iter() {
        let expected = format!("{}:{}:{}", plugin.group(), plugin.artifact_id(), plugin.version());
        assert_eq!(plugin.as_string_notation(), expected);
        assert!(!plugin.as_string_notation().contains('@'));
    }
}

#[test]
fn test_spec_versions_are_independent() {
    let mut plugins = PluginDependencySpec::new();
    plugins.set_version(spec::WORKFLOW_API, "2.30").unwrap();
    assert_eq!(plugins.get(spec::WORKFLOW_API).unwrap().version(), "2.30");
    assert_eq!(plugins.get(spec::WORKFLOW_STEP_API).unwrap().version(), "2.13");
    assert_eq!(plugins.get(spec::GIT).unwrap().version(), "3.5.1");
}

#[test]
fn test_spec_unknown_plugin() {
    let mut plugins = PluginDependencySpec::new();
    let err = plugins.set_version("blueocean", "1.0").unwrap_err();
    assert_eq!(err, ExtensionError::UnknownPlugin { name: "blueocean".to_string() });
    assert_eq!(format!("{}", err), "Unknown plugin 'blueocean'");
}

#[test]
fn test_spec_validate_rejects_empty_versions() {
    let mut plugins = PluginDependencySpec::new();
    assert!(plugins.validate().is_ok());

    plugins.set_version(spec::WORKFLOW_JOB, "  ").unwrap();
    assert_eq!(
        plugins.validate().unwrap_err(),
        ExtensionError::EmptyVersion {
            property: "workflowJobPluginVersion".to_string()
        }
    );
}
