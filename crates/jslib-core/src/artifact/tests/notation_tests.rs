// crates/jslib-core/src/artifact/tests/notation_tests.rs
#![cfg(test)]

use std::str::FromStr;

use crate::artifact::{DependencyNotation, ModuleVersionId, NotationError, ResolvedArtifact};

#[test]
fn test_parse_module_notation() {
    let notation = DependencyNotation::from_str("org.jenkins-ci.plugins:git:3.5.1").unwrap();
    assert_eq!(notation.id, ModuleVersionId::new("org.jenkins-ci.plugins", "git", "3.5.1"));
    assert!(notation.classifier.is_none());
    assert!(notation.extension.is_none());
    assert!(!notation.is_artifact_only());
}

#[test]
fn test_parse_artifact_only_notation() {
    let notation: DependencyNotation = "org.jenkins-ci.plugins:git:3.5.1@hpi".parse().unwrap();
    assert_eq!(notation.extension.as_deref(), Some("hpi"));
    assert!(notation.is_artifact_only());
    assert_eq!(notation.to_string(), "org.jenkins-ci.plugins:git:3.5.1@hpi");
}

#[test]
fn test_parse_classifier_notation() {
    let notation: DependencyNotation = "org.example:lib:1.0:sources@jar".parse().unwrap();
    assert_eq!(notation.classifier.as_deref(), Some("sources"));
    assert_eq!(notation.extension.as_deref(), Some("jar"));
    assert_eq!(notation.to_string(), "org.example:lib:1.0:sources@jar");
}

#[test]
fn test_parse_keeps_empty_version() {
    // An empty version is handed on to resolution, which reports it
    let notation: DependencyNotation = "org.jenkins-ci.plugins:git:".parse().unwrap();
    assert_eq!(notation.id.version, "");
}

#[test]
fn test_parse_rejects_malformed_notations() {
    for bad in ["git", "org.example:lib", ":lib:1.0", "org.example::1.0", "a:b:c@", "a:b:c@x@y", "a:b:c:d:e", "a:b:c:"] {
        let err = DependencyNotation::from_str(bad).unwrap_err();
        assert!(matches!(err, NotationError::Malformed { .. }), "expected failure for '{}'", bad);
    }
}

#[test]
fn test_module_version_id_rejects_extension() {
    assert!(ModuleVersionId::from_str("org.example:lib:1.0").is_ok());
    assert!(ModuleVersionId::from_str("org.example:lib:1.0@jar").is_err());
}

#[test]
fn test_resolved_artifact_file_name_and_notation() {
    let id = ModuleVersionId::new("org.jenkins-ci.plugins.workflow", "workflow-cps", "2.40");
    let hpi = ResolvedArtifact::new(id.clone(), "hpi", None);
    assert_eq!(hpi.file_name(), "workflow-cps-2.40.hpi");
    assert_eq!(hpi.to_string(), "org.jenkins-ci.plugins.workflow:workflow-cps:2.40@hpi");

    let sources = ResolvedArtifact::new(id, "jar", Some("sources"));
    assert_eq!(sources.file_name(), "workflow-cps-2.40-sources.jar");
    assert_eq!(sources.notation().to_string(), "org.jenkins-ci.plugins.workflow:workflow-cps:2.40:sources@jar");
}
