use crate::artifact::DependencyNotation;
use crate::bucket::{BucketContainer, BucketError};
use crate::resolution::DerivedArtifacts;

fn notation(s: &str) -> DependencyNotation {
    s.parse().unwrap()
}

#[test]
fn test_create_and_lookup() {
    let mut container = BucketContainer::new();
    container.create("jenkinsPlugins").unwrap().set_visible(false);
    assert!(container.contains("jenkinsPlugins"));
    assert!(!container.get("jenkinsPlugins").unwrap().is_visible());
    assert_eq!(
        container.create("jenkinsPlugins").unwrap_err(),
        BucketError::AlreadyExists { name: "jenkinsPlugins".to_string() }
    );
    assert!(container.get("unknown").is_err());
}

#[test]
fn test_maybe_create_returns_existing() {
    let mut container = BucketContainer::new();
    container.maybe_create("implementation").set_description("Implementation only dependencies");
    container.maybe_create("implementation");
    assert_eq!(container.names(), vec!["implementation"]);
    assert_eq!(
        container.get("implementation").unwrap().description(),
        Some("Implementation only dependencies")
    );
}

#[test]
fn test_effective_dependencies_merge_hierarchy() {
    let mut container = BucketContainer::new();
    for name in ["implementation", "testImplementation", "unitTestLibraries"] {
        container.create(name).unwrap();
    }
    container.extend("testImplementation", "implementation").unwrap();
    container.extend("testImplementation", "unitTestLibraries").unwrap();
    container.add_dependency("implementation", notation("org.codehaus.groovy:groovy-all:2.4.11")).unwrap();
    container.add_dependency("unitTestLibraries", notation("com.lesfurets:jenkins-pipeline-unit:1.1")).unwrap();
    container.add_dependency("testImplementation", notation("org.codehaus.groovy:groovy-all:2.4.11")).unwrap();

    let effective: Vec<String> = container
        .effective_dependencies("testImplementation")
        .unwrap()
        .iter()
        .map(|d| d.to_string())
        .collect();
    assert_eq!(
        effective,
        vec!["org.codehaus.groovy:groovy-all:2.4.11", "com.lesfurets:jenkins-pipeline-unit:1.1"]
    );
}

#[test]
fn test_bind_derivation_validation() {
    let mut container = BucketContainer::new();
    for name in ["plugins", "packages", "libraries", "closed"] {
        container.create(name).unwrap();
    }
    container.get_mut("closed").unwrap().set_can_be_resolved(false);

    container.bind_derivation("packages", "plugins", DerivedArtifacts::PluginPackages).unwrap();
    container.bind_derivation("libraries", "plugins", DerivedArtifacts::PluginLibraries).unwrap();
    // Binding twice is harmless
    container.bind_derivation("packages", "plugins", DerivedArtifacts::PluginPackages).unwrap();
    assert_eq!(container.bindings().len(), 2);
    assert_eq!(container.bindings_for("packages").count(), 1);

    assert!(matches!(
        container.bind_derivation("packages", "closed", DerivedArtifacts::PluginPackages),
        Err(BucketError::InvalidDerivation { .. })
    ));
    assert!(matches!(
        container.bind_derivation("packages", "missing", DerivedArtifacts::PluginPackages),
        Err(BucketError::NotFound { .. })
    ));

    container.extend("plugins", "libraries").unwrap();
    assert!(matches!(
        container.bind_derivation("libraries", "plugins", DerivedArtifacts::PluginLibraries),
        Err(BucketError::InvalidDerivation { .. })
    ));
}
