use crate::artifact::{DependencyNotation, FixtureRepository, ModuleDescriptor};
use crate::bucket::{BucketContainer, BucketError};
use crate::resolution::{DerivedArtifacts, ResolutionError, Resolver};

const PLUGINS: &str = "jenkinsPlugins";
const PACKAGES: &str = "jenkinsPluginHpisAndJpis";
const LIBRARIES: &str = "jenkinsPluginLibraries";

fn notation(s: &str) -> DependencyNotation {
    s.parse().unwrap()
}

fn plugin(group: &str, name: &str, version: &str, packaging: &str) -> ModuleDescriptor {
    ModuleDescriptor::new(group, name, version, packaging)
        .with_artifact(packaging)
        .with_artifact("jar")
}

/// git 3.5.1 and workflow-cps 2.40, where workflow-cps pulls in a jpi plugin
/// and a plain jar.
fn fixture() -> FixtureRepository {
    FixtureRepository::new("fixture")
        .with_module(plugin("org.jenkins-ci.plugins", "git", "3.5.1", "hpi"))
        .with_module(
            plugin("org.jenkins-ci.plugins.workflow", "workflow-cps", "2.40", "hpi")
                .with_dependency("org.jenkins-ci.plugins:scm-api:2.2.0")
                .with_dependency("com.cloudbees:groovy-cps:1.19"),
        )
        .with_module(plugin("org.jenkins-ci.plugins", "scm-api", "2.2.0", "jpi"))
        .with_module(ModuleDescriptor::new("com.cloudbees", "groovy-cps", "1.19", "jar"))
}

/// The three plugin buckets with both derivations bound.
fn plugin_buckets(declared: &[&str]) -> BucketContainer {
    let mut buckets = BucketContainer::new();
    for name in [PLUGINS, PACKAGES, LIBRARIES] {
        buckets.create(name).unwrap().set_visible(false);
    }
    buckets.bind_derivation(PACKAGES, PLUGINS, DerivedArtifacts::PluginPackages).unwrap();
    buckets.bind_derivation(LIBRARIES, PLUGINS, DerivedArtifacts::PluginLibraries).unwrap();
    for d in declared {
        buckets.add_dependency(PLUGINS, notation(d)).unwrap();
    }
    buckets
}

#[test]
fn test_git_scenario_populates_both_derived_buckets() {
    let repo = fixture();
    let mut buckets = plugin_buckets(&["org.jenkins-ci.plugins:git:3.5.1"]);
    let mut resolver = Resolver::new(&repo);

    let packages = resolver.resolve(&mut buckets, PACKAGES).unwrap();
    assert_eq!(packages.notations(), vec!["org.jenkins-ci.plugins:git:3.5.1@hpi"]);

    let libraries = resolver.resolve(&mut buckets, LIBRARIES).unwrap();
    assert_eq!(libraries.notations(), vec!["org.jenkins-ci.plugins:git:3.5.1@jar"]);
}

#[test]
fn test_plugin_declarations_resolve_transitively() {
    let repo = fixture();
    let mut buckets = plugin_buckets(&["org.jenkins-ci.plugins.workflow:workflow-cps:2.40"]);
    let mut resolver = Resolver::new(&repo);

    let plugins = resolver.resolve(&mut buckets, PLUGINS).unwrap();
    assert_eq!(
        plugins.notations(),
        vec![
            "org.jenkins-ci.plugins.workflow:workflow-cps:2.40@hpi",
            "org.jenkins-ci.plugins:scm-api:2.2.0@jpi",
            "com.cloudbees:groovy-cps:1.19@jar",
        ]
    );
    assert_eq!(plugins.file_names()[0], "workflow-cps-2.40.hpi");
}

#[test]
fn test_non_plugin_artifacts_are_excluded_from_derived_buckets() {
    let repo = fixture();
    let mut buckets = plugin_buckets(&["org.jenkins-ci.plugins.workflow:workflow-cps:2.40"]);
    let mut resolver = Resolver::new(&repo);

    let packages = resolver.resolve(&mut buckets, PACKAGES).unwrap();
    assert_eq!(
        packages.notations(),
        vec![
            "org.jenkins-ci.plugins.workflow:workflow-cps:2.40@hpi",
            "org.jenkins-ci.plugins:scm-api:2.2.0@jpi",
        ]
    );
    for artifact in packages.artifacts() {
        assert!(artifact.extension == "hpi" || artifact.extension == "jpi");
    }

    let libraries = resolver.resolve(&mut buckets, LIBRARIES).unwrap();
    assert_eq!(
        libraries.notations(),
        vec![
            "org.jenkins-ci.plugins.workflow:workflow-cps:2.40@jar",
            "org.jenkins-ci.plugins:scm-api:2.2.0@jar",
        ]
    );
    assert!(!libraries.contains("com.cloudbees:groovy-cps:1.19@jar"));
}

#[test]
fn test_every_package_has_a_library_counterpart() {
    let repo = fixture();
    let mut buckets = plugin_buckets(&[
        "org.jenkins-ci.plugins:git:3.5.1",
        "org.jenkins-ci.plugins.workflow:workflow-cps:2.40",
    ]);
    let mut resolver = Resolver::new(&repo);

    let libraries = resolver.resolve(&mut buckets, LIBRARIES).unwrap();
    let packages = resolver.resolve(&mut buckets, PACKAGES).unwrap();
    let declared = resolver.resolve(&mut buckets, PLUGINS).unwrap();
    for package in packages.artifacts() {
        assert!(declared.module_versions().contains(&&package.id));
        assert!(
            libraries
                .artifacts()
                .iter()
                .any(|lib| lib.id == package.id && lib.extension == "jar")
        );
    }
    assert_eq!(packages.len(), libraries.len());
}

#[test]
fn test_plugin_declarations_are_resolved_once() {
    let repo = fixture();
    let mut buckets = plugin_buckets(&["org.jenkins-ci.plugins:git:3.5.1"]);
    let mut resolver = Resolver::new(&repo);

    let first = resolver.resolve(&mut buckets, PLUGINS).unwrap();
    resolver.resolve(&mut buckets, PACKAGES).unwrap();
    resolver.resolve(&mut buckets, LIBRARIES).unwrap();
    let second = resolver.resolve(&mut buckets, PLUGINS).unwrap();

    assert_eq!(first, second);
    assert_eq!(resolver.resolution_count(PLUGINS), 1);
    // Derivations ran once each; no duplicated declarations
    assert_eq!(buckets.get(PACKAGES).unwrap().dependencies().len(), 1);
    assert_eq!(buckets.get(LIBRARIES).unwrap().dependencies().len(), 1);
}

#[test]
fn test_derivations_run_when_a_child_bucket_is_resolved() {
    let repo = fixture();
    let mut buckets = plugin_buckets(&["org.jenkins-ci.plugins:git:3.5.1"]);
    buckets.create("integrationTestRuntimeOnly").unwrap();
    buckets.extend("integrationTestRuntimeOnly", PACKAGES).unwrap();
    let mut resolver = Resolver::new(&repo);

    let runtime = resolver.resolve(&mut buckets, "integrationTestRuntimeOnly").unwrap();
    assert_eq!(runtime.notations(), vec!["org.jenkins-ci.plugins:git:3.5.1@hpi"]);
    assert!(resolver.is_resolved(PLUGINS));
    assert!(!resolver.is_resolved(LIBRARIES));
}

#[test]
fn test_resolved_buckets_are_frozen() {
    let repo = fixture();
    let mut buckets = plugin_buckets(&["org.jenkins-ci.plugins:git:3.5.1"]);
    let mut resolver = Resolver::new(&repo);
    resolver.resolve(&mut buckets, PACKAGES).unwrap();

    assert!(buckets.get(PLUGINS).unwrap().is_resolved());
    assert!(matches!(
        buckets.add_dependency(PLUGINS, notation("org.jenkins-ci.plugins:scm-api:2.2.0")),
        Err(BucketError::AlreadyResolved { .. })
    ));
}

#[test]
fn test_unknown_plugin_version_fails_the_downstream_bucket() {
    let repo = fixture();
    let mut buckets = plugin_buckets(&["org.jenkins-ci.plugins:git:9.9.9"]);
    let mut resolver = Resolver::new(&repo);

    let err = resolver.resolve(&mut buckets, PACKAGES).unwrap_err();
    assert_eq!(
        err,
        ResolutionError::ModuleNotFound {
            bucket: PLUGINS.to_string(),
            notation: "org.jenkins-ci.plugins:git:9.9.9".to_string(),
            repository: "fixture".to_string(),
        }
    );
    // No partial result is cached
    assert!(!resolver.is_resolved(PACKAGES));
    assert!(buckets.get(PACKAGES).unwrap().dependencies().is_empty());
}

#[test]
fn test_empty_version_fails_resolution() {
    let repo = fixture();
    let mut buckets = plugin_buckets(&["org.jenkins-ci.plugins:git:"]);
    let mut resolver = Resolver::new(&repo);
    assert!(matches!(
        resolver.resolve(&mut buckets, LIBRARIES),
        Err(ResolutionError::ModuleNotFound { .. })
    ));
}

#[test]
fn test_missing_library_jar_is_an_error() {
    let repo = FixtureRepository::new("fixture").with_module(
        ModuleDescriptor::new("org.jenkins-ci.plugins", "git", "3.5.1", "hpi").with_artifact("hpi"),
    );
    let mut buckets = plugin_buckets(&["org.jenkins-ci.plugins:git:3.5.1"]);
    let mut resolver = Resolver::new(&repo);

    assert_eq!(
        resolver.resolve(&mut buckets, LIBRARIES).unwrap_err(),
        ResolutionError::ArtifactNotFound {
            bucket: LIBRARIES.to_string(),
            notation: "org.jenkins-ci.plugins:git:3.5.1@jar".to_string(),
        }
    );
}

#[test]
fn test_first_declared_version_wins() {
    let repo = fixture().with_module(plugin("org.jenkins-ci.plugins", "git", "3.6.0", "hpi"));
    let mut buckets = plugin_buckets(&["org.jenkins-ci.plugins:git:3.6.0", "org.jenkins-ci.plugins:git:3.5.1"]);
    let mut resolver = Resolver::new(&repo);

    let plugins = resolver.resolve(&mut buckets, PLUGINS).unwrap();
    assert_eq!(plugins.notations(), vec!["org.jenkins-ci.plugins:git:3.6.0@hpi"]);
}

#[test]
fn test_unresolvable_bucket() {
    let repo = fixture();
    let mut buckets = BucketContainer::new();
    buckets.create("apiElements").unwrap().set_can_be_resolved(false);
    let mut resolver = Resolver::new(&repo);

    assert_eq!(
        resolver.resolve(&mut buckets, "apiElements").unwrap_err(),
        ResolutionError::BucketNotResolvable { bucket: "apiElements".to_string() }
    );
    assert!(matches!(
        resolver.resolve(&mut buckets, "missing"),
        Err(ResolutionError::Bucket(BucketError::NotFound { .. }))
    ));
}

#[test]
fn test_derivation_loop_is_reported() {
    let repo = fixture();
    let mut buckets = plugin_buckets(&["org.jenkins-ci.plugins:git:3.5.1"]);
    // Bound first, then the source is made to extend the target
    buckets.extend(PLUGINS, LIBRARIES).unwrap();
    let mut resolver = Resolver::new(&repo);

    let err = resolver.resolve(&mut buckets, LIBRARIES).unwrap_err();
    assert_eq!(
        err,
        ResolutionError::Reentrant {
            bucket: LIBRARIES.to_string(),
            chain: vec![LIBRARIES.to_string(), PLUGINS.to_string(), LIBRARIES.to_string()],
        }
    );
}

#[test]
fn test_fresh_resolver_reuses_materialized_declarations() {
    let repo = fixture();
    let mut buckets = plugin_buckets(&["org.jenkins-ci.plugins.workflow:workflow-cps:2.40"]);

    let first = Resolver::new(&repo).resolve(&mut buckets, PACKAGES).unwrap();
    let mut second_resolver = Resolver::new(&repo);
    let second = second_resolver.resolve(&mut buckets, PACKAGES).unwrap();

    assert_eq!(first.notations(), second.notations());
    assert_eq!(buckets.get(PACKAGES).unwrap().dependencies().len(), 2);
    // The source is not resolved again for an already materialized bucket
    assert!(!second_resolver.is_resolved(PLUGINS));

    // A bucket never materialized before still derives through the new resolver
    let libraries = second_resolver.resolve(&mut buckets, LIBRARIES).unwrap();
    assert_eq!(
        libraries.notations(),
        vec![
            "org.jenkins-ci.plugins.workflow:workflow-cps:2.40@jar",
            "org.jenkins-ci.plugins:scm-api:2.2.0@jar",
        ]
    );
}
