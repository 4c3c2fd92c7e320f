use log::{debug, info};

use crate::artifact::notation::DependencyNotation;
use crate::artifact::repository::RepositoryDeclaration;
use crate::kernel::bootstrap::{JavaConventions, Project};
use crate::kernel::constants::{
    BUILD_DIRECTORY_PROPERTY, BUILD_GROUP, CHECK_TASK, CLASSES_TASK, CORE_LIBRARIES_BUCKET, DOCUMENTATION_GROUP,
    GROOVYDOC_JAR_TASK, GROOVYDOC_TASK, INTEGRATION_TEST_SOURCE_SET, INTEGRATION_TEST_TASK, JAVADOC_CLASSIFIER,
    JAVA_CONVENTIONS_ID, JENKINS_REPOSITORY_NAME, JENKINS_REPOSITORY_URL, MAIN_SOURCE_SET,
    PIPELINE_UNIT_TEST_LIBRARIES_BUCKET, PLUGINS_BUCKET, PLUGIN_HPIS_AND_JPIS_BUCKET, PLUGIN_ID,
    PLUGIN_LIBRARIES_BUCKET, SOURCES_CLASSIFIER, SOURCES_JAR_TASK, TEST_LIBRARIES_BUCKET,
    TEST_LIBRARIES_RUNTIME_ONLY_BUCKET, TEST_SOURCE_SET, TEST_TASK, VERIFICATION_GROUP,
};
use crate::kernel::error::Result;
use crate::layout::conventions::SourceLayout;
use crate::resolution::derive::DerivedArtifacts;
use crate::task::task::{ArchiveInput, ArchiveSpec, Task, TaskAction, TestSpec};

/// Something that can be applied to a [`Project`] to configure it.
pub trait ProjectPlugin {
    /// Unique identifier; a project applies each id at most once
    fn id(&self) -> &'static str;

    fn apply(&self, project: &mut Project) -> Result<()>;
}

/// The host's Java/Groovy conventions: `main` and `test` source sets, their
/// buckets and the compile, test and doc lifecycle tasks.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroovyConventionsPlugin;

impl ProjectPlugin for GroovyConventionsPlugin {
    fn id(&self) -> &'static str {
        JAVA_CONVENTIONS_ID
    }

    fn apply(&self, project: &mut Project) -> Result<()> {
        project.create_source_set(MAIN_SOURCE_SET)?;
        project.create_source_set(TEST_SOURCE_SET)?;
        project.set_java(JavaConventions::default());

        let test_classes = project.source_sets().get(TEST_SOURCE_SET)?.classes_task_name();
        let tasks = project.tasks_mut();
        tasks.register(
            Task::lifecycle(TEST_TASK)
                .with_group(VERIFICATION_GROUP)
                .with_description("Runs the unit tests.")
                .depends_on(&test_classes),
        )?;
        tasks.register(
            Task::lifecycle(GROOVYDOC_TASK)
                .with_group(DOCUMENTATION_GROUP)
                .with_description("Generates Groovydoc API documentation for the main source code.")
                .depends_on(CLASSES_TASK),
        )?;
        tasks.register(
            Task::lifecycle(CHECK_TASK)
                .with_group(VERIFICATION_GROUP)
                .with_description("Runs all checks.")
                .depends_on(TEST_TASK),
        )?;
        Ok(())
    }
}

/// Build conventions for a Jenkins pipeline shared library.
///
/// Applying it:
/// - applies [`GroovyConventionsPlugin`] and declares the `JenkinsPublic` repository,
/// - adds the `integrationTest` source set and lays out `src`, `vars`,
///   `resources` and `test/{unit,integration}`,
/// - declares the seven Jenkins buckets and wires them into the source sets,
/// - binds the plugin package and library derivations to `jenkinsPlugins`,
/// - registers `sourcesJar`, `groovydocJar` and `integrationTest`,
/// - once the project is evaluated, points the tasks at the final build
///   directory and declares the configured dependencies.
#[derive(Debug, Clone, Copy, Default)]
pub struct SharedLibraryPlugin;

impl ProjectPlugin for SharedLibraryPlugin {
    fn id(&self) -> &'static str {
        PLUGIN_ID
    }

    fn apply(&self, project: &mut Project) -> Result<()> {
        project.apply_plugin(&GroovyConventionsPlugin)?;
        project.add_repository(RepositoryDeclaration::new(JENKINS_REPOSITORY_NAME, JENKINS_REPOSITORY_URL));

        if !project.source_sets().contains(INTEGRATION_TEST_SOURCE_SET) {
            project.create_source_set(INTEGRATION_TEST_SOURCE_SET)?;
        }
        SourceLayout::conventional().apply(project.source_sets_mut())?;

        Self::declare_buckets(project)?;
        Self::wire_buckets(project)?;
        Self::bind_derivations(project)?;
        Self::register_tasks(project)?;

        project.after_evaluate(Self::configure_build_paths);
        project.after_evaluate(Self::declare_dependencies);
        Ok(())
    }
}

impl SharedLibraryPlugin {
    fn declare_buckets(project: &mut Project) -> Result<()> {
        let buckets = [
            (PLUGINS_BUCKET, "Jenkins plugins the library depends on"),
            (PLUGIN_HPIS_AND_JPIS_BUCKET, "Jenkins plugin HPI and JPI packages"),
            (PLUGIN_LIBRARIES_BUCKET, "Library jars of the Jenkins plugins"),
            (CORE_LIBRARIES_BUCKET, "Jenkins core"),
            (TEST_LIBRARIES_BUCKET, "Jenkins test harness"),
            (TEST_LIBRARIES_RUNTIME_ONLY_BUCKET, "Jenkins war for the test harness"),
            (PIPELINE_UNIT_TEST_LIBRARIES_BUCKET, "JenkinsPipelineUnit for unit tests"),
        ];
        for (name, description) in buckets {
            project
                .buckets_mut()
                .create(name)?
                .set_description(description)
                .set_can_be_resolved(true)
                .set_visible(false);
        }
        Ok(())
    }

    fn wire_buckets(project: &mut Project) -> Result<()> {
        let sets = project.source_sets();
        let main = sets.get(MAIN_SOURCE_SET)?.implementation_bucket_name();
        let test = sets.get(TEST_SOURCE_SET)?.implementation_bucket_name();
        let integration_test = sets.get(INTEGRATION_TEST_SOURCE_SET)?;
        let it_implementation = integration_test.implementation_bucket_name();
        let it_runtime_only = integration_test.runtime_only_bucket_name();

        let buckets = project.buckets_mut();
        buckets.extend(&test, PIPELINE_UNIT_TEST_LIBRARIES_BUCKET)?;
        for parent in [
            main.as_str(),
            test.as_str(),
            CORE_LIBRARIES_BUCKET,
            PLUGIN_LIBRARIES_BUCKET,
            TEST_LIBRARIES_BUCKET,
        ] {
            buckets.extend(&it_implementation, parent)?;
        }
        for parent in [PLUGIN_HPIS_AND_JPIS_BUCKET, TEST_LIBRARIES_RUNTIME_ONLY_BUCKET] {
            buckets.extend(&it_runtime_only, parent)?;
        }
        Ok(())
    }

    fn bind_derivations(project: &mut Project) -> Result<()> {
        let buckets = project.buckets_mut();
        buckets.bind_derivation(PLUGIN_HPIS_AND_JPIS_BUCKET, PLUGINS_BUCKET, DerivedArtifacts::PluginPackages)?;
        buckets.bind_derivation(PLUGIN_LIBRARIES_BUCKET, PLUGINS_BUCKET, DerivedArtifacts::PluginLibraries)?;
        Ok(())
    }

    fn register_tasks(project: &mut Project) -> Result<()> {
        let libs_dir = project.libs_dir();
        let build_dir = project.build_dir().display().to_string();
        let integration_test = project.source_sets().get(INTEGRATION_TEST_SOURCE_SET)?;
        let it_classes = integration_test.classes_task_name();
        let it_classpath = integration_test.runtime_classpath_bucket_name();

        let tasks = project.tasks_mut();
        tasks.register(
            Task::new(
                SOURCES_JAR_TASK,
                TaskAction::Archive(
                    ArchiveSpec::new(SOURCES_CLASSIFIER, &libs_dir).with_input(ArchiveInput::SourceRoots {
                        source_set: MAIN_SOURCE_SET.to_string(),
                    }),
                ),
            )
            .with_group(BUILD_GROUP)
            .with_description("Assembles a jar archive containing the main sources."),
        )?;
        tasks.register(
            Task::new(
                GROOVYDOC_JAR_TASK,
                TaskAction::Archive(ArchiveSpec::new(JAVADOC_CLASSIFIER, &libs_dir).with_input(
                    ArchiveInput::TaskOutput {
                        task: GROOVYDOC_TASK.to_string(),
                    },
                )),
            )
            .with_group(DOCUMENTATION_GROUP)
            .with_description("Assembles a jar archive containing the Groovydoc.")
            .depends_on(GROOVYDOC_TASK),
        )?;
        tasks.register(
            Task::new(
                INTEGRATION_TEST_TASK,
                TaskAction::Test(
                    TestSpec::new(INTEGRATION_TEST_SOURCE_SET, &it_classpath)
                        .with_system_property(BUILD_DIRECTORY_PROPERTY, &build_dir),
                ),
            )
            .with_group(VERIFICATION_GROUP)
            .with_description("Runs the integration tests.")
            .depends_on(CLASSES_TASK)
            .depends_on(&it_classes)
            .must_run_after(TEST_TASK),
        )?;
        Ok(())
    }

    /// Point the archive destinations and the harness build directory at the
    /// final build directory, which settings may have moved since apply.
    fn configure_build_paths(project: &mut Project) -> Result<()> {
        let libs_dir = project.libs_dir();
        let build_dir = project.build_dir().display().to_string();

        let tasks = project.tasks_mut();
        for name in [SOURCES_JAR_TASK, GROOVYDOC_JAR_TASK] {
            if let TaskAction::Archive(archive) = tasks.get_mut(name)?.action_mut() {
                archive.destination = libs_dir.clone();
            }
        }
        if let TaskAction::Test(test) = tasks.get_mut(INTEGRATION_TEST_TASK)?.action_mut() {
            test.system_properties
                .insert(BUILD_DIRECTORY_PROPERTY.to_string(), build_dir.clone());
        }
        debug!("Build directory for '{}' is {}", project.name(), build_dir);
        Ok(())
    }

    /// Declare the configured platform and plugin dependencies. Runs once the
    /// extension is final.
    fn declare_dependencies(project: &mut Project) -> Result<()> {
        let implementation = project.source_sets().get(MAIN_SOURCE_SET)?.implementation_bucket_name();
        let extension = project.extension();
        let mut declarations: Vec<(&str, DependencyNotation)> = vec![
            (implementation.as_str(), extension.groovy_notation()),
            (CORE_LIBRARIES_BUCKET, extension.core_notation()),
            (TEST_LIBRARIES_BUCKET, extension.test_harness_notation()),
            (TEST_LIBRARIES_RUNTIME_ONLY_BUCKET, extension.jenkins_war_notation()),
            (PIPELINE_UNIT_TEST_LIBRARIES_BUCKET, extension.pipeline_unit_notation()),
        ];
        for plugin in extension.plugin_dependencies().iter() {
            declarations.push((PLUGINS_BUCKET, plugin.to_notation()));
        }

        let count = declarations.len();
        let buckets = project.buckets_mut();
        for (bucket, notation) in declarations {
            debug!("Declaring {} on '{}'", notation, bucket);
            buckets.add_dependency(bucket, notation)?;
        }
        info!("Declared {} Jenkins dependencies", count);
        Ok(())
    }
}
