use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Serialize;

use crate::artifact::repository::RepositoryDeclaration;
use crate::bucket::container::BucketContainer;
use crate::extension::SharedLibraryExtension;
use crate::kernel::constants::{CLASSES_TASK, DEFAULT_BUILD_DIR, DEFAULT_JAVA_VERSION, UNSPECIFIED_VERSION};
use crate::kernel::error::{Error, LifecyclePhase, Result};
use crate::kernel::plugin::ProjectPlugin;
use crate::kernel::report::ProjectReport;
use crate::layout::source_set::SourceSetContainer;
use crate::resolution::{ResolvedBucket, Resolver};
use crate::storage::config::LibrarySettings;
use crate::task::container::TaskContainer;

/// Java language levels for compiled sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JavaConventions {
    pub source_compatibility: String,
    pub target_compatibility: String,
}

impl Default for JavaConventions {
    fn default() -> Self {
        Self {
            source_compatibility: DEFAULT_JAVA_VERSION.to_string(),
            target_compatibility: DEFAULT_JAVA_VERSION.to_string(),
        }
    }
}

/// Work deferred until the project is evaluated
pub type AfterEvaluateAction = fn(&mut Project) -> Result<()>;

/// A shared-library build project.
///
/// Lifecycle: create, apply plugins, configure the extension, then
/// [`evaluate`](Project::evaluate) once. Buckets may only be resolved after
/// evaluation.
#[derive(Debug)]
pub struct Project {
    name: String,
    version: String,
    project_dir: PathBuf,
    build_dir: PathBuf,
    extension: SharedLibraryExtension,
    buckets: BucketContainer,
    source_sets: SourceSetContainer,
    tasks: TaskContainer,
    repositories: Vec<RepositoryDeclaration>,
    java: Option<JavaConventions>,
    applied_plugins: Vec<String>,
    after_evaluate: Vec<AfterEvaluateAction>,
    evaluated: bool,
}

impl Project {
    pub fn new(name: &str, project_dir: impl AsRef<Path>) -> Self {
        let project_dir = project_dir.as_ref().to_path_buf();
        Self {
            name: name.to_string(),
            version: UNSPECIFIED_VERSION.to_string(),
            build_dir: project_dir.join(DEFAULT_BUILD_DIR),
            project_dir,
            extension: SharedLibraryExtension::new(),
            buckets: BucketContainer::new(),
            source_sets: SourceSetContainer::new(),
            tasks: TaskContainer::new(),
            repositories: Vec::new(),
            java: None,
            applied_plugins: Vec::new(),
            after_evaluate: Vec::new(),
            evaluated: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn set_version(&mut self, version: &str) {
        self.version = version.to_string();
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    /// Relative paths are taken from the project directory.
    pub fn set_build_dir(&mut self, build_dir: impl AsRef<Path>) {
        self.build_dir = self.project_dir.join(build_dir);
    }

    /// Where archives are written
    pub fn libs_dir(&self) -> PathBuf {
        self.build_dir.join("libs")
    }

    pub fn extension(&self) -> &SharedLibraryExtension {
        &self.extension
    }

    pub fn extension_mut(&mut self) -> &mut SharedLibraryExtension {
        &mut self.extension
    }

    pub fn buckets(&self) -> &BucketContainer {
        &self.buckets
    }

    pub fn buckets_mut(&mut self) -> &mut BucketContainer {
        &mut self.buckets
    }

    pub fn source_sets(&self) -> &SourceSetContainer {
        &self.source_sets
    }

    pub fn source_sets_mut(&mut self) -> &mut SourceSetContainer {
        &mut self.source_sets
    }

    pub fn tasks(&self) -> &TaskContainer {
        &self.tasks
    }

    pub fn tasks_mut(&mut self) -> &mut TaskContainer {
        &mut self.tasks
    }

    pub fn repositories(&self) -> &[RepositoryDeclaration] {
        &self.repositories
    }

    /// Declare a repository unless one of that name already exists.
    pub fn add_repository(&mut self, repository: RepositoryDeclaration) -> bool {
        if self.repositories.iter().any(|r| r.name == repository.name) {
            return false;
        }
        debug!("Repository '{}' at {}", repository.name, repository.url);
        self.repositories.push(repository);
        true
    }

    /// Present once the Java conventions have been applied.
    pub fn java(&self) -> Option<&JavaConventions> {
        self.java.as_ref()
    }

    pub fn java_mut(&mut self) -> Option<&mut JavaConventions> {
        self.java.as_mut()
    }

    pub(crate) fn set_java(&mut self, java: JavaConventions) {
        self.java = Some(java);
    }

    pub fn has_plugin(&self, id: &str) -> bool {
        self.applied_plugins.iter().any(|p| p == id)
    }

    pub fn applied_plugins(&self) -> &[String] {
        &self.applied_plugins
    }

    /// Apply a plugin. Returns `false` when it was already applied, in which
    /// case nothing happens.
    pub fn apply_plugin(&mut self, plugin: &dyn ProjectPlugin) -> Result<bool> {
        if self.has_plugin(plugin.id()) {
            debug!("Plugin '{}' already applied to '{}'", plugin.id(), self.name);
            return Ok(false);
        }
        if self.evaluated {
            return Err(Error::lifecycle(
                LifecyclePhase::Apply,
                format!("cannot apply '{}' to evaluated project '{}'", plugin.id(), self.name),
            ));
        }
        self.applied_plugins.push(plugin.id().to_string());
        info!("Applying plugin '{}' to project '{}'", plugin.id(), self.name);
        plugin.apply(self)?;
        Ok(true)
    }

    /// Register work to run when the project is evaluated, in registration order.
    pub fn after_evaluate(&mut self, action: AfterEvaluateAction) {
        self.after_evaluate.push(action);
    }

    /// Create a source set with its four buckets and its classes task.
    ///
    /// `compileClasspath` extends `implementation`; `runtimeClasspath` extends
    /// `implementation` and `runtimeOnly`.
    pub fn create_source_set(&mut self, name: &str) -> Result<()> {
        let source_set = self.source_sets.create(name)?.clone();

        let implementation = source_set.implementation_bucket_name();
        let runtime_only = source_set.runtime_only_bucket_name();
        let compile_classpath = source_set.compile_classpath_bucket_name();
        let runtime_classpath = source_set.runtime_classpath_bucket_name();

        for declarable in [&implementation, &runtime_only] {
            self.buckets
                .maybe_create(declarable)
                .set_can_be_resolved(false)
                .set_visible(false);
        }
        for classpath in [&compile_classpath, &runtime_classpath] {
            self.buckets.maybe_create(classpath).set_visible(false);
        }
        self.buckets.extend(&compile_classpath, &implementation)?;
        self.buckets.extend(&runtime_classpath, &implementation)?;
        self.buckets.extend(&runtime_classpath, &runtime_only)?;

        let classes = source_set.classes_task_name();
        let task = self.tasks.maybe_register_lifecycle(&classes);
        if !source_set.is_main() {
            task.add_dependency(CLASSES_TASK);
        }
        debug!("Created source set '{}'", name);
        Ok(())
    }

    /// Copy settings onto the project and its extension.
    pub fn apply_settings(&mut self, settings: &LibrarySettings) -> Result<()> {
        if let Some(name) = &settings.project.name {
            self.set_name(name);
        }
        if let Some(version) = &settings.project.version {
            self.set_version(version);
        }
        if let Some(build_dir) = &settings.project.build_dir {
            self.set_build_dir(build_dir);
        }
        settings.apply_to(&mut self.extension)?;
        Ok(())
    }

    pub fn is_evaluated(&self) -> bool {
        self.evaluated
    }

    /// Freeze the configuration and run the deferred wiring.
    pub fn evaluate(&mut self) -> Result<()> {
        if self.evaluated {
            return Err(Error::AlreadyEvaluated {
                project: self.name.clone(),
            });
        }
        info!("Evaluating project '{}'", self.name);
        self.extension.finalize();
        self.extension.plugin_dependencies().validate()?;

        let actions = std::mem::take(&mut self.after_evaluate);
        for action in actions {
            action(self)?;
        }
        self.tasks.validate()?;

        self.evaluated = true;
        info!("Project '{}' evaluated", self.name);
        Ok(())
    }

    /// Resolve a bucket. The project must have been evaluated.
    pub fn resolve(&mut self, resolver: &mut Resolver<'_>, bucket: &str) -> Result<ResolvedBucket> {
        if !self.evaluated {
            return Err(Error::lifecycle(
                LifecyclePhase::Resolve,
                format!("project '{}' must be evaluated before resolving '{}'", self.name, bucket),
            ));
        }
        Ok(resolver.resolve(&mut self.buckets, bucket)?)
    }

    /// Order the requested tasks and their dependencies.
    pub fn execution_plan(&self, tasks: &[&str]) -> Result<Vec<String>> {
        Ok(self.tasks.execution_plan(tasks)?)
    }

    pub fn report(&self) -> ProjectReport {
        ProjectReport::from_project(self)
    }
}
