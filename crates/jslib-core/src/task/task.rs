use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// What an archive task packs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "from")]
pub enum ArchiveInput {
    /// Every source root of a source set
    SourceRoots { source_set: String },
    /// The output directory of another task
    TaskOutput { task: String },
}

/// A jar built from sources or generated docs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchiveSpec {
    pub classifier: String,
    pub destination: PathBuf,
    pub inputs: Vec<ArchiveInput>,
}

impl ArchiveSpec {
    pub fn new(classifier: &str, destination: &Path) -> Self {
        Self {
            classifier: classifier.to_string(),
            destination: destination.to_path_buf(),
            inputs: Vec::new(),
        }
    }

    pub fn with_input(mut self, input: ArchiveInput) -> Self {
        self.inputs.push(input);
        self
    }

    /// `<project>-<version>-<classifier>.jar`
    pub fn file_name(&self, project: &str, version: &str) -> String {
        format!("{}-{}-{}.jar", project, version, self.classifier)
    }

    pub fn archive_path(&self, project: &str, version: &str) -> PathBuf {
        self.destination.join(self.file_name(project, version))
    }
}

/// A test run over a source set's compiled classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestSpec {
    pub test_classes_source_set: String,
    pub classpath_bucket: String,
    pub system_properties: BTreeMap<String, String>,
}

impl TestSpec {
    pub fn new(source_set: &str, classpath_bucket: &str) -> Self {
        Self {
            test_classes_source_set: source_set.to_string(),
            classpath_bucket: classpath_bucket.to_string(),
            system_properties: BTreeMap::new(),
        }
    }

    pub fn with_system_property(mut self, key: &str, value: &str) -> Self {
        self.system_properties.insert(key.to_string(), value.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "type")]
pub enum TaskAction {
    /// Placeholder for a task the host build tool performs
    Lifecycle,
    Archive(ArchiveSpec),
    Test(TestSpec),
}

/// A named unit of build work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    name: String,
    group: Option<String>,
    description: Option<String>,
    depends_on: Vec<String>,
    must_run_after: Vec<String>,
    action: TaskAction,
}

impl Task {
    pub fn new(name: &str, action: TaskAction) -> Self {
        Self {
            name: name.to_string(),
            group: None,
            description: None,
            depends_on: Vec::new(),
            must_run_after: Vec::new(),
            action,
        }
    }

    pub fn lifecycle(name: &str) -> Self {
        Self::new(name, TaskAction::Lifecycle)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn action(&self) -> &TaskAction {
        &self.action
    }

    pub fn action_mut(&mut self) -> &mut TaskAction {
        &mut self.action
    }

    /// Tasks that must run before this one whenever this one runs.
    pub fn dependencies(&self) -> &[String] {
        &self.depends_on
    }

    /// Tasks that, when also scheduled, must run before this one.
    pub fn must_run_after_tasks(&self) -> &[String] {
        &self.must_run_after
    }

    pub fn with_group(mut self, group: &str) -> Self {
        self.group = Some(group.to_string());
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn depends_on(mut self, task: &str) -> Self {
        self.add_dependency(task);
        self
    }

    pub fn must_run_after(mut self, task: &str) -> Self {
        if !self.must_run_after.iter().any(|t| t == task) {
            self.must_run_after.push(task.to_string());
        }
        self
    }

    pub fn add_dependency(&mut self, task: &str) {
        if !self.depends_on.iter().any(|t| t == task) {
            self.depends_on.push(task.to_string());
        }
    }

    pub fn archive(&self) -> Option<&ArchiveSpec> {
        match &self.action {
            TaskAction::Archive(spec) => Some(spec),
            _ => None,
        }
    }

    pub fn test(&self) -> Option<&TestSpec> {
        match &self.action {
            TaskAction::Test(spec) => Some(spec),
            _ => None,
        }
    }
}
