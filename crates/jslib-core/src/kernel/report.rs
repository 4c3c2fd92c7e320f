use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::artifact::repository::RepositoryDeclaration;
use crate::kernel::bootstrap::{JavaConventions, Project};
use crate::layout::source_set::{SourceKind, SourceSet};
use crate::task::task::Task;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionReport {
    pub property: String,
    pub value: String,
    pub overridden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketReport {
    pub name: String,
    pub description: Option<String>,
    pub can_be_resolved: bool,
    pub visible: bool,
    pub extends_from: Vec<String>,
    /// Buckets whose resolution populates this one, with the derivation kind
    pub derived_from: Vec<String>,
    pub declared: Vec<String>,
}

/// Snapshot of how a project is wired, for display and for `--json` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectReport {
    pub name: String,
    pub version: String,
    pub project_dir: PathBuf,
    pub build_dir: PathBuf,
    pub evaluated: bool,
    pub plugins: Vec<String>,
    pub repositories: Vec<RepositoryDeclaration>,
    pub java: Option<JavaConventions>,
    pub versions: Vec<VersionReport>,
    pub buckets: Vec<BucketReport>,
    pub source_sets: Vec<SourceSet>,
    pub tasks: Vec<Task>,
}

impl ProjectReport {
    pub fn from_project(project: &Project) -> Self {
        let extension = project.extension();
        let mut versions: Vec<VersionReport> = extension
            .version_properties()
            .iter()
            .map(|p| VersionReport {
                property: p.name().to_string(),
                value: p.get().to_string(),
                overridden: p.is_overridden(),
            })
            .collect();
        versions.extend(extension.plugin_dependencies().iter().map(|d| VersionReport {
            property: d.version_property().name().to_string(),
            value: d.version().to_string(),
            overridden: d.version_property().is_overridden(),
        }));

        let container = project.buckets();
        let buckets = container
            .iter()
            .map(|b| BucketReport {
                name: b.name().to_string(),
                description: b.description().map(str::to_string),
                can_be_resolved: b.can_be_resolved(),
                visible: b.is_visible(),
                extends_from: container.graph().extends_from(b.name()).to_vec(),
                derived_from: container
                    .bindings_for(b.name())
                    .map(|binding| format!("{} ({:?})", binding.source, binding.kind))
                    .collect(),
                declared: b.dependencies().iter().map(|n| n.to_string()).collect(),
            })
            .collect();

        Self {
            name: project.name().to_string(),
            version: project.version().to_string(),
            project_dir: project.project_dir().to_path_buf(),
            build_dir: project.build_dir().to_path_buf(),
            evaluated: project.is_evaluated(),
            plugins: project.applied_plugins().to_vec(),
            repositories: project.repositories().to_vec(),
            java: project.java().cloned(),
            versions,
            buckets,
            source_sets: project.source_sets().iter().cloned().collect(),
            tasks: project.tasks().iter().cloned().collect(),
        }
    }
}

impl fmt::Display for ProjectReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Project {} {}", self.name, self.version)?;
        writeln!(f, "  directory: {}", self.project_dir.display())?;
        writeln!(f, "  build directory: {}", self.build_dir.display())?;
        writeln!(f, "  plugins: {}", self.plugins.join(", "))?;
        if let Some(java) = &self.java {
            writeln!(
                f,
                "  java: source {} target {}",
                java.source_compatibility, java.target_compatibility
            )?;
        }

        writeln!(f, "\nRepositories")?;
        for repository in &self.repositories {
            writeln!(f, "  {} {}", repository.name, repository.url)?;
        }

        writeln!(f, "\nVersions")?;
        for version in &self.versions {
            let marker = if version.overridden { " *" } else { "" };
            writeln!(f, "  {} = {}{}", version.property, version.value, marker)?;
        }

        writeln!(f, "\nSource sets")?;
        for source_set in &self.source_sets {
            writeln!(f, "  {}", source_set.name())?;
            for kind in SourceKind::ALL {
                let roots: Vec<String> = source_set
                    .roots()
                    .get(kind)
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect();
                writeln!(f, "    {}: [{}]", kind, roots.join(", "))?;
            }
        }

        writeln!(f, "\nBuckets")?;
        for bucket in &self.buckets {
            write!(f, "  {}", bucket.name)?;
            if !bucket.extends_from.is_empty() {
                write!(f, " extends {}", bucket.extends_from.join(", "))?;
            }
            writeln!(f)?;
            for source in &bucket.derived_from {
                writeln!(f, "    <- {}", source)?;
            }
            for declared in &bucket.declared {
                writeln!(f, "    {}", declared)?;
            }
        }

        writeln!(f, "\nTasks")?;
        for task in &self.tasks {
            write!(f, "  {}", task.name())?;
            if let Some(group) = task.group() {
                write!(f, " [{}]", group)?;
            }
            if !task.dependencies().is_empty() {
                write!(f, " depends on {}", task.dependencies().join(", "))?;
            }
            if !task.must_run_after_tasks().is_empty() {
                write!(f, " after {}", task.must_run_after_tasks().join(", "))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
