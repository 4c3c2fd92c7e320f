use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::kernel::constants::MAIN_SOURCE_SET;
use crate::layout::error::LayoutError;

/// Kind of files a source root holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Java,
    Groovy,
    Resources,
}

impl SourceKind {
    pub const ALL: [SourceKind; 3] = [SourceKind::Java, SourceKind::Groovy, SourceKind::Resources];
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Java => write!(f, "java"),
            SourceKind::Groovy => write!(f, "groovy"),
            SourceKind::Resources => write!(f, "resources"),
        }
    }
}

/// Source roots of one compilation unit, by kind. Paths are relative to the
/// project directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceRoots {
    java: Vec<PathBuf>,
    groovy: Vec<PathBuf>,
    resources: Vec<PathBuf>,
}

impl SourceRoots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<P: AsRef<Path>>(mut self, kind: SourceKind, roots: &[P]) -> Self {
        self.set(kind, roots);
        self
    }

    pub fn get(&self, kind: SourceKind) -> &[PathBuf] {
        match kind {
            SourceKind::Java => &self.java,
            SourceKind::Groovy => &self.groovy,
            SourceKind::Resources => &self.resources,
        }
    }

    /// Replace the roots of one kind.
    pub fn set<P: AsRef<Path>>(&mut self, kind: SourceKind, roots: &[P]) {
        let roots = roots.iter().map(|p| p.as_ref().to_path_buf()).collect();
        match kind {
            SourceKind::Java => self.java = roots,
            SourceKind::Groovy => self.groovy = roots,
            SourceKind::Resources => self.resources = roots,
        }
    }

    /// Add a root of one kind, keeping existing ones.
    pub fn add<P: AsRef<Path>>(&mut self, kind: SourceKind, root: P) {
        let root = root.as_ref().to_path_buf();
        let roots = match kind {
            SourceKind::Java => &mut self.java,
            SourceKind::Groovy => &mut self.groovy,
            SourceKind::Resources => &mut self.resources,
        };
        if !roots.contains(&root) {
            roots.push(root);
        }
    }

    /// Every root, java first, then groovy, then resources.
    pub fn all(&self) -> impl Iterator<Item = &PathBuf> {
        self.java.iter().chain(&self.groovy).chain(&self.resources)
    }

    pub fn is_empty(&self) -> bool {
        self.java.is_empty() && self.groovy.is_empty() && self.resources.is_empty()
    }
}

/// A compilation unit and the names of the buckets and tasks derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceSet {
    name: String,
    roots: SourceRoots,
}

impl SourceSet {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            roots: SourceRoots::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn roots(&self) -> &SourceRoots {
        &self.roots
    }

    pub fn roots_mut(&mut self) -> &mut SourceRoots {
        &mut self.roots
    }

    pub fn set_roots(&mut self, roots: SourceRoots) {
        self.roots = roots;
    }

    pub fn is_main(&self) -> bool {
        self.name == MAIN_SOURCE_SET
    }

    pub fn implementation_bucket_name(&self) -> String {
        self.prefixed("implementation")
    }

    pub fn runtime_only_bucket_name(&self) -> String {
        self.prefixed("runtimeOnly")
    }

    pub fn compile_classpath_bucket_name(&self) -> String {
        self.prefixed("compileClasspath")
    }

    pub fn runtime_classpath_bucket_name(&self) -> String {
        self.prefixed("runtimeClasspath")
    }

    /// `classes` for main, `<name>Classes` otherwise.
    pub fn classes_task_name(&self) -> String {
        self.prefixed("classes")
    }

    /// `main` keeps the bare name, other sets prefix it: `testImplementation`.
    fn prefixed(&self, suffix: &str) -> String {
        if self.is_main() {
            return suffix.to_string();
        }
        let mut chars = suffix.chars();
        match chars.next() {
            Some(first) => format!("{}{}{}", self.name, first.to_ascii_uppercase(), chars.as_str()),
            None => self.name.clone(),
        }
    }
}

/// The project's source sets, in creation order.
#[derive(Debug, Clone, Default)]
pub struct SourceSetContainer {
    sets: Vec<SourceSet>,
}

impl SourceSetContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, name: &str) -> Result<&mut SourceSet, LayoutError> {
        if self.contains(name) {
            return Err(LayoutError::SourceSetExists { name: name.to_string() });
        }
        self.sets.push(SourceSet::new(name));
        let index = self.sets.len() - 1;
        Ok(&mut self.sets[index])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sets.iter().any(|s| s.name == name)
    }

    pub fn get(&self, name: &str) -> Result<&SourceSet, LayoutError> {
        self.sets
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| LayoutError::SourceSetNotFound { name: name.to_string() })
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut SourceSet, LayoutError> {
        self.sets
            .iter_mut()
            .find(|s| s.name == name)
            .ok_or_else(|| LayoutError::SourceSetNotFound { name: name.to_string() })
    }

    pub fn names(&self) -> Vec<&str> {
        self.sets.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SourceSet> {
        self.sets.iter()
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
