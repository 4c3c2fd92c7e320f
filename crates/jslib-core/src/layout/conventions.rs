use std::collections::BTreeMap;

use log::debug;

use crate::kernel::constants::{INTEGRATION_TEST_SOURCE_SET, MAIN_SOURCE_SET, TEST_SOURCE_SET};
use crate::layout::error::LayoutError;
use crate::layout::source_set::{SourceKind, SourceRoots, SourceSetContainer};

/// Source roots to impose on each source set.
///
/// [`apply`](SourceLayout::apply) replaces whatever roots a set had; applying
/// twice leaves exactly the roots of the last layout applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLayout {
    roots: BTreeMap<String, SourceRoots>,
}

impl Default for SourceLayout {
    fn default() -> Self {
        Self::conventional()
    }
}

impl SourceLayout {
    /// A layout that touches no source set.
    pub fn empty() -> Self {
        Self { roots: BTreeMap::new() }
    }

    /// The shared-library layout: `src` and `vars` at the root, unit tests
    /// under `test/unit` and integration tests under `test/integration`.
    pub fn conventional() -> Self {
        let no_roots: &[&str] = &[];
        Self::empty()
            .with_roots(
                MAIN_SOURCE_SET,
                SourceRoots::new()
                    .with(SourceKind::Java, no_roots)
                    .with(SourceKind::Groovy, &["src", "vars"])
                    .with(SourceKind::Resources, &["resources"]),
            )
            .with_roots(TEST_SOURCE_SET, Self::test_roots("test/unit"))
            .with_roots(INTEGRATION_TEST_SOURCE_SET, Self::test_roots("test/integration"))
    }

    fn test_roots(base: &str) -> SourceRoots {
        SourceRoots::new()
            .with(SourceKind::Java, &[format!("{base}/java")])
            .with(SourceKind::Groovy, &[format!("{base}/groovy")])
            .with(SourceKind::Resources, &[format!("{base}/resources")])
    }

    pub fn with_roots(mut self, source_set: &str, roots: SourceRoots) -> Self {
        self.roots.insert(source_set.to_string(), roots);
        self
    }

    pub fn roots_for(&self, source_set: &str) -> Option<&SourceRoots> {
        self.roots.get(source_set)
    }

    /// Overwrite the roots of every source set this layout names. Every named
    /// set must already exist; nothing is changed otherwise.
    pub fn apply(&self, source_sets: &mut SourceSetContainer) -> Result<(), LayoutError> {
        for name in self.roots.keys() {
            source_sets.get(name)?;
        }
        for (name, roots) in &self.roots {
            debug!("Source set '{}' roots set to {:?}", name, roots);
            source_sets.get_mut(name)?.set_roots(roots.clone());
        }
        Ok(())
    }
}
