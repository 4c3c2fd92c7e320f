use std::collections::BTreeMap;

use log::debug;

use crate::artifact::notation::DependencyNotation;
use crate::bucket::bucket::DependencyBucket;
use crate::bucket::error::BucketError;
use crate::bucket::graph::BucketGraph;
use crate::resolution::derive::{DerivationBinding, DerivedArtifacts};

/// Owns every bucket of a project, the `extends` graph between them and the
/// derivations bound to them.
#[derive(Debug, Clone, Default)]
pub struct BucketContainer {
    buckets: BTreeMap<String, DependencyBucket>,
    graph: BucketGraph,
    bindings: Vec<DerivationBinding>,
}

impl BucketContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, name: &str) -> Result<&mut DependencyBucket, BucketError> {
        if self.buckets.contains_key(name) {
            return Err(BucketError::AlreadyExists { name: name.to_string() });
        }
        self.graph.add_node(name);
        Ok(self
            .buckets
            .entry(name.to_string())
            .or_insert_with(|| DependencyBucket::new(name)))
    }

    /// Get the bucket, creating it first if needed.
    pub fn maybe_create(&mut self, name: &str) -> &mut DependencyBucket {
        self.graph.add_node(name);
        self.buckets
            .entry(name.to_string())
            .or_insert_with(|| DependencyBucket::new(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.buckets.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Result<&DependencyBucket, BucketError> {
        self.buckets
            .get(name)
            .ok_or_else(|| BucketError::NotFound { name: name.to_string() })
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut DependencyBucket, BucketError> {
        self.buckets
            .get_mut(name)
            .ok_or_else(|| BucketError::NotFound { name: name.to_string() })
    }

    /// Bucket names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.buckets.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DependencyBucket> {
        self.buckets.values()
    }

    pub fn graph(&self) -> &BucketGraph {
        &self.graph
    }

    /// Make `child` inherit everything declared on `parent`.
    pub fn extend(&mut self, child: &str, parent: &str) -> Result<(), BucketError> {
        self.graph.add_edge(child, parent)?;
        debug!("Bucket '{}' extends '{}'", child, parent);
        Ok(())
    }

    pub fn add_dependency(&mut self, name: &str, notation: DependencyNotation) -> Result<(), BucketError> {
        self.get_mut(name)?.add_dependency(notation)
    }

    /// Declarations of `name` and of every bucket it extends, parents first,
    /// without duplicates.
    pub fn effective_dependencies(&self, name: &str) -> Result<Vec<DependencyNotation>, BucketError> {
        let mut result: Vec<DependencyNotation> = Vec::new();
        for member in self.graph.hierarchy(name)? {
            for notation in self.get(&member)?.dependencies() {
                if !result.contains(notation) {
                    result.push(notation.clone());
                }
            }
        }
        Ok(result)
    }

    /// Populate `target` from the resolved artifacts of `source` right before
    /// `target` is first resolved.
    pub fn bind_derivation(&mut self, target: &str, source: &str, kind: DerivedArtifacts) -> Result<(), BucketError> {
        let invalid = |reason: &str| BucketError::InvalidDerivation {
            target: target.to_string(),
            source_bucket: source.to_string(),
            reason: reason.to_string(),
        };
        if !self.get(source)?.can_be_resolved() {
            return Err(invalid("source bucket is not resolvable"));
        }
        if self.get(target)?.is_resolved() {
            return Err(invalid("target bucket has already been resolved"));
        }
        // Resolving the source must never need the target
        if self.graph.hierarchy(source)?.iter().any(|b| b == target) {
            return Err(invalid("source bucket extends the target"));
        }
        let binding = DerivationBinding::new(target, source, kind);
        if !self.bindings.contains(&binding) {
            debug!("Bound {:?} derivation '{}' -> '{}'", kind, source, target);
            self.bindings.push(binding);
        }
        Ok(())
    }

    pub fn bindings(&self) -> &[DerivationBinding] {
        &self.bindings
    }

    pub fn bindings_for<'a>(&'a self, target: &'a str) -> impl Iterator<Item = &'a DerivationBinding> + 'a {
        self.bindings.iter().filter(move |b| b.target == target)
    }
}
