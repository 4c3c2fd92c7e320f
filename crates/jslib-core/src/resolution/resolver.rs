use std::collections::{HashMap, HashSet};

use log::{debug, info, warn};

use crate::artifact::notation::{DependencyNotation, ModuleId, ModuleVersionId, ResolvedArtifact};
use crate::artifact::repository::ArtifactRepository;
use crate::bucket::container::BucketContainer;
use crate::resolution::derive::derive_dependencies;
use crate::resolution::error::ResolutionError;
use crate::resolution::result::ResolvedBucket;

/// Orchestrates bucket resolution against one repository.
///
/// Before a bucket is read, the derivations bound to it (and to every bucket
/// it extends) are materialized: the source bucket is resolved and the derived
/// notations are declared on the target. Each bucket is materialized at most
/// once and resolved at most once; later requests are served from the cache.
#[derive(Debug)]
pub struct Resolver<'r> {
    repository: &'r dyn ArtifactRepository,
    cache: HashMap<String, ResolvedBucket>,
    materialized: HashSet<String>,
    /// Buckets currently being resolved, outermost first
    in_progress: Vec<String>,
    resolutions: HashMap<String, usize>,
}

/// Modules and artifacts picked while resolving one bucket.
#[derive(Default)]
struct Selection {
    versions: HashMap<ModuleId, String>,
    expanded: HashSet<ModuleVersionId>,
    artifacts: Vec<ResolvedArtifact>,
}

impl Selection {
    /// First declared version of a module wins.
    fn accepts(&mut self, id: &ModuleVersionId) -> bool {
        match self.versions.get(&id.module()) {
            Some(selected) if *selected != id.version => {
                debug!("Conflict on {}: keeping {} over {}", id.module(), selected, id.version);
                false
            }
            Some(_) => true,
            None => {
                self.versions.insert(id.module(), id.version.clone());
                true
            }
        }
    }

    fn push(&mut self, artifact: ResolvedArtifact) {
        if !self.artifacts.contains(&artifact) {
            self.artifacts.push(artifact);
        }
    }
}

impl<'r> Resolver<'r> {
    pub fn new(repository: &'r dyn ArtifactRepository) -> Self {
        Self {
            repository,
            cache: HashMap::new(),
            materialized: HashSet::new(),
            in_progress: Vec::new(),
            resolutions: HashMap::new(),
        }
    }

    pub fn repository(&self) -> &dyn ArtifactRepository {
        self.repository
    }

    /// Resolve a bucket, returning the cached result on later calls.
    pub fn resolve(&mut self, buckets: &mut BucketContainer, name: &str) -> Result<ResolvedBucket, ResolutionError> {
        if let Some(resolved) = self.cache.get(name) {
            debug!("Bucket '{}' already resolved", name);
            return Ok(resolved.clone());
        }
        if !buckets.get(name)?.can_be_resolved() {
            return Err(ResolutionError::BucketNotResolvable { bucket: name.to_string() });
        }
        if self.in_progress.iter().any(|b| b == name) {
            let mut chain = self.in_progress.clone();
            chain.push(name.to_string());
            return Err(ResolutionError::Reentrant {
                bucket: name.to_string(),
                chain,
            });
        }

        self.in_progress.push(name.to_string());
        let outcome = self.resolve_uncached(buckets, name);
        self.in_progress.pop();

        let resolved = outcome?;
        info!("Resolved bucket '{}' to {} artifacts", name, resolved.len());
        *self.resolutions.entry(name.to_string()).or_insert(0) += 1;
        self.cache.insert(name.to_string(), resolved.clone());
        Ok(resolved)
    }

    pub fn is_resolved(&self, name: &str) -> bool {
        self.cache.contains_key(name)
    }

    /// How many times `name` was actually resolved, cache hits excluded.
    pub fn resolution_count(&self, name: &str) -> usize {
        self.resolutions.get(name).copied().unwrap_or(0)
    }

    fn resolve_uncached(&mut self, buckets: &mut BucketContainer, name: &str) -> Result<ResolvedBucket, ResolutionError> {
        let hierarchy = buckets.graph().hierarchy(name)?;
        // Reading a bucket that is itself waiting on this resolution
        if let Some(member) = hierarchy
            .iter()
            .find(|m| m.as_str() != name && self.in_progress.contains(*m))
        {
            let mut chain = self.in_progress.clone();
            chain.push(member.clone());
            return Err(ResolutionError::Reentrant {
                bucket: member.clone(),
                chain,
            });
        }
        for member in &hierarchy {
            self.materialize(buckets, member)?;
        }

        let mut selection = Selection::default();
        for member in &hierarchy {
            for notation in buckets.get(member)?.dependencies() {
                self.select(name, notation, &mut selection)?;
            }
        }

        // Declarations read by this resolution are now fixed
        for member in &hierarchy {
            buckets.get_mut(member)?.mark_resolved();
        }
        Ok(ResolvedBucket::new(name, selection.artifacts))
    }

    /// Run the derivations bound to `target`, once.
    fn materialize(&mut self, buckets: &mut BucketContainer, target: &str) -> Result<(), ResolutionError> {
        if self.materialized.contains(target) {
            return Ok(());
        }
        // A resolved bucket already carries its derived declarations
        if buckets.get(target)?.is_resolved() {
            debug!("Bucket '{}' was materialized by an earlier resolution", target);
            self.materialized.insert(target.to_string());
            return Ok(());
        }
        let bindings: Vec<_> = buckets.bindings_for(target).cloned().collect();
        for binding in bindings {
            let source = self.resolve(buckets, &binding.source)?;
            let derived = derive_dependencies(source.artifacts(), binding.kind);
            debug!(
                "Deriving {} {:?} declarations for '{}' from '{}'",
                derived.len(),
                binding.kind,
                target,
                binding.source
            );
            let bucket = buckets.get_mut(target)?;
            for notation in derived {
                bucket.add_dependency(notation)?;
            }
        }
        self.materialized.insert(target.to_string());
        Ok(())
    }

    fn select(&self, bucket: &str, notation: &DependencyNotation, selection: &mut Selection) -> Result<(), ResolutionError> {
        let id = &notation.id;
        if !selection.accepts(id) {
            return Ok(());
        }
        let module = self
            .repository
            .find_module(id)
            .ok_or_else(|| ResolutionError::ModuleNotFound {
                bucket: bucket.to_string(),
                notation: notation.to_string(),
                repository: self.repository.name().to_string(),
            })?;
        let classifier = notation.classifier.as_deref();

        if let Some(extension) = &notation.extension {
            // Artifact-only: exactly this file, no transitive dependencies
            if !module.publishes(extension, classifier) {
                return Err(ResolutionError::ArtifactNotFound {
                    bucket: bucket.to_string(),
                    notation: notation.to_string(),
                });
            }
            selection.push(ResolvedArtifact::new(id.clone(), extension, classifier));
            return Ok(());
        }

        if !selection.expanded.insert(id.clone()) {
            return Ok(());
        }
        if module.has_packaging_artifact() {
            if !module.publishes(&module.packaging, classifier) {
                return Err(ResolutionError::ArtifactNotFound {
                    bucket: bucket.to_string(),
                    notation: notation.to_string(),
                });
            }
            selection.push(ResolvedArtifact::new(id.clone(), &module.packaging, classifier));
        } else if classifier.is_some() {
            warn!("Ignoring classifier on '{}': module has no artifact of its own", notation);
        }

        let dependencies = module
            .dependency_notations()
            .map_err(|error| ResolutionError::InvalidModuleDependency {
                module: id.to_string(),
                error,
            })?;
        for dependency in &dependencies {
            self.select(bucket, dependency, selection)?;
        }
        Ok(())
    }
}
