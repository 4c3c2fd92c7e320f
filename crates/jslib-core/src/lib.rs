//! # jslib-core
//!
//! Build conventions for Jenkins pipeline shared-library projects.
//!
//! Applying [`SharedLibraryPlugin`] to a [`Project`] lays out the conventional
//! source directories, declares the Jenkins dependency buckets, binds the
//! deferred plugin-artifact derivations and wires the archive and
//! integration-test tasks. A [`Resolver`] then materializes the plugin
//! packages and their library jars on demand, in two phases.
pub mod artifact;
pub mod bucket;
pub mod extension;
pub mod kernel;
pub mod layout;
pub mod resolution;
pub mod storage;
pub mod task;

// Re-export key public types for the binary and for embedding projects
pub use artifact::{ArtifactRepository, DependencyNotation, FixtureRepository, ModuleVersionId, ResolvedArtifact};
pub use bucket::{BucketContainer, DependencyBucket};
pub use extension::{PluginDependencyDescriptor, PluginDependencySpec, SharedLibraryExtension};
pub use kernel::{Error, Project, ProjectPlugin, Result, SharedLibraryPlugin};
pub use resolution::{ResolvedBucket, Resolver};
pub use storage::LibrarySettings;
pub use task::TaskContainer;
