//! # Artifacts
//!
//! Dependency coordinates and the repositories they resolve against.
//!
//! The transport behind a repository is not modelled here: resolution only
//! needs [`ArtifactRepository::find_module`]. [`FixtureRepository`] is an
//! in-memory module index that can be loaded from a settings-style file.
pub mod error;
pub mod notation;
pub mod repository;

pub use error::NotationError;
pub use notation::{DependencyNotation, ModuleId, ModuleVersionId, ResolvedArtifact};
pub use repository::{
    ArtifactRepository, FixtureRepository, ModuleDescriptor, PublishedArtifact, RepositoryDeclaration,
};

#[cfg(test)]
mod tests;
