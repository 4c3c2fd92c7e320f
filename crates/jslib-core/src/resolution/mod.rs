//! # Resolution
//!
//! Two-phase materialization of Jenkins plugin artifacts.
//!
//! The plugin declarations bucket only names logical plugins. Which HPI/JPI
//! packages that brings in is known only once it has been resolved, so the
//! package and library buckets are filled lazily:
//!
//! 1. The [`Resolver`](resolver::Resolver) resolves the source bucket of every
//!    [`DerivationBinding`](derive::DerivationBinding) attached to a bucket it is
//!    about to read.
//! 2. [`derive_dependencies`](derive::derive_dependencies) maps the resolved
//!    plugin artifacts to new artifact-only notations, which are declared on the
//!    target before it is resolved.
//!
//! Results are memoized per bucket for the life of a resolver.
pub mod derive;
pub mod error;
pub mod resolver;
pub mod result;

pub use derive::{derive_dependencies, is_plugin_artifact, DerivationBinding, DerivedArtifacts};
pub use error::ResolutionError;
pub use resolver::Resolver;
pub use result::ResolvedBucket;

#[cfg(test)]
mod tests;
