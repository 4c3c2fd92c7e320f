//! # Dependency Buckets
//!
//! Named, resolvable collections of dependency notations, the edges between
//! them and the container that owns them.
//!
//! A bucket may extend other buckets, inheriting their declarations. The
//! extension edges form a DAG held by [`BucketGraph`](graph::BucketGraph),
//! which refuses any edge that would close a cycle.
pub mod bucket;
pub mod container;
pub mod error;
pub mod graph;

pub use bucket::{BucketState, DependencyBucket};
pub use container::BucketContainer;
pub use error::BucketError;
pub use graph::BucketGraph;

#[cfg(test)]
mod tests;
