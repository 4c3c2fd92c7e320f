//! # Extension Model
//!
//! User-configurable versions for the Jenkins platform a shared library is
//! built and tested against.
//!
//! - [`VersionProperty`](version::VersionProperty): a named, defaulted,
//!   freezable version string.
//! - [`PluginDependencyDescriptor`](dependency::PluginDependencyDescriptor) and
//!   [`PluginDependencySpec`](spec::PluginDependencySpec): the fixed table of
//!   pipeline plugins, each independently versioned.
//! - [`SharedLibraryExtension`](model::SharedLibraryExtension): the extension
//!   object itself, computing coordinate strings from the versions.
pub mod dependency;
pub mod error;
pub mod model;
pub mod spec;
pub mod version;

pub use dependency::PluginDependencyDescriptor;
pub use error::ExtensionError;
pub use model::SharedLibraryExtension;
pub use spec::PluginDependencySpec;
pub use version::VersionProperty;

#[cfg(test)]
mod tests;
