//! # Kernel
//!
//! The `kernel` module ties the subsystems together into a build project.
//!
//! ## Key Responsibilities & Components:
//!
//! - **Project model**: [`Project`](bootstrap::Project) owns the extension, the
//!   bucket container, the source sets, the tasks and the declared repositories,
//!   and drives the apply → configure → evaluate lifecycle.
//! - **Shared-library plugin**: [`SharedLibraryPlugin`](plugin::SharedLibraryPlugin)
//!   wires the conventions onto a project through the
//!   [`ProjectPlugin`](plugin::ProjectPlugin) trait.
//! - **Reports**: [`ProjectReport`](report::ProjectReport) is a serializable
//!   snapshot of the wired model.
//! - **Core Constants**: bucket names, coordinates and defaults live in `constants`.
//! - **Error Handling**: the crate-wide [`Error`](error::Error) and `Result` alias.
pub mod bootstrap;
pub mod constants;
pub mod error;
pub mod plugin;
pub mod report;

pub use bootstrap::{AfterEvaluateAction, JavaConventions, Project};
pub use error::{Error, LifecyclePhase, Result};
pub use plugin::{GroovyConventionsPlugin, ProjectPlugin, SharedLibraryPlugin};
pub use report::{BucketReport, ProjectReport, VersionReport};
