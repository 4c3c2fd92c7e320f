//! # Task Wiring
//!
//! Tasks registered on a project: lifecycle placeholders standing in for the
//! host's compile and test tasks, the two documentation archives and the
//! integration-test execution. [`TaskContainer`](container::TaskContainer)
//! validates the task graph and orders a run.
pub mod container;
pub mod error;
pub mod task;

pub use container::TaskContainer;
pub use error::TaskError;
pub use task::{ArchiveInput, ArchiveSpec, Task, TaskAction, TestSpec};
