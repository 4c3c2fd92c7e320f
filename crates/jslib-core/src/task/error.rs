//! # Task Errors
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("Task '{name}' not found")]
    NotFound { name: String },

    #[error("Task '{name}' already exists")]
    AlreadyExists { name: String },

    #[error("Task '{task}' refers to unknown task '{dependency}'")]
    UnknownDependency { task: String, dependency: String },

    #[error("Task ordering cycle: {}", .path.join(" -> "))]
    CycleDetected { path: Vec<String> },
}
