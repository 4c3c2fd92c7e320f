//! # Source Layout
//!
//! Source sets (the compilation units `main`, `test` and `integrationTest`),
//! their source roots per kind, and the conventional shared-library layout
//! that overwrites those roots.
pub mod conventions;
pub mod error;
pub mod source_set;

pub use conventions::SourceLayout;
pub use error::LayoutError;
pub use source_set::{SourceKind, SourceRoots, SourceSet, SourceSetContainer};
