//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `normalize`: Collapse `.` and `..` segments
//! - `relativize`: Express an absolute path relative to an absolute base
//! - `resolve`: Resolve a relative path against a base
//! - `relationship`: Classify how two paths relate
//! - `ancestors`: List the paths from the root down to a path
//! - `render`: Render a path with a chosen encoder
//! - `validate`: Validate configuration file
//! - `completions`: Generate shell completion scripts

pub mod ancestors;
pub mod completions;
pub mod normalize;
pub mod relationship;
pub mod relativize;
pub mod render;
pub mod resolve;
pub mod validate;

pub use ancestors::AncestorsCommand;
pub use completions::CompletionsCommand;
pub use normalize::NormalizeCommand;
pub use relationship::RelationshipCommand;
pub use relativize::RelativizeCommand;
pub use render::RenderCommand;
pub use resolve::ResolveCommand;
pub use validate::ValidateCommand;
