#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # qpath
//!
//! Immutable hierarchical paths over namespace-qualified names.
//!
//! A path is a sequence of segments, each a qualified name with an optional
//! same-name-sibling index. Paths are absolute or relative, may contain the
//! self (`.`) and parent (`..`) references, and support normalization,
//! ancestry queries, relativization and resolution. The root path is a
//! distinguished constant that answers every query in closed form.
//!
//! ## Core Types
//!
//! - [`QualifiedName`] and [`Segment`]: the building blocks of a path
//! - [`Path`] and [`GeneralPath`]: the path value and its non-root form
//! - [`PathRelationship`]: classification of two paths
//! - [`render`]: namespace registries, text encoders and the renderer
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//! - [`Config`] and [`ConfigBuilder`]: layered configuration
//!
//! ## Examples
//!
//! ```
//! use qpath::{Path, Segment};
//!
//! let base: Path = "/a/b".parse().unwrap();
//! let target: Path = "/a/c/d".parse().unwrap();
//!
//! let relative = target.relative_to(&base).unwrap();
//! assert_eq!(relative.to_string(), "../c/d");
//! assert_eq!(base.resolve(&relative).unwrap(), target);
//!
//! let root = Path::ROOT;
//! assert!(root.is_ancestor_of(&base));
//! assert_eq!(root.child(Segment::new("", "x").unwrap()).to_string(), "/x");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod name;
pub mod path;
pub mod render;
pub mod segment;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, install_logger, LogLevel, Logger};
pub use name::QualifiedName;
pub use path::{GeneralPath, Path, PathRelationship, PathsFromRoot, Segments};
pub use segment::Segment;
