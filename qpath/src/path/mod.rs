//! Hierarchical paths over qualified names.
//!
//! # Key Concepts
//!
//! ## Root and general paths
//!
//! A [`Path`] is either [`Path::Root`], the absolute path with zero segments,
//! or a [`GeneralPath`] with at least one segment. The root answers every
//! operation in closed form; it never allocates and never consults a
//! rendering collaborator.
//!
//! ## Normalization
//!
//! A path is normalized when it contains no `.` segments (except the self
//! path `.` itself) and no `..` segment that follows a regular name. Leading
//! `..` segments are kept on relative paths; an absolute path that climbs
//! above the root cannot be normalized. Canonical form is the normalized
//! form.
//!
//! ## Ancestry
//!
//! Ancestry is a strict prefix relation between paths of the same
//! absoluteness. The root is an ancestor of every other path.
//!
//! # Examples
//!
//! ```
//! use qpath::{Path, PathRelationship};
//!
//! let base: Path = "/a/b".parse().unwrap();
//! let child: Path = "/a/b/./c/../d".parse().unwrap();
//!
//! let child = child.normalized().unwrap();
//! assert_eq!(child.to_string(), "/a/b/d");
//! assert_eq!(PathRelationship::between(&base, &child), PathRelationship::Ancestor);
//! assert_eq!(child.relative_to(&base).unwrap().to_string(), "d");
//! ```

mod iter;
mod normalize;
mod parse;
mod relationship;
mod relativize;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use iter::{PathsFromRoot, Segments};
pub use relationship::PathRelationship;
pub use types::{GeneralPath, Path};
