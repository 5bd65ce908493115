//! Path normalization.
//!
//! Normalization removes self references (`.`) and resolves parent references
//! (`..`) against the real segment before them, left to right. Parent
//! references that have nothing to cancel stay at the front of a relative
//! path; in an absolute path they would climb above the root, which is an
//! error. The model has no symbolic links, so canonicalization is the same
//! operation.

use crate::error::{Error, Result};
use crate::path::Path;
use crate::segment::Segment;

impl Path {
    /// Whether the path has no eliminable `.` or `..` segments.
    ///
    /// The root and the self path `.` are normalized.
    ///
    /// # Examples
    ///
    /// ```
    /// use qpath::Path;
    ///
    /// assert!(Path::ROOT.is_normalized());
    /// assert!("../a".parse::<Path>().unwrap().is_normalized());
    /// assert!(!"a/../b".parse::<Path>().unwrap().is_normalized());
    /// assert!(!"/a/./b".parse::<Path>().unwrap().is_normalized());
    /// ```
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        match self {
            Self::Root => true,
            Self::General(_) if self.is_self_path() => true,
            Self::General(path) => is_normalized_sequence(path.segments(), path.is_absolute()),
        }
    }

    /// The normalized form of this path.
    ///
    /// An absolute path that normalizes to nothing is the root; a relative
    /// one is the self path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if a `..` would climb above the root of
    /// an absolute path.
    ///
    /// # Examples
    ///
    /// ```
    /// use qpath::Path;
    ///
    /// let path: Path = "/a/./b/../c".parse().unwrap();
    /// assert_eq!(path.normalized().unwrap().to_string(), "/a/c");
    ///
    /// let relative: Path = "../a/b/..".parse().unwrap();
    /// assert_eq!(relative.normalized().unwrap().to_string(), "../a");
    ///
    /// let escaping: Path = "/a/../..".parse().unwrap();
    /// assert!(escaping.normalized().is_err());
    /// ```
    pub fn normalized(&self) -> Result<Path> {
        match self {
            Self::Root => Ok(Self::Root),
            Self::General(_) if self.is_normalized() => Ok(self.clone()),
            Self::General(path) => {
                let segments = resolve_references(path.segments(), path.is_absolute())
                    .map_err(|reason| {
                        log::debug!("normalizing {self} failed: {reason}");
                        Error::invalid_path(self, reason)
                    })?;
                Ok(Self::new(segments, path.is_absolute()))
            }
        }
    }

    /// Whether the path is canonical; the same as [`Path::is_normalized`].
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        self.is_normalized()
    }

    /// The canonical form of this path; the same as [`Path::normalized`].
    ///
    /// # Errors
    ///
    /// Same as [`Path::normalized`].
    pub fn canonical(&self) -> Result<Path> {
        self.normalized()
    }
}

fn is_normalized_sequence(segments: &[Segment], absolute: bool) -> bool {
    let mut previous_is_name = false;
    for segment in segments {
        if segment.is_self_reference() {
            return false;
        }
        if segment.is_parent_reference() {
            if absolute || previous_is_name {
                return false;
            }
        } else {
            previous_is_name = true;
        }
    }
    true
}

/// Drop `.` and cancel each `..` against the real segment before it.
///
/// Uncancelled `..` are kept for relative paths and rejected for absolute
/// ones.
fn resolve_references(
    segments: &[Segment],
    absolute: bool,
) -> std::result::Result<Vec<Segment>, &'static str> {
    let mut result: Vec<Segment> = Vec::with_capacity(segments.len());

    for segment in segments {
        if segment.is_self_reference() {
            continue;
        }
        if segment.is_parent_reference() {
            match result.last() {
                Some(last) if !last.is_parent_reference() => {
                    result.pop();
                }
                _ if absolute => return Err("path contains too many '..' segments (escapes root)"),
                _ => result.push(segment.clone()),
            }
        } else {
            result.push(segment.clone());
        }
    }

    Ok(result)
}
