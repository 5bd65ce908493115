//! Ancestry and path relationship checking.
//!
//! The root is the ancestor of every other path, is never its own ancestor,
//! and is never a descendant of anything. For general paths ancestry is a
//! strict segment-prefix relation between paths of the same absoluteness.

use crate::path::Path;

impl Path {
    /// Whether this path is a strict ancestor of `other`.
    ///
    /// The root is an ancestor of every non-root path. No path is an ancestor
    /// of itself.
    ///
    /// Segments must be equal, so an absent index is not index 1: `/a` is not
    /// an ancestor of `/a[1]/b`.
    ///
    /// # Examples
    ///
    /// ```
    /// use qpath::Path;
    ///
    /// let a: Path = "/a".parse().unwrap();
    /// let ab: Path = "/a/b".parse().unwrap();
    ///
    /// assert!(a.is_ancestor_of(&ab));
    /// assert!(!ab.is_ancestor_of(&a));
    /// assert!(!a.is_ancestor_of(&a));
    /// assert!(Path::ROOT.is_ancestor_of(&a));
    /// assert!(!Path::ROOT.is_ancestor_of(&Path::ROOT));
    /// ```
    #[must_use]
    pub fn is_ancestor_of(&self, other: &Path) -> bool {
        match (self, other) {
            (Self::Root, other) => !other.is_root(),
            (Self::General(_), Self::Root) => false,
            (Self::General(this), Self::General(that)) => {
                this.is_absolute() == that.is_absolute()
                    && that.size() > this.size()
                    && that.segments().starts_with(this.segments())
            }
        }
    }

    /// Whether this path is a strict descendant of `other`.
    ///
    /// The root is never a descendant of anything, including itself.
    #[must_use]
    pub fn is_descendant_of(&self, other: &Path) -> bool {
        match self {
            Self::Root => false,
            Self::General(_) => other.is_ancestor_of(self),
        }
    }

    /// Whether this path is `other` or one of its ancestors.
    #[must_use]
    pub fn is_at_or_above(&self, other: &Path) -> bool {
        self == other || self.is_ancestor_of(other)
    }

    /// Whether this path is `other` or one of its descendants.
    #[must_use]
    pub fn is_at_or_below(&self, other: &Path) -> bool {
        self == other || self.is_descendant_of(other)
    }

    /// Whether both paths are equal once their last segment is removed.
    ///
    /// Two roots have nothing to remove and are considered to share the same
    /// (void) parent context. A root and a general path never do.
    ///
    /// # Examples
    ///
    /// ```
    /// use qpath::Path;
    ///
    /// let ab: Path = "/a/b".parse().unwrap();
    /// let ac: Path = "/a/c".parse().unwrap();
    /// let b: Path = "/b".parse().unwrap();
    ///
    /// assert!(ab.has_same_ancestor(&ac));
    /// assert!(!ab.has_same_ancestor(&b));
    /// assert!(Path::ROOT.has_same_ancestor(&Path::ROOT));
    /// ```
    #[must_use]
    pub fn has_same_ancestor(&self, other: &Path) -> bool {
        match (self, other) {
            (Self::Root, Self::Root) => true,
            (Self::Root, Self::General(_)) | (Self::General(_), Self::Root) => false,
            (Self::General(this), Self::General(that)) => {
                let this_segments = this.segments();
                let that_segments = that.segments();
                this.is_absolute() == that.is_absolute()
                    && this_segments[..this_segments.len() - 1]
                        == that_segments[..that_segments.len() - 1]
            }
        }
    }

    /// The deepest path that is an ancestor-or-self of both paths.
    ///
    /// The root is an ancestor of every path, so it is the answer whenever the
    /// root is involved or the paths share nothing (including paths of
    /// different absoluteness). Shared segments must be equal; `a` and `a[1]`
    /// are different segments here.
    ///
    /// # Examples
    ///
    /// ```
    /// use qpath::Path;
    ///
    /// let abc: Path = "/a/b/c".parse().unwrap();
    /// let abd: Path = "/a/b/d".parse().unwrap();
    /// let x: Path = "/x".parse().unwrap();
    ///
    /// assert_eq!(abc.common_ancestor(&abd).to_string(), "/a/b");
    /// assert!(abc.common_ancestor(&x).is_root());
    /// assert!(Path::ROOT.common_ancestor(&abc).is_root());
    /// ```
    #[must_use]
    pub fn common_ancestor(&self, other: &Path) -> Path {
        match (self, other) {
            (Self::Root, _) | (_, Self::Root) => Self::Root,
            (Self::General(this), Self::General(that)) => {
                if this.is_absolute() != that.is_absolute() {
                    return Self::Root;
                }
                let shared = this
                    .segments()
                    .iter()
                    .zip(that.segments())
                    .take_while(|(a, b)| a == b)
                    .count();
                if shared == 0 {
                    return Self::Root;
                }
                Self::new(this.segments()[..shared].to_vec(), this.is_absolute())
            }
        }
    }
}

/// Relationship between two paths.
///
/// # Examples
///
/// ```
/// use qpath::{Path, PathRelationship};
///
/// let parent: Path = "/home/user".parse().unwrap();
/// let child: Path = "/home/user/project".parse().unwrap();
///
/// assert_eq!(
///     PathRelationship::between(&parent, &child),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is a strict ancestor of the second.
    Ancestor,

    /// The first path is a strict descendant of the second.
    Descendant,

    /// The paths are equal.
    Same,

    /// Neither path is above the other.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths.
    ///
    /// Paths are compared as given; normalize them first to compare the
    /// locations they denote.
    #[must_use]
    pub fn between(path1: &Path, path2: &Path) -> Self {
        if path1 == path2 {
            Self::Same
        } else if path1.is_ancestor_of(path2) {
            Self::Ancestor
        } else if path1.is_descendant_of(path2) {
            Self::Descendant
        } else {
            Self::Unrelated
        }
    }

    /// Returns `true` for `Ancestor`, `Descendant`, or `Same`.
    ///
    /// # Examples
    ///
    /// ```
    /// use qpath::PathRelationship;
    ///
    /// assert!(PathRelationship::Ancestor.is_hierarchical());
    /// assert!(PathRelationship::Same.is_hierarchical());
    /// assert!(!PathRelationship::Unrelated.is_hierarchical());
    /// ```
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Ancestor | Self::Descendant | Self::Same)
    }

    /// The relationship seen from the other path.
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Self::Ancestor => Self::Descendant,
            Self::Descendant => Self::Ancestor,
            other => other,
        }
    }

    /// Get a human-readable description of the relationship.
    #[must_use]
    pub fn description(&self, path1: &Path, path2: &Path) -> String {
        match self {
            Self::Ancestor => format!("{path1} is an ancestor of {path2}"),
            Self::Descendant => format!("{path1} is a descendant of {path2}"),
            Self::Same => format!("{path1} and {path2} are the same path"),
            Self::Unrelated => format!("{path1} and {path2} are unrelated"),
        }
    }

    /// Short lowercase name (`ancestor`, `descendant`, `same`, `unrelated`).
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ancestor => "ancestor",
            Self::Descendant => "descendant",
            Self::Same => "same",
            Self::Unrelated => "unrelated",
        }
    }
}
