//! Core path types.
//!
//! A [`Path`] is either the root address or a [`GeneralPath`] holding a
//! non-empty segment sequence. Every algebra operation is defined for both
//! variants by matching on this closed set; the root arm is always the
//! closed-form answer for "zero segments, absolute".

use std::cmp::Ordering;
use std::fmt;

use crate::error::{Error, Result};
use crate::segment::Segment;

/// An immutable absolute or relative address in a tree of qualified names.
///
/// # Examples
///
/// ```
/// use qpath::{Path, Segment};
///
/// let a = Segment::new("http://example.com", "a").unwrap();
/// let b = Segment::new("http://example.com", "b").unwrap();
///
/// let path = Path::absolute(vec![a.clone(), b]);
/// assert_eq!(path.size(), 2);
/// assert!(path.is_absolute());
/// assert_eq!(path.segment(0).unwrap(), &a);
///
/// assert!(Path::ROOT.is_root());
/// assert_eq!(Path::absolute(Vec::new()), Path::ROOT);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Path {
    /// The absolute path with zero segments.
    Root,
    /// Any other path.
    General(GeneralPath),
}

/// A path with at least one segment.
///
/// The root case is never represented by this type; use [`Path::Root`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GeneralPath {
    segments: Vec<Segment>,
    absolute: bool,
}

impl GeneralPath {
    /// Create a general path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if `segments` is empty.
    pub fn try_new(segments: Vec<Segment>, absolute: bool) -> Result<Self> {
        if segments.is_empty() {
            return Err(Error::invalid_path(
                if absolute { "/" } else { "" },
                "a general path needs at least one segment; use Path::Root for the root",
            ));
        }
        Ok(Self { segments, absolute })
    }

    /// The segments of this path (never empty).
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether this path is anchored at the root.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    /// Number of segments (at least one).
    #[must_use]
    pub fn size(&self) -> usize {
        self.segments.len()
    }

    /// Consume into the segment vector.
    #[must_use]
    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }
}

impl From<GeneralPath> for Path {
    fn from(path: GeneralPath) -> Self {
        Self::General(path)
    }
}

impl Path {
    /// The root path.
    pub const ROOT: Path = Path::Root;

    /// Build a path from segments.
    ///
    /// An empty absolute sequence is the root; an empty relative sequence is
    /// the self path `.`.
    #[must_use]
    pub fn new(segments: Vec<Segment>, absolute: bool) -> Self {
        if segments.is_empty() {
            return if absolute { Self::Root } else { Self::self_path() };
        }
        Self::General(GeneralPath { segments, absolute })
    }

    /// Build an absolute path from segments.
    #[must_use]
    pub fn absolute(segments: Vec<Segment>) -> Self {
        Self::new(segments, true)
    }

    /// Build a relative path from segments.
    #[must_use]
    pub fn relative(segments: Vec<Segment>) -> Self {
        Self::new(segments, false)
    }

    /// The relative path `.`, which refers to its base unchanged.
    #[must_use]
    pub fn self_path() -> Self {
        Self::General(GeneralPath {
            segments: vec![Segment::self_reference()],
            absolute: false,
        })
    }

    /// A relative path of `count` parent references (`..`, `../..`, ...).
    ///
    /// Zero references yield the self path.
    #[must_use]
    pub fn parent_references(count: usize) -> Self {
        Self::relative(vec![Segment::parent_reference(); count])
    }

    /// Whether this is the root path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        matches!(self, Self::Root)
    }

    /// Whether this path is anchored at the root.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        match self {
            Self::Root => true,
            Self::General(path) => path.absolute,
        }
    }

    /// Whether this is exactly the self path `.`.
    #[must_use]
    pub fn is_self_path(&self) -> bool {
        match self {
            Self::Root => false,
            Self::General(path) => {
                !path.absolute && path.segments.len() == 1 && path.segments[0].is_self_reference()
            }
        }
    }

    /// Number of segments.
    #[must_use]
    pub fn size(&self) -> usize {
        match self {
            Self::Root => 0,
            Self::General(path) => path.segments.len(),
        }
    }

    /// The segments of this path; empty for the root.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        match self {
            Self::Root => &[],
            Self::General(path) => &path.segments,
        }
    }

    /// An owned copy of the segments; empty for the root.
    #[must_use]
    pub fn to_segments_vec(&self) -> Vec<Segment> {
        self.segments().to_vec()
    }

    /// The segment at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= self.size()`. Every
    /// index fails for the root.
    pub fn segment(&self, index: usize) -> Result<&Segment> {
        self.segments().get(index).ok_or(Error::IndexOutOfRange {
            index,
            size: self.size(),
        })
    }

    /// The last segment, or `None` for the root.
    #[must_use]
    pub fn last_segment(&self) -> Option<&Segment> {
        self.segments().last()
    }

    /// Whether the last segment equals `segment`.
    #[must_use]
    pub fn ends_with(&self, segment: &Segment) -> bool {
        self.last_segment() == Some(segment)
    }

    /// The path from `start` to the end.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `start > self.size()`.
    pub fn subpath(&self, start: usize) -> Result<Path> {
        self.subpath_range(start, self.size())
    }

    /// The path covering segments `start..end`.
    ///
    /// The full range returns the same value. A range starting at 0 keeps the
    /// path's absoluteness; any other range is relative. An empty range is the
    /// root for an absolute path starting at 0 and the self path otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `start > end` or
    /// `end > self.size()`.
    pub fn subpath_range(&self, start: usize, end: usize) -> Result<Path> {
        let size = self.size();
        if end > size {
            return Err(Error::IndexOutOfRange { index: end, size });
        }
        if start > end {
            return Err(Error::IndexOutOfRange { index: start, size });
        }
        match self {
            Self::Root => Ok(Self::Root),
            Self::General(_) if start == 0 && end == size => Ok(self.clone()),
            Self::General(path) => Ok(Self::new(
                path.segments[start..end].to_vec(),
                path.absolute && start == 0,
            )),
        }
    }

    /// The parent path, or `None` when there is none.
    ///
    /// The root has no parent. A single-segment absolute path has the root as
    /// parent; a single-segment relative path has no parent.
    #[must_use]
    pub fn parent(&self) -> Option<Path> {
        match self {
            Self::Root => None,
            Self::General(path) if path.segments.len() == 1 && !path.absolute => None,
            Self::General(path) => Some(Self::new(
                path.segments[..path.segments.len() - 1].to_vec(),
                path.absolute,
            )),
        }
    }

    /// The ancestor `degree` levels up; degree 0 is this path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the path has fewer than `degree`
    /// levels above it.
    pub fn ancestor(&self, degree: usize) -> Result<Path> {
        if degree == 0 {
            return Ok(self.clone());
        }
        let size = self.size();
        let reachable = if self.is_absolute() { size } else { size.saturating_sub(1) };
        if degree > reachable {
            return Err(Error::invalid_path(
                self,
                format!("has no ancestor {degree} levels up"),
            ));
        }
        Ok(Self::new(
            self.segments()[..size - degree].to_vec(),
            self.is_absolute(),
        ))
    }

    /// This path extended by one segment.
    #[must_use]
    pub fn child(&self, segment: Segment) -> Path {
        let mut segments = self.to_segments_vec();
        segments.push(segment);
        Self::new(segments, self.is_absolute())
    }
}

impl PartialOrd for Path {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Path {
    /// Root sorts before every other path. General paths compare segment by
    /// segment, then by length, then relative before absolute.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Root, Self::Root) => Ordering::Equal,
            (Self::Root, Self::General(_)) => Ordering::Less,
            (Self::General(_), Self::Root) => Ordering::Greater,
            (Self::General(a), Self::General(b)) => a
                .segments
                .cmp(&b.segments)
                .then_with(|| a.absolute.cmp(&b.absolute)),
        }
    }
}

impl fmt::Display for Path {
    /// Formats the path in expanded form (`/{uri}local/...`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expanded_string(None))
    }
}
