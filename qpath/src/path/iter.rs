//! Read-only iteration over paths.

use std::iter::FusedIterator;
use std::slice;

use crate::error::{Error, Result};
use crate::path::Path;
use crate::segment::Segment;

/// A read-only view over a path's segments.
///
/// The view is finite and restartable: clone it to iterate again from the
/// same position. It can never remove elements; [`Segments::remove`] always
/// fails, even when the view is empty.
///
/// # Examples
///
/// ```
/// use qpath::Path;
///
/// let mut segments = Path::ROOT.iter();
/// assert_eq!(segments.next(), None);
/// assert!(segments.remove().unwrap_err().is_immutable_state());
/// ```
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    inner: slice::Iter<'a, Segment>,
}

impl<'a> Segments<'a> {
    /// Whether another segment remains.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.inner.len() > 0
    }

    /// Attempt to remove the last returned segment.
    ///
    /// # Errors
    ///
    /// Always returns [`Error::ImmutableState`]; paths cannot be modified.
    pub fn remove(&mut self) -> Result<Segment> {
        Err(Error::ImmutableState {
            target: "path segments",
        })
    }

    /// The segments not yet returned.
    #[must_use]
    pub fn as_slice(&self) -> &'a [Segment] {
        self.inner.as_slice()
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a Segment;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Segments<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Segments<'_> {}

impl FusedIterator for Segments<'_> {}

/// The chain of paths from the top of a path down to the path itself.
///
/// For an absolute path this starts at the root; for a relative path it
/// starts at the first segment.
#[derive(Debug, Clone)]
pub struct PathsFromRoot<'a> {
    path: &'a Path,
    next_len: usize,
}

impl Iterator for PathsFromRoot<'_> {
    type Item = Path;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_len > self.path.size() {
            return None;
        }
        let len = self.next_len;
        self.next_len += 1;
        if len == self.path.size() {
            return Some(self.path.clone());
        }
        Some(Path::new(
            self.path.segments()[..len].to_vec(),
            self.path.is_absolute(),
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.path.size() + 1).saturating_sub(self.next_len);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PathsFromRoot<'_> {}

impl FusedIterator for PathsFromRoot<'_> {}

impl Path {
    /// A read-only iterator over the segments.
    #[must_use]
    pub fn iter(&self) -> Segments<'_> {
        Segments {
            inner: self.segments().iter(),
        }
    }

    /// Every path from the top down to and including this one.
    ///
    /// # Examples
    ///
    /// ```
    /// use qpath::Path;
    ///
    /// let path: Path = "/a/b".parse().unwrap();
    /// let chain: Vec<String> = path.paths_from_root().map(|p| p.to_string()).collect();
    /// assert_eq!(chain, vec!["/", "/a", "/a/b"]);
    ///
    /// let mut root_chain = Path::ROOT.paths_from_root();
    /// assert_eq!(root_chain.next(), Some(Path::ROOT));
    /// assert_eq!(root_chain.next(), None);
    /// ```
    #[must_use]
    pub fn paths_from_root(&self) -> PathsFromRoot<'_> {
        PathsFromRoot {
            path: self,
            next_len: usize::from(!self.is_absolute()),
        }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Segment;
    type IntoIter = Segments<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
