//! Relativization and resolution.
//!
//! `relative_to` and `resolve` are inverses for normalized absolute paths:
//! for any base `q`, `q.resolve(&p.relative_to(&q)?)? == p`.

use crate::error::{Error, Result};
use crate::path::Path;
use crate::segment::Segment;

impl Path {
    /// The relative path that leads from `base` to this path.
    ///
    /// Both paths are normalized first. The result climbs with one `..` per
    /// base segment below the common ancestor, then descends through the rest
    /// of this path. Equal paths give the self path `.`. The common ancestor
    /// uses segment equality, so `a` and `a[1]` do not match.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if either path is relative or cannot be
    /// normalized.
    ///
    /// # Examples
    ///
    /// ```
    /// use qpath::Path;
    ///
    /// let base: Path = "/a/b/c".parse().unwrap();
    /// let target: Path = "/a/x".parse().unwrap();
    /// assert_eq!(target.relative_to(&base).unwrap().to_string(), "../../x");
    ///
    /// // The root is reached by climbing once per base segment
    /// assert_eq!(Path::ROOT.relative_to(&base).unwrap().to_string(), "../../..");
    /// ```
    pub fn relative_to(&self, base: &Path) -> Result<Path> {
        if !self.is_absolute() {
            return Err(Error::invalid_path(
                self,
                "only absolute paths can be made relative",
            ));
        }
        if !base.is_absolute() {
            return Err(Error::invalid_path(
                base,
                "a path can only be made relative to an absolute base",
            ));
        }
        let base = base.normalized()?;

        match self {
            Self::Root => Ok(Self::parent_references(base.size())),
            Self::General(_) => {
                let this = self.normalized()?;
                let shared = this
                    .segments()
                    .iter()
                    .zip(base.segments())
                    .take_while(|(a, b)| a == b)
                    .count();

                let mut segments = vec![Segment::parent_reference(); base.size() - shared];
                segments.extend_from_slice(&this.segments()[shared..]);
                Ok(Self::relative(segments))
            }
        }
    }

    /// Resolve a relative path against this path.
    ///
    /// The relative path is normalized and appended to this path's segments,
    /// and the combined path is normalized. Resolving against the root yields
    /// an absolute path with the normalized relative path's segments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if `relative` is absolute, or if the
    /// result would climb above the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use qpath::Path;
    ///
    /// let base: Path = "/a/b".parse().unwrap();
    /// let relative: Path = "../c/./d".parse().unwrap();
    /// assert_eq!(base.resolve(&relative).unwrap().to_string(), "/a/c/d");
    ///
    /// assert_eq!(Path::ROOT.resolve(&"x/y".parse().unwrap()).unwrap().to_string(), "/x/y");
    /// assert!(Path::ROOT.resolve(&"/x".parse().unwrap()).is_err());
    /// ```
    pub fn resolve(&self, relative: &Path) -> Result<Path> {
        if relative.is_absolute() {
            log::debug!("refusing to resolve absolute path {relative} against {self}");
            return Err(Error::invalid_path(
                relative,
                "an absolute path cannot be resolved against a base",
            ));
        }
        let relative = relative.normalized()?;

        match self {
            Self::Root => Self::absolute(relative.to_segments_vec()).normalized(),
            Self::General(base) => {
                let mut segments = base.segments().to_vec();
                segments.extend_from_slice(relative.segments());
                Self::new(segments, base.is_absolute()).normalized()
            }
        }
    }

    /// Append a relative path without normalizing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if `relative` is absolute.
    pub fn append(&self, relative: &Path) -> Result<Path> {
        if relative.is_absolute() {
            return Err(Error::invalid_path(
                relative,
                "an absolute path cannot be appended",
            ));
        }
        let mut segments = self.to_segments_vec();
        segments.extend(
            relative
                .segments()
                .iter()
                .filter(|segment| !relative.is_self_path() || !segment.is_self_reference())
                .cloned(),
        );
        Ok(Self::new(segments, self.is_absolute()))
    }
}
