//! Path segments.
//!
//! A [`Segment`] is one level of a path: a [`QualifiedName`] plus an optional
//! same-name-sibling index. Two names are reserved for relative addressing:
//! the self reference `.` and the parent reference `..`.

use std::cmp::Ordering;
use std::fmt;
use std::num::NonZeroU32;

use crate::error::{Error, Result};
use crate::name::QualifiedName;
use crate::render::{NamespaceRegistry, TextEncoder};

/// Local name of the self-reference segment.
pub const SELF_NAME: &str = ".";

/// Local name of the parent-reference segment.
pub const PARENT_NAME: &str = "..";

/// One namespace-qualified level of a path.
///
/// An absent index is distinct from index 1 for equality, but sorts as if it
/// were index 1 (ties put the absent index first).
///
/// Note that `a` and `a[1]` therefore never compare `Equal`, even though the
/// ordering otherwise treats them as the same position. Use [`Segment::matches`]
/// for comparisons that treat the two as the same sibling.
///
/// # Examples
///
/// ```
/// use qpath::Segment;
///
/// let first = Segment::new("http://example.com", "item").unwrap();
/// let explicit = Segment::with_index("http://example.com", "item", 1).unwrap();
/// let second = Segment::with_index("http://example.com", "item", 2).unwrap();
///
/// assert_ne!(first, explicit);
/// assert!(first.matches(&explicit));
/// assert!(first < explicit);
/// assert!(explicit < second);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    name: QualifiedName,
    index: Option<NonZeroU32>,
}

impl Segment {
    /// Create a segment without a sibling index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedSegment`] if `local_name` is empty.
    pub fn new(namespace_uri: impl Into<String>, local_name: impl Into<String>) -> Result<Self> {
        Ok(Self::from_name(QualifiedName::new(namespace_uri, local_name)?))
    }

    /// Create a segment with a same-name-sibling index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedSegment`] if `local_name` is empty, if `index`
    /// is zero, or if the name is a reserved `.`/`..` reference.
    pub fn with_index(
        namespace_uri: impl Into<String>,
        local_name: impl Into<String>,
        index: u32,
    ) -> Result<Self> {
        Self::from_parts(QualifiedName::new(namespace_uri, local_name)?, Some(index))
    }

    /// Create a segment from an existing name and optional index.
    ///
    /// # Errors
    ///
    /// Same as [`Segment::with_index`].
    pub fn from_parts(name: QualifiedName, index: Option<u32>) -> Result<Self> {
        let Some(index) = index else {
            return Ok(Self::from_name(name));
        };
        let Some(index) = NonZeroU32::new(index) else {
            return Err(Error::MalformedSegment {
                segment: name.to_string(),
                reason: "same-name-sibling index must be positive".to_string(),
            });
        };
        if is_reserved(&name) {
            return Err(Error::MalformedSegment {
                segment: name.to_string(),
                reason: "self and parent references cannot carry an index".to_string(),
            });
        }
        Ok(Self {
            name,
            index: Some(index),
        })
    }

    /// Create an unindexed segment from a name.
    #[must_use]
    pub fn from_name(name: QualifiedName) -> Self {
        Self { name, index: None }
    }

    /// The self-reference segment `.`.
    #[must_use]
    pub fn self_reference() -> Self {
        Self::from_name(QualifiedName::reserved(SELF_NAME))
    }

    /// The parent-reference segment `..`.
    #[must_use]
    pub fn parent_reference() -> Self {
        Self::from_name(QualifiedName::reserved(PARENT_NAME))
    }

    /// The segment's qualified name.
    #[must_use]
    pub fn name(&self) -> &QualifiedName {
        &self.name
    }

    /// The explicit sibling index, if any.
    #[must_use]
    pub fn index(&self) -> Option<u32> {
        self.index.map(NonZeroU32::get)
    }

    /// The sibling index with an absent index read as 1.
    #[must_use]
    pub fn effective_index(&self) -> u32 {
        self.index().unwrap_or(1)
    }

    /// Whether an explicit index was given.
    #[must_use]
    pub fn has_index(&self) -> bool {
        self.index.is_some()
    }

    /// Whether this is the `.` segment.
    #[must_use]
    pub fn is_self_reference(&self) -> bool {
        !self.name.has_namespace() && self.name.local_name() == SELF_NAME
    }

    /// Whether this is the `..` segment.
    #[must_use]
    pub fn is_parent_reference(&self) -> bool {
        !self.name.has_namespace() && self.name.local_name() == PARENT_NAME
    }

    /// Whether this is either reserved reference.
    #[must_use]
    pub fn is_reference(&self) -> bool {
        self.is_self_reference() || self.is_parent_reference()
    }

    /// Equality that reads an absent index as index 1.
    #[must_use]
    pub fn matches(&self, other: &Segment) -> bool {
        self.name == other.name && self.effective_index() == other.effective_index()
    }

    /// Render as `prefix:local[index]`.
    ///
    /// Returns `None` when a namespace prefix is needed and cannot be found.
    #[must_use]
    pub fn prefixed_string(
        &self,
        registry: Option<&dyn NamespaceRegistry>,
        encoder: &dyn TextEncoder,
    ) -> Option<String> {
        if self.is_reference() {
            return Some(self.name.local_name().to_string());
        }
        let name = self.name.prefixed_string(registry, encoder)?;
        Some(self.with_index_suffix(name))
    }

    /// Render as `{uri}local[index]`.
    #[must_use]
    pub fn expanded_string(&self, encoder: &dyn TextEncoder) -> String {
        if self.is_reference() {
            return self.name.local_name().to_string();
        }
        self.with_index_suffix(self.name.expanded_string(encoder))
    }

    fn with_index_suffix(&self, name: String) -> String {
        match self.index {
            Some(index) => format!("{name}[{index}]"),
            None => name,
        }
    }
}

fn is_reserved(name: &QualifiedName) -> bool {
    !name.has_namespace() && matches!(name.local_name(), SELF_NAME | PARENT_NAME)
}

impl PartialOrd for Segment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Orders by name, then by index with an absent index counted as 1.
///
/// An absent index and an explicit `[1]` tie on that rule, so the absent one
/// sorts first; this keeps `Ord` consistent with `Eq`.
impl Ord for Segment {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.effective_index().cmp(&other.effective_index()))
            .then_with(|| self.index.is_some().cmp(&other.index.is_some()))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(index) = self.index {
            write!(f, "[{index}]")?;
        }
        Ok(())
    }
}

impl From<QualifiedName> for Segment {
    fn from(name: QualifiedName) -> Self {
        Self::from_name(name)
    }
}
