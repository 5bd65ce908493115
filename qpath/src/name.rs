//! Namespace-qualified names.
//!
//! A [`QualifiedName`] pairs a namespace URI with a local name. The empty
//! namespace URI stands for "no namespace".

use std::fmt;

use crate::error::{Error, Result};
use crate::render::{NamespaceRegistry, TextEncoder};

/// A namespace URI plus a local name.
///
/// Equality and ordering are structural: namespace URI first, then local
/// name, both compared by exact text.
///
/// # Examples
///
/// ```
/// use qpath::QualifiedName;
///
/// let name = QualifiedName::new("http://example.com", "a").unwrap();
/// assert_eq!(name.namespace_uri(), "http://example.com");
/// assert_eq!(name.local_name(), "a");
/// assert_eq!(name.to_string(), "{http://example.com}a");
///
/// assert!(QualifiedName::new("http://example.com", "").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QualifiedName {
    namespace_uri: String,
    local_name: String,
}

impl QualifiedName {
    /// Create a new qualified name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedSegment`] if `local_name` is empty or
    /// `namespace_uri` contains `{` or `}`.
    pub fn new(namespace_uri: impl Into<String>, local_name: impl Into<String>) -> Result<Self> {
        let namespace_uri = namespace_uri.into();
        let local_name = local_name.into();
        if local_name.is_empty() {
            return Err(Error::MalformedSegment {
                segment: local_name,
                reason: "local name must not be empty".to_string(),
            });
        }
        if namespace_uri.contains(&['{', '}'][..]) {
            return Err(Error::MalformedSegment {
                segment: format!("{{{namespace_uri}}}{local_name}"),
                reason: "namespace URI must not contain braces".to_string(),
            });
        }
        Ok(Self {
            namespace_uri,
            local_name,
        })
    }

    /// Create a name in the empty namespace.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedSegment`] if `local_name` is empty.
    pub fn unqualified(local_name: impl Into<String>) -> Result<Self> {
        Self::new("", local_name)
    }

    // Reserved names are built without validation; both are non-empty.
    pub(crate) fn reserved(local_name: &str) -> Self {
        Self {
            namespace_uri: String::new(),
            local_name: local_name.to_string(),
        }
    }

    /// The namespace URI (empty for no namespace).
    #[must_use]
    pub fn namespace_uri(&self) -> &str {
        &self.namespace_uri
    }

    /// The local part of the name.
    #[must_use]
    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    /// Whether this name lives in the empty namespace.
    #[must_use]
    pub fn has_namespace(&self) -> bool {
        !self.namespace_uri.is_empty()
    }

    /// Render the name as `prefix:local` using a namespace registry.
    ///
    /// Names in the empty namespace never consult the registry. The local
    /// name is escaped with `encoder`.
    ///
    /// Returns `None` when the name has a namespace and the registry is
    /// absent or knows no prefix for it.
    #[must_use]
    pub fn prefixed_string(
        &self,
        registry: Option<&dyn NamespaceRegistry>,
        encoder: &dyn TextEncoder,
    ) -> Option<String> {
        let local = encoder.encode(&self.local_name);
        if !self.has_namespace() {
            return Some(unqualified_text(local));
        }
        let prefix = registry?.prefix_for(&self.namespace_uri)?;
        if prefix.is_empty() {
            Some(unqualified_text(local))
        } else {
            Some(format!("{prefix}:{local}"))
        }
    }

    /// Render the name in expanded `{uri}local` form, escaping the local name.
    #[must_use]
    pub fn expanded_string(&self, encoder: &dyn TextEncoder) -> String {
        let local = encoder.encode(&self.local_name);
        if self.has_namespace() {
            format!("{{{}}}{local}", self.namespace_uri)
        } else {
            unqualified_text(local)
        }
    }
}

/// Text for a name written without a namespace.
///
/// A leading `{` would read back as an expanded name, so such names get an
/// explicit empty namespace: `{}{local`.
fn unqualified_text(local: String) -> String {
    if local.starts_with('{') {
        format!("{{}}{local}")
    } else {
        local
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_namespace() {
            write!(f, "{{{}}}{}", self.namespace_uri, self.local_name)
        } else if self.local_name.starts_with('{') {
            write!(f, "{{}}{}", self.local_name)
        } else {
            write!(f, "{}", self.local_name)
        }
    }
}
