//! Namespace registries.
//!
//! A registry maps namespace URIs to the short prefixes used in human-readable
//! path strings, and back.

use std::collections::BTreeMap;

/// Namespace URI for `jcr:` names.
pub const JCR_URI: &str = "http://www.jcp.org/jcr/1.0";
/// Namespace URI for `nt:` names.
pub const NT_URI: &str = "http://www.jcp.org/jcr/nt/1.0";
/// Namespace URI for `mix:` names.
pub const MIX_URI: &str = "http://www.jcp.org/jcr/mix/1.0";
/// Namespace URI for `xml:` names.
pub const XML_URI: &str = "http://www.w3.org/XML/1998/namespace";

/// Lookup between namespace URIs and prefixes.
pub trait NamespaceRegistry {
    /// The prefix registered for `namespace_uri`, if any.
    fn prefix_for(&self, namespace_uri: &str) -> Option<String>;

    /// The namespace URI registered for `prefix`, if any.
    fn namespace_for(&self, prefix: &str) -> Option<String>;
}

/// An in-memory, bidirectional namespace registry.
///
/// The default registry knows the empty namespace (empty prefix) plus the
/// `jcr`, `nt`, `mix` and `xml` namespaces.
///
/// # Examples
///
/// ```
/// use qpath::render::{NamespaceRegistry, SimpleNamespaceRegistry};
///
/// let mut registry = SimpleNamespaceRegistry::default();
/// registry.register("ex", "http://example.com");
///
/// assert_eq!(registry.prefix_for("http://example.com").as_deref(), Some("ex"));
/// assert_eq!(registry.namespace_for("ex").as_deref(), Some("http://example.com"));
/// assert_eq!(registry.prefix_for("").as_deref(), Some(""));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleNamespaceRegistry {
    by_prefix: BTreeMap<String, String>,
    by_uri: BTreeMap<String, String>,
}

impl SimpleNamespaceRegistry {
    /// Create a registry that only knows the empty namespace.
    #[must_use]
    pub fn empty() -> Self {
        let mut registry = Self {
            by_prefix: BTreeMap::new(),
            by_uri: BTreeMap::new(),
        };
        registry.register("", "");
        registry
    }

    /// Register `prefix` for `namespace_uri`.
    ///
    /// Any previous mapping for either the prefix or the URI is replaced.
    pub fn register(&mut self, prefix: impl Into<String>, namespace_uri: impl Into<String>) {
        let prefix = prefix.into();
        let namespace_uri = namespace_uri.into();
        if let Some(old_uri) = self.by_prefix.remove(&prefix) {
            self.by_uri.remove(&old_uri);
        }
        if let Some(old_prefix) = self.by_uri.remove(&namespace_uri) {
            self.by_prefix.remove(&old_prefix);
        }
        self.by_prefix.insert(prefix.clone(), namespace_uri.clone());
        self.by_uri.insert(namespace_uri, prefix);
    }

    /// Registered `(prefix, uri)` pairs in prefix order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.by_prefix
            .iter()
            .map(|(prefix, uri)| (prefix.as_str(), uri.as_str()))
    }

    /// Number of registered namespaces, including the empty namespace.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_prefix.len()
    }

    /// Whether nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_prefix.is_empty()
    }
}

impl Default for SimpleNamespaceRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register("jcr", JCR_URI);
        registry.register("nt", NT_URI);
        registry.register("mix", MIX_URI);
        registry.register("xml", XML_URI);
        registry
    }
}

impl NamespaceRegistry for SimpleNamespaceRegistry {
    fn prefix_for(&self, namespace_uri: &str) -> Option<String> {
        self.by_uri.get(namespace_uri).cloned()
    }

    fn namespace_for(&self, prefix: &str) -> Option<String> {
        self.by_prefix.get(prefix).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_namespaces() {
        let registry = SimpleNamespaceRegistry::default();
        assert_eq!(registry.prefix_for(JCR_URI).as_deref(), Some("jcr"));
        assert_eq!(registry.namespace_for("nt").as_deref(), Some(NT_URI));
        assert_eq!(registry.namespace_for("").as_deref(), Some(""));
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn test_empty_registry_knows_empty_namespace() {
        let registry = SimpleNamespaceRegistry::empty();
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());
        assert_eq!(registry.prefix_for(JCR_URI), None);
    }

    #[test]
    fn test_register_replaces_both_directions() {
        let mut registry = SimpleNamespaceRegistry::empty();
        registry.register("a", "http://one.example");
        registry.register("b", "http://one.example");

        assert_eq!(registry.namespace_for("a"), None);
        assert_eq!(registry.prefix_for("http://one.example").as_deref(), Some("b"));

        registry.register("b", "http://two.example");
        assert_eq!(registry.prefix_for("http://one.example"), None);
        assert_eq!(registry.namespace_for("b").as_deref(), Some("http://two.example"));
    }

    #[test]
    fn test_iter_in_prefix_order() {
        let registry = SimpleNamespaceRegistry::default();
        let prefixes: Vec<&str> = registry.iter().map(|(prefix, _)| prefix).collect();
        assert_eq!(prefixes, vec!["", "jcr", "mix", "nt", "xml"]);
    }
}
