//! Common test utilities for integration tests.
//!
//! This module provides helper functions, fixture builders and collaborator
//! mocks for testing the qpath library.

use mockall::mock;
use qpath::render::{NamespaceRegistry, SimpleNamespaceRegistry, TextEncoder};
use qpath::{Path, Segment};

/// Namespace used by most fixtures.
#[allow(dead_code)]
pub const NS: &str = "http://example.com/ns";

/// Prefix registered for [`NS`] by [`registry`].
#[allow(dead_code)]
pub const PREFIX: &str = "ex";

// Mocks without expectations panic when called.
mock! {
    pub Registry {}

    impl NamespaceRegistry for Registry {
        fn prefix_for(&self, namespace_uri: &str) -> Option<String>;
        fn namespace_for(&self, prefix: &str) -> Option<String>;
    }
}

mock! {
    pub Encoder {}

    impl TextEncoder for Encoder {
        fn encode(&self, text: &str) -> String;
    }
}

/// Parses a path with the default registry, panicking on failure.
#[allow(dead_code)]
pub fn path(text: &str) -> Path {
    text.parse()
        .unwrap_or_else(|e| panic!("fixture path {text:?} failed to parse: {e}"))
}

/// The default registry plus [`PREFIX`] bound to [`NS`].
#[allow(dead_code)]
pub fn registry() -> SimpleNamespaceRegistry {
    let mut registry = SimpleNamespaceRegistry::default();
    registry.register(PREFIX, NS);
    registry
}

/// Builder for test paths in the [`NS`] namespace.
///
/// # Examples
///
/// ```no_run
/// # use common::PathFixture;
/// let path = PathFixture::absolute().name("a").indexed("b", 2).build();
/// ```
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct PathFixture {
    segments: Vec<Segment>,
    absolute: bool,
}

#[allow(dead_code)]
impl PathFixture {
    /// Start an absolute path.
    pub fn absolute() -> Self {
        Self {
            segments: Vec::new(),
            absolute: true,
        }
    }

    /// Start a relative path.
    pub fn relative() -> Self {
        Self::default()
    }

    /// Append a segment named `local` in [`NS`].
    pub fn name(mut self, local: &str) -> Self {
        self.segments.push(Segment::new(NS, local).unwrap());
        self
    }

    /// Append an indexed segment named `local` in [`NS`].
    pub fn indexed(mut self, local: &str, index: u32) -> Self {
        self.segments.push(Segment::with_index(NS, local, index).unwrap());
        self
    }

    /// Append `..`.
    pub fn up(mut self) -> Self {
        self.segments.push(Segment::parent_reference());
        self
    }

    /// Append `.`.
    pub fn here(mut self) -> Self {
        self.segments.push(Segment::self_reference());
        self
    }

    /// Build the path.
    pub fn build(self) -> Path {
        Path::new(self.segments, self.absolute)
    }
}
