//! Integration tests for the root path.
//!
//! The root is the absolute path with zero segments. Every query on it has a
//! closed-form answer, and rendering it never consults a collaborator: the
//! mocks used here have no expectations, so any call would fail the test.

mod common;

use common::{path, MockEncoder, MockRegistry, PathFixture};
use qpath::render::{NamespaceRegistry, TextEncoder};
use qpath::{Path, Segment};
use std::cmp::Ordering;

fn others() -> Vec<Path> {
    vec![
        path("/a"),
        path("/a/b[2]"),
        path("a"),
        path("../x"),
        Path::self_path(),
        PathFixture::absolute().name("a").up().build(),
    ]
}

// ============================================================================
// Ancestry
// ============================================================================

#[test]
fn test_common_ancestor_with_any_path_is_root() {
    for other in others() {
        assert!(Path::ROOT.common_ancestor(&other).is_root(), "{other}");
        assert!(other.common_ancestor(&Path::ROOT).is_root(), "{other}");
    }
    assert!(Path::ROOT.common_ancestor(&Path::ROOT).is_root());
}

#[test]
fn test_root_is_ancestor_of_every_path_except_root() {
    for other in others() {
        assert!(Path::ROOT.is_ancestor_of(&other), "{other}");
    }
    assert!(!Path::ROOT.is_ancestor_of(&Path::ROOT));
}

#[test]
fn test_root_is_never_a_descendant() {
    for other in others() {
        assert!(!Path::ROOT.is_descendant_of(&other), "{other}");
    }
    assert!(!Path::ROOT.is_descendant_of(&Path::ROOT));
}

#[test]
fn test_two_roots_have_same_ancestor() {
    assert!(Path::ROOT.has_same_ancestor(&Path::ROOT));
    assert!(!Path::ROOT.has_same_ancestor(&path("/a")));
}

// ============================================================================
// Normalization and accessors
// ============================================================================

#[test]
fn test_root_is_normalized_and_canonical() {
    assert!(Path::ROOT.is_normalized());
    assert!(Path::ROOT.is_canonical());
    assert_eq!(Path::ROOT.normalized().unwrap(), Path::ROOT);
    assert_eq!(Path::ROOT.canonical().unwrap(), Path::ROOT);
}

#[test]
fn test_root_has_size_zero_and_no_segments() {
    assert_eq!(Path::ROOT.size(), 0);
    assert!(Path::ROOT.segments().is_empty());
    assert!(Path::ROOT.to_segments_vec().is_empty());
    assert!(Path::ROOT.is_absolute());
}

#[test]
fn test_root_iterator_is_empty_and_immutable() {
    let mut segments = Path::ROOT.iter();
    assert!(!segments.has_next());
    assert!(segments.remove().unwrap_err().is_immutable_state());
    assert!(segments.next().is_none());
}

#[test]
fn test_root_segment_access_fails() {
    assert!(Path::ROOT.segment(0).unwrap_err().is_index_out_of_range());
    assert!(Path::ROOT.segment(1).unwrap_err().is_index_out_of_range());
}

#[test]
fn test_root_subpath_bounds() {
    assert_eq!(Path::ROOT.subpath(0).unwrap(), Path::ROOT);
    assert!(Path::ROOT.subpath(1).unwrap_err().is_index_out_of_range());
    assert!(Path::ROOT.subpath(2).unwrap_err().is_index_out_of_range());
    assert!(Path::ROOT.subpath_range(0, 1).unwrap_err().is_index_out_of_range());
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_root_renders_slash_without_consulting_collaborators() {
    let registry = MockRegistry::new();
    let encoder = MockEncoder::new();
    let delimiter = MockEncoder::new();

    let registries: [Option<&dyn NamespaceRegistry>; 2] = [None, Some(&registry)];
    let encoders: [Option<&dyn TextEncoder>; 2] = [None, Some(&encoder)];
    let delimiters: [Option<&dyn TextEncoder>; 2] = [None, Some(&delimiter)];

    for reg in registries {
        for enc in encoders {
            for delim in delimiters {
                assert_eq!(Path::ROOT.string_with(reg, enc, delim).unwrap(), "/");
            }
        }
    }
    assert_eq!(Path::ROOT.expanded_string(Some(&encoder)), "/");
    assert_eq!(Path::ROOT.expanded_string(None), "/");
    assert_eq!(Path::ROOT.to_string(), "/");
}

// ============================================================================
// Relativization and resolution
// ============================================================================

#[test]
fn test_relative_to_is_one_parent_reference_per_base_segment() {
    assert_eq!(Path::ROOT.relative_to(&path("/a")).unwrap().to_string(), "..");
    assert_eq!(Path::ROOT.relative_to(&path("/a/b")).unwrap().to_string(), "../..");

    for n in 1..=10 {
        let mut fixture = PathFixture::absolute();
        for i in 0..n {
            fixture = fixture.name(&format!("s{i}"));
        }
        let base = fixture.build();
        let expected = vec![".."; n].join("/");
        assert_eq!(Path::ROOT.relative_to(&base).unwrap().to_string(), expected);
    }
}

#[test]
fn test_resolving_relative_paths_against_root() {
    let relative = PathFixture::relative().name("a").indexed("b", 2).build();
    let resolved = Path::ROOT.resolve(&relative).unwrap();
    assert!(resolved.is_absolute());
    assert_eq!(resolved.segments(), relative.segments());
}

#[test]
fn test_resolving_absolute_path_against_root_fails() {
    assert!(Path::ROOT.resolve(&path("/a")).unwrap_err().is_invalid_path());
    assert!(Path::ROOT.resolve(&Path::ROOT).unwrap_err().is_invalid_path());
}

// ============================================================================
// Ordering and equality
// ============================================================================

#[test]
fn test_root_sorts_before_every_other_path() {
    for other in others() {
        assert_eq!(Path::ROOT.cmp(&other), Ordering::Less, "{other}");
        assert_ne!(Path::ROOT, other);
    }
}

#[test]
fn test_roots_are_equal() {
    let other = Path::absolute(Vec::<Segment>::new());
    assert_eq!(Path::ROOT.cmp(&other), Ordering::Equal);
    assert_eq!(Path::ROOT, other);
}

#[test]
fn test_paths_from_root_yields_only_root() {
    let mut chain = Path::ROOT.paths_from_root();
    assert_eq!(chain.next(), Some(Path::ROOT));
    assert_eq!(chain.next(), None);
}
