//! Property-based tests for the path algebra.
//!
//! The submodules carry focused properties for their own operation; this
//! suite checks how the operations agree with each other.

use super::{Path, PathRelationship};
use crate::segment::Segment;
use proptest::prelude::*;

const NS: &str = "http://example.com";

fn namespace_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(NS), Just(""), Just("urn:a/b:c")]
}

// Local names mix plain letters with characters that are structural in the
// text form
fn name_segment_strategy() -> impl Strategy<Value = Segment> {
    (
        namespace_strategy(),
        "[a-d{}:/\\[\\]*|]{1,4}",
        prop::option::of(1u32..4),
    )
        .prop_map(|(ns, name, index)| match index {
            Some(i) => Segment::with_index(ns, name, i).unwrap(),
            None => Segment::new(ns, name).unwrap(),
        })
}

fn any_segment_strategy() -> impl Strategy<Value = Segment> {
    prop_oneof![
        6 => name_segment_strategy(),
        1 => Just(Segment::self_reference()),
        1 => Just(Segment::parent_reference()),
    ]
}

fn absolute_path_strategy() -> impl Strategy<Value = Path> {
    prop::collection::vec(name_segment_strategy(), 0..6).prop_map(Path::absolute)
}

fn any_path_strategy() -> impl Strategy<Value = Path> {
    (prop::collection::vec(any_segment_strategy(), 0..6), any::<bool>())
        .prop_map(|(segments, absolute)| Path::new(segments, absolute))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Normalization is idempotent and its output reports itself normalized
    #[test]
    fn normalization_idempotent(path in any_path_strategy()) {
        if let Ok(once) = path.normalized() {
            prop_assert!(once.is_normalized());
            prop_assert_eq!(once.normalized().unwrap(), once.clone());
            prop_assert_eq!(path.canonical().unwrap(), once);
        }
    }

    // Ordering agrees with equality
    #[test]
    fn ordering_consistent_with_eq(p1 in any_path_strategy(), p2 in any_path_strategy()) {
        prop_assert_eq!(p1.cmp(&p2) == std::cmp::Ordering::Equal, p1 == p2);
        prop_assert_eq!(p1.cmp(&p2), p2.cmp(&p1).reverse());
    }

    // The root sorts first and is above every path
    #[test]
    fn root_is_minimal(path in any_path_strategy()) {
        prop_assert!(Path::ROOT <= path);
        prop_assert!(Path::ROOT.is_at_or_above(&path));
        prop_assert!(!Path::ROOT.is_descendant_of(&path));
    }

    // Ancestor and descendant are mirror images
    #[test]
    fn ancestor_descendant_symmetry(p1 in any_path_strategy(), p2 in any_path_strategy()) {
        prop_assert_eq!(p1.is_ancestor_of(&p2), p2.is_descendant_of(&p1));
    }

    // Every path from the root is at or above the path, in increasing order
    #[test]
    fn paths_from_root_are_ancestors(path in absolute_path_strategy()) {
        let chain: Vec<Path> = path.paths_from_root().collect();
        prop_assert_eq!(chain.len(), path.size() + 1);
        prop_assert_eq!(chain.last(), Some(&path));
        for pair in chain.windows(2) {
            prop_assert!(pair[0].is_ancestor_of(&pair[1]));
            prop_assert!(pair[0] < pair[1]);
        }
    }

    // Relationship classification agrees with the ancestry predicates
    #[test]
    fn relationship_matches_predicates(p1 in any_path_strategy(), p2 in any_path_strategy()) {
        let expected = if p1 == p2 {
            PathRelationship::Same
        } else if p1.is_ancestor_of(&p2) {
            PathRelationship::Ancestor
        } else if p1.is_descendant_of(&p2) {
            PathRelationship::Descendant
        } else {
            PathRelationship::Unrelated
        };
        prop_assert_eq!(PathRelationship::between(&p1, &p2), expected);
    }

    // Relativizing then resolving gives back the normalized path
    #[test]
    fn relativize_resolve_inverse(p in absolute_path_strategy(), q in absolute_path_strategy()) {
        let relative = p.relative_to(&q).unwrap();
        prop_assert_eq!(q.resolve(&relative).unwrap(), p);
    }

    // The common ancestor is at or above both paths
    #[test]
    fn common_ancestor_is_above_both(p1 in absolute_path_strategy(), p2 in absolute_path_strategy()) {
        let common = p1.common_ancestor(&p2);
        prop_assert!(common.is_at_or_above(&p1) || p1.is_root());
        prop_assert!(common.is_at_or_above(&p2) || p2.is_root());
    }

    // Display output parses back to an equal path
    #[test]
    fn display_parse_round_trip(path in any_path_strategy()) {
        let text = path.to_string();
        prop_assert_eq!(text.parse::<Path>().unwrap(), path);
    }

    // Every index in range is readable and the first out-of-range index fails
    #[test]
    fn segment_access_bounds(path in any_path_strategy()) {
        for i in 0..path.size() {
            prop_assert!(path.segment(i).is_ok());
        }
        prop_assert!(path.segment(path.size()).unwrap_err().is_index_out_of_range());
    }
}
