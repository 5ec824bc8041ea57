//! Property-based tests - pragmatic approach testing core round-trip guarantees
//!
//! These tests complement the concrete-scenario tests by verifying the
//! flatten/expand relation across generated trees. Keys are drawn from a
//! delimiter-free alphabet; delimiter collisions are a documented lossy case
//! and are covered separately.

use flatpath::{flatten, unflatten, Number, PathOptions, Value};
use proptest::prelude::*;

fn leaf_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(Number::Integer(n))),
        (-1.0e9f64..1.0e9).prop_map(|f| Value::Number(Number::Float(f))),
        "[a-zA-Z0-9 ]{0,12}".prop_map(Value::String),
    ]
}

fn value_strategy() -> impl Strategy<Value = Value> {
    leaf_strategy().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 1..4).prop_map(Value::Array),
            prop::collection::vec(("[a-z][a-z0-9_]{0,6}", inner), 1..4)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

// Roots are containers; a top-level leaf flattens to an empty map and is
// covered by the concrete-scenario tests.
fn root_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        prop::collection::vec(("[a-z][a-z0-9_]{0,6}", value_strategy()), 0..5)
            .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        prop::collection::vec(value_strategy(), 1..5).prop_map(Value::Array),
    ]
}

fn expand_round_trip(root: &Value, options: &PathOptions) -> bool {
    let flat = flatten(root, options);
    match unflatten(&flat, options) {
        Ok(back) => {
            let mut expected = root.clone();
            expected.promote_lists();
            if back == expected {
                true
            } else {
                eprintln!("Round trip mismatch.");
                eprintln!("Original: {:?}", root);
                eprintln!("Expanded: {:?}", back);
                false
            }
        }
        Err(e) => {
            eprintln!("Expand failed: {}", e);
            false
        }
    }
}

fn count_leaves(value: &Value) -> usize {
    match value {
        Value::Array(items) if !items.is_empty() => items.iter().map(count_leaves).sum(),
        Value::Object(map) if !map.is_empty() => map.values().map(count_leaves).sum(),
        _ => 1,
    }
}

proptest! {
    #[test]
    fn prop_round_trip_default(root in root_strategy()) {
        prop_assert!(expand_round_trip(&root, &PathOptions::default()));
    }

    #[test]
    fn prop_round_trip_wrapped(root in root_strategy()) {
        let options = PathOptions::new()
            .with_prefix("{")
            .with_suffix("}")
            .with_suffix_end(true);
        prop_assert!(expand_round_trip(&root, &options));
    }

    #[test]
    fn prop_round_trip_no_list_markers(root in root_strategy()) {
        let options = PathOptions::new()
            .with_suffix("/")
            .with_list_prefix("")
            .with_list_suffix("");
        prop_assert!(expand_round_trip(&root, &options));
    }

    #[test]
    fn prop_flatten_deterministic(root in root_strategy()) {
        let options = PathOptions::default();
        let first = flatten(&root, &options);
        let second = flatten(&root, &options);

        prop_assert_eq!(&first, &second);

        let first_keys: Vec<_> = first.keys().collect();
        let second_keys: Vec<_> = second.keys().collect();
        prop_assert_eq!(first_keys, second_keys);
    }

    #[test]
    fn prop_flat_values_are_leaves(root in root_strategy()) {
        let flat = flatten(&root, &PathOptions::default());
        for value in flat.values() {
            prop_assert!(value.is_leaf());
        }
    }

    #[test]
    fn prop_leaf_count_preserved(root in root_strategy()) {
        let flat = flatten(&root, &PathOptions::default());
        let expected = if root.is_leaf() { 0 } else { count_leaves(&root) };
        prop_assert_eq!(flat.len(), expected);
    }
}
