/// Property-based tests for the filter evaluator and path addressing.
///
/// Strategies generate arbitrary nested JSON values whose keys follow the
/// bare-word grammar (no `.`, `[`, `]` or `|`, no surrounding whitespace),
/// since those are the only keys a canonical path can express.
use proptest::prelude::*;
use serde_json::{Map, Value};
use treepath_core::{all_paths, collapse_all, evaluate_filter, CollapseState, FilterPipeline};

// ============================================================================
// Strategies
// ============================================================================

fn arb_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z_][a-zA-Z0-9_-]{0,8}").unwrap()
}

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(Value::from),
        "[a-z ]{0,10}".prop_map(Value::String),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(4, 48, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
            prop::collection::vec((arb_key(), inner), 0..5).prop_map(|pairs| {
                let mut map = Map::new();
                for (k, v) in pairs {
                    map.insert(k, v);
                }
                Value::Object(map)
            }),
        ]
    })
}

/// Pointer lookup that does not go through the evaluator.
fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let pointer: String = path
        .split(|c: char| c == '.' || c == '[' || c == ']')
        .filter(|s| !s.is_empty())
        .map(|s| format!("/{}", s))
        .collect();
    root.pointer(&pointer)
}

fn count_non_empty_containers(value: &Value) -> usize {
    match value {
        Value::Array(arr) if !arr.is_empty() => {
            1 + arr.iter().map(count_non_empty_containers).sum::<usize>()
        }
        Value::Object(map) if !map.is_empty() => {
            1 + map.values().map(count_non_empty_containers).sum::<usize>()
        }
        _ => 0,
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn identity_filters_return_input(v in arb_value()) {
        prop_assert_eq!(evaluate_filter(&v, ".").unwrap(), v.clone());
        prop_assert_eq!(evaluate_filter(&v, "").unwrap(), v);
    }

    #[test]
    fn every_canonical_path_selects_its_node(v in arb_value()) {
        for path in all_paths(&v) {
            let filter = path.to_filter_expression();
            let selected = evaluate_filter(&v, &filter);
            prop_assert!(selected.is_ok(), "filter {:?} failed: {:?}", filter, selected);
            let selected = selected.unwrap();
            prop_assert_eq!(Some(&selected), lookup(&v, path.as_str()));
        }
    }

    #[test]
    fn pipe_split_equals_joined_path(a in arb_key(), b in arb_key(), leaf in arb_scalar()) {
        let mut inner = Map::new();
        inner.insert(b.clone(), leaf);
        let mut outer = Map::new();
        outer.insert(a.clone(), Value::Object(inner));
        let v = Value::Object(outer);

        let piped = evaluate_filter(&v, &format!(".{} | .{}", a, b));
        let joined = evaluate_filter(&v, &format!(".{}.{}", a, b));
        prop_assert_eq!(piped, joined);
    }

    #[test]
    fn collapse_all_covers_non_empty_containers(v in arb_value()) {
        let mut state = collapse_all(&v);
        prop_assert_eq!(state.len(), count_non_empty_containers(&v));
        for path in all_paths(&v) {
            let node = lookup(&v, path.as_str()).unwrap();
            let is_container = match node {
                Value::Array(a) => !a.is_empty(),
                Value::Object(m) => !m.is_empty(),
                _ => false,
            };
            prop_assert_eq!(state.is_collapsed(&path), is_container);
        }
        state.expand_all();
        prop_assert_eq!(state, CollapseState::new());
    }

    #[test]
    fn arbitrary_filter_text_never_panics(v in arb_value(), filter in "[a-z.\\[\\]0-9| ]{0,24}") {
        let lazy = evaluate_filter(&v, &filter);
        if let Ok(pipeline) = FilterPipeline::parse(&filter) {
            // With no syntax errors both strategies agree.
            prop_assert_eq!(pipeline.apply(&v), lazy);
        }
    }
}
