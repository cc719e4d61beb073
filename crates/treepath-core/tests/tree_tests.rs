/// Text tree rendering tests.
use serde_json::json;
use treepath_core::{collapse_all, render_tree, CanonicalPath, CollapseState};

#[test]
fn scalars_render_as_json_literals() {
    let state = CollapseState::new();
    assert_eq!(render_tree(&json!(null), &state), "null");
    assert_eq!(render_tree(&json!(true), &state), "true");
    assert_eq!(render_tree(&json!(3.5), &state), "3.5");
    assert_eq!(render_tree(&json!("a\"b"), &state), r#""a\"b""#);
}

#[test]
fn empty_containers() {
    let state = CollapseState::new();
    assert_eq!(render_tree(&json!([]), &state), "[]");
    assert_eq!(render_tree(&json!({}), &state), "{}");
}

#[test]
fn expanded_tree_layout() {
    let value = json!({"users": [{"name": "Alice"}, {"name": "Bob"}], "tags": []});
    let expected = "\
{
  \"users\": [
    0: {
      \"name\": \"Alice\"
    },
    1: {
      \"name\": \"Bob\"
    }
  ],
  \"tags\": []
}";
    assert_eq!(render_tree(&value, &CollapseState::new()), expected);
}

#[test]
fn collapsed_nodes_are_summarised() {
    let value = json!({"users": [{"name": "Alice"}, {"name": "Bob", "age": 3}], "n": 1});
    let mut state = CollapseState::new();
    state.set_collapsed(CanonicalPath::root().key("users").index(1), true);
    let expected = "\
{
  \"users\": [
    0: {
      \"name\": \"Alice\"
    },
    1: { 2 keys }
  ],
  \"n\": 1
}";
    assert_eq!(render_tree(&value, &state), expected);
}

#[test]
fn collapse_all_summarises_root() {
    let value = json!([1, 2, 3]);
    assert_eq!(render_tree(&value, &collapse_all(&value)), "[ 3 items ]");
    let obj = json!({"a": {"b": 1}});
    assert_eq!(render_tree(&obj, &collapse_all(&obj)), "{ 1 keys }");
}
