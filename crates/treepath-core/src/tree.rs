//! Plain-text tree view of a value, honouring a [`CollapseState`].
//!
//! ```text
//! {
//!   "users": [
//!     0: {
//!       "name": "Alice"
//!     },
//!     1: { 1 keys }
//!   ],
//!   "tags": []
//! }
//! ```
//!
//! Array children carry their index, object children their quoted key.
//! Collapsed containers are summarised on one line.

use crate::collapse::CollapseState;
use crate::path::CanonicalPath;
use serde_json::Value;

const INDENT: &str = "  ";

/// Render `value` as an indented tree.
pub fn render_tree(value: &Value, state: &CollapseState) -> String {
    let mut out = String::new();
    render_node(value, &CanonicalPath::root(), state, 0, &mut out);
    out
}

fn render_node(
    value: &Value,
    path: &CanonicalPath,
    state: &CollapseState,
    depth: usize,
    out: &mut String,
) {
    match value {
        Value::Array(arr) if arr.is_empty() => out.push_str("[]"),
        Value::Object(map) if map.is_empty() => out.push_str("{}"),
        Value::Array(arr) if state.is_collapsed(path) => {
            out.push_str(&format!("[ {} items ]", arr.len()));
        }
        Value::Object(map) if state.is_collapsed(path) => {
            out.push_str(&format!("{{ {} keys }}", map.len()));
        }
        Value::Array(arr) => {
            out.push_str("[\n");
            for (i, child) in arr.iter().enumerate() {
                push_indent(depth + 1, out);
                out.push_str(&format!("{}: ", i));
                render_node(child, &path.index(i), state, depth + 1, out);
                push_separator(i + 1 < arr.len(), out);
            }
            push_indent(depth, out);
            out.push(']');
        }
        Value::Object(map) => {
            out.push_str("{\n");
            for (i, (key, child)) in map.iter().enumerate() {
                push_indent(depth + 1, out);
                out.push_str(&quote(key));
                out.push_str(": ");
                render_node(child, &path.key(key), state, depth + 1, out);
                push_separator(i + 1 < map.len(), out);
            }
            push_indent(depth, out);
            out.push('}');
        }
        scalar => out.push_str(&scalar.to_string()),
    }
}

fn push_indent(depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

fn push_separator(more: bool, out: &mut String) {
    if more {
        out.push(',');
    }
    out.push('\n');
}

fn quote(key: &str) -> String {
    Value::String(key.to_string()).to_string()
}
