//! # treepath-core
//!
//! A small path language for navigating JSON trees, plus the canonical node
//! addressing a tree view needs to stay in sync with it.
//!
//! Filters are `|`-separated stages. Each stage is a path such as
//! `.users[0].name` or `.items[].id`, or one of the special functions
//! `keys`, `length` and `type`.
//!
//! ## Quick start
//!
//! ```rust
//! use treepath_core::{evaluate_filter, parse_value, CanonicalPath};
//!
//! let value = parse_value(r#"{"users":[{"name":"Alice"},{"name":"Bob"}]}"#).unwrap();
//!
//! let names = evaluate_filter(&value, ".users[].name").unwrap();
//! assert_eq!(names, serde_json::json!(["Alice", "Bob"]));
//!
//! // Every node's canonical path doubles as a filter selecting it.
//! let bob = CanonicalPath::root().key("users").index(1).key("name");
//! let filter = bob.to_filter_expression();
//! assert_eq!(filter, ".users[1].name");
//! assert_eq!(evaluate_filter(&value, &filter).unwrap(), "Bob");
//! ```
//!
//! ## Modules
//!
//! - [`tokenizer`] -- path text → [`PathSegment`] list
//! - [`eval`] -- stage dispatch, segment folding, pipelines
//! - [`functions`] -- `keys`, `length`, `type`
//! - [`path`] -- [`CanonicalPath`] construction and filter conversion
//! - [`collapse`] -- [`CollapseState`] for tree views
//! - [`tree`] -- plain-text tree rendering
//! - [`error`] -- error types

pub mod collapse;
pub mod error;
pub mod eval;
pub mod functions;
pub mod path;
pub mod tokenizer;
pub mod tree;
pub mod types;

pub use collapse::{collapse_all, CollapseState};
pub use error::{FilterError, TreepathError};
pub use eval::{evaluate, evaluate_filter, fold_segments, FilterPipeline, Stage};
pub use path::{all_paths, canonical_path_for, to_filter_expression, CanonicalPath, PathKey};
pub use tokenizer::tokenize;
pub use tree::render_tree;
pub use types::{PathSegment, SpecialFunction, ValueKind};

use serde_json::Value;

/// Parse JSON text into a value. Surrounding whitespace is ignored.
pub fn parse_value(text: &str) -> std::result::Result<Value, TreepathError> {
    Ok(serde_json::from_str(text.trim())?)
}

/// Parse JSON text and apply a filter to it.
///
/// A JSON parse failure is returned before any filter stage runs.
///
/// ```
/// use treepath_core::filter_json;
///
/// let out = filter_json(r#"{"a":{"b":7}}"#, ".a | .b").unwrap();
/// assert_eq!(out, 7);
/// assert!(filter_json("{not json", ".").is_err());
/// ```
pub fn filter_json(text: &str, filter: &str) -> std::result::Result<Value, TreepathError> {
    let value = parse_value(text)?;
    Ok(evaluate_filter(&value, filter)?)
}

/// Re-emit JSON text pretty-printed with two-space indentation.
/// Object keys keep their original order.
pub fn format_json(text: &str) -> std::result::Result<String, TreepathError> {
    let value = parse_value(text)?;
    Ok(serde_json::to_string_pretty(&value)?)
}
