//! Canonical node addressing.
//!
//! Every node reachable from a root value has one [`CanonicalPath`], built
//! with the same grammar filters use: the root is `""`, an object field
//! appends `.key` (bare `key` at the top level) and an array element
//! appends `[index]`. Paths are keyed off structure only, so they stay
//! stable across re-renders of an unchanged value.

use crate::error::{FilterError, Result};
use crate::tokenizer::tokenize;
use crate::types::PathSegment;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The location of a node inside a specific JSON value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalPath(String);

/// A single step from a container to one of its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKey<'a> {
    Key(&'a str),
    Index(usize),
}

impl CanonicalPath {
    /// The path of the root value.
    pub fn root() -> Self {
        Self(String::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The path of a child of the node at `self`.
    pub fn child(&self, key: PathKey<'_>) -> Self {
        match key {
            PathKey::Key(k) if self.is_root() => Self(k.to_string()),
            PathKey::Key(k) => Self(format!("{}.{}", self.0, k)),
            PathKey::Index(i) => Self(format!("{}[{}]", self.0, i)),
        }
    }

    /// Shorthand for `child(PathKey::Key(key))`.
    pub fn key(&self, key: &str) -> Self {
        self.child(PathKey::Key(key))
    }

    /// Shorthand for `child(PathKey::Index(index))`.
    pub fn index(&self, index: usize) -> Self {
        self.child(PathKey::Index(index))
    }

    /// The filter that selects this node from the root value.
    ///
    /// ```
    /// use treepath_core::CanonicalPath;
    ///
    /// let users = CanonicalPath::root().key("users");
    /// assert_eq!(users.index(0).key("name").to_filter_expression(), ".users[0].name");
    /// assert_eq!(CanonicalPath::root().index(2).to_filter_expression(), "[2]");
    /// assert_eq!(CanonicalPath::root().to_filter_expression(), ".");
    /// ```
    pub fn to_filter_expression(&self) -> String {
        if self.is_root() {
            ".".to_string()
        } else if self.0.starts_with('[') {
            self.0.clone()
        } else {
            format!(".{}", self.0)
        }
    }

    /// Rebuild a path from filter text such as `.users[0].name` or `[2]`.
    ///
    /// Only single-node paths qualify: `.` and the empty string give the
    /// root, and an iteration marker is rejected as malformed.
    pub fn from_filter_expression(filter: &str) -> Result<Self> {
        let filter = filter.trim();
        let suffix = filter.strip_prefix('.').unwrap_or(filter);
        let mut path = Self::root();
        for segment in tokenize(suffix)? {
            path = match segment {
                PathSegment::Key(k) => path.key(&k),
                PathSegment::Index(i) => path.index(i),
                PathSegment::Iterate => {
                    return Err(FilterError::MalformedPath {
                        path: filter.to_string(),
                        reason: "'[]' does not address a single node".to_string(),
                    })
                }
            };
        }
        Ok(path)
    }
}

impl fmt::Display for CanonicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Free-function form of [`CanonicalPath::child`].
pub fn canonical_path_for(parent: &CanonicalPath, key: PathKey<'_>) -> CanonicalPath {
    parent.child(key)
}

/// Free-function form of [`CanonicalPath::to_filter_expression`].
pub fn to_filter_expression(path: &CanonicalPath) -> String {
    path.to_filter_expression()
}

/// Every node's path, root first, depth-first in document order.
pub fn all_paths(value: &Value) -> Vec<CanonicalPath> {
    let mut out = Vec::new();
    collect_paths(value, CanonicalPath::root(), &mut out);
    out
}

fn collect_paths(value: &Value, path: CanonicalPath, out: &mut Vec<CanonicalPath>) {
    match value {
        Value::Object(map) => {
            out.push(path.clone());
            for (key, child) in map {
                collect_paths(child, path.key(key), out);
            }
        }
        Value::Array(arr) => {
            out.push(path.clone());
            for (i, child) in arr.iter().enumerate() {
                collect_paths(child, path.index(i), out);
            }
        }
        _ => out.push(path),
    }
}
