//! Collapse/expand state for a rendered tree, keyed by [`CanonicalPath`].
//!
//! A missing entry means "expanded", so expanding everything is a clear
//! rather than a rewrite of every entry.

use crate::path::CanonicalPath;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Which container nodes of a value are collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollapseState {
    entries: BTreeMap<CanonicalPath, bool>,
}

impl CollapseState {
    /// Everything expanded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collapse every non-empty array and object of `value`, at every depth.
    pub fn collapse_all(value: &Value) -> Self {
        let mut state = Self::new();
        mark_containers(value, CanonicalPath::root(), &mut state.entries);
        state
    }

    /// Expand every node.
    pub fn expand_all(&mut self) {
        self.entries.clear();
    }

    pub fn is_collapsed(&self, path: &CanonicalPath) -> bool {
        self.entries.get(path).copied().unwrap_or(false)
    }

    pub fn set_collapsed(&mut self, path: CanonicalPath, collapsed: bool) {
        if collapsed {
            self.entries.insert(path, true);
        } else {
            self.entries.remove(&path);
        }
    }

    /// Flip one node. Returns the new collapsed flag.
    pub fn toggle(&mut self, path: &CanonicalPath) -> bool {
        let collapsed = !self.is_collapsed(path);
        self.set_collapsed(path.clone(), collapsed);
        collapsed
    }

    /// Collapsed paths in sorted order.
    pub fn collapsed_paths(&self) -> impl Iterator<Item = &CanonicalPath> {
        self.entries
            .iter()
            .filter(|(_, collapsed)| **collapsed)
            .map(|(path, _)| path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Free-function form of [`CollapseState::collapse_all`].
pub fn collapse_all(value: &Value) -> CollapseState {
    CollapseState::collapse_all(value)
}

fn mark_containers(value: &Value, path: CanonicalPath, entries: &mut BTreeMap<CanonicalPath, bool>) {
    match value {
        Value::Array(arr) if !arr.is_empty() => {
            for (i, child) in arr.iter().enumerate() {
                mark_containers(child, path.index(i), entries);
            }
            entries.insert(path, true);
        }
        Value::Object(map) if !map.is_empty() => {
            for (key, child) in map {
                mark_containers(child, path.key(key), entries);
            }
            entries.insert(path, true);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn toggle_round_trips_to_absent() {
        let mut state = CollapseState::new();
        let p = CanonicalPath::root().key("a");
        assert!(state.toggle(&p));
        assert!(state.is_collapsed(&p));
        assert!(!state.toggle(&p));
        assert!(state.is_empty());
    }

    #[test]
    fn serializes_as_path_map() {
        let state = CollapseState::collapse_all(&json!({"a": [1]}));
        assert_eq!(serde_json::to_value(&state).unwrap(), json!({"": true, "a": true}));
    }
}
