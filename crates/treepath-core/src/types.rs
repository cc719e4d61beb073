//! Shared types: value tags, path segments and the special functions.
//!
//! Values themselves are `serde_json::Value` (built with `preserve_order`,
//! so object keys keep their document order). This module only adds the
//! vocabulary the tokenizer and evaluator speak in.

use serde_json::Value;
use std::fmt;

/// The tag of a JSON value, as reported by the `type` function and in
/// type-mismatch diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// Classify a value. Arrays are reported distinctly from objects.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One navigation step within a stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Object field access, e.g. `.name`.
    Key(String),
    /// Array element access, e.g. `[0]`.
    Index(usize),
    /// Every element of an array, written `[]`.
    Iterate,
}

/// Renders the segment back in filter syntax (`.name`, `[0]`, `[]`).
impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(name) => write!(f, ".{}", name),
            PathSegment::Index(i) => write!(f, "[{}]", i),
            PathSegment::Iterate => f.write_str("[]"),
        }
    }
}

/// The built-in functions a stage may name instead of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialFunction {
    Keys,
    Length,
    Type,
}

impl SpecialFunction {
    /// Look up a stage by exact name. Returns `None` for anything else.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "keys" => Some(SpecialFunction::Keys),
            "length" => Some(SpecialFunction::Length),
            "type" => Some(SpecialFunction::Type),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SpecialFunction::Keys => "keys",
            SpecialFunction::Length => "length",
            SpecialFunction::Type => "type",
        }
    }
}
