//! The `keys`, `length` and `type` stages.

use crate::error::{FilterError, Result};
use crate::types::{SpecialFunction, ValueKind};
use serde_json::Value;

/// Apply a special function to the running value.
///
/// - `keys`: object keys in document order, or `"0".."n-1"` for arrays
/// - `length`: element count, key count, or string length in characters
/// - `type`: the value's tag name
pub fn apply_function(function: SpecialFunction, value: &Value) -> Result<Value> {
    match function {
        SpecialFunction::Keys => keys(value),
        SpecialFunction::Length => length(value),
        SpecialFunction::Type => Ok(Value::String(ValueKind::of(value).as_str().to_string())),
    }
}

fn keys(value: &Value) -> Result<Value> {
    match value {
        Value::Object(map) => Ok(Value::Array(
            map.keys().map(|k| Value::String(k.clone())).collect(),
        )),
        Value::Array(arr) => Ok(Value::Array(
            (0..arr.len()).map(|i| Value::String(i.to_string())).collect(),
        )),
        other => Err(FilterError::TypeMismatch {
            expected: ValueKind::Object,
            actual: ValueKind::of(other),
            context: "get keys".to_string(),
        }),
    }
}

fn length(value: &Value) -> Result<Value> {
    let len = match value {
        Value::Array(arr) => arr.len(),
        Value::Object(map) => map.len(),
        Value::String(s) => s.chars().count(),
        other => {
            return Err(FilterError::TypeMismatch {
                expected: ValueKind::Array,
                actual: ValueKind::of(other),
                context: "get length".to_string(),
            })
        }
    };
    Ok(Value::from(len))
}
