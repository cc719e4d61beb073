//! Filter evaluation: stage dispatch, segment folding and `|` pipelines.
//!
//! A filter is a `|`-separated list of stages, applied left to right, each
//! consuming the previous stage's output. A stage is either a special
//! function name (`keys`, `length`, `type`) or a path beginning with `.`
//! (or with `[`, so that canonical paths rooted at an array index such as
//! `[0].name` can be pasted back in directly).
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use treepath_core::evaluate_filter;
//!
//! let data = json!({"items": [{"name": "a"}, {"name": "b"}]});
//! assert_eq!(evaluate_filter(&data, ".items[].name").unwrap(), json!(["a", "b"]));
//! assert_eq!(evaluate_filter(&data, ".items | length").unwrap(), json!(2));
//! ```

use crate::error::{FilterError, Result};
use crate::functions::apply_function;
use crate::tokenizer::tokenize;
use crate::types::{PathSegment, SpecialFunction, ValueKind};
use serde_json::Value;

/// One compiled `|`-separated unit of a filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    Function(SpecialFunction),
    /// An empty path is the identity.
    Path(Vec<PathSegment>),
}

impl Stage {
    /// Compile a single stage's text. Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// [`FilterError::UnsupportedExpression`] when the text is neither a
    /// function name nor a path; [`FilterError::MalformedPath`] when the
    /// path does not tokenize.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        if let Some(function) = SpecialFunction::from_name(text) {
            return Ok(Stage::Function(function));
        }
        if text.is_empty() {
            return Ok(Stage::Path(Vec::new()));
        }
        if let Some(suffix) = text.strip_prefix('.') {
            return Ok(Stage::Path(tokenize(suffix)?));
        }
        if text.starts_with('[') {
            return Ok(Stage::Path(tokenize(text)?));
        }
        Err(FilterError::UnsupportedExpression(text.to_string()))
    }

    /// Run this stage against `value`, producing a fresh value.
    pub fn apply(&self, value: &Value) -> Result<Value> {
        match self {
            Stage::Function(function) => apply_function(*function, value),
            Stage::Path(segments) => fold_segments(value, segments),
        }
    }

    fn is_identity(&self) -> bool {
        matches!(self, Stage::Path(segments) if segments.is_empty())
    }
}

/// A whole filter compiled up front.
///
/// [`evaluate_filter`] compiles stage by stage as it goes, so an early
/// runtime error wins over a later syntax error. Compiling the pipeline
/// first reports every syntax error before touching any data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterPipeline {
    stages: Vec<Stage>,
}

impl FilterPipeline {
    /// Compile every stage of `filter`. Identity stages are dropped.
    pub fn parse(filter: &str) -> Result<Self> {
        let mut stages = Vec::new();
        for part in filter.split('|') {
            let stage = Stage::parse(part)?;
            if !stage.is_identity() {
                stages.push(stage);
            }
        }
        Ok(Self { stages })
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Apply the stages in order, stopping at the first error.
    pub fn apply(&self, value: &Value) -> Result<Value> {
        let mut current = value.clone();
        for stage in &self.stages {
            current = stage.apply(&current)?;
        }
        Ok(current)
    }
}

/// Evaluate one stage's text against a value.
///
/// Special function names are checked before path parsing.
pub fn evaluate(value: &Value, stage_text: &str) -> Result<Value> {
    Stage::parse(stage_text)?.apply(value)
}

/// Evaluate a full `|`-separated filter against a value.
///
/// Empty parts and parts that are exactly `.` are skipped. The first error
/// aborts the pipeline and is returned on its own; results of earlier
/// stages are discarded.
///
/// # Errors
///
/// Any [`FilterError`] raised by the first failing stage.
pub fn evaluate_filter(value: &Value, filter: &str) -> Result<Value> {
    let mut current = value.clone();
    for part in filter.split('|').map(str::trim) {
        if part.is_empty() || part == "." {
            continue;
        }
        log::debug!("evaluating stage {:?} against {}", part, ValueKind::of(&current));
        current = evaluate(&current, part)?;
    }
    Ok(current)
}

/// Fold a segment list against a value.
///
/// `Iterate` is the only branching step: as the last segment it returns the
/// array unchanged; otherwise the remaining segments are folded over each
/// element and collected, in order, into a new array. An error from any
/// element aborts the whole fold.
pub fn fold_segments(value: &Value, segments: &[PathSegment]) -> Result<Value> {
    let Some((segment, rest)) = segments.split_first() else {
        return Ok(value.clone());
    };

    if value.is_null() {
        return Err(FilterError::NullTraversal {
            segment: segment.to_string(),
        });
    }

    match (segment, value) {
        (PathSegment::Key(name), Value::Object(map)) => match map.get(name) {
            Some(child) => fold_segments(child, rest),
            None => Err(FilterError::KeyNotFound(name.clone())),
        },
        (PathSegment::Key(name), Value::Array(_)) => Err(FilterError::TypeMismatch {
            expected: ValueKind::Object,
            actual: ValueKind::Array,
            context: format!("access key \"{}\" (use an index instead)", name),
        }),
        (PathSegment::Key(name), other) => Err(FilterError::TypeMismatch {
            expected: ValueKind::Object,
            actual: ValueKind::of(other),
            context: format!("access key \"{}\"", name),
        }),
        (PathSegment::Index(index), Value::Array(arr)) => match arr.get(*index) {
            Some(child) => fold_segments(child, rest),
            None => Err(FilterError::IndexOutOfBounds {
                index: *index,
                length: arr.len(),
            }),
        },
        (PathSegment::Iterate, Value::Array(arr)) => {
            if rest.is_empty() {
                return Ok(value.clone());
            }
            arr.iter()
                .map(|elem| fold_segments(elem, rest))
                .collect::<Result<Vec<_>>>()
                .map(Value::Array)
        }
        (PathSegment::Index(index), other) => Err(FilterError::TypeMismatch {
            expected: ValueKind::Array,
            actual: ValueKind::of(other),
            context: format!("index [{}]", index),
        }),
        (PathSegment::Iterate, other) => Err(FilterError::TypeMismatch {
            expected: ValueKind::Array,
            actual: ValueKind::of(other),
            context: "iterate".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn stage_parse_trims_and_dispatches() {
        assert_eq!(
            Stage::parse("  length ").unwrap(),
            Stage::Function(SpecialFunction::Length)
        );
        assert_eq!(Stage::parse(".").unwrap(), Stage::Path(vec![]));
        assert_eq!(Stage::parse(".[]").unwrap(), Stage::Path(vec![PathSegment::Iterate]));
    }

    #[test]
    fn pipeline_drops_identity_stages() {
        let pipeline = FilterPipeline::parse(". | .a | | keys").unwrap();
        assert_eq!(pipeline.stages().len(), 2);
    }

    #[test]
    fn pipeline_reports_syntax_errors_before_running() {
        let err = FilterPipeline::parse(".missing | nope").unwrap_err();
        assert_eq!(err, FilterError::UnsupportedExpression("nope".into()));
    }

    #[test]
    fn lazy_evaluation_reports_the_first_runtime_error() {
        let err = evaluate_filter(&json!({}), ".missing | nope").unwrap_err();
        assert_eq!(err, FilterError::KeyNotFound("missing".into()));
    }

    #[test]
    fn fold_of_empty_segments_is_identity() {
        let v = json!({"a": [1, 2]});
        assert_eq!(fold_segments(&v, &[]).unwrap(), v);
    }
}
