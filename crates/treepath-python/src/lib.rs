//! # treepath-python
//!
//! Python bindings for treepath-core, built with PyO3.
//!
//! Exposes the following functions to Python as the `treepath` module:
//!
//! - `evaluate_filter(json, filter)` -- JSON string -> filtered JSON string
//! - `format_json(json)` -- JSON string -> pretty-printed JSON string
//! - `collapse_all(json)` -- JSON string -> list of collapsed canonical paths
//! - `all_paths(json)` -- JSON string -> list of filter expressions, one per node

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

fn value_error(e: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Apply a filter to a JSON string.
///
/// Args:
///     json: A valid JSON string.
///     filter: A filter such as ".items[].name | length".
///
/// Returns:
///     The result as a compact JSON string.
///
/// Raises:
///     ValueError: If the input is not valid JSON or the filter fails.
#[pyfunction]
fn evaluate_filter(json: &str, filter: &str) -> PyResult<String> {
    let result = treepath_core::filter_json(json, filter).map_err(value_error)?;
    serde_json::to_string(&result).map_err(value_error)
}

/// Pretty-print a JSON string with two-space indentation.
///
/// Raises:
///     ValueError: If the input is not valid JSON.
#[pyfunction]
fn format_json(json: &str) -> PyResult<String> {
    treepath_core::format_json(json).map_err(value_error)
}

/// Canonical paths of every non-empty array and object, sorted.
///
/// Raises:
///     ValueError: If the input is not valid JSON.
#[pyfunction]
fn collapse_all(json: &str) -> PyResult<Vec<String>> {
    let value = treepath_core::parse_value(json).map_err(value_error)?;
    Ok(treepath_core::collapse_all(&value)
        .collapsed_paths()
        .map(|p| p.to_string())
        .collect())
}

/// Filter expressions selecting every node, root first, in document order.
///
/// Raises:
///     ValueError: If the input is not valid JSON.
#[pyfunction]
fn all_paths(json: &str) -> PyResult<Vec<String>> {
    let value = treepath_core::parse_value(json).map_err(value_error)?;
    Ok(treepath_core::all_paths(&value)
        .iter()
        .map(|p| p.to_filter_expression())
        .collect())
}

/// The `treepath` Python module, implemented in Rust via PyO3.
#[pymodule]
fn treepath(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(evaluate_filter, m)?)?;
    m.add_function(wrap_pyfunction!(format_json, m)?)?;
    m.add_function(wrap_pyfunction!(collapse_all, m)?)?;
    m.add_function(wrap_pyfunction!(all_paths, m)?)?;
    Ok(())
}
