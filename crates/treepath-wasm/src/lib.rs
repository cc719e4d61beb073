//! WASM bindings for treepath-core.
//!
//! The tree view in the browser owns rendering and clipboard handling; it
//! calls these functions with raw JSON text and gets JSON text back. Built
//! with `wasm-bindgen-cli`:
//!
//! ```sh
//! cargo build -p treepath-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir web/pkg/ \
//!   target/wasm32-unknown-unknown/release/treepath_wasm.wasm
//! ```

use treepath_core::CanonicalPath;
use wasm_bindgen::prelude::*;

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Apply a filter to a JSON document and return the result as compact JSON.
///
/// Throws a JS error carrying the parse or filter message.
#[wasm_bindgen(js_name = evaluateFilter)]
pub fn evaluate_filter(json: &str, filter: &str) -> Result<String, JsValue> {
    let result = treepath_core::filter_json(json, filter).map_err(js_err)?;
    serde_json::to_string(&result).map_err(js_err)
}

/// Pretty-print a JSON document with two-space indentation.
#[wasm_bindgen(js_name = formatJson)]
pub fn format_json(json: &str) -> Result<String, JsValue> {
    treepath_core::format_json(json).map_err(js_err)
}

/// Collapse state with every non-empty container collapsed, as a JSON
/// object mapping canonical path to `true`.
#[wasm_bindgen(js_name = collapseAll)]
pub fn collapse_all(json: &str) -> Result<String, JsValue> {
    let value = treepath_core::parse_value(json).map_err(js_err)?;
    serde_json::to_string(&treepath_core::collapse_all(&value)).map_err(js_err)
}

/// Canonical path of object field `key` under `parent`.
#[wasm_bindgen(js_name = childKeyPath)]
pub fn child_key_path(parent: &str, key: &str) -> Result<String, JsValue> {
    let parent = CanonicalPath::from_filter_expression(parent).map_err(js_err)?;
    Ok(parent.key(key).to_string())
}

/// Canonical path of array element `index` under `parent`.
#[wasm_bindgen(js_name = childIndexPath)]
pub fn child_index_path(parent: &str, index: u32) -> Result<String, JsValue> {
    let parent = CanonicalPath::from_filter_expression(parent).map_err(js_err)?;
    Ok(parent.index(index as usize).to_string())
}

/// The filter that selects the node at a canonical path (`""` → `.`).
#[wasm_bindgen(js_name = toFilterExpression)]
pub fn to_filter_expression(path: &str) -> Result<String, JsValue> {
    let path = CanonicalPath::from_filter_expression(path).map_err(js_err)?;
    Ok(path.to_filter_expression())
}
