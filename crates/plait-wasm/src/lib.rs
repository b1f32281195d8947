//! WASM bindings for the plait example grammars.
//!
//! Exposes the arithmetic evaluator, the CSV reader and the HTML parser and
//! formatter to JavaScript via wasm-bindgen. Parse failures are thrown as JS
//! errors carrying the rendered diagnostic.

use plait::{end_of_input, ParseError, Parser};
use plait_grammars::csv::{self, Cell, Record};
use plait_grammars::html::{self, Node, SerializeOptions};
use wasm_bindgen::prelude::*;

fn to_js_error(error: ParseError) -> JsError {
    JsError::new(&error.to_string())
}

/// Runs `grammar` over the whole of `source`.
fn parse_all<T: Clone + 'static>(grammar: Parser<T>, source: &str) -> Result<T, ParseError> {
    grammar.skip_trailing(end_of_input()).parse_value(source)
}

fn html_nodes(source: &str, document: bool) -> Result<Vec<Node>, ParseError> {
    let grammar = if document {
        html::document()
    } else {
        html::fragments()
    };
    parse_all(grammar, source)
}

fn format(source: &str, remove_comments: bool) -> Result<String, ParseError> {
    let nodes = html_nodes(source, false)?;
    Ok(html::serialize_fragments(&nodes, SerializeOptions { remove_comments }))
}

fn records(source: &str) -> Result<Vec<Record>, ParseError> {
    parse_all(csv::csv(), source)
}

/// Evaluate an arithmetic expression.
///
/// Throws a JS error if the expression is malformed.
#[wasm_bindgen]
pub fn evaluate(source: &str) -> Result<f64, JsError> {
    plait_grammars::arithmetic::evaluate(source).map_err(to_js_error)
}

/// Parse HTML into a tree of plain JS objects.
///
/// With `document` set, a doctype and a single root element are expected.
#[wasm_bindgen(js_name = parseHtml)]
pub fn parse_html(source: &str, document: bool) -> Result<JsValue, JsError> {
    let nodes = html_nodes(source, document).map_err(to_js_error)?;
    serde_wasm_bindgen::to_value(&nodes).map_err(|e| JsError::new(&e.to_string()))
}

/// Parse an HTML fragment and serialize it back, optionally without comments.
#[wasm_bindgen(js_name = formatHtml)]
pub fn format_html(source: &str, remove_comments: bool) -> Result<String, JsError> {
    format(source, remove_comments).map_err(to_js_error)
}

/// Parse CSV into an array of `{ heading: value }` objects.
///
/// Numbers become JS numbers, quoted cells strings.
#[wasm_bindgen(js_name = parseCsv)]
pub fn parse_csv(source: &str) -> Result<JsValue, JsError> {
    let rows = js_sys::Array::new();
    for record in records(source).map_err(to_js_error)? {
        let row = js_sys::Object::new();
        for (name, cell) in record {
            let value = match cell {
                Cell::Text(text) => JsValue::from_str(&text),
                Cell::Number(number) => JsValue::from_f64(number as f64),
            };
            js_sys::Reflect::set(&row, &JsValue::from_str(&name), &value)
                .map_err(|_| JsError::new("Failed to set record field"))?;
        }
        rows.push(&row);
    }
    Ok(rows.into())
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
