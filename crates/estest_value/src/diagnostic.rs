//! Diagnostic rendering of values for assertion failure messages.
//!
//! The output is for humans only and is never compared semantically.
//!
//! # Nesting
//!
//! Containers are expanded one level. An array or object found inside
//! another container renders as [`NESTED_ARRAY`] or [`NESTED_OBJECT`]:
//!
//! ```text
//! [1, 'hello', [2, 3]]      -->  [1, 'hello', [...]]
//! {a: 1, b: {c: 1, d: 2}}   -->  {a: 1, b: {...}}
//! [{a: 1}]                  -->  [{...}]
//! ```

use crate::coerce::to_text;
use crate::type_tag::{classify, TypeTag};
use crate::value::{ObjectValue, Value};

/// Placeholder for an array nested inside a container.
pub const NESTED_ARRAY: &str = "[...]";

/// Placeholder for an object nested inside a container.
pub const NESTED_OBJECT: &str = "{...}";

/// Placeholder for symbols. Their descriptions are not shown.
pub const SYMBOL_PLACEHOLDER: &str = "Symbol(...)";

/// Rendered when a value has no printable text form.
const UNPRINTABLE: &str = "<unprintable>";

/// Render a value for a diagnostic message. Total and deterministic.
pub fn format_diagnostic(value: &Value) -> String {
    match value {
        Value::Array(items) => format_array(items),
        Value::Object(object) => format_object(object),
        _ => format_leaf(value),
    }
}

fn format_array(items: &[Value]) -> String {
    let parts: Vec<String> = items.iter().map(format_member).collect();
    format!("[{}]", parts.join(", "))
}

fn format_object(object: &ObjectValue) -> String {
    let parts: Vec<String> = object
        .entries()
        .into_iter()
        .map(|(key, value)| format!("{key}: {}", format_member(value)))
        .collect();
    format!("{{{}}}", parts.join(", "))
}

/// A value sitting inside a container: nested containers collapse.
fn format_member(value: &Value) -> String {
    match classify(value) {
        TypeTag::Array => NESTED_ARRAY.to_string(),
        TypeTag::Object => NESTED_OBJECT.to_string(),
        _ => format_leaf(value),
    }
}

fn format_leaf(value: &Value) -> String {
    match value {
        Value::BigInt(n) => format!("{n}n"),
        Value::Str(s) => format!("'{}'", &**s),
        Value::Symbol(_) => SYMBOL_PLACEHOLDER.to_string(),
        // undefined, null, boolean, number, NaN, function: host text form
        _ => to_text(value).unwrap_or_else(|| UNPRINTABLE.to_string()),
    }
}
