//! ESTest Value - runtime values, type classification and diagnostics.
//!
//! This crate provides:
//! - The runtime value model (`Value`, `Heap`, `ObjectValue`, ...)
//! - The type classifier (`TypeTag`, `classify`)
//! - The diagnostic formatter used in assertion failures (`format_diagnostic`)
//! - Host conversions used by relational comparison (`coerce`)
//!
//! # Value Types
//!
//! Heap-backed values share their allocation when cloned, which is what
//! makes identity comparison (`===`) on arrays, objects, symbols and
//! functions observable. All heap allocations go through `Value::` factory
//! methods.

pub mod coerce;
mod diagnostic;
mod stack;
mod type_tag;
mod value;

pub use diagnostic::{format_diagnostic, NESTED_ARRAY, NESTED_OBJECT, SYMBOL_PLACEHOLDER};
pub use type_tag::{classify, TypeTag};
pub use value::{FunctionValue, Heap, ObjectValue, SymbolValue, Value};
