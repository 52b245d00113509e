//! Runtime values checked by the assertion engine.
//!
//! `Value` mirrors the host language's runtime kinds. Primitives are stored
//! inline; strings, arrays, objects, symbols and functions live behind
//! [`Heap`], whose constructor is private to this module:
//!
//! ```text
//! let s = Value::string("hello");                 // OK
//! let xs = Value::array(vec![Value::from(1)]);    // OK
//! let s = Value::Str(Heap::new(...));             // ERROR: Heap::new is pub(super)
//! ```
//!
//! Cloning a heap-backed value shares the allocation, so a clone is the same
//! host object (`===` holds) while a freshly built equal value is not.

mod composite;
mod heap;

use std::fmt;

pub use composite::{FunctionValue, ObjectValue, SymbolValue};
pub use heap::Heap;

use crate::type_tag::TypeTag;

/// Runtime value of the host data model.
#[derive(Clone)]
pub enum Value {
    // Primitives (inline)
    /// The `undefined` value. Also stands in for an absent argument.
    Undefined,
    /// The `null` value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// IEEE-754 double, including NaN and the infinities.
    Number(f64),
    /// Integer of the host `bigint` kind.
    BigInt(i128),

    // Heap types
    /// String value. Compared by content.
    Str(Heap<String>),
    /// Unique symbol. Compared by identity.
    Symbol(Heap<SymbolValue>),
    /// Ordered array. Compared by identity.
    Array(Heap<Vec<Value>>),
    /// Plain object. Compared by identity.
    Object(Heap<ObjectValue>),
    /// Function. Compared by identity.
    Function(Heap<FunctionValue>),
}

// Factory Methods (ONLY way to construct heap values)

impl Value {
    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Create an array value.
    #[inline]
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Heap::new(items))
    }

    /// Create an object value.
    ///
    /// ```text
    /// let point = Value::object([("x", Value::from(1)), ("y", Value::from(2))]);
    /// ```
    pub fn object<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::Object(Heap::new(entries.into_iter().collect()))
    }

    /// Create a new symbol. Every call yields a distinct identity.
    pub fn symbol(description: Option<&str>) -> Self {
        Value::Symbol(Heap::new(SymbolValue {
            description: description.map(str::to_string),
        }))
    }

    /// Create a function value without source text.
    pub fn function(name: impl Into<String>) -> Self {
        Value::Function(Heap::new(FunctionValue {
            name: name.into(),
            source: None,
        }))
    }

    /// Create a function value whose host `ToString` is `source`.
    pub fn function_with_source(name: impl Into<String>, source: impl Into<String>) -> Self {
        Value::Function(Heap::new(FunctionValue {
            name: name.into(),
            source: Some(source.into()),
        }))
    }
}

// Value Methods

impl Value {
    /// Semantic type tag of this value. See [`crate::classify`].
    pub fn type_tag(&self) -> TypeTag {
        match self {
            // `typeof` says "object" for all three; split them.
            Value::Null => TypeTag::Null,
            Value::Array(_) => TypeTag::Array,
            Value::Object(_) => TypeTag::Object,
            // `typeof` says "number" for both.
            Value::Number(n) if n.is_nan() => TypeTag::NaN,
            Value::Number(_) => TypeTag::Number,
            Value::Undefined => TypeTag::Undefined,
            Value::Bool(_) => TypeTag::Boolean,
            Value::BigInt(_) => TypeTag::BigInt,
            Value::Str(_) => TypeTag::String,
            Value::Symbol(_) => TypeTag::Symbol,
            Value::Function(_) => TypeTag::Function,
        }
    }

    /// Whether this is `undefined`.
    #[inline]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Try to view as a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Try to view as a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to view as an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Host strict equality (`===`).
    ///
    /// No coercion: differing kinds are never equal. Numbers follow IEEE-754
    /// (`NaN !== NaN`, `0 === -0`); strings, booleans and bigints compare by
    /// value; symbols, arrays, objects and functions compare by identity.
    #[allow(clippy::float_cmp, reason = "strict equality is exact IEEE comparison")]
    pub fn strict_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => **a == **b,
            (Value::Symbol(a), Value::Symbol(b)) => a.ptr_eq(b),
            (Value::Array(a), Value::Array(b)) => a.ptr_eq(b),
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

// Conversions

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::array(items)
    }
}

impl From<ObjectValue> for Value {
    fn from(object: ObjectValue) -> Self {
        Value::Object(Heap::new(object))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    /// `None` maps to `undefined`.
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Undefined, Into::into)
    }
}

// Trait Implementations

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "Undefined"),
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Number(n) => write!(f, "Number({n})"),
            Value::BigInt(n) => write!(f, "BigInt({n})"),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::Symbol(s) => write!(f, "Symbol({:?})", s.description),
            Value::Array(items) => write!(f, "Array({:?})", &**items),
            Value::Object(object) => write!(f, "Object({:?})", &**object),
            Value::Function(func) => write!(f, "Function({})", func.name),
        }
    }
}

/// Renders the diagnostic form used in assertion failures.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::format_diagnostic(self))
    }
}

/// Structural equality for data, identity for symbols and functions.
///
/// This is Rust-side equality for tests and collections. Host `===`
/// semantics live in [`Value::strict_equals`].
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a.to_bits() == b.to_bits(),
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a.ptr_eq(b),
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}
