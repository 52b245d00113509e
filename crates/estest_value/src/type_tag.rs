//! Semantic type tags and the classifier that assigns them.
//!
//! The host's native `typeof` reports `"object"` for `null`, arrays and plain
//! objects, and `"number"` for NaN. `TypeTag` splits those apart, and
//! [`classify`] is the single source of truth for which tag a value carries.

use std::fmt;

use crate::value::Value;

/// Closed set of type categories a value can be asserted against.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Undefined,
    Null,
    Array,
    Object,
    Boolean,
    NaN,
    Number,
    BigInt,
    String,
    Symbol,
    Function,
}

impl TypeTag {
    /// Every tag, in the order error messages list them.
    pub const ALL: [TypeTag; 11] = [
        TypeTag::Undefined,
        TypeTag::Null,
        TypeTag::Array,
        TypeTag::Object,
        TypeTag::Boolean,
        TypeTag::NaN,
        TypeTag::Number,
        TypeTag::BigInt,
        TypeTag::String,
        TypeTag::Symbol,
        TypeTag::Function,
    ];

    /// The tag's name as callers spell it.
    pub const fn as_str(self) -> &'static str {
        match self {
            TypeTag::Undefined => "undefined",
            TypeTag::Null => "null",
            TypeTag::Array => "array",
            TypeTag::Object => "object",
            TypeTag::Boolean => "boolean",
            TypeTag::NaN => "NaN",
            TypeTag::Number => "number",
            TypeTag::BigInt => "bigint",
            TypeTag::String => "string",
            TypeTag::Symbol => "symbol",
            TypeTag::Function => "function",
        }
    }

    /// Look up a tag by name. Names are case-sensitive (`"NaN"`, not `"nan"`).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.as_str() == name)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a value. Total: every value gets exactly one tag.
#[inline]
pub fn classify(value: &Value) -> TypeTag {
    value.type_tag()
}
