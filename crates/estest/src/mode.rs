//! Assertion modes: the second argument of an assertion call.
//!
//! A mode is either a type tag (type-check shape) or an operator symbol
//! (operator-check shape). The caller passes it as a plain value; [`Mode::parse`]
//! turns it into a closed variant once, at the boundary, so the evaluators
//! never branch on strings.

use std::fmt;

use estest_value::{TypeTag, Value};

/// Relational and strict-equality operators.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Lt,
    LtEq,
    GtEq,
    Gt,
    StrictEq,
    StrictNotEq,
}

impl Operator {
    /// Every operator, in the order error messages list them.
    pub const ALL: [Operator; 6] = [
        Operator::Lt,
        Operator::LtEq,
        Operator::GtEq,
        Operator::Gt,
        Operator::StrictEq,
        Operator::StrictNotEq,
    ];

    /// The operator's symbol as callers spell it.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Operator::Lt => "<",
            Operator::LtEq => "<=",
            Operator::GtEq => ">=",
            Operator::Gt => ">",
            Operator::StrictEq => "===",
            Operator::StrictNotEq => "!==",
        }
    }

    /// Look up an operator by symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_symbol() == symbol)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Which evaluator an assertion call routes to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// `(subject, tag, message?)`
    Type(TypeTag),
    /// `(subject, operator, comparand, message?)`
    Operator(Operator),
}

impl Mode {
    /// Parse a mode token. Tag names and operator symbols never overlap.
    pub fn from_name(name: &str) -> Option<Self> {
        TypeTag::from_name(name)
            .map(Mode::Type)
            .or_else(|| Operator::from_symbol(name).map(Mode::Operator))
    }

    /// Parse a mode argument. Only strings can name a mode.
    pub fn parse(value: &Value) -> Option<Self> {
        value.as_str().and_then(Self::from_name)
    }

    /// Every accepted token, tags first, quoted and `|`-separated.
    pub fn accepted_list() -> String {
        let tags = TypeTag::ALL.into_iter().map(TypeTag::as_str);
        let ops = Operator::ALL.into_iter().map(Operator::as_symbol);
        tags.chain(ops)
            .map(|token| format!("'{token}'"))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Type(tag) => fmt::Display::fmt(tag, f),
            Mode::Operator(op) => fmt::Display::fmt(op, f),
        }
    }
}
