//! Assertion failure types.
//!
//! # Structured Error Categories
//!
//! `AssertErrorKind` carries the data of each failure so callers can match on
//! the kind instead of parsing text. Its `Display` impl is the full diagnostic
//! message. Factory functions (`type_mismatch()`, ...) build both the kind and
//! the rendered message; they are the only constructors the engine uses.

use std::fmt;

use estest_value::{format_diagnostic, TypeTag, Value};

use crate::mode::{Mode, Operator};

/// Message shown when the caller gave no explanatory text.
pub const DEFAULT_MESSAGE: &str = "undefined error message";

/// Replaces rendered values in production mode.
pub const REDACTED: &str = "<redacted>";

/// Failure category with its structured data.
///
/// Value fields hold diagnostic renderings (see `format_diagnostic`), not
/// the values themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssertErrorKind {
    /// The mode argument names no type tag or operator.
    InvalidMode { mode: String },
    /// The explanatory message was given but is not a string.
    InvalidMessageType { message: String, tag: TypeTag },
    /// The subject's type tag differs from the expected one.
    TypeMismatch {
        note: String,
        subject: String,
        actual: TypeTag,
        expected: TypeTag,
    },
    /// `left <op> right` does not hold.
    ComparisonFailed {
        note: String,
        left: String,
        op: Operator,
        right: String,
    },
}

impl AssertErrorKind {
    /// Stable variant name, for logs.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::InvalidMode { .. } => "InvalidMode",
            Self::InvalidMessageType { .. } => "InvalidMessageType",
            Self::TypeMismatch { .. } => "TypeMismatch",
            Self::ComparisonFailed { .. } => "ComparisonFailed",
        }
    }

    /// The same kind with every rendered value replaced by [`REDACTED`].
    #[must_use]
    pub fn redacted(self) -> Self {
        match self {
            Self::InvalidMode { .. } => Self::InvalidMode {
                mode: REDACTED.to_string(),
            },
            Self::InvalidMessageType { tag, .. } => Self::InvalidMessageType {
                message: REDACTED.to_string(),
                tag,
            },
            Self::TypeMismatch {
                note,
                actual,
                expected,
                ..
            } => Self::TypeMismatch {
                note,
                subject: REDACTED.to_string(),
                actual,
                expected,
            },
            Self::ComparisonFailed { note, op, .. } => Self::ComparisonFailed {
                note,
                left: REDACTED.to_string(),
                op,
                right: REDACTED.to_string(),
            },
        }
    }
}

impl fmt::Display for AssertErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMode { mode } => {
                writeln!(f, "❌ 2nd argument: {mode}")?;
                write!(f, "✅ expects: {}", Mode::accepted_list())
            }
            Self::InvalidMessageType { message, tag } => {
                writeln!(f, "❌ custom error message type: 📝 {message}('{tag}')")?;
                write!(f, "✅ expects: 'string' type")
            }
            Self::TypeMismatch {
                note,
                subject,
                actual,
                expected,
            } => {
                writeln!(f, "📝 {note}")?;
                write!(f, "❌ type error: {subject} ('{actual}') === '{expected}'")
            }
            Self::ComparisonFailed {
                note,
                left,
                op,
                right,
            } => {
                writeln!(f, "📝 {note}")?;
                write!(f, "❌ relational operators error: {left} {op} {right}")
            }
        }
    }
}

/// An assertion that did not hold, or an assertion call that was malformed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AssertError {
    /// Structured failure category.
    pub kind: AssertErrorKind,
    /// Human-readable message.
    ///
    /// Equals `kind.to_string()` unless the error was redacted.
    pub message: String,
}

impl AssertError {
    fn from_kind(kind: AssertErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }

    /// Strip rendered values from both the kind and the message.
    ///
    /// The message becomes a generic line followed by `note`, the caller's
    /// explanatory text.
    #[must_use]
    pub fn redacted(self, note: &str) -> Self {
        Self {
            kind: self.kind.redacted(),
            message: format!("❌ assertion failed (details redacted)\n📝 {note}"),
        }
    }
}

// Argument Validation Errors

/// The mode argument is not a known tag or operator.
#[cold]
pub fn invalid_mode(mode: &Value) -> AssertError {
    AssertError::from_kind(AssertErrorKind::InvalidMode {
        mode: format_diagnostic(mode),
    })
}

/// The explanatory message is neither absent nor a string.
#[cold]
pub fn invalid_message_type(message: &Value) -> AssertError {
    AssertError::from_kind(AssertErrorKind::InvalidMessageType {
        message: format_diagnostic(message),
        tag: message.type_tag(),
    })
}

// Check Failures

/// The subject has the wrong type tag.
#[cold]
pub fn type_mismatch(note: &str, subject: &Value, expected: TypeTag) -> AssertError {
    AssertError::from_kind(AssertErrorKind::TypeMismatch {
        note: note.to_string(),
        subject: format_diagnostic(subject),
        actual: subject.type_tag(),
        expected,
    })
}

/// The comparison does not hold.
#[cold]
pub fn comparison_failed(note: &str, left: &Value, op: Operator, right: &Value) -> AssertError {
    AssertError::from_kind(AssertErrorKind::ComparisonFailed {
        note: note.to_string(),
        left: format_diagnostic(left),
        op,
        right: format_diagnostic(right),
    })
}
