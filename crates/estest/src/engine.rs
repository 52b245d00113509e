//! The assertion dispatcher.
//!
//! Every call runs the same state machine:
//!
//! ```text
//! validate mode ──✗──> InvalidMode
//!      │
//! validate message ──✗──> InvalidMessageType
//!      │
//! route on Mode ──> type mode     ──✗──> TypeMismatch
//!               └─> operator mode ──✗──> ComparisonFailed
//!      │
//!   Passed
//! ```
//!
//! Failures are returned immediately; nothing is retried or aggregated.

use parking_lot::Mutex;

use estest_value::{classify, TypeTag, Value};

use crate::config::EngineConfig;
use crate::errors::{
    comparison_failed, invalid_message_type, invalid_mode, type_mismatch, AssertError,
    DEFAULT_MESSAGE,
};
use crate::mode::{Mode, Operator};
use crate::operators::evaluate_operator;

/// Marker returned by a successful assertion.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Passed {
    /// A type check passed; carries the asserted tag.
    Type(TypeTag),
    /// An operator check passed.
    Comparison(Operator),
}

/// Assertion engine.
///
/// Holds the injected configuration and the marker of the most recent
/// successful assertion made through this engine.
#[derive(Debug, Default)]
pub struct Engine {
    config: EngineConfig,
    last: Mutex<Option<Passed>>,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            last: Mutex::new(None),
        }
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Marker of the last assertion that passed on this engine.
    ///
    /// Failed assertions leave it unchanged. Meant for self-tests.
    pub fn last_passed(&self) -> Option<Passed> {
        *self.last.lock()
    }

    /// Dynamic entry point: the mode is a runtime value.
    ///
    /// - type check: `check(subject, tag, message?, None)`
    /// - operator check: `check(subject, op, comparand?, message?)`
    ///
    /// In type mode `secondary` is the message and `message` is ignored. In
    /// operator mode a missing comparand is `undefined`. A message of
    /// `undefined` counts as absent.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn check(
        &self,
        subject: &Value,
        mode: &Value,
        secondary: Option<&Value>,
        message: Option<&Value>,
    ) -> Result<Passed, AssertError> {
        let Some(parsed) = Mode::parse(mode) else {
            return Err(self.reject(invalid_mode(mode), DEFAULT_MESSAGE));
        };
        tracing::trace!(mode = %parsed, "routing assertion");

        match parsed {
            Mode::Type(expected) => {
                let note = self.note(secondary)?;
                self.run_type(subject, expected, note)
            }
            Mode::Operator(op) => {
                let note = self.note(message)?;
                let undefined = Value::Undefined;
                let comparand = secondary.unwrap_or(&undefined);
                self.run_op(subject, op, comparand, note)
            }
        }
    }

    /// Assert that `subject` classifies as `expected`.
    #[tracing::instrument(level = "trace", skip(self, subject, message))]
    pub fn assert_type(
        &self,
        subject: &Value,
        expected: TypeTag,
        message: Option<&str>,
    ) -> Result<Passed, AssertError> {
        self.run_type(subject, expected, message.unwrap_or(DEFAULT_MESSAGE))
    }

    /// Assert that `subject <op> comparand` holds.
    #[tracing::instrument(level = "trace", skip(self, subject, comparand, message))]
    pub fn assert_op(
        &self,
        subject: &Value,
        op: Operator,
        comparand: &Value,
        message: Option<&str>,
    ) -> Result<Passed, AssertError> {
        self.run_op(subject, op, comparand, message.unwrap_or(DEFAULT_MESSAGE))
    }

    /// Validate the explanatory message: absent, `undefined` or a string.
    fn note<'a>(&self, message: Option<&'a Value>) -> Result<&'a str, AssertError> {
        match message {
            None | Some(Value::Undefined) => Ok(DEFAULT_MESSAGE),
            Some(Value::Str(text)) => Ok(text),
            Some(other) => Err(self.reject(invalid_message_type(other), DEFAULT_MESSAGE)),
        }
    }

    fn run_type(
        &self,
        subject: &Value,
        expected: TypeTag,
        note: &str,
    ) -> Result<Passed, AssertError> {
        if type_holds(subject, expected) {
            Ok(self.pass(Passed::Type(expected)))
        } else {
            Err(self.reject(type_mismatch(note, subject, expected), note))
        }
    }

    fn run_op(
        &self,
        subject: &Value,
        op: Operator,
        comparand: &Value,
        note: &str,
    ) -> Result<Passed, AssertError> {
        if evaluate_operator(subject, op, comparand) {
            Ok(self.pass(Passed::Comparison(op)))
        } else {
            Err(self.reject(comparison_failed(note, subject, op, comparand), note))
        }
    }

    fn pass(&self, passed: Passed) -> Passed {
        tracing::trace!(?passed, "assertion passed");
        *self.last.lock() = Some(passed);
        passed
    }

    /// Apply the execution mode to an outgoing error.
    fn reject(&self, err: AssertError, note: &str) -> AssertError {
        if self.config.mode.redacts_values() {
            tracing::debug!(kind = err.kind.name(), "assertion failed");
            err.redacted(note)
        } else {
            tracing::debug!(kind = err.kind.name(), message = %err.message, "assertion failed");
            err
        }
    }
}

/// Type-mode evaluation: the subject's tag must equal `expected`.
fn type_holds(subject: &Value, expected: TypeTag) -> bool {
    classify(subject) == expected
}
