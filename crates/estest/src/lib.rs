//! ESTest - runtime type and comparison assertions.
//!
//! An [`Engine`] checks a value against either a type tag (`"number"`,
//! `"array"`, `"NaN"`, ...) or a relational operator (`<`, `<=`, `>=`, `>`,
//! `===`, `!==`) with host-language semantics. Passing assertions return a
//! [`Passed`] marker; failing ones return an [`AssertError`] whose message
//! renders the offending values.
//!
//! # Architecture
//!
//! - `Mode`: the caller's mode token, parsed once at the boundary
//! - `Engine`: validates arguments, routes on `Mode`, builds every error
//! - `evaluate_operator`: strict equality and abstract relational comparison
//! - `EngineConfig`: development or production verbosity
//! - value model, classifier and formatter from `estest_value`
//!
//! ```
//! use estest::{Engine, EngineConfig, Passed, TypeTag, Value};
//!
//! let engine = Engine::new(EngineConfig::new());
//! let passed = engine.check(&Value::from(5), &Value::string("number"), None, None);
//! assert_eq!(passed, Ok(Passed::Type(TypeTag::Number)));
//!
//! let err = engine
//!     .check(&Value::from(5), &Value::string(">"), Some(&Value::from(10)), None)
//!     .unwrap_err();
//! assert!(err.message.ends_with("5 > 10"));
//! ```

mod config;
mod engine;
pub mod errors;
mod mode;
mod operators;

use std::sync::Once;

pub use config::{EngineConfig, ExecutionMode, ENV_VAR};
pub use engine::{Engine, Passed};
pub use errors::{AssertError, AssertErrorKind, DEFAULT_MESSAGE, REDACTED};
pub use mode::{Mode, Operator};
pub use operators::evaluate_operator;

// Re-export the value model from estest_value
pub use estest_value::{classify, format_diagnostic, ObjectValue, TypeTag, Value};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=estest=debug` for failures or `RUST_LOG=estest=trace` for every
/// dispatch.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
