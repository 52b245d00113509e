//! Engine configuration.
//!
//! The execution mode decides how much of a failure is shown. It is fixed
//! when the engine is built; nothing reads the environment during an
//! assertion.

/// Environment variable read by [`EngineConfig::from_env`].
pub const ENV_VAR: &str = "ESTEST_ENV";

/// Execution mode, selecting failure verbosity.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ExecutionMode {
    /// Full diagnostics: failures show the rendered values and types.
    #[default]
    Development,
    /// Redacted diagnostics: failures show a generic line plus the caller's text.
    Production,
}

impl ExecutionMode {
    /// Parse the environment setting. Only `production` (any case) selects
    /// production; anything else, including unset, is development.
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("production") => Self::Production,
            _ => Self::Development,
        }
    }

    #[inline]
    pub fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Whether failure messages must not contain rendered values.
    #[inline]
    pub fn redacts_values(self) -> bool {
        self.is_production()
    }
}

/// Configuration injected into an [`Engine`](crate::Engine).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EngineConfig {
    pub mode: ExecutionMode,
}

impl EngineConfig {
    /// Development configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the execution mode from [`ENV_VAR`].
    pub fn from_env() -> Self {
        let value = std::env::var(ENV_VAR).ok();
        Self {
            mode: ExecutionMode::from_env_value(value.as_deref()),
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }
}
