//! Logger configuration
//!
//! [`LoggerConfig`] is the construction-time configuration of a
//! [`Logger`](super::Logger). Fields left unset fall back to the defaults:
//! `Info` level, caller capture on at depth 2, standard output, and the
//! [`TextFormatter`](super::TextFormatter).
//!
//! [`LoggerSettings`] is the serializable subset, for hosts that load settings
//! from a file or the environment.

use super::error::ErrorHandler;
use super::formatter::{Formatter, JsonFormatter, TextFormatter};
use super::log_level::Level;
use super::sink::Sink;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Caller depth of a directly constructed logger
pub const DEFAULT_CALLER_DEPTH: usize = 2;

/// Exit function called after a fatal record is written
pub type ExitFn = fn(i32) -> !;

/// Construction-time logger configuration
///
/// # Examples
///
/// ```
/// use pooled_logger::{JsonFormatter, Level, Logger, LoggerConfig, MemorySink};
/// use std::sync::Arc;
///
/// let config = LoggerConfig::new()
///     .with_level(Level::Debug)
///     .with_name("api")
///     .with_output(MemorySink::new())
///     .with_formatter(Arc::new(JsonFormatter));
///
/// let logger = Logger::with_config(Some(config));
/// assert_eq!(logger.level(), Level::Debug);
/// ```
pub struct LoggerConfig {
    /// Minimum level that is emitted
    pub level: Level,
    /// Whether the call site is captured
    pub enable_caller: bool,
    /// Number of call layers between the application and the capture point
    pub caller_depth: usize,
    /// Module name handed to the formatter
    pub name: String,
    /// Output sink, standard output when `None`
    pub output: Option<Box<dyn Sink>>,
    /// Formatter, [`TextFormatter`] when `None`
    pub formatter: Option<Arc<dyn Formatter>>,
    /// Sink failure handler, panics when `None`
    pub on_error: Option<ErrorHandler>,
    /// Called with status 1 after a fatal record
    pub exit: ExitFn,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Level::Info,
            enable_caller: true,
            caller_depth: DEFAULT_CALLER_DEPTH,
            name: String::new(),
            output: None,
            formatter: None,
            on_error: None,
            exit: std::process::exit,
        }
    }
}

impl LoggerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum level; integral values outside the range become `Info`
    #[must_use]
    pub fn with_level(mut self, level: impl Into<Level>) -> Self {
        self.level = level.into();
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_caller(mut self, enable: bool, depth: usize) -> Self {
        self.enable_caller = enable;
        self.caller_depth = depth;
        self
    }

    #[must_use]
    pub fn with_output(mut self, output: impl Sink + 'static) -> Self {
        self.output = Some(Box::new(output));
        self
    }

    #[must_use]
    pub fn with_formatter(mut self, formatter: Arc<dyn Formatter>) -> Self {
        self.formatter = Some(formatter);
        self
    }

    #[must_use]
    pub fn with_error_handler(mut self, handler: ErrorHandler) -> Self {
        self.on_error = Some(handler);
        self
    }

    /// Replace the function called after a fatal record.
    #[must_use]
    pub fn with_exit(mut self, exit: ExitFn) -> Self {
        self.exit = exit;
        self
    }
}

impl fmt::Debug for LoggerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerConfig")
            .field("level", &self.level)
            .field("enable_caller", &self.enable_caller)
            .field("caller_depth", &self.caller_depth)
            .field("name", &self.name)
            .field("output", &self.output.as_ref().map(|_| "custom"))
            .field(
                "formatter",
                &self.formatter.as_ref().map(|formatter| formatter.name()),
            )
            .field("on_error", &self.on_error.as_ref().map(|_| "custom"))
            .finish()
    }
}

/// Built-in line layouts selectable from settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    #[default]
    Text,
    Json,
}

impl FormatKind {
    pub fn formatter(self) -> Arc<dyn Formatter> {
        match self {
            FormatKind::Text => Arc::new(TextFormatter),
            FormatKind::Json => Arc::new(JsonFormatter),
        }
    }
}

/// Serializable logger settings
///
/// ```
/// use pooled_logger::{Level, LoggerSettings};
///
/// let settings: LoggerSettings =
///     serde_json::from_str(r#"{"level":"Warn","name":"worker","format":"json"}"#).unwrap();
/// let config = settings.into_config();
/// assert_eq!(config.level, Level::Warn);
/// assert!(config.enable_caller);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerSettings {
    pub level: Level,
    pub name: String,
    pub enable_caller: bool,
    pub caller_depth: usize,
    pub format: FormatKind,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: Level::Info,
            name: String::new(),
            enable_caller: true,
            caller_depth: DEFAULT_CALLER_DEPTH,
            format: FormatKind::Text,
        }
    }
}

impl LoggerSettings {
    /// Convert into a [`LoggerConfig`] writing to standard output
    pub fn into_config(self) -> LoggerConfig {
        LoggerConfig::new()
            .with_level(self.level)
            .with_name(self.name)
            .with_caller(self.enable_caller, self.caller_depth)
            .with_formatter(self.format.formatter())
    }
}
