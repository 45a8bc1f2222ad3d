//! Core logger types and traits

pub mod buffer_pool;
pub mod config;
pub mod error;
pub mod formatter;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod sink;
pub mod timestamp;

pub use buffer_pool::{Buffer, BufferPool};
pub use config::{ExitFn, FormatKind, LoggerConfig, LoggerSettings, DEFAULT_CALLER_DEPTH};
pub use error::{abort_on_error, ignore_errors, ErrorHandler, LoggerError, Result};
pub use formatter::{Formatter, JsonFormatter, Record, TextFormatter};
pub use log_level::Level;
pub use logger::Logger;
pub use metrics::LoggerMetrics;
pub use sink::Sink;
pub use timestamp::{cached_timestamp, global_time_cache, TimeCache, TimestampFormat};
