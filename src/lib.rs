//! # Pooled Logger
//!
//! A process-local leveled logger built for hot paths.
//!
//! ## Features
//!
//! - **Low Overhead**: Filtered calls cost one atomic load; emitted calls render
//!   into pooled buffers and reuse a timestamp cached per second
//! - **Pluggable Formatters**: Text (default) and JSON layouts behind one trait
//! - **Thread Safe**: Lines from concurrent callers never interleave
//! - **Accurate Call Sites**: `file:line` of the application's log call, through
//!   any number of `#[track_caller]` wrapper layers
//!
//! ```
//! use pooled_logger::prelude::*;
//!
//! let sink = MemorySink::new();
//! let logger = Logger::with_config(Some(
//!     LoggerConfig::new().with_level(Level::Warn).with_output(sink.clone()),
//! ));
//!
//! logger.debug("dropped by the level gate");
//! logger.warnf(format_args!("disk {}% full", 91));
//!
//! assert!(sink.contents().ends_with(" Warn msg: disk 91% full\n"));
//! ```

pub mod core;
pub mod global;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        Buffer, BufferPool, ErrorHandler, Formatter, JsonFormatter, Level, Logger, LoggerConfig,
        LoggerError, LoggerMetrics, LoggerSettings, Record, Result, Sink, TextFormatter,
        TimestampFormat,
    };
    pub use crate::sinks::{FileSink, MemorySink, WriterSink};
}

pub use crate::core::{
    abort_on_error, cached_timestamp, ignore_errors, Buffer, BufferPool, ErrorHandler, ExitFn,
    FormatKind, Formatter, JsonFormatter, Level, Logger, LoggerConfig, LoggerError,
    LoggerMetrics, LoggerSettings, Record, Result, Sink, TextFormatter, TimeCache,
    TimestampFormat, DEFAULT_CALLER_DEPTH,
};
pub use global::{global, init_global, set_log_level};
pub use sinks::{FileSink, MemorySink, WriterSink};
