//! Logging macros for ergonomic log message formatting.
//!
//! Each macro builds the `fmt::Arguments` for the template form of the
//! matching logger method. With a logger expression first they target that
//! logger; with a format string first they target the process-wide instance.
//!
//! # Examples
//!
//! ```
//! use pooled_logger::prelude::*;
//! use pooled_logger::info;
//!
//! let logger = Logger::with_config(Some(LoggerConfig::new().with_output(MemorySink::new())));
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log at an explicit level.
///
/// # Examples
///
/// ```
/// # use pooled_logger::prelude::*;
/// # let logger = Logger::with_config(Some(LoggerConfig::new().with_output(MemorySink::new())));
/// use pooled_logger::log;
/// log!(logger, Level::Info, "Simple message");
/// log!(logger, Level::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.logf($level, ::std::format_args!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// ```
/// # use pooled_logger::prelude::*;
/// # let logger = Logger::with_config(Some(LoggerConfig::new().with_output(MemorySink::new())));
/// use pooled_logger::debug;
/// debug!(logger, "Counter value: {}", 10);
/// debug!("Sent to the global logger");
/// ```
#[macro_export]
macro_rules! debug {
    ($fmt:literal $($arg:tt)*) => {
        $crate::global::debugf(::std::format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(::std::format_args!($($arg)+))
    };
}

/// Log an info-level message.
///
/// ```
/// # use pooled_logger::prelude::*;
/// # let logger = Logger::with_config(Some(LoggerConfig::new().with_output(MemorySink::new())));
/// use pooled_logger::info;
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($fmt:literal $($arg:tt)*) => {
        $crate::global::infof(::std::format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(::std::format_args!($($arg)+))
    };
}

/// Log a warning-level message.
///
/// ```
/// # use pooled_logger::prelude::*;
/// # let logger = Logger::with_config(Some(LoggerConfig::new().with_output(MemorySink::new())));
/// use pooled_logger::warn;
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($fmt:literal $($arg:tt)*) => {
        $crate::global::warnf(::std::format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.warnf(::std::format_args!($($arg)+))
    };
}

/// Log an error-level message.
///
/// ```
/// # use pooled_logger::prelude::*;
/// # let logger = Logger::with_config(Some(LoggerConfig::new().with_output(MemorySink::new())));
/// use pooled_logger::error;
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($fmt:literal $($arg:tt)*) => {
        $crate::global::errorf(::std::format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(::std::format_args!($($arg)+))
    };
}

/// Log a fatal-level message and terminate the process.
///
/// ```no_run
/// # use pooled_logger::prelude::*;
/// # let logger = Logger::new();
/// use pooled_logger::fatal;
/// fatal!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($fmt:literal $($arg:tt)*) => {
        $crate::global::fatalf(::std::format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatalf(::std::format_args!($($arg)+))
    };
}
