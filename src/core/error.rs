//! Error types for the logger system

use std::path::PathBuf;
use std::sync::Arc;

pub type Result<T> = std::result::Result<T, LoggerError>;

/// Callback invoked when the sink cannot accept a rendered line.
///
/// The default handler ([`abort_on_error`]) panics, so delivery failures are
/// never swallowed silently.
pub type ErrorHandler = Arc<dyn Fn(&LoggerError) + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Writing a rendered line to the sink failed
    #[error("Failed to write {bytes} bytes to log sink: {source}")]
    SinkWrite {
        bytes: usize,
        #[source]
        source: std::io::Error,
    },

    /// Flushing the sink failed
    #[error("Failed to flush log sink: {source}")]
    SinkFlush {
        #[source]
        source: std::io::Error,
    },

    /// Closing the sink failed
    #[error("Failed to close log sink: {source}")]
    SinkClose {
        #[source]
        source: std::io::Error,
    },

    /// Opening a file-backed sink failed
    #[error("Failed to open log file '{}': {source}", .path.display())]
    SinkOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Unknown level name
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),

    /// The process-wide logger was already constructed
    #[error("Global logger already initialized")]
    AlreadyInitialized,
}

impl LoggerError {
    /// Create a sink write error
    pub fn sink_write(bytes: usize, source: std::io::Error) -> Self {
        LoggerError::SinkWrite { bytes, source }
    }

    /// Create a sink flush error
    pub fn sink_flush(source: std::io::Error) -> Self {
        LoggerError::SinkFlush { source }
    }

    /// Create a sink close error
    pub fn sink_close(source: std::io::Error) -> Self {
        LoggerError::SinkClose { source }
    }

    /// Create a sink open error
    pub fn sink_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LoggerError::SinkOpen {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid level error
    pub fn invalid_level(name: impl Into<String>) -> Self {
        LoggerError::InvalidLevel(name.into())
    }
}

/// Error handler that panics with the error message.
pub fn abort_on_error() -> ErrorHandler {
    Arc::new(|err: &LoggerError| panic!("[LOGGER CRITICAL] {}", err))
}

/// Error handler that discards errors. Failures still show up in the metrics.
pub fn ignore_errors() -> ErrorHandler {
    Arc::new(|_: &LoggerError| {})
}
