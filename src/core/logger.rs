//! Main logger implementation
//!
//! A call at level `L` is emitted only when `L >= ` the configured level. Emitted
//! calls are rendered by the configured [`Formatter`] into a pooled buffer
//! outside any lock, written to the sink under the sink mutex with a single
//! `write_all`, and the buffer goes back to the pool.
//!
//! Call sites are captured with `#[track_caller]`: every layer between the
//! application and [`Location::caller`] carries the attribute, so the reported
//! `file:line` is always the application's log call.

use super::{
    buffer_pool::{Buffer, BufferPool},
    config::{ExitFn, LoggerConfig},
    error::{abort_on_error, ErrorHandler, LoggerError, Result},
    formatter::{Formatter, Record, TextFormatter},
    log_level::Level,
    metrics::LoggerMetrics,
    sink::Sink,
};
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::io::{self, Write};
use std::panic::Location;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

struct Settings {
    name: Arc<str>,
    enable_caller: bool,
    caller_depth: usize,
    formatter: Arc<dyn Formatter>,
    on_error: ErrorHandler,
}

pub struct Logger {
    level: AtomicU8,
    settings: RwLock<Settings>,
    sink: Mutex<Box<dyn Sink>>,
    pool: BufferPool,
    metrics: LoggerMetrics,
    exit: ExitFn,
}

impl Logger {
    /// Logger with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(None)
    }

    /// Logger from `config`, or from the defaults when `None`
    #[must_use]
    pub fn with_config(config: Option<LoggerConfig>) -> Self {
        let config = config.unwrap_or_default();

        Self {
            level: AtomicU8::new(config.level as u8),
            settings: RwLock::new(Settings {
                name: Arc::from(config.name),
                enable_caller: config.enable_caller,
                caller_depth: config.caller_depth,
                formatter: config
                    .formatter
                    .unwrap_or_else(|| Arc::new(TextFormatter) as Arc<dyn Formatter>),
                on_error: config.on_error.unwrap_or_else(abort_on_error),
            }),
            sink: Mutex::new(
                config
                    .output
                    .unwrap_or_else(|| Box::new(io::stdout()) as Box<dyn Sink>),
            ),
            pool: BufferPool::new(),
            metrics: LoggerMetrics::new(),
            exit: config.exit,
        }
    }

    /// Set the minimum level; integral values outside the range become `Info`
    pub fn set_level(&self, level: impl Into<Level>) -> &Self {
        self.level.store(level.into() as u8, Ordering::Relaxed);
        self
    }

    /// Replace the sink. The previous sink is dropped without being closed.
    pub fn set_output(&self, output: impl Sink + 'static) -> &Self {
        *self.sink.lock() = Box::new(output);
        self
    }

    pub fn set_formatter(&self, formatter: Arc<dyn Formatter>) -> &Self {
        self.settings.write().formatter = formatter;
        self
    }

    pub fn set_module_name(&self, name: impl Into<String>) -> &Self {
        self.settings.write().name = Arc::from(name.into());
        self
    }

    /// Enable or disable call-site reporting.
    ///
    /// The reported location always comes from `#[track_caller]` and is the
    /// application's call. `depth` is the number of call layers above the
    /// logger; it is handed to formatters in [`Record::caller_depth`] and does
    /// not change which location is reported.
    pub fn set_caller(&self, enable: bool, depth: usize) -> &Self {
        {
            let mut settings = self.settings.write();
            settings.enable_caller = enable;
            settings.caller_depth = depth;
        }
        self
    }

    pub fn set_error_handler(&self, handler: ErrorHandler) -> &Self {
        self.settings.write().on_error = handler;
        self
    }

    #[inline]
    pub fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Relaxed))
    }

    /// Whether a call at `level` passes the gate
    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        level as u8 >= self.level.load(Ordering::Relaxed)
    }

    pub fn module_name(&self) -> String {
        self.settings.read().name.to_string()
    }

    /// Caller capture flag and configured depth
    pub fn caller(&self) -> (bool, usize) {
        let settings = self.settings.read();
        (settings.enable_caller, settings.caller_depth)
    }

    pub fn formatter_name(&self) -> String {
        self.settings.read().formatter.name().to_string()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn pool(&self) -> &BufferPool {
        &self.pool
    }

    /// Log a pre-rendered message at `level`
    #[track_caller]
    #[inline]
    pub fn log(&self, level: Level, message: impl fmt::Display) {
        if !self.enabled(level) {
            self.metrics.record_filtered();
            return;
        }
        if let Err(e) = self.emit(level, format_args!("{}", message)) {
            self.handle_error(e);
        }
    }

    /// Log a template with arguments at `level`
    #[track_caller]
    #[inline]
    pub fn logf(&self, level: Level, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            self.metrics.record_filtered();
            return;
        }
        if let Err(e) = self.emit(level, args) {
            self.handle_error(e);
        }
    }

    #[track_caller]
    fn emit(&self, level: Level, args: fmt::Arguments<'_>) -> Result<()> {
        let location = Location::caller();

        // Rendering runs caller Display impls, which may call back into this
        // logger, so no settings guard may be held across it.
        let (name, enable_caller, caller_depth, formatter) = {
            let settings = self.settings.read();
            (
                Arc::clone(&settings.name),
                settings.enable_caller,
                settings.caller_depth,
                Arc::clone(&settings.formatter),
            )
        };

        let record = Record::new(&name, level, enable_caller.then_some(location), args)
            .with_caller_depth(caller_depth);
        let buf = formatter.format(&record, &self.pool);

        self.write(buf)
    }

    fn write(&self, buf: Buffer) -> Result<()> {
        let result = self.sink.lock().write_all(buf.as_bytes());
        let bytes = buf.len();
        self.pool.put(buf);

        match result {
            Ok(()) => {
                self.metrics.record_written(bytes);
                Ok(())
            }
            Err(e) => {
                self.metrics.record_failure();
                Err(LoggerError::sink_write(bytes, e))
            }
        }
    }

    fn handle_error(&self, err: LoggerError) {
        let handler = Arc::clone(&self.settings.read().on_error);
        handler(&err);
    }

    #[track_caller]
    #[inline]
    pub fn debug(&self, message: impl fmt::Display) {
        self.log(Level::Debug, message);
    }

    #[track_caller]
    #[inline]
    pub fn info(&self, message: impl fmt::Display) {
        self.log(Level::Info, message);
    }

    #[track_caller]
    #[inline]
    pub fn warn(&self, message: impl fmt::Display) {
        self.log(Level::Warn, message);
    }

    #[track_caller]
    #[inline]
    pub fn error(&self, message: impl fmt::Display) {
        self.log(Level::Error, message);
    }

    /// Log at `Fatal`, flush the sink and terminate the process with status 1.
    ///
    /// Termination does not depend on the write: a failed write is reported
    /// on stderr instead of going to the error handler.
    #[track_caller]
    pub fn fatal(&self, message: impl fmt::Display) -> ! {
        self.fatalf(format_args!("{}", message))
    }

    #[track_caller]
    #[inline]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Debug, args);
    }

    #[track_caller]
    #[inline]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Info, args);
    }

    #[track_caller]
    #[inline]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Warn, args);
    }

    #[track_caller]
    #[inline]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Error, args);
    }

    /// Template form of [`Logger::fatal`]
    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        // Fatal is the highest level, so the gate always passes
        if let Err(e) = self.emit(Level::Fatal, args) {
            eprintln!("[LOGGER ERROR] {}", e);
        }
        self.terminate()
    }

    fn terminate(&self) -> ! {
        // process::exit skips destructors, so buffered sinks must flush here
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush before exit: {}", e);
        }
        (self.exit)(1)
    }

    pub fn flush(&self) -> Result<()> {
        self.sink.lock().flush().map_err(LoggerError::sink_flush)
    }

    /// Close the sink under the write lock.
    ///
    /// Sinks without a close operation are left untouched. The logger keeps no
    /// closed state; logging after close reaches the sink, which decides
    /// whether the write fails.
    pub fn close(&self) -> Result<()> {
        self.sink.lock().close().map_err(LoggerError::sink_close)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let settings = self.settings.read();
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("name", &settings.name)
            .field("enable_caller", &settings.enable_caller)
            .field("caller_depth", &settings.caller_depth)
            .field("formatter", &settings.formatter.name())
            .finish()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.sink.get_mut().flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }
    }
}
