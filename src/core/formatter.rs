//! Formatters turn a log call into a rendered line
//!
//! A [`Formatter`] receives the call metadata as a [`Record`] plus the logger's
//! [`BufferPool`], takes a buffer from the pool, renders into it and hands the
//! buffer back to the caller. It never writes to the sink and never returns the
//! buffer to the pool; the logger owns the buffer from that point on.
//!
//! - [`TextFormatter`]: `<timestamp> <file>:<line> <Level> msg: <message>\n` (default)
//! - [`JsonFormatter`]: one JSON object per line

use super::buffer_pool::{Buffer, BufferPool};
use super::config::DEFAULT_CALLER_DEPTH;
use super::log_level::Level;
use super::timestamp::cached_timestamp;
use serde::{Serialize, Serializer};
use std::fmt::{self, Write};
use std::panic::Location;

/// Rendered in place of the message text when a `Display` impl reports an error
pub const FORMAT_ERROR: &str = "%!(FORMAT_ERROR)";

/// Rendered in place of `<file>:<line>` when caller capture is disabled
pub const UNKNOWN_CALLER: &str = "???:0";

/// Metadata for a single log call
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub module: &'a str,
    pub level: Level,
    /// Application call site, `None` when caller capture is disabled
    pub location: Option<&'static Location<'static>>,
    /// Configured number of call layers between the application and the logger
    pub caller_depth: usize,
    pub args: fmt::Arguments<'a>,
}

impl<'a> Record<'a> {
    pub fn new(
        module: &'a str,
        level: Level,
        location: Option<&'static Location<'static>>,
        args: fmt::Arguments<'a>,
    ) -> Self {
        Self {
            module,
            level,
            location,
            caller_depth: DEFAULT_CALLER_DEPTH,
            args,
        }
    }

    #[must_use]
    pub fn with_caller_depth(mut self, depth: usize) -> Self {
        self.caller_depth = depth;
        self
    }
}

/// Pluggable rendering strategy
pub trait Formatter: Send + Sync {
    /// Render `record` into a buffer taken from `pool`.
    fn format(&self, record: &Record<'_>, pool: &BufferPool) -> Buffer;

    fn name(&self) -> &str;
}

/// Append the message of `args` to `buf`.
///
/// A template without arguments is copied verbatim; otherwise it is
/// interpolated. A failing `Display` impl leaves [`FORMAT_ERROR`] inline.
pub fn write_message(buf: &mut Buffer, args: fmt::Arguments<'_>) {
    match args.as_str() {
        Some(text) => buf.push_str(text),
        None => {
            if fmt::write(buf, args).is_err() {
                buf.push_str(FORMAT_ERROR);
            }
        }
    }
}

/// Append `<file>:<line>` for `location`, or [`UNKNOWN_CALLER`].
pub fn write_caller(buf: &mut Buffer, location: Option<&'static Location<'static>>) {
    match location {
        Some(location) => {
            buf.push_str(location.file());
            // Buffer's fmt::Write never fails
            let _ = write!(buf, ":{}", location.line());
        }
        None => buf.push_str(UNKNOWN_CALLER),
    }
}

/// The default line layout
///
/// ```text
/// 2025-01-08 10:30:45 src/main.rs:42 Info msg: Server started
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for TextFormatter {
    fn format(&self, record: &Record<'_>, pool: &BufferPool) -> Buffer {
        let timestamp = cached_timestamp();

        let mut buf = pool.get();
        buf.push_str(&timestamp);
        buf.push_str(" ");
        write_caller(&mut buf, record.location);
        buf.push_str(" ");
        buf.push_str(record.level.as_str());
        buf.push_str(" msg: ");
        write_message(&mut buf, record.args);
        buf.push_str("\n");
        buf
    }

    fn name(&self) -> &str {
        "text"
    }
}

/// One JSON object per line
///
/// ```text
/// {"time":"2025-01-08 10:30:45","level":"Info","module":"api","caller":"src/main.rs:42","msg":"Server started"}
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

struct Caller(Option<&'static Location<'static>>);

impl Serialize for Caller {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Some(location) => {
                serializer.collect_str(&format_args!("{}:{}", location.file(), location.line()))
            }
            None => serializer.serialize_none(),
        }
    }
}

#[derive(Serialize)]
struct JsonLine<'a> {
    time: &'a str,
    level: &'static str,
    module: &'a str,
    caller: Caller,
    msg: &'a str,
}

impl Formatter for JsonFormatter {
    fn format(&self, record: &Record<'_>, pool: &BufferPool) -> Buffer {
        let timestamp = cached_timestamp();

        let mut message = pool.get();
        write_message(&mut message, record.args);

        let mut buf = pool.get();
        {
            let msg = message.as_str_lossy();
            let line = JsonLine {
                time: &timestamp,
                level: record.level.as_str(),
                module: record.module,
                caller: Caller(record.location),
                msg: &msg,
            };
            if let Err(e) = serde_json::to_writer(&mut buf, &line) {
                buf.reset();
                let _ = write!(buf, "{{\"error\":\"{}\"}}", e);
            }
        }
        buf.push_str("\n");

        pool.put(message);
        buf
    }

    fn name(&self) -> &str {
        "json"
    }
}
