//! Process-wide default logger
//!
//! The default instance is built once, either explicitly through
//! [`init_global`] before first use or lazily on the first call to [`global`]
//! or any free function here. After that it is only changed through the
//! logger's own synchronized setters.
//!
//! Every free function adds one call layer between the application and the
//! logger, so the default instance is configured one caller-depth deeper than
//! a directly constructed logger. Each layer is `#[track_caller]`, which keeps
//! the reported `file:line` on the application's call.

use crate::core::{
    Level, Logger, LoggerConfig, LoggerError, Result, Sink, DEFAULT_CALLER_DEPTH,
};
use std::fmt;
use std::sync::OnceLock;

/// Module name of the default instance
pub const GLOBAL_NAME: &str = "global";

/// Caller depth of the default instance
pub const GLOBAL_CALLER_DEPTH: usize = DEFAULT_CALLER_DEPTH + 1;

static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

fn default_config() -> LoggerConfig {
    LoggerConfig::new()
        .with_name(GLOBAL_NAME)
        .with_level(Level::Info)
        .with_caller(true, GLOBAL_CALLER_DEPTH)
}

/// The process-wide logger, built with the defaults on first access.
pub fn global() -> &'static Logger {
    GLOBAL_LOGGER.get_or_init(|| Logger::with_config(Some(default_config())))
}

/// Install `config` as the process-wide logger.
///
/// The configured caller depth is that of a directly used logger; one is added
/// for the free-function layer. Fails with [`LoggerError::AlreadyInitialized`]
/// once the instance exists.
pub fn init_global(config: LoggerConfig) -> Result<&'static Logger> {
    let depth = config.caller_depth + 1;
    let enable = config.enable_caller;
    let mut config = Some(config.with_caller(enable, depth));

    let logger = GLOBAL_LOGGER.get_or_init(|| Logger::with_config(config.take()));
    match config {
        Some(_) => Err(LoggerError::AlreadyInitialized),
        None => Ok(logger),
    }
}

pub fn set_log_level(level: impl Into<Level>) {
    global().set_level(level);
}

pub fn set_output(output: impl Sink + 'static) {
    global().set_output(output);
}

#[track_caller]
pub fn debug(message: impl fmt::Display) {
    global().debug(message);
}

#[track_caller]
pub fn debugf(args: fmt::Arguments<'_>) {
    global().debugf(args);
}

#[track_caller]
pub fn info(message: impl fmt::Display) {
    global().info(message);
}

#[track_caller]
pub fn infof(args: fmt::Arguments<'_>) {
    global().infof(args);
}

#[track_caller]
pub fn warn(message: impl fmt::Display) {
    global().warn(message);
}

#[track_caller]
pub fn warnf(args: fmt::Arguments<'_>) {
    global().warnf(args);
}

#[track_caller]
pub fn error(message: impl fmt::Display) {
    global().error(message);
}

#[track_caller]
pub fn errorf(args: fmt::Arguments<'_>) {
    global().errorf(args);
}

#[track_caller]
pub fn fatal(message: impl fmt::Display) -> ! {
    global().fatal(message)
}

#[track_caller]
pub fn fatalf(args: fmt::Arguments<'_>) -> ! {
    global().fatalf(args)
}

/// Same as [`info`]
#[track_caller]
pub fn println(message: impl fmt::Display) {
    global().info(message);
}

/// Same as [`infof`]
#[track_caller]
pub fn printf(args: fmt::Arguments<'_>) {
    global().infof(args);
}

/// Same as [`fatal`]
#[track_caller]
pub fn fatalln(message: impl fmt::Display) -> ! {
    global().fatal(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_defaults_and_single_init() {
        let logger = global();
        assert_eq!(logger.module_name(), GLOBAL_NAME);
        assert_eq!(logger.caller(), (true, DEFAULT_CALLER_DEPTH + 1));
        assert!(std::ptr::eq(logger, global()));

        assert!(matches!(
            init_global(LoggerConfig::new()),
            Err(LoggerError::AlreadyInitialized)
        ));
    }
}
