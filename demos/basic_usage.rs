//! Basic logger usage example
//!
//! Demonstrates the default stdout logger, level gating, the global
//! instance, file output and the JSON formatter.
//!
//! Run with: cargo run --example basic_usage

use pooled_logger::prelude::*;
use pooled_logger::{global, info, warn};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Pooled Logger - Basic Usage Example ===\n");

    // Stdout, Info level, caller reporting on
    let logger = Logger::new();

    println!("1. Logging at different levels:");
    logger.debug("This is a debug message (hidden at Info)");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.errorf(format_args!("This is an error message with code {}", 500));

    println!("\n2. Changing the level:");
    logger.set_level(Level::Debug);
    logger.debug("Debug is visible now");
    info!(logger, "Macros target a logger too: {} items", 3);

    println!("\n3. Global logger:");
    global::set_log_level(Level::Warn);
    global::info("Info message (hidden)");
    global::warn("Warning from the global logger");
    warn!("Global macro with {}", "arguments");

    println!("\n4. File output:");
    let path = std::env::temp_dir().join("pooled_logger_demo.log");
    let file_logger = Logger::with_config(Some(
        LoggerConfig::new()
            .with_name("demo")
            .with_output(FileSink::new(&path)?),
    ));
    file_logger.info("Written to the file");
    file_logger.close()?;
    println!("   Wrote {}", path.display());

    println!("\n5. JSON formatter:");
    logger
        .set_formatter(Arc::new(JsonFormatter))
        .set_module_name("demo");
    logger.infof(format_args!("user {} logged in", "alice"));

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
