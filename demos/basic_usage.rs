//! Basic logger usage example
//!
//! Demonstrates installing a sink, logging at every level, and adjusting the
//! runtime threshold within the build ceiling.
//!
//! Run with: cargo run --example basic_usage

use micro_logger::prelude::*;
use micro_logger::{critical, debug, error, info, warning};

fn main() -> Result<()> {
    println!("=== Micro Logger - Basic Usage Example ===\n");

    let console = ConsoleSink::new();
    let mut logger = Logger::new();
    logger.set_sink(&console);

    // Honor LOG_LEVEL from the environment if present
    logger.apply_config(&LoggerConfig::from_env()?);

    println!(
        "Build ceiling: {}, runtime threshold: {}\n",
        logger.ceiling(),
        logger.threshold()
    );

    println!("1. Logging at different levels:");
    critical!(logger, "This is a critical message");
    error!(logger, "This is an error message: %d", -1);
    warning!(logger, "This is a warning message: %s", "disk almost full");
    info!(logger, "This is an info message: %d", 42);
    debug!(logger, "This is a debug message: %s", "debugging");

    println!("\n2. Conversions:");
    info!(logger, "Hex: 0x%x / 0x%X", 0xDEAD_BEEFu32, 0xDEAD_BEEFu32);
    info!(logger, "Unsigned: %u, char: %c, percent: %%", u64::MAX, 'Z');
    info!(logger, "Missing string: %s, unknown: %q", None::<&str>);

    println!("\n3. Raising the threshold to ERROR:");
    logger.set_threshold(LogLevel::Error);
    warning!(logger, "Warning message (hidden)");
    error!(logger, "Error message (visible)");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
