//! File logging example
//!
//! Demonstrates threshold filtering, context interpolation and size-based
//! rotation into numbered backups.
//!
//! Run with: cargo run --example file_logging

use rotating_logger::prelude::*;
use rotating_logger::{info, warning};
use std::fs;
use std::io;

fn main() -> Result<()> {
    println!("=== Rotating Logger - File Logging Example ===\n");

    // Rotate at 4 KiB and keep the active file plus two backups
    let limits = RotationLimits::new().with_max_size_bytes(4096).with_max_count(3);
    let writer = RotatingFileWriter::with_limits("application.log", limits, true)?;

    let logger = Logger::builder()
        .level(LogLevel::Info)
        .time_format("%Y-%m-%d %H:%M:%S")
        .writer(writer)
        .build()?;

    println!("1. Filtering by threshold (INFO):");
    logger.info("Application started", None)?;
    logger.debug("Loading configuration...", None)?;
    logger.notice("Configuration loaded successfully", None)?;
    warning!(logger, "Using default settings for {} options", 2)?;

    println!("\n2. Interpolating context:");
    let ctx = LogContext::new()
        .with_field("user", "alice")
        .with_field("attempts", 3);
    logger.notice("User {user} signed in after {attempts} attempts", ctx)?;

    let err = io::Error::new(io::ErrorKind::ConnectionRefused, "database unreachable");
    logger.error(
        "Connecting to {host} failed",
        LogContext::new()
            .with_field("host", "db-1")
            .with_exception(&err),
    )?;

    println!("\n3. Rotating:");
    for i in 1..=200 {
        info!(logger, "Processing item {}/200", i)?;
    }

    for name in ["application.log", "application.log.1", "application.log.2"] {
        match fs::metadata(name) {
            Ok(meta) => println!("   {} ({} bytes)", name, meta.len()),
            Err(_) => println!("   {} (missing)", name),
        }
    }

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' and its numbered backups for the output");

    Ok(())
}
