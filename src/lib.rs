//! # Rotating Logger
//!
//! A synchronous, leveled logger that fans records out to pluggable writers,
//! with a rotating file writer that keeps a bounded set of numbered backups.
//!
//! ## Features
//!
//! - **RFC 5424 Levels**: Eight severities, `Emergency` (0) to `Debug` (7)
//! - **Interpolation**: `{key}` placeholders filled from a per-call context
//! - **Rotating Files**: Size-triggered rotation with `<path>.N` backups
//! - **Synchronous**: Every record is written before `log` returns
//!
//! ```no_run
//! use rotating_logger::prelude::*;
//!
//! let writer = RotatingFileWriter::new("app.log").unwrap();
//! let logger = Logger::builder().level(LogLevel::Info).writer(writer).build().unwrap();
//!
//! let ctx = LogContext::new().with_field("user", "alice");
//! logger.info("{user} logged in", ctx).unwrap();
//! ```

pub mod core;
pub mod macros;
pub mod writers;

pub mod prelude {
    pub use crate::core::{
        Exception, IntoLogLevel, LogContext, LogLevel, Logger, LoggerBuilder, LoggerConfig,
        LoggerError, Record, Result, TimestampFormat, Value, Writer,
    };
    pub use crate::writers::{MemoryWriter, RotatingFileWriter, RotationLimits};
}

pub use core::{
    interpolate, process_message, Exception, FileWriterConfig, IntoLogLevel, LevelSetting,
    LogContext, LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError, Record, Result,
    TimestampFormat, Value, Writer, DEFAULT_LEVEL, EXCEPTION_KEY,
};
pub use writers::{MemoryWriter, RotatingFileWriter, RotationLimits, SharedRecords};
