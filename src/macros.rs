//! Logging macros for ergonomic log message formatting.
//!
//! These macros format their arguments with `format!` and log the result
//! without a context. Each expands to the `Result` returned by
//! [`Logger::log`](crate::Logger::log).
//!
//! # Examples
//!
//! ```
//! use rotating_logger::prelude::*;
//! use rotating_logger::{error, info};
//!
//! # fn main() -> rotating_logger::Result<()> {
//! let (writer, records) = MemoryWriter::new();
//! let logger = Logger::builder().level(LogLevel::Info).writer(writer).build()?;
//!
//! info!(logger, "Server started")?;
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port)?;
//! error!(logger, "Request {} failed with {}", 42, 503)?;
//!
//! assert_eq!(records.lock().len(), 3);
//! # Ok(())
//! # }
//! ```

/// Log a formatted message at an explicit level.
///
/// The level may be anything accepted by [`Logger::log`](crate::Logger::log).
///
/// ```
/// # use rotating_logger::prelude::*;
/// # let logger = Logger::builder().level("debug").build().unwrap();
/// use rotating_logger::log;
/// log!(logger, LogLevel::Notice, "Simple message").unwrap();
/// log!(logger, "error", "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+), None)
    };
}

/// Log an emergency-level message.
#[macro_export]
macro_rules! emergency {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Emergency, $($arg)+)
    };
}

/// Log an alert-level message.
#[macro_export]
macro_rules! alert {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Alert, $($arg)+)
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Critical, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use rotating_logger::prelude::*;
/// # let logger = Logger::builder().build().unwrap();
/// use rotating_logger::error;
/// error!(logger, "Failed to connect to database").unwrap();
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error").unwrap();
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log a notice-level message.
#[macro_export]
macro_rules! notice {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Notice, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use rotating_logger::prelude::*;
/// # let logger = Logger::builder().level("info").build().unwrap();
/// use rotating_logger::info;
/// info!(logger, "Processing {} items", 100).unwrap();
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}
