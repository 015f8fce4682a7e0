//! Core logger types and traits

pub mod config;
pub mod error;
pub mod log_level;
pub mod logger;
pub mod message;
pub mod record;
pub mod timestamp;
pub mod value;
pub mod writer;

pub use config::{FileWriterConfig, LevelSetting, LoggerConfig};
pub use error::{LoggerError, Result};
pub use log_level::{IntoLogLevel, LogLevel};
pub use logger::{Logger, LoggerBuilder, DEFAULT_LEVEL};
pub use message::{interpolate, process_message};
pub use record::Record;
pub use timestamp::TimestampFormat;
pub use value::{Exception, LogContext, Value, EXCEPTION_KEY};
pub use writer::Writer;
