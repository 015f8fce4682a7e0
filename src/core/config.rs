//! Deserializable logger configuration
//!
//! ```
//! use rotating_logger::LoggerConfig;
//!
//! let config = LoggerConfig::from_json_str(r#"{ "threshold": "notice" }"#).unwrap();
//! let logger = config.build().unwrap();
//! assert_eq!(logger.log_level(), rotating_logger::LogLevel::Notice);
//! ```

use super::error::{LoggerError, Result};
use super::log_level::{IntoLogLevel, LogLevel};
use super::logger::{Logger, DEFAULT_LEVEL};
use super::timestamp::TimestampFormat;
use crate::writers::{RotatingFileWriter, RotationLimits};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A threshold given either by number or by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LevelSetting {
    Number(i64),
    Name(String),
}

impl Default for LevelSetting {
    fn default() -> Self {
        LevelSetting::Name(DEFAULT_LEVEL.as_str().to_string())
    }
}

impl From<LogLevel> for LevelSetting {
    fn from(level: LogLevel) -> Self {
        LevelSetting::Name(level.as_str().to_string())
    }
}

impl IntoLogLevel for &LevelSetting {
    fn into_log_level(self) -> Result<LogLevel> {
        match self {
            LevelSetting::Number(n) => LogLevel::try_from(*n),
            LevelSetting::Name(name) => name.parse(),
        }
    }
}

impl IntoLogLevel for LevelSetting {
    fn into_log_level(self) -> Result<LogLevel> {
        (&self).into_log_level()
    }
}

/// One rotating file writer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileWriterConfig {
    pub path: PathBuf,
    #[serde(default = "default_max_size_mb")]
    pub max_size_mb: u64,
    #[serde(default = "default_max_count")]
    pub max_count: usize,
    #[serde(default = "default_append")]
    pub append: bool,
}

fn default_max_size_mb() -> u64 {
    1
}

fn default_max_count() -> usize {
    RotationLimits::default().max_count
}

fn default_append() -> bool {
    true
}

impl FileWriterConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_size_mb: default_max_size_mb(),
            max_count: default_max_count(),
            append: default_append(),
        }
    }

    pub fn limits(&self) -> RotationLimits {
        RotationLimits::new()
            .with_max_size_mb(self.max_size_mb)
            .with_max_count(self.max_count)
    }

    /// Open the configured writer
    pub fn open(&self) -> Result<RotatingFileWriter> {
        RotatingFileWriter::with_limits(&self.path, self.limits(), self.append)
    }
}

/// Everything needed to build a [`Logger`] with rotating file writers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    pub threshold: LevelSetting,
    pub time_format: Option<String>,
    pub files: Vec<FileWriterConfig>,
}

impl LoggerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation(
                "reading logger configuration",
                format!("cannot read '{}'", path.display()),
                e,
            )
        })?;
        Self::from_json_str(&content)
    }

    /// Build the logger and attach one writer per `files` entry, in order.
    ///
    /// # Errors
    ///
    /// Fails on an invalid threshold or time format, or if a file cannot be
    /// opened.
    pub fn build(&self) -> Result<Logger> {
        let time_format = match &self.time_format {
            Some(pattern) => TimestampFormat::parse(pattern)?,
            None => TimestampFormat::default(),
        };
        let logger = Logger::new(&self.threshold, time_format)?;
        for file in &self.files {
            logger.attach_writer(file.open()?);
        }
        Ok(logger)
    }
}
