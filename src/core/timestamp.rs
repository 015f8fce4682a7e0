//! Timestamp formatting utilities
//!
//! Records carry their timestamp as text. The instant is captured with
//! microsecond precision in local time and rendered through a
//! [`TimestampFormat`] chosen when the logger is built.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, SecondsFormat, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use rotating_logger::TimestampFormat;
///
/// let format = TimestampFormat::parse("%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(format, TimestampFormat::Custom("%Y-%m-%d %H:%M:%S".to_string()));
///
/// // An empty pattern selects the default
/// assert_eq!(TimestampFormat::parse("").unwrap(), TimestampFormat::default());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// ISO 8601 with seconds and numeric offset: `2025-01-08T10:30:45+0100`
    Iso8601,

    /// ISO 8601 with microseconds: `2025-01-08T10:30:45.123456+01:00`
    #[default]
    Iso8601Micros,

    /// RFC 3339 format: `2025-01-08T10:30:45.123456+01:00`
    Rfc3339,

    /// Custom strftime format
    Custom(String),
}

impl TimestampFormat {
    /// Build a format from a strftime pattern.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if chrono cannot parse the pattern.
    pub fn parse(pattern: &str) -> Result<Self> {
        if pattern.is_empty() {
            return Ok(Self::default());
        }
        let format = TimestampFormat::Custom(pattern.to_string());
        format.validate()?;
        Ok(format)
    }

    /// Check that a custom pattern can be rendered; presets always can.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if chrono cannot parse the pattern.
    pub fn validate(&self) -> Result<()> {
        match self {
            TimestampFormat::Custom(pattern)
                if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) =>
            {
                Err(LoggerError::config(
                    "TimestampFormat",
                    format!("unsupported time format pattern '{}'", pattern),
                ))
            }
            _ => Ok(()),
        }
    }

    /// Format a `DateTime` according to this format
    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        match self {
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%z").to_string(),
            TimestampFormat::Iso8601Micros => {
                datetime.format("%Y-%m-%dT%H:%M:%S%.6f%:z").to_string()
            }
            TimestampFormat::Rfc3339 => datetime.to_rfc3339_opts(SecondsFormat::Micros, false),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }

    /// Capture the current local instant and format it
    #[must_use]
    pub fn now(&self) -> String {
        self.format(&Local::now())
    }
}
