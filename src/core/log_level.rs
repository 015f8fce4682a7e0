//! Log level definitions
//!
//! Severities follow RFC 5424: `Emergency` (0) is the most severe and
//! `Debug` (7) the least. A record passes a threshold when its numeric
//! level is lower than or equal to the threshold's.

use super::error::{LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum LogLevel {
    Emergency = 0,
    Alert = 1,
    Critical = 2,
    Error = 3,
    Warning = 4,
    Notice = 5,
    Info = 6,
    Debug = 7,
}

impl LogLevel {
    /// All levels, most severe first
    pub const ALL: [LogLevel; 8] = [
        LogLevel::Emergency,
        LogLevel::Alert,
        LogLevel::Critical,
        LogLevel::Error,
        LogLevel::Warning,
        LogLevel::Notice,
        LogLevel::Info,
        LogLevel::Debug,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Emergency => "EMERGENCY",
            LogLevel::Alert => "ALERT",
            LogLevel::Critical => "CRITICAL",
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARNING",
            LogLevel::Notice => "NOTICE",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Look up a level by its numeric RFC 5424 value
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value)).copied()
    }

    /// Whether a record at `self` passes the given threshold
    #[inline]
    pub fn passes(self, threshold: LogLevel) -> bool {
        self <= threshold
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| LoggerError::invalid_level(s))
    }
}

impl TryFrom<i64> for LogLevel {
    type Error = LoggerError;

    fn try_from(value: i64) -> Result<Self> {
        u8::try_from(value)
            .ok()
            .and_then(Self::from_u8)
            .ok_or_else(|| LoggerError::invalid_level(value.to_string()))
    }
}

/// Anything a level can be resolved from: a [`LogLevel`], its numeric
/// value, or its (case-insensitive) name.
pub trait IntoLogLevel {
    fn into_log_level(self) -> Result<LogLevel>;
}

impl IntoLogLevel for LogLevel {
    fn into_log_level(self) -> Result<LogLevel> {
        Ok(self)
    }
}

impl IntoLogLevel for &str {
    fn into_log_level(self) -> Result<LogLevel> {
        self.parse()
    }
}

impl IntoLogLevel for String {
    fn into_log_level(self) -> Result<LogLevel> {
        self.parse()
    }
}

impl IntoLogLevel for &String {
    fn into_log_level(self) -> Result<LogLevel> {
        self.parse()
    }
}

macro_rules! int_into_log_level {
    ($($ty:ty),*) => {
        $(
            impl IntoLogLevel for $ty {
                fn into_log_level(self) -> Result<LogLevel> {
                    i64::try_from(self)
                        .map_err(|_| LoggerError::invalid_level(self.to_string()))
                        .and_then(LogLevel::try_from)
                }
            }
        )*
    };
}

int_into_log_level!(i8, i16, i32, i64, u8, u16, u32, u64, usize);
