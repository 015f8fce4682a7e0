//! Log record structure

use super::log_level::LogLevel;
use super::value::{LogContext, Value};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// The immutable result of a successful log call.
///
/// Records are built by [`Logger`](super::Logger) and handed to every
/// attached writer by reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<LogContext>,
    #[serde(serialize_with = "serialize_severity")]
    level: LogLevel,
    level_name: &'static str,
    timestamp: String,
    extra: BTreeMap<String, Value>,
}

impl Record {
    pub fn new(
        level: LogLevel,
        message: impl Into<String>,
        timestamp: impl Into<String>,
        context: Option<LogContext>,
    ) -> Self {
        Self {
            message: message.into(),
            context,
            level,
            level_name: level.as_str(),
            timestamp: timestamp.into(),
            extra: BTreeMap::new(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn context(&self) -> Option<&LogContext> {
        self.context.as_ref()
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn level_name(&self) -> &'static str {
        self.level_name
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Reserved for enrichment; always empty
    pub fn extra(&self) -> &BTreeMap<String, Value> {
        &self.extra
    }

    /// The line written by file writers, without the trailing newline
    pub fn format_line(&self) -> String {
        format!("[{}][{}] {}", self.timestamp, self.level_name, self.message)
    }
}

/// Levels are serialized by numeric severity; `level_name` carries the text
fn serialize_severity<S: Serializer>(level: &LogLevel, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(*level as u8)
}
