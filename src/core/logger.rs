//! Main logger implementation

use super::{
    error::Result,
    log_level::{IntoLogLevel, LogLevel},
    message::process_message,
    record::Record,
    timestamp::TimestampFormat,
    value::{LogContext, Value},
    writer::Writer,
};
use parking_lot::{Mutex, RwLock};

/// Default threshold used by [`LoggerBuilder`]
pub const DEFAULT_LEVEL: LogLevel = LogLevel::Error;

/// Filters messages against a threshold and dispatches the resulting
/// records to its writers, in attachment order, on the caller's thread.
pub struct Logger {
    threshold: RwLock<LogLevel>,
    time_format: TimestampFormat,
    writers: Mutex<Vec<Box<dyn Writer>>>,
}

macro_rules! level_methods {
    ($($(#[$doc:meta])* $name:ident => $level:ident),* $(,)?) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name(
                &self,
                message: impl Into<Value>,
                context: impl Into<Option<LogContext>>,
            ) -> Result<Option<Record>> {
                self.log(LogLevel::$level, message, context)
            }
        )*
    };
}

impl Logger {
    /// Create a logger with the given threshold and time format.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLevel` if `level` does not resolve to a severity and
    /// `InvalidConfiguration` if `time_format` is a pattern chrono rejects.
    ///
    /// ```
    /// use rotating_logger::{Logger, TimestampFormat};
    ///
    /// assert!(Logger::new("invalid", TimestampFormat::default()).is_err());
    /// let logger = Logger::new("warning", TimestampFormat::default()).unwrap();
    /// assert!(logger.info("filtered", None).unwrap().is_none());
    /// ```
    pub fn new(level: impl IntoLogLevel, time_format: TimestampFormat) -> Result<Self> {
        let threshold = level.into_log_level()?;
        time_format.validate()?;
        Ok(Self {
            threshold: RwLock::new(threshold),
            time_format,
            writers: Mutex::new(Vec::new()),
        })
    }

    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Change the threshold. Returns `false` and keeps the current
    /// threshold if `level` does not resolve.
    pub fn set_log_level(&self, level: impl IntoLogLevel) -> bool {
        match level.into_log_level() {
            Ok(level) => {
                *self.threshold.write() = level;
                true
            }
            Err(_) => false,
        }
    }

    pub fn log_level(&self) -> LogLevel {
        *self.threshold.read()
    }

    pub fn time_format(&self) -> &TimestampFormat {
        &self.time_format
    }

    /// Append a writer; writers are notified in the order they were attached.
    pub fn attach_writer<W: Writer + 'static>(&self, writer: W) {
        self.writers.lock().push(Box::new(writer));
    }

    /// Append an already boxed writer; `None` is ignored.
    pub fn attach_boxed(&self, writer: Option<Box<dyn Writer>>) {
        if let Some(writer) = writer {
            self.writers.lock().push(writer);
        }
    }

    pub fn writer_count(&self) -> usize {
        self.writers.lock().len()
    }

    /// Log `message` at `level`.
    ///
    /// Returns `Ok(None)` without side effects if `level` does not resolve
    /// or is less severe than the threshold. Otherwise the record is built,
    /// written by every writer, and returned. The first writer error is
    /// returned as is; writers after it are not called.
    pub fn log(
        &self,
        level: impl IntoLogLevel,
        message: impl Into<Value>,
        context: impl Into<Option<LogContext>>,
    ) -> Result<Option<Record>> {
        let level = match level.into_log_level() {
            Ok(level) => level,
            Err(_) => return Ok(None),
        };
        if !level.passes(self.log_level()) {
            return Ok(None);
        }

        let timestamp = self.time_format.now();
        let context = context.into();
        let message = process_message(&message.into(), context.as_ref());
        let record = Record::new(level, message, timestamp, context);

        self.dispatch(&record)?;
        Ok(Some(record))
    }

    fn dispatch(&self, record: &Record) -> Result<()> {
        let mut writers = self.writers.lock();
        for (idx, writer) in writers.iter_mut().enumerate() {
            if let Err(e) = writer.write(record) {
                log::debug!("writer #{} ({}) failed: {}", idx, writer.name(), e);
                return Err(e);
            }
        }
        Ok(())
    }

    level_methods! {
        /// Log at [`LogLevel::Emergency`]
        emergency => Emergency,
        /// Log at [`LogLevel::Alert`]
        alert => Alert,
        /// Log at [`LogLevel::Critical`]
        critical => Critical,
        /// Log at [`LogLevel::Error`]
        error => Error,
        /// Log at [`LogLevel::Warning`]
        warning => Warning,
        /// Log at [`LogLevel::Notice`]
        notice => Notice,
        /// Log at [`LogLevel::Info`]
        info => Info,
        /// Log at [`LogLevel::Debug`]
        debug => Debug,
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rotating_logger::prelude::*;
///
/// let (writer, records) = MemoryWriter::new();
/// let logger = Logger::builder()
///     .level("debug")
///     .time_format("%H:%M:%S")
///     .writer(writer)
///     .build()
///     .unwrap();
///
/// logger.debug("ready", None).unwrap();
/// assert_eq!(records.lock().len(), 1);
/// ```
pub struct LoggerBuilder {
    level: Result<LogLevel>,
    time_format: Result<TimestampFormat>,
    writers: Vec<Box<dyn Writer>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            level: Ok(DEFAULT_LEVEL),
            time_format: Ok(TimestampFormat::default()),
            writers: Vec::new(),
        }
    }

    /// Set the threshold; an unresolvable level fails `build`
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: impl IntoLogLevel) -> Self {
        self.level = level.into_log_level();
        self
    }

    /// Set a strftime pattern; an invalid pattern fails `build`
    #[must_use = "builder methods return a new value"]
    pub fn time_format(mut self, pattern: &str) -> Self {
        self.time_format = TimestampFormat::parse(pattern);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.time_format = Ok(format);
        self
    }

    /// Add a writer
    #[must_use = "builder methods return a new value"]
    pub fn writer<W: Writer + 'static>(mut self, writer: W) -> Self {
        self.writers.push(Box::new(writer));
        self
    }

    /// Build the Logger
    ///
    /// # Errors
    ///
    /// Returns the first configuration error recorded by the builder.
    pub fn build(self) -> Result<Logger> {
        let level = self.level?;
        let time_format = self.time_format?;
        let logger = Logger::new(level, time_format)?;
        logger.writers.lock().extend(self.writers);
        Ok(logger)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.log_level())
            .field("time_format", &self.time_format)
            .field("writers", &self.writer_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::LoggerError;
    use crate::writers::MemoryWriter;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct FailingWriter;

    impl Writer for FailingWriter {
        fn write<'r>(&mut self, _record: &'r Record) -> Result<&'r Record> {
            Err(LoggerError::writer("disk on fire"))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    struct CountingWriter(Arc<AtomicUsize>);

    impl Writer for CountingWriter {
        fn write<'r>(&mut self, record: &'r Record) -> Result<&'r Record> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(record)
        }

        fn name(&self) -> &str {
            "counting"
        }
    }

    fn debug_logger() -> (Logger, crate::writers::SharedRecords) {
        let (writer, records) = MemoryWriter::new();
        let logger = Logger::builder()
            .level(LogLevel::Debug)
            .writer(writer)
            .build()
            .unwrap();
        (logger, records)
    }

    #[test]
    fn test_msg_level_too_low() {
        let logger = Logger::new(LogLevel::Error, TimestampFormat::default()).unwrap();
        assert!(logger.info("should return none", None).unwrap().is_none());
    }

    #[test]
    fn test_msg_logging() {
        let (logger, records) = debug_logger();
        let record = logger.error("should get logged", None).unwrap().unwrap();

        assert_eq!(record.message(), "should get logged");
        assert_eq!(record.level_name(), "ERROR");
        assert_eq!(record.level() as u8, 3);
        assert!(!record.timestamp().is_empty());
        assert_eq!(records.lock().as_slice(), [record]);
    }

    #[test]
    fn test_log_integer() {
        let (logger, _) = debug_logger();
        let record = logger.debug(1, None).unwrap().unwrap();
        assert_eq!(record.message(), "1");
    }

    #[test]
    fn test_log_interpolation() {
        let (logger, _) = debug_logger();
        let ctx = LogContext::new().with_field("test", "World");
        let record = logger.debug("Hello {test}!", ctx).unwrap().unwrap();
        assert_eq!(record.message(), "Hello World!");
        assert!(record.context().is_some());
    }

    #[test]
    fn test_empty_list_message() {
        let (logger, _) = debug_logger();
        let record = logger.debug(Vec::<i32>::new(), None).unwrap().unwrap();
        assert!(record.message().is_empty());
    }

    #[test]
    fn test_opaque_message() {
        struct Plain;
        let (logger, _) = debug_logger();
        let record = logger.debug(Value::opaque::<Plain>(), None).unwrap().unwrap();
        assert!(record.message().is_empty());
    }

    #[test]
    fn test_exception_in_context() {
        let (logger, _) = debug_logger();
        let err = std::io::Error::new(std::io::ErrorKind::Other, "42552b1f133f");
        let ctx = LogContext::new().with_exception(&err);
        let record = logger.debug("test", ctx).unwrap().unwrap();
        assert!(record.message().contains("42552b1f133f"));
    }

    #[test]
    fn test_invalid_log_level() {
        let err = Logger::new("invalid", TimestampFormat::default()).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidLevel { .. }));
        assert!(Logger::new(8, TimestampFormat::default()).is_err());
        assert!(Logger::builder().level("verbose").build().is_err());
    }

    #[test]
    fn test_invalid_time_format() {
        let err = Logger::builder().time_format("%Q").build().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_unvalidated_custom_format_rejected() {
        let bad = TimestampFormat::Custom("%Q".to_string());

        let err = Logger::new("debug", bad.clone()).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = Logger::builder().timestamp_format(bad).build().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_custom_format_logs_without_panic() {
        let (writer, records) = MemoryWriter::new();
        let logger = Logger::builder()
            .level(LogLevel::Debug)
            .timestamp_format(TimestampFormat::Custom("%Y/%m/%d".to_string()))
            .writer(writer)
            .build()
            .unwrap();

        logger.error("x", None).unwrap();
        assert_eq!(records.lock()[0].timestamp().len(), 10);
    }

    #[test]
    fn test_invalid_level_name_is_noop() {
        let (logger, records) = debug_logger();
        assert!(logger.log("test", "test", None).unwrap().is_none());
        assert!(logger.log(42, "test", None).unwrap().is_none());
        assert!(records.lock().is_empty());
    }

    #[test]
    fn test_log_by_name_and_number() {
        let (logger, records) = debug_logger();
        let by_name = logger.log("Critical", "x", None).unwrap().unwrap();
        let by_number = logger.log(2, "x", None).unwrap().unwrap();
        assert_eq!(by_name.level(), LogLevel::Critical);
        assert_eq!(by_number.level(), LogLevel::Critical);
        assert_eq!(records.lock().len(), 2);
    }

    #[test]
    fn test_set_log_level() {
        let logger = Logger::new(LogLevel::Debug, TimestampFormat::default()).unwrap();

        assert!(logger.set_log_level("warning"));
        assert_eq!(logger.log_level(), LogLevel::Warning);

        assert!(!logger.set_log_level("nonsense"));
        assert!(!logger.set_log_level(-1));
        assert_eq!(logger.log_level(), LogLevel::Warning);

        assert!(logger.set_log_level(0));
        assert_eq!(logger.log_level(), LogLevel::Emergency);
    }

    #[test]
    fn test_threshold_boundaries() {
        let (logger, records) = debug_logger();
        assert!(logger.set_log_level(LogLevel::Warning));
        assert!(logger.error("error under warning", None).unwrap().is_some());
        assert!(logger.warning("warning under warning", None).unwrap().is_some());
        assert!(logger.notice("notice under warning", None).unwrap().is_none());

        assert!(logger.set_log_level(LogLevel::Critical));
        assert!(logger.error("error under critical", None).unwrap().is_none());
        assert_eq!(records.lock().len(), 2);
    }

    #[test]
    fn test_convenience_methods_use_their_level() {
        let (logger, _) = debug_logger();
        let levels = [
            logger.emergency("m", None),
            logger.alert("m", None),
            logger.critical("m", None),
            logger.error("m", None),
            logger.warning("m", None),
            logger.notice("m", None),
            logger.info("m", None),
            logger.debug("m", None),
        ]
        .into_iter()
        .map(|r| r.unwrap().unwrap().level())
        .collect::<Vec<_>>();

        assert_eq!(levels, LogLevel::ALL);
    }

    #[test]
    fn test_writers_notified_in_order() {
        let (first, first_records) = MemoryWriter::new();
        let (second, second_records) = MemoryWriter::new();
        let logger = Logger::builder()
            .level(LogLevel::Info)
            .writer(first)
            .build()
            .unwrap();
        logger.attach_writer(second);
        logger.attach_boxed(None);
        assert_eq!(logger.writer_count(), 2);

        logger.info("one", None).unwrap();
        logger.info("two", None).unwrap();

        let first_msgs: Vec<_> = first_records
            .lock()
            .iter()
            .map(|r| r.message().to_string())
            .collect();
        assert_eq!(first_msgs, ["one", "two"]);
        assert_eq!(*first_records.lock(), *second_records.lock());
    }

    #[test]
    fn test_writer_failure_propagates() {
        let before = Arc::new(AtomicUsize::new(0));
        let after = Arc::new(AtomicUsize::new(0));

        let logger = Logger::builder()
            .level(LogLevel::Info)
            .writer(CountingWriter(Arc::clone(&before)))
            .writer(FailingWriter)
            .writer(CountingWriter(Arc::clone(&after)))
            .build()
            .unwrap();

        let err = logger.error("boom", None).unwrap_err();
        assert!(matches!(err, LoggerError::Writer(_)));
        assert_eq!(before.load(Ordering::SeqCst), 1);
        assert_eq!(after.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_filtered_call_touches_no_writer() {
        let count = Arc::new(AtomicUsize::new(0));
        let logger = Logger::builder()
            .level(LogLevel::Error)
            .writer(CountingWriter(Arc::clone(&count)))
            .build()
            .unwrap();

        logger.debug("quiet", None).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_builder_default_level() {
        let logger = LoggerBuilder::default().build().unwrap();
        assert_eq!(logger.log_level(), DEFAULT_LEVEL);
        assert_eq!(logger.writer_count(), 0);
    }
}
