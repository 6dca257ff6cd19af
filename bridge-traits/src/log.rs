//! Logging Abstractions
//!
//! Structured log entries and the sink trait used to forward them into the
//! host's native logging pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::{self, Write};

use crate::{error::Result, platform::PlatformSendSync};

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Directive string understood by `tracing_subscriber::EnvFilter`
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Structured log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// Log level
    pub level: LogLevel,
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// Target module/component
    pub target: String,
    /// Log message
    pub message: String,
    /// Structured fields
    pub fields: HashMap<String, String>,
    /// Name of the enclosing span, if any
    pub span_id: Option<String>,
}

impl LogEntry {
    pub fn new(level: LogLevel, target: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            timestamp: Utc::now(),
            target: target.into(),
            message: message.into(),
            fields: HashMap::new(),
            span_id: None,
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn with_span_id(mut self, span_id: impl Into<String>) -> Self {
        self.span_id = Some(span_id.into());
        self
    }
}

/// Logger sink trait
///
/// Forwards structured logs from the core to host logging pipelines:
/// - **iOS**: OSLog
/// - **Android**: Logcat
/// - **Desktop**: Console, file logs, or system logging
/// - **Web**: Console API
///
/// Sinks are called synchronously from inside the `tracing` layer, so
/// implementations should hand entries off quickly and never block on I/O
/// for long.
///
/// # Example
///
/// ```ignore
/// use bridge_traits::log::{LoggerSink, LogEntry, LogLevel};
///
/// fn log_rejection(logger: &dyn LoggerSink, app_id: &str) {
///     let entry = LogEntry::new(LogLevel::Warn, "core_client", "Consumer rejected")
///         .with_field("app_id", app_id);
///     logger.log(entry).ok();
/// }
/// ```
pub trait LoggerSink: PlatformSendSync {
    /// Forward a log entry to the host logging system
    fn log(&self, entry: LogEntry) -> Result<()>;

    /// Get the minimum log level that will be processed
    ///
    /// Logs below this level can be filtered out at the source for performance.
    fn min_level(&self) -> LogLevel {
        LogLevel::Info
    }
}

/// Console logger implementation for testing/development
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    pub min_level: LogLevel,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
        }
    }
}

impl ConsoleLogger {
    fn write_entry(&self, out: &mut impl Write, entry: &LogEntry) -> Result<()> {
        let level_str = match entry.level {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        };

        writeln!(
            out,
            "[{}] {} {}: {}",
            entry.timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
            level_str,
            entry.target,
            entry.message
        )?;

        if !entry.fields.is_empty() {
            writeln!(out, "  Fields: {:?}", entry.fields)?;
        }
        Ok(())
    }
}

impl LoggerSink for ConsoleLogger {
    fn log(&self, entry: LogEntry) -> Result<()> {
        if entry.level < self.min_level {
            return Ok(());
        }
        self.write_entry(&mut io::stdout().lock(), &entry)
    }

    fn min_level(&self) -> LogLevel {
        self.min_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BridgeError;

    #[test]
    fn test_log_entry_builder() {
        let entry = LogEntry::new(LogLevel::Info, "test", "Test message")
            .with_field("app_id", "com.acme.app")
            .with_span_id("verify_consumer");

        assert_eq!(entry.level, LogLevel::Info);
        assert_eq!(entry.target, "test");
        assert_eq!(entry.message, "Test message");
        assert_eq!(
            entry.fields.get("app_id"),
            Some(&"com.acme.app".to_string())
        );
        assert_eq!(entry.span_id, Some("verify_consumer".to_string()));
    }

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Warn < LogLevel::Error);
        assert_eq!(LogLevel::Debug.as_filter_str(), "debug");
    }

    #[test]
    fn test_console_logger() {
        let logger = ConsoleLogger {
            min_level: LogLevel::Debug,
        };
        let entry = LogEntry::new(LogLevel::Debug, "test", "Test log");

        assert!(logger.log(entry).is_ok());
        assert_eq!(logger.min_level(), LogLevel::Debug);
    }

    #[test]
    fn test_console_logger_format() {
        let logger = ConsoleLogger::default();
        let entry = LogEntry::new(LogLevel::Warn, "core_client", "Consumer rejected")
            .with_field("app_id", "com.other.app");
        let mut out = Vec::new();

        logger.write_entry(&mut out, &entry).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("WARN core_client: Consumer rejected"));
        assert!(text.contains("com.other.app"));
    }

    #[test]
    fn test_console_logger_reports_write_failure() {
        struct ClosedPipe;

        impl Write for ClosedPipe {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let logger = ConsoleLogger::default();
        let entry = LogEntry::new(LogLevel::Error, "core_client", "lost");

        let err = logger.write_entry(&mut ClosedPipe, &entry).unwrap_err();
        assert!(matches!(
            err,
            BridgeError::Io(ref source) if source.kind() == io::ErrorKind::BrokenPipe
        ));
        assert!(err.to_string().starts_with("IO error"));
    }
}
