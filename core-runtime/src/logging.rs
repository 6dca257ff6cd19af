//! # Logging & Tracing Infrastructure
//!
//! Provides structured logging with the `tracing` crate, supporting:
//! - JSON, compact and pretty-print output formats
//! - Module-level filtering
//! - Integration with host logging via `LoggerSink`
//! - A process-wide, idempotent debug logger
//!
//! ## Overview
//!
//! This module configures the `tracing-subscriber` infrastructure and provides
//! utilities for forwarding logs to platform-specific logging systems through
//! the `LoggerSink` trait. When a sink is configured, every event that survives
//! filtering is mirrored to the host logger while still flowing through the
//! standard `tracing` layers.
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::logging::{init_logging, LogFormat, LoggingConfig};
//! use bridge_traits::{ConsoleLogger, LogLevel};
//! use std::sync::Arc;
//!
//! let config = LoggingConfig::default()
//!     .with_format(LogFormat::Compact)
//!     .with_level(LogLevel::Debug)
//!     .with_logger_sink(Arc::new(ConsoleLogger::default()));
//!
//! init_logging(config)?;
//! tracing::info!("SDK started");
//! ```
//!
//! ## Debug logger
//!
//! [`enable_debug_logging`] is the one-call switch SDK integrators flip while
//! wiring things up. It may be called any number of times from any thread.
//! The SDK owns at most one subscriber per process: whichever of
//! [`init_logging`], [`install_logging`] or [`enable_debug_logging`] runs
//! first installs it, and the debug logger raises the level of that
//! subscriber in place when it was installed at a quieter level.

use crate::error::{Error, Result};

use bridge_traits::log::{LogEntry, LogLevel, LoggerSink};

use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::fmt;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::{
    filter::EnvFilter,
    layer::{Context, SubscriberExt},
    registry::LookupSpan,
    reload,
    util::SubscriberInitExt,
    Layer, Registry,
};

type ReloadableFilter = reload::Layer<EnvFilter, Registry>;

/// Subscriber installed by this module.
struct InstalledLogging {
    filter: reload::Handle<EnvFilter, Registry>,
    debug: AtomicBool,
}

/// `None` once installation was attempted and the host already owned the
/// global subscriber.
static LOGGING: OnceCell<Option<InstalledLogging>> = OnceCell::new();

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable pretty format with colors
    Pretty,
    /// Structured JSON format for machine parsing
    Json,
    /// Compact format for production
    Compact,
}

impl Default for LogFormat {
    fn default() -> Self {
        #[cfg(debug_assertions)]
        return Self::Pretty;

        #[cfg(not(debug_assertions))]
        return Self::Json;
    }
}

/// Logging configuration
#[derive(Clone)]
pub struct LoggingConfig {
    /// Output format
    pub format: LogFormat,
    /// Minimum log level, applied to every target unless `filter` is set
    pub level: LogLevel,
    /// Custom filter string (e.g., "info,core_client=trace")
    pub filter: Option<String>,
    /// Optional logger sink for forwarding logs to host
    pub logger_sink: Option<Arc<dyn LoggerSink>>,
    /// Display target module in logs
    pub display_target: bool,
    /// Display thread info
    pub display_thread_info: bool,
}

impl fmt::Debug for LoggingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggingConfig")
            .field("format", &self.format)
            .field("level", &self.level)
            .field("filter", &self.filter)
            .field(
                "logger_sink",
                &self.logger_sink.as_ref().map(|_| "LoggerSink { ... }"),
            )
            .field("display_target", &self.display_target)
            .field("display_thread_info", &self.display_thread_info)
            .finish()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            level: LogLevel::Info,
            filter: None,
            logger_sink: None,
            display_target: true,
            display_thread_info: false,
        }
    }
}

impl LoggingConfig {
    /// Preset used by the debug logger: debug level, compact output.
    pub fn debug() -> Self {
        Self::default()
            .with_format(LogFormat::Compact)
            .with_level(LogLevel::Debug)
    }

    /// Set log format
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set minimum log level
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set custom filter string
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Set logger sink for host integration
    pub fn with_logger_sink(mut self, sink: Arc<dyn LoggerSink>) -> Self {
        self.logger_sink = Some(sink);
        self
    }

    /// Enable or disable target display
    pub fn with_target(mut self, display: bool) -> Self {
        self.display_target = display;
        self
    }

    /// Enable or disable thread info
    pub fn with_thread_info(mut self, display: bool) -> Self {
        self.display_thread_info = display;
        self
    }
}

/// Initialize the logging system
///
/// Installs a global subscriber. Subsequent calls, or a call made after the
/// host installed its own subscriber, return an error.
///
/// # Errors
///
/// Returns [`Error::Config`] if:
/// - Logging is already initialized
/// - The filter string is invalid
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let filter = build_filter(&config)?;
    let mut outcome = Err(Error::Config("Logging is already initialized".to_string()));

    LOGGING.get_or_init(|| match install(config, filter) {
        Ok(installed) => {
            outcome = Ok(());
            Some(installed)
        }
        Err(err) => {
            outcome = Err(err);
            None
        }
    });

    outcome
}

/// Install the SDK subscriber unless one was already installed.
///
/// Unlike [`init_logging`] this never fails: it returns whether SDK logging
/// is active after the call, whichever call installed it. Only the
/// configuration passed to the first successful installation is used.
pub fn install_logging(config: LoggingConfig) -> bool {
    install_once(config).is_some()
}

/// Enable verbose diagnostic output for the SDK.
///
/// Idempotent and safe to call concurrently. The first call installs a
/// debug-level subscriber writing to stdout. If the SDK subscriber is
/// already installed at a quieter level, its filter is raised to debug.
/// Failure to install (typically because the host already owns the global
/// subscriber) is swallowed.
pub fn enable_debug_logging() {
    enable_debug_logging_with(LoggingConfig::debug());
}

/// Same as [`enable_debug_logging`] with a caller-supplied configuration.
///
/// The level is raised to at least debug. Format and sink only take effect
/// when this call is the one installing the subscriber.
pub fn enable_debug_logging_with(config: LoggingConfig) {
    let config = if config.level > LogLevel::Debug {
        config.with_level(LogLevel::Debug)
    } else {
        config
    };

    let Some(installed) = install_once(config.clone()) else {
        return;
    };

    if installed.debug.swap(true, Ordering::AcqRel) {
        return;
    }

    let reloaded = build_filter(&config).and_then(|filter| {
        installed
            .filter
            .reload(filter)
            .map_err(|e| Error::Config(format!("Failed to reload log filter: {}", e)))
    });

    match reloaded {
        Ok(()) => tracing::debug!("Debug logging enabled"),
        Err(err) => {
            installed.debug.store(false, Ordering::Release);
            tracing::warn!(error = %err, "Debug logging not enabled");
        }
    }
}

/// Whether the SDK subscriber is installed and emitting debug events.
pub fn debug_logging_enabled() -> bool {
    LOGGING
        .get()
        .and_then(Option::as_ref)
        .map_or(false, |installed| installed.debug.load(Ordering::Acquire))
}

fn install_once(config: LoggingConfig) -> Option<&'static InstalledLogging> {
    let filter = match build_filter(&config) {
        Ok(filter) => filter,
        Err(err) => {
            tracing::debug!(error = %err, "SDK logging not installed");
            return LOGGING.get().and_then(Option::as_ref);
        }
    };

    LOGGING
        .get_or_init(|| match install(config, filter) {
            Ok(installed) => Some(installed),
            Err(err) => {
                // Reaches the host's subscriber, if it listens at debug level.
                tracing::debug!(error = %err, "SDK logging not installed");
                None
            }
        })
        .as_ref()
}

fn install(config: LoggingConfig, filter: EnvFilter) -> Result<InstalledLogging> {
    let debug = config.level <= LogLevel::Debug;
    let (filter, handle) = reload::Layer::new(filter);

    match config.format {
        LogFormat::Pretty => init_pretty_logging(config, filter)?,
        LogFormat::Json => init_json_logging(config, filter)?,
        LogFormat::Compact => init_compact_logging(config, filter)?,
    }

    tracing::debug!("SDK logging installed");

    Ok(InstalledLogging {
        filter: handle,
        debug: AtomicBool::new(debug),
    })
}

fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    let filter_string = match &config.filter {
        Some(custom_filter) => custom_filter.clone(),
        None => config.level.as_filter_str().to_string(),
    };

    EnvFilter::try_new(filter_string)
        .map_err(|e| Error::Config(format!("Invalid log filter: {}", e)))
}

fn init_pretty_logging(config: LoggingConfig, filter: ReloadableFilter) -> Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .pretty()
        .with_target(config.display_target)
        .with_thread_ids(config.display_thread_info)
        .with_thread_names(config.display_thread_info)
        .with_writer(io::stdout);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(LoggerSinkLayer::new(config.logger_sink))
        .try_init()
        .map_err(|e| Error::Config(format!("Failed to initialize logging: {}", e)))
}

fn init_json_logging(config: LoggingConfig, filter: ReloadableFilter) -> Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .flatten_event(true)
        .with_target(config.display_target)
        .with_thread_ids(config.display_thread_info)
        .with_thread_names(config.display_thread_info)
        .with_writer(io::stdout);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(LoggerSinkLayer::new(config.logger_sink))
        .try_init()
        .map_err(|e| Error::Config(format!("Failed to initialize logging: {}", e)))
}

fn init_compact_logging(config: LoggingConfig, filter: ReloadableFilter) -> Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_target(config.display_target)
        .with_thread_ids(config.display_thread_info)
        .with_thread_names(config.display_thread_info)
        .with_writer(io::stdout);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(LoggerSinkLayer::new(config.logger_sink))
        .try_init()
        .map_err(|e| Error::Config(format!("Failed to initialize logging: {}", e)))
}

/// Layer that forwards events to a `LoggerSink` implementation.
struct LoggerSinkLayer {
    sink: Option<Arc<dyn LoggerSink>>,
}

impl LoggerSinkLayer {
    fn new(sink: Option<Arc<dyn LoggerSink>>) -> Self {
        Self { sink }
    }
}

impl<S> Layer<S> for LoggerSinkLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let Some(sink) = self.sink.as_ref() else {
            return;
        };

        let metadata = event.metadata();
        let level = tracing_level_to_log_level(*metadata.level());

        if level < sink.min_level() {
            return;
        }

        let mut visitor = SinkVisitor::default();
        event.record(&mut visitor);

        let message = visitor
            .message
            .unwrap_or_else(|| metadata.name().to_string());

        let mut entry = LogEntry::new(level, metadata.target(), message);

        for (key, value) in visitor.fields {
            entry = entry.with_field(key, value);
        }

        if let Some(span) = ctx.lookup_current() {
            entry = entry.with_span_id(span.name());
        }

        if let Err(err) = sink.log(entry) {
            eprintln!("LoggerSink error: {}", err);
        }
    }
}

#[derive(Default)]
struct SinkVisitor {
    message: Option<String>,
    fields: HashMap<String, String>,
}

impl SinkVisitor {
    fn record_value(&mut self, field: &Field, value: String) {
        if field.name() == "message" {
            self.message = Some(value);
        } else {
            self.fields.insert(field.name().to_string(), value);
        }
    }
}

impl Visit for SinkVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.record_value(field, value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_value(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.record_value(field, value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.record_value(field, value.to_string());
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.record_value(field, value.to_string());
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.record_value(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.record_value(field, format!("{:?}", value));
    }
}

fn tracing_level_to_log_level(level: tracing::Level) -> LogLevel {
    match level {
        tracing::Level::TRACE => LogLevel::Trace,
        tracing::Level::DEBUG => LogLevel::Debug,
        tracing::Level::INFO => LogLevel::Info,
        tracing::Level::WARN => LogLevel::Warn,
        tracing::Level::ERROR => LogLevel::Error,
    }
}
