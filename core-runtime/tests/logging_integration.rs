//! Integration tests for logging configuration

use bridge_traits::{ConsoleLogger, LogLevel};
use core_runtime::logging::{LogFormat, LoggingConfig};
use std::sync::Arc;

#[test]
fn test_debug_preset_is_verbose() {
    let config = LoggingConfig::debug();

    assert_eq!(config.level, LogLevel::Debug);
    assert_eq!(config.format, LogFormat::Compact);
    assert!(config.logger_sink.is_none());
}

#[test]
fn test_filter_configuration() {
    let config = LoggingConfig::default().with_filter("core_client=debug,bridge_desktop=trace");

    assert_eq!(
        config.filter,
        Some("core_client=debug,bridge_desktop=trace".to_string())
    );
}

#[test]
fn test_config_chaining() {
    let config = LoggingConfig::default()
        .with_format(LogFormat::Json)
        .with_level(LogLevel::Warn)
        .with_target(false)
        .with_thread_info(true)
        .with_logger_sink(Arc::new(ConsoleLogger::default()));

    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.level, LogLevel::Warn);
    assert!(!config.display_target);
    assert!(config.display_thread_info);
    assert!(config.logger_sink.is_some());
}

#[test]
fn test_config_debug_output_hides_sink() {
    let config = LoggingConfig::default().with_logger_sink(Arc::new(ConsoleLogger::default()));
    let rendered = format!("{:?}", config);

    assert!(rendered.contains("LoggerSink { ... }"));
}
