//! The debug logger installs the process-wide subscriber, so these tests live
//! in their own binary.

use core_runtime::logging::{debug_logging_enabled, enable_debug_logging};
use std::thread;
use tracing::level_filters::LevelFilter;
use tracing::Level;

#[test]
fn test_debug_logger_is_idempotent() {
    enable_debug_logging();
    enable_debug_logging();

    assert!(debug_logging_enabled());
    assert!(LevelFilter::current() >= LevelFilter::DEBUG);
    assert!(tracing::enabled!(target: "core_client", Level::DEBUG));
    assert!(!tracing::enabled!(target: "core_client", Level::TRACE));
}

#[test]
fn test_debug_logger_covers_downstream_sdks() {
    enable_debug_logging();

    assert!(tracing::enabled!(target: "acme_payments_sdk", Level::DEBUG));
    assert!(tracing::enabled!(target: "acme_payments_sdk::checkout", Level::DEBUG));
}

#[test]
fn test_debug_logger_keeps_host_info_events() {
    enable_debug_logging();

    assert!(tracing::enabled!(target: "host_app", Level::INFO));
    assert!(tracing::enabled!(target: "host_app::network", Level::WARN));
}

#[test]
fn test_debug_logger_concurrent_initialization() {
    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(enable_debug_logging))
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert!(debug_logging_enabled());
    tracing::debug!(target: "core_client", "debug output after concurrent init");
}
