//! The SDK subscriber is installed at info level before the debug logger is
//! switched on. Needs a fresh process, hence its own binary.

use core_runtime::logging::{
    debug_logging_enabled, enable_debug_logging, init_logging, install_logging, LoggingConfig,
};
use tracing::Level;

#[test]
fn test_debug_logger_raises_installed_level() {
    assert!(install_logging(LoggingConfig::default()));
    assert!(!debug_logging_enabled());
    assert!(tracing::enabled!(target: "acme_payments_sdk", Level::INFO));
    assert!(!tracing::enabled!(target: "acme_payments_sdk", Level::DEBUG));

    enable_debug_logging();

    assert!(debug_logging_enabled());
    assert!(tracing::enabled!(target: "acme_payments_sdk", Level::DEBUG));
    assert!(tracing::enabled!(target: "core_client", Level::DEBUG));
    assert!(!tracing::enabled!(target: "core_client", Level::TRACE));

    // Installation happens once per process.
    assert!(install_logging(LoggingConfig::default()));
    assert!(init_logging(LoggingConfig::default()).is_err());
    assert!(debug_logging_enabled());
}
