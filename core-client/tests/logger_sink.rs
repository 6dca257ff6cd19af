//! A host sink configured without the debug logger. Installs the global
//! subscriber, so it runs in its own test binary.

use bridge_traits::{error::Result as SinkResult, LogEntry, LogLevel, LoggerSink, Url};
use core_client::{
    AppLauncher, ApplicationMetadata, Consumer, CoreClient, CoreConfig, PlatformType,
};
use core_runtime::logging::debug_logging_enabled;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct RecordingSink {
    entries: Mutex<Vec<LogEntry>>,
}

impl LoggerSink for RecordingSink {
    fn log(&self, entry: LogEntry) -> SinkResult<()> {
        self.entries.lock().unwrap().push(entry);
        Ok(())
    }
}

struct NoApps;

impl AppLauncher for NoApps {
    fn can_launch(&self, _url: &Url) -> bool {
        false
    }
}

struct Bundle;

impl ApplicationMetadata for Bundle {
    fn current_application_identifier(&self) -> Option<String> {
        Some("com.other.app".to_string())
    }

    fn platform(&self) -> PlatformType {
        PlatformType::Ios
    }
}

#[test]
fn test_sink_receives_events_without_debug_logging() {
    let sink = Arc::new(RecordingSink::default());

    let client = CoreClient::new(
        CoreConfig::builder()
            .app_launcher(Arc::new(NoApps))
            .application_metadata(Arc::new(Bundle))
            .logger_sink(sink.clone())
            .build()
            .unwrap(),
    );

    assert!(!debug_logging_enabled());

    let rejected = client.verify_consumer(&[Consumer::new(PlatformType::Ios, "com.acme.app")]);
    assert!(rejected.is_err());
    tracing::error!(target: "acme_payments_sdk", "Checkout failed");
    tracing::debug!(target: "acme_payments_sdk", "filtered at info level");

    let entries = sink.entries.lock().unwrap();
    assert!(entries.iter().any(|entry| {
        entry.level == LogLevel::Warn
            && entry.fields.get("app_id").map(String::as_str) == Some("com.other.app")
    }));
    assert!(entries.iter().any(|entry| {
        entry.level == LogLevel::Error
            && entry.target == "acme_payments_sdk"
            && entry.message == "Checkout failed"
    }));
    assert!(entries.iter().all(|entry| entry.level >= LogLevel::Info));
}
