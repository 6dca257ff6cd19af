//! Installs the global subscriber, so it runs in its own test binary.

use bridge_traits::{error::Result as SinkResult, LogEntry, LogLevel, LoggerSink, Url};
use core_client::{
    AppLauncher, ApplicationMetadata, Consumer, CoreClient, CoreConfig, PlatformType,
};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct CapturingSink {
    entries: Mutex<Vec<LogEntry>>,
}

impl LoggerSink for CapturingSink {
    fn log(&self, entry: LogEntry) -> SinkResult<()> {
        self.entries.lock().unwrap().push(entry);
        Ok(())
    }

    fn min_level(&self) -> LogLevel {
        LogLevel::Debug
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
        Some("com.acme.app".to_string())
    }

    fn platform(&self) -> PlatformType {
        PlatformType::Android
    }
}

#[test]
fn test_debug_logging_reaches_host_sink() {
    let sink = Arc::new(CapturingSink::default());

    let client = CoreClient::new(
        CoreConfig::builder()
            .app_launcher(Arc::new(NoApps))
            .application_metadata(Arc::new(Bundle))
            .logger_sink(sink.clone())
            .debug_logging(true)
            .build()
            .unwrap(),
    );

    // Later calls are no-ops and must not replace the sink.
    CoreClient::debug_logger();
    CoreClient::debug_logger();

    assert!(client
        .verify_consumer(&[Consumer::new(PlatformType::Android, "com.acme.app")])
        .is_ok());
    assert!(client.verify_consumer(&[]).is_err());

    let entries = sink.entries.lock().unwrap();
    assert!(entries
        .iter()
        .any(|entry| entry.level == LogLevel::Debug && entry.message == "Consumer verified"));
    assert!(entries.iter().any(|entry| {
        entry.level == LogLevel::Warn
            && entry.fields.get("app_id").map(String::as_str) == Some("com.acme.app")
    }));
}
