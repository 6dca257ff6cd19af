//! # Core Configuration Module
//!
//! Provides configuration management for the SDK core.
//!
//! ## Overview
//!
//! The configuration system uses a builder pattern to construct a `CoreConfig`
//! instance that holds the platform bridges the core consumes. It enforces
//! fail-fast validation so a host that forgot to inject a capability learns
//! about it at startup rather than on first use.
//!
//! ## Required Dependencies
//!
//! - `AppLauncher` - Probes installed applications by URL scheme
//! - `ApplicationMetadata` - Identifies the running application
//!
//! ## Optional Dependencies
//!
//! - `LoggerSink` - Mirrors diagnostic logs into the host logging pipeline
//!
//! When the `desktop-shims` feature is enabled, the `bridge-desktop` adapters
//! are injected automatically for any required bridge that was not provided.
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::config::CoreConfig;
//! use std::sync::Arc;
//!
//! let config = CoreConfig::builder()
//!     .app_launcher(Arc::new(MyLauncher))
//!     .application_metadata(Arc::new(MyBundleMetadata))
//!     .debug_logging(true)
//!     .build()
//!     .expect("Failed to build config");
//! ```

#[cfg(not(feature = "desktop-shims"))]
use crate::error::Error;
use crate::error::Result;
use bridge_traits::{AppLauncher, ApplicationMetadata, LoggerSink};
use std::sync::Arc;

/// Core configuration for the SDK.
///
/// Use [`CoreConfigBuilder`] to construct instances.
#[derive(Clone)]
pub struct CoreConfig {
    /// Installed-application probe (required)
    pub app_launcher: Arc<dyn AppLauncher>,

    /// Identity of the running application (required)
    pub application_metadata: Arc<dyn ApplicationMetadata>,

    /// Host log forwarding (optional)
    pub logger_sink: Option<Arc<dyn LoggerSink>>,

    /// Install the debug logger when the client is created
    pub debug_logging: bool,
}

impl std::fmt::Debug for CoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoreConfig")
            .field("app_launcher", &"AppLauncher { ... }")
            .field("application_metadata", &"ApplicationMetadata { ... }")
            .field(
                "logger_sink",
                &self.logger_sink.as_ref().map(|_| "LoggerSink { ... }"),
            )
            .field("debug_logging", &self.debug_logging)
            .finish()
    }
}

impl CoreConfig {
    /// Creates a new builder for constructing a `CoreConfig`.
    pub fn builder() -> CoreConfigBuilder {
        CoreConfigBuilder::default()
    }
}

#[cfg(not(feature = "desktop-shims"))]
fn app_launcher_missing_error() -> Error {
    Error::CapabilityMissing {
        capability: "AppLauncher".to_string(),
        message: "AppLauncher implementation is required to probe installed applications. \
                 Desktop: ensure the 'desktop-shims' feature is enabled to use the default DesktopAppLauncher. \
                 iOS: inject an adapter over UIApplication.canOpenURL. \
                 Android: inject an adapter over PackageManager intent queries."
            .to_string(),
    }
}

#[cfg(not(feature = "desktop-shims"))]
fn application_metadata_missing_error() -> Error {
    Error::CapabilityMissing {
        capability: "ApplicationMetadata".to_string(),
        message: "ApplicationMetadata implementation is required to verify SDK consumers. \
                 Desktop: ensure the 'desktop-shims' feature is enabled to use the default DesktopApplicationMetadata. \
                 iOS: inject an adapter over NSBundle.mainBundle.bundleIdentifier. \
                 Android: inject an adapter over Context.getPackageName()."
            .to_string(),
    }
}

#[cfg(feature = "desktop-shims")]
fn provide_default_app_launcher() -> Result<Arc<dyn AppLauncher>> {
    use bridge_desktop::DesktopAppLauncher;

    let launcher: Arc<dyn AppLauncher> = Arc::new(DesktopAppLauncher::new());
    Ok(launcher)
}

#[cfg(not(feature = "desktop-shims"))]
fn provide_default_app_launcher() -> Result<Arc<dyn AppLauncher>> {
    Err(app_launcher_missing_error())
}

#[cfg(feature = "desktop-shims")]
fn provide_default_application_metadata() -> Result<Arc<dyn ApplicationMetadata>> {
    use bridge_desktop::DesktopApplicationMetadata;

    let metadata: Arc<dyn ApplicationMetadata> = Arc::new(DesktopApplicationMetadata::new());
    Ok(metadata)
}

#[cfg(not(feature = "desktop-shims"))]
fn provide_default_application_metadata() -> Result<Arc<dyn ApplicationMetadata>> {
    Err(application_metadata_missing_error())
}

/// Builder for constructing [`CoreConfig`] instances.
///
/// Call [`build()`](CoreConfigBuilder::build) once every bridge the host
/// wants to override has been set.
#[derive(Default)]
pub struct CoreConfigBuilder {
    app_launcher: Option<Arc<dyn AppLauncher>>,
    application_metadata: Option<Arc<dyn ApplicationMetadata>>,
    logger_sink: Option<Arc<dyn LoggerSink>>,
    debug_logging: bool,
}

impl CoreConfigBuilder {
    /// Sets the application launcher probe.
    ///
    /// If not provided, the desktop default is used when the `desktop-shims`
    /// feature is enabled.
    pub fn app_launcher(mut self, launcher: Arc<dyn AppLauncher>) -> Self {
        self.app_launcher = Some(launcher);
        self
    }

    /// Sets the application metadata source.
    ///
    /// If not provided, the desktop default is used when the `desktop-shims`
    /// feature is enabled.
    pub fn application_metadata(mut self, metadata: Arc<dyn ApplicationMetadata>) -> Self {
        self.application_metadata = Some(metadata);
        self
    }

    /// Sets a sink that mirrors SDK log events into the host logger.
    ///
    /// The sink is attached when the client is created, at debug level if
    /// [`debug_logging`](Self::debug_logging) is enabled and at info level
    /// otherwise. It has no effect when a subscriber was already installed
    /// in the process.
    pub fn logger_sink(mut self, sink: Arc<dyn LoggerSink>) -> Self {
        self.logger_sink = Some(sink);
        self
    }

    /// Enables the debug logger at client construction.
    ///
    /// Default: false
    pub fn debug_logging(mut self, enabled: bool) -> Self {
        self.debug_logging = enabled;
        self
    }

    /// Builds the final `CoreConfig` instance.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapabilityMissing`](crate::Error::CapabilityMissing) if a required bridge is absent and
    /// no platform default is compiled in.
    pub fn build(self) -> Result<CoreConfig> {
        let app_launcher = match self.app_launcher {
            Some(launcher) => launcher,
            None => provide_default_app_launcher()?,
        };

        let application_metadata = match self.application_metadata {
            Some(metadata) => metadata,
            None => provide_default_application_metadata()?,
        };

        Ok(CoreConfig {
            app_launcher,
            application_metadata,
            logger_sink: self.logger_sink,
            debug_logging: self.debug_logging,
        })
    }
}
