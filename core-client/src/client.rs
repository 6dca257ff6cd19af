//! Primary façade exposed to SDKs built on this core.

use std::fmt;
use std::sync::Arc;

use bridge_traits::{AppLauncher, ApplicationMetadata, PlatformType};
use core_runtime::config::CoreConfig;
use core_runtime::logging::{
    enable_debug_logging, enable_debug_logging_with, install_logging, LoggingConfig,
};

use crate::consumer::Consumer;
use crate::error::Result;
use crate::{presence, verifier};

/// Platform utilities shared by every SDK built on this core.
///
/// Cheap to clone; clones share the same bridges.
///
/// # Example
///
/// ```ignore
/// use core_client::{Consumer, CoreClient, PlatformType};
///
/// let client = CoreClient::with_platform_defaults()?;
///
/// client.verify_consumer(&[
///     Consumer::new(PlatformType::Ios, "com.acme.app"),
///     Consumer::new(PlatformType::Android, "com.acme.app"),
/// ])?;
///
/// if client.is_app_installed("acmewallet") {
///     // offer to hand off to the wallet app
/// }
/// ```
#[derive(Clone)]
pub struct CoreClient {
    launcher: Arc<dyn AppLauncher>,
    metadata: Arc<dyn ApplicationMetadata>,
}

impl CoreClient {
    /// Create a client from a built configuration.
    ///
    /// Installs the debug logger first when `config.debug_logging` is set.
    /// Otherwise a configured `config.logger_sink` gets the SDK subscriber at
    /// the default (info) level. Either way the sink is only attached if no
    /// SDK subscriber was installed earlier in the process.
    pub fn new(config: CoreConfig) -> Self {
        match (config.debug_logging, config.logger_sink.clone()) {
            (true, sink) => {
                let mut logging = LoggingConfig::debug();
                if let Some(sink) = sink {
                    logging = logging.with_logger_sink(sink);
                }
                enable_debug_logging_with(logging);
            }
            (false, Some(sink)) => {
                install_logging(LoggingConfig::default().with_logger_sink(sink));
            }
            (false, None) => {}
        }

        Self::from_bridges(config.app_launcher, config.application_metadata)
    }

    /// Create a client directly from bridge handles.
    pub fn from_bridges(
        launcher: Arc<dyn AppLauncher>,
        metadata: Arc<dyn ApplicationMetadata>,
    ) -> Self {
        Self { launcher, metadata }
    }

    /// Create a client using the bridges compiled in for this platform.
    ///
    /// # Errors
    ///
    /// Fails with a capability error when no platform defaults are available
    /// (the `desktop-shims` feature is disabled).
    pub fn with_platform_defaults() -> Result<Self> {
        let config = CoreConfig::builder().build()?;
        Ok(Self::new(config))
    }

    /// Enable verbose diagnostic output for the SDK.
    ///
    /// Safe to call repeatedly and from any thread; see
    /// [`enable_debug_logging`].
    pub fn debug_logger() {
        enable_debug_logging();
    }

    /// Whether an application registered for `scheme` is installed.
    ///
    /// Probes `<scheme>://app`. Malformed schemes and missing handlers both
    /// yield `false`.
    pub fn is_app_installed(&self, scheme: &str) -> bool {
        presence::is_app_installed(self.launcher.as_ref(), scheme)
    }

    /// Cross-platform compatible form of [`is_app_installed`](Self::is_app_installed).
    ///
    /// `package_name` is treated as the URL scheme. `fingerprint` and `alg`
    /// are accepted for signature parity with platforms that verify package
    /// signatures and are ignored here.
    #[deprecated(note = "use `is_app_installed`; fingerprint and alg are ignored")]
    pub fn is_app_installed_legacy(
        &self,
        package_name: &str,
        _fingerprint: Option<&str>,
        _alg: &str,
    ) -> bool {
        self.is_app_installed(package_name)
    }

    /// Verify that the running application may use the calling SDK.
    ///
    /// Meant to be called by SDKs, not by applications. Accepts anything that
    /// derefs to a slice of consumers: arrays, `Vec`s and
    /// [`AllowList`](crate::AllowList).
    ///
    /// # Errors
    ///
    /// [`ClientError::Unauthorized`](crate::ClientError::Unauthorized) when no
    /// entry matches the current platform and application identifier.
    pub fn verify_consumer(&self, allowed: &[Consumer]) -> Result<()> {
        verifier::verify_consumer(self.metadata.as_ref(), allowed)
    }

    /// Platform reported by the metadata bridge.
    pub fn platform(&self) -> PlatformType {
        self.metadata.platform()
    }

    /// The running application expressed as a consumer entry.
    ///
    /// Handy when assembling an allow-list for a new integration.
    pub fn current_consumer(&self) -> Consumer {
        Consumer::new(
            self.metadata.platform(),
            self.metadata
                .current_application_identifier()
                .unwrap_or_default(),
        )
    }
}

impl fmt::Debug for CoreClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoreClient")
            .field("launcher", &"AppLauncher { ... }")
            .field("metadata", &"ApplicationMetadata { ... }")
            .field("platform", &self.platform())
            .finish()
    }
}
