//! # Host Bridge Traits
//!
//! Platform abstraction traits that must be implemented by each host platform.
//!
//! ## Overview
//!
//! This crate defines the contract between the SDK core and platform-specific
//! implementations. Each trait represents a capability that the core requires
//! but that must be implemented differently per platform (desktop, iOS,
//! Android, web).
//!
//! ## Traits
//!
//! - [`AppLauncher`](launcher::AppLauncher) - Probe whether an installed app handles a URL
//! - [`ApplicationMetadata`](metadata::ApplicationMetadata) - Identity of the running application
//! - [`LoggerSink`](log::LoggerSink) - Forward structured logs to host logging
//!
//! ## Platform Requirements
//!
//! | Platform | Implementation Crate | Status |
//! |----------|---------------------|--------|
//! | Linux/BSD desktop | `bridge-desktop` | ✅ Available |
//! | macOS, Windows | `bridge-desktop` (metadata only) | 📋 Host provides `AppLauncher` |
//! | iOS      | host-injected       | 📋 Host provides adapters |
//! | Android  | host-injected       | 📋 Host provides adapters |
//! | Web      | host-injected       | 📋 Host provides adapters |
//!
//! ## Thread Safety
//!
//! All bridge traits require `Send + Sync` on native targets (see
//! [`PlatformSendSync`](platform::PlatformSendSync)) so a single adapter can be
//! shared by every clone of the client.
//!
//! ## Example
//!
//! ```ignore
//! use bridge_traits::{ApplicationMetadata, PlatformType};
//!
//! struct BundleMetadata;
//!
//! impl ApplicationMetadata for BundleMetadata {
//!     fn current_application_identifier(&self) -> Option<String> {
//!         // NSBundle.mainBundle.bundleIdentifier
//!         Some("com.acme.app".to_string())
//!     }
//!
//!     fn platform(&self) -> PlatformType {
//!         PlatformType::Ios
//!     }
//! }
//! ```

pub mod error;
pub mod launcher;
pub mod log;
pub mod metadata;
pub mod platform;

pub use error::BridgeError;

// Re-export commonly used types
pub use launcher::AppLauncher;
pub use log::{ConsoleLogger, LogEntry, LogLevel, LoggerSink};
pub use metadata::ApplicationMetadata;
pub use platform::{PlatformSendSync, PlatformType};
pub use url::Url;
