//! # Core Client
//!
//! Platform utilities shared by SDKs built on this core:
//! - enabling the debug logger
//! - detecting installed applications through their URL schemes
//! - verifying that the host application is allowed to use an SDK
//!
//! ## Overview
//!
//! The client wires host-provided bridge implementations (see
//! `bridge-traits`) into a small, synchronous façade. Desktop hosts enable
//! the `desktop-shims` feature (default), which injects the `bridge-desktop`
//! adapters; mobile and web hosts inject their own adapters through
//! [`CoreConfig`].
//!
//! ## Usage
//!
//! ```ignore
//! use core_client::{AllowList, CoreClient};
//!
//! CoreClient::debug_logger();
//!
//! let client = CoreClient::with_platform_defaults()?;
//! let allowed = AllowList::from_json(include_str!("allowed_consumers.json"))?;
//! client.verify_consumer(&allowed)?;
//! ```

pub mod client;
pub mod consumer;
pub mod error;
pub mod presence;
pub mod verifier;

pub use client::CoreClient;
pub use consumer::{is_consumer_allowed, AllowList, Consumer};
pub use error::{ClientError, Result};

pub use bridge_traits::{AppLauncher, ApplicationMetadata, PlatformType};
pub use core_runtime::config::{CoreConfig, CoreConfigBuilder};

#[cfg(feature = "desktop-shims")]
pub use bridge_desktop::{DesktopAppLauncher, DesktopApplicationMetadata};
