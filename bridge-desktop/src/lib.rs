//! # Desktop Bridge Implementations
//!
//! Default implementations of bridge traits for desktop hosts.
//!
//! ## Overview
//!
//! - `AppLauncher` using freedesktop.org (XDG) desktop entries and
//!   `mimeapps.list`. This covers Linux and the BSDs; on macOS and Windows
//!   it searches nothing and reports every scheme as unhandled.
//! - `ApplicationMetadata` using an explicit identifier or the executable
//!   name, on any desktop OS
//!
//! ## Usage
//!
//! ```ignore
//! use bridge_desktop::{DesktopAppLauncher, DesktopApplicationMetadata};
//! use bridge_traits::{AppLauncher, ApplicationMetadata, Url};
//!
//! let launcher = DesktopAppLauncher::new();
//! let metadata = DesktopApplicationMetadata::with_identifier("com.acme.app");
//!
//! let installed = launcher.can_launch(&Url::parse("myapp://app").unwrap());
//! ```

mod launcher;
mod metadata;

pub use launcher::DesktopAppLauncher;
pub use metadata::DesktopApplicationMetadata;
