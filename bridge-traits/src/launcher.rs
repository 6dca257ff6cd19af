//! Application Launch Abstraction
//!
//! Lets the core ask the host whether some installed application claims a URL.

use url::Url;

use crate::platform::PlatformSendSync;

/// Application launch registry
///
/// Answers whether any installed application declares a handler for a URL,
/// without actually opening it. The core uses this to detect companion apps
/// through their registered schemes (e.g., `myapp://app`).
///
/// Implementations must treat "no handler" as a plain `false`; there is no
/// error channel because a failed lookup is indistinguishable from an absent
/// application for the caller.
///
/// # Platform Support
///
/// - **Linux/BSD desktops**: XDG desktop entries / `mimeapps.list` (see `bridge-desktop`)
/// - **macOS**: `NSWorkspace.urlForApplication(toOpen:)`, host-injected
/// - **Windows**: `HKEY_CLASSES_ROOT\<scheme>\shell\open\command`, host-injected
/// - **iOS**: `UIApplication.canOpenURL` (scheme must be listed in
///   `LSApplicationQueriesSchemes`)
/// - **Android**: `PackageManager.queryIntentActivities` with an `ACTION_VIEW` intent
/// - **Web**: not observable; hosts should return `false`
///
/// # Example
///
/// ```ignore
/// use bridge_traits::launcher::AppLauncher;
/// use url::Url;
///
/// fn has_wallet(launcher: &dyn AppLauncher) -> bool {
///     Url::parse("wallet://app")
///         .map(|url| launcher.can_launch(&url))
///         .unwrap_or(false)
/// }
/// ```
pub trait AppLauncher: PlatformSendSync {
    /// Whether at least one installed application can open `url`.
    fn can_launch(&self, url: &Url) -> bool;
}
