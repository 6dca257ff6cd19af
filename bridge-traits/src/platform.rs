//! Platform identification and target-dependent trait bounds.
//!
//! Native targets require `Send + Sync` so bridge implementations can be
//! shared freely across threads. WebAssembly builds run on a single thread and
//! browser-provided objects (e.g., `web_sys` types) cannot satisfy those
//! bounds, so the marker traits below relax them on `wasm32` without
//! duplicating every trait definition.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker trait that applies `Send + Sync` on native targets while becoming a
/// no-op on `wasm32`.
#[cfg(not(target_arch = "wasm32"))]
pub trait PlatformSendSync: Send + Sync {}

#[cfg(not(target_arch = "wasm32"))]
impl<T> PlatformSendSync for T where T: Send + Sync {}

#[cfg(target_arch = "wasm32")]
pub trait PlatformSendSync {}

#[cfg(target_arch = "wasm32")]
impl<T> PlatformSendSync for T {}

/// Platforms an SDK consumer can run on.
///
/// Used purely as a discriminant when matching allow-list entries against the
/// running application.
///
/// # Examples
///
/// ```
/// use bridge_traits::PlatformType;
///
/// assert_eq!(PlatformType::parse("iOS"), Some(PlatformType::Ios));
/// assert_eq!(PlatformType::Android.as_str(), "android");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformType {
    /// Apple iOS / iPadOS
    Ios,
    /// Android
    Android,
    /// Browser / WebAssembly
    Web,
    /// Desktop operating systems (macOS, Windows, Linux)
    Desktop,
}

impl PlatformType {
    /// Platform this binary was compiled for.
    pub const fn current() -> Self {
        #[cfg(target_os = "ios")]
        return PlatformType::Ios;

        #[cfg(target_os = "android")]
        return PlatformType::Android;

        #[cfg(target_arch = "wasm32")]
        return PlatformType::Web;

        #[cfg(not(any(target_os = "ios", target_os = "android", target_arch = "wasm32")))]
        return PlatformType::Desktop;
    }

    /// Stable identifier, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformType::Ios => "ios",
            PlatformType::Android => "android",
            PlatformType::Web => "web",
            PlatformType::Desktop => "desktop",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            PlatformType::Ios => "iOS",
            PlatformType::Android => "Android",
            PlatformType::Web => "Web",
            PlatformType::Desktop => "Desktop",
        }
    }

    /// Parse a platform from a string identifier.
    ///
    /// Matching is case-insensitive and accepts the common aliases used by
    /// multi-platform build tooling (`js`, `browser`, `jvm`, ...).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "ios" | "ipados" => Some(PlatformType::Ios),
            "android" => Some(PlatformType::Android),
            "web" | "js" | "browser" | "wasm" => Some(PlatformType::Web),
            "desktop" | "jvm" | "macos" | "windows" | "linux" => Some(PlatformType::Desktop),
            _ => None,
        }
    }
}

impl fmt::Display for PlatformType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!(PlatformType::parse("IOS"), Some(PlatformType::Ios));
        assert_eq!(PlatformType::parse(" android "), Some(PlatformType::Android));
        assert_eq!(PlatformType::parse("js"), Some(PlatformType::Web));
        assert_eq!(PlatformType::parse("jvm"), Some(PlatformType::Desktop));
        assert_eq!(PlatformType::parse("tvos"), None);
        assert_eq!(PlatformType::parse(""), None);
    }

    #[test]
    fn test_as_str_round_trips_through_parse() {
        for platform in [
            PlatformType::Ios,
            PlatformType::Android,
            PlatformType::Web,
            PlatformType::Desktop,
        ] {
            assert_eq!(PlatformType::parse(platform.as_str()), Some(platform));
        }
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&PlatformType::Ios).unwrap();
        assert_eq!(json, "\"ios\"");

        let parsed: PlatformType = serde_json::from_str("\"desktop\"").unwrap();
        assert_eq!(parsed, PlatformType::Desktop);
    }

    #[test]
    #[cfg(not(any(target_os = "ios", target_os = "android", target_arch = "wasm32")))]
    fn test_current_is_desktop_on_host() {
        assert_eq!(PlatformType::current(), PlatformType::Desktop);
    }
}
