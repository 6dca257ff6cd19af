//! SDK consumers and allow-lists.

use bridge_traits::PlatformType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

use crate::error::Result;

/// An application allowed to use the SDK on one platform.
///
/// # Examples
///
/// ```
/// use core_client::{Consumer, PlatformType};
///
/// let consumer = Consumer::new(PlatformType::Ios, "com.acme.app");
/// assert_eq!(consumer.to_string(), "ios:com.acme.app");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Consumer {
    /// Platform the identifier belongs to
    pub platform: PlatformType,
    /// Bundle identifier, package name, or equivalent
    pub app_id: String,
}

impl Consumer {
    pub fn new(platform: PlatformType, app_id: impl Into<String>) -> Self {
        Self {
            platform,
            app_id: app_id.into(),
        }
    }

    /// Exact match on both platform and identifier.
    pub fn matches(&self, platform: PlatformType, app_id: &str) -> bool {
        self.platform == platform && self.app_id == app_id
    }
}

impl fmt::Display for Consumer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.platform.as_str(), self.app_id)
    }
}

/// Ordered list of authorized consumers.
///
/// Derefs to `[Consumer]`, so it can be passed anywhere a slice is expected.
/// SDKs that ship their allow-list as configuration can load it from JSON:
///
/// ```
/// use core_client::{AllowList, PlatformType};
///
/// let allowed = AllowList::from_json(
///     r#"[{"platform": "ios", "app_id": "com.acme.app"},
///         {"platform": "android", "app_id": "com.acme.app"}]"#,
/// )
/// .unwrap();
///
/// assert_eq!(allowed.len(), 2);
/// assert_eq!(allowed[1].platform, PlatformType::Android);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllowList(Vec<Consumer>);

impl AllowList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Parse a JSON array of `{"platform", "app_id"}` objects.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Append a consumer, builder style.
    pub fn with(mut self, consumer: Consumer) -> Self {
        self.0.push(consumer);
        self
    }

    pub fn into_inner(self) -> Vec<Consumer> {
        self.0
    }
}

impl Deref for AllowList {
    type Target = [Consumer];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Consumer>> for AllowList {
    fn from(consumers: Vec<Consumer>) -> Self {
        Self(consumers)
    }
}

impl FromIterator<Consumer> for AllowList {
    fn from_iter<I: IntoIterator<Item = Consumer>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Whether any entry authorizes `app_id` on `platform`.
///
/// Existence-only: order is irrelevant and the scan stops at the first match.
pub fn is_consumer_allowed(allowed: &[Consumer], platform: PlatformType, app_id: &str) -> bool {
    allowed
        .iter()
        .any(|consumer| consumer.matches(platform, app_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;

    #[test]
    fn test_matching_requires_platform_and_id() {
        let consumer = Consumer::new(PlatformType::Ios, "com.acme.app");

        assert!(consumer.matches(PlatformType::Ios, "com.acme.app"));
        assert!(!consumer.matches(PlatformType::Android, "com.acme.app"));
        assert!(!consumer.matches(PlatformType::Ios, "com.acme.other"));
        assert!(!consumer.matches(PlatformType::Ios, "COM.ACME.APP"));
    }

    #[test]
    fn test_is_consumer_allowed() {
        let allowed = AllowList::new()
            .with(Consumer::new(PlatformType::Android, "com.acme.app"))
            .with(Consumer::new(PlatformType::Ios, "com.acme.app"));

        assert!(is_consumer_allowed(&allowed, PlatformType::Ios, "com.acme.app"));
        assert!(!is_consumer_allowed(&allowed, PlatformType::Web, "com.acme.app"));
        assert!(!is_consumer_allowed(&[], PlatformType::Ios, "com.acme.app"));
    }

    #[test]
    fn test_empty_identifier_never_matches_real_entries() {
        let allowed = [Consumer::new(PlatformType::Ios, "com.acme.app")];

        assert!(!is_consumer_allowed(&allowed, PlatformType::Ios, ""));
    }

    #[test]
    fn test_duplicates_are_harmless() {
        let allowed: AllowList = std::iter::repeat(Consumer::new(PlatformType::Desktop, "acme"))
            .take(3)
            .collect();

        assert_eq!(allowed.len(), 3);
        assert!(is_consumer_allowed(&allowed, PlatformType::Desktop, "acme"));
    }

    #[test]
    fn test_allow_list_from_json() {
        let allowed =
            AllowList::from_json(r#"[{"platform": "desktop", "app_id": "acme-cli"}]"#).unwrap();

        assert_eq!(
            allowed.into_inner(),
            vec![Consumer::new(PlatformType::Desktop, "acme-cli")]
        );
    }

    #[test]
    fn test_allow_list_rejects_unknown_platform() {
        let result = AllowList::from_json(r#"[{"platform": "tvos", "app_id": "com.acme.app"}]"#);

        assert!(matches!(result, Err(ClientError::InvalidAllowList(_))));
    }

    #[test]
    fn test_allow_list_serializes_as_array() {
        let allowed = AllowList::from(vec![Consumer::new(PlatformType::Web, "acme.example")]);
        let json = serde_json::to_string(&allowed).unwrap();

        assert_eq!(json, r#"[{"platform":"web","app_id":"acme.example"}]"#);
    }
}
