//! Application Metadata Abstraction
//!
//! Exposes the identity of the host application to the core.

use crate::platform::{PlatformSendSync, PlatformType};

/// Application metadata store
///
/// Provides the platform-assigned identifier of the running application:
/// - **iOS**: `NSBundle.mainBundle.bundleIdentifier`
/// - **Android**: `Context.getPackageName()`
/// - **Web**: page origin
/// - **Desktop**: executable name or an explicitly configured identifier
///
/// Used by the SDK consumer check to decide whether the host application is
/// allowed to use the SDK.
pub trait ApplicationMetadata: PlatformSendSync {
    /// Identifier of the running application, if the platform exposes one.
    fn current_application_identifier(&self) -> Option<String>;

    /// Platform the application is running on.
    fn platform(&self) -> PlatformType {
        PlatformType::current()
    }
}
