//! Application Metadata Implementation

use bridge_traits::{metadata::ApplicationMetadata, PlatformType};
use std::env;
use tracing::debug;

/// Desktop application metadata
///
/// Desktop platforms have no bundle registry the SDK can query, so the
/// identifier is either configured explicitly by the host or derived from
/// the name of the running executable.
#[derive(Debug, Clone, Default)]
pub struct DesktopApplicationMetadata {
    identifier: Option<String>,
}

impl DesktopApplicationMetadata {
    /// Derive the identifier from the running executable
    pub fn new() -> Self {
        Self { identifier: None }
    }

    /// Use a fixed identifier (e.g., a reverse-DNS application id)
    pub fn with_identifier(identifier: impl Into<String>) -> Self {
        Self {
            identifier: Some(identifier.into()),
        }
    }

    fn executable_identifier() -> Option<String> {
        let exe = match env::current_exe() {
            Ok(exe) => exe,
            Err(err) => {
                debug!(error = %err, "Unable to resolve current executable");
                return None;
            }
        };

        exe.file_stem()
            .and_then(|stem| stem.to_str())
            .map(str::to_string)
    }
}

impl ApplicationMetadata for DesktopApplicationMetadata {
    fn current_application_identifier(&self) -> Option<String> {
        self.identifier
            .clone()
            .or_else(Self::executable_identifier)
    }

    fn platform(&self) -> PlatformType {
        PlatformType::Desktop
    }
}
