//! SDK consumer verification.

use bridge_traits::ApplicationMetadata;
use tracing::{debug, warn};

use crate::consumer::{is_consumer_allowed, Consumer};
use crate::error::{ClientError, Result};

/// Check the running application against `allowed`.
///
/// An absent identifier is compared as the empty string, so it fails the same
/// way an unknown identifier does.
///
/// # Errors
///
/// Returns [`ClientError::Unauthorized`] carrying the rejected identifier when
/// no entry matches the current platform and identifier.
pub fn verify_consumer(metadata: &dyn ApplicationMetadata, allowed: &[Consumer]) -> Result<()> {
    let platform = metadata.platform();
    let app_id = metadata
        .current_application_identifier()
        .unwrap_or_default();

    if is_consumer_allowed(allowed, platform, &app_id) {
        debug!(app_id = %app_id, platform = %platform, "Consumer verified");
        return Ok(());
    }

    warn!(
        app_id = %app_id,
        platform = %platform,
        allowed = allowed.len(),
        "Application is not an allowed SDK consumer"
    );
    Err(ClientError::Unauthorized { app_id })
}
