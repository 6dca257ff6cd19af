//! Installed-application detection through URL schemes.

use bridge_traits::{AppLauncher, Url};
use tracing::debug;

/// Host component of every probe target (`<scheme>://app`).
pub const PROBE_HOST: &str = "app";

/// Build the launch probe for `scheme`.
///
/// Returns `None` when the scheme cannot form a valid URL on its own: empty,
/// containing whitespace or separators, or starting with a non-letter.
pub fn probe_url(scheme: &str) -> Option<Url> {
    let candidate = format!("{}://{}", scheme, PROBE_HOST);

    match Url::parse(&candidate) {
        Ok(url) if url.scheme().eq_ignore_ascii_case(scheme) => Some(url),
        Ok(url) => {
            debug!(scheme, parsed = url.scheme(), "Scheme does not round-trip");
            None
        }
        Err(err) => {
            debug!(scheme, error = %err, "Malformed scheme");
            None
        }
    }
}

/// Ask `launcher` whether an application handling `scheme` is installed.
pub fn is_app_installed(launcher: &dyn AppLauncher, scheme: &str) -> bool {
    let Some(url) = probe_url(scheme) else {
        return false;
    };

    let installed = launcher.can_launch(&url);
    debug!(target_url = %url, installed, "Checked application presence");
    installed
}
