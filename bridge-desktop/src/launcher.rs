//! Scheme Handler Lookup Implementation

use bridge_traits::{launcher::AppLauncher, Url};
use std::collections::{HashMap, HashSet};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

const DESKTOP_ENTRY_GROUP: &str = "[Desktop Entry]";
const MIMEAPPS_FILE: &str = "mimeapps.list";

/// Desktop application launcher probe
///
/// Resolves URL schemes the way freedesktop.org compliant launchers do:
/// - `*.desktop` entries whose `MimeType` list contains
///   `x-scheme-handler/<scheme>`
/// - `mimeapps.list` default or added associations pointing at an installed
///   entry
///
/// Entries are identified by their desktop file ID (the path relative to the
/// applications directory, with `/` replaced by `-`). Earlier directories
/// shadow later ones, so a user-level `Hidden=true` copy hides the system
/// entry. `[Removed Associations]` cancel the listed entries for the scheme in
/// every lower-precedence source.
///
/// Directories that do not exist and files that cannot be read are skipped.
/// On macOS and Windows no XDG directories are searched by default, so every
/// scheme reports no handler; hosts there inject their own `AppLauncher`.
#[derive(Debug, Clone)]
pub struct DesktopAppLauncher {
    config_directories: Vec<PathBuf>,
    application_directories: Vec<PathBuf>,
}

impl DesktopAppLauncher {
    /// Create a launcher probing the standard XDG locations
    pub fn new() -> Self {
        Self {
            config_directories: Self::default_config_directories(),
            application_directories: Self::default_application_directories(),
        }
    }

    /// Create a launcher probing only the given applications directories,
    /// highest precedence first
    pub fn with_directories(directories: Vec<PathBuf>) -> Self {
        Self {
            config_directories: Vec::new(),
            application_directories: directories,
        }
    }

    /// Set the directories searched for `mimeapps.list` ahead of the
    /// applications directories, highest precedence first
    pub fn with_config_directories(mut self, directories: Vec<PathBuf>) -> Self {
        self.config_directories = directories;
        self
    }

    /// Applications directories searched for desktop entries
    pub fn application_directories(&self) -> &[PathBuf] {
        &self.application_directories
    }

    /// Configuration directories searched for `mimeapps.list`
    pub fn config_directories(&self) -> &[PathBuf] {
        &self.config_directories
    }

    fn default_config_directories() -> Vec<PathBuf> {
        if !cfg!(all(unix, not(target_os = "macos"))) {
            return Vec::new();
        }

        let mut directories = Vec::new();
        if let Some(config) = dirs::config_dir() {
            directories.push(config);
        }
        directories.extend(xdg_path_list("XDG_CONFIG_DIRS", "/etc/xdg"));
        directories
    }

    fn default_application_directories() -> Vec<PathBuf> {
        if !cfg!(all(unix, not(target_os = "macos"))) {
            return Vec::new();
        }

        let mut directories = Vec::new();
        if let Some(data) = dirs::data_dir() {
            directories.push(data.join("applications"));
        }
        directories.extend(
            xdg_path_list("XDG_DATA_DIRS", "/usr/local/share:/usr/share")
                .into_iter()
                .map(|dir| dir.join("applications")),
        );
        directories
    }

    /// Whether an installed application declares a handler for `scheme`
    pub fn handles_scheme(&self, scheme: &str) -> bool {
        let mime = format!("x-scheme-handler/{}", scheme.to_ascii_lowercase());
        let installed = self.installed_entries(&mime);
        let mut removed = HashSet::new();

        for list in self.mimeapps_files() {
            let Ok(contents) = fs::read_to_string(&list) else {
                continue;
            };
            let associations = MimeAssociations::parse(&contents, &mime);

            let associated = associations.added.iter().find(|id| {
                !removed.contains(*id)
                    && !associations.removed.contains(*id)
                    && installed.get(*id).is_some_and(|entry| !entry.hidden)
            });
            if let Some(id) = associated {
                trace!(path = ?list, id = %id, "Found scheme association");
                return true;
            }

            removed.extend(associations.removed);
        }

        installed
            .iter()
            .any(|(id, entry)| entry.handles() && !removed.contains(id))
    }

    fn mimeapps_files(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.config_directories
            .iter()
            .chain(&self.application_directories)
            .map(|dir| dir.join(MIMEAPPS_FILE))
    }

    /// Desktop entries keyed by file ID; the first directory providing an ID wins.
    fn installed_entries(&self, mime: &str) -> HashMap<String, DesktopEntry> {
        let mut installed = HashMap::new();
        for root in &self.application_directories {
            collect_entries(root, root, mime, &mut installed);
        }
        installed
    }
}

impl Default for DesktopAppLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl AppLauncher for DesktopAppLauncher {
    fn can_launch(&self, url: &Url) -> bool {
        let found = self.handles_scheme(url.scheme());
        debug!(scheme = url.scheme(), found, "Probed scheme handler");
        found
    }
}

fn xdg_path_list(var: &str, fallback: &str) -> Vec<PathBuf> {
    let value = env::var_os(var)
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| fallback.into());

    env::split_paths(&value)
        .filter(|path| path.is_absolute())
        .collect()
}

fn collect_entries(
    root: &Path,
    dir: &Path,
    mime: &str,
    installed: &mut HashMap<String, DesktopEntry>,
) {
    let listing = match fs::read_dir(dir) {
        Ok(listing) => listing,
        Err(err) => {
            trace!(dir = ?dir, error = %err, "Skipping application directory");
            return;
        }
    };

    for item in listing.flatten() {
        let path = item.path();
        let Ok(file_type) = item.file_type() else {
            continue;
        };

        if file_type.is_dir() {
            collect_entries(root, &path, mime, installed);
            continue;
        }
        if !path.extension().is_some_and(|ext| ext == "desktop") {
            continue;
        }

        let Some(id) = desktop_file_id(root, &path) else {
            continue;
        };
        if installed.contains_key(&id) {
            trace!(path = ?path, id = %id, "Shadowed desktop entry");
            continue;
        }

        let Ok(contents) = fs::read_to_string(&path) else {
            trace!(path = ?path, "Unreadable entry");
            continue;
        };
        installed.insert(id, DesktopEntry::parse(&contents, mime));
    }
}

/// `applications/vendor/app.desktop` has the ID `vendor-app.desktop`.
fn desktop_file_id(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts = relative
        .components()
        .map(|component| component.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()?;
    Some(parts.join("-"))
}

/// The parts of a desktop entry relevant to scheme lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DesktopEntry {
    hidden: bool,
    declares: bool,
}

impl DesktopEntry {
    /// Only the `[Desktop Entry]` group counts; action groups may repeat keys.
    fn parse(contents: &str, mime: &str) -> Self {
        let mut entry = Self {
            hidden: false,
            declares: false,
        };
        let mut in_entry_group = false;

        for line in contents.lines().map(str::trim) {
            if line.starts_with('[') {
                in_entry_group = line == DESKTOP_ENTRY_GROUP;
                continue;
            }
            if !in_entry_group || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            match key.trim() {
                "Hidden" => entry.hidden = value.trim() == "true",
                "MimeType" => {
                    entry.declares = value
                        .split(';')
                        .any(|item| item.trim().eq_ignore_ascii_case(mime))
                }
                _ => {}
            }
        }

        entry
    }

    fn handles(&self) -> bool {
        !self.hidden && self.declares
    }
}

/// Associations one `mimeapps.list` makes for a single MIME type.
#[derive(Debug, Default, PartialEq, Eq)]
struct MimeAssociations {
    added: Vec<String>,
    removed: HashSet<String>,
}

impl MimeAssociations {
    fn parse(contents: &str, mime: &str) -> Self {
        let mut associations = Self::default();
        let mut group = "";

        for line in contents.lines().map(str::trim) {
            if line.starts_with('[') {
                group = line;
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            if !key.trim().eq_ignore_ascii_case(mime) {
                continue;
            }

            let ids = value
                .split(';')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string);

            match group {
                "[Default Applications]" | "[Added Associations]" => {
                    associations.added.extend(ids)
                }
                "[Removed Associations]" => associations.removed.extend(ids),
                _ => {}
            }
        }

        associations
    }
}
