//! macOS editor discovery.
//!
//! Registration lookup asks Spotlight (`mdfind`) for the app bundle by its
//! identifier; the fallback probes /Applications, ~/Applications and the
//! shell-command symlinks the editor offers to install.

use super::shared::search_path;
use super::{EditorFlavor, EditorLocator};
use std::path::{Path, PathBuf};
use std::process::Command;

/// macOS locator implementation.
pub struct MacOSLocator;

impl MacOSLocator {
    /// Create a new macOS locator.
    pub fn new() -> Self {
        Self
    }

    /// Path of the CLI script inside an .app bundle.
    fn bundle_launcher(app: &Path, flavor: EditorFlavor) -> PathBuf {
        app.join("Contents/Resources/app/bin").join(flavor.cli_name())
    }
}

impl Default for MacOSLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorLocator for MacOSLocator {
    fn registered_launcher(&self, flavor: EditorFlavor) -> Option<PathBuf> {
        let query = format!("kMDItemCFBundleIdentifier == '{}'", flavor.macos_bundle_id());
        let output = Command::new("mdfind").arg(&query).output().ok()?;

        if !output.status.success() {
            tracing::debug!("mdfind exited with {}", output.status);
            return None;
        }

        String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(|app| Self::bundle_launcher(Path::new(app), flavor))
    }

    fn candidate_paths(&self, flavor: EditorFlavor) -> Vec<PathBuf> {
        let mut candidates = vec![Self::bundle_launcher(
            &PathBuf::from("/Applications").join(flavor.macos_app()),
            flavor,
        )];

        if let Some(home) = dirs::home_dir() {
            candidates.push(Self::bundle_launcher(
                &home.join("Applications").join(flavor.macos_app()),
                flavor,
            ));
        }

        candidates.extend(search_path(flavor.cli_name()));
        candidates.push(PathBuf::from("/usr/local/bin").join(flavor.cli_name()));
        candidates.push(PathBuf::from("/opt/homebrew/bin").join(flavor.cli_name()));

        candidates
    }
}
