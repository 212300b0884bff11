//! Platform abstraction layer for editor discovery.
//!
//! This module defines the `EditorLocator` trait that hides how each OS
//! registers and installs the editor, so the export/install operations only
//! ever see a resolved launcher path.

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

mod shared;

use std::path::{Path, PathBuf};

/// Which member of the VS Code family to look for.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum EditorFlavor {
    /// Visual Studio Code
    #[default]
    Stable,
    /// Visual Studio Code - Insiders
    Insiders,
    /// VSCodium
    Codium,
}

impl EditorFlavor {
    /// Human-readable product name.
    pub fn display_name(&self) -> &'static str {
        match self {
            EditorFlavor::Stable => "Visual Studio Code",
            EditorFlavor::Insiders => "Visual Studio Code - Insiders",
            EditorFlavor::Codium => "VSCodium",
        }
    }

    /// Name of the command-line launcher (without extension).
    pub fn cli_name(&self) -> &'static str {
        match self {
            EditorFlavor::Stable => "code",
            EditorFlavor::Insiders => "code-insiders",
            EditorFlavor::Codium => "codium",
        }
    }

    /// Name of the GUI executable registered under Windows "App Paths".
    pub fn windows_exe(&self) -> &'static str {
        match self {
            EditorFlavor::Stable => "Code.exe",
            EditorFlavor::Insiders => "Code - Insiders.exe",
            EditorFlavor::Codium => "VSCodium.exe",
        }
    }

    /// Install directory name under Program Files / LocalAppData.
    pub fn windows_dir(&self) -> &'static str {
        match self {
            EditorFlavor::Stable => "Microsoft VS Code",
            EditorFlavor::Insiders => "Microsoft VS Code Insiders",
            EditorFlavor::Codium => "VSCodium",
        }
    }

    /// macOS application bundle name.
    pub fn macos_app(&self) -> &'static str {
        match self {
            EditorFlavor::Stable => "Visual Studio Code.app",
            EditorFlavor::Insiders => "Visual Studio Code - Insiders.app",
            EditorFlavor::Codium => "VSCodium.app",
        }
    }

    /// macOS bundle identifier used for Spotlight lookup.
    pub fn macos_bundle_id(&self) -> &'static str {
        match self {
            EditorFlavor::Stable => "com.microsoft.VSCode",
            EditorFlavor::Insiders => "com.microsoft.VSCodeInsiders",
            EditorFlavor::Codium => "com.vscodium",
        }
    }

    /// Desktop entry ids (file stems) shipped by the Linux packages.
    pub fn desktop_ids(&self) -> &'static [&'static str] {
        match self {
            EditorFlavor::Stable => &["code", "code_code", "com.visualstudio.code", "visual-studio-code"],
            EditorFlavor::Insiders => &["code-insiders", "code-insiders_code-insiders"],
            EditorFlavor::Codium => &["codium", "codium_codium", "com.vscodium.codium"],
        }
    }

    /// Flatpak application id, when one is published.
    pub fn flatpak_id(&self) -> Option<&'static str> {
        match self {
            EditorFlavor::Stable => Some("com.visualstudio.code"),
            EditorFlavor::Insiders => None,
            EditorFlavor::Codium => Some("com.vscodium.codium"),
        }
    }
}

impl std::fmt::Display for EditorFlavor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Platform-specific editor discovery.
///
/// Implementations provide two strategies, tried in order by [`locate`]:
/// - a registration lookup (Registry "App Paths", desktop entries, Spotlight)
/// - a list of conventional install locations
///
/// [`locate`]: EditorLocator::locate
pub trait EditorLocator: Send + Sync {
    /// Ask the OS where the editor was registered on install.
    fn registered_launcher(&self, flavor: EditorFlavor) -> Option<PathBuf>;

    /// Conventional launcher locations, most likely first.
    fn candidate_paths(&self, flavor: EditorFlavor) -> Vec<PathBuf>;

    /// Resolve the launcher, or `None` when every strategy is exhausted.
    fn locate(&self, flavor: EditorFlavor) -> Option<PathBuf> {
        if let Some(path) = self.registered_launcher(flavor).filter(|p| shared::is_launcher(p)) {
            tracing::debug!(path = %path.display(), "Launcher found via registration");
            return Some(path);
        }

        let found = self
            .candidate_paths(flavor)
            .into_iter()
            .find(|p| shared::is_launcher(p));
        if let Some(ref path) = found {
            tracing::debug!(path = %path.display(), "Launcher found in conventional location");
        }
        found
    }
}

/// Resolve a launcher, honoring an explicit override before discovery.
///
/// An override that does not exist is reported and ignored.
pub fn resolve_launcher(
    locator: &dyn EditorLocator,
    flavor: EditorFlavor,
    override_path: Option<&Path>,
) -> Option<PathBuf> {
    if let Some(path) = override_path {
        if shared::is_launcher(path) {
            return Some(path.to_path_buf());
        }
        tracing::warn!(
            path = %path.display(),
            "Configured editor path does not exist, falling back to discovery"
        );
    }

    let resolved = locator.locate(flavor);
    match resolved {
        Some(ref path) => tracing::info!(path = %path.display(), "Using {} launcher", flavor),
        None => tracing::warn!("No {} launcher found on {}", flavor, name()),
    }
    resolved
}

/// Get the locator implementation for the current OS.
pub fn current() -> Box<dyn EditorLocator> {
    #[cfg(target_os = "linux")]
    {
        Box::new(linux::LinuxLocator::new())
    }

    #[cfg(target_os = "macos")]
    {
        Box::new(macos::MacOSLocator::new())
    }

    #[cfg(target_os = "windows")]
    {
        Box::new(windows::WindowsLocator::new())
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        Box::new(shared::PathLocator)
    }
}

/// Platform name as a string (for logging/display).
pub fn name() -> &'static str {
    #[cfg(target_os = "linux")]
    {
        "Linux"
    }

    #[cfg(target_os = "macos")]
    {
        "macOS"
    }

    #[cfg(target_os = "windows")]
    {
        "Windows"
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        "Unknown"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Locator with canned answers for both strategies.
    struct FixedLocator {
        registered: Option<PathBuf>,
        candidates: Vec<PathBuf>,
    }

    impl EditorLocator for FixedLocator {
        fn registered_launcher(&self, _flavor: EditorFlavor) -> Option<PathBuf> {
            self.registered.clone()
        }

        fn candidate_paths(&self, _flavor: EditorFlavor) -> Vec<PathBuf> {
            self.candidates.clone()
        }
    }

    fn touch(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        shared::write_launcher(&path);
        path
    }

    #[test]
    fn test_registration_wins_over_candidates() {
        let dir = TempDir::new().unwrap();
        let registered = touch(&dir, "registered");
        let candidate = touch(&dir, "candidate");

        let locator = FixedLocator {
            registered: Some(registered.clone()),
            candidates: vec![candidate],
        };
        assert_eq!(locator.locate(EditorFlavor::Stable), Some(registered));
    }

    #[test]
    fn test_stale_registration_falls_through() {
        let dir = TempDir::new().unwrap();
        let candidate = touch(&dir, "candidate");

        let locator = FixedLocator {
            registered: Some(dir.path().join("uninstalled")),
            candidates: vec![candidate.clone()],
        };
        assert_eq!(locator.locate(EditorFlavor::Stable), Some(candidate));
    }

    #[test]
    fn test_first_existing_candidate_is_returned() {
        let dir = TempDir::new().unwrap();
        let second = touch(&dir, "second");
        let third = touch(&dir, "third");

        let locator = FixedLocator {
            registered: None,
            candidates: vec![dir.path().join("first"), second.clone(), third],
        };
        assert_eq!(locator.locate(EditorFlavor::Stable), Some(second));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_executable_candidate_falls_through() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let stale = dir.path().join("stale-code");
        fs::write(&stale, "").unwrap();
        fs::set_permissions(&stale, fs::Permissions::from_mode(0o644)).unwrap();
        let working = touch(&dir, "code");

        let locator = FixedLocator {
            registered: Some(stale.clone()),
            candidates: vec![stale, working.clone()],
        };
        assert_eq!(locator.locate(EditorFlavor::Stable), Some(working));
    }

    #[test]
    fn test_directories_are_not_launchers() {
        let dir = TempDir::new().unwrap();
        let locator = FixedLocator {
            registered: Some(dir.path().to_path_buf()),
            candidates: vec![dir.path().to_path_buf()],
        };
        assert_eq!(locator.locate(EditorFlavor::Stable), None);
    }

    #[test]
    fn test_nothing_found() {
        let locator = FixedLocator {
            registered: None,
            candidates: Vec::new(),
        };
        assert_eq!(locator.locate(EditorFlavor::Codium), None);
    }

    #[test]
    fn test_override_takes_precedence() {
        let dir = TempDir::new().unwrap();
        let custom = touch(&dir, "custom-code");
        let registered = touch(&dir, "registered");

        let locator = FixedLocator {
            registered: Some(registered),
            candidates: Vec::new(),
        };
        let resolved = resolve_launcher(&locator, EditorFlavor::Stable, Some(&custom));
        assert_eq!(resolved, Some(custom));
    }

    #[test]
    fn test_missing_override_falls_back_to_discovery() {
        let dir = TempDir::new().unwrap();
        let registered = touch(&dir, "registered");

        let locator = FixedLocator {
            registered: Some(registered.clone()),
            candidates: Vec::new(),
        };
        let missing = dir.path().join("nope");
        let resolved = resolve_launcher(&locator, EditorFlavor::Stable, Some(&missing));
        assert_eq!(resolved, Some(registered));
    }

    #[test]
    fn test_flavor_names() {
        assert_eq!(EditorFlavor::Stable.cli_name(), "code");
        assert_eq!(EditorFlavor::Insiders.cli_name(), "code-insiders");
        assert_eq!(EditorFlavor::Codium.windows_exe(), "VSCodium.exe");
        assert_eq!(EditorFlavor::default(), EditorFlavor::Stable);
        assert_eq!(EditorFlavor::Stable.to_string(), "Visual Studio Code");
    }

    #[test]
    fn test_platform_name_matches_os() {
        let platform_name = name();

        #[cfg(target_os = "linux")]
        assert_eq!(platform_name, "Linux");

        #[cfg(target_os = "macos")]
        assert_eq!(platform_name, "macOS");

        #[cfg(target_os = "windows")]
        assert_eq!(platform_name, "Windows");
    }
}
