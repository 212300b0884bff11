//! Windows editor discovery.
//!
//! Registration lookup reads the "App Paths" key the installer writes
//! (machine-wide first, then per-user) through `reg.exe`; the fallback
//! probes the user and system install directories.

use super::shared::{parse_reg_default_value, prefer_cli_sibling, search_path};
use super::{EditorFlavor, EditorLocator};
use std::path::PathBuf;
use std::process::Command;

const APP_PATHS_KEY: &str = r"SOFTWARE\Microsoft\Windows\CurrentVersion\App Paths";

/// Windows locator implementation.
pub struct WindowsLocator;

impl WindowsLocator {
    /// Create a new Windows locator.
    pub fn new() -> Self {
        Self
    }

    /// Query one hive's App Paths entry for the editor executable.
    fn query_app_path(hive: &str, flavor: EditorFlavor) -> Option<PathBuf> {
        let key = format!(r"{}\{}\{}", hive, APP_PATHS_KEY, flavor.windows_exe());
        let output = Command::new("reg")
            .args(["query", &key, "/ve"])
            .output()
            .map_err(|e| tracing::debug!("Failed to run reg.exe: {}", e))
            .ok()?;

        if !output.status.success() {
            tracing::debug!(key = %key, "App Paths entry not registered");
            return None;
        }

        Self::launcher_from_reg_output(&String::from_utf8_lossy(&output.stdout), flavor)
    }

    /// The registered executable, swapped for its `bin\<cli>.cmd` script
    /// when one is installed next to it.
    fn launcher_from_reg_output(stdout: &str, flavor: EditorFlavor) -> Option<PathBuf> {
        parse_reg_default_value(stdout)
            .map(PathBuf::from)
            .map(|exe| prefer_cli_sibling(exe, flavor))
    }
}

impl Default for WindowsLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorLocator for WindowsLocator {
    fn registered_launcher(&self, flavor: EditorFlavor) -> Option<PathBuf> {
        ["HKLM", "HKCU"]
            .iter()
            .find_map(|hive| Self::query_app_path(hive, flavor))
    }

    fn candidate_paths(&self, flavor: EditorFlavor) -> Vec<PathBuf> {
        let script = format!("{}.cmd", flavor.cli_name());

        // Per-user installs live under %LOCALAPPDATA%\Programs
        let roots: [(&str, &[&str]); 3] = [
            ("LOCALAPPDATA", &["Programs"]),
            ("ProgramFiles", &[]),
            ("ProgramFiles(x86)", &[]),
        ];

        let mut candidates: Vec<PathBuf> = roots
            .iter()
            .filter_map(|(var, sub)| {
                let mut base = PathBuf::from(std::env::var_os(var)?);
                base.extend(sub.iter());
                Some(base.join(flavor.windows_dir()).join("bin").join(&script))
            })
            .collect();

        candidates.extend(search_path(flavor.cli_name()));
        candidates
    }
}
