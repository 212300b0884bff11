//! Lookup helpers shared by the per-OS locators.

use std::path::{Path, PathBuf};

#[cfg(any(not(target_os = "macos"), test))]
use super::EditorFlavor;
#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
use super::EditorLocator;

/// A launcher candidate is usable when it is a regular file we can execute.
pub fn is_launcher(path: &Path) -> bool {
    let Ok(metadata) = path.metadata() else {
        return false;
    };

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        metadata.is_file() && metadata.permissions().mode() & 0o111 != 0
    }

    #[cfg(not(unix))]
    {
        metadata.is_file()
    }
}

/// Find `program` on `PATH`, the way a shell would (honoring `PATHEXT` on
/// Windows).
pub fn search_path(program: &str) -> Option<PathBuf> {
    which::which(program)
        .map_err(|e| tracing::debug!(program, "Not on PATH: {}", e))
        .ok()
}

/// Find `program` in the given directories, first executable match wins.
#[cfg(any(target_os = "linux", test))]
pub fn search_dirs(dirs: impl IntoIterator<Item = PathBuf>, program: &str) -> Option<PathBuf> {
    let dirs: Vec<PathBuf> = dirs
        .into_iter()
        .filter(|dir| !dir.as_os_str().is_empty())
        .collect();
    if dirs.is_empty() {
        return None;
    }

    let paths = std::env::join_paths(dirs).ok()?;
    let cwd = std::env::current_dir().unwrap_or_default();
    which::which_in(program, Some(paths), cwd).ok()
}

/// Given the editor's main executable, prefer the `bin/<cli>` script next to
/// it. The script handles CLI flags without starting a window.
#[cfg(any(target_os = "linux", target_os = "windows", test))]
pub fn prefer_cli_sibling(executable: PathBuf, flavor: EditorFlavor) -> PathBuf {
    let script = if cfg!(target_os = "windows") {
        format!("{}.cmd", flavor.cli_name())
    } else {
        flavor.cli_name().to_string()
    };

    executable
        .parent()
        .map(|dir| dir.join("bin").join(script))
        .filter(|p| is_launcher(p))
        .unwrap_or(executable)
}

/// Extract the default value from `reg query <key> /ve` output.
///
/// The value label is localized ("(Default)", "(既定)", ...), so the line is
/// found by its `REG_SZ`/`REG_EXPAND_SZ` type column instead.
#[cfg(any(target_os = "windows", test))]
pub fn parse_reg_default_value(output: &str) -> Option<String> {
    output.lines().find_map(|line| {
        let (_, rest) = ["REG_EXPAND_SZ", "REG_SZ"]
            .iter()
            .find_map(|ty| line.split_once(*ty))?;
        let value = rest.trim().trim_matches('"');
        (!value.is_empty()).then(|| value.to_string())
    })
}

/// Fallback locator for platforms without a registration mechanism.
#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
pub struct PathLocator;

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
impl EditorLocator for PathLocator {
    fn registered_launcher(&self, _flavor: EditorFlavor) -> Option<PathBuf> {
        None
    }

    fn candidate_paths(&self, flavor: EditorFlavor) -> Vec<PathBuf> {
        search_path(flavor.cli_name()).into_iter().collect()
    }
}

/// Create an executable stub launcher at `path`.
#[cfg(test)]
pub(crate) fn write_launcher(path: &Path) {
    std::fs::write(path, "#!/bin/sh\n").unwrap();

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }
}
