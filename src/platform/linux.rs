//! Linux editor discovery.
//!
//! Registration lookup reads the freedesktop `.desktop` entry that the
//! deb/rpm/snap/flatpak packages install; the fallback probes `PATH` and the
//! usual package install prefixes.

use super::shared::{is_launcher, prefer_cli_sibling, search_dirs, search_path};
use super::{EditorFlavor, EditorLocator};
use std::path::{Path, PathBuf};

use freedesktop_desktop_entry::DesktopEntry;

/// Programs that wrap the real launcher and cannot take CLI flags directly.
const WRAPPERS: &[&str] = &["flatpak", "env", "sh", "bash"];

/// Linux locator implementation.
pub struct LinuxLocator {
    application_dirs: Vec<PathBuf>,
}

impl LinuxLocator {
    /// Create a locator over the standard XDG application directories.
    pub fn new() -> Self {
        let mut application_dirs: Vec<PathBuf> = Vec::new();

        // User entries shadow system ones
        if let Some(data_home) = dirs::data_local_dir() {
            application_dirs.push(data_home.join("applications"));
        }
        application_dirs.push(PathBuf::from("/usr/local/share/applications"));
        application_dirs.push(PathBuf::from("/usr/share/applications"));

        // Snap and Flatpak exports
        application_dirs.push(PathBuf::from("/var/lib/snapd/desktop/applications"));
        if let Some(home) = dirs::home_dir() {
            application_dirs.push(home.join(".local/share/flatpak/exports/share/applications"));
        }
        application_dirs.push(PathBuf::from("/var/lib/flatpak/exports/share/applications"));

        Self { application_dirs }
    }

    /// Read a .desktop file and resolve the program its Exec line starts.
    fn launcher_from_desktop_file(path: &Path, flavor: EditorFlavor) -> Option<PathBuf> {
        let content = std::fs::read_to_string(path).ok()?;
        let entry = DesktopEntry::from_str(path, &content, Some(&["en"])).ok()?;
        let program = exec_program(entry.exec()?)?;

        let program_path = PathBuf::from(&program);
        let resolved = if program_path.is_absolute() {
            program_path
        } else {
            search_path(&program)?
        };

        let program_name = resolved.file_name()?.to_string_lossy();
        if WRAPPERS.contains(&&*program_name) {
            tracing::debug!(entry = %path.display(), "Skipping wrapped Exec line");
            return None;
        }

        Some(prefer_cli_sibling(resolved, flavor))
    }
}

impl Default for LinuxLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorLocator for LinuxLocator {
    fn registered_launcher(&self, flavor: EditorFlavor) -> Option<PathBuf> {
        self.application_dirs
            .iter()
            .flat_map(|dir| {
                flavor
                    .desktop_ids()
                    .iter()
                    .map(move |id| dir.join(format!("{}.desktop", id)))
            })
            .filter(|file| file.exists())
            .find_map(|file| Self::launcher_from_desktop_file(&file, flavor))
            .filter(|p| is_launcher(p))
    }

    fn candidate_paths(&self, flavor: EditorFlavor) -> Vec<PathBuf> {
        let cli = flavor.cli_name();
        let mut candidates: Vec<PathBuf> = search_path(cli).into_iter().collect();

        candidates.push(PathBuf::from("/usr/bin").join(cli));
        candidates.push(PathBuf::from("/usr/local/bin").join(cli));
        candidates.push(PathBuf::from("/snap/bin").join(cli));
        candidates.push(PathBuf::from("/usr/share").join(cli).join("bin").join(cli));
        candidates.push(PathBuf::from("/opt").join(cli).join("bin").join(cli));

        if let Some(id) = flavor.flatpak_id() {
            candidates.push(PathBuf::from("/var/lib/flatpak/exports/bin").join(id));
            if let Some(home) = dirs::home_dir() {
                candidates.push(home.join(".local/share/flatpak/exports/bin").join(id));
            }
        }

        if let Some(local_bin) = dirs::home_dir().map(|h| h.join(".local/bin")) {
            if let Some(found) = search_dirs([local_bin], cli) {
                candidates.push(found);
            }
        }

        candidates
    }
}

/// First word of a desktop Exec value, with quoting removed.
///
/// Field codes (`%F`, `%U`, ...) only ever follow the program, so they
/// never need stripping here.
fn exec_program(exec: &str) -> Option<String> {
    let exec = exec.trim_start();
    if let Some(quoted) = exec.strip_prefix('"') {
        let end = quoted.find('"')?;
        let program = &quoted[..end];
        return (!program.is_empty()).then(|| program.replace("\\\\", "\\"));
    }
    exec.split_whitespace().next().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::shared::write_launcher;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_exec_program_plain() {
        assert_eq!(
            exec_program("/usr/share/code/code %F"),
            Some("/usr/share/code/code".to_string())
        );
        assert_eq!(exec_program("code --new-window %F"), Some("code".to_string()));
    }

    #[test]
    fn test_exec_program_quoted() {
        assert_eq!(
            exec_program("\"/opt/VS Code/code\" --unity-launch %F"),
            Some("/opt/VS Code/code".to_string())
        );
        assert_eq!(exec_program("\"\" %F"), None);
        assert_eq!(exec_program("   "), None);
    }

    fn write_desktop(dir: &Path, name: &str, exec: &str) -> PathBuf {
        let path = dir.join(name);
        let content = format!(
            "[Desktop Entry]\nName=Visual Studio Code\nType=Application\nExec={}\n",
            exec
        );
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_desktop_entry_prefers_bin_script() {
        let temp = TempDir::new().unwrap();
        let install = temp.path().join("code");
        fs::create_dir_all(install.join("bin")).unwrap();
        let electron = install.join("code");
        let script = install.join("bin").join("code");
        write_launcher(&electron);
        write_launcher(&script);

        let apps = temp.path().join("applications");
        fs::create_dir(&apps).unwrap();
        let desktop = write_desktop(&apps, "code.desktop", &format!("{} %F", electron.display()));

        let locator = LinuxLocator {
            application_dirs: vec![apps],
        };
        assert_eq!(
            LinuxLocator::launcher_from_desktop_file(&desktop, EditorFlavor::Stable),
            Some(script.clone())
        );
        assert_eq!(locator.registered_launcher(EditorFlavor::Stable), Some(script));
    }

    #[test]
    fn test_flatpak_wrapper_is_skipped() {
        let temp = TempDir::new().unwrap();
        let desktop = write_desktop(
            temp.path(),
            "com.visualstudio.code.desktop",
            "/usr/bin/flatpak run --branch=stable --command=code com.visualstudio.code %F",
        );
        assert_eq!(
            LinuxLocator::launcher_from_desktop_file(&desktop, EditorFlavor::Stable),
            None
        );
    }

    #[test]
    fn test_no_desktop_entries() {
        let temp = TempDir::new().unwrap();
        let locator = LinuxLocator {
            application_dirs: vec![temp.path().to_path_buf()],
        };
        assert_eq!(locator.registered_launcher(EditorFlavor::Insiders), None);
    }

    #[test]
    fn test_candidates_cover_standard_prefixes() {
        let locator = LinuxLocator::new();
        let candidates = locator.candidate_paths(EditorFlavor::Stable);
        assert!(candidates.contains(&PathBuf::from("/usr/bin/code")));
        assert!(candidates.contains(&PathBuf::from("/snap/bin/code")));
        assert!(candidates.contains(&PathBuf::from("/usr/share/code/bin/code")));
    }
}
