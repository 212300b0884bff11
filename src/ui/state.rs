//! Framework-independent view state for the desktop window.

use std::path::Path;

use crate::error::{VsextError, VsextResult};
use crate::manager::{ExportSummary, InstallProgress, InstallReport};

/// Visibility of the command-line help panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Collapsed,
    Expanded,
}

impl PanelState {
    pub fn from_expanded(expanded: bool) -> Self {
        if expanded {
            PanelState::Expanded
        } else {
            PanelState::Collapsed
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            PanelState::Collapsed => PanelState::Expanded,
            PanelState::Expanded => PanelState::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == PanelState::Expanded
    }
}

/// Outcome line shown under the forms, in place of modal dialogs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Idle,
    Success(String),
    Error(String),
}

impl Status {
    pub fn from_export(result: VsextResult<ExportSummary>) -> Self {
        match result {
            Ok(summary) => Status::Success(format!(
                "Exported {} extensions to {}",
                summary.count,
                summary.destination.display()
            )),
            Err(e) => Status::from_error("Export failed", e),
        }
    }

    pub fn from_install(result: VsextResult<InstallReport>) -> Self {
        match result {
            Ok(report) => Status::Success(format!(
                "Installed {} extensions",
                report.installed.len()
            )),
            Err(e) => Status::from_error("Install failed", e),
        }
    }

    fn from_error(context: &str, error: VsextError) -> Self {
        match error {
            // Already phrased for the user
            VsextError::EditorNotFound(_) | VsextError::InvalidInput(_) => {
                Status::Error(error.to_string())
            }
            other => Status::Error(format!("{} ({}): {}", context, other.kind(), other)),
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Status::Idle => None,
            Status::Success(m) | Status::Error(m) => Some(m),
        }
    }
}

/// Everything the window renders.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub export_path: String,
    pub install_path: String,
    pub panel: PanelState,
    pub status: Status,
    /// Per-identifier lines from the last install run
    pub install_log: Vec<String>,
    /// Set when no launcher exists; the window then shows only this
    pub fatal: Option<String>,
}

impl ViewState {
    /// Fill the export field with `<dir>/<file_name>`, as picking a folder does.
    pub fn suggest_export_path(&mut self, dir: &Path, file_name: &str) {
        if self.export_path.is_empty() {
            self.export_path = dir.join(file_name).to_string_lossy().into_owned();
        }
    }

    /// Append an install progress event to the log panel.
    pub fn record_progress(&mut self, event: InstallProgress<'_>) {
        match event {
            InstallProgress::Started { .. } => self.install_log.clear(),
            InstallProgress::Installing { index, total, id } => {
                self.install_log.push(format!("[{}/{}] Installing {}", index, total, id));
            }
            InstallProgress::Finished { id, success: false } => {
                self.install_log.push(format!("Failed to install {}", id));
            }
            InstallProgress::Finished { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extension_list::ExtensionId;
    use std::path::PathBuf;

    #[test]
    fn test_panel_starts_collapsed_and_toggles() {
        let panel = PanelState::default();
        assert_eq!(panel, PanelState::Collapsed);
        assert!(!panel.is_expanded());

        let panel = panel.toggled();
        assert!(panel.is_expanded());
        assert_eq!(panel.toggled(), PanelState::Collapsed);
    }

    #[test]
    fn test_panel_from_checkbox() {
        assert_eq!(PanelState::from_expanded(true), PanelState::Expanded);
        assert_eq!(PanelState::from_expanded(false), PanelState::Collapsed);
    }

    #[test]
    fn test_export_status() {
        let status = Status::from_export(Ok(ExportSummary {
            destination: PathBuf::from("/tmp/extensions.txt"),
            count: 3,
        }));
        assert_eq!(
            status.message(),
            Some("Exported 3 extensions to /tmp/extensions.txt")
        );

        let status = Status::from_export(Err(VsextError::InvalidInput(
            "no export destination was given".to_string(),
        )));
        assert_eq!(
            status,
            Status::Error("Invalid input: no export destination was given".to_string())
        );
    }

    #[test]
    fn test_install_status() {
        let report = InstallReport {
            installed: vec![ExtensionId::new("a.b")],
            failed: Vec::new(),
        };
        assert_eq!(
            Status::from_install(Ok(report)),
            Status::Success("Installed 1 extensions".to_string())
        );

        let status = Status::from_install(Err(VsextError::InvocationFailed {
            command: "--install-extension".to_string(),
            code: Some(1),
            stderr: "a.b: nope".to_string(),
        }));
        assert_eq!(
            status.message(),
            Some("Install failed (invocation failed): `--install-extension` failed with exit code 1: a.b: nope")
        );
        assert_eq!(Status::Idle.message(), None);
    }

    #[test]
    fn test_io_error_status_names_its_kind() {
        let err = VsextError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only file system",
        ));
        assert_eq!(
            Status::from_export(Err(err)),
            Status::Error("Export failed (io): IO error: read-only file system".to_string())
        );
    }

    #[test]
    fn test_suggest_export_path_keeps_user_input() {
        let mut state = ViewState::default();
        state.suggest_export_path(Path::new("/home/me"), "extensions.txt");
        assert_eq!(
            PathBuf::from(&state.export_path),
            Path::new("/home/me").join("extensions.txt")
        );

        state.export_path = "/elsewhere/list.txt".to_string();
        state.suggest_export_path(Path::new("/home/me"), "extensions.txt");
        assert_eq!(state.export_path, "/elsewhere/list.txt");
    }

    #[test]
    fn test_record_progress() {
        let mut state = ViewState::default();
        state.install_log.push("stale".to_string());
        let good = ExtensionId::new("a.b");
        let bad = ExtensionId::new("c.d");

        state.record_progress(InstallProgress::Started { total: 2 });
        state.record_progress(InstallProgress::Installing { index: 1, total: 2, id: &good });
        state.record_progress(InstallProgress::Finished { id: &good, success: true });
        state.record_progress(InstallProgress::Installing { index: 2, total: 2, id: &bad });
        state.record_progress(InstallProgress::Finished { id: &bad, success: false });

        assert_eq!(
            state.install_log,
            vec![
                "[1/2] Installing a.b",
                "[2/2] Installing c.d",
                "Failed to install c.d",
            ]
        );
    }
}
