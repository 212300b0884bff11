//! Export and install operations.
//!
//! Both operations run the editor's launcher synchronously, one invocation at
//! a time, and report failures as [`VsextError`] values at their boundary.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::{Config, DEFAULT_EXPORT_FILE_NAME};
use crate::error::{VsextError, VsextResult};
use crate::extension_list::{ExtensionId, ExtensionList};
use crate::platform::{self, EditorFlavor, EditorLocator};
use crate::runner::{display_command, CommandOutput, CommandRunner, ProcessRunner};

/// Launcher flag that prints installed extensions, one per line.
pub const LIST_FLAG: &str = "--list-extensions";

/// Launcher flag that installs the identifier that follows it.
pub const INSTALL_FLAG: &str = "--install-extension";

/// Outcome of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// File that was written
    pub destination: PathBuf,
    /// Number of identifiers in the exported list
    pub count: usize,
}

/// Progress notifications emitted while installing a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallProgress<'a> {
    Started {
        total: usize,
    },
    Installing {
        /// 1-based position in the list
        index: usize,
        total: usize,
        id: &'a ExtensionId,
    },
    Finished {
        id: &'a ExtensionId,
        success: bool,
    },
}

/// An identifier whose install invocation exited non-zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedInstall {
    pub id: ExtensionId,
    pub code: Option<i32>,
    pub stderr: String,
}

/// Per-identifier results of an install run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    pub installed: Vec<ExtensionId>,
    pub failed: Vec<FailedInstall>,
}

impl InstallReport {
    pub fn total(&self) -> usize {
        self.installed.len() + self.failed.len()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Collapse the report into the aggregate outcome of the whole run.
    pub fn into_result(self) -> VsextResult<InstallReport> {
        if self.is_success() {
            return Ok(self);
        }

        let stderr = self
            .failed
            .iter()
            .map(|f| {
                if f.stderr.is_empty() {
                    f.id.to_string()
                } else {
                    format!("{}: {}", f.id, f.stderr)
                }
            })
            .collect::<Vec<_>>()
            .join("\n");

        Err(VsextError::InvocationFailed {
            command: format!(
                "{} ({} of {} failed)",
                INSTALL_FLAG,
                self.failed.len(),
                self.total()
            ),
            code: self.failed.last().and_then(|f| f.code),
            stderr,
        })
    }
}

/// Runs export/install against one resolved launcher.
pub struct ExtensionManager<R: CommandRunner = ProcessRunner> {
    launcher: Option<PathBuf>,
    flavor: EditorFlavor,
    runner: R,
    export_file_name: String,
}

impl ExtensionManager<ProcessRunner> {
    /// Discover the launcher for the configured flavor.
    ///
    /// `editor_override` (from the command line) wins over the configured
    /// path, which wins over platform discovery.
    pub fn discover(
        config: &Config,
        locator: &dyn EditorLocator,
        editor_override: Option<&Path>,
    ) -> Self {
        let configured = config.editor.path_override();
        let override_path = editor_override.or(configured.as_deref());
        let launcher = platform::resolve_launcher(locator, config.editor.flavor, override_path);

        Self::with_runner(launcher, ProcessRunner)
            .flavor(config.editor.flavor)
            .export_file_name(&config.export.file_name)
    }
}

impl<R: CommandRunner> ExtensionManager<R> {
    /// Build a manager around an already resolved (or missing) launcher.
    pub fn with_runner(launcher: Option<PathBuf>, runner: R) -> Self {
        Self {
            launcher,
            flavor: EditorFlavor::default(),
            runner,
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
        }
    }

    pub fn flavor(mut self, flavor: EditorFlavor) -> Self {
        self.flavor = flavor;
        self
    }

    /// File name used when an export destination is a directory.
    pub fn export_file_name(mut self, name: &str) -> Self {
        self.export_file_name = name.to_string();
        self
    }

    /// The resolved launcher, or `EditorNotFound`.
    pub fn launcher(&self) -> VsextResult<&Path> {
        self.launcher.as_deref().ok_or_else(|| {
            VsextError::EditorNotFound(format!(
                "no {} launcher was found; make sure it is installed or set editor.path",
                self.flavor
            ))
        })
    }

    /// Run the launcher and map spawn failures onto the error kinds.
    fn invoke(&self, launcher: &Path, args: &[&str]) -> VsextResult<CommandOutput> {
        self.runner.run(launcher, args).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => VsextError::editor_not_found(launcher),
            _ => VsextError::InvocationFailed {
                command: display_command(launcher, args),
                code: None,
                stderr: e.to_string(),
            },
        })
    }

    /// Write the launcher's extension listing to `destination`, verbatim.
    ///
    /// If `destination` is an existing directory the configured export file
    /// name is appended to it.
    pub fn export(&self, destination: &Path) -> VsextResult<ExportSummary> {
        let launcher = self.launcher()?;

        if destination.as_os_str().is_empty() {
            return Err(VsextError::InvalidInput(
                "no export destination was given".to_string(),
            ));
        }

        let destination = if destination.is_dir() {
            destination.join(&self.export_file_name)
        } else {
            destination.to_path_buf()
        };

        let output = self.invoke(launcher, &[LIST_FLAG])?;
        if !output.success() {
            return Err(VsextError::InvocationFailed {
                command: display_command(launcher, &[LIST_FLAG]),
                code: output.code,
                stderr: output.stderr,
            });
        }

        fs::write(&destination, &output.stdout)?;

        let count = ExtensionList::parse(&output.stdout_text()).len();
        tracing::info!(
            destination = %destination.display(),
            count,
            "Exported extension list"
        );

        Ok(ExportSummary { destination, count })
    }

    /// Install every identifier in the list file, in file order.
    ///
    /// Individual failures do not stop the run; they are collected and, if
    /// any occurred, reported as one `InvocationFailed` at the end.
    pub fn install<F>(&self, list_file: &Path, progress: F) -> VsextResult<InstallReport>
    where
        F: FnMut(InstallProgress<'_>),
    {
        let launcher = self.launcher()?;
        let list = ExtensionList::read(list_file)?;

        self.install_list(launcher, &list, progress)?.into_result()
    }

    /// Invoke the install flag once per identifier and record the outcome.
    ///
    /// Only a launcher that cannot be spawned aborts the run early.
    pub fn install_list<F>(
        &self,
        launcher: &Path,
        list: &ExtensionList,
        mut progress: F,
    ) -> VsextResult<InstallReport>
    where
        F: FnMut(InstallProgress<'_>),
    {
        let total = list.len();
        let mut report = InstallReport::default();

        tracing::info!(total, "Installing extensions");
        progress(InstallProgress::Started { total });

        for (i, id) in list.iter().enumerate() {
            tracing::info!("Installing {} ({}/{})", id, i + 1, total);
            progress(InstallProgress::Installing {
                index: i + 1,
                total,
                id,
            });

            let output = self.invoke(launcher, &[INSTALL_FLAG, id.as_str()])?;
            let success = output.success();
            if success {
                report.installed.push(id.clone());
            } else {
                tracing::warn!(code = ?output.code, "Failed to install {}: {}", id, output.stderr);
                report.failed.push(FailedInstall {
                    id: id.clone(),
                    code: output.code,
                    stderr: output.stderr,
                });
            }

            progress(InstallProgress::Finished { id, success });
        }

        tracing::info!(
            installed = report.installed.len(),
            failed = report.failed.len(),
            "Install run complete"
        );
        Ok(report)
    }
}
