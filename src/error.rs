//! Error types for vsext
//!
//! Every operation reports one of these at its boundary; callers turn them
//! into a user-visible message rather than aborting.

use std::path::Path;

use thiserror::Error;

/// Errors that can occur in vsext
#[derive(Debug, Error)]
pub enum VsextError {
    /// No launcher was found, or the resolved one could not be spawned
    #[error("Editor not found: {0}")]
    EditorNotFound(String),

    /// The launcher ran but exited non-zero, or failed to start
    #[error("`{command}` failed{}: {stderr}", .code.map(|c| format!(" with exit code {}", c)).unwrap_or_default())]
    InvocationFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    /// Empty or missing path supplied by the user
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl VsextError {
    pub(crate) fn editor_not_found(launcher: &Path) -> Self {
        VsextError::EditorNotFound(format!(
            "{} could not be started; make sure the editor is installed",
            launcher.display()
        ))
    }

    /// Short category used by the UI status line.
    pub fn kind(&self) -> &'static str {
        match self {
            VsextError::EditorNotFound(_) => "editor not found",
            VsextError::InvocationFailed { .. } => "invocation failed",
            VsextError::InvalidInput(_) => "invalid input",
            VsextError::Config(_) => "configuration",
            VsextError::Io(_) => "io",
        }
    }
}

/// Result type alias for vsext operations
pub type VsextResult<T> = Result<T, VsextError>;
