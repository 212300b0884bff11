use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{VsextError, VsextResult};
use crate::platform::EditorFlavor;

/// Default name for an exported list when only a directory is given.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "extensions.txt";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub editor: EditorConfig,
    pub export: ExportConfig,
    pub appearance: AppearanceConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub flavor: EditorFlavor,
    /// Explicit launcher path, checked before any discovery
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub file_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Window theme for the desktop front end
    pub theme: String,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            theme: "catppuccin-mocha".to_string(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
        }
    }
}

impl EditorConfig {
    /// The launcher override with `~` and env vars expanded.
    pub fn path_override(&self) -> Option<PathBuf> {
        self.path.as_deref().map(|p| {
            let expanded = shellexpand::full(p)
                .map(|s| s.into_owned())
                .unwrap_or_else(|_| p.to_string());
            PathBuf::from(expanded)
        })
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .map(|h| h.join(".config"))
                    .unwrap_or_else(|| PathBuf::from("/tmp"))
            })
            .join("vsext")
            .join("config.toml")
    }

    /// Load config from file, or return defaults if not found
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from `path`. A missing or unreadable file yields defaults.
    pub fn load_from(path: &Path) -> Self {
        let mut config = if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => Self::from_toml(&content).unwrap_or_else(|e| {
                    tracing::warn!(path = %path.display(), "{}", e);
                    Self::default()
                }),
                Err(e) => {
                    tracing::warn!(path = %path.display(), "Failed to read config: {}", e);
                    Self::default()
                }
            }
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Self::default()
        };

        config.validate();
        config
    }

    /// Parse config from TOML text.
    pub fn from_toml(content: &str) -> VsextResult<Self> {
        let mut config: Self = toml::from_str(content)
            .map_err(|e| VsextError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate();
        Ok(config)
    }

    /// Normalize values the rest of the program relies on
    fn validate(&mut self) {
        let name = self.export.file_name.trim();
        if name.is_empty() || name.contains(['/', '\\']) {
            self.export.file_name = DEFAULT_EXPORT_FILE_NAME.to_string();
        } else if name.len() != self.export.file_name.len() {
            self.export.file_name = name.to_string();
        }

        if self.editor.path.as_deref().is_some_and(|p| p.trim().is_empty()) {
            self.editor.path = None;
        }
    }

    /// Save config to file
    pub fn save(&self) -> VsextResult<PathBuf> {
        let path = Self::config_path();
        self.save_to(&path)?;
        Ok(path)
    }

    /// Write config to `path`, creating its parent directory.
    pub fn save_to(&self, path: &Path) -> VsextResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = self.to_toml()?;
        fs::write(path, content)?;

        tracing::info!(path = %path.display(), "Saved config");
        Ok(())
    }

    pub fn to_toml(&self) -> VsextResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| VsextError::Config(format!("Failed to serialize config: {}", e)))
    }
}
