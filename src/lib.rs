//! vsext - export and reinstall VS Code extension lists.
//!
//! vsext drives the editor's own command-line launcher: `--list-extensions`
//! to write the installed extensions to a file, and `--install-extension`
//! once per line to put them back on another machine.
//!
//! # Architecture
//!
//! - [`platform`] - Finding the launcher (Registry, desktop entries, Spotlight)
//! - [`runner`] - Spawning the launcher and capturing its output
//! - [`extension_list`] - Extension identifiers and list files
//! - [`manager`] - The export and install operations
//! - [`config`] - Configuration loading and management
//! - [`cli`] / [`ui`] - Command-line and desktop front ends
//!
//! # Example
//!
//! ```ignore
//! use vsext::{Config, ExtensionManager};
//!
//! let config = Config::load();
//! let locator = vsext::platform::current();
//! let manager = ExtensionManager::discover(&config, locator.as_ref(), None);
//!
//! manager.export("extensions.txt".as_ref())?;
//! ```

pub mod cli;
pub mod config;
pub mod extension_list;
pub mod guide;
pub mod manager;
pub mod platform;
pub mod runner;
pub mod ui;

mod error;

pub use config::Config;
pub use error::{VsextError, VsextResult};
pub use extension_list::{ExtensionId, ExtensionList};
pub use manager::{ExportSummary, ExtensionManager, InstallProgress, InstallReport};
pub use platform::{EditorFlavor, EditorLocator};

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `default_filter`. Logs go to stderr so
/// they never mix with command output.
pub fn init_tracing(default_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
