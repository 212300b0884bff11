//! Command-line front end for vsext.
//!
//! Provides the export, install, locate, guide and config subcommands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::style;

use crate::config::Config;
use crate::guide::{command_line_guide, Shell};
use crate::manager::{ExtensionManager, InstallProgress};
use crate::platform::{self, EditorFlavor};

#[derive(Parser)]
#[command(name = "vsext")]
#[command(about = "Export and reinstall VS Code extension lists", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Use this launcher instead of discovering one
    #[arg(long, global = true, value_name = "PATH")]
    pub editor: Option<PathBuf>,

    /// Which editor to look for (overrides the config file)
    #[arg(long, global = true, value_enum)]
    pub flavor: Option<EditorFlavor>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the installed extensions to a list file
    Export {
        /// Destination file or directory (default: ./extensions.txt)
        path: Option<PathBuf>,
    },

    /// Install every extension named in a list file
    Install {
        /// Extension list file, one identifier per line
        path: PathBuf,
    },

    /// Print the editor launcher that would be used
    Locate,

    /// Show the equivalent shell commands
    Guide,

    /// Inspect the configuration file
    Config {
        /// Print the config file location
        #[arg(long)]
        path: bool,

        /// Write the effective settings to a new config file
        #[arg(long, conflicts_with = "path")]
        init: bool,
    },
}

/// Parse arguments and run the requested subcommand.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load();
    if let Some(flavor) = cli.flavor {
        config.editor.flavor = flavor;
    }

    match cli.command {
        Commands::Export { path } => {
            let manager = discover(&config, cli.editor.as_deref());
            let destination = match path {
                Some(path) => path,
                None => std::env::current_dir()
                    .context("Failed to read the current directory")?
                    .join(&config.export.file_name),
            };

            let summary = manager.export(&destination)?;
            println!(
                "{} Exported {} extensions to {}",
                style("✓").green().bold(),
                summary.count,
                style(summary.destination.display()).dim()
            );
        }

        Commands::Install { path } => {
            let manager = discover(&config, cli.editor.as_deref());
            let report = manager.install(&path, print_progress)?;
            println!(
                "{} {}",
                style("✓").green().bold(),
                style(format!("Installed {} extensions", report.installed.len())).cyan()
            );
        }

        Commands::Locate => {
            let manager = discover(&config, cli.editor.as_deref());
            let launcher = manager.launcher()?;
            println!("{}", launcher.display());
        }

        Commands::Guide => {
            print!(
                "{}",
                command_line_guide(config.editor.flavor, &config.export.file_name, Shell::native())
            );
        }

        Commands::Config { path, init } => {
            if path {
                println!("{}", Config::config_path().display());
            } else if init {
                let existing = Config::config_path();
                if existing.exists() {
                    anyhow::bail!("Config file already exists at {}", existing.display());
                }
                let written = config.save()?;
                println!(
                    "{} Wrote config to {}",
                    style("✓").green().bold(),
                    style(written.display()).dim()
                );
            } else {
                print!("{}", config.to_toml()?);
            }
        }
    }

    Ok(())
}

fn discover(config: &Config, editor: Option<&Path>) -> ExtensionManager {
    let locator = platform::current();
    ExtensionManager::discover(config, locator.as_ref(), editor)
}

fn print_progress(event: InstallProgress<'_>) {
    match event {
        InstallProgress::Started { total } => {
            println!("{} Installing {} extensions...", style("→").cyan(), total);
        }
        InstallProgress::Installing { index, total, id } => {
            println!(
                "  {} {}",
                style(format!("[{}/{}]", index, total)).dim(),
                style(id).bold()
            );
        }
        InstallProgress::Finished { id, success: false } => {
            println!("  {} Failed to install {}", style("✗").red().bold(), id);
        }
        InstallProgress::Finished { .. } => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_install_with_global_flags() {
        let cli = Cli::try_parse_from([
            "vsext",
            "install",
            "extensions.txt",
            "--flavor",
            "codium",
            "--editor",
            "/opt/codium/bin/codium",
        ])
        .unwrap();

        assert_eq!(cli.flavor, Some(EditorFlavor::Codium));
        assert_eq!(cli.editor, Some(PathBuf::from("/opt/codium/bin/codium")));
        assert!(matches!(
            cli.command,
            Commands::Install { ref path } if path == Path::new("extensions.txt")
        ));
    }

    #[test]
    fn test_export_path_is_optional() {
        let cli = Cli::try_parse_from(["vsext", "export"]).unwrap();
        assert!(matches!(cli.command, Commands::Export { path: None }));
    }

    #[test]
    fn test_install_requires_path() {
        assert!(Cli::try_parse_from(["vsext", "install"]).is_err());
    }

    #[test]
    fn test_config_init_and_path_conflict() {
        let cli = Cli::try_parse_from(["vsext", "config", "--init"]).unwrap();
        assert!(matches!(cli.command, Commands::Config { path: false, init: true }));

        assert!(Cli::try_parse_from(["vsext", "config", "--init", "--path"]).is_err());
    }
}
