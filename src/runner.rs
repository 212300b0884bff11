//! Launcher invocation.
//!
//! `CommandRunner` is the single seam between the export/install logic and
//! the operating system, so tests can record invocations instead of spawning
//! an editor.

use std::io;
use std::path::Path;
use std::process::Command;

/// Captured result of one finished launcher invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` if the process was killed by a signal
    pub code: Option<i32>,
    /// Raw standard output, kept as bytes so it can be written back verbatim
    pub stdout: Vec<u8>,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Standard output decoded for display.
    pub fn stdout_text(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }
}

/// Runs a program to completion and captures its output.
pub trait CommandRunner {
    /// Spawn `program` with `args` and wait for it.
    ///
    /// `Err` means the process never started; a started process that fails
    /// is reported through [`CommandOutput::code`].
    fn run(&self, program: &Path, args: &[&str]) -> io::Result<CommandOutput>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, program: &Path, args: &[&str]) -> io::Result<CommandOutput> {
        (**self).run(program, args)
    }
}

/// Runs commands as real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &Path, args: &[&str]) -> io::Result<CommandOutput> {
        tracing::debug!(program = %program.display(), ?args, "Spawning launcher");

        let output = Command::new(program).args(args).output()?;

        Ok(CommandOutput {
            code: output.status.code(),
            stdout: output.stdout,
            stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
        })
    }
}

/// Render a command line for messages and logs.
pub fn display_command(program: &Path, args: &[&str]) -> String {
    let program = program
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| program.display().to_string());

    std::iter::once(program)
        .chain(args.iter().map(|a| a.to_string()))
        .collect::<Vec<_>>()
        .join(" ")
}
