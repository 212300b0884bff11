//! Shell equivalents of the export and install operations, shown to users
//! who would rather run them by hand.

use crate::platform::EditorFlavor;

/// Shell dialect the instructions are written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    /// Windows `cmd.exe`
    Cmd,
    /// POSIX `sh` and friends
    Posix,
}

impl Shell {
    /// The dialect of the platform this binary was built for.
    pub fn native() -> Self {
        if cfg!(target_os = "windows") {
            Shell::Cmd
        } else {
            Shell::Posix
        }
    }
}

/// Markdown instructions for exporting and reinstalling by hand.
pub fn command_line_guide(flavor: EditorFlavor, file_name: &str, shell: Shell) -> String {
    let cli = flavor.cli_name();

    let install = match shell {
        Shell::Cmd => format!(
            "for /f \"tokens=*\" %i in ({file}) do {cli} --install-extension %i\n```\n\n\
             Inside a batch file (.bat) write `%%i` instead of `%i`.",
            file = file_name,
            cli = cli
        ),
        Shell::Posix => format!(
            "grep -v '^[[:space:]]*$' {file} | while read -r ext; do {cli} --install-extension \"$ext\"; done\n```",
            file = file_name,
            cli = cli
        ),
    };
    let fence = match shell {
        Shell::Cmd => "bat",
        Shell::Posix => "bash",
    };

    format!(
        "# Managing {name} extensions from the command line\n\n\
         ## Export the installed extensions\n\
         ```{fence}\n\
         {cli} --list-extensions > {file}\n\
         ```\n\n\
         ## Install every extension in the list\n\
         ```{fence}\n\
         {install}\n",
        name = flavor.display_name(),
        fence = fence,
        cli = cli,
        file = file_name,
        install = install,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmd_guide_matches_batch_syntax() {
        let guide = command_line_guide(EditorFlavor::Stable, "extensions.txt", Shell::Cmd);
        assert!(guide.contains("code --list-extensions > extensions.txt"));
        assert!(guide.contains(
            "for /f \"tokens=*\" %i in (extensions.txt) do code --install-extension %i"
        ));
        assert!(guide.contains("`%%i`"));
    }

    #[test]
    fn test_posix_guide_uses_flavor_cli() {
        let guide = command_line_guide(EditorFlavor::Codium, "exts.txt", Shell::Posix);
        assert!(guide.starts_with("# Managing VSCodium extensions"));
        assert!(guide.contains("codium --list-extensions > exts.txt"));
        assert!(guide.contains("codium --install-extension \"$ext\""));
        assert!(!guide.contains("%i"));
    }
}
