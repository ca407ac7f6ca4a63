//! # Shell Completion Module
//!
//! Completion scripts for the `tolisten` command, generated from the clap
//! definitions.
//!
//! ```bash
//! tolisten completion bash > ~/.local/share/bash-completion/completions/tolisten
//! tolisten completion fish > ~/.config/fish/completions/tolisten.fish
//! ```

use crate::cli::Shell;
use clap::Command;
use clap_complete::{generate, Generator, Shell as CompletionShell};
use std::io::{self, Write};

/// Writes the completion script for `gen` to `out`.
pub fn write_completions<G: Generator>(gen: G, cmd: &mut Command, out: &mut dyn Write) {
    let name = cmd.get_name().to_string();
    generate(gen, cmd, name, out);
}

/// Generate shell completions for the given shell on stdout
pub fn generate_completions<G: Generator>(gen: G, cmd: &mut Command) {
    write_completions(gen, cmd, &mut io::stdout());
}

/// Convert our Shell enum to clap_complete's Shell enum
#[must_use]
pub fn shell_to_completion_shell(shell: &Shell) -> CompletionShell {
    match shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use clap::CommandFactory;

    fn script_for(shell: Shell) -> String {
        let mut out = Vec::new();
        write_completions(shell_to_completion_shell(&shell), &mut Args::command(), &mut out);
        String::from_utf8(out).expect("completion scripts are UTF-8")
    }

    #[test]
    fn test_bash_script_mentions_subcommands() {
        let script = script_for(Shell::Bash);
        assert!(script.contains("_tolisten"));
        for sub in ["add", "import", "next", "list", "count"] {
            assert!(script.contains(sub), "bash completion should mention {sub}");
        }
    }

    #[test]
    fn test_every_shell_generates_something() {
        for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell, Shell::Elvish] {
            assert!(!script_for(shell).is_empty(), "{shell:?} script is empty");
        }
    }
}
