//! Shell completion generation command.
//!
//! This module provides the `completions` command which writes a completion
//! script for the chosen shell to stdout, with install hints on stderr.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "qpath";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        if !global.quiet {
            if let Some(hint) = install_hint(self.shell) {
                eprintln!("# Install with:");
                eprintln!("#   {hint}");
                eprintln!();
            }
        }

        let mut cmd = Cli::command();
        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}

fn install_hint(shell: Shell) -> Option<String> {
    let hint = match shell {
        Shell::Bash => {
            format!("{BIN_NAME} completions bash > ~/.local/share/bash-completion/completions/{BIN_NAME}")
        }
        Shell::Zsh => format!("{BIN_NAME} completions zsh > ~/.zsh/completions/_{BIN_NAME}"),
        Shell::Fish => {
            format!("{BIN_NAME} completions fish > ~/.config/fish/completions/{BIN_NAME}.fish")
        }
        Shell::PowerShell => format!("{BIN_NAME} completions powershell >> $PROFILE"),
        _ => return None,
    };
    Some(hint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_hints() {
        assert!(install_hint(Shell::Bash).unwrap().contains("bash-completion"));
        assert!(install_hint(Shell::Zsh).unwrap().ends_with("_qpath"));
        assert!(install_hint(Shell::Elvish).is_none());
    }
}
