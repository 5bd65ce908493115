//! Main entry point for the qpath CLI.
//!
//! This is the command-line interface for the qpath library. It provides
//! commands for working with qualified-name paths:
//! - `normalize`: Collapse `.` and `..` segments
//! - `relativize`: Express a path relative to a base
//! - `resolve`: Resolve a relative path against a base
//! - `relationship`: Classify how two paths relate
//! - `ancestors`: List the paths from the root down to a path
//! - `render`: Render a path with a chosen encoder

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let logger = qpath::init_logger(cli.verbose, cli.quiet);
    if let Err(e) = qpath::install_logger(logger) {
        eprintln!("Warning: {e}");
    }

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
        format: cli.format.map(Into::into),
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Normalize(cmd) => cmd.execute(&global),
        cli::Command::Relativize(cmd) => cmd.execute(&global),
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::Relationship(cmd) => cmd.execute(&global),
        cli::Command::Ancestors(cmd) => cmd.execute(&global),
        cli::Command::Render(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
