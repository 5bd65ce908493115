//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AncestorsCommand, CompletionsCommand, NormalizeCommand, RelationshipCommand,
    RelativizeCommand, RenderCommand, ResolveCommand, ValidateCommand,
};
use clap::{Parser, Subcommand, ValueEnum};
use qpath::config::OutputFormat;
use std::path::PathBuf;

/// Command-line tool for working with qualified-name paths.
#[derive(Parser)]
#[command(name = "qpath")]
#[command(version, about = "Normalize, relate and render qualified paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Read configuration from this file instead of discovering qpath.yaml
    #[arg(long, value_name = "FILE", global = true, env = "QPATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, global = true)]
    pub format: Option<FormatArg>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output formats accepted by `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// One rendered path per line
    Text,
    /// A single JSON document
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Collapse `.` and `..` segments
    Normalize(NormalizeCommand),

    /// Express an absolute path relative to an absolute base
    Relativize(RelativizeCommand),

    /// Resolve a relative path against a base path
    Resolve(ResolveCommand),

    /// Classify how two paths relate
    Relationship(RelationshipCommand),

    /// List every path from the root down to a path
    Ancestors(AncestorsCommand),

    /// Render a path with a chosen encoder
    Render(RenderCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
