//! Build script for qpath-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("qpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Normalize, relate and render qualified paths")
        .long_about(
            "Command-line tool for working with hierarchical paths of namespace-qualified names",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read configuration from this file instead of discovering qpath.yaml")
                .value_name("FILE")
                .global(true)
                .env("QPATH_CONFIG"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format")
                .value_parser(["text", "json"])
                .global(true),
        )
        .subcommands(vec![
            Command::new("normalize")
                .about("Collapse . and .. segments")
                .long_about("Print the normalized form of a path, or check that it is normalized"),
            Command::new("relativize")
                .about("Express an absolute path relative to an absolute base")
                .long_about("Print the relative path that leads from --base to PATH"),
            Command::new("resolve")
                .about("Resolve a relative path against a base path")
                .long_about("Append RELATIVE to BASE and print the normalized result"),
            Command::new("relationship")
                .about("Classify how two paths relate")
                .long_about(
                    "Print ancestor, descendant, same or unrelated; --expect turns it into an assertion",
                ),
            Command::new("ancestors")
                .about("List every path from the root down to a path")
                .long_about("Print each prefix of a path, shortest first"),
            Command::new("render")
                .about("Render a path with a chosen encoder")
                .long_about("Re-render a path in prefixed or expanded form with a chosen encoder"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a qpath configuration file for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("qpath.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
