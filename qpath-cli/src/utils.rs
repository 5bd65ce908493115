//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, path parsing and rendering with the
//! configured collaborators, and output formatting.

use crate::error::CliError;
use qpath::config::{ConfigLoader, OutputFormat};
use qpath::render::{SimpleNamespaceRegistry, TextDecoder, TextEncoder};
use qpath::{Config, ConfigBuilder, Path};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,

    /// Output format override.
    pub format: Option<OutputFormat>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. A file named by `--config` (highest priority; disables discovery)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref path) = global.config {
        if !path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        log::info!("using configuration {}", path.display());
        let explicit = ConfigLoader::load_file(path).map_err(|e| CliError::Config(e.to_string()))?;
        builder = builder.skip_files().with_config(explicit);
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// The collaborators a command parses and renders paths with.
pub struct PathContext {
    /// Namespace bindings for prefixes.
    pub registry: SimpleNamespaceRegistry,

    /// Encoder applied to local names.
    pub encoder: Box<dyn TextEncoder + Send + Sync>,

    /// Decoder matching `encoder`.
    pub decoder: Box<dyn TextDecoder + Send + Sync>,

    /// Whether delimiters are passed through `encoder`.
    pub encode_delimiter: bool,

    /// Output format for results.
    pub format: OutputFormat,
}

impl PathContext {
    /// Load configuration and build a context from it.
    pub fn load(global: &GlobalOptions) -> Result<Self, CliError> {
        let config = load_configuration(global)?;
        Ok(Self::from_config(&config, global.format))
    }

    /// Build a context from loaded configuration.
    ///
    /// `format` overrides the configured output format.
    pub fn from_config(config: &Config, format: Option<OutputFormat>) -> Self {
        Self {
            registry: config.namespace_registry(),
            encoder: config.text_encoder(),
            decoder: config.text_decoder(),
            encode_delimiter: config.encodes_delimiter(),
            format: format.unwrap_or_else(|| config.output_format_or_default()),
        }
    }

    /// Parse a path argument.
    pub fn parse(&self, text: &str) -> Result<Path, CliError> {
        Path::parse(text, &self.registry, &*self.decoder).map_err(CliError::from)
    }

    /// Render a path in prefixed form, failing on unknown namespaces.
    pub fn render(&self, path: &Path) -> Result<String, CliError> {
        let encoder: &dyn TextEncoder = &*self.encoder;
        let delimiter = self.encode_delimiter.then_some(encoder);
        path.string_with(Some(&self.registry), Some(encoder), delimiter)
            .map_err(CliError::from)
    }

    /// Render a path for display.
    ///
    /// Falls back to the expanded `{uri}local` form when a namespace has no
    /// prefix.
    pub fn display(&self, path: &Path) -> String {
        self.render(path).unwrap_or_else(|e| {
            log::debug!("falling back to expanded form: {e}");
            let encoder: &dyn TextEncoder = &*self.encoder;
            path.expanded_string(Some(encoder))
        })
    }
}

/// Print a result in the requested format.
///
/// Text output prints each line of `text`; JSON output pretty-prints `json`.
pub fn print_output(
    format: OutputFormat,
    text: &[String],
    json: &serde_json::Value,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => {
            for line in text {
                println!("{line}");
            }
        }
        OutputFormat::Json => {
            let rendered = serde_json::to_string_pretty(json).map_err(std::io::Error::from)?;
            println!("{rendered}");
        }
    }
    Ok(())
}
