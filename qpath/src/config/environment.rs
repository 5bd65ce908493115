//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `QPATH_*` environment variables that
//! override configuration file values.

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use crate::render::EncoderKind;
use std::collections::BTreeMap;
use std::env;

/// Selects the encoder (`jsr283`, `url`, `none`).
pub const ENCODER_ENV: &str = "QPATH_ENCODER";
/// Selects the output format (`text`, `json`).
pub const OUTPUT_FORMAT_ENV: &str = "QPATH_OUTPUT_FORMAT";
/// Adds namespaces as `prefix=uri` pairs separated by commas.
pub const NAMESPACES_ENV: &str = "QPATH_NAMESPACES";
/// Enables or disables delimiter encoding.
pub const ENCODE_DELIMITER_ENV: &str = "QPATH_ENCODE_DELIMITER";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use qpath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Namespaces from `QPATH_NAMESPACES` are added to any already
    /// configured; the other variables replace their field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if any variable holds an invalid value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(value) = env::var(ENCODER_ENV) {
            config.encoder = Some(EncoderKind::parse(&value).map_err(|message| {
                Error::Validation {
                    field: ENCODER_ENV.into(),
                    message,
                }
            })?);
        }

        if let Ok(value) = env::var(OUTPUT_FORMAT_ENV) {
            config.output_format = Some(OutputFormat::parse(&value).map_err(|message| {
                Error::Validation {
                    field: OUTPUT_FORMAT_ENV.into(),
                    message,
                }
            })?);
        }

        if let Ok(value) = env::var(ENCODE_DELIMITER_ENV) {
            config.encode_delimiter = Some(Self::parse_bool(ENCODE_DELIMITER_ENV, &value)?);
        }

        if let Ok(value) = env::var(NAMESPACES_ENV) {
            let namespaces = Self::parse_namespaces(&value)?;
            config
                .namespaces
                .get_or_insert_with(BTreeMap::new)
                .extend(namespaces);
        }

        Ok(())
    }

    /// Parse boolean from string.
    ///
    /// Accepts: true/false, 1/0, yes/no, on/off (case-insensitive)
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }

    /// Parse `prefix=uri` pairs from a comma-separated string.
    ///
    /// Empty entries are skipped. The URI may itself contain `=`.
    fn parse_namespaces(s: &str) -> Result<BTreeMap<String, String>> {
        let mut namespaces = BTreeMap::new();
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (prefix, uri) = part.split_once('=').ok_or_else(|| Error::Validation {
                field: NAMESPACES_ENV.into(),
                message: format!("expected prefix=uri, got '{part}'"),
            })?;
            namespaces.insert(prefix.trim().to_string(), uri.trim().to_string());
        }
        Ok(namespaces)
    }
}
