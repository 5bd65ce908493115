//! Configuration schema definitions.
//!
//! This module defines the configuration structure for qpath: the namespace
//! prefixes to register, the default text encoder, and output preferences.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::render::{EncoderKind, SimpleNamespaceRegistry, TextDecoder, TextEncoder};

/// Complete configuration structure.
///
/// Every field is optional so that configurations from several sources can
/// be layered; see [`ConfigMerger`](crate::config::ConfigMerger).
///
/// # Examples
///
/// ```
/// use qpath::config::Config;
/// use qpath::render::EncoderKind;
///
/// let config: Config = serde_yaml::from_str(
///     "namespaces:\n  ex: http://example.com\nencoder: url\n",
/// ).unwrap();
/// assert_eq!(config.encoder, Some(EncoderKind::Url));
/// assert_eq!(config.namespaces.unwrap()["ex"], "http://example.com");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Additional namespace prefixes, keyed by prefix.
    #[serde(default)]
    pub namespaces: Option<BTreeMap<String, String>>,

    /// Encoder applied to local names when rendering and parsing.
    pub encoder: Option<EncoderKind>,

    /// Whether the delimiter is passed through the encoder too.
    pub encode_delimiter: Option<bool>,

    /// Output format for CLI results.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// The default registry extended with the configured prefixes.
    ///
    /// # Examples
    ///
    /// ```
    /// use qpath::config::Config;
    /// use qpath::render::NamespaceRegistry;
    ///
    /// let mut config = Config::default();
    /// config.namespaces = Some([("ex".to_string(), "http://example.com".to_string())].into());
    ///
    /// let registry = config.namespace_registry();
    /// assert_eq!(registry.prefix_for("http://example.com").as_deref(), Some("ex"));
    /// assert!(registry.namespace_for("jcr").is_some());
    /// ```
    #[must_use]
    pub fn namespace_registry(&self) -> SimpleNamespaceRegistry {
        let mut registry = SimpleNamespaceRegistry::default();
        for (prefix, uri) in self.namespaces.iter().flatten() {
            registry.register(prefix.clone(), uri.clone());
        }
        registry
    }

    /// The configured encoder kind, or the default.
    #[must_use]
    pub fn encoder_kind(&self) -> EncoderKind {
        self.encoder.unwrap_or_default()
    }

    /// The configured text encoder.
    #[must_use]
    pub fn text_encoder(&self) -> Box<dyn TextEncoder + Send + Sync> {
        self.encoder_kind().encoder()
    }

    /// The decoder matching [`Config::text_encoder`].
    #[must_use]
    pub fn text_decoder(&self) -> Box<dyn TextDecoder + Send + Sync> {
        self.encoder_kind().decoder()
    }

    /// Whether the delimiter should be encoded (default: no).
    #[must_use]
    pub fn encodes_delimiter(&self) -> bool {
        self.encode_delimiter.unwrap_or(false)
    }

    /// The configured output format, or text.
    #[must_use]
    pub fn output_format_or_default(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }
}

/// Output format for CLI results.
///
/// # Examples
///
/// ```
/// use qpath::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, one value per line.
    #[default]
    Text,
    /// JSON output format.
    Json,
}

impl OutputFormat {
    /// Parse a format name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error message for unknown names.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("invalid output format: {s}")),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}
