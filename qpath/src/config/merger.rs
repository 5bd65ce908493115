//! Configuration merging and precedence handling.
//!
//! Scalar fields are replaced by higher-precedence sources; namespace maps
//! are accumulated, with later sources winning per prefix.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use qpath::config::{Config, ConfigMerger, OutputFormat};
///
/// let low = Config { output_format: Some(OutputFormat::Text), ..Default::default() };
/// let high = Config { output_format: Some(OutputFormat::Json), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.output_format, Some(OutputFormat::Json));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge configuration sources into a final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Simple fields: source overwrites if Some
    /// - Namespaces: accumulated; the source wins for a prefix present in both
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.encoder.is_some() {
            target.encoder = source.encoder;
        }

        if source.encode_delimiter.is_some() {
            target.encode_delimiter = source.encode_delimiter;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if let Some(ref source_namespaces) = source.namespaces {
            match &mut target.namespaces {
                Some(target_namespaces) => {
                    target_namespaces.extend(source_namespaces.clone());
                }
                None => {
                    target.namespaces.clone_from(&source.namespaces);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::OutputFormat;
    use crate::render::EncoderKind;
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    fn namespaces(pairs: &[(&str, &str)]) -> Option<BTreeMap<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(p, u)| ((*p).to_string(), (*u).to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_merge_simple_fields() {
        let mut target = Config {
            encoder: Some(EncoderKind::Url),
            output_format: Some(OutputFormat::Json),
            ..Default::default()
        };
        let source = Config {
            encoder: Some(EncoderKind::None),
            ..Default::default()
        };
        ConfigMerger::merge_into(&mut target, &source);
        assert_eq!(target.encoder, Some(EncoderKind::None));
        assert_eq!(target.output_format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_merge_namespaces_accumulate() {
        let mut target = Config {
            namespaces: namespaces(&[("a", "urn:a"), ("b", "urn:b")]),
            ..Default::default()
        };
        let source = Config {
            namespaces: namespaces(&[("b", "urn:b2"), ("c", "urn:c")]),
            ..Default::default()
        };
        ConfigMerger::merge_into(&mut target, &source);
        assert_eq!(
            target.namespaces,
            namespaces(&[("a", "urn:a"), ("b", "urn:b2"), ("c", "urn:c")])
        );
    }

    #[test]
    fn test_merge_sources_in_order() {
        let sources = vec![
            ConfigSource {
                path: PathBuf::from("user"),
                precedence: 1,
                config: Config {
                    encoder: Some(EncoderKind::Url),
                    encode_delimiter: Some(true),
                    ..Default::default()
                },
            },
            ConfigSource {
                path: PathBuf::from("project"),
                precedence: 2,
                config: Config {
                    encoder: Some(EncoderKind::Jsr283),
                    ..Default::default()
                },
            },
        ];
        let merged = ConfigMerger::merge(sources);
        assert_eq!(merged.encoder, Some(EncoderKind::Jsr283));
        assert_eq!(merged.encode_delimiter, Some(true));
    }

    #[test]
    fn test_merge_empty() {
        assert_eq!(ConfigMerger::merge(Vec::new()), Config::default());
    }
}
