//! Configuration validation.
//!
//! Ensures that configured namespace prefixes and URIs can be used to both
//! render and parse paths.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::collections::{BTreeMap, HashMap};

/// Characters that would make a prefix ambiguous in prefixed names.
const FORBIDDEN_PREFIX_CHARS: &[char] = &[':', '/', '{', '}', '[', ']'];

/// Validates configuration.
///
/// # Examples
///
/// ```
/// use qpath::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref namespaces) = config.namespaces {
            Self::validate_namespaces(namespaces)?;
        }
        Ok(())
    }

    /// Validate the namespace map.
    ///
    /// Each prefix must be a non-empty token without delimiter, brace,
    /// bracket or colon characters; each URI must be non-empty and brace-free;
    /// no URI may be bound to two prefixes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] on the first invalid entry.
    pub fn validate_namespaces(namespaces: &BTreeMap<String, String>) -> Result<()> {
        let mut seen: HashMap<&str, &str> = HashMap::new();
        for (prefix, uri) in namespaces {
            let field = format!("namespaces.{prefix}");
            Self::validate_prefix(&field, prefix)?;
            Self::validate_uri(&field, uri)?;
            if let Some(other) = seen.insert(uri.as_str(), prefix.as_str()) {
                return Err(Error::Validation {
                    field,
                    message: format!("namespace '{uri}' is already bound to prefix '{other}'"),
                });
            }
        }
        Ok(())
    }

    fn validate_prefix(field: &str, prefix: &str) -> Result<()> {
        if prefix.trim().is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "prefix cannot be empty or only whitespace".into(),
            });
        }
        if let Some(c) = prefix
            .chars()
            .find(|c| FORBIDDEN_PREFIX_CHARS.contains(c) || c.is_whitespace() || *c == '\0')
        {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("prefix cannot contain {c:?}"),
            });
        }
        if prefix.len() > 255 {
            return Err(Error::Validation {
                field: field.into(),
                message: "prefix cannot exceed 255 characters".into(),
            });
        }
        Ok(())
    }

    fn validate_uri(field: &str, uri: &str) -> Result<()> {
        if uri.trim().is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "namespace URI cannot be empty; the empty namespace needs no prefix".into(),
            });
        }
        if uri.contains(['{', '}', '\0']) {
            return Err(Error::Validation {
                field: field.into(),
                message: "namespace URI cannot contain braces or null bytes".into(),
            });
        }
        Ok(())
    }
}
