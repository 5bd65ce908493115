//! Configuration system for qpath.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project `qpath.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of namespace bindings
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`QPATH_*`)
//! 3. Project config (nearest `qpath.yaml` at or above the working directory)
//! 4. User config (`~/.qpath/config.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use qpath::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//! ```
//!
//! Using the configured collaborators:
//!
//! ```
//! use qpath::config::{Config, ConfigBuilder};
//! use qpath::Path;
//!
//! let custom = Config {
//!     namespaces: Some([("ex".to_string(), "http://example.com".to_string())].into()),
//!     ..Default::default()
//! };
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! let registry = config.namespace_registry();
//! let decoder = config.text_decoder();
//! let path = Path::parse("/ex:a/ex:b", &registry, &*decoder).unwrap();
//! let encoder = config.text_encoder();
//! assert_eq!(
//!     path.string_with(Some(&registry), Some(&*encoder), None).unwrap(),
//!     "/ex:a/ex:b"
//! );
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat};
pub use validator::ConfigValidator;
