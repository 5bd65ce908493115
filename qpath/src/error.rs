//! Error types for the qpath library.
//!
//! This module provides the error hierarchy for every fallible path operation,
//! using `thiserror` for ergonomic error handling. All errors are local and
//! synchronous: an operation either returns a new value or fails without
//! touching any existing value.

use thiserror::Error;

/// Result type alias for operations that may fail with a qpath error.
///
/// # Examples
///
/// ```
/// use qpath::{Error, Result};
///
/// fn first_index() -> Result<usize> {
///     Ok(0)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the qpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A name or segment could not be constructed.
    #[error("malformed segment '{segment}': {reason}")]
    MalformedSegment {
        /// The offending segment text.
        segment: String,
        /// Why the segment was rejected.
        reason: String,
    },

    /// A segment index or subpath bound fell outside the path.
    #[error("index {index} out of range for path of size {size}")]
    IndexOutOfRange {
        /// The requested index or range bound.
        index: usize,
        /// The number of segments in the path.
        size: usize,
    },

    /// A path operation was given an argument it cannot work with.
    #[error("invalid path {path}: {reason}")]
    InvalidPath {
        /// The path involved, in expanded form.
        path: String,
        /// The reason the path is invalid.
        reason: String,
    },

    /// An attempt was made to mutate a read-only view.
    #[error("cannot modify immutable {target}")]
    ImmutableState {
        /// What the caller tried to modify.
        target: &'static str,
    },

    /// A path could not be rendered with the supplied collaborators.
    #[error("cannot render {path}: {reason}")]
    Rendering {
        /// The path being rendered, in expanded form.
        path: String,
        /// What was missing.
        reason: String,
    },

    /// Text could not be parsed into a path.
    #[error("cannot parse '{input}' as a path: {reason}")]
    Parse {
        /// The input text.
        input: String,
        /// The reason parsing failed.
        reason: String,
    },

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration file could not be deserialized.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if error reports an out-of-range segment access.
    ///
    /// # Examples
    ///
    /// ```
    /// use qpath::Error;
    ///
    /// let err = Error::IndexOutOfRange { index: 3, size: 1 };
    /// assert!(err.is_index_out_of_range());
    /// ```
    #[must_use]
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    /// Check if error reports an invalid path argument.
    #[must_use]
    pub fn is_invalid_path(&self) -> bool {
        matches!(self, Self::InvalidPath { .. })
    }

    /// Check if error reports an attempted mutation.
    #[must_use]
    pub fn is_immutable_state(&self) -> bool {
        matches!(self, Self::ImmutableState { .. })
    }

    /// Check if error reports a rendering failure.
    #[must_use]
    pub fn is_rendering(&self) -> bool {
        matches!(self, Self::Rendering { .. })
    }

    /// Check if error reports a malformed name or segment.
    #[must_use]
    pub fn is_malformed_segment(&self) -> bool {
        matches!(self, Self::MalformedSegment { .. })
    }

    pub(crate) fn invalid_path(path: impl ToString, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_segment_error() {
        let err = Error::MalformedSegment {
            segment: String::new(),
            reason: "local name must not be empty".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("malformed segment"));
        assert!(display.contains("must not be empty"));
        assert!(err.is_malformed_segment());
    }

    #[test]
    fn test_index_out_of_range_error() {
        let err = Error::IndexOutOfRange { index: 2, size: 0 };
        let display = format!("{err}");
        assert!(display.contains("index 2"));
        assert!(display.contains("size 0"));
        assert!(err.is_index_out_of_range());
        assert!(!err.is_invalid_path());
    }

    #[test]
    fn test_invalid_path_error() {
        let err = Error::invalid_path("/a", "cannot resolve an absolute path");
        let display = format!("{err}");
        assert!(display.contains("invalid path /a"));
        assert!(display.contains("absolute"));
        assert!(err.is_invalid_path());
    }

    #[test]
    fn test_immutable_state_error() {
        let err = Error::ImmutableState {
            target: "segment iterator",
        };
        assert_eq!(format!("{err}"), "cannot modify immutable segment iterator");
        assert!(err.is_immutable_state());
    }

    #[test]
    fn test_rendering_error() {
        let err = Error::Rendering {
            path: "/{http://example.com}a".to_string(),
            reason: "no namespace registry supplied".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("cannot render"));
        assert!(display.contains("registry"));
        assert!(err.is_rendering());
    }

    #[test]
    fn test_parse_error() {
        let err = Error::Parse {
            input: "a//b".to_string(),
            reason: "empty segment".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("'a//b'"));
        assert!(display.contains("empty segment"));
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "namespaces".to_string(),
            message: "prefix must not contain ':'".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("namespaces"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(format!("{err}").contains("I/O error"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<usize> {
            Err(Error::IndexOutOfRange { index: 0, size: 0 })
        }

        assert!(returns_result().is_err());
    }
}
