//! Rendering paths as text.
//!
//! Rendering consults two external collaborators: a [`NamespaceRegistry`]
//! that supplies prefixes for namespace URIs, and [`TextEncoder`]s that
//! escape segment text and the delimiter.
//!
//! # Collaborator policy
//!
//! - The root always renders as `/`. No registry or encoder is consulted, so
//!   any of them may be absent.
//! - A missing segment encoder falls back to [`Jsr283Encoder`]; text is never
//!   silently written unescaped.
//! - A missing delimiter encoder writes `/` verbatim.
//! - The prefixed form needs a prefix for every non-empty namespace. A
//!   missing registry, or a registry without the prefix, is an
//!   [`Error::Rendering`].
//! - The expanded form (`{uri}local`, used by `Display`) needs no registry
//!   and never fails.
//!
//! # Examples
//!
//! ```
//! use qpath::render::{Renderer, SimpleNamespaceRegistry};
//! use qpath::Path;
//!
//! let registry = SimpleNamespaceRegistry::default();
//! let path: Path = "/jcr:system/child[2]".parse().unwrap();
//!
//! let text = Renderer::prefixed(Some(&registry)).render(&path).unwrap();
//! assert_eq!(text, "/jcr:system/child[2]");
//!
//! assert!(Renderer::prefixed(None).render(&path).is_err());
//! assert_eq!(Renderer::prefixed(None).render(&Path::ROOT).unwrap(), "/");
//! ```

mod encoding;
mod registry;

pub use encoding::{EncoderKind, Jsr283Encoder, NoOpEncoder, TextDecoder, TextEncoder, UrlEncoder};
pub use registry::{NamespaceRegistry, SimpleNamespaceRegistry, JCR_URI, MIX_URI, NT_URI, XML_URI};

use crate::error::{Error, Result};
use crate::path::Path;
use crate::segment::Segment;

/// The segment delimiter.
pub const DELIMITER: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NameForm {
    Expanded,
    Prefixed,
}

/// Renders paths with optional collaborators.
#[derive(Clone, Copy)]
pub struct Renderer<'a> {
    form: NameForm,
    registry: Option<&'a dyn NamespaceRegistry>,
    encoder: Option<&'a dyn TextEncoder>,
    delimiter_encoder: Option<&'a dyn TextEncoder>,
}

impl<'a> Renderer<'a> {
    /// A renderer producing `{uri}local` names.
    #[must_use]
    pub fn expanded() -> Self {
        Self {
            form: NameForm::Expanded,
            registry: None,
            encoder: None,
            delimiter_encoder: None,
        }
    }

    /// A renderer producing `prefix:local` names from `registry`.
    #[must_use]
    pub fn prefixed(registry: Option<&'a dyn NamespaceRegistry>) -> Self {
        Self {
            form: NameForm::Prefixed,
            registry,
            ..Self::expanded()
        }
    }

    /// Escape segment text with `encoder` (default: [`Jsr283Encoder`]).
    #[must_use]
    pub fn with_encoder(mut self, encoder: Option<&'a dyn TextEncoder>) -> Self {
        self.encoder = encoder;
        self
    }

    /// Escape the delimiter with `encoder` (default: none).
    #[must_use]
    pub fn with_delimiter_encoder(mut self, encoder: Option<&'a dyn TextEncoder>) -> Self {
        self.delimiter_encoder = encoder;
        self
    }

    /// Render `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Rendering`] if the prefixed form needs a namespace
    /// prefix that cannot be found. The root never fails.
    pub fn render(&self, path: &Path) -> Result<String> {
        let Path::General(general) = path else {
            return Ok(DELIMITER.to_string());
        };

        let encoder: &dyn TextEncoder = self.encoder.unwrap_or(&Jsr283Encoder);
        let delimiter = self
            .delimiter_encoder
            .map_or_else(|| DELIMITER.to_string(), |e| e.encode(DELIMITER));

        let mut out = String::new();
        for (i, segment) in general.segments().iter().enumerate() {
            if i > 0 || general.is_absolute() {
                out.push_str(&delimiter);
            }
            out.push_str(&self.render_segment(path, segment, encoder)?);
        }
        Ok(out)
    }

    fn render_segment(
        &self,
        path: &Path,
        segment: &Segment,
        encoder: &dyn TextEncoder,
    ) -> Result<String> {
        match self.form {
            NameForm::Expanded => Ok(segment.expanded_string(encoder)),
            NameForm::Prefixed => segment
                .prefixed_string(self.registry, encoder)
                .ok_or_else(|| {
                    let uri = segment.name().namespace_uri();
                    let reason = if self.registry.is_some() {
                        format!("no prefix registered for namespace '{uri}'")
                    } else {
                        format!("no namespace registry supplied for namespace '{uri}'")
                    };
                    log::debug!("rendering {path} failed: {reason}");
                    Error::Rendering {
                        path: path.to_string(),
                        reason,
                    }
                }),
        }
    }
}

impl Default for Renderer<'_> {
    fn default() -> Self {
        Self::expanded()
    }
}

impl std::fmt::Debug for Renderer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("form", &self.form)
            .field("registry", &self.registry.is_some())
            .field("encoder", &self.encoder.is_some())
            .field("delimiter_encoder", &self.delimiter_encoder.is_some())
            .finish()
    }
}

impl Path {
    /// Render with prefixed names.
    ///
    /// Any collaborator may be `None`; see the module documentation for what
    /// each absence means.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Rendering`] if a non-root path needs a namespace prefix
    /// that cannot be found.
    ///
    /// # Examples
    ///
    /// ```
    /// use qpath::Path;
    ///
    /// assert_eq!(Path::ROOT.string_with(None, None, None).unwrap(), "/");
    /// ```
    pub fn string_with(
        &self,
        registry: Option<&dyn NamespaceRegistry>,
        encoder: Option<&dyn TextEncoder>,
        delimiter_encoder: Option<&dyn TextEncoder>,
    ) -> Result<String> {
        Renderer::prefixed(registry)
            .with_encoder(encoder)
            .with_delimiter_encoder(delimiter_encoder)
            .render(self)
    }

    /// Render with expanded `{uri}local` names. Never fails.
    #[must_use]
    pub fn expanded_string(&self, encoder: Option<&dyn TextEncoder>) -> String {
        let Path::General(general) = self else {
            return DELIMITER.to_string();
        };
        let encoder: &dyn TextEncoder = encoder.unwrap_or(&Jsr283Encoder);
        let body = general
            .segments()
            .iter()
            .map(|segment| segment.expanded_string(encoder))
            .collect::<Vec<_>>()
            .join(DELIMITER);
        if general.is_absolute() {
            format!("{DELIMITER}{body}")
        } else {
            body
        }
    }
}
