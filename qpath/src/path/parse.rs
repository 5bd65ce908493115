//! Parsing text into paths.
//!
//! This is a thin adapter over the path model. Accepted forms:
//!
//! - `/` is the root; a leading `/` makes a path absolute.
//! - Segments are separated by `/`. A `/` inside the braces of an expanded
//!   name does not split.
//! - `.` and `..` are the self and parent references.
//! - `name[n]` gives a same-name-sibling index.
//! - Names are `{uri}local`, `prefix:local` (prefix looked up in a
//!   [`NamespaceRegistry`]) or a bare `local` in the empty namespace.
//! - A single trailing `/` is ignored.

use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::error::{Error, Result};
use crate::name::QualifiedName;
use crate::path::Path;
use crate::render::{Jsr283Encoder, NamespaceRegistry, SimpleNamespaceRegistry, TextDecoder};
use crate::segment::{Segment, PARENT_NAME, SELF_NAME};

impl Path {
    /// Parse a path, resolving prefixes with `registry` and unescaping local
    /// names with `decoder`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for empty input, empty segments, unknown
    /// prefixes, an unterminated `{` or malformed indices.
    ///
    /// # Examples
    ///
    /// ```
    /// use qpath::render::{Jsr283Encoder, SimpleNamespaceRegistry};
    /// use qpath::Path;
    ///
    /// let registry = SimpleNamespaceRegistry::default();
    /// let path = Path::parse("/jcr:system/nt:unstructured[2]", &registry, &Jsr283Encoder).unwrap();
    /// assert_eq!(path.size(), 2);
    /// assert_eq!(path.segment(0).unwrap().name().local_name(), "system");
    /// assert_eq!(path.segment(1).unwrap().index(), Some(2));
    /// ```
    pub fn parse(
        text: &str,
        registry: &dyn NamespaceRegistry,
        decoder: &dyn TextDecoder,
    ) -> Result<Path> {
        Parser {
            input: text,
            registry,
            decoder,
        }
        .parse()
        .map_err(|reason| {
            log::debug!("cannot parse path '{text}': {reason}");
            Error::Parse {
                input: text.to_string(),
                reason,
            }
        })
    }
}

struct Parser<'a> {
    input: &'a str,
    registry: &'a dyn NamespaceRegistry,
    decoder: &'a dyn TextDecoder,
}

type ParseResult<T> = std::result::Result<T, String>;

impl Parser<'_> {
    fn parse(&self) -> ParseResult<Path> {
        if self.input.is_empty() {
            return Err("path is empty".to_string());
        }
        if self.input == "/" {
            return Ok(Path::Root);
        }

        let absolute = self.input.starts_with('/');
        let body = if absolute { &self.input[1..] } else { self.input };
        let body = body.strip_suffix('/').unwrap_or(body);

        let segments = split_segments(body)?
            .into_iter()
            .map(|text| self.parse_segment(text))
            .collect::<ParseResult<Vec<_>>>()?;
        Ok(Path::new(segments, absolute))
    }

    fn parse_segment(&self, text: &str) -> ParseResult<Segment> {
        if text.is_empty() {
            return Err("path contains an empty segment".to_string());
        }
        match text {
            SELF_NAME => return Ok(Segment::self_reference()),
            PARENT_NAME => return Ok(Segment::parent_reference()),
            _ => {}
        }

        let (name_text, index) = split_index(text)?;
        let name = self.parse_name(name_text)?;
        Segment::from_parts(name, index).map_err(|e| e.to_string())
    }

    fn parse_name(&self, text: &str) -> ParseResult<QualifiedName> {
        let (namespace_uri, local) = if let Some(rest) = text.strip_prefix('{') {
            let close = rest
                .find('}')
                .ok_or_else(|| format!("unterminated namespace in '{text}'"))?;
            (rest[..close].to_string(), &rest[close + 1..])
        } else if let Some((prefix, local)) = text.split_once(':') {
            let uri = self
                .registry
                .namespace_for(prefix)
                .ok_or_else(|| format!("unknown namespace prefix '{prefix}'"))?;
            (uri, local)
        } else {
            (String::new(), text)
        };

        QualifiedName::new(namespace_uri, self.decoder.decode(local)).map_err(|e| e.to_string())
    }
}

/// Split on `/`, ignoring delimiters inside a segment's leading `{...}`.
///
/// Only a `{` that starts a segment opens an expanded name, and the first `}`
/// after it closes it; braces anywhere else are ordinary characters.
fn split_segments(body: &str) -> ParseResult<Vec<&str>> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut in_namespace = false;

    for (i, c) in body.char_indices() {
        match c {
            '{' if i == start => in_namespace = true,
            '}' if in_namespace => in_namespace = false,
            '/' if !in_namespace => {
                segments.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if in_namespace {
        return Err(format!("unterminated namespace in '{}'", &body[start..]));
    }
    segments.push(&body[start..]);
    Ok(segments)
}

/// Split a trailing `[n]` index off a segment.
fn split_index(text: &str) -> ParseResult<(&str, Option<u32>)> {
    let Some(without_close) = text.strip_suffix(']') else {
        return Ok((text, None));
    };
    let open = without_close
        .rfind('[')
        .ok_or_else(|| format!("unmatched ']' in segment '{text}'"))?;
    let digits = &without_close[open + 1..];
    let index = digits
        .parse::<u32>()
        .map_err(|_| format!("invalid same-name-sibling index '{digits}'"))?;
    Ok((&without_close[..open], Some(index)))
}

impl FromStr for Path {
    type Err = Error;

    /// Parse with the default namespace registry and the JSR-283 decoder.
    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, &SimpleNamespaceRegistry::default(), &Jsr283Encoder)
    }
}

impl Serialize for Path {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Path {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
