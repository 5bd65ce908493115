//! Text encoders used to escape segment text.
//!
//! Encoders keep characters that have structural meaning in a path string
//! (`/`, `:`, `[`, `]`, ...) from leaking out of a segment's local name.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Escapes text for inclusion in a path string.
pub trait TextEncoder {
    /// Encode `text`.
    fn encode(&self, text: &str) -> String;
}

/// Reverses a [`TextEncoder`].
pub trait TextDecoder {
    /// Decode `text`.
    fn decode(&self, text: &str) -> String;
}

/// Passes text through unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOpEncoder;

impl TextEncoder for NoOpEncoder {
    fn encode(&self, text: &str) -> String {
        text.to_string()
    }
}

impl TextDecoder for NoOpEncoder {
    fn decode(&self, text: &str) -> String {
        text.to_string()
    }
}

// JSR-283 maps the characters that are illegal in names onto the private use
// area at U+F000 + the character's ASCII value.
const JSR283_MAPPINGS: [(char, char); 6] = [
    ('*', '\u{F02A}'),
    ('/', '\u{F02F}'),
    (':', '\u{F03A}'),
    ('[', '\u{F05B}'),
    (']', '\u{F05D}'),
    ('|', '\u{F07C}'),
];

/// The JSR-283 name encoder.
///
/// This is the default encoder whenever none is supplied for rendering.
///
/// # Examples
///
/// ```
/// use qpath::render::{Jsr283Encoder, TextDecoder, TextEncoder};
///
/// let encoded = Jsr283Encoder.encode("a:b[1]");
/// assert_eq!(encoded, "a\u{F03A}b\u{F05B}1\u{F05D}");
/// assert_eq!(Jsr283Encoder.decode(&encoded), "a:b[1]");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Jsr283Encoder;

impl TextEncoder for Jsr283Encoder {
    fn encode(&self, text: &str) -> String {
        text.chars()
            .map(|c| {
                JSR283_MAPPINGS
                    .iter()
                    .find(|(plain, _)| *plain == c)
                    .map_or(c, |(_, encoded)| *encoded)
            })
            .collect()
    }
}

impl TextDecoder for Jsr283Encoder {
    fn decode(&self, text: &str) -> String {
        text.chars()
            .map(|c| {
                JSR283_MAPPINGS
                    .iter()
                    .find(|(_, encoded)| *encoded == c)
                    .map_or(c, |(plain, _)| *plain)
            })
            .collect()
    }
}

/// Percent-encodes UTF-8 bytes outside the URL unreserved set.
///
/// Decoding is lenient: a `%` that is not followed by two hex digits is kept
/// as-is.
///
/// # Examples
///
/// ```
/// use qpath::render::{TextDecoder, TextEncoder, UrlEncoder};
///
/// assert_eq!(UrlEncoder.encode("a b/c"), "a%20b%2Fc");
/// assert_eq!(UrlEncoder.decode("a%20b%2Fc"), "a b/c");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UrlEncoder;

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || matches!(
            byte,
            b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')'
        )
}

fn hex_value(byte: u8) -> Option<u8> {
    char::from(byte)
        .to_digit(16)
        .and_then(|digit| u8::try_from(digit).ok())
}

impl TextEncoder for UrlEncoder {
    fn encode(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for byte in text.bytes() {
            if is_unreserved(byte) {
                out.push(char::from(byte));
            } else {
                out.push_str(&format!("%{byte:02X}"));
            }
        }
        out
    }
}

impl TextDecoder for UrlEncoder {
    fn decode(&self, text: &str) -> String {
        let bytes = text.as_bytes();
        let mut out = Vec::with_capacity(bytes.len());
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] == b'%' && i + 2 < bytes.len() {
                if let (Some(high), Some(low)) =
                    (hex_value(bytes[i + 1]), hex_value(bytes[i + 2]))
                {
                    out.push((high << 4) | low);
                    i += 3;
                    continue;
                }
            }
            out.push(bytes[i]);
            i += 1;
        }
        String::from_utf8_lossy(&out).into_owned()
    }
}

/// The encoders selectable from configuration and the CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncoderKind {
    /// [`Jsr283Encoder`].
    #[default]
    Jsr283,
    /// [`UrlEncoder`].
    Url,
    /// [`NoOpEncoder`].
    None,
}

impl EncoderKind {
    /// Parses an encoder kind (case-insensitive `jsr283`, `url` or `none`).
    ///
    /// # Errors
    ///
    /// Returns an error message if the name is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use qpath::render::EncoderKind;
    ///
    /// assert_eq!(EncoderKind::parse("URL").unwrap(), EncoderKind::Url);
    /// assert!(EncoderKind::parse("base64").is_err());
    /// ```
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        match s.to_lowercase().as_str() {
            "jsr283" => Ok(Self::Jsr283),
            "url" => Ok(Self::Url),
            "none" => Ok(Self::None),
            _ => Err(format!("invalid encoder: {s}")),
        }
    }

    /// An encoder of this kind.
    #[must_use]
    pub fn encoder(self) -> Box<dyn TextEncoder + Send + Sync> {
        match self {
            Self::Jsr283 => Box::new(Jsr283Encoder),
            Self::Url => Box::new(UrlEncoder),
            Self::None => Box::new(NoOpEncoder),
        }
    }

    /// The matching decoder.
    #[must_use]
    pub fn decoder(self) -> Box<dyn TextDecoder + Send + Sync> {
        match self {
            Self::Jsr283 => Box::new(Jsr283Encoder),
            Self::Url => Box::new(UrlEncoder),
            Self::None => Box::new(NoOpEncoder),
        }
    }
}

impl fmt::Display for EncoderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jsr283 => write!(f, "jsr283"),
            Self::Url => write!(f, "url"),
            Self::None => write!(f, "none"),
        }
    }
}
