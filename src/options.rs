//! Configuration options for hstore serialization.
//!
//! This module provides types to customize how a source becomes hstore text:
//!
//! - [`HstoreOptions`]: Main configuration struct (coercion hooks, byte encoding)
//! - [`Encoding`]: The text encoding used by byte-oriented sinks and sources
//! - [`Coercion`]: The function type of a key or value coercion hook
//!
//! ## Examples
//!
//! ```rust
//! use serde_hstore::{coerce, to_string_with_options, HstoreOptions};
//!
//! let options = HstoreOptions::new().with_value_map(coerce::to_text);
//! let hstore = to_string_with_options(&[("a", 1), ("b", 2)], options).unwrap();
//! assert_eq!(hstore, r#""a"=>"1","b"=>"2""#);
//! ```

use crate::{Error, Result, Value};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// A caller-supplied hook that turns a non-text key or value into text.
///
/// Errors returned by the hook reach the caller of the encoder unchanged.
pub type Coercion = Arc<dyn Fn(&Value) -> Result<String> + Send + Sync>;

/// Text encoding for byte-oriented output and input.
///
/// Native text output ([`crate::to_string`]) is always UTF-8 since it is a Rust `String`.
/// No byte-order mark is ever written or expected.
///
/// # Examples
///
/// ```rust
/// use serde_hstore::Encoding;
///
/// assert_eq!("utf-8".parse::<Encoding>().unwrap(), Encoding::Utf8);
/// assert_eq!("UTF-32".parse::<Encoding>().unwrap(), Encoding::Utf32Le);
/// assert!("latin-9".parse::<Encoding>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    Utf8,
    Utf16Le,
    Utf16Be,
    Utf32Le,
    Utf32Be,
}

impl Encoding {
    /// Returns the canonical label of this encoding.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Utf16Le => "utf-16le",
            Encoding::Utf16Be => "utf-16be",
            Encoding::Utf32Le => "utf-32le",
            Encoding::Utf32Be => "utf-32be",
        }
    }

    /// Appends `s` to `out` in this encoding.
    pub fn encode_into(&self, s: &str, out: &mut Vec<u8>) {
        match self {
            Encoding::Utf8 => out.extend_from_slice(s.as_bytes()),
            Encoding::Utf16Le => {
                for unit in s.encode_utf16() {
                    out.extend_from_slice(&unit.to_le_bytes());
                }
            }
            Encoding::Utf16Be => {
                for unit in s.encode_utf16() {
                    out.extend_from_slice(&unit.to_be_bytes());
                }
            }
            Encoding::Utf32Le => {
                for ch in s.chars() {
                    out.extend_from_slice(&u32::from(ch).to_le_bytes());
                }
            }
            Encoding::Utf32Be => {
                for ch in s.chars() {
                    out.extend_from_slice(&u32::from(ch).to_be_bytes());
                }
            }
        }
    }

    /// Decodes `bytes` from this encoding into a `String`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encoding`] if the bytes are not valid in this encoding.
    pub fn decode(&self, bytes: &[u8]) -> Result<String> {
        match self {
            Encoding::Utf8 => std::str::from_utf8(bytes)
                .map(str::to_owned)
                .map_err(|e| Error::encoding(&e.to_string())),
            Encoding::Utf16Le | Encoding::Utf16Be => {
                if bytes.len() % 2 != 0 {
                    return Err(Error::encoding("odd number of bytes in UTF-16 input"));
                }
                let big_endian = *self == Encoding::Utf16Be;
                let units = bytes.chunks_exact(2).map(|pair| {
                    let pair = [pair[0], pair[1]];
                    if big_endian {
                        u16::from_be_bytes(pair)
                    } else {
                        u16::from_le_bytes(pair)
                    }
                });
                char::decode_utf16(units)
                    .collect::<std::result::Result<String, _>>()
                    .map_err(|e| Error::encoding(&e.to_string()))
            }
            Encoding::Utf32Le | Encoding::Utf32Be => {
                if bytes.len() % 4 != 0 {
                    return Err(Error::encoding(
                        "byte length of UTF-32 input is not a multiple of 4",
                    ));
                }
                let big_endian = *self == Encoding::Utf32Be;
                bytes
                    .chunks_exact(4)
                    .map(|quad| {
                        let quad = [quad[0], quad[1], quad[2], quad[3]];
                        let code = if big_endian {
                            u32::from_be_bytes(quad)
                        } else {
                            u32::from_le_bytes(quad)
                        };
                        char::from_u32(code).ok_or_else(|| {
                            Error::encoding(&format!("invalid code point U+{:X}", code))
                        })
                    })
                    .collect()
            }
        }
    }
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(label: &str) -> Result<Self> {
        match label.to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Encoding::Utf8),
            "utf-16" | "utf16" | "utf-16le" | "utf16le" => Ok(Encoding::Utf16Le),
            "utf-16be" | "utf16be" => Ok(Encoding::Utf16Be),
            "utf-32" | "utf32" | "utf-32le" | "utf32le" => Ok(Encoding::Utf32Le),
            "utf-32be" | "utf32be" => Ok(Encoding::Utf32Be),
            _ => Err(Error::configuration(&format!(
                "unknown encoding: {}",
                label
            ))),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Configuration options for hstore serialization.
///
/// Without hooks only text keys and values (and null values) are accepted.
///
/// # Examples
///
/// ```rust
/// use serde_hstore::{coerce, Encoding, HstoreOptions};
///
/// let options = HstoreOptions::new()
///     .with_key_map(coerce::to_text)
///     .with_value_map(coerce::to_text)
///     .with_encoding(Encoding::Utf16Le);
/// assert!(options.key_map.is_some());
/// ```
#[derive(Clone, Default)]
pub struct HstoreOptions {
    pub key_map: Option<Coercion>,
    pub value_map: Option<Coercion>,
    pub encoding: Encoding,
}

impl HstoreOptions {
    /// Creates default options: no coercion hooks, UTF-8.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_hstore::{Encoding, HstoreOptions};
    ///
    /// let options = HstoreOptions::new();
    /// assert!(options.value_map.is_none());
    /// assert_eq!(options.encoding, Encoding::Utf8);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the hook that converts non-text keys to text.
    #[must_use]
    pub fn with_key_map<F>(mut self, key_map: F) -> Self
    where
        F: Fn(&Value) -> Result<String> + Send + Sync + 'static,
    {
        self.key_map = Some(Arc::new(key_map));
        self
    }

    /// Sets the hook that converts non-text values to text.
    ///
    /// Null values never reach the hook; they are written as `NULL`.
    #[must_use]
    pub fn with_value_map<F>(mut self, value_map: F) -> Self
    where
        F: Fn(&Value) -> Result<String> + Send + Sync + 'static,
    {
        self.value_map = Some(Arc::new(value_map));
        self
    }

    /// Sets the encoding used by byte-oriented sinks.
    #[must_use]
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }
}

impl fmt::Debug for HstoreOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HstoreOptions")
            .field("key_map", &self.key_map.is_some())
            .field("value_map", &self.value_map.is_some())
            .field("encoding", &self.encoding)
            .finish()
    }
}
