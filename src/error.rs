//! Error types for hstore serialization and deserialization.
//!
//! ## Error Categories
//!
//! - **Configuration Errors**: the source is not shaped like a mapping, or an
//!   encoding label is unknown
//! - **Not Text**: a key or value is not text and no coercion hook was given
//! - **Syntax Errors**: malformed hstore text, with the byte offset of the fault
//! - **Type Mismatches**: a decoded value does not fit the requested Rust type
//! - **Encoding/I/O Errors**: transcoding or sink failures
//!
//! Errors returned by a caller's coercion hook are passed back unchanged.
//!
//! ## Examples
//!
//! ```rust
//! use serde_hstore::{parse, Error};
//!
//! let err = parse(r#""a"=>"#).unwrap_err();
//! assert!(matches!(err, Error::Syntax { offset: 5, .. }));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur during hstore serialization/deserialization.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// The source or the options do not have a usable shape
    #[error("{0}")]
    Configuration(String),

    /// A key or value is not text and there is no hook to coerce it
    #[error("{what} is not a string")]
    NotText {
        /// Description of the offending item, e.g. `value 1 of key "a"`
        what: String,
        /// The key the offending item belongs to, when known
        key: Option<String>,
    },

    /// Malformed hstore text
    #[error("Syntax error at offset {offset}: {msg}")]
    Syntax { offset: usize, msg: String },

    /// Type mismatch during deserialization
    #[error("Type mismatch at offset {offset}: expected {expected}, found {found}")]
    TypeMismatch {
        offset: usize,
        expected: String,
        found: String,
    },

    /// Text could not be transcoded to or from the selected encoding
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Custom error
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a syntax error at the given byte offset.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_hstore::Error;
    ///
    /// let err = Error::syntax(7, "expected '=>'");
    /// assert!(err.to_string().contains("offset 7"));
    /// ```
    pub fn syntax(offset: usize, msg: &str) -> Self {
        Error::Syntax {
            offset,
            msg: msg.to_string(),
        }
    }

    /// Creates a type mismatch error when a decoded value cannot become the requested type.
    pub fn type_mismatch(offset: usize, expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            offset,
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates the error for a key that is not text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_hstore::Error;
    ///
    /// let err = Error::key_not_text("42");
    /// assert_eq!(err.to_string(), "key 42 is not a string");
    /// ```
    pub fn key_not_text(key: &str) -> Self {
        Error::NotText {
            what: format!("key {}", key),
            key: None,
        }
    }

    /// Creates the error for a value that is not text, naming the key it belongs to.
    pub fn value_not_text(value: &str, key: &str) -> Self {
        Error::NotText {
            what: format!("value {} of key {:?}", value, key),
            key: Some(key.to_string()),
        }
    }

    /// Creates a configuration error.
    pub fn configuration(msg: &str) -> Self {
        Error::Configuration(msg.to_string())
    }

    /// Creates a transcoding error.
    pub fn encoding(msg: &str) -> Self {
        Error::Encoding(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// Coercion hooks use this to report their own failures.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_hstore::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for sink or source failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns the byte offset into the input for decoding errors.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::Syntax { offset, .. } | Error::TypeMismatch { offset, .. } => Some(*offset),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
