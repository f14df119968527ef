//! # serde_hstore
//!
//! A Serde-compatible codec for the PostgreSQL `hstore` text format.
//!
//! ## What is hstore?
//!
//! `hstore` is a PostgreSQL column type holding a flat set of text keys
//! mapped to text or `NULL` values. Its text form looks like this:
//!
//! ```text
//! "name"=>"Alice","nickname"=>NULL
//! ```
//!
//! ## Key Features
//!
//! - **Both directions**: write maps, structs and pair lists as hstore; read
//!   hstore back into maps, structs or pair lists
//! - **Coercion hooks**: non-text keys and values are turned into text by
//!   caller-supplied functions instead of guessed conversions
//! - **Streaming writer**: pairs go to the sink as they are produced
//! - **Precise errors**: parse errors carry the byte offset of the fault
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_hstore::{from_str, to_string};
//! use std::collections::BTreeMap;
//!
//! let mut attrs = BTreeMap::new();
//! attrs.insert("color", Some("red"));
//! attrs.insert("size", None);
//!
//! let text = to_string(&attrs).unwrap();
//! assert_eq!(text, r#""color"=>"red","size"=>NULL"#);
//!
//! let back: BTreeMap<String, Option<String>> = from_str(&text).unwrap();
//! assert_eq!(back["color"].as_deref(), Some("red"));
//! ```
//!
//! ### Non-text values
//!
//! Only text is written as is. Everything else needs a hook:
//!
//! ```rust
//! use serde_hstore::{coerce, to_string, to_string_with_options, Error, HstoreOptions};
//!
//! let err = to_string(&[("a", 1), ("b", 2)]).unwrap_err();
//! assert!(matches!(err, Error::NotText { .. }));
//!
//! let options = HstoreOptions::new().with_value_map(coerce::to_text);
//! let text = to_string_with_options(&[("a", 1), ("b", 2)], options).unwrap();
//! assert_eq!(text, r#""a"=>"1","b"=>"2""#);
//! ```
//!
//! ### Pairs
//!
//! ```rust
//! use serde_hstore::{parse, Pair};
//!
//! let pairs = parse(r#""k"=>"1", "k"=>"2""#).unwrap();
//! assert_eq!(pairs, vec![Pair::new("k", Some("1")), Pair::new("k", Some("2"))]);
//! ```
//!
//! See the [`format`] module for the exact grammar.

pub mod coerce;
pub mod de;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod value;
pub mod write;

pub use de::Deserializer;
pub use error::{Error, Result};
pub use map::HstoreMap;
pub use options::{Coercion, Encoding, HstoreOptions};
pub use ser::{Serializer, ValueSerializer};
pub use value::{Pair, Value};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::io;
use write::IoWrite;

/// Serialize any key/value shaped `T: Serialize` to an hstore string.
///
/// # Examples
///
/// ```rust
/// use serde_hstore::to_string;
///
/// assert_eq!(to_string(&vec![("a", "1")]).unwrap(), r#""a"=>"1""#);
/// ```
///
/// # Errors
///
/// Returns an error if `value` is not a map, struct or sequence of pairs, or if
/// a key or value is not text.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, HstoreOptions::default())
}

/// Serialize any key/value shaped `T: Serialize` to an hstore string with custom options.
///
/// The encoding in `options` does not apply; a `String` is always UTF-8.
///
/// # Examples
///
/// ```rust
/// use serde_hstore::{to_string_with_options, HstoreOptions};
///
/// let options = HstoreOptions::new().with_key_map(|key| Ok(format!("k{}", key)));
/// let hstore = to_string_with_options(&vec![(1, "one")], options).unwrap();
/// assert_eq!(hstore, r#""k1"=>"one""#);
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails, including errors returned by the hooks.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: HstoreOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let mut serializer = Serializer::new(String::with_capacity(128), options);
    value.serialize(&mut serializer)?;
    Ok(serializer.into_inner())
}

/// Serialize any key/value shaped `T: Serialize` to UTF-8 hstore bytes.
///
/// # Errors
///
/// Returns an error if serialization fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_vec<T>(value: &T) -> Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    to_vec_with_options(value, HstoreOptions::default())
}

/// Serialize to hstore bytes in the encoding selected by `options`.
///
/// # Examples
///
/// ```rust
/// use serde_hstore::{to_vec_with_options, Encoding, HstoreOptions};
///
/// let options = HstoreOptions::new().with_encoding(Encoding::Utf32Le);
/// let bytes = to_vec_with_options(&[("surname", "\u{d64d}")], options).unwrap();
/// assert_eq!(&bytes[bytes.len() - 8..], &[0x4d, 0xd6, 0, 0, b'"', 0, 0, 0]);
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_vec_with_options<T>(value: &T, options: HstoreOptions) -> Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    let sink = IoWrite::new(Vec::with_capacity(128), options.encoding);
    let mut serializer = Serializer::new(sink, options);
    value.serialize(&mut serializer)?;
    Ok(serializer.into_inner().into_inner())
}

/// Serialize any key/value shaped `T: Serialize` to a writer as UTF-8 hstore.
///
/// # Examples
///
/// ```rust
/// use serde_hstore::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &[("a", "1")]).unwrap();
/// assert_eq!(buffer, br#""a"=>"1""#);
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails. Pairs
/// written before the failure stay in the writer.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, HstoreOptions::default())
}

/// Serialize to a writer with custom options.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(writer: W, value: &T, options: HstoreOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let sink = IoWrite::new(writer, options.encoding);
    let mut serializer = Serializer::new(sink, options);
    value.serialize(&mut serializer)?;
    serializer.into_inner().flush()
}

/// Convert any `T: Serialize` to a [`Value`], the form coercion hooks receive.
///
/// # Examples
///
/// ```rust
/// use serde_hstore::{to_value, Value};
///
/// assert_eq!(to_value(&Some(3u8)).unwrap(), Value::Unsigned(3));
/// ```
///
/// # Errors
///
/// Returns an error if `T`'s `Serialize` implementation fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Parse hstore text into its pairs, in order, keeping duplicates.
///
/// # Examples
///
/// ```rust
/// use serde_hstore::{parse, Pair};
///
/// assert_eq!(parse(r#""a"=>"1""#).unwrap(), vec![Pair::new("a", Some("1"))]);
/// assert!(parse("").unwrap().is_empty());
/// ```
///
/// # Errors
///
/// Returns [`Error::Syntax`] with the byte offset of the first malformed token.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(s: &str) -> Result<Vec<Pair>> {
    Deserializer::from_str(s).parse_pairs()
}

/// Deserialize an instance of type `T` from a string of hstore text.
///
/// # Examples
///
/// ```rust
/// use serde_hstore::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str(r#""x"=>"1", "y"=>"2""#).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid hstore or cannot become `T`.
/// Error messages include the byte offset of the problem.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<'a, T>(s: &'a str) -> Result<T>
where
    T: Deserialize<'a>,
{
    let mut deserializer = Deserializer::from_str(s);
    let value = T::deserialize(&mut deserializer)?;
    deserializer.end()?;
    Ok(value)
}

/// Deserialize an instance of type `T` from UTF-8 hstore bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, not valid hstore,
/// or cannot become `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<'a, T>(v: &'a [u8]) -> Result<T>
where
    T: Deserialize<'a>,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::encoding(&e.to_string()))?;
    from_str(s)
}

/// Deserialize an instance of type `T` from hstore bytes in the given encoding.
///
/// # Examples
///
/// ```rust
/// use serde_hstore::{from_slice_with_encoding, Encoding, HstoreMap};
///
/// let bytes: Vec<u8> = r#""a"=>NULL"#.encode_utf16().flat_map(u16::to_be_bytes).collect();
/// let map: HstoreMap = from_slice_with_encoding(&bytes, Encoding::Utf16Be).unwrap();
/// assert_eq!(map.get("a"), Some(&None));
/// ```
///
/// # Errors
///
/// Returns an error if the bytes cannot be decoded, are not valid hstore, or cannot
/// become `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice_with_encoding<T>(v: &[u8], encoding: Encoding) -> Result<T>
where
    T: DeserializeOwned,
{
    let s = encoding.decode(v)?;
    from_str(&s)
}

/// Deserialize an instance of type `T` from an I/O stream of UTF-8 hstore.
///
/// # Errors
///
/// Returns an error if reading fails, the input is not valid hstore,
/// or cannot become `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    from_reader_with_encoding(reader, Encoding::Utf8)
}

/// Deserialize an instance of type `T` from an I/O stream in the given encoding.
///
/// # Errors
///
/// Returns an error if reading or decoding fails, the input is not valid hstore,
/// or cannot become `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader_with_encoding<R, T>(mut reader: R, encoding: Encoding) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    from_slice_with_encoding(&bytes, encoding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use std::io::Cursor;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Profile {
        name: String,
        city: Option<String>,
    }

    #[test]
    fn test_struct_round_trip() {
        let profile = Profile {
            name: "Alice".to_string(),
            city: None,
        };
        let hstore = to_string(&profile).unwrap();
        assert_eq!(hstore, r#""name"=>"Alice","city"=>NULL"#);
        let back: Profile = from_str(&hstore).unwrap();
        assert_eq!(profile, back);
    }

    #[test]
    fn test_writer_matches_string() {
        let pairs = vec![("key", "value"), ("k", "v")];
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &pairs).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), to_string(&pairs).unwrap());
    }

    #[test]
    fn test_to_vec_utf16_round_trip() {
        let options = HstoreOptions::new().with_encoding(Encoding::Utf16Le);
        let bytes = to_vec_with_options(&[("\u{d64d}", "x\"y")], options).unwrap();
        let pairs: Vec<Pair> = from_slice_with_encoding(&bytes, Encoding::Utf16Le).unwrap();
        assert_eq!(pairs, vec![Pair::new("\u{d64d}", Some("x\"y"))]);
    }

    #[test]
    fn test_from_reader() {
        let cursor = Cursor::new(br#""a"=>"1""#.to_vec());
        let map: HstoreMap = from_reader(cursor).unwrap();
        assert_eq!(map.get_str("a"), Some("1"));
    }

    #[test]
    fn test_from_slice_rejects_invalid_utf8() {
        let result: Result<HstoreMap> = from_slice(&[b'"', 0xff, b'"']);
        assert!(matches!(result, Err(Error::Encoding(_))));
    }

    #[test]
    fn test_from_str_borrows() {
        let input = String::from(r#""a"=>"1""#);
        let map: std::collections::BTreeMap<&str, &str> = from_str(&input).unwrap();
        assert_eq!(map["a"], "1");
    }

    #[test]
    fn test_to_value_struct() {
        let profile = Profile {
            name: "Bob".to_string(),
            city: Some("Seoul".to_string()),
        };
        let value = to_value(&profile).unwrap();
        assert_eq!(value.to_string(), r#"{"name": "Bob", "city": "Seoul"}"#);
    }
}
