//! hstore deserialization.
//!
//! This module provides the [`Deserializer`] that parses hstore text into
//! Rust data structures.
//!
//! ## Overview
//!
//! - **Single-pass parsing**: pairs are read left to right, one at a time,
//!   as the target type asks for them
//! - **Borrowing**: keys and values without escapes are handed out as `&str`
//!   slices of the input
//! - **Error reporting**: every error carries the byte offset of the fault
//!
//! Map-like targets (maps and structs) see the pairs as entries; sequence
//! targets see each pair as a `(key, value)` tuple. A value position holding
//! `NULL` deserializes as `None`; numeric and boolean targets parse the text.
//!
//! ## Usage
//!
//! ```rust
//! use serde_hstore::from_str;
//! use std::collections::HashMap;
//!
//! let map: HashMap<String, Option<String>> = from_str(r#""a"=>"1", "b"=>NULL"#).unwrap();
//! assert_eq!(map["a"].as_deref(), Some("1"));
//! assert_eq!(map["b"], None);
//!
//! let pairs: Vec<(String, Option<String>)> = from_str(r#""a"=>"1""#).unwrap();
//! assert_eq!(pairs, vec![("a".to_string(), Some("1".to_string()))]);
//! ```

use crate::{Error, Pair, Result};
use serde::de::{self, Deserializer as _, IntoDeserializer};
use serde::forward_to_deserialize_any;
use std::borrow::Cow;
use tracing::{debug, trace};

/// One pair as it appears in the input, with the offsets of its parts.
struct RawPair<'de> {
    key: Cow<'de, str>,
    key_offset: usize,
    value: Option<Cow<'de, str>>,
    value_offset: usize,
}

/// The hstore deserializer.
///
/// Created via [`Deserializer::from_str`].
pub struct Deserializer<'de> {
    input: &'de str,
    position: usize,
    pairs_read: usize,
}

impl<'de> Deserializer<'de> {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &'de str) -> Self {
        Deserializer {
            input,
            position: 0,
            pairs_read: 0,
        }
    }

    /// Byte offset of the next unread input.
    pub fn offset(&self) -> usize {
        self.position
    }

    /// Reads every remaining pair, in input order.
    pub fn parse_pairs(&mut self) -> Result<Vec<Pair>> {
        let mut pairs = Vec::new();
        while let Some(raw) = self.next_pair()? {
            pairs.push(Pair {
                key: raw.key.into_owned(),
                value: raw.value.map(Cow::into_owned),
            });
        }
        debug!(pairs = pairs.len(), bytes = self.input.len(), "parsed hstore");
        Ok(pairs)
    }

    /// Checks that no input is left after the target type finished reading.
    pub fn end(&mut self) -> Result<()> {
        let offset = self.position;
        match self.next_pair()? {
            None => Ok(()),
            Some(_) => Err(Error::syntax(offset, "unexpected trailing pair")),
        }
    }

    fn peek_byte(&self) -> Option<u8> {
        self.input.as_bytes().get(self.position).copied()
    }

    fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek_byte() {
            if b.is_ascii_whitespace() {
                self.position += 1;
            } else {
                break;
            }
        }
    }

    fn next_pair(&mut self) -> Result<Option<RawPair<'de>>> {
        self.skip_whitespace();
        if self.at_end() {
            return Ok(None);
        }

        if self.pairs_read > 0 {
            let comma = self.position;
            if self.peek_byte() != Some(b',') {
                return Err(Error::syntax(comma, "expected ',' between pairs"));
            }
            self.position += 1;
            self.skip_whitespace();
            if self.at_end() {
                return Err(Error::syntax(comma, "trailing comma"));
            }
        }

        let key_offset = self.position;
        if self.peek_byte() != Some(b'"') {
            return Err(Error::syntax(key_offset, "expected '\"' to begin a key"));
        }
        let key = self.parse_quoted()?;

        self.skip_whitespace();
        if !self.input[self.position..].starts_with("=>") {
            return Err(Error::syntax(self.position, "expected '=>'"));
        }
        self.position += 2;

        self.skip_whitespace();
        let value_offset = self.position;
        let value = self.parse_value()?;

        self.pairs_read += 1;
        trace!(key = %key, null = value.is_none(), "read hstore pair");
        Ok(Some(RawPair {
            key,
            key_offset,
            value,
            value_offset,
        }))
    }

    /// Parses a quoted token starting at the current `"`.
    fn parse_quoted(&mut self) -> Result<Cow<'de, str>> {
        let open = self.position;
        self.position += 1; // consume opening quote

        let input = self.input;
        let bytes = input.as_bytes();
        let mut owned: Option<String> = None;
        let mut segment_start = self.position;

        while let Some(&b) = bytes.get(self.position) {
            match b {
                b'"' => {
                    let tail = &input[segment_start..self.position];
                    self.position += 1; // consume closing quote
                    return Ok(match owned {
                        Some(mut text) => {
                            text.push_str(tail);
                            Cow::Owned(text)
                        }
                        None => Cow::Borrowed(tail),
                    });
                }
                b'\\' => {
                    let escaped = match bytes.get(self.position + 1) {
                        Some(b'"') => '"',
                        Some(b'\\') => '\\',
                        Some(_) => {
                            return Err(Error::syntax(
                                self.position,
                                "invalid escape; only \\\" and \\\\ are allowed",
                            ))
                        }
                        None => {
                            return Err(Error::syntax(self.position, "dangling backslash"))
                        }
                    };
                    let text = owned.get_or_insert_with(String::new);
                    text.push_str(&input[segment_start..self.position]);
                    text.push(escaped);
                    self.position += 2;
                    segment_start = self.position;
                }
                _ => self.position += 1,
            }
        }

        Err(Error::syntax(open, "unterminated quoted string"))
    }

    fn parse_value(&mut self) -> Result<Option<Cow<'de, str>>> {
        match self.peek_byte() {
            Some(b'"') => self.parse_quoted().map(Some),
            None => Err(Error::syntax(self.position, "expected a value after '=>'")),
            Some(_) => {
                let start = self.position;
                if self.input[start..].starts_with("NULL") {
                    let after = self.input.as_bytes().get(start + 4).copied();
                    if after.map_or(true, |b| b == b',' || b.is_ascii_whitespace()) {
                        self.position += 4;
                        return Ok(None);
                    }
                }
                Err(Error::syntax(
                    start,
                    "unexpected bare token; expected a quoted value or NULL",
                ))
            }
        }
    }
}

impl<'de, 'a> de::Deserializer<'de> for &'a mut Deserializer<'de> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_map(visitor)
    }

    fn deserialize_map<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_map(PairMapAccess {
            de: self,
            pending: None,
        })
    }

    fn deserialize_struct<V>(
        self,
        _name: &'static str,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_map(visitor)
    }

    fn deserialize_seq<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_seq(PairSeqAccess { de: self })
    }

    fn deserialize_tuple<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_tuple_struct<V>(
        self,
        _name: &'static str,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        while self.next_pair()?.is_some() {}
        visitor.visit_unit()
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct enum identifier
    }
}

struct PairMapAccess<'a, 'de> {
    de: &'a mut Deserializer<'de>,
    pending: Option<ValueDeserializer<'de>>,
}

impl<'de, 'a> de::MapAccess<'de> for PairMapAccess<'a, 'de> {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.de.next_pair()? {
            Some(raw) => {
                self.pending = Some(ValueDeserializer {
                    value: raw.value,
                    offset: raw.value_offset,
                });
                seed.deserialize(TextDeserializer {
                    text: raw.key,
                    offset: raw.key_offset,
                })
                .map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.pending.take() {
            Some(value) => seed.deserialize(value),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }
}

struct PairSeqAccess<'a, 'de> {
    de: &'a mut Deserializer<'de>,
}

impl<'de, 'a> de::SeqAccess<'de> for PairSeqAccess<'a, 'de> {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.de.next_pair()? {
            Some(raw) => seed.deserialize(PairDeserializer { raw }).map(Some),
            None => Ok(None),
        }
    }
}

/// Presents one pair as a 2-element sequence.
struct PairDeserializer<'de> {
    raw: RawPair<'de>,
}

impl<'de> de::Deserializer<'de> for PairDeserializer<'de> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let RawPair {
            key,
            key_offset,
            value,
            value_offset,
        } = self.raw;
        visitor.visit_seq(PairElements {
            key: Some(TextDeserializer {
                text: key,
                offset: key_offset,
            }),
            value: Some(ValueDeserializer {
                value,
                offset: value_offset,
            }),
        })
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option unit unit_struct newtype_struct seq tuple
        tuple_struct map struct enum identifier ignored_any
    }
}

struct PairElements<'de> {
    key: Option<TextDeserializer<'de>>,
    value: Option<ValueDeserializer<'de>>,
}

impl<'de> de::SeqAccess<'de> for PairElements<'de> {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        if let Some(key) = self.key.take() {
            return seed.deserialize(key).map(Some);
        }
        match self.value.take() {
            Some(value) => seed.deserialize(value).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(usize::from(self.key.is_some()) + usize::from(self.value.is_some()))
    }
}

/// Deserializes a value position, which may be `NULL`.
struct ValueDeserializer<'de> {
    value: Option<Cow<'de, str>>,
    offset: usize,
}

impl<'de> ValueDeserializer<'de> {
    fn into_text(self, expected: &str) -> Result<TextDeserializer<'de>> {
        match self.value {
            Some(text) => Ok(TextDeserializer {
                text,
                offset: self.offset,
            }),
            None => Err(Error::type_mismatch(self.offset, expected, "NULL")),
        }
    }
}

macro_rules! deserialize_from_text {
    ($($method:ident => $expected:expr),* $(,)?) => {
        $(
            fn $method<V>(self, visitor: V) -> Result<V::Value>
            where
                V: de::Visitor<'de>,
            {
                self.into_text($expected)?.$method(visitor)
            }
        )*
    };
}

impl<'de> de::Deserializer<'de> for ValueDeserializer<'de> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Some(text) => TextDeserializer {
                text,
                offset: self.offset,
            }
            .deserialize_any(visitor),
            None => visitor.visit_none(),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Some(text) => visitor.visit_some(TextDeserializer {
                text,
                offset: self.offset,
            }),
            None => visitor.visit_none(),
        }
    }

    fn deserialize_unit<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            None => visitor.visit_unit(),
            Some(text) => Err(Error::type_mismatch(self.offset, "NULL", &text)),
        }
    }

    fn deserialize_unit_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_unit(visitor)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_unit()
    }

    fn deserialize_enum<V>(
        self,
        name: &'static str,
        variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.into_text("enum variant")?
            .deserialize_enum(name, variants, visitor)
    }

    fn deserialize_tuple<V>(self, len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.into_text("text")?.deserialize_tuple(len, visitor)
    }

    fn deserialize_tuple_struct<V>(
        self,
        name: &'static str,
        len: usize,
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.into_text("text")?
            .deserialize_tuple_struct(name, len, visitor)
    }

    fn deserialize_struct<V>(
        self,
        name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.into_text("text")?
            .deserialize_struct(name, fields, visitor)
    }

    deserialize_from_text! {
        deserialize_bool => "bool",
        deserialize_i8 => "i8",
        deserialize_i16 => "i16",
        deserialize_i32 => "i32",
        deserialize_i64 => "i64",
        deserialize_i128 => "i128",
        deserialize_u8 => "u8",
        deserialize_u16 => "u16",
        deserialize_u32 => "u32",
        deserialize_u64 => "u64",
        deserialize_u128 => "u128",
        deserialize_f32 => "f32",
        deserialize_f64 => "f64",
        deserialize_char => "char",
        deserialize_str => "text",
        deserialize_string => "text",
        deserialize_bytes => "text",
        deserialize_byte_buf => "text",
        deserialize_seq => "text",
        deserialize_map => "text",
        deserialize_identifier => "text",
    }
}

/// Deserializes a decoded key or non-null value.
struct TextDeserializer<'de> {
    text: Cow<'de, str>,
    offset: usize,
}

macro_rules! deserialize_parsed {
    ($($method:ident => $visit:ident : $ty:ty),* $(,)?) => {
        $(
            fn $method<V>(self, visitor: V) -> Result<V::Value>
            where
                V: de::Visitor<'de>,
            {
                match self.text.trim().parse::<$ty>() {
                    Ok(parsed) => visitor.$visit(parsed),
                    Err(_) => Err(Error::type_mismatch(self.offset, stringify!($ty), &self.text)),
                }
            }
        )*
    };
}

impl<'de> de::Deserializer<'de> for TextDeserializer<'de> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.text {
            Cow::Borrowed(text) => visitor.visit_borrowed_str(text),
            Cow::Owned(text) => visitor.visit_string(text),
        }
    }

    fn deserialize_bool<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.text.trim() {
            "true" | "t" => visitor.visit_bool(true),
            "false" | "f" => visitor.visit_bool(false),
            _ => Err(Error::type_mismatch(self.offset, "bool", &self.text)),
        }
    }

    deserialize_parsed! {
        deserialize_i8 => visit_i8: i8,
        deserialize_i16 => visit_i16: i16,
        deserialize_i32 => visit_i32: i32,
        deserialize_i64 => visit_i64: i64,
        deserialize_i128 => visit_i128: i128,
        deserialize_u8 => visit_u8: u8,
        deserialize_u16 => visit_u16: u16,
        deserialize_u32 => visit_u32: u32,
        deserialize_u64 => visit_u64: u64,
        deserialize_u128 => visit_u128: u128,
        deserialize_f32 => visit_f32: f32,
        deserialize_f64 => visit_f64: f64,
    }

    fn deserialize_char<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let mut chars = self.text.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => visitor.visit_char(ch),
            _ => Err(Error::type_mismatch(self.offset, "char", &self.text)),
        }
    }

    fn deserialize_bytes<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.text {
            Cow::Borrowed(text) => visitor.visit_borrowed_bytes(text.as_bytes()),
            Cow::Owned(text) => visitor.visit_byte_buf(text.into_bytes()),
        }
    }

    fn deserialize_byte_buf<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_bytes(visitor)
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    fn deserialize_unit<V>(self, _visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        Err(Error::type_mismatch(self.offset, "NULL", &self.text))
    }

    fn deserialize_unit_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_unit(visitor)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.text {
            Cow::Borrowed(text) => {
                visitor.visit_enum(IntoDeserializer::<'de, Error>::into_deserializer(text))
            }
            Cow::Owned(text) => {
                visitor.visit_enum(IntoDeserializer::<'de, Error>::into_deserializer(text))
            }
        }
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_unit()
    }

    forward_to_deserialize_any! {
        str string seq tuple tuple_struct map struct identifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::collections::BTreeMap;

    fn parse(input: &str) -> Result<Vec<Pair>> {
        Deserializer::from_str(input).parse_pairs()
    }

    fn pair(key: &str, value: Option<&str>) -> Pair {
        Pair::new(key, value)
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert_eq!(parse("").unwrap(), vec![]);
        assert_eq!(parse("  \n\t ").unwrap(), vec![]);
    }

    #[test]
    fn test_whitespace_is_tolerated() {
        let pairs = parse(" \"a\" => \"1\" ,\n\"b\"=>NULL ").unwrap();
        assert_eq!(pairs, vec![pair("a", Some("1")), pair("b", None)]);
    }

    #[test]
    fn test_escapes_decode() {
        let pairs = parse(r#""a\"b"=>"c\\d""#).unwrap();
        assert_eq!(pairs, vec![pair("a\"b", Some("c\\d"))]);
    }

    #[test]
    fn test_quoted_null_is_text() {
        assert_eq!(parse(r#""a"=>"NULL""#).unwrap(), vec![pair("a", Some("NULL"))]);
    }

    #[test]
    fn test_non_ascii_text() {
        let pairs = parse("\"surname\"=>\"\u{d64d}\"").unwrap();
        assert_eq!(pairs, vec![pair("surname", Some("\u{d64d}"))]);
    }

    #[test]
    fn test_borrowed_without_escapes() {
        let mut de = Deserializer::from_str(r#""k"=>"v""#);
        let raw = de.next_pair().unwrap().unwrap();
        assert!(matches!(raw.key, Cow::Borrowed("k")));
        assert!(matches!(raw.value, Some(Cow::Borrowed("v"))));
        assert_eq!(raw.value_offset, 5);
    }

    #[test]
    fn test_error_offsets() {
        assert_eq!(parse(r#""a"=>"#).unwrap_err().offset(), Some(5));
        assert_eq!(parse(r#""a"=>"1","#).unwrap_err(), Error::syntax(8, "trailing comma"));
        assert_eq!(parse(r#""a"=>"1"#).unwrap_err().offset(), Some(5));
        assert_eq!(parse(r#""a" "1""#).unwrap_err(), Error::syntax(4, "expected '=>'"));
        assert_eq!(parse(r#""a"=>"1" "b"=>"2""#).unwrap_err().offset(), Some(9));
        assert_eq!(parse(r#"a=>"1""#).unwrap_err().offset(), Some(0));
    }

    #[test]
    fn test_strict_escapes() {
        assert_eq!(parse(r#""a\n"=>"1""#).unwrap_err().offset(), Some(2));
        assert!(parse(r#""a"=>"1\"#).is_err());
    }

    #[test]
    fn test_null_is_case_sensitive_bare_literal() {
        assert_eq!(parse(r#""a"=>null"#).unwrap_err().offset(), Some(5));
        assert_eq!(parse(r#""a"=>NULLS"#).unwrap_err().offset(), Some(5));
        assert_eq!(parse(r#""a"=>1"#).unwrap_err().offset(), Some(5));
        assert_eq!(parse(r#""a"=>NULL,"b"=>NULL"#).unwrap().len(), 2);
    }

    #[test]
    fn test_typed_struct() {
        #[derive(Deserialize, Debug, PartialEq)]
        struct Row {
            id: u32,
            ratio: f64,
            active: bool,
            note: Option<String>,
        }

        let mut de = Deserializer::from_str(r#""id"=>"7","ratio"=>"0.5","active"=>"t","note"=>NULL"#);
        let row = Row::deserialize(&mut de).unwrap();
        de.end().unwrap();
        assert_eq!(
            row,
            Row {
                id: 7,
                ratio: 0.5,
                active: true,
                note: None
            }
        );
    }

    #[test]
    fn test_type_mismatch_carries_offset() {
        let mut de = Deserializer::from_str(r#""n"=>"seven""#);
        let err = BTreeMap::<String, u32>::deserialize(&mut de).unwrap_err();
        assert_eq!(err, Error::type_mismatch(5, "u32", "seven"));

        let mut de = Deserializer::from_str(r#""n"=>NULL"#);
        let err = BTreeMap::<String, String>::deserialize(&mut de).unwrap_err();
        assert_eq!(err, Error::type_mismatch(5, "text", "NULL"));
    }

    #[test]
    fn test_enum_values() {
        #[derive(Deserialize, Debug, PartialEq)]
        enum Level {
            Low,
            High,
        }
        let mut de = Deserializer::from_str(r#""x"=>"High""#);
        let map = BTreeMap::<String, Level>::deserialize(&mut de).unwrap();
        assert_eq!(map["x"], Level::High);
    }
}
