//! hstore serialization.
//!
//! This module provides the [`Serializer`] that writes Rust data structures
//! as PostgreSQL hstore text.
//!
//! ## Overview
//!
//! Only flat, key/value shaped sources can become hstore. The serializer
//! accepts three shapes, decided by which serde entry point the source uses:
//!
//! - **Maps** (`HashMap`, `BTreeMap`, `IndexMap`, [`crate::HstoreMap`], ...)
//! - **Structs**, whose field names become keys
//! - **Sequences of pairs**, e.g. `Vec<(K, V)>` or `[(K, V); N]`
//!
//! Anything else is rejected with [`Error::Configuration`].
//!
//! Every key and value is collected into a [`Value`] first. Text is written
//! as is; null values become `NULL`; everything else goes through the
//! `key_map`/`value_map` hooks of [`HstoreOptions`], or fails with
//! [`Error::NotText`] when there is no hook.
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use serde_hstore::{HstoreOptions, Serializer};
//! use serde::Serialize;
//!
//! let mut serializer = Serializer::new(String::new(), HstoreOptions::new());
//! vec![("key", "value"), ("k", "v")].serialize(&mut serializer).unwrap();
//! assert_eq!(serializer.into_inner(), r#""key"=>"value","k"=>"v""#);
//! ```
//!
//! Output is streamed pair by pair, so when an error occurs part of the
//! output may already be in the sink.

use crate::write::Write;
use crate::{Error, HstoreOptions, Result, Value};
use serde::ser::Serializer as _;
use serde::{ser, Serialize};
use std::borrow::Cow;
use tracing::{debug, trace};

/// Escapes `"` and `\` by prefixing a backslash. Nothing else is altered.
///
/// # Examples
///
/// ```rust
/// use serde_hstore::ser::escape;
///
/// assert_eq!(escape(r#"a"b\c"#), r#"a\"b\\c"#);
/// assert!(matches!(escape("plain"), std::borrow::Cow::Borrowed(_)));
/// ```
#[must_use]
pub fn escape(s: &str) -> Cow<'_, str> {
    if s.contains(|c: char| c == '"' || c == '\\') {
        let mut out = String::with_capacity(s.len() + 2);
        escape_into(&mut out, s);
        Cow::Owned(out)
    } else {
        Cow::Borrowed(s)
    }
}

#[inline]
fn escape_into(out: &mut String, s: &str) {
    for ch in s.chars() {
        if ch == '"' || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
}

fn not_a_mapping(kind: &str) -> Error {
    Error::configuration(&format!("expected a mapping object, not {}", kind))
}

/// The hstore serializer.
///
/// Writes pairs to a [`Write`] sink as soon as each one is resolved.
pub struct Serializer<W> {
    writer: W,
    options: HstoreOptions,
    scratch: String,
    pairs: usize,
}

impl<W: Write> Serializer<W> {
    pub fn new(writer: W, options: HstoreOptions) -> Self {
        Serializer {
            writer,
            options,
            scratch: String::with_capacity(64),
            pairs: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Number of pairs written so far.
    pub fn pairs_written(&self) -> usize {
        self.pairs
    }

    fn resolve_key(&self, key: Value) -> Result<String> {
        match key {
            Value::String(s) => Ok(s),
            other => match &self.options.key_map {
                Some(key_map) => key_map(&other),
                None => Err(Error::key_not_text(&other.to_string())),
            },
        }
    }

    fn resolve_value(&self, key: &str, value: Value) -> Result<Option<String>> {
        match value {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s)),
            other => match &self.options.value_map {
                Some(value_map) => value_map(&other).map(Some),
                None => Err(Error::value_not_text(&other.to_string(), key)),
            },
        }
    }

    /// Resolves one key/value pair to text and writes it.
    pub fn write_pair(&mut self, key: Value, value: Value) -> Result<()> {
        let key = self.resolve_key(key)?;
        let value = self.resolve_value(&key, value)?;

        self.scratch.clear();
        if self.pairs > 0 {
            self.scratch.push(',');
        }
        self.scratch.push('"');
        escape_into(&mut self.scratch, &key);
        self.scratch.push_str("\"=>");
        match &value {
            Some(text) => {
                self.scratch.push('"');
                escape_into(&mut self.scratch, text);
                self.scratch.push('"');
            }
            None => self.scratch.push_str("NULL"),
        }
        self.writer.write_str(&self.scratch)?;
        self.pairs += 1;

        trace!(key = %key, null = value.is_none(), "wrote hstore pair");
        Ok(())
    }

    fn finish(&mut self, shape: &'static str) {
        debug!(shape, pairs = self.pairs, "serialized hstore");
    }
}

impl<'a, W: Write> ser::Serializer for &'a mut Serializer<W> {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = PairSeqSerializer<'a, W>;
    type SerializeTuple = PairSeqSerializer<'a, W>;
    type SerializeTupleStruct = PairSeqSerializer<'a, W>;
    type SerializeTupleVariant = ser::Impossible<(), Error>;
    type SerializeMap = PairMapSerializer<'a, W>;
    type SerializeStruct = PairStructSerializer<'a, W>;
    type SerializeStructVariant = ser::Impossible<(), Error>;

    fn serialize_bool(self, _v: bool) -> Result<Self::Ok> {
        Err(not_a_mapping("bool"))
    }

    fn serialize_i8(self, v: i8) -> Result<Self::Ok> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i16(self, v: i16) -> Result<Self::Ok> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i32(self, v: i32) -> Result<Self::Ok> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i64(self, _v: i64) -> Result<Self::Ok> {
        Err(not_a_mapping("integer"))
    }

    fn serialize_u8(self, v: u8) -> Result<Self::Ok> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u16(self, v: u16) -> Result<Self::Ok> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u32(self, v: u32) -> Result<Self::Ok> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u64(self, _v: u64) -> Result<Self::Ok> {
        Err(not_a_mapping("integer"))
    }

    fn serialize_f32(self, v: f32) -> Result<Self::Ok> {
        self.serialize_f64(v as f64)
    }

    fn serialize_f64(self, _v: f64) -> Result<Self::Ok> {
        Err(not_a_mapping("float"))
    }

    fn serialize_char(self, _v: char) -> Result<Self::Ok> {
        Err(not_a_mapping("char"))
    }

    fn serialize_str(self, _v: &str) -> Result<Self::Ok> {
        Err(not_a_mapping("string"))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Self::Ok> {
        Err(not_a_mapping("bytes"))
    }

    fn serialize_none(self) -> Result<Self::Ok> {
        Err(not_a_mapping("none"))
    }

    fn serialize_some<T>(self, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok> {
        Err(not_a_mapping("unit"))
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Self::Ok> {
        Err(not_a_mapping(name))
    }

    fn serialize_unit_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<Self::Ok> {
        Err(not_a_mapping(name))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        Err(not_a_mapping(name))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Ok(PairSeqSerializer { ser: self })
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Ok(PairSeqSerializer { ser: self })
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Ok(PairSeqSerializer { ser: self })
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(not_a_mapping(name))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(PairMapSerializer {
            ser: self,
            current_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Ok(PairStructSerializer { ser: self })
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(not_a_mapping(name))
    }
}

/// Serializes a sequence whose elements are 2-element pairs.
pub struct PairSeqSerializer<'a, W> {
    ser: &'a mut Serializer<W>,
}

impl<'a, W: Write> PairSeqSerializer<'a, W> {
    fn push<T>(&mut self, element: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match element.serialize(ValueSerializer)? {
            Value::Array(items) if items.len() == 2 => {
                let mut items = items.into_iter();
                match (items.next(), items.next()) {
                    (Some(key), Some(value)) => self.ser.write_pair(key, value),
                    _ => Err(Error::configuration("expected a 2-element pair")),
                }
            }
            other => Err(Error::configuration(&format!(
                "expected a 2-element pair, not {}",
                other.kind()
            ))),
        }
    }
}

impl<'a, W: Write> ser::SerializeSeq for PairSeqSerializer<'a, W> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Self::Ok> {
        self.ser.finish("pairs");
        Ok(())
    }
}

impl<'a, W: Write> ser::SerializeTuple for PairSeqSerializer<'a, W> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Self::Ok> {
        self.ser.finish("pairs");
        Ok(())
    }
}

impl<'a, W: Write> ser::SerializeTupleStruct for PairSeqSerializer<'a, W> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Self::Ok> {
        self.ser.finish("pairs");
        Ok(())
    }
}

/// Serializes map entries as pairs.
pub struct PairMapSerializer<'a, W> {
    ser: &'a mut Serializer<W>,
    current_key: Option<Value>,
}

impl<'a, W: Write> ser::SerializeMap for PairMapSerializer<'a, W> {
    type Ok = ();
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.current_key = Some(key.serialize(ValueSerializer)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        let value = value.serialize(ValueSerializer)?;
        self.ser.write_pair(key, value)
    }

    fn end(self) -> Result<Self::Ok> {
        self.ser.finish("map");
        Ok(())
    }
}

/// Serializes struct fields as pairs keyed by field name.
pub struct PairStructSerializer<'a, W> {
    ser: &'a mut Serializer<W>,
}

impl<'a, W: Write> ser::SerializeStruct for PairStructSerializer<'a, W> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let value = value.serialize(ValueSerializer)?;
        self.ser.write_pair(Value::from(key), value)
    }

    fn end(self) -> Result<Self::Ok> {
        self.ser.finish("struct");
        Ok(())
    }
}

/// Collects any `Serialize` value into a [`Value`].
///
/// Used for every key and value before it is resolved to text.
pub struct ValueSerializer;

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeValueMap;
    type SerializeStruct = SerializeValueMap;
    type SerializeStructVariant = SerializeStructVariant;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::Integer(v as i64))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::Integer(v as i64))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Integer(v as i64))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Integer(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::Unsigned(v as u64))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::Unsigned(v as u64))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::Unsigned(v as u64))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        Ok(Value::Unsigned(v))
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Float(v as f64))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Float(v))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::Bytes(v.to_vec()))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        Ok(Value::Map(vec![(
            Value::from(variant),
            value.serialize(ValueSerializer)?,
        )]))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq> {
        Ok(SerializeVec {
            items: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Ok(SerializeTupleVariant {
            variant,
            items: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(SerializeValueMap {
            entries: Vec::with_capacity(len.unwrap_or(0)),
            current_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<Self::SerializeStruct> {
        self.serialize_map(Some(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Ok(SerializeStructVariant {
            variant,
            entries: Vec::with_capacity(len),
        })
    }
}

pub struct SerializeVec {
    items: Vec<Value>,
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.items.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.items))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

pub struct SerializeTupleVariant {
    variant: &'static str,
    items: Vec<Value>,
}

impl ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.items.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Map(vec![(
            Value::from(self.variant),
            Value::Array(self.items),
        )]))
    }
}

pub struct SerializeValueMap {
    entries: Vec<(Value, Value)>,
    current_key: Option<Value>,
}

impl ser::SerializeMap for SerializeValueMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.current_key = Some(key.serialize(ValueSerializer)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.entries.push((key, value.serialize(ValueSerializer)?));
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Map(self.entries))
    }
}

impl ser::SerializeStruct for SerializeValueMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.entries
            .push((Value::from(key), value.serialize(ValueSerializer)?));
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Map(self.entries))
    }
}

pub struct SerializeStructVariant {
    variant: &'static str,
    entries: Vec<(Value, Value)>,
}

impl ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.entries
            .push((Value::from(key), value.serialize(ValueSerializer)?));
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Map(vec![(
            Value::from(self.variant),
            Value::Map(self.entries),
        )]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coerce;
    use std::collections::BTreeMap;

    fn encode<T: ?Sized + Serialize>(value: &T, options: HstoreOptions) -> Result<String> {
        let mut serializer = Serializer::new(String::new(), options);
        value.serialize(&mut serializer)?;
        Ok(serializer.into_inner())
    }

    #[test]
    fn test_escape_only_quotes_and_backslashes() {
        assert_eq!(escape("a\"b"), "a\\\"b");
        assert_eq!(escape("c\\d"), "c\\\\d");
        assert_eq!(escape("tab\tnew\nline"), "tab\tnew\nline");
        assert_eq!(escape(""), "");
    }

    #[test]
    fn test_map_source() {
        let mut map = BTreeMap::new();
        map.insert("a", Some("1"));
        map.insert("b", None);
        assert_eq!(
            encode(&map, HstoreOptions::new()).unwrap(),
            r#""a"=>"1","b"=>NULL"#
        );
    }

    #[test]
    fn test_pair_sequence_keeps_duplicates() {
        let pairs = vec![("k", "1"), ("k", "2")];
        assert_eq!(
            encode(&pairs, HstoreOptions::new()).unwrap(),
            r#""k"=>"1","k"=>"2""#
        );
    }

    #[test]
    fn test_array_pairs() {
        let pairs = vec![["a", "1"], ["b", "2"]];
        assert_eq!(
            encode(&pairs, HstoreOptions::new()).unwrap(),
            r#""a"=>"1","b"=>"2""#
        );
    }

    #[test]
    fn test_non_pair_element_rejected() {
        let err = encode(&vec![("a", "1", "x")], HstoreOptions::new()).unwrap_err();
        assert_eq!(
            err,
            Error::Configuration("expected a 2-element pair, not array".to_string())
        );
        let err = encode(&vec!["ab"], HstoreOptions::new()).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_scalar_source_rejected() {
        let err = encode(&42, HstoreOptions::new()).unwrap_err();
        assert_eq!(
            err,
            Error::Configuration("expected a mapping object, not integer".to_string())
        );
        assert!(encode(&None::<Vec<(String, String)>>, HstoreOptions::new()).is_err());
    }

    #[test]
    fn test_some_source_is_transparent() {
        let pairs = Some(vec![("a", "1")]);
        assert_eq!(encode(&pairs, HstoreOptions::new()).unwrap(), r#""a"=>"1""#);
    }

    #[test]
    fn test_char_and_unit_variant_are_text() {
        #[derive(Serialize)]
        enum Color {
            Red,
        }
        let pairs = vec![('c', Color::Red)];
        assert_eq!(encode(&pairs, HstoreOptions::new()).unwrap(), r#""c"=>"Red""#);
    }

    #[test]
    fn test_key_map_receives_non_text_keys() {
        let options = HstoreOptions::new().with_key_map(|key| Ok(format!("#{}", key)));
        let pairs = vec![(1, "one"), (2, "two")];
        assert_eq!(
            encode(&pairs, options).unwrap(),
            r##""#1"=>"one","#2"=>"two""##
        );
    }

    #[test]
    fn test_null_value_skips_value_map() {
        let options = HstoreOptions::new()
            .with_value_map(|_| Err(Error::custom("value_map must not see null")));
        let pairs = vec![("a", None::<i32>)];
        assert_eq!(encode(&pairs, options).unwrap(), r#""a"=>NULL"#);
    }

    #[test]
    fn test_value_map_error_is_returned_unchanged() {
        let options = HstoreOptions::new().with_value_map(|_| Err(Error::custom("boom")));
        let err = encode(&vec![("a", 1)], options).unwrap_err();
        assert_eq!(err, Error::Custom("boom".to_string()));
    }

    #[test]
    fn test_stream_prefix_survives_error() {
        let mut serializer = Serializer::new(String::new(), HstoreOptions::new());
        let pairs = vec![("a", Value::from("1")), ("b", Value::from(2))];
        assert!(pairs.serialize(&mut serializer).is_err());
        assert_eq!(serializer.pairs_written(), 1);
        assert_eq!(serializer.into_inner(), r#""a"=>"1""#);
    }

    #[test]
    fn test_nested_values_need_value_map() {
        let pairs = vec![("a", vec![0, 1, 2])];
        let err = encode(&pairs, HstoreOptions::new()).unwrap_err();
        assert_eq!(err.to_string(), r#"value [0, 1, 2] of key "a" is not a string"#);

        let options = HstoreOptions::new().with_value_map(coerce::to_text);
        assert_eq!(encode(&pairs, options).unwrap(), r#""a"=>"[0, 1, 2]""#);
    }

    #[test]
    fn test_value_serializer_variants() {
        #[derive(Serialize)]
        enum Shape {
            Circle(f64),
            Rect { w: u32, h: u32 },
        }
        assert_eq!(
            Shape::Circle(1.5).serialize(ValueSerializer).unwrap(),
            Value::Map(vec![(Value::from("Circle"), Value::Float(1.5))])
        );
        assert_eq!(
            Shape::Rect { w: 2, h: 3 }.serialize(ValueSerializer).unwrap().to_string(),
            r#"{"Rect": {"w": 2, "h": 3}}"#
        );
    }
}
