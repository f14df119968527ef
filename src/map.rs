//! Ordered map type for hstore data.
//!
//! This module provides [`HstoreMap`], a wrapper around [`IndexMap`] from
//! text keys to nullable text values. Insertion order is kept, so a map
//! decoded from hstore text encodes back in the same order.
//!
//! hstore text may repeat a key. The codec itself keeps every pair (see
//! [`crate::parse`]); an `HstoreMap` keeps one entry per key, at the position
//! the key first appeared, holding the last value seen.
//!
//! ## Examples
//!
//! ```rust
//! use serde_hstore::{from_str, to_string, HstoreMap};
//!
//! let map: HstoreMap = from_str(r#""b"=>"2", "a"=>NULL"#).unwrap();
//! assert_eq!(map.get("b"), Some(&Some("2".to_string())));
//! assert_eq!(to_string(&map).unwrap(), r#""b"=>"2","a"=>NULL"#);
//! ```

use crate::Pair;
use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// An insertion-ordered map of text keys to text-or-null values.
///
/// # Examples
///
/// ```rust
/// use serde_hstore::HstoreMap;
///
/// let mut map = HstoreMap::new();
/// map.insert("first", Some("1"));
/// map.insert("second", None::<&str>);
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HstoreMap(IndexMap<String, Option<String>>);

impl HstoreMap {
    #[must_use]
    pub fn new() -> Self {
        HstoreMap(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        HstoreMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a pair, returning the previous value if the key was present.
    ///
    /// A replaced key keeps its original position.
    pub fn insert<K, V>(&mut self, key: K, value: Option<V>) -> Option<Option<String>>
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.0.insert(key.into(), value.map(Into::into))
    }

    /// Returns the value for `key`: `None` if absent, `Some(None)` if `NULL`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Option<String>> {
        self.0.get(key)
    }

    /// Returns the text value for `key`, treating `NULL` like a missing key.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Option::as_deref)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes `key`, keeping the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Option<String>> {
        self.0.shift_remove(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Option<String>> {
        self.0.keys()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, String, Option<String>> {
        self.0.values()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Option<String>> {
        self.0.iter()
    }

    /// Converts the map into pairs, in order.
    #[must_use]
    pub fn into_pairs(self) -> Vec<Pair> {
        self.0.into_iter().map(Pair::from).collect()
    }
}

impl From<HashMap<String, Option<String>>> for HstoreMap {
    fn from(map: HashMap<String, Option<String>>) -> Self {
        HstoreMap(map.into_iter().collect())
    }
}

impl From<HstoreMap> for HashMap<String, Option<String>> {
    fn from(map: HstoreMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl From<Vec<Pair>> for HstoreMap {
    fn from(pairs: Vec<Pair>) -> Self {
        pairs
            .into_iter()
            .map(|pair| (pair.key, pair.value))
            .collect()
    }
}

impl IntoIterator for HstoreMap {
    type Item = (String, Option<String>);
    type IntoIter = indexmap::map::IntoIter<String, Option<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a HstoreMap {
    type Item = (&'a String, &'a Option<String>);
    type IntoIter = indexmap::map::Iter<'a, String, Option<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Option<String>)> for HstoreMap {
    fn from_iter<T: IntoIterator<Item = (String, Option<String>)>>(iter: T) -> Self {
        HstoreMap(IndexMap::from_iter(iter))
    }
}

impl Serialize for HstoreMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for HstoreMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct HstoreMapVisitor;

        impl<'de> Visitor<'de> for HstoreMapVisitor {
            type Value = HstoreMap;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of text keys to text or null values")
            }

            fn visit_map<A>(self, mut access: A) -> Result<HstoreMap, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut map = HstoreMap::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, Option<String>>()? {
                    map.0.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(HstoreMapVisitor)
    }
}
