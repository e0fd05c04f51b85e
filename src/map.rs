//! Ordered map type for INI sections and nested maps.
//!
//! [`IniMap`] wraps [`IndexMap`] so that keys come back out in the order they
//! were first written. The encoder relies on this: sections and keys are
//! written in source order, and the list-shaped check below looks at key order.
//!
//! ## Examples
//!
//! ```rust
//! use serde_xini::{IniMap, Value};
//!
//! let mut map = IniMap::new();
//! map.insert("name".to_string(), Value::from("Alice"));
//! map.insert("age".to_string(), Value::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use crate::Value;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// An ordered map of string keys to INI values.
///
/// # Examples
///
/// ```rust
/// use serde_xini::{IniMap, Value};
///
/// let mut map = IniMap::new();
/// map.insert("first".to_string(), Value::from(1));
/// map.insert("second".to_string(), Value::from(2));
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IniMap(IndexMap<String, Value>);

impl IniMap {
    /// Creates an empty `IniMap`.
    #[must_use]
    pub fn new() -> Self {
        IniMap(IndexMap::new())
    }

    /// Creates an empty `IniMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        IniMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// An existing key keeps its position and gets the new value; the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_xini::{IniMap, Value};
    ///
    /// let mut map = IniMap::new();
    /// assert!(map.insert("key".to_string(), Value::from(42)).is_none());
    /// assert!(map.insert("key".to_string(), Value::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    /// Returns the value under `key`, inserting the result of `default` first if the key is absent.
    pub fn get_or_insert_with<F>(&mut self, key: &str, default: F) -> &mut Value
    where
        F: FnOnce() -> Value,
    {
        self.0.entry(key.to_string()).or_insert_with(default)
    }

    /// Removes `key`, keeping the relative order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }

    /// Returns `true` if the keys are exactly `"0"`, `"1"`, ... `"n-1"` in order.
    ///
    /// Such a map carries nothing a plain list would not, and the encoder
    /// writes it as one. An empty map is list-shaped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_xini::{IniMap, Value};
    ///
    /// let mut map = IniMap::new();
    /// map.insert("0".to_string(), Value::from("a"));
    /// map.insert("1".to_string(), Value::from("b"));
    /// assert!(map.is_list_shaped());
    ///
    /// map.insert("3".to_string(), Value::from("c"));
    /// assert!(!map.is_list_shaped());
    /// ```
    #[must_use]
    pub fn is_list_shaped(&self) -> bool {
        self.0
            .keys()
            .enumerate()
            .all(|(index, key)| parse_index(key) == Some(index as i64))
    }

    /// The integer key an append should use: one past the largest integer key, or 0.
    #[must_use]
    pub fn next_index(&self) -> i64 {
        self.0
            .keys()
            .filter_map(|key| parse_index(key))
            .max()
            .map_or(0, |max| max + 1)
    }

    /// Appends `value` under [`next_index`](Self::next_index).
    pub fn push(&mut self, value: Value) {
        let key = self.next_index().to_string();
        self.0.insert(key, value);
    }
}

/// Parses `key` as a canonical decimal integer.
///
/// Canonical means the text round-trips through `i64`: `"6"` and `"-3"` are
/// integer keys, `"06"`, `"+6"` and `"-0"` are not.
///
/// # Examples
///
/// ```rust
/// use serde_xini::map::parse_index;
///
/// assert_eq!(parse_index("6"), Some(6));
/// assert_eq!(parse_index("-3"), Some(-3));
/// assert_eq!(parse_index("06"), None);
/// assert_eq!(parse_index("six"), None);
/// ```
#[must_use]
pub fn parse_index(key: &str) -> Option<i64> {
    let index = key.parse::<i64>().ok()?;
    if index.to_string() == key {
        Some(index)
    } else {
        None
    }
}

impl From<Vec<Value>> for IniMap {
    /// Converts a list into a map keyed by position.
    fn from(list: Vec<Value>) -> Self {
        list.into_iter()
            .enumerate()
            .map(|(index, value)| (index.to_string(), value))
            .collect()
    }
}

impl From<HashMap<String, Value>> for IniMap {
    fn from(map: HashMap<String, Value>) -> Self {
        IniMap(map.into_iter().collect())
    }
}

impl From<IniMap> for HashMap<String, Value> {
    fn from(map: IniMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for IniMap {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a IniMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for IniMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        IniMap(IndexMap::from_iter(iter))
    }
}

impl Serialize for IniMap {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for IniMap {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Map(map) => Ok(map),
            Value::List(list) => Ok(IniMap::from(list)),
            other => Err(serde::de::Error::custom(format!(
                "expected a map, found {}",
                other.kind()
            ))),
        }
    }
}
