//! The parsed document.
//!
//! A [`Document`] is one ordered map. Keys of the default (headerless) section
//! sit directly at the top level next to the named sections; what tells them
//! apart is the shape of the value, see [`is_section`].

use crate::{IniMap, Value};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A whole INI document: default-section entries and named sections, in source order.
///
/// # Examples
///
/// ```rust
/// use serde_xini::{decode, Value};
///
/// let doc = decode("name = demo\n\n[db]\nhost = localhost\n").unwrap();
///
/// assert_eq!(doc.default_section().get("name"), Some(&Value::from("demo")));
/// let names: Vec<_> = doc.sections().map(|(name, _)| name.as_str()).collect();
/// assert_eq!(names, vec!["db"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    entries: IniMap,
}

/// Returns `true` if `value` is written as a `[name]` block rather than a `key = value` line.
///
/// That is a map that is not list-shaped, or a non-empty list made only of maps.
#[must_use]
pub fn is_section(value: &Value) -> bool {
    match value {
        Value::Map(map) => !map.is_list_shaped(),
        Value::List(_) => value.is_list_of_maps(),
        _ => false,
    }
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the top-level entry under `key`, whether a default-section value or a section.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    /// Returns the named section `name`, if present and section-shaped.
    ///
    /// The default section has no name here; use [`default_section`](Self::default_section).
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Value> {
        self.entries.get(name).filter(|value| is_section(value))
    }

    /// Iterates over the named sections in source order.
    pub fn sections(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter().filter(|(_, value)| is_section(value))
    }

    /// Collects the entries of the default section, in source order.
    #[must_use]
    pub fn default_section(&self) -> IniMap {
        self.entries
            .iter()
            .filter(|(_, value)| !is_section(value))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    #[must_use]
    pub fn as_map(&self) -> &IniMap {
        &self.entries
    }

    #[must_use]
    pub fn into_map(self) -> IniMap {
        self.entries
    }
}

impl From<IniMap> for Document {
    fn from(entries: IniMap) -> Self {
        Document { entries }
    }
}

impl From<Document> for Value {
    fn from(document: Document) -> Self {
        Value::Map(document.entries)
    }
}

impl TryFrom<Value> for Document {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Map(entries) => Ok(Document { entries }),
            other => Err(crate::Error::type_mismatch("map", other.kind())),
        }
    }
}

impl IntoIterator for Document {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(String, Value)> for Document {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Document {
            entries: IniMap::from_iter(iter),
        }
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.entries.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        IniMap::deserialize(deserializer).map(Document::from)
    }
}
