//! Ordered, multi-valued key/value records
//!
//! An MSE data file is a list of `key: value` entries in which keys may
//! repeat (a set file has one `card` entry per card) and order matters. A
//! value is either a line of text or a nested record.

use crate::{MseError, Result};

/// Value of one record entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Scalar(String),
    Record(OrderedRecord),
}

impl Value {
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Value::Scalar(text) => Some(text),
            Value::Record(_) => None,
        }
    }

    pub fn as_record(&self) -> Option<&OrderedRecord> {
        match self {
            Value::Scalar(_) => None,
            Value::Record(record) => Some(record),
        }
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Scalar(text)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Scalar(text.to_string())
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Value::Scalar(if flag { "true" } else { "false" }.to_string())
    }
}

impl From<OrderedRecord> for Value {
    fn from(record: OrderedRecord) -> Self {
        Value::Record(record)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(items: I) -> Self {
        Value::Record(items.into_iter().collect())
    }
}

/// Ordered list of (key, value) entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedRecord {
    entries: Vec<(String, Value)>,
}

impl OrderedRecord {
    pub fn new() -> Self {
        OrderedRecord::default()
    }

    /// Append an entry, even if the key is already present
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.push((key.into(), value.into()));
    }

    /// Append an entry whose key must not be present yet
    pub fn set_unique(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<()> {
        let key = key.into();
        if self.contains(&key) {
            return Err(MseError::DuplicateKey(key));
        }
        self.add(key, value);
        Ok(())
    }

    /// The value of a key that occurs exactly once
    pub fn get_unique(&self, key: &str) -> Result<&Value> {
        let mut values = self.get_all(key);
        match (values.next(), values.next()) {
            (Some(value), None) => Ok(value),
            _ => Err(MseError::AmbiguousKeyLookup {
                key: key.to_string(),
                found: self.get_all(key).count(),
            }),
        }
    }

    /// All values of a key in insertion order
    ///
    /// The iterator is lazy and can be cloned to restart from the same point.
    pub fn get_all<'a, 'k>(
        &'a self,
        key: &'k str,
    ) -> impl Iterator<Item = &'a Value> + Clone + use<'a, 'k> {
        self.entries
            .iter()
            .filter(move |(entry_key, _)| entry_key == key)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(entry_key, _)| entry_key == key)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for OrderedRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(items: I) -> Self {
        OrderedRecord {
            entries: items
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
