// file: src/models/record.rs
// description: ordered column/value record read from one csv row
// reference: internal data structures

use serde::ser::{Serialize, SerializeMap, Serializer};

/// One CSV row as column name → value pairs, in header order.
///
/// After the excluded column is removed the record is submitted to Solr
/// as-is, so it doubles as the document type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

pub type Document = Record;

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `column` to `value`. A repeated column keeps its first position
    /// and takes the latest value.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        let column = column.into();
        let value = value.into();

        match self.fields.iter_mut().find(|(name, _)| *name == column) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((column, value)),
        }
    }

    /// Removes `column`, returning its value. Absent columns are a no-op.
    pub fn remove(&mut self, column: &str) -> Option<String> {
        let idx = self.fields.iter().position(|(name, _)| name == column)?;
        Some(self.fields.remove(idx).1)
    }

    /// Drops columns whose value is empty, returning how many were removed.
    pub fn remove_empty(&mut self) -> usize {
        let before = self.fields.len();
        self.fields.retain(|(_, value)| !value.is_empty());
        before - self.fields.len()
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, column: &str) -> bool {
        self.get(column).is_some()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (column, value) in iter {
            record.insert(column, value);
        }
        record
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (column, value) in &self.fields {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}
