//! HashMap: text keys to text values.

use crate::config::TableConfig;
use crate::error::{ConfigError, TableError};
use crate::table::Table;
use crate::text::coerce;
use core::fmt::{self, Display};

/// A hash table mapping strings to strings.
///
/// Keys and values may be any `Display` type; they are stored as their
/// text form.
#[derive(Debug, Default)]
pub struct HashMap {
    pub(crate) table: Table<String>,
}

impl HashMap {
    pub fn new() -> Self {
        Self {
            table: Table::new(),
        }
    }

    /// Empty map with the given load factor and initial capacity.
    pub fn with_config(config: TableConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            table: Table::with_config(config)?,
        })
    }

    /// Insert `key -> value`, overwriting the value if `key` is present.
    pub fn set<K: Display, V: Display>(&mut self, key: K, value: V) -> Result<(), TableError> {
        self.table.insert(key, coerce(value))
    }

    /// Value stored under `key`, if any.
    pub fn get<K: Display>(&self, key: K) -> Result<Option<&str>, TableError> {
        Ok(self.table.get(key)?.map(String::as_str))
    }

    /// Whether `key` is present.
    pub fn has<K: Display>(&self, key: K) -> Result<bool, TableError> {
        self.table.contains(key)
    }

    /// Remove `key`. Returns whether it was present.
    pub fn remove<K: Display>(&mut self, key: K) -> Result<bool, TableError> {
        self.table.remove(key)
    }

    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Number of entries in the map.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Current number of buckets.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    pub fn load_factor(&self) -> f64 {
        self.table.load_factor()
    }

    /// Whether the map is past its load factor and due to resize.
    pub fn is_loaded(&self) -> bool {
        self.table.is_loaded()
    }

    /// Bucket index `key` hashes to under the current capacity.
    pub fn hash<K: Display>(&self, key: K) -> usize {
        self.table.hash(key)
    }

    pub fn keys(&self) -> Vec<String> {
        self.table.keys()
    }

    pub fn values(&self) -> Vec<String> {
        self.table.values()
    }

    pub fn entries(&self) -> Vec<(String, String)> {
        self.table.entries()
    }

    /// Borrowed `(key, value)` pairs in bucket order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.table
            .iter()
            .map(|node| (node.key(), node.value().as_str()))
    }
}

impl Display for HashMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("{}");
        }
        f.write_str("{\n  ")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",\n  ")?;
            }
            write!(f, "{key} -> {value}")?;
        }
        f.write_str("\n}")
    }
}
