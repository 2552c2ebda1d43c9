//! HashSet: membership of text keys.

use crate::config::TableConfig;
use crate::error::{ConfigError, TableError};
use crate::table::Table;
use core::fmt::{self, Display};

/// A hash table holding distinct strings.
#[derive(Debug, Default)]
pub struct HashSet {
    pub(crate) table: Table<()>,
}

impl HashSet {
    pub fn new() -> Self {
        Self {
            table: Table::new(),
        }
    }

    /// Empty set with the given load factor and initial capacity.
    pub fn with_config(config: TableConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            table: Table::with_config(config)?,
        })
    }

    /// Insert `key`; does nothing if it is already present.
    pub fn add<K: Display>(&mut self, key: K) -> Result<(), TableError> {
        self.table.insert(key, ())
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

    /// Number of entries in the set.
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

    /// Whether the set is past its load factor and due to resize.
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

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.table.iter().map(|node| node.key())
    }
}

impl Display for HashSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("{}");
        }
        f.write_str("{ ")?;
        for (i, key) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(key)?;
        }
        f.write_str(" }")
    }
}
