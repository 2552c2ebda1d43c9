//! Table: the bucketed hash engine behind `HashMap` and `HashSet`.
//!
//! Keys are coerced to text, hashed to a bucket index, and stored in the
//! [`Chain`] at that index. Bucket slots stay `None` until a key is first
//! inserted into them. Once `len / capacity` exceeds the load factor the
//! table doubles its capacity and re-inserts every entry.

use crate::chain::Chain;
use crate::config::{TableConfig, MAX_CAPACITY};
use crate::error::{ConfigError, TableError};
use crate::hash::hash_text;
use crate::node::Node;
use crate::text::coerce;
use core::fmt::Display;
use log::{debug, trace};

/// What an entry carries besides its key.
///
/// Maps store a `String`; sets store `()`.
pub trait Payload {
    /// Called when an insert hits a key that is already present.
    fn overwrite(&mut self, incoming: Self);
}

impl Payload for String {
    #[inline]
    fn overwrite(&mut self, incoming: Self) {
        *self = incoming;
    }
}

impl Payload for () {
    #[inline]
    fn overwrite(&mut self, _incoming: Self) {}
}

#[derive(Debug)]
pub struct Table<V> {
    buckets: Vec<Option<Chain<V>>>,
    capacity: usize,
    size: usize,
    load_factor: f64,
}

fn empty_buckets<V>(capacity: usize) -> Vec<Option<Chain<V>>> {
    let mut buckets = Vec::with_capacity(capacity);
    buckets.resize_with(capacity, || None);
    buckets
}

impl<V: Payload> Default for Table<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Payload> Table<V> {
    /// Empty table with the default load factor and capacity.
    pub fn new() -> Self {
        Self::from_valid(TableConfig::default())
    }

    /// Empty table built from `config` once it passes validation.
    pub fn with_config(config: TableConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: TableConfig) -> Self {
        Self {
            buckets: empty_buckets(config.capacity),
            capacity: config.capacity,
            size: 0,
            load_factor: config.load_factor,
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of buckets.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Bucket index of `key` under the current capacity.
    pub fn hash<K: Display>(&self, key: K) -> usize {
        hash_text(&coerce(key), self.capacity)
    }

    fn index(&self, key: &str) -> Result<usize, TableError> {
        let index = hash_text(key, self.capacity);
        if index >= self.buckets.len() {
            return Err(TableError::IndexOutOfRange {
                index,
                capacity: self.buckets.len(),
            });
        }
        Ok(index)
    }

    /// Chain for `key`, allocated on first use.
    pub fn at<K: Display>(&mut self, key: K) -> Result<&mut Chain<V>, TableError> {
        self.at_text(&coerce(key))
    }

    fn at_text(&mut self, key: &str) -> Result<&mut Chain<V>, TableError> {
        let index = self.index(key)?;
        let slot = &mut self.buckets[index];
        if slot.is_none() {
            trace!("allocating chain for bucket {index}");
        }
        Ok(slot.get_or_insert_with(Chain::new))
    }

    /// Chain for `key` if its bucket has been allocated. Never allocates.
    pub fn bucket<K: Display>(&self, key: K) -> Result<Option<&Chain<V>>, TableError> {
        self.bucket_text(&coerce(key))
    }

    fn bucket_text(&self, key: &str) -> Result<Option<&Chain<V>>, TableError> {
        let index = self.index(key)?;
        Ok(self.buckets[index].as_ref())
    }

    fn bucket_text_mut(&mut self, key: &str) -> Result<Option<&mut Chain<V>>, TableError> {
        let index = self.index(key)?;
        Ok(self.buckets[index].as_mut())
    }

    /// Whether `len / capacity` exceeds the load factor.
    pub fn is_loaded(&self) -> bool {
        self.size as f64 / self.capacity as f64 > self.load_factor
    }

    /// Insert `key`, or overwrite the payload of an existing entry.
    /// Resizes at most once afterwards if the table became loaded.
    ///
    /// On `CapacityOverflow` the entry is stored but the table keeps its
    /// old capacity.
    pub fn insert<K: Display>(&mut self, key: K, value: V) -> Result<(), TableError> {
        self.insert_text(coerce(key), value)
    }

    fn insert_text(&mut self, key: String, value: V) -> Result<(), TableError> {
        let bucket = self.at_text(&key)?;
        if let Some(node) = bucket.find_mut(&key) {
            node.value_mut().overwrite(value);
        } else {
            bucket.append(key, value);
            self.size += 1;
        }

        if self.is_loaded() {
            self.resize()?;
        }
        Ok(())
    }

    /// Double the capacity and re-insert every entry against it.
    ///
    /// All entries are moved out before the bucket array is replaced, then
    /// go back in through the regular insertion path. Fails with
    /// `CapacityOverflow`, leaving the table untouched, if the re-insertion
    /// would need more than `MAX_CAPACITY` buckets.
    pub fn resize(&mut self) -> Result<(), TableError> {
        let old_capacity = self.capacity;
        let new_capacity = old_capacity
            .checked_mul(2)
            .filter(|&c| c <= MAX_CAPACITY)
            .ok_or(TableError::CapacityOverflow {
                capacity: old_capacity,
            })?;
        self.check_growth(new_capacity)?;

        let entries: Vec<(String, V)> = self
            .buckets
            .iter_mut()
            .flatten()
            .flat_map(Chain::drain)
            .collect();

        self.clear();
        self.capacity = new_capacity;
        self.buckets = empty_buckets(self.capacity);
        debug!(
            "resizing table from {} to {} buckets ({} entries)",
            old_capacity,
            self.capacity,
            entries.len()
        );

        // Cannot fail: every index is below the new bucket count, and
        // check_growth covered any nested resize.
        for (key, value) in entries {
            self.insert_text(key, value)?;
        }
        Ok(())
    }

    /// Re-inserting `len` entries starting at `capacity` buckets may resize
    /// again; make sure every doubling it could take stays in bounds.
    fn check_growth(&self, mut capacity: usize) -> Result<(), TableError> {
        while self.size as f64 / capacity as f64 > self.load_factor {
            capacity = capacity
                .checked_mul(2)
                .filter(|&c| c <= MAX_CAPACITY)
                .ok_or(TableError::CapacityOverflow {
                    capacity: self.capacity,
                })?;
        }
        Ok(())
    }

    /// Payload stored under `key`.
    pub fn get<K: Display>(&self, key: K) -> Result<Option<&V>, TableError> {
        let key = coerce(key);
        Ok(self
            .bucket_text(&key)?
            .and_then(|chain| chain.find(&key))
            .map(Node::value))
    }

    pub fn contains<K: Display>(&self, key: K) -> Result<bool, TableError> {
        let key = coerce(key);
        Ok(self
            .bucket_text(&key)?
            .is_some_and(|chain| chain.contains(&key)))
    }

    /// Unlink `key`. Returns whether it was present.
    pub fn remove<K: Display>(&mut self, key: K) -> Result<bool, TableError> {
        let key = coerce(key);
        let removed = match self.bucket_text_mut(&key)? {
            Some(chain) => chain.remove(&key),
            None => false,
        };
        if removed {
            self.size -= 1;
        }
        Ok(removed)
    }

    /// Empty every chain. Capacity and load factor are kept.
    pub fn clear(&mut self) {
        for chain in self.buckets.iter_mut().flatten() {
            chain.clear();
        }
        self.size = 0;
    }

    /// Nodes in bucket-index order, then chain order.
    pub fn iter(&self) -> impl Iterator<Item = &Node<V>> + '_ {
        self.buckets.iter().flatten().flat_map(Chain::iter)
    }

    /// Keys in iteration order.
    pub fn keys(&self) -> Vec<String> {
        self.iter().map(|node| node.key().to_string()).collect()
    }

    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.iter().map(|node| node.value().clone()).collect()
    }

    pub fn entries(&self) -> Vec<(String, V)>
    where
        V: Clone,
    {
        self.iter()
            .map(|node| (node.key().to_string(), node.value().clone()))
            .collect()
    }
}

#[cfg(test)]
impl<V> Table<V> {
    pub(crate) fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Allocated chains with their bucket index.
    pub(crate) fn chains(&self) -> impl Iterator<Item = (usize, &Chain<V>)> + '_ {
        self.buckets
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|chain| (i, chain)))
    }
}
