//! Construction-time parameters shared by `HashMap` and `HashSet`.

use crate::error::ConfigError;

/// Load factor used when none is given.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// Number of buckets a fresh table starts with.
pub const DEFAULT_CAPACITY: usize = 16;

/// Smallest accepted load factor. Bounds how far a single insert can grow
/// the table: one entry settles at no more than 128 buckets.
pub const MIN_LOAD_FACTOR: f64 = 0.01;

/// Largest bucket count a table may start with or grow to.
pub const MAX_CAPACITY: usize = 1 << 28;

/// Load factor and initial capacity of a table.
///
/// Both are fixed once the table is built; only the capacity changes
/// afterwards, and only by doubling on resize.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TableConfig {
    pub load_factor: f64,
    pub capacity: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            load_factor: DEFAULT_LOAD_FACTOR,
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_load_factor(mut self, load_factor: f64) -> Self {
        self.load_factor = load_factor;
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Reject parameters the table cannot allocate or would grow without
    /// bound under.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let lf = self.load_factor;
        if !(MIN_LOAD_FACTOR..=1.0).contains(&lf) {
            return Err(ConfigError::InvalidLoadFactor(lf));
        }
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.capacity > MAX_CAPACITY {
            return Err(ConfigError::CapacityTooLarge(self.capacity));
        }
        Ok(())
    }
}
