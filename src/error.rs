//! Error types for table access and construction.

use thiserror::Error;

/// Failure of a key-addressed table operation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// The hash produced an index outside the bucket array. Indicates a
    /// broken hash function; never clamped.
    #[error("bucket index {index} out of range for capacity {capacity}")]
    IndexOutOfRange { index: usize, capacity: usize },
    /// Doubling would take the bucket count past `MAX_CAPACITY`.
    #[error("cannot grow table beyond {capacity} buckets")]
    CapacityOverflow { capacity: usize },
}

/// Rejected construction parameters.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("load factor must be in [0.01, 1], got {0}")]
    InvalidLoadFactor(f64),
    #[error("capacity must be greater than zero")]
    ZeroCapacity,
    #[error("capacity {0} exceeds the maximum bucket count")]
    CapacityTooLarge(usize),
}
