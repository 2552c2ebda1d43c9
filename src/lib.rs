//! chained-hashmap: a string-keyed hash map and hash set built on
//! separate chaining.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: one bucketed hash engine shared by a map and a set, with the
//!   hash function, the bucket chains and the resize protocol each small
//!   enough to reason about on its own.
//! - Layers:
//!   - `Node` / `Chain`: an owned singly linked list; each node owns its
//!     successor. Removal splices around the victim by keeping the
//!     predecessor in hand.
//!   - `Table<V>`: bucket array of `Option<Chain<V>>`, size accounting and
//!     resizing. `V` is the per-entry payload: `String` for the map, `()`
//!     for the set.
//!   - `HashMap` / `HashSet`: public surfaces over `Table<String>` and
//!     `Table<()>` with their own text rendering.
//!
//! Text coercion
//! - Every key and value is turned into its `Display` text by
//!   `text::coerce` before it is hashed, stored or compared. `7` and `"7"`
//!   are the same key.
//!
//! Hashing
//! - `h = (31 * h + unit) % capacity` over the UTF-16 code units of the key,
//!   with the modulo applied at every step. The result always lies in
//!   `0..capacity`; `Table::at` still checks it and reports
//!   `TableError::IndexOutOfRange` instead of clamping.
//!
//! Buckets and resizing
//! - Bucket slots are `None` until a key hashing to them is inserted.
//!   Lookups and removals never allocate a chain.
//! - After an insert, if `len / capacity > load_factor` the table moves
//!   every entry out, doubles the capacity, allocates a fresh bucket array
//!   and re-inserts each entry through the normal insert path.
//! - Load factor must lie in `[MIN_LOAD_FACTOR, 1]` and capacity in
//!   `1..=MAX_CAPACITY`; both are checked when the table is built. A resize
//!   that would pass `MAX_CAPACITY` fails with `CapacityOverflow` before
//!   any entry is moved.
//!
//! Notes and non-goals
//! - Single-threaded; mutation goes through `&mut self`.
//! - No shrinking on removal, no persistence.
//! - Iteration order is bucket order, then chain order. It changes when the
//!   table resizes.

pub mod chain;
pub mod config;
pub mod error;
pub mod hash;
pub mod hash_map;
pub mod hash_set;
pub mod node;
pub mod table;
mod table_proptest;
pub mod text;

// Public surface
pub use config::{
    TableConfig, DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR, MAX_CAPACITY, MIN_LOAD_FACTOR,
};
pub use error::{ConfigError, TableError};
pub use hash_map::HashMap;
pub use hash_set::HashSet;
pub use table::{Payload, Table};
