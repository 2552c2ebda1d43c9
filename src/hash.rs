//! Polynomial rolling hash used to pick a bucket.

/// Multiplier of the rolling hash.
pub const PRIME: u128 = 31;

/// Hash `text` into `0..capacity`.
///
/// Walks the UTF-16 code units of `text` left to right computing
/// `h = (31 * h + unit) % capacity`. The modulo is taken at every step, not
/// once at the end; bucket assignments depend on it. Intermediate values are
/// kept in `u128` so no capacity representable as `usize` can overflow.
///
/// `capacity` must be non-zero; a table never holds a zero capacity.
pub fn hash_text(text: &str, capacity: usize) -> usize {
    debug_assert!(capacity > 0, "hash_text requires a non-zero capacity");
    let modulus = capacity as u128;
    let h = text
        .encode_utf16()
        .fold(0u128, |h, unit| (PRIME * h + unit as u128) % modulus);
    // h < capacity, so it fits back into usize.
    h as usize
}
