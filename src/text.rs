//! Text coercion boundary.
//!
//! Every key and value crosses into the table through [`coerce`]; nothing
//! past this point sees the caller's original type.

use core::fmt::Display;

/// Convert a key or value into the text form it is stored and compared as.
#[inline]
pub fn coerce<T: Display>(value: T) -> String {
    value.to_string()
}
