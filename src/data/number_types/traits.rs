//! # Traits
//!
//! The values stored in a network are primitive signed integers. Any of `i8` through `i128` (or
//! `isize`) can be used; the choice only determines where arithmetic overflows.
use std::fmt::{Debug, Display};
use std::hash::Hash;

use num_traits::{PrimInt, Signed};

/// A bounded, signed integer.
///
/// Automatically implemented for all types satisfying the trait's bounds.
pub trait Integer: PrimInt + Signed + Hash + Default + Display + Debug + Send + Sync + 'static {
    /// Parse a decimal integer, as it appears in a network file.
    ///
    /// # Arguments
    ///
    /// * `text`: A token without surrounding whitespace, optionally preceded by a sign.
    ///
    /// # Return value
    ///
    /// `None` if the token is not a decimal integer, or if it doesn't fit in `Self`.
    fn parse_decimal(text: &str) -> Option<Self> {
        Self::from_str_radix(text, 10).ok()
    }
}
impl<T> Integer for T
where
    T: PrimInt + Signed + Hash + Default + Display + Debug + Send + Sync + 'static,
{
}
