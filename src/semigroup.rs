//! Semigroup trait for accumulating failures
//!
//! A Semigroup is a type with an associative binary operation. Here it is what
//! lets [`Validation::and`](crate::Validation::and) merge the failures of
//! several independent constructions into one report.
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Example
//!
//! ```
//! use invar::{PositiveInt, Semigroup};
//!
//! let a = PositiveInt::try_new(0).unwrap_err();
//! let b = PositiveInt::try_new(-1).unwrap_err();
//! assert_eq!(a.combine(b).len(), 2);
//! ```

/// A type that supports an associative binary operation
///
/// `combine` takes `self` by value; clone first to keep the originals.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}
