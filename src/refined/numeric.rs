//! Positive integers

use std::fmt;

use crate::{Invariant, InvariantHolder, Validation, Violations};

/// An `i64` guaranteed to be greater than zero.
///
/// # Example
///
/// ```rust
/// use invar::PositiveInt;
///
/// let n = PositiveInt::new(3);
/// assert_eq!(n.get(), 3);
///
/// assert!(PositiveInt::try_new(0).is_err());
/// assert!(PositiveInt::try_new(-5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PositiveInt(InvariantHolder<i64>);

impl PositiveInt {
    /// Invariants every `PositiveInt` satisfied at construction.
    pub const INVARIANTS: [Invariant<i64>; 1] =
        [Invariant::new("number must be positive", |n: &i64| *n > 0)];

    /// Trusted construction.
    ///
    /// # Panics
    ///
    /// Panics if `value <= 0`.
    #[track_caller]
    pub fn new(value: i64) -> Self {
        Self(InvariantHolder::new(value, &Self::INVARIANTS))
    }

    /// Fallible construction for untrusted input.
    pub fn try_new(value: i64) -> Result<Self, Violations> {
        InvariantHolder::try_new(value, &Self::INVARIANTS).map(Self)
    }

    /// Fallible construction returning a [`Validation`].
    pub fn validate(value: i64) -> Validation<Self, Violations> {
        InvariantHolder::validate(value, &Self::INVARIANTS).map(Self)
    }

    /// The wrapped value.
    #[inline]
    pub fn get(self) -> i64 {
        *self.0.value()
    }
}

impl fmt::Display for PositiveInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<i64> for PositiveInt {
    type Error = Violations;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<PositiveInt> for i64 {
    fn from(value: PositiveInt) -> Self {
        value.get()
    }
}
