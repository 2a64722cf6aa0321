//! Non-empty sequences

use std::ops::Deref;

use crate::{Invariant, InvariantHolder, Validation, Violations};

/// A `Vec<T>` guaranteed to contain at least one element.
///
/// Because emptiness is ruled out at construction, [`first`](Self::first) and
/// [`last`](Self::last) return `&T` instead of `Option<&T>`.
///
/// # Example
///
/// ```rust
/// use invar::NonEmptyVec;
///
/// let nev = NonEmptyVec::new(vec![1, 2, 3]);
/// assert_eq!(nev.first(), &1);
/// assert_eq!(nev.last(), &3);
///
/// let err = NonEmptyVec::<i32>::try_new(vec![]).unwrap_err();
/// assert_eq!(err.names(), &["slice must be non-empty"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NonEmptyVec<T>(InvariantHolder<Vec<T>>);

impl<T> NonEmptyVec<T> {
    /// Invariants every `NonEmptyVec` satisfied at construction.
    pub const INVARIANTS: [Invariant<Vec<T>>; 1] = [Invariant::new(
        "slice must be non-empty",
        |v: &Vec<T>| !v.is_empty(),
    )];

    /// Trusted construction.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[track_caller]
    pub fn new(value: Vec<T>) -> Self {
        Self(InvariantHolder::new(value, &Self::INVARIANTS))
    }

    /// Fallible construction for untrusted input.
    pub fn try_new(value: Vec<T>) -> Result<Self, Violations> {
        InvariantHolder::try_new(value, &Self::INVARIANTS).map(Self)
    }

    /// Fallible construction returning a [`Validation`].
    pub fn validate(value: Vec<T>) -> Validation<Self, Violations> {
        InvariantHolder::validate(value, &Self::INVARIANTS).map(Self)
    }

    /// Get the first element (always succeeds).
    pub fn first(&self) -> &T {
        &self.as_slice()[0]
    }

    /// Get the last element (always succeeds).
    pub fn last(&self) -> &T {
        let slice = self.as_slice();
        &slice[slice.len() - 1]
    }

    /// Borrow the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.0.value()
    }

    /// Consume, returning the inner `Vec`.
    #[inline]
    pub fn into_inner(self) -> Vec<T> {
        self.0.into_inner()
    }
}

impl<T> Deref for NonEmptyVec<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsRef<[T]> for NonEmptyVec<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> TryFrom<Vec<T>> for NonEmptyVec<T> {
    type Error = Violations;

    fn try_from(value: Vec<T>) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl<T> From<NonEmptyVec<T>> for Vec<T> {
    fn from(value: NonEmptyVec<T>) -> Self {
        value.into_inner()
    }
}

impl<'a, T> IntoIterator for &'a NonEmptyVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<T> IntoIterator for NonEmptyVec<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_inner().into_iter()
    }
}
