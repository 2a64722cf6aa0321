//! Non-null references

use std::fmt;
use std::ops::Deref;

use crate::{Invariant, InvariantHolder, Validation, Violations};

/// An `Option<&'a T>` guaranteed to be `Some`.
///
/// Useful at boundaries that hand out optional references (lookups, `find`,
/// `get`) where the caller wants to turn absence into a reported violation.
/// The holder owns the reference, not the referent.
///
/// # Example
///
/// ```rust
/// use invar::NonNullRef;
///
/// let port = 8080;
/// let r = NonNullRef::new(Some(&port));
/// assert_eq!(*r.get(), 8080);
///
/// let err = NonNullRef::<u16>::try_new(None).unwrap_err();
/// assert_eq!(err.names(), &["pointer must not be nil"]);
/// ```
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NonNullRef<'a, T>(InvariantHolder<Option<&'a T>>);

impl<'a, T> NonNullRef<'a, T> {
    /// Invariants every `NonNullRef` satisfied at construction.
    pub const INVARIANTS: [Invariant<Option<&'a T>>; 1] = [Invariant::new(
        "pointer must not be nil",
        |r: &Option<&'a T>| r.is_some(),
    )];

    /// Trusted construction.
    ///
    /// # Panics
    ///
    /// Panics if `value` is `None`.
    #[track_caller]
    pub fn new(value: Option<&'a T>) -> Self {
        Self(InvariantHolder::new(value, &Self::INVARIANTS))
    }

    /// Fallible construction for untrusted input.
    pub fn try_new(value: Option<&'a T>) -> Result<Self, Violations> {
        InvariantHolder::try_new(value, &Self::INVARIANTS).map(Self)
    }

    /// Fallible construction returning a [`Validation`].
    pub fn validate(value: Option<&'a T>) -> Validation<Self, Violations> {
        InvariantHolder::validate(value, &Self::INVARIANTS).map(Self)
    }

    /// The wrapped reference.
    pub fn get(&self) -> &'a T {
        self.0.value().expect("NonNullRef constructed from None")
    }
}

impl<T> Clone for NonNullRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NonNullRef<'_, T> {}

impl<T> Deref for NonNullRef<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.get()
    }
}

impl<T> AsRef<T> for NonNullRef<'_, T> {
    fn as_ref(&self) -> &T {
        self.get()
    }
}

impl<T: fmt::Display> fmt::Display for NonNullRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.get(), f)
    }
}

impl<'a, T> From<&'a T> for NonNullRef<'a, T> {
    fn from(referent: &'a T) -> Self {
        Self::new(Some(referent))
    }
}
