//! Non-empty text

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::{Invariant, InvariantHolder, Validation, Violations};

/// A `String` guaranteed to contain at least one byte.
///
/// # Example
///
/// ```rust
/// use invar::NonEmptyString;
///
/// let name = NonEmptyString::new("Alice");
/// assert_eq!(name.len(), 5);
///
/// let err = NonEmptyString::try_new("").unwrap_err();
/// assert_eq!(err.names(), &["string must be non-empty"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NonEmptyString(InvariantHolder<String>);

impl NonEmptyString {
    /// Invariants every `NonEmptyString` satisfied at construction.
    pub const INVARIANTS: [Invariant<String>; 1] = [Invariant::new(
        "string must be non-empty",
        |s: &String| !s.is_empty(),
    )];

    /// Trusted construction.
    ///
    /// # Panics
    ///
    /// Panics if the string is empty.
    #[track_caller]
    pub fn new(value: impl Into<String>) -> Self {
        Self(InvariantHolder::new(value.into(), &Self::INVARIANTS))
    }

    /// Fallible construction for untrusted input.
    pub fn try_new(value: impl Into<String>) -> Result<Self, Violations> {
        InvariantHolder::try_new(value.into(), &Self::INVARIANTS).map(Self)
    }

    /// Fallible construction returning a [`Validation`].
    pub fn validate(value: impl Into<String>) -> Validation<Self, Violations> {
        InvariantHolder::validate(value.into(), &Self::INVARIANTS).map(Self)
    }

    /// Borrow as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.value()
    }

    /// Consume, returning the inner `String`.
    #[inline]
    pub fn into_inner(self) -> String {
        self.0.into_inner()
    }
}

impl Deref for NonEmptyString {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for NonEmptyString {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for NonEmptyString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<String> for NonEmptyString {
    type Error = Violations;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl TryFrom<&str> for NonEmptyString {
    type Error = Violations;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl FromStr for NonEmptyString {
    type Err = Violations;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_new(s)
    }
}

impl From<NonEmptyString> for String {
    fn from(value: NonEmptyString) -> Self {
        value.into_inner()
    }
}
