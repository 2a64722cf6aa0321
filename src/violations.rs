//! The failure produced by fallible construction

use std::slice;

use crate::Semigroup;

/// The invariants a candidate value violated, in declaration order.
///
/// A `Violations` is never empty: it only exists when at least one
/// invariant failed.
///
/// # Example
///
/// ```rust
/// use invar::PositiveInt;
///
/// let err = PositiveInt::try_new(-5).unwrap_err();
/// assert_eq!(err.names(), &["number must be positive"]);
/// assert_eq!(err.to_string(), "invariants violated: number must be positive");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("invariants violated: {}", .names.join("; "))]
pub struct Violations {
    names: Vec<&'static str>,
}

impl Violations {
    /// Wrap a list of violated names, or `None` if nothing was violated.
    pub(crate) fn from_names(names: Vec<&'static str>) -> Option<Self> {
        if names.is_empty() {
            None
        } else {
            Some(Self { names })
        }
    }

    /// Names of the violated invariants, in declaration order.
    #[inline]
    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    /// Number of violated invariants. Always >= 1.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always `false`; present to pair with [`len`](Self::len).
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The first violated invariant in declaration order.
    pub fn first(&self) -> &'static str {
        self.names[0]
    }

    /// Whether the invariant with this name was violated.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| *n == name)
    }

    /// Iterate over the violated names.
    pub fn iter(&self) -> slice::Iter<'_, &'static str> {
        self.names.iter()
    }

    /// Consume into the underlying list of names.
    pub fn into_names(self) -> Vec<&'static str> {
        self.names
    }
}

impl Semigroup for Violations {
    fn combine(mut self, other: Self) -> Self {
        self.names.extend(other.names);
        self
    }
}

impl IntoIterator for Violations {
    type Item = &'static str;
    type IntoIter = std::vec::IntoIter<&'static str>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a &'static str;
    type IntoIter = slice::Iter<'a, &'static str>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}
