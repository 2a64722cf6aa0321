//! The invariant holder: the single way a refined value comes into existence
//!
//! [`InvariantHolder<T>`] wraps a value of type `T` that satisfied an
//! [`InvariantSet<T>`] when it was constructed. Its field is private and it
//! exposes no mutator, so the guarantee lasts for the holder's lifetime.
//!
//! There are two constructors with different contracts:
//!
//! | Constructor | Input | On violation |
//! |-------------|-------|--------------|
//! | [`InvariantHolder::new`] | known valid (literals, already-checked data) | panics, naming every violated invariant |
//! | [`InvariantHolder::try_new`] | untrusted | returns [`Violations`] naming every violated invariant |
//!
//! # Example
//!
//! ```rust
//! use invar::{Invariant, InvariantHolder};
//!
//! static PERCENT: [Invariant<u8>; 1] = [
//!     Invariant::new("percentage must be at most 100", |p: &u8| *p <= 100),
//! ];
//!
//! // Trusted: a literal we can see is valid.
//! let full = InvariantHolder::new(100, &PERCENT);
//! assert_eq!(*full.value(), 100);
//!
//! // Untrusted: report instead of panicking.
//! let parsed: u8 = "250".parse().unwrap();
//! let err = InvariantHolder::try_new(parsed, &PERCENT).unwrap_err();
//! assert_eq!(err.names(), &["percentage must be at most 100"]);
//! ```

#[cfg(feature = "serde")]
mod serde_impl;
mod validation;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::invariant::{self, InvariantSet};
use crate::violations::Violations;

pub use validation::{FieldError, ValidationFieldExt};

/// A value of type `T` that satisfied a set of invariants at construction.
///
/// Only [`new`](Self::new), [`try_new`](Self::try_new) and
/// [`validate`](Self::validate) produce a holder. Read access goes through
/// [`value`](Self::value), [`into_inner`](Self::into_inner), `Deref` and
/// `AsRef`; there is no `DerefMut` or setter.
///
/// Equality, ordering, hashing and `Display` delegate to the wrapped value.
///
/// The field cannot be assigned from outside the crate:
///
/// ```compile_fail
/// use invar::{Invariant, InvariantHolder};
///
/// static POSITIVE: [Invariant<i32>; 1] = [Invariant::new("must be positive", |v: &i32| *v > 0)];
///
/// let mut h = InvariantHolder::new(1, &POSITIVE);
/// h.value = 0;
/// ```
///
/// nor set in a struct literal, which would skip the invariants entirely:
///
/// ```compile_fail
/// use invar::InvariantHolder;
///
/// let h = InvariantHolder { value: 0 };
/// ```
///
/// and `Deref` gives shared access only:
///
/// ```compile_fail
/// use invar::{Invariant, InvariantHolder};
///
/// static POSITIVE: [Invariant<i32>; 1] = [Invariant::new("must be positive", |v: &i32| *v > 0)];
///
/// let mut h = InvariantHolder::new(1, &POSITIVE);
/// *h = 0;
/// ```
///
/// Refined types keep their holder private too, so a holder built against
/// some other set cannot be passed off as one:
///
/// ```compile_fail
/// use invar::{InvariantHolder, NonEmptyVec};
///
/// let v: NonEmptyVec<i32> = NonEmptyVec(InvariantHolder::new(vec![], &[]));
/// ```
pub struct InvariantHolder<T> {
    value: T,
}

impl<T> InvariantHolder<T> {
    /// Construct a holder from a value that is known to satisfy `invariants`.
    ///
    /// Every invariant is evaluated. Use this only where validity follows from
    /// the code itself; untrusted input belongs in [`try_new`](Self::try_new).
    ///
    /// # Panics
    ///
    /// Panics if any invariant is violated. The message lists every violated
    /// invariant in declaration order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use invar::{Invariant, InvariantHolder};
    ///
    /// static NON_ZERO: [Invariant<u32>; 1] = [Invariant::new("must be non-zero", |n: &u32| *n != 0)];
    ///
    /// let one = InvariantHolder::new(1, &NON_ZERO);
    /// assert_eq!(one.into_inner(), 1);
    /// ```
    ///
    /// ```should_panic
    /// use invar::{Invariant, InvariantHolder};
    ///
    /// static NON_ZERO: [Invariant<u32>; 1] = [Invariant::new("must be non-zero", |n: &u32| *n != 0)];
    ///
    /// InvariantHolder::new(0, &NON_ZERO); // panics: invariants violated: must be non-zero
    /// ```
    #[track_caller]
    pub fn new(value: T, invariants: &InvariantSet<T>) -> Self {
        if let Err(violations) = invariant::check_all(invariants, &value) {
            #[cfg(feature = "tracing")]
            tracing::error!(
                violated = %violations,
                "trusted construction of {} violated its invariants",
                std::any::type_name::<T>()
            );
            panic!("{}", violations);
        }
        Self { value }
    }

    /// Construct a holder from untrusted input.
    ///
    /// Every invariant is evaluated; on failure the returned [`Violations`]
    /// names all of the violated invariants in declaration order. Never
    /// panics.
    ///
    /// # Example
    ///
    /// ```rust
    /// use invar::{Invariant, InvariantHolder};
    ///
    /// static CODE: [Invariant<String>; 2] = [
    ///     Invariant::new("code must be 3 characters", |s: &String| s.chars().count() == 3),
    ///     Invariant::new("code must be uppercase", |s: &String| {
    ///         s.chars().all(|c| c.is_ascii_uppercase())
    ///     }),
    /// ];
    ///
    /// assert!(InvariantHolder::try_new("EUR".to_string(), &CODE).is_ok());
    ///
    /// let err = InvariantHolder::try_new("euro".to_string(), &CODE).unwrap_err();
    /// assert_eq!(err.names(), &["code must be 3 characters", "code must be uppercase"]);
    /// ```
    pub fn try_new(value: T, invariants: &InvariantSet<T>) -> Result<Self, Violations> {
        match invariant::check_all(invariants, &value) {
            Ok(()) => Ok(Self { value }),
            Err(violations) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    violated = %violations,
                    "rejected candidate for {}",
                    std::any::type_name::<T>()
                );
                Err(violations)
            }
        }
    }

    /// Get a reference to the validated value.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consume the holder, returning the validated value.
    ///
    /// The result is a plain `T`; the guarantee does not travel with it.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: fmt::Debug> fmt::Debug for InvariantHolder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvariantHolder")
            .field("value", &self.value)
            .finish()
    }
}

// A clone of a valid value satisfies the same invariants.
impl<T: Clone> Clone for InvariantHolder<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
        }
    }
}

impl<T: Copy> Copy for InvariantHolder<T> {}

impl<T: PartialEq> PartialEq for InvariantHolder<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for InvariantHolder<T> {}

impl<T: PartialOrd> PartialOrd for InvariantHolder<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord> Ord for InvariantHolder<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: Hash> Hash for InvariantHolder<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> AsRef<T> for InvariantHolder<T> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T> std::ops::Deref for InvariantHolder<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T: fmt::Display> fmt::Display for InvariantHolder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}
