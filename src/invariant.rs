//! Named invariants and invariant sets
//!
//! An [`Invariant<T>`] pairs a human-readable name with a pure predicate over
//! `T`. The name is what a caller sees when the predicate rejects a value, so
//! it should read as the requirement itself ("number must be positive").
//!
//! An [`InvariantSet<T>`] is an ordered slice of invariants. The order only
//! matters for diagnostics: every invariant is evaluated against every
//! candidate, so a failure always names all of the violated invariants.
//!
//! # Example
//!
//! ```rust
//! use invar::invariant::{self, Invariant};
//!
//! static PORT: [Invariant<u32>; 2] = [
//!     Invariant::new("port must be non-zero", |p: &u32| *p != 0),
//!     Invariant::new("port must fit in 16 bits", |p: &u32| *p <= u16::MAX as u32),
//! ];
//!
//! assert!(invariant::violations(&PORT, &8080).is_empty());
//! assert_eq!(invariant::violations(&PORT, &70_000), vec!["port must fit in 16 bits"]);
//! ```

use std::fmt;

use crate::violations::Violations;

/// An ordered collection of invariants that together define a refined type.
///
/// Refined types declare their set as an associated `INVARIANTS` constant;
/// ad-hoc sets can be `static` arrays or any other slice.
pub type InvariantSet<T> = [Invariant<T>];

/// A named predicate that a value must satisfy.
///
/// Invariants are plain data: a `&'static str` and a function pointer. They
/// are `Copy`, `Send` and `Sync` for any `T`, so a set can be shared freely.
///
/// The predicate must be pure. Nothing enforces this at runtime.
pub struct Invariant<T: ?Sized> {
    name: &'static str,
    predicate: fn(&T) -> bool,
}

impl<T: ?Sized> Invariant<T> {
    /// Create an invariant from a name and a predicate.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty. In a `static` or `const` initializer this
    /// is reported at compile time.
    ///
    /// # Example
    ///
    /// ```rust
    /// use invar::Invariant;
    ///
    /// const EVEN: Invariant<i32> = Invariant::new("value must be even", |v: &i32| v % 2 == 0);
    /// assert!(EVEN.holds(&4));
    /// ```
    pub const fn new(name: &'static str, predicate: fn(&T) -> bool) -> Self {
        assert!(!name.is_empty(), "invariant name must not be empty");
        Self { name, predicate }
    }

    /// The human-readable requirement this invariant asserts.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Evaluate the predicate.
    ///
    /// Returns `Err(name)` when the value violates the invariant.
    ///
    /// # Example
    ///
    /// ```rust
    /// use invar::Invariant;
    ///
    /// let positive = Invariant::new("number must be positive", |n: &i64| *n > 0);
    /// assert_eq!(positive.check(&3), Ok(()));
    /// assert_eq!(positive.check(&-3), Err("number must be positive"));
    /// ```
    #[inline]
    pub fn check(&self, value: &T) -> Result<(), &'static str> {
        if (self.predicate)(value) {
            Ok(())
        } else {
            Err(self.name)
        }
    }

    /// Whether the value satisfies this invariant.
    #[inline]
    pub fn holds(&self, value: &T) -> bool {
        (self.predicate)(value)
    }
}

impl<T: ?Sized> Clone for Invariant<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Invariant<T> {}

impl<T: ?Sized> fmt::Debug for Invariant<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Invariant")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Evaluate every invariant against `value` and collect the names of those
/// that were violated, in declaration order.
///
/// Evaluation never short-circuits: an empty result means every invariant
/// holds.
pub fn violations<T: ?Sized>(invariants: &[Invariant<T>], value: &T) -> Vec<&'static str> {
    invariants
        .iter()
        .filter_map(|invariant| invariant.check(value).err())
        .collect()
}

/// Evaluate every invariant against `value`.
///
/// Returns `Err` carrying all violated names when at least one invariant
/// fails.
///
/// # Example
///
/// ```rust
/// use invar::invariant::{check_all, Invariant};
///
/// static SHORT_WORD: [Invariant<str>; 2] = [
///     Invariant::new("word must be non-empty", |s: &str| !s.is_empty()),
///     Invariant::new("word must be alphabetic", |s: &str| s.chars().all(char::is_alphabetic)),
/// ];
///
/// assert!(check_all(&SHORT_WORD, "hello").is_ok());
///
/// let err = check_all(&SHORT_WORD, "42").unwrap_err();
/// assert_eq!(err.names(), &["word must be alphabetic"]);
/// ```
pub fn check_all<T: ?Sized>(invariants: &[Invariant<T>], value: &T) -> Result<(), Violations> {
    match Violations::from_names(violations(invariants, value)) {
        None => Ok(()),
        Some(violations) => Err(violations),
    }
}
