//! Ready-made refined types
//!
//! Each type here is a newtype over an [`InvariantHolder`] bound to one fixed
//! invariant set, exposed as an associated `INVARIANTS` constant:
//!
//! | Type | Wraps | Invariant |
//! |------|-------|-----------|
//! | [`NonEmptyVec<T>`] | `Vec<T>` | `"slice must be non-empty"` |
//! | [`NonEmptyString`] | `String` | `"string must be non-empty"` |
//! | [`NonNullRef<'a, T>`] | `Option<&'a T>` | `"pointer must not be nil"` |
//! | [`PositiveInt`] | `i64` | `"number must be positive"` |
//!
//! Every type has the same construction surface: `new` (trusted, panics on
//! violation), `try_new` (returns [`Violations`]) and `validate` (returns a
//! [`Validation`]). A new refined type follows the same shape: declare the
//! set, wrap an `InvariantHolder`, forward the three constructors.
//!
//! # Example
//!
//! ```rust
//! use invar::refined::{NonEmptyString, NonEmptyVec, NonNullRef, PositiveInt};
//!
//! let name = NonEmptyString::try_new("Alice").unwrap();
//! let scores = NonEmptyVec::try_new(vec![90, 75]).unwrap();
//! let best = NonNullRef::try_new(scores.iter().max()).unwrap();
//! let age = PositiveInt::try_new(30).unwrap();
//!
//! assert_eq!(name.as_str(), "Alice");
//! assert_eq!(*scores.first(), 90);
//! assert_eq!(*best, 90);
//! assert_eq!(age.get(), 30);
//! ```
//!
//! [`InvariantHolder`]: crate::InvariantHolder
//! [`Violations`]: crate::Violations
//! [`Validation`]: crate::Validation

mod collection;
mod numeric;
mod reference;
#[cfg(feature = "serde")]
mod serde_impl;
mod string;

pub use collection::NonEmptyVec;
pub use numeric::PositiveInt;
pub use reference::NonNullRef;
pub use string::NonEmptyString;
