//! Serde support for the shipped refined types (feature-gated)
//!
//! Each type serializes as its inner value. Deserializing reads the raw value
//! and runs `try_new`, so invalid input fails with the violated invariant
//! names. [`NonNullRef`] borrows its referent and only serializes.
//!
//! # Example
//!
//! ```rust,ignore
//! use serde::{Deserialize, Serialize};
//! use invar::{NonEmptyString, PositiveInt};
//!
//! #[derive(Serialize, Deserialize)]
//! struct User {
//!     name: NonEmptyString,  // validated on deserialize
//!     age: PositiveInt,      // validated on deserialize
//! }
//!
//! let bad_json = r#"{"name": "", "age": 25}"#;
//! let result: Result<User, _> = serde_json::from_str(bad_json);
//! assert!(result.is_err());
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{NonEmptyString, NonEmptyVec, NonNullRef, PositiveInt};

impl Serialize for NonEmptyString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_str().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NonEmptyString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        NonEmptyString::try_new(value).map_err(serde::de::Error::custom)
    }
}

impl<T: Serialize> Serialize for NonEmptyVec<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_slice().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for NonEmptyVec<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Vec::<T>::deserialize(deserializer)?;
        NonEmptyVec::try_new(value).map_err(serde::de::Error::custom)
    }
}

impl Serialize for PositiveInt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.get().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PositiveInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = i64::deserialize(deserializer)?;
        PositiveInt::try_new(value).map_err(serde::de::Error::custom)
    }
}

impl<T: Serialize> Serialize for NonNullRef<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.get().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Team {
        name: NonEmptyString,
        size: PositiveInt,
        members: NonEmptyVec<String>,
    }

    #[test]
    fn test_serialize() {
        let team = Team {
            name: NonEmptyString::new("core"),
            size: PositiveInt::new(2),
            members: NonEmptyVec::new(vec!["ann".to_string(), "bo".to_string()]),
        };

        let json = serde_json::to_string(&team).unwrap();
        assert_eq!(json, r#"{"name":"core","size":2,"members":["ann","bo"]}"#);
    }

    #[test]
    fn test_deserialize_success() {
        let json = r#"{"name":"core","size":1,"members":["ann"]}"#;
        let team: Team = serde_json::from_str(json).unwrap();
        assert_eq!(team.name.as_str(), "core");
        assert_eq!(team.size.get(), 1);
        assert_eq!(team.members.first(), "ann");
    }

    #[test]
    fn test_deserialize_empty_name_fails() {
        let json = r#"{"name":"","size":1,"members":["ann"]}"#;
        let err = serde_json::from_str::<Team>(json).unwrap_err().to_string();
        assert!(err.contains("string must be non-empty"));
    }

    #[test]
    fn test_deserialize_zero_size_fails() {
        let json = r#"{"name":"core","size":0,"members":["ann"]}"#;
        let err = serde_json::from_str::<Team>(json).unwrap_err().to_string();
        assert!(err.contains("number must be positive"));
    }

    #[test]
    fn test_deserialize_empty_members_fails() {
        let json = r#"{"name":"core","size":1,"members":[]}"#;
        let err = serde_json::from_str::<Team>(json).unwrap_err().to_string();
        assert!(err.contains("slice must be non-empty"));
    }

    #[test]
    fn test_serialize_non_null_ref() {
        let n = 42;
        let r = NonNullRef::new(Some(&n));
        assert_eq!(serde_json::to_string(&r).unwrap(), "42");
    }
}
