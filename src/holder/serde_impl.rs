//! Serde support for invariant holders (feature-gated)
//!
//! A holder serializes as its inner value. There is no `Deserialize` here: a
//! bare `InvariantHolder<T>` does not know which invariants to check. The
//! refined types in [`crate::refined`] carry a fixed set and do deserialize.

use serde::{Serialize, Serializer};

use super::InvariantHolder;

impl<T: Serialize> Serialize for InvariantHolder<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Invariant;

    static SHORT: [Invariant<String>; 1] =
        [Invariant::new("text must be at most 8 bytes", |s: &String| s.len() <= 8)];

    #[test]
    fn test_serialize_is_transparent() {
        let h = InvariantHolder::new("short".to_string(), &SHORT);
        assert_eq!(serde_json::to_string(&h).unwrap(), r#""short""#);
    }
}
