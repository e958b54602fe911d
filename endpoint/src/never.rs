//! The uninhabited [`Never`] type

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

/// Message of the error returned when decoding a [`Never`]
pub const NEVER_DECODE_MESSAGE: &str = "Never values cannot be decoded.";

/// Body or response type of endpoints that have none.
///
/// No value of this type exists, so it never gets encoded and decoding always fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Never {}

impl Serialize for Never {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> { match *self {} }
}

impl<'de> Deserialize<'de> for Never {
    fn deserialize<D: Deserializer<'de>>(_deserializer: D) -> Result<Self, D::Error> {
        Err(de::Error::custom(NEVER_DECODE_MESSAGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoding_fails() {
        for input in ["null", "{}", "[]", "\"value\"", "0"] {
            let error = serde_json::from_str::<Never>(input).err();
            assert!(
                error.is_some_and(|error| error.to_string().contains(NEVER_DECODE_MESSAGE)),
                "decoding {input} should fail"
            );
        }
    }

    #[test]
    fn test_optional_never_is_none() {
        let value: Option<Never> = None;
        assert_eq!(serde_json::to_string(&value).ok().as_deref(), Some("null"));
    }
}
