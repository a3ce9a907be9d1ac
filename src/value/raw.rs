use std::borrow::Cow;
use std::fmt;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Error as _, Serialize, Serializer};
use serde_json::value::RawValue;

use crate::sniff::{self, ValueKind};

/// An undecoded json value held as raw bytes.
///
/// Decoding captures the text of the value verbatim so it can be inspected
/// with the sniffing predicates and decoded later (or never). Encoding writes
/// the bytes back out untouched; an empty buffer is written as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RawJson(Vec<u8>);

impl RawJson {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn null() -> Self {
        Self(sniff::NULL.to_vec())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Replaces the contents with a copy of `data`, reusing the allocation.
    pub fn set(&mut self, data: &[u8]) {
        self.0.clear();
        self.0.extend_from_slice(data);
    }

    pub fn is_object(&self) -> bool {
        sniff::is_object(&self.0)
    }

    pub fn is_empty_object(&self) -> bool {
        sniff::is_empty_object(&self.0)
    }

    /// Reports whether the data is a json array. It does not check whether
    /// the json is malformed.
    pub fn is_array(&self) -> bool {
        sniff::is_array(&self.0)
    }

    pub fn is_empty_array(&self) -> bool {
        sniff::is_empty_array(&self.0)
    }

    pub fn is_string(&self) -> bool {
        sniff::is_string(&self.0)
    }

    /// Full grammar check, see [`sniff::is_number`].
    pub fn is_number(&self) -> bool {
        sniff::is_number(&self.0)
    }

    /// First-byte guess, see [`sniff::looks_like_number`].
    pub fn looks_like_number(&self) -> bool {
        sniff::looks_like_number(&self.0)
    }

    pub fn looks_like_string(&self) -> bool {
        sniff::looks_like_string(&self.0)
    }

    pub fn is_null(&self) -> bool {
        sniff::is_null(&self.0)
    }

    pub fn is_true(&self) -> bool {
        sniff::is_true(&self.0)
    }

    pub fn is_false(&self) -> bool {
        sniff::is_false(&self.0)
    }

    pub fn is_bool(&self) -> bool {
        sniff::is_bool(&self.0)
    }

    /// Reports whether the data contains a `\` anywhere.
    pub fn contains_escape(&self) -> bool {
        sniff::contains_escape(&self.0)
    }

    /// The data with one pair of surrounding quotes removed. Escapes are not
    /// decoded and invalid utf-8 is replaced.
    pub fn unquoted(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(sniff::unquote(&self.0))
    }

    pub fn kind(&self) -> ValueKind {
        sniff::classify(&self.0)
    }
}

impl AsRef<[u8]> for RawJson {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq<[u8]> for RawJson {
    fn eq(&self, other: &[u8]) -> bool {
        self.0 == other
    }
}

impl PartialEq<&[u8]> for RawJson {
    fn eq(&self, other: &&[u8]) -> bool {
        self.0 == *other
    }
}

impl From<Vec<u8>> for RawJson {
    fn from(data: Vec<u8>) -> Self {
        Self(data)
    }
}

impl From<&[u8]> for RawJson {
    fn from(data: &[u8]) -> Self {
        Self(data.to_vec())
    }
}

impl From<String> for RawJson {
    fn from(data: String) -> Self {
        Self(data.into_bytes())
    }
}

impl From<&str> for RawJson {
    fn from(data: &str) -> Self {
        Self(data.as_bytes().to_vec())
    }
}

impl From<RawJson> for Vec<u8> {
    fn from(raw: RawJson) -> Self {
        raw.0
    }
}

impl fmt::Display for RawJson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

impl Serialize for RawJson {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.is_empty() {
            return serializer.serialize_unit();
        }
        let text = std::str::from_utf8(&self.0).map_err(S::Error::custom)?;
        let raw: &RawValue = serde_json::from_str(text).map_err(S::Error::custom)?;
        raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RawJson {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        Ok(Self(raw.get().as_bytes().to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_serializes_as_null() {
        assert_eq!(serde_json::to_string(&RawJson::new()).unwrap(), "null");
        assert_eq!(serde_json::to_string(&RawJson::null()).unwrap(), "null");
    }

    #[test]
    fn test_serializes_verbatim() {
        let raw = RawJson::from(r#"{"b":2,"a":[1,2]}"#);
        assert_eq!(serde_json::to_string(&raw).unwrap(), r#"{"b":2,"a":[1,2]}"#);
    }

    #[test]
    fn test_serialize_rejects_garbage() {
        assert!(serde_json::to_string(&RawJson::from("{oops")).is_err());
        assert!(serde_json::to_string(&RawJson::from(vec![0xffu8, 0xfe])).is_err());
    }

    #[test]
    fn test_deserialize_captures_text() {
        let raw: RawJson = serde_json::from_str(r#" {"v": "value"} "#).unwrap();
        assert_eq!(raw.as_bytes(), br#"{"v": "value"}"#);
        assert!(raw.is_object());
    }

    #[test]
    fn test_deserialize_null_is_not_empty() {
        let raw: RawJson = serde_json::from_str("null").unwrap();
        assert!(raw.is_null());
        assert!(!raw.is_empty());
    }

    #[test]
    fn test_set_replaces_contents() {
        let mut raw = RawJson::from("[1,2,3]");
        raw.set(b"{}");
        assert_eq!(raw, b"{}".as_slice());
        assert!(raw.is_empty_object());
        assert!(!raw.is_array());
    }

    #[test]
    fn test_predicates_delegate() {
        let raw = RawJson::from("-12.5e+3");
        assert!(raw.is_number());
        assert!(raw.looks_like_number());
        assert_eq!(raw.kind(), ValueKind::Number);

        let raw = RawJson::from("-12.5e+");
        assert!(!raw.is_number());
        assert!(raw.looks_like_number());
        assert_eq!(raw.kind(), ValueKind::Unknown);
    }

    #[test]
    fn test_string_helpers() {
        let raw = RawJson::from(r#""line\nbreak""#);
        assert!(raw.is_string());
        assert!(raw.looks_like_string());
        assert!(raw.contains_escape());
        assert_eq!(raw.unquoted(), r"line\nbreak");
        assert_eq!(RawJson::from("abc").unquoted(), "abc");
    }

    #[test]
    fn test_bool_helpers() {
        assert!(RawJson::from("true").is_bool());
        assert!(RawJson::from("false").is_false());
        assert!(!RawJson::from("null").is_bool());
        for text in ["true", "false", " true", "tree", ""] {
            let raw = RawJson::from(text);
            assert_eq!(raw.is_bool(), sniff::is_bool(text.as_bytes()));
        }
    }
}
