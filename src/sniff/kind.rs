use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::whitespace::trim;
use super::{is_array, is_bool, is_null, is_number, is_object, is_string};
use crate::error::SniffError;

/// The json kind a buffer appears to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
    Unknown,
}

impl ValueKind {
    pub const ALL: [ValueKind; 7] = [
        ValueKind::Null,
        ValueKind::Bool,
        ValueKind::Number,
        ValueKind::String,
        ValueKind::Array,
        ValueKind::Object,
        ValueKind::Unknown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
            ValueKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueKind {
    type Err = SniffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ValueKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SniffError::InvalidKind(s.to_string()))
    }
}

/// Classifies a buffer with the strictest predicate available for each kind.
///
/// Literals must match exactly and numbers must pass the full grammar walk;
/// strings, objects and arrays are judged by their delimiters alone.
pub fn classify(buf: &[u8]) -> ValueKind {
    if is_null(buf) {
        ValueKind::Null
    } else if is_bool(buf) {
        ValueKind::Bool
    } else if is_number(buf) {
        ValueKind::Number
    } else if is_string(buf) {
        ValueKind::String
    } else if is_object(buf) {
        ValueKind::Object
    } else if is_array(buf) {
        ValueKind::Array
    } else {
        ValueKind::Unknown
    }
}

/// Guesses the kind from the first non-whitespace byte. Cheap enough for
/// branching, but nothing past that byte is looked at.
pub fn dispatch(buf: &[u8]) -> ValueKind {
    match trim(buf).first() {
        Some(b'{') => ValueKind::Object,
        Some(b'[') => ValueKind::Array,
        Some(b'"') => ValueKind::String,
        Some(b't' | b'f') => ValueKind::Bool,
        Some(b'n') => ValueKind::Null,
        Some(b'-' | b'0'..=b'9') => ValueKind::Number,
        _ => ValueKind::Unknown,
    }
}
