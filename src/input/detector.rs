use crate::sniff::{dispatch, ValueKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    JsonLines,
    JsonArray,
}

/// Detects the likely input format based on the first few non-whitespace bytes.
/// This is a lightweight "sniffing" operation and does not perform full validation.
/// Returns None if the input is empty or doesn't start with a valid JSON character.
pub fn sniff_format(peek: &[u8]) -> Option<InputFormat> {
    match dispatch(peek) {
        ValueKind::Array => Some(InputFormat::JsonArray),
        ValueKind::Unknown => None,
        // Any other value start is assumed to be the first of many lines
        _ => Some(InputFormat::JsonLines),
    }
}
