pub const NULL: &[u8] = b"null";
pub const TRUE: &[u8] = b"true";
pub const FALSE: &[u8] = b"false";

/// Exact match against `null`. Surrounding whitespace is not trimmed.
pub fn is_null(buf: &[u8]) -> bool {
    buf == NULL
}

/// Reports whether the data is exactly the literal `true`.
pub fn is_true(buf: &[u8]) -> bool {
    buf == TRUE
}

/// Reports whether the data is exactly the literal `false`.
pub fn is_false(buf: &[u8]) -> bool {
    buf == FALSE
}

pub fn is_bool(buf: &[u8]) -> bool {
    is_true(buf) || is_false(buf)
}

/// Reports whether the data contains a backslash anywhere.
pub fn contains_escape(buf: &[u8]) -> bool {
    buf.contains(&b'\\')
}

/// Strips one pair of surrounding double quotes. Escapes are left untouched,
/// and anything not wrapped in quotes comes back as is.
pub fn unquote(buf: &[u8]) -> &[u8] {
    match buf {
        [b'"', inner @ .., b'"'] => inner,
        _ => buf,
    }
}
