use super::whitespace::{leading_space_len, trim};

/// Reports whether the data looks like a json object. Only the first and last
/// non-whitespace bytes are checked; brackets are not balanced and members are
/// not validated, so malformed json can be a false positive.
pub fn is_object(buf: &[u8]) -> bool {
    starts_and_ends_with(trim(buf), b'{', b'}')
}

/// Reports whether the data looks like a json array. It does not check whether
/// the json is malformed.
pub fn is_array(buf: &[u8]) -> bool {
    starts_and_ends_with(trim(buf), b'[', b']')
}

/// Reports whether the data looks like a quoted json string. Interior quotes
/// and escapes are not inspected.
pub fn is_string(buf: &[u8]) -> bool {
    starts_and_ends_with(trim(buf), b'"', b'"')
}

/// Object with nothing but whitespace between the braces.
pub fn is_empty_object(buf: &[u8]) -> bool {
    is_object(buf) && holds_only_delimiters(buf)
}

/// Array with nothing but whitespace between the brackets.
pub fn is_empty_array(buf: &[u8]) -> bool {
    is_array(buf) && holds_only_delimiters(buf)
}

fn starts_and_ends_with(buf: &[u8], start: u8, end: u8) -> bool {
    if buf.len() < 2 {
        return false;
    }
    buf[0] == start && buf[buf.len() - 1] == end
}

// Counts non-whitespace bytes, bailing out as soon as a third one shows up.
// The delimiters themselves are checked by the caller.
fn holds_only_delimiters(buf: &[u8]) -> bool {
    let mut count = 0;
    let mut pos = 0;
    while pos < buf.len() {
        let space = leading_space_len(&buf[pos..]);
        if space > 0 {
            pos += space;
            continue;
        }
        count += 1;
        if count > 2 {
            return false;
        }
        pos += 1;
    }
    count == 2
}
