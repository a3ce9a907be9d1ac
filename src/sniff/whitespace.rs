//! Whitespace handling over raw bytes.
//!
//! Buffers are not required to be valid UTF-8, so whitespace is recognised one
//! encoded character at a time: an ASCII byte is checked directly, a multi-byte
//! sequence only counts when it decodes cleanly to a Unicode whitespace char.

/// Byte length of the whitespace character at the start of `buf`, or 0.
pub(crate) fn leading_space_len(buf: &[u8]) -> usize {
    let Some(&first) = buf.first() else {
        return 0;
    };
    if first.is_ascii() {
        return usize::from((first as char).is_whitespace());
    }
    let width = match first {
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => return 0,
    };
    match buf.get(..width) {
        Some(seq) if decodes_to_space(seq) => width,
        _ => 0,
    }
}

/// Byte length of the whitespace character at the end of `buf`, or 0.
pub(crate) fn trailing_space_len(buf: &[u8]) -> usize {
    let Some(&last) = buf.last() else {
        return 0;
    };
    if last.is_ascii() {
        return usize::from((last as char).is_whitespace());
    }
    for width in 2..=buf.len().min(4) {
        let start = buf.len() - width;
        if buf[start] & 0xC0 != 0x80 {
            return if decodes_to_space(&buf[start..]) { width } else { 0 };
        }
    }
    0
}

fn decodes_to_space(seq: &[u8]) -> bool {
    let Ok(s) = std::str::from_utf8(seq) else {
        return false;
    };
    let mut chars = s.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_whitespace())
}

/// Strips leading and trailing whitespace.
pub fn trim(buf: &[u8]) -> &[u8] {
    let mut rest = buf;
    loop {
        let n = leading_space_len(rest);
        if n == 0 {
            break;
        }
        rest = &rest[n..];
    }
    loop {
        let n = trailing_space_len(rest);
        if n == 0 {
            break;
        }
        rest = &rest[..rest.len() - n];
    }
    rest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_ascii_whitespace() {
        assert_eq!(trim(b" \t\r\n{}\x0b\x0c "), b"{}");
    }

    #[test]
    fn test_trim_all_whitespace() {
        assert_eq!(trim(b" \n\t "), b"");
        assert_eq!(trim(b""), b"");
    }

    #[test]
    fn test_trim_unicode_whitespace() {
        // NBSP, ideographic space, next line
        let input = "\u{a0}\u{3000}[1]\u{85}\u{2028}";
        assert_eq!(trim(input.as_bytes()), b"[1]");
    }

    #[test]
    fn test_trim_keeps_non_space_multibyte() {
        let input = "é{}é";
        assert_eq!(trim(input.as_bytes()), input.as_bytes());
    }

    #[test]
    fn test_trim_stray_continuation_bytes() {
        // 0xA0 alone is not a valid character even though U+00A0 is a space
        assert_eq!(trim(b"\xa0{}\xa0"), b"\xa0{}\xa0");
        assert_eq!(trim(b"\x80\x80\x80\x80\x80"), b"\x80\x80\x80\x80\x80");
    }

    #[test]
    fn test_control_separators_are_not_space() {
        assert_eq!(leading_space_len(b"\x1c"), 0);
        assert_eq!(trailing_space_len(b"\x1f"), 0);
    }

    #[test]
    fn test_truncated_sequence() {
        // first two bytes of U+3000
        assert_eq!(leading_space_len(b"\xe3\x80"), 0);
        assert_eq!(trailing_space_len(b"\xe3\x80"), 0);
    }
}
