//! Number sniffing.
//!
//! [`is_number`] walks the RFC 7159 number grammar byte by byte and only
//! succeeds when the token spans the whole buffer. [`looks_like_number`] is
//! the constant-time guess used to pick a branch before paying for that walk.

/// Reports whether the data is exactly one json number token, with nothing
/// before or after it (whitespace included).
///
/// An exponent marker followed by a sign must have something after the sign,
/// but the exponent digits themselves are consumed zero-or-more. This is
/// looser than the RFC; keep it as is.
pub fn is_number(buf: &[u8]) -> bool {
    let mut cursor = Cursor::new(buf);
    cursor.sign() && cursor.integer() && cursor.fraction() && cursor.exponent() && cursor.at_end()
}

/// Quick check on the first byte only: `-` or an ascii digit. Says nothing
/// about the rest of the data.
pub fn looks_like_number(buf: &[u8]) -> bool {
    matches!(buf.first(), Some(b'-' | b'0'..=b'9'))
}

/// Quick check on the first byte only: an opening double quote.
pub fn looks_like_string(buf: &[u8]) -> bool {
    buf.first() == Some(&b'"')
}

struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.buf.get(self.pos + offset).copied()
    }

    fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn at_end(&self) -> bool {
        self.pos == self.buf.len()
    }

    fn digits(&mut self) {
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
    }

    // Fails on empty input and on a lone minus.
    fn sign(&mut self) -> bool {
        if self.at_end() {
            return false;
        }
        if self.peek() == Some(b'-') {
            self.pos += 1;
            return !self.at_end();
        }
        true
    }

    // A zero stands alone; anything else starts with 1-9.
    fn integer(&mut self) -> bool {
        match self.peek() {
            Some(b'0') => {
                self.pos += 1;
                true
            }
            Some(b'1'..=b'9') => {
                self.pos += 1;
                self.digits();
                true
            }
            _ => false,
        }
    }

    // Optional. A dot is only taken when a digit follows it.
    fn fraction(&mut self) -> bool {
        if self.remaining() >= 2
            && self.peek() == Some(b'.')
            && matches!(self.peek_at(1), Some(b'0'..=b'9'))
        {
            self.pos += 1;
            self.digits();
        }
        true
    }

    // Optional. Needs at least the marker plus one more byte to be entered.
    fn exponent(&mut self) -> bool {
        if self.remaining() < 2 || !matches!(self.peek(), Some(b'e' | b'E')) {
            return true;
        }
        self.pos += 1;
        if matches!(self.peek(), Some(b'+' | b'-')) {
            self.pos += 1;
            if self.at_end() {
                return false;
            }
        }
        self.digits();
        true
    }
}
