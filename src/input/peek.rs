use std::io::{self, BufRead, BufReader, Read};

/// A reader that can peek ahead without consuming bytes
pub struct PeekableReader<R: Read> {
    inner: R,
    buffer: Vec<u8>,
    pos: usize,
}

impl<R: Read> PeekableReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buffer: Vec::new(),
            pos: 0,
        }
    }

    /// Buffers up to `n` bytes and returns them. Short reads are retried until
    /// `n` bytes are held or the input ends.
    pub fn peek(&mut self, n: usize) -> io::Result<&[u8]> {
        while self.buffer.len() < n {
            let mut buf = vec![0u8; n - self.buffer.len()];
            let read = match self.inner.read(&mut buf) {
                Ok(read) => read,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if read == 0 {
                break;
            }
            self.buffer.extend_from_slice(&buf[..read]);
        }
        Ok(&self.buffer[self.pos..])
    }

    /// Newline separated records, peeked bytes first. A trailing `\r` is
    /// dropped from each record.
    pub fn records(self) -> impl Iterator<Item = io::Result<Vec<u8>>> {
        let pending = self.buffer[self.pos..].to_vec();
        let chained = io::Cursor::new(pending).chain(self.inner);
        BufReader::new(chained).split(b'\n').map(|record| {
            record.map(|mut bytes| {
                if bytes.last() == Some(&b'\r') {
                    bytes.pop();
                }
                bytes
            })
        })
    }
}

impl<R: Read> Read for PeekableReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        // Drain peeked bytes before touching the inner reader
        if self.pos < self.buffer.len() {
            let remaining = &self.buffer[self.pos..];
            let to_copy = std::cmp::min(remaining.len(), buf.len());
            buf[..to_copy].copy_from_slice(&remaining[..to_copy]);
            self.pos += to_copy;
            return Ok(to_copy);
        }
        self.inner.read(buf)
    }
}
