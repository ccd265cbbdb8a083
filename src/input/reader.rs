use std::io::BufRead;

use crate::error::Result;

/// Reads delimiter-terminated UTF-8 lines, one performance data batch per
/// line. The delimiter (and a `\r` before a `\n` delimiter) is stripped.
pub struct LineReader<R> {
    inner: R,
    delim: u8,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            delim: b'\n',
        }
    }

    pub fn with_delimiter(inner: R, delim: u8) -> Self {
        Self { inner, delim }
    }
}

impl<R: BufRead> std::iter::Iterator for LineReader<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut buf = Vec::new();
        match self.inner.read_until(self.delim, &mut buf) {
            Ok(0) => None, // EOF
            Ok(_) => {
                if buf.last() == Some(&self.delim) {
                    buf.pop();
                    if self.delim == b'\n' && buf.last() == Some(&b'\r') {
                        buf.pop();
                    }
                }
                Some(
                    String::from_utf8(buf)
                        .map_err(|e| ("couldn't decode UTF-8 input line", e).into()),
                )
            }
            Err(e) => Some(Err(("input reader failed", e).into())),
        }
    }
}
