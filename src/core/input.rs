use std::io::{self, BufRead};

/// Reads whitespace-separated tokens from a line-oriented source, one line
/// at a time, so the unread rest of a line can be thrown away after bad input.
pub struct TokenReader<R> {
    inner: R,
    line: String,
    pos: usize,
    raw: Vec<u8>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            line: String::new(),
            pos: 0,
            raw: Vec::new(),
        }
    }

    /// Returns the next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        if !self.skip_whitespace()? {
            return Ok(None);
        }

        let rest = &self.line[self.pos..];
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let token = rest[..end].to_string();
        self.pos += end;
        Ok(Some(token))
    }

    /// Returns the next non-whitespace character, leaving whatever follows it
    /// on the line for the next read.
    pub fn next_char(&mut self) -> io::Result<Option<char>> {
        if !self.skip_whitespace()? {
            return Ok(None);
        }

        let c = self.line[self.pos..].chars().next();
        if let Some(c) = c {
            self.pos += c.len_utf8();
        }
        Ok(c)
    }

    /// Drops everything left on the current line.
    pub fn discard_line(&mut self) {
        self.line.clear();
        self.pos = 0;
    }

    // Advances to the next non-whitespace character, pulling in new lines as
    // needed. Returns false at end of input. Invalid UTF-8 becomes U+FFFD so
    // it surfaces as a malformed token rather than an I/O error.
    fn skip_whitespace(&mut self) -> io::Result<bool> {
        loop {
            let rest = &self.line[self.pos..];
            self.pos += rest.len() - rest.trim_start().len();
            if self.pos < self.line.len() {
                return Ok(true);
            }

            self.discard_line();
            self.raw.clear();
            if self.inner.read_until(b'\n', &mut self.raw)? == 0 {
                return Ok(false);
            }
            self.line.push_str(&String::from_utf8_lossy(&self.raw));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(input: &str) -> TokenReader<Cursor<Vec<u8>>> {
        TokenReader::new(Cursor::new(input.as_bytes().to_vec()))
    }

    #[test]
    fn test_tokens_span_lines() {
        let mut r = reader("  1 5\n\n\t+ 3  \n");
        assert_eq!(r.next_token().unwrap().as_deref(), Some("1"));
        assert_eq!(r.next_token().unwrap().as_deref(), Some("5"));
        assert_eq!(r.next_token().unwrap().as_deref(), Some("+"));
        assert_eq!(r.next_token().unwrap().as_deref(), Some("3"));
        assert_eq!(r.next_token().unwrap(), None);
    }

    #[test]
    fn test_next_char_leaves_rest_of_token() {
        let mut r = reader(" +3\n");
        assert_eq!(r.next_char().unwrap(), Some('+'));
        assert_eq!(r.next_token().unwrap().as_deref(), Some("3"));
    }

    #[test]
    fn test_next_char_handles_multibyte() {
        let mut r = reader("÷ 2");
        assert_eq!(r.next_char().unwrap(), Some('÷'));
        assert_eq!(r.next_token().unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_discard_line() {
        let mut r = reader("abc def ghi\n0\n");
        assert_eq!(r.next_token().unwrap().as_deref(), Some("abc"));
        r.discard_line();
        assert_eq!(r.next_token().unwrap().as_deref(), Some("0"));
    }

    #[test]
    fn test_invalid_utf8_is_a_token() {
        let mut r = TokenReader::new(Cursor::new(b"\xff\xfe 7\n1\n".to_vec()));
        assert_eq!(r.next_token().unwrap().as_deref(), Some("\u{fffd}\u{fffd}"));
        r.discard_line();
        assert_eq!(r.next_token().unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn test_missing_trailing_newline() {
        let mut r = reader("42");
        assert_eq!(r.next_token().unwrap().as_deref(), Some("42"));
        assert_eq!(r.next_token().unwrap(), None);
        assert_eq!(r.next_char().unwrap(), None);
    }
}
