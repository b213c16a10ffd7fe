//! Byte cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte-by-byte and keeps 1-based
//! line and column counters in step with every consumed character. EOF is
//! the sentinel (`0x00`) at or past the source length; a NUL byte before
//! the source length is an interior null, not EOF.
//!
//! Columns count characters, not bytes: UTF-8 continuation bytes do not
//! advance the column.

/// Returns `true` for UTF-8 continuation bytes (`0b10xx_xxxx`).
#[inline]
fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Number of characters in `bytes` (count of non-continuation bytes).
fn char_count(bytes: &[u8]) -> u32 {
    let count = bytes.iter().filter(|&&b| !is_continuation(b)).count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Byte cursor with line/column tracking.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so callers can snapshot it cheaply.
///
/// # Invariant
///
/// `buf[source_len] == 0x00` and every byte after it is `0x00`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content.
    source_len: u32,
    /// 1-based line of the current position.
    line: u32,
    /// 1-based column of the current position.
    column: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
            line: 1,
            column: 1,
        }
    }

    /// Returns the byte at the current position (`0x00` at EOF).
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Returns the byte one position ahead of current.
    ///
    /// Safe at any position: the sentinel and padding guarantee a valid read.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    /// Returns `true` if the cursor has reached EOF.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Current `(line, column)`, both 1-based.
    #[inline]
    pub fn location(&self) -> (u32, u32) {
        (self.line, self.column)
    }

    /// Source content without sentinel or padding.
    #[inline]
    pub fn source_bytes(&self) -> &'a [u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Consume one byte, updating line/column.
    ///
    /// Does nothing at EOF.
    #[inline]
    pub fn advance(&mut self) {
        if self.is_eof() {
            return;
        }
        let byte = self.current();
        if byte == b'\n' {
            self.line += 1;
            self.column = 1;
        } else if !is_continuation(byte) {
            self.column += 1;
        }
        self.pos += 1;
    }

    /// Consume one full UTF-8 character.
    #[inline]
    pub fn advance_char(&mut self) {
        self.advance();
        while !self.is_eof() && is_continuation(self.current()) {
            self.advance();
        }
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// `pred(0)` must return `false`; the sentinel then terminates the loop.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.advance();
        }
    }

    /// Jump forward to byte offset `target`, accounting every skipped
    /// newline and character. `target` is clamped to the source length.
    pub fn skip_to(&mut self, target: u32) {
        let target = target.min(self.source_len);
        if target <= self.pos {
            return;
        }
        let region = &self.buf[self.pos as usize..target as usize];
        let newlines = memchr::memchr_iter(b'\n', region).count();
        if let Some(last) = memchr::memrchr(b'\n', region) {
            self.line += u32::try_from(newlines).unwrap_or(u32::MAX);
            self.column = 1 + char_count(&region[last + 1..]);
        } else {
            self.column += char_count(region);
        }
        self.pos = target;
    }

    /// Advance to the next `\n` byte or EOF. The newline is not consumed.
    pub fn eat_until_newline_or_eof(&mut self) {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        let target = match memchr::memchr(b'\n', remaining) {
            Some(offset) => self.pos as usize + offset,
            None => self.source_len as usize,
        };
        self.skip_to(u32::try_from(target).unwrap_or(self.source_len));
    }

    /// Advance past the next occurrence of `needle`, or to EOF if it never
    /// occurs. Returns `true` if the needle was found.
    pub fn eat_past(&mut self, needle: &[u8]) -> bool {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        match memchr::memmem::find(remaining, needle) {
            Some(offset) => {
                let target = self.pos as usize + offset + needle.len();
                self.skip_to(u32::try_from(target).unwrap_or(self.source_len));
                true
            }
            None => {
                self.skip_to(self.source_len);
                false
            }
        }
    }

    /// Extract source text between two byte offsets.
    ///
    /// Offsets produced by the lexer always fall on character boundaries;
    /// a range that does not yields the empty string.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        let end = end.min(self.source_len);
        std::str::from_utf8(&self.buf[start as usize..end as usize]).unwrap_or_default()
    }

    /// Extract source text from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }
}

#[cfg(test)]
mod tests;
