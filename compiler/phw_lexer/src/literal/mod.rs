//! The quoted string-literal rule.
//!
//! A literal opens with `"` or `'` and runs to the next occurrence of the
//! same quote byte, or to end of input if there is none. There is no escape
//! processing: a backslash is ordinary content, so `"a\"b"` ends after `a\`.
//! An unterminated literal is not an error; its content is everything up to
//! end of input.
//!
//! The execution engine scans `echo`/`print` arguments with this same rule,
//! so both paths agree on where a literal ends.

use std::ops::Range;

/// Returns `true` for the two quote bytes that open a string literal.
#[inline]
pub fn is_quote(byte: u8) -> bool {
    byte == b'"' || byte == b'\''
}

/// Result of scanning one quoted literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuotedLiteral {
    /// The opening (and expected closing) quote byte.
    pub quote: u8,
    /// Byte range of the content, excluding quotes.
    pub content: Range<usize>,
    /// Byte offset just past the literal (past the closing quote if present).
    pub end: usize,
    /// Whether a closing quote was found.
    pub terminated: bool,
}

/// Scan a quoted literal starting at `start`.
///
/// Returns `None` if `bytes[start]` is not a quote.
pub fn scan_quoted(bytes: &[u8], start: usize) -> Option<QuotedLiteral> {
    let quote = *bytes.get(start)?;
    if !is_quote(quote) {
        return None;
    }
    let body = start + 1;
    let literal = match memchr::memchr(quote, &bytes[body..]) {
        Some(offset) => QuotedLiteral {
            quote,
            content: body..body + offset,
            end: body + offset + 1,
            terminated: true,
        },
        None => QuotedLiteral {
            quote,
            content: body..bytes.len(),
            end: bytes.len(),
            terminated: false,
        },
    };
    Some(literal)
}

#[cfg(test)]
mod tests;
