use crate::SourceBuffer;
use pretty_assertions::assert_eq;

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.current(), b'a');
    assert_eq!(cursor.peek(), b'b');
}

#[test]
fn advance_moves_forward_and_counts_columns() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.pos(), 1);
    assert_eq!(cursor.location(), (1, 2));
}

#[test]
fn advance_at_eof_is_noop() {
    let buf = SourceBuffer::new("a");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert!(cursor.is_eof());
    cursor.advance();
    assert_eq!(cursor.pos(), 1);
    assert_eq!(cursor.location(), (1, 2));
}

#[test]
fn newline_resets_column() {
    let buf = SourceBuffer::new("a\nb");
    let mut cursor = buf.cursor();
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.location(), (2, 1));
    assert_eq!(cursor.current(), b'b');
}

#[test]
fn advance_char_consumes_multibyte_sequence() {
    let buf = SourceBuffer::new("\u{e9}x");
    let mut cursor = buf.cursor();
    cursor.advance_char();
    assert_eq!(cursor.current(), b'x');
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.location(), (1, 2));
}

// === EOF Detection ===

#[test]
fn is_eof_on_empty_source() {
    let buf = SourceBuffer::new("");
    assert!(buf.cursor().is_eof());
}

#[test]
fn interior_null_is_not_eof() {
    let buf = SourceBuffer::new("a\0b");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
}

// === Bulk Skips ===

#[test]
fn eat_while_stops_at_predicate() {
    let buf = SourceBuffer::new("123abc");
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b.is_ascii_digit());
    assert_eq!(cursor.slice_from(0), "123");
}

#[test]
fn eat_until_newline_leaves_newline() {
    let buf = SourceBuffer::new("// note\nx");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.current(), b'\n');
    assert_eq!(cursor.location(), (1, 8));
}

#[test]
fn eat_until_newline_without_newline_reaches_eof() {
    let buf = SourceBuffer::new("// note");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert!(cursor.is_eof());
}

#[test]
fn eat_past_tracks_lines() {
    let buf = SourceBuffer::new("/* a\nbc */d");
    let mut cursor = buf.cursor();
    assert!(cursor.eat_past(b"*/"));
    assert_eq!(cursor.current(), b'd');
    assert_eq!(cursor.location(), (2, 6));
}

#[test]
fn eat_past_missing_needle_reaches_eof() {
    let buf = SourceBuffer::new("/* open\nforever");
    let mut cursor = buf.cursor();
    assert!(!cursor.eat_past(b"*/"));
    assert!(cursor.is_eof());
    assert_eq!(cursor.location(), (2, 8));
}

#[test]
fn skip_to_clamps_to_source_len() {
    let buf = SourceBuffer::new("ab");
    let mut cursor = buf.cursor();
    cursor.skip_to(99);
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), 2);
}

// === Slice ===

#[test]
fn slice_extracts_substring() {
    let buf = SourceBuffer::new("hello world");
    let cursor = buf.cursor();
    assert_eq!(cursor.slice(0, 5), "hello");
    assert_eq!(cursor.slice(6, 11), "world");
}
