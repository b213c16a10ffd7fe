//! Token producer.
//!
//! Before each token the lexer skips whitespace, `//` line comments and
//! `/* */` block comments. Classification, in priority order:
//!
//! 1. `"` or `'` starts a string literal ([`scan_quoted`])
//! 2. a digit starts a number: digits and `.` with no grouping check
//! 3. a letter or `_` starts an identifier, relabeled as a keyword if reserved
//! 4. any other character is a one-character operator
//!
//! No path reports an error. An unterminated block comment runs to end of
//! input; an unterminated string literal takes the rest of the input as text.

use crate::keywords::is_reserved;
use crate::literal::{is_quote, scan_quoted};
use crate::{Cursor, SourceBuffer, Token, TokenKind};

/// C `isspace`: space, `\t`, `\n`, `\v`, `\f`, `\r`.
#[inline]
fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

#[inline]
fn is_ident_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

#[inline]
fn is_ident_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

#[inline]
fn is_number_continue(byte: u8) -> bool {
    byte.is_ascii_digit() || byte == b'.'
}

/// Left-to-right tokenizer over a [`SourceBuffer`].
///
/// Call [`next_token`](Lexer::next_token) until it returns
/// [`TokenKind::EndOfInput`]; further calls keep returning end of input.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(buffer: &'a SourceBuffer) -> Self {
        Lexer {
            cursor: buffer.cursor(),
        }
    }

    /// Produce the next token.
    pub fn next_token(&mut self) -> Token {
        self.skip_trivia();

        let (line, column) = self.cursor.location();
        if self.cursor.is_eof() {
            return Token::end_of_input(line, column);
        }

        let start = self.cursor.pos();
        let current = self.cursor.current();
        if is_quote(current) {
            return self.string_literal(line, column);
        }

        let kind = if current.is_ascii_digit() {
            self.cursor.eat_while(is_number_continue);
            TokenKind::NumberLiteral
        } else if is_ident_start(current) {
            self.cursor.eat_while(is_ident_continue);
            if is_reserved(self.cursor.slice_from(start)) {
                TokenKind::Keyword
            } else {
                TokenKind::Identifier
            }
        } else {
            self.cursor.advance_char();
            TokenKind::Operator
        };

        Token::new(kind, self.cursor.slice_from(start), line, column)
    }

    /// Skip whitespace and comments until the next token start or EOF.
    fn skip_trivia(&mut self) {
        while !self.cursor.is_eof() {
            let current = self.cursor.current();
            if is_space(current) {
                self.cursor.advance();
            } else if current == b'/' && self.cursor.peek() == b'/' {
                self.cursor.eat_until_newline_or_eof();
            } else if current == b'/' && self.cursor.peek() == b'*' {
                self.cursor.advance();
                self.cursor.advance();
                self.cursor.eat_past(b"*/");
            } else {
                break;
            }
        }
    }

    fn string_literal(&mut self, line: u32, column: u32) -> Token {
        let start = self.cursor.pos();
        let Some(literal) = scan_quoted(self.cursor.source_bytes(), start as usize) else {
            // Caller checked `is_quote`; treat a mismatch as a lone operator.
            self.cursor.advance_char();
            return Token::new(TokenKind::Operator, self.cursor.slice_from(start), line, column);
        };

        let text = self.cursor.slice(
            u32::try_from(literal.content.start).unwrap_or(u32::MAX),
            u32::try_from(literal.content.end).unwrap_or(u32::MAX),
        );
        self.cursor.skip_to(u32::try_from(literal.end).unwrap_or(u32::MAX));
        Token::new(TokenKind::StringLiteral, text, line, column)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields tokens up to, but not including, end of input.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is_end_of_input() {
            None
        } else {
            Some(token)
        }
    }
}

/// Tokenize a whole source string.
///
/// The returned list always ends with exactly one
/// [`TokenKind::EndOfInput`] token.
pub fn tokenize(source: &str) -> Vec<Token> {
    let buffer = SourceBuffer::new(source);
    let mut lexer = Lexer::new(&buffer);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.is_end_of_input();
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}
