//! Phw Lexer - tokenizer for embedded script source.
//!
//! The lexer turns a source string into classified [`Token`]s. It never
//! reports an error: malformed literals and unterminated comments are scanned
//! best-effort and produce whatever text they cover.
//!
//! # Layers
//!
//! - [`SourceBuffer`]: sentinel-terminated copy of the source
//! - [`Cursor`]: byte cursor with line/column bookkeeping
//! - [`scan_quoted`]: the string-literal rule, shared with the execution engine
//! - [`Lexer`]: produces one [`Token`] per call to [`Lexer::next_token`]

mod cursor;
mod keywords;
mod lexer;
mod literal;
mod source_buffer;
mod token;

pub use cursor::Cursor;
pub use keywords::{is_reserved, RESERVED_WORDS};
pub use lexer::{tokenize, Lexer};
pub use literal::{is_quote, scan_quoted, QuotedLiteral};
pub use source_buffer::SourceBuffer;
pub use token::{Token, TokenKind};
