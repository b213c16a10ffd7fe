//! Token types produced by the lexer.

/// Classification of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input. Text is always empty.
    EndOfInput,
    /// Letter or underscore followed by alphanumerics/underscores.
    Identifier,
    /// Quoted text; the token text excludes the quotes.
    StringLiteral,
    /// Digits and dots, unvalidated (`1.2.3` is one token).
    NumberLiteral,
    /// Any other single character.
    Operator,
    /// An identifier whose text is a reserved word.
    Keyword,
    /// Reserved classification; the lexer currently folds all punctuation
    /// into [`TokenKind::Operator`].
    Symbol,
}

impl TokenKind {
    /// Short human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::EndOfInput => "end of input",
            TokenKind::Identifier => "identifier",
            TokenKind::StringLiteral => "string",
            TokenKind::NumberLiteral => "number",
            TokenKind::Operator => "operator",
            TokenKind::Keyword => "keyword",
            TokenKind::Symbol => "symbol",
        }
    }
}

/// A classified token with its owned text and 1-based start position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: u32,
    pub column: u32,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32, column: u32) -> Self {
        Token {
            kind,
            text: text.into(),
            line,
            column,
        }
    }

    /// The end-of-input token at the given position.
    pub fn end_of_input(line: u32, column: u32) -> Self {
        Token::new(TokenKind::EndOfInput, String::new(), line, column)
    }

    #[inline]
    pub fn is_end_of_input(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}
