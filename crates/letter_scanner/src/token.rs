//! Token information produced by the scanner.

use std::fmt;

use letter_ast::TokenKind;
use letter_core::text::{TextPos, TextSpan};

/// A scanned token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The exact source text matched.
    pub lexeme: String,
    /// Where the token sits in the source.
    pub span: TextSpan,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, start: TextPos) -> Self {
        let lexeme = lexeme.into();
        let span = TextSpan::new(start, lexeme.len() as TextPos);
        Self { kind, lexeme, span }
    }

    /// Start offset in the source text.
    #[inline]
    pub fn pos(&self) -> TextPos {
        self.span.start
    }

    /// End offset in the source text (exclusive).
    #[inline]
    pub fn end(&self) -> TextPos {
        self.span.end()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} @ {}", self.kind, self.lexeme, self.span)
    }
}
