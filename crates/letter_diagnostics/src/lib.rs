//! letter_diagnostics: Error types for the Letter scanner and parser.
//!
//! Parsing is fatal on the first error, so there is no diagnostic
//! collection: every failure is one of two values, a [`LexError`] from the
//! scanner or a [`ParseError`] from the parser, unified as [`SyntaxError`].
//! All of them carry a source span and integrate with [`miette`] for
//! graphical reporting.

// Spurious warnings from miette derive macro expansion
#![allow(unused_assignments)]

use letter_core::text::{TextPos, TextSpan};
use miette::{Diagnostic, NamedSource, Report};
use thiserror::Error;

/// Result type returned by every parser production.
pub type ParseResult<T> = Result<T, SyntaxError>;

/// No scanner rule matches the input at `offset`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("unexpected character '{character}' at offset {offset}")]
#[diagnostic(code(letter::lex))]
pub struct LexError {
    /// The first character of the unmatched input.
    pub character: char,
    /// Byte offset of that character.
    pub offset: TextPos,
    #[label("no token starts here")]
    pub span: TextSpan,
}

impl LexError {
    #[must_use]
    pub fn new(character: char, offset: TextPos) -> Self {
        Self {
            character,
            offset,
            span: TextSpan::new(offset, character.len_utf8() as TextPos),
        }
    }
}

/// The kind of parse error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// The lookahead token is not the one the grammar requires.
    #[error("unexpected token \"{found}\", expected {expected}")]
    UnexpectedToken { found: String, expected: String },

    /// Input ended where the grammar still requires a token.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEndOfInput { expected: String },

    /// The left side of an assignment is neither an identifier nor a member access.
    #[error("invalid left-hand side in assignment expression")]
    InvalidAssignmentTarget,
}

/// A grammar violation found by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{kind}")]
#[diagnostic(code(letter::parse))]
pub struct ParseError {
    pub kind: ParseErrorKind,
    #[label("here")]
    pub span: TextSpan,
}

impl ParseError {
    #[must_use]
    pub fn new(kind: ParseErrorKind, span: TextSpan) -> Self {
        Self { kind, span }
    }

    /// Creates an "unexpected token" error for the token text `found`.
    #[must_use]
    pub fn unexpected_token(found: impl Into<String>, expected: impl Into<String>, span: TextSpan) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedToken {
                found: found.into(),
                expected: expected.into(),
            },
            span,
        )
    }

    /// Creates an "unexpected end of input" error at `offset`.
    #[must_use]
    pub fn unexpected_end_of_input(expected: impl Into<String>, offset: TextPos) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedEndOfInput {
                expected: expected.into(),
            },
            TextSpan::empty(offset),
        )
    }

    #[must_use]
    pub fn invalid_assignment_target(span: TextSpan) -> Self {
        Self::new(ParseErrorKind::InvalidAssignmentTarget, span)
    }
}

/// Any error that aborts a parse.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SyntaxError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),
}

impl SyntaxError {
    /// The source span the error points at.
    pub fn span(&self) -> TextSpan {
        match self {
            SyntaxError::Lex(err) => err.span,
            SyntaxError::Parse(err) => err.span,
        }
    }

    /// The parse error kind, if this is a parse error.
    pub fn parse_kind(&self) -> Option<&ParseErrorKind> {
        match self {
            SyntaxError::Parse(err) => Some(&err.kind),
            SyntaxError::Lex(_) => None,
        }
    }
}

/// Attach the named source text to an error for graphical rendering.
pub fn with_source(error: SyntaxError, file_name: &str, source: &str) -> Report {
    Report::new(error).with_source_code(NamedSource::new(file_name, source.to_string()))
}
