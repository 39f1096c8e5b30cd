//! TokenKind enum - every token the Letter scanner can produce.

use std::fmt;

/// The kind of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    // ========================================================================
    // Punctuation
    // ========================================================================
    Semicolon,
    OpenBrace,
    CloseBrace,
    OpenParen,
    CloseParen,
    Comma,
    Dot,
    OpenBracket,
    CloseBracket,

    // ========================================================================
    // Keywords
    // ========================================================================
    Let,
    If,
    Else,
    True,
    False,
    Null,
    Def,
    Class,
    Extends,
    Return,
    While,
    Do,
    For,
    New,
    This,
    Super,

    // ========================================================================
    // Operator classes
    // ========================================================================
    /// `+` `-`
    AdditiveOperator,
    /// `*` `/`
    MultiplicativeOperator,
    /// `>` `>=` `<` `<=`
    RelationalOperator,
    /// `==` `!=`
    EqualityOperator,
    LogicalAnd,
    LogicalOr,
    LogicalNot,
    /// `=`
    SimpleAssign,
    /// `*=` `/=` `+=` `-=`
    ComplexAssign,

    // ========================================================================
    // Literals and names
    // ========================================================================
    Number,
    String,
    Identifier,
}

impl TokenKind {
    pub const FIRST_PUNCTUATION: TokenKind = TokenKind::Semicolon;
    pub const LAST_PUNCTUATION: TokenKind = TokenKind::CloseBracket;
    pub const FIRST_KEYWORD: TokenKind = TokenKind::Let;
    pub const LAST_KEYWORD: TokenKind = TokenKind::Super;

    #[inline]
    pub fn is_punctuation(self) -> bool {
        self >= TokenKind::FIRST_PUNCTUATION && self <= TokenKind::LAST_PUNCTUATION
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        self >= TokenKind::FIRST_KEYWORD && self <= TokenKind::LAST_KEYWORD
    }

    /// Whether this kind starts a literal production.
    #[inline]
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Number | TokenKind::String | TokenKind::True | TokenKind::False | TokenKind::Null
        )
    }

    #[inline]
    pub fn is_assignment_operator(self) -> bool {
        matches!(self, TokenKind::SimpleAssign | TokenKind::ComplexAssign)
    }

    /// Get the source text of a keyword kind.
    pub fn keyword_text(self) -> Option<&'static str> {
        match self {
            TokenKind::Let => Some("let"),
            TokenKind::If => Some("if"),
            TokenKind::Else => Some("else"),
            TokenKind::True => Some("true"),
            TokenKind::False => Some("false"),
            TokenKind::Null => Some("null"),
            TokenKind::Def => Some("def"),
            TokenKind::Class => Some("class"),
            TokenKind::Extends => Some("extends"),
            TokenKind::Return => Some("return"),
            TokenKind::While => Some("while"),
            TokenKind::Do => Some("do"),
            TokenKind::For => Some("for"),
            TokenKind::New => Some("new"),
            TokenKind::This => Some("this"),
            TokenKind::Super => Some("super"),
            _ => None,
        }
    }

    /// Get the source text of a punctuation kind.
    pub fn punctuation_text(self) -> Option<&'static str> {
        match self {
            TokenKind::Semicolon => Some(";"),
            TokenKind::OpenBrace => Some("{"),
            TokenKind::CloseBrace => Some("}"),
            TokenKind::OpenParen => Some("("),
            TokenKind::CloseParen => Some(")"),
            TokenKind::Comma => Some(","),
            TokenKind::Dot => Some("."),
            TokenKind::OpenBracket => Some("["),
            TokenKind::CloseBracket => Some("]"),
            _ => None,
        }
    }

    /// The display name of this kind: its fixed text for punctuation and
    /// keywords, the upper-case class name otherwise.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::AdditiveOperator => "ADDITIVE_OPERATOR",
            TokenKind::MultiplicativeOperator => "MULTIPLICATIVE_OPERATOR",
            TokenKind::RelationalOperator => "RELATIONAL_OPERATOR",
            TokenKind::EqualityOperator => "EQUALITY_OPERATOR",
            TokenKind::LogicalAnd => "LOGICAL_AND",
            TokenKind::LogicalOr => "LOGICAL_OR",
            TokenKind::LogicalNot => "LOGICAL_NOT",
            TokenKind::SimpleAssign => "SIMPLE_ASSIGN",
            TokenKind::ComplexAssign => "COMPLEX_ASSIGN",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::Identifier => "IDENTIFIER",
            _ => self
                .punctuation_text()
                .or_else(|| self.keyword_text())
                .unwrap_or("token"),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
