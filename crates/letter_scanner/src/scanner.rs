//! The Letter scanner.
//!
//! Tokens are recognized by an ordered table of anchored regular expressions
//! tried against the unconsumed suffix of the source. The first rule that
//! matches wins; there is no longest-match arbitration, so the table order is
//! part of the language definition (comments before `/`, `==` before `=`,
//! keywords before identifiers).

use lazy_static::lazy_static;
use letter_ast::TokenKind;
use letter_core::text::TextPos;
use letter_diagnostics::LexError;
use regex::Regex;
use tracing::trace;

use crate::token::Token;

/// One scanner rule. A rule without a kind matches trivia that is skipped.
struct Rule {
    pattern: Regex,
    kind: Option<TokenKind>,
}

/// Rule table in match order.
const RULE_PATTERNS: &[(&str, Option<TokenKind>)] = &[
    // Trivia
    (r"^\s+", None),
    (r"^//.*", None),
    (r"^/\*[\s\S]*?\*/", None),
    // Punctuation
    (r"^;", Some(TokenKind::Semicolon)),
    (r"^\{", Some(TokenKind::OpenBrace)),
    (r"^\}", Some(TokenKind::CloseBrace)),
    (r"^\(", Some(TokenKind::OpenParen)),
    (r"^\)", Some(TokenKind::CloseParen)),
    (r"^,", Some(TokenKind::Comma)),
    (r"^\.", Some(TokenKind::Dot)),
    (r"^\[", Some(TokenKind::OpenBracket)),
    (r"^\]", Some(TokenKind::CloseBracket)),
    // Keywords
    (r"^let(?-u:\b)", Some(TokenKind::Let)),
    (r"^if(?-u:\b)", Some(TokenKind::If)),
    (r"^else(?-u:\b)", Some(TokenKind::Else)),
    (r"^true(?-u:\b)", Some(TokenKind::True)),
    (r"^false(?-u:\b)", Some(TokenKind::False)),
    (r"^null(?-u:\b)", Some(TokenKind::Null)),
    (r"^def(?-u:\b)", Some(TokenKind::Def)),
    (r"^class(?-u:\b)", Some(TokenKind::Class)),
    (r"^extends(?-u:\b)", Some(TokenKind::Extends)),
    (r"^return(?-u:\b)", Some(TokenKind::Return)),
    (r"^while(?-u:\b)", Some(TokenKind::While)),
    (r"^do(?-u:\b)", Some(TokenKind::Do)),
    (r"^for(?-u:\b)", Some(TokenKind::For)),
    (r"^new(?-u:\b)", Some(TokenKind::New)),
    (r"^this(?-u:\b)", Some(TokenKind::This)),
    (r"^super(?-u:\b)", Some(TokenKind::Super)),
    // Numbers and identifiers
    (r"^[0-9]+", Some(TokenKind::Number)),
    (r"^(?-u:\w)+", Some(TokenKind::Identifier)),
    // Operators
    (r"^[=!]=", Some(TokenKind::EqualityOperator)),
    (r"^=", Some(TokenKind::SimpleAssign)),
    (r"^[*/+-]=", Some(TokenKind::ComplexAssign)),
    (r"^[+-]", Some(TokenKind::AdditiveOperator)),
    (r"^[*/]", Some(TokenKind::MultiplicativeOperator)),
    (r"^[<>]=?", Some(TokenKind::RelationalOperator)),
    (r"^&&", Some(TokenKind::LogicalAnd)),
    (r"^\|\|", Some(TokenKind::LogicalOr)),
    (r"^!", Some(TokenKind::LogicalNot)),
    // Strings
    (r#"^"[^"]*""#, Some(TokenKind::String)),
    (r"^'[^']*'", Some(TokenKind::String)),
];

lazy_static! {
    static ref RULES: Vec<Rule> = RULE_PATTERNS
        .iter()
        .map(|&(pattern, kind)| Rule {
            pattern: Regex::new(pattern).expect("scanner rule patterns are valid"),
            kind,
        })
        .collect();
}

/// Lazily produces tokens from Letter source text.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    /// The source text being scanned.
    source: String,
    /// Byte offset of the first unconsumed character.
    cursor: usize,
}

impl Scanner {
    /// Create a new scanner positioned at the start of `source`.
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
            cursor: 0,
        }
    }

    /// Reset the scanner to the start of new source text.
    pub fn init(&mut self, source: &str) {
        self.source.clear();
        self.source.push_str(source);
        self.cursor = 0;
    }

    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Byte offset of the first unconsumed character.
    #[inline]
    pub fn cursor(&self) -> TextPos {
        self.cursor as TextPos
    }

    /// Whether any unconsumed input remains (possibly only trivia).
    #[inline]
    pub fn has_more_tokens(&self) -> bool {
        self.cursor < self.source.len()
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.cursor == self.source.len()
    }

    /// Scan the next token, skipping trivia.
    ///
    /// Returns `Ok(None)` once the input is exhausted, including when only
    /// whitespace or comments remain. On error the cursor stays on the
    /// offending character.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        'scan: while self.cursor < self.source.len() {
            let rest = &self.source[self.cursor..];
            for rule in RULES.iter() {
                let Some(found) = rule.pattern.find(rest) else {
                    continue;
                };
                let start = self.cursor;
                let lexeme = found.as_str();
                self.cursor += found.end();

                let Some(kind) = rule.kind else {
                    continue 'scan;
                };
                let token = Token::new(kind, lexeme, start as TextPos);
                trace!(kind = %token.kind, lexeme = %token.lexeme, offset = start, "token");
                return Ok(Some(token));
            }

            let character = rest.chars().next().unwrap_or_default();
            return Err(LexError::new(character, self.cursor as TextPos));
        }
        Ok(None)
    }
}

/// Scan all of `source` into a token vector.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    while let Some(token) = scanner.next_token()? {
        tokens.push(token);
    }
    Ok(tokens)
}
