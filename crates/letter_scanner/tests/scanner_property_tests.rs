//! Property-based tests for the Letter scanner.
//!
//! 1. **Scanner never panics** on arbitrary input
//! 2. **Token spans stay in bounds** and never overlap
//! 3. **Trivia is invisible**: inserting whitespace or comments between
//!    tokens leaves the token stream unchanged
//! 4. **Lexemes are source slices**

use letter_ast::TokenKind;
use letter_scanner::tokenize;
use proptest::prelude::*;

// ============================================================================
// Generators
// ============================================================================

/// Single-token fragments that must lex to exactly one token.
const VALID_TOKENS: &[&str] = &[
    "42", "0", "x", "_tmp", "value1", "\"str\"", "'str'", "let", "if", "else", "true", "false",
    "null", "def", "class", "extends", "return", "while", "do", "for", "new", "this", "super",
    ";", "{", "}", "(", ")", ",", ".", "[", "]", "+", "-", "*", "/", ">", ">=", "<", "<=", "==",
    "!=", "&&", "||", "!", "=", "+=", "-=", "*=", "/=",
];

const TRIVIA: &[&str] = &[" ", "\n", "\t", "  \n  ", "/* c */", "// c\n", "/* a\nb */"];

fn valid_token() -> impl Strategy<Value = &'static str> {
    prop::sample::select(VALID_TOKENS)
}

fn trivia() -> impl Strategy<Value = &'static str> {
    prop::sample::select(TRIVIA)
}

/// Join tokens with separators. Every separator is padded with spaces so it
/// can never fuse with a neighbouring token (`/` followed by `/* c */`).
fn join(tokens: &[&str], separators: &[&str]) -> String {
    let mut out = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push(' ');
            out.push_str(separators[i % separators.len()]);
            out.push(' ');
        }
        out.push_str(token);
    }
    out
}

fn proptest_config() -> ProptestConfig {
    let default = ProptestConfig::default();
    ProptestConfig {
        cases: default.cases.max(256),
        ..default
    }
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn scanner_never_panics(input in "\\PC{0,200}") {
        let _ = tokenize(&input);
    }

    #[test]
    fn token_spans_are_ordered_and_in_bounds(input in "[a-z0-9 +*/=<>!;(){}\\[\\],.\n-]{0,120}") {
        if let Ok(tokens) = tokenize(&input) {
            let mut last_end = 0;
            for token in &tokens {
                prop_assert!(token.span.start >= last_end);
                prop_assert!(token.span.end() as usize <= input.len());
                prop_assert!(!token.span.is_empty());
                last_end = token.span.end();
            }
        }
    }

    #[test]
    fn lexemes_are_source_slices(input in "[a-z0-9 +*/=<>!;(){}\\[\\],.\n-]{0,120}") {
        if let Ok(tokens) = tokenize(&input) {
            for token in &tokens {
                prop_assert_eq!(&input[token.span.to_range()], token.lexeme.as_str());
            }
        }
    }

    #[test]
    fn each_valid_token_lexes_alone(token in valid_token()) {
        let tokens = tokenize(token).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].lexeme.as_str(), token);
    }

    #[test]
    fn trivia_never_changes_the_token_stream(
        tokens in prop::collection::vec(valid_token(), 1..20),
        separators in prop::collection::vec(trivia(), 1..5),
    ) {
        let plain = tokenize(&join(&tokens, &[""])).unwrap();
        let padded = tokenize(&join(&tokens, &separators)).unwrap();

        let plain: Vec<(TokenKind, String)> = plain.into_iter().map(|t| (t.kind, t.lexeme)).collect();
        let padded: Vec<(TokenKind, String)> = padded.into_iter().map(|t| (t.kind, t.lexeme)).collect();
        prop_assert_eq!(plain, padded);
    }
}
