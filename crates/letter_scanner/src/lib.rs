//! letter_scanner: Tokenizer for Letter source code.
//!
//! Produces tokens on demand from an ordered rule table. Whitespace and
//! comments are skipped; any character no rule accepts is a [`LexError`].
//!
//! [`LexError`]: letter_diagnostics::LexError

mod scanner;
mod token;

pub use scanner::{tokenize, Scanner};
pub use token::Token;
