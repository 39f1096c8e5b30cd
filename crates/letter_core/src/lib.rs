//! letter_core: Core utilities shared by the Letter scanner and parser.
//!
//! Provides source positions, text spans, and offset-to-line mapping used
//! by tokens, diagnostics, and the command-line driver.

pub mod text;

// Re-export commonly used types
pub use text::{LineAndColumn, LineMap, TextPos, TextSpan};
