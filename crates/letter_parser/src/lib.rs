//! letter_parser: Recursive descent parser for Letter.
//!
//! Parses the scanner's token stream into a tree built by a pluggable
//! [`NodeFactory`]. [`parse`] is the entry point for the common case of the
//! typed AST.

mod expression;
mod parser;
mod precedence;

use letter_ast::{Node, NodeFactory, SExpr, SExpressionFactory};
use letter_diagnostics::SyntaxError;

pub use parser::Parser;

/// Parse `source` into a `Program` node.
pub fn parse(source: &str) -> Result<Node, SyntaxError> {
    Parser::new().parse(source)
}

/// Parse `source` into its s-expression encoding.
pub fn parse_sexpr(source: &str) -> Result<SExpr, SyntaxError> {
    parse_with(SExpressionFactory, source)
}

/// Parse `source` with an arbitrary node factory.
pub fn parse_with<F: NodeFactory>(factory: F, source: &str) -> Result<F::Node, SyntaxError> {
    Parser::with_factory(factory).parse(source)
}
