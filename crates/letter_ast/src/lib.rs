//! letter_ast: Token kinds and syntax tree types for Letter.
//!
//! The [`Node`] enum is the typed tree the parser builds by default. The
//! [`NodeFactory`] trait decouples the grammar from that shape so callers can
//! request the [`SExpr`] encoding instead.

pub mod factory;
pub mod node;
pub mod sexpr;
pub mod token_kind;

pub use factory::{AstFactory, NodeFactory};
pub use node::Node;
pub use sexpr::{SExpr, SExpressionFactory};
pub use token_kind::TokenKind;
