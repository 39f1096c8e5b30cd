//! S-expression encoding of Letter programs.
//!
//! A Lisp-style alternative to the typed tree: `x = a + 1;` becomes
//! `(set x (+ a 1))`. Useful for compact golden tests and for feeding
//! interpreters that evaluate nested lists.

use std::fmt;

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

use crate::factory::NodeFactory;
use crate::node::{format_number, serialize_number};

/// An s-expression value.
#[derive(Debug, Clone, PartialEq)]
pub enum SExpr {
    Number(f64),
    /// A string literal, stored without quotes.
    String(String),
    Boolean(bool),
    Null,
    Symbol(String),
    List(Vec<SExpr>),
}

impl SExpr {
    pub fn symbol(name: impl Into<String>) -> Self {
        SExpr::Symbol(name.into())
    }

    /// A list whose head is the symbol `head`.
    pub fn form(head: &str, rest: impl IntoIterator<Item = SExpr>) -> Self {
        let mut items = vec![SExpr::symbol(head)];
        items.extend(rest);
        SExpr::List(items)
    }

    /// The head symbol of a list, if any.
    pub fn head(&self) -> Option<&str> {
        match self {
            SExpr::List(items) => match items.first() {
                Some(SExpr::Symbol(name)) => Some(name),
                _ => None,
            },
            _ => None,
        }
    }

    fn or_null(node: Option<SExpr>) -> SExpr {
        node.unwrap_or(SExpr::Null)
    }
}

/// Wrap a string value in quotes that do not occur inside it.
fn quoted(value: &str) -> String {
    let quote = if value.contains('"') { '\'' } else { '"' };
    format!("{}{}{}", quote, value, quote)
}

impl fmt::Display for SExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SExpr::Number(value) => f.write_str(&format_number(*value)),
            SExpr::String(value) => f.write_str(&quoted(value)),
            SExpr::Boolean(value) => write!(f, "{}", value),
            SExpr::Null => f.write_str("null"),
            SExpr::Symbol(name) => f.write_str(name),
            SExpr::List(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str(")")
            }
        }
    }
}

impl Serialize for SExpr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SExpr::Number(value) => serialize_number(value, serializer),
            SExpr::String(value) => serializer.serialize_str(&quoted(value)),
            SExpr::Boolean(value) => serializer.serialize_bool(*value),
            SExpr::Null => serializer.serialize_unit(),
            SExpr::Symbol(name) => serializer.serialize_str(name),
            SExpr::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

/// Builds [`SExpr`] values.
#[derive(Debug, Clone, Copy, Default)]
pub struct SExpressionFactory;

impl NodeFactory for SExpressionFactory {
    type Node = SExpr;

    fn program(&self, body: Vec<SExpr>) -> SExpr {
        SExpr::form("begin", body)
    }

    fn block_statement(&self, body: Vec<SExpr>) -> SExpr {
        SExpr::form("begin", body)
    }

    fn expression_statement(&self, expression: SExpr) -> SExpr {
        expression
    }

    fn empty_statement(&self) -> SExpr {
        SExpr::form("begin", Vec::new())
    }

    fn variable_statement(&self, declarations: Vec<SExpr>) -> SExpr {
        SExpr::form("var", declarations)
    }

    fn variable_declaration(&self, id: SExpr, init: Option<SExpr>) -> SExpr {
        SExpr::List(vec![id, SExpr::or_null(init)])
    }

    fn if_statement(&self, test: SExpr, consequent: SExpr, alternate: Option<SExpr>) -> SExpr {
        SExpr::form("if", [test, consequent].into_iter().chain(alternate))
    }

    fn while_statement(&self, test: SExpr, body: SExpr) -> SExpr {
        SExpr::form("while", [test, body])
    }

    fn do_while_statement(&self, body: SExpr, test: SExpr) -> SExpr {
        SExpr::form("do-while", [body, test])
    }

    fn for_statement(&self, init: Option<SExpr>, test: Option<SExpr>, update: Option<SExpr>, body: SExpr) -> SExpr {
        SExpr::form(
            "for",
            [
                SExpr::or_null(init),
                SExpr::or_null(test),
                SExpr::or_null(update),
                body,
            ],
        )
    }

    fn function_declaration(&self, name: SExpr, params: Vec<SExpr>, body: SExpr) -> SExpr {
        SExpr::form("def", [name, SExpr::List(params), body])
    }

    fn return_statement(&self, argument: Option<SExpr>) -> SExpr {
        SExpr::form("return", argument)
    }

    fn class_declaration(&self, id: SExpr, super_class: Option<SExpr>, body: SExpr) -> SExpr {
        SExpr::form("class", [id, SExpr::or_null(super_class), body])
    }

    fn assignment_expression(&self, operator: &str, left: SExpr, right: SExpr) -> SExpr {
        let head = if operator == "=" { "set" } else { operator };
        SExpr::form(head, [left, right])
    }

    fn logical_expression(&self, operator: &str, left: SExpr, right: SExpr) -> SExpr {
        SExpr::form(operator, [left, right])
    }

    fn binary_expression(&self, operator: &str, left: SExpr, right: SExpr) -> SExpr {
        SExpr::form(operator, [left, right])
    }

    fn unary_expression(&self, operator: &str, argument: SExpr) -> SExpr {
        SExpr::form(operator, [argument])
    }

    fn member_expression(&self, computed: bool, object: SExpr, property: SExpr) -> SExpr {
        let head = if computed { "index" } else { "prop" };
        SExpr::form(head, [object, property])
    }

    fn call_expression(&self, callee: SExpr, arguments: Vec<SExpr>) -> SExpr {
        SExpr::form("call", std::iter::once(callee).chain(arguments))
    }

    fn new_expression(&self, callee: SExpr, arguments: Vec<SExpr>) -> SExpr {
        SExpr::form("new", std::iter::once(callee).chain(arguments))
    }

    fn this_expression(&self) -> SExpr {
        SExpr::symbol("this")
    }

    fn super_expression(&self) -> SExpr {
        SExpr::symbol("super")
    }

    fn identifier(&self, name: &str) -> SExpr {
        SExpr::symbol(name)
    }

    fn numeric_literal(&self, value: f64) -> SExpr {
        SExpr::Number(value)
    }

    fn string_literal(&self, value: &str) -> SExpr {
        SExpr::String(value.to_string())
    }

    fn boolean_literal(&self, value: bool) -> SExpr {
        SExpr::Boolean(value)
    }

    fn null_literal(&self) -> SExpr {
        SExpr::Null
    }

    fn is_assignment_target(&self, node: &SExpr) -> bool {
        match node {
            SExpr::Symbol(name) => name != "this" && name != "super",
            SExpr::List(_) => matches!(node.head(), Some("prop") | Some("index")),
            _ => false,
        }
    }
}
