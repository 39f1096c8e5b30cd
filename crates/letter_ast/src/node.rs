//! AST node definitions for the Letter language.
//!
//! The tree is a single tagged union. Every node owns its children; there is
//! no sharing and no back-references. The serialized form (one JSON object
//! per node with a `type` discriminator) is the contract with downstream
//! tooling, so field names follow that shape rather than Rust conventions
//! where the two differ.

use serde::{Serialize, Serializer};

/// A boxed child node.
pub type Child = Box<Node>;

/// An optional boxed child node. Serializes as `null` when absent.
pub type OptionalChild = Option<Box<Node>>;

/// A Letter syntax tree node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Node {
    // ========================================================================
    // Program and statements
    // ========================================================================
    Program {
        body: Vec<Node>,
    },
    BlockStatement {
        body: Vec<Node>,
    },
    ExpressionStatement {
        expression: Child,
    },
    EmptyStatement,
    VariableStatement {
        declarations: Vec<Node>,
    },
    VariableDeclaration {
        id: Child,
        init: OptionalChild,
    },
    IfStatement {
        test: Child,
        consequent: Child,
        alternate: OptionalChild,
    },
    WhileStatement {
        test: Child,
        body: Child,
    },
    DoWhileStatement {
        body: Child,
        test: Child,
    },
    ForStatement {
        init: OptionalChild,
        test: OptionalChild,
        update: OptionalChild,
        body: Child,
    },
    FunctionDeclaration {
        name: Child,
        params: Vec<Node>,
        body: Child,
    },
    ReturnStatement {
        argument: OptionalChild,
    },
    ClassDeclaration {
        id: Child,
        #[serde(rename = "superClass")]
        super_class: OptionalChild,
        body: Child,
    },

    // ========================================================================
    // Expressions
    // ========================================================================
    AssignmentExpression {
        operator: String,
        left: Child,
        right: Child,
    },
    LogicalExpression {
        operator: String,
        left: Child,
        right: Child,
    },
    BinaryExpression {
        operator: String,
        left: Child,
        right: Child,
    },
    UnaryExpression {
        operator: String,
        argument: Child,
    },
    MemberExpression {
        computed: bool,
        object: Child,
        property: Child,
    },
    CallExpression {
        callee: Child,
        arguments: Vec<Node>,
    },
    NewExpression {
        callee: Child,
        arguments: Vec<Node>,
    },
    ThisExpression,
    Super,
    Identifier {
        name: String,
    },

    // ========================================================================
    // Literals
    // ========================================================================
    NumericLiteral {
        #[serde(serialize_with = "serialize_number")]
        value: f64,
    },
    StringLiteral {
        value: String,
    },
    BooleanLiteral {
        value: bool,
    },
    NullLiteral,
}

impl Node {
    /// Whether this node may appear on the left of an assignment.
    pub fn is_assignment_target(&self) -> bool {
        matches!(self, Node::Identifier { .. } | Node::MemberExpression { .. })
    }

    /// The statements of a `Program` or `BlockStatement`, empty for other kinds.
    pub fn body(&self) -> &[Node] {
        match self {
            Node::Program { body } | Node::BlockStatement { body } => body,
            _ => &[],
        }
    }
}

/// Largest integer an f64 holds exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Serialize integral values as JSON integers, everything else as floats.
pub fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Digit count of the smallest integer literal that overflows an f64.
const OVERFLOW_DIGITS: usize = 310;

/// Format a numeric value the way it is written in source: integral values
/// without a fractional part.
///
/// An infinite value comes from a literal too large for an f64, so it prints
/// as the smallest integer literal that overflows back to infinity.
pub fn format_number(value: f64) -> String {
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        format!("{}1{}", sign, "0".repeat(OVERFLOW_DIGITS - 1))
    } else if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ident(name: &str) -> Child {
        Box::new(Node::Identifier { name: name.to_string() })
    }

    #[test]
    fn test_serialize_tagged_shape() {
        let node = Node::BinaryExpression {
            operator: ">".to_string(),
            left: ident("x"),
            right: Box::new(Node::NumericLiteral { value: 0.0 }),
        };
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({
                "type": "BinaryExpression",
                "operator": ">",
                "left": { "type": "Identifier", "name": "x" },
                "right": { "type": "NumericLiteral", "value": 0 },
            })
        );
    }

    #[test]
    fn test_serialize_unit_and_optional_fields() {
        assert_eq!(serde_json::to_value(Node::EmptyStatement).unwrap(), json!({ "type": "EmptyStatement" }));
        let node = Node::ClassDeclaration {
            id: ident("Point"),
            super_class: None,
            body: Box::new(Node::BlockStatement { body: vec![] }),
        };
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({
                "type": "ClassDeclaration",
                "id": { "type": "Identifier", "name": "Point" },
                "superClass": null,
                "body": { "type": "BlockStatement", "body": [] },
            })
        );
    }

    #[test]
    fn test_serialize_number() {
        let text = serde_json::to_string(&Node::NumericLiteral { value: 42.0 }).unwrap();
        assert_eq!(text, r#"{"type":"NumericLiteral","value":42}"#);
        let text = serde_json::to_string(&Node::NumericLiteral { value: 1e300 }).unwrap();
        assert_eq!(text, r#"{"type":"NumericLiteral","value":1e300}"#);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(2.5), "2.5");
    }

    #[test]
    fn test_format_infinite_number() {
        let text = format_number(f64::INFINITY);
        assert_eq!(text.len(), 310);
        assert!(text.starts_with('1') && text[1..].bytes().all(|b| b == b'0'));
        assert_eq!(text.parse::<f64>().unwrap(), f64::INFINITY);
        assert_eq!(format_number(f64::NEG_INFINITY), format!("-{}", text));
    }

    #[test]
    fn test_assignment_target() {
        assert!(ident("x").is_assignment_target());
        let member = Node::MemberExpression { computed: false, object: ident("a"), property: ident("b") };
        assert!(member.is_assignment_target());
        assert!(!Node::NumericLiteral { value: 42.0 }.is_assignment_target());
        assert!(!Node::ThisExpression.is_assignment_target());
    }

    #[test]
    fn test_body() {
        let program = Node::Program { body: vec![Node::EmptyStatement] };
        assert_eq!(program.body(), &[Node::EmptyStatement]);
        assert!(ident("x").body().is_empty());
    }
}
