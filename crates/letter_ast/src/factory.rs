//! Node construction strategy.
//!
//! The parser never builds output nodes directly. Every production ends in a
//! call on a [`NodeFactory`], so the same grammar can emit the typed [`Node`]
//! tree ([`AstFactory`]) or a compact s-expression form
//! ([`crate::sexpr::SExpressionFactory`]).

use crate::node::Node;

/// Builds output nodes for each grammar production.
pub trait NodeFactory {
    /// The node type this factory produces.
    type Node;

    // Statements
    fn program(&self, body: Vec<Self::Node>) -> Self::Node;
    fn block_statement(&self, body: Vec<Self::Node>) -> Self::Node;
    fn expression_statement(&self, expression: Self::Node) -> Self::Node;
    fn empty_statement(&self) -> Self::Node;
    fn variable_statement(&self, declarations: Vec<Self::Node>) -> Self::Node;
    fn variable_declaration(&self, id: Self::Node, init: Option<Self::Node>) -> Self::Node;
    fn if_statement(
        &self,
        test: Self::Node,
        consequent: Self::Node,
        alternate: Option<Self::Node>,
    ) -> Self::Node;
    fn while_statement(&self, test: Self::Node, body: Self::Node) -> Self::Node;
    fn do_while_statement(&self, body: Self::Node, test: Self::Node) -> Self::Node;
    fn for_statement(
        &self,
        init: Option<Self::Node>,
        test: Option<Self::Node>,
        update: Option<Self::Node>,
        body: Self::Node,
    ) -> Self::Node;
    fn function_declaration(&self, name: Self::Node, params: Vec<Self::Node>, body: Self::Node) -> Self::Node;
    fn return_statement(&self, argument: Option<Self::Node>) -> Self::Node;
    fn class_declaration(&self, id: Self::Node, super_class: Option<Self::Node>, body: Self::Node) -> Self::Node;

    // Expressions
    fn assignment_expression(&self, operator: &str, left: Self::Node, right: Self::Node) -> Self::Node;
    fn logical_expression(&self, operator: &str, left: Self::Node, right: Self::Node) -> Self::Node;
    fn binary_expression(&self, operator: &str, left: Self::Node, right: Self::Node) -> Self::Node;
    fn unary_expression(&self, operator: &str, argument: Self::Node) -> Self::Node;
    fn member_expression(&self, computed: bool, object: Self::Node, property: Self::Node) -> Self::Node;
    fn call_expression(&self, callee: Self::Node, arguments: Vec<Self::Node>) -> Self::Node;
    fn new_expression(&self, callee: Self::Node, arguments: Vec<Self::Node>) -> Self::Node;
    fn this_expression(&self) -> Self::Node;
    fn super_expression(&self) -> Self::Node;
    fn identifier(&self, name: &str) -> Self::Node;

    // Literals
    fn numeric_literal(&self, value: f64) -> Self::Node;
    fn string_literal(&self, value: &str) -> Self::Node;
    fn boolean_literal(&self, value: bool) -> Self::Node;
    fn null_literal(&self) -> Self::Node;

    /// Whether `node` may stand on the left of an assignment operator.
    fn is_assignment_target(&self, node: &Self::Node) -> bool;
}

/// Builds the typed [`Node`] tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct AstFactory;

impl NodeFactory for AstFactory {
    type Node = Node;

    fn program(&self, body: Vec<Node>) -> Node {
        Node::Program { body }
    }

    fn block_statement(&self, body: Vec<Node>) -> Node {
        Node::BlockStatement { body }
    }

    fn expression_statement(&self, expression: Node) -> Node {
        Node::ExpressionStatement {
            expression: Box::new(expression),
        }
    }

    fn empty_statement(&self) -> Node {
        Node::EmptyStatement
    }

    fn variable_statement(&self, declarations: Vec<Node>) -> Node {
        Node::VariableStatement { declarations }
    }

    fn variable_declaration(&self, id: Node, init: Option<Node>) -> Node {
        Node::VariableDeclaration {
            id: Box::new(id),
            init: init.map(Box::new),
        }
    }

    fn if_statement(&self, test: Node, consequent: Node, alternate: Option<Node>) -> Node {
        Node::IfStatement {
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate: alternate.map(Box::new),
        }
    }

    fn while_statement(&self, test: Node, body: Node) -> Node {
        Node::WhileStatement {
            test: Box::new(test),
            body: Box::new(body),
        }
    }

    fn do_while_statement(&self, body: Node, test: Node) -> Node {
        Node::DoWhileStatement {
            body: Box::new(body),
            test: Box::new(test),
        }
    }

    fn for_statement(&self, init: Option<Node>, test: Option<Node>, update: Option<Node>, body: Node) -> Node {
        Node::ForStatement {
            init: init.map(Box::new),
            test: test.map(Box::new),
            update: update.map(Box::new),
            body: Box::new(body),
        }
    }

    fn function_declaration(&self, name: Node, params: Vec<Node>, body: Node) -> Node {
        Node::FunctionDeclaration {
            name: Box::new(name),
            params,
            body: Box::new(body),
        }
    }

    fn return_statement(&self, argument: Option<Node>) -> Node {
        Node::ReturnStatement {
            argument: argument.map(Box::new),
        }
    }

    fn class_declaration(&self, id: Node, super_class: Option<Node>, body: Node) -> Node {
        Node::ClassDeclaration {
            id: Box::new(id),
            super_class: super_class.map(Box::new),
            body: Box::new(body),
        }
    }

    fn assignment_expression(&self, operator: &str, left: Node, right: Node) -> Node {
        Node::AssignmentExpression {
            operator: operator.to_string(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    fn logical_expression(&self, operator: &str, left: Node, right: Node) -> Node {
        Node::LogicalExpression {
            operator: operator.to_string(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    fn binary_expression(&self, operator: &str, left: Node, right: Node) -> Node {
        Node::BinaryExpression {
            operator: operator.to_string(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    fn unary_expression(&self, operator: &str, argument: Node) -> Node {
        Node::UnaryExpression {
            operator: operator.to_string(),
            argument: Box::new(argument),
        }
    }

    fn member_expression(&self, computed: bool, object: Node, property: Node) -> Node {
        Node::MemberExpression {
            computed,
            object: Box::new(object),
            property: Box::new(property),
        }
    }

    fn call_expression(&self, callee: Node, arguments: Vec<Node>) -> Node {
        Node::CallExpression {
            callee: Box::new(callee),
            arguments,
        }
    }

    fn new_expression(&self, callee: Node, arguments: Vec<Node>) -> Node {
        Node::NewExpression {
            callee: Box::new(callee),
            arguments,
        }
    }

    fn this_expression(&self) -> Node {
        Node::ThisExpression
    }

    fn super_expression(&self) -> Node {
        Node::Super
    }

    fn identifier(&self, name: &str) -> Node {
        Node::Identifier { name: name.to_string() }
    }

    fn numeric_literal(&self, value: f64) -> Node {
        Node::NumericLiteral { value }
    }

    fn string_literal(&self, value: &str) -> Node {
        Node::StringLiteral {
            value: value.to_string(),
        }
    }

    fn boolean_literal(&self, value: bool) -> Node {
        Node::BooleanLiteral { value }
    }

    fn null_literal(&self) -> Node {
        Node::NullLiteral
    }

    fn is_assignment_target(&self, node: &Node) -> bool {
        node.is_assignment_target()
    }
}
