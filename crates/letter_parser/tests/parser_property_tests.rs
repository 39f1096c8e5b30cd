//! Property-based tests for the Letter parser.
//!
//! 1. **Parser never panics** on arbitrary token soup
//! 2. **Same-tier operators associate left**
//! 3. **Assignment chains associate right**
//! 4. **Dangling else binds to the innermost `if`**
//! 5. **Parsing is deterministic** and independent of parser reuse

use letter_ast::Node;
use letter_parser::{parse, Parser};
use proptest::prelude::*;

// ============================================================================
// Generators
// ============================================================================

/// Operators grouped by tier, lowest precedence first.
const TIERS: &[&[&str]] = &[
    &["||"],
    &["&&"],
    &["==", "!="],
    &[">", ">=", "<", "<="],
    &["+", "-"],
    &["*", "/"],
];

const FRAGMENTS: &[&str] = &[
    "x", "42", "'s'", "true", "null", "this", "+", "-", "*", "=", "==", "&&", "!", "(", ")", "{", "}",
    "[", "]", ".", ",", ";", "let", "if", "else", "def", "class", "return", "new", "super", "for",
];

fn identifier() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,6}".prop_filter("keywords are not identifiers", |s| {
        ![
            "let", "if", "else", "true", "false", "null", "def", "class", "extends", "return", "while",
            "do", "for", "new", "this", "super",
        ]
        .contains(&s.as_str())
    })
}

fn same_tier_operators() -> impl Strategy<Value = (&'static str, &'static str)> {
    prop::sample::select(TIERS).prop_flat_map(|ops| (prop::sample::select(ops), prop::sample::select(ops)))
}

fn proptest_config() -> ProptestConfig {
    let default = ProptestConfig::default();
    ProptestConfig {
        cases: default.cases.max(256),
        ..default
    }
}

fn single_expression(program: Node) -> Node {
    match program {
        Node::Program { mut body } if body.len() == 1 => match body.remove(0) {
            Node::ExpressionStatement { expression } => *expression,
            other => panic!("expected an expression statement, got {:?}", other),
        },
        other => panic!("expected a single statement program, got {:?}", other),
    }
}

/// Split a binary or logical node into (operator, left, right).
fn split(node: Node) -> Option<(String, Node, Node)> {
    match node {
        Node::BinaryExpression { operator, left, right } | Node::LogicalExpression { operator, left, right } => {
            Some((operator, *left, *right))
        }
        _ => None,
    }
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn parser_never_panics(fragments in prop::collection::vec(prop::sample::select(FRAGMENTS), 0..40)) {
        let _ = parse(&fragments.join(" "));
    }

    #[test]
    fn same_tier_operators_associate_left(
        a in identifier(),
        b in identifier(),
        c in identifier(),
        (op1, op2) in same_tier_operators(),
    ) {
        let source = format!("{} {} {} {} {};", a, op1, b, op2, c);
        let expression = single_expression(parse(&source).unwrap());

        let (outer, left, right) = split(expression).unwrap();
        prop_assert_eq!(outer.as_str(), op2);
        prop_assert_eq!(right, Node::Identifier { name: c });

        let (inner, inner_left, inner_right) = split(left).unwrap();
        prop_assert_eq!(inner.as_str(), op1);
        prop_assert_eq!(inner_left, Node::Identifier { name: a });
        prop_assert_eq!(inner_right, Node::Identifier { name: b });
    }

    #[test]
    fn assignment_chains_associate_right(names in prop::collection::vec(identifier(), 2..6)) {
        let source = format!("{} = 1;", names.join(" = "));
        let mut node = single_expression(parse(&source).unwrap());

        for name in &names {
            match node {
                Node::AssignmentExpression { operator, left, right } => {
                    prop_assert_eq!(operator.as_str(), "=");
                    prop_assert_eq!(*left, Node::Identifier { name: name.clone() });
                    node = *right;
                }
                other => return Err(TestCaseError::fail(format!("expected assignment, got {:?}", other))),
            }
        }
        prop_assert_eq!(node, Node::NumericLiteral { value: 1.0 });
    }

    #[test]
    fn dangling_else_binds_innermost(depth in 1usize..6) {
        let source = format!("{} x; else y;", "if (c) ".repeat(depth));
        let program = parse(&source).unwrap();

        let mut node = &program.body()[0];
        for level in 1..=depth {
            match node {
                Node::IfStatement { consequent, alternate, .. } => {
                    if level == depth {
                        prop_assert!(alternate.is_some());
                    } else {
                        prop_assert!(alternate.is_none());
                        node = &**consequent;
                    }
                }
                other => return Err(TestCaseError::fail(format!("expected if, got {:?}", other))),
            }
        }
    }

    #[test]
    fn parser_reuse_is_deterministic(a in identifier(), b in identifier()) {
        let source = format!("let {} = {} + 1;", a, b);
        let mut parser = Parser::new();
        let first = parser.parse(&source).unwrap();
        let _ = parser.parse("x y");
        let second = parser.parse(&source).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first, parse(&source).unwrap());
    }
}
