//! Printer integration tests.
//!
//! Parses Letter source, prints it back, and checks the formatted text and
//! that the printed text parses to the same tree.

use letter_parser::parse;
use letter_printer::{print_expression, print_program, Printer, PrinterOptions};

/// Helper: parse and print with default options.
fn reprint(source: &str) -> String {
    let program = parse(source).unwrap_or_else(|e| panic!("failed to parse {:?}: {}", source, e));
    print_program(&program)
}

/// Helper: assert that printing is stable and reparses to the same tree.
fn assert_round_trip(source: &str) {
    let program = parse(source).unwrap();
    let printed = print_program(&program);
    let reparsed = parse(&printed).unwrap_or_else(|e| panic!("printed text {:?} failed to parse: {}", printed, e));
    assert_eq!(program, reparsed, "printed: {}", printed);
    assert_eq!(print_program(&reparsed), printed);
}

// ============================================================================
// Statements
// ============================================================================

#[test]
fn test_print_simple_statements() {
    assert_eq!(reprint("42; 'hello'; ;"), "42;\n\"hello\";\n;\n");
    assert_eq!(reprint("let c,d=10;"), "let c, d = 10;\n");
}

#[test]
fn test_print_blocks() {
    assert_eq!(reprint("{}"), "{}\n");
    assert_eq!(reprint("{ 42; { x; } }"), "{\n    42;\n    {\n        x;\n    }\n}\n");
}

#[test]
fn test_print_control_flow() {
    assert_eq!(reprint("if(x){y;}else{z;}"), "if (x) {\n    y;\n} else {\n    z;\n}\n");
    assert_eq!(reprint("if (x) y;"), "if (x) y;\n");
    assert_eq!(reprint("while(x>0)x-=1;"), "while (x > 0) x -= 1;\n");
    assert_eq!(reprint("do{x;}while(y);"), "do {\n    x;\n} while (y);\n");
}

#[test]
fn test_print_for_statement() {
    assert_eq!(reprint("for(;;)x;"), "for (;;) x;\n");
    assert_eq!(
        reprint("for(let i=0;i<10;i+=1){}"),
        "for (let i = 0; i < 10; i += 1) {}\n"
    );
    assert_eq!(reprint("for(i=0;;)x;"), "for (i = 0;;) x;\n");
}

#[test]
fn test_print_functions_and_classes() {
    let source = "class Point3D extends Point { def constructor(x,y,z) { super(x,y); this.z=z; } def calc() { return; } }";
    assert_eq!(
        reprint(source),
        "class Point3D extends Point {\n    def constructor(x, y, z) {\n        super(x, y);\n        this.z = z;\n    }\n    def calc() {\n        return;\n    }\n}\n"
    );
}

// ============================================================================
// Expressions
// ============================================================================

#[test]
fn test_print_keeps_needed_parentheses() {
    let program = parse("(2 + 2) * 2; 2 + 2 * 2; a - (b - c); !(a && b); -(-x);").unwrap();
    assert_eq!(
        print_program(&program),
        "(2 + 2) * 2;\n2 + 2 * 2;\na - (b - c);\n!(a && b);\n--x;\n"
    );
}

#[test]
fn test_print_drops_redundant_parentheses() {
    assert_eq!(reprint("((a)) + (b * c);"), "a + b * c;\n");
    assert_eq!(reprint("(a || b) || c;"), "a || b || c;\n");
}

#[test]
fn test_print_members_calls_and_new() {
    assert_eq!(reprint("a.b[c + 1].d;"), "a.b[c + 1].d;\n");
    assert_eq!(reprint("f(1)(2, 3);"), "f(1)(2, 3);\n");
    assert_eq!(reprint("new geo.Point(1, 2);"), "new geo.Point(1, 2);\n");
    assert_eq!(reprint("(f()).x;"), "(f()).x;\n");
    assert_eq!(reprint("new (f())();"), "new (f())();\n");
}

#[test]
fn test_print_expression_only() {
    let program = parse("x = y = 1 + 2;").unwrap();
    let expression = match &program.body()[0] {
        letter_ast::Node::ExpressionStatement { expression } => expression,
        other => panic!("unexpected statement {:?}", other),
    };
    assert_eq!(print_expression(expression), "x = y = 1 + 2");
}

#[test]
fn test_print_with_options() {
    let program = parse("{ x; }").unwrap();
    let options = PrinterOptions {
        indent_str: "\t".to_string(),
        trailing_newline: false,
        ..PrinterOptions::default()
    };
    assert_eq!(Printer::with_options(options).print_program(&program), "{\n\tx;\n}");
}

// ============================================================================
// Round trips
// ============================================================================

#[test]
fn test_round_trip_fixtures() {
    for source in [
        "x > 0;",
        "{}",
        "let c, d = 10;",
        "for (;;) x;",
        "if (a) if (b) c; else d;",
        "x = y = z += 2 * (3 - 4);",
        "a || b && c == d < e + f * -g;",
        "((a || b) && c) * 2;",
        "console.log(new P(1).x, f()(2));",
        "def f(a, b) { return a[b]; }",
        "class A extends B { let x = 'say \"hi\"'; }",
        "do x -= 1; while (x);",
        "99999999999999999999;",
    ] {
        assert_round_trip(source);
    }
}

#[test]
fn test_round_trip_overflowing_number() {
    let source = format!("{};", "9".repeat(400));
    let program = parse(&source).unwrap();
    assert_eq!(
        program.body()[0],
        letter_ast::Node::ExpressionStatement {
            expression: Box::new(letter_ast::Node::NumericLiteral { value: f64::INFINITY })
        }
    );
    let printed = print_program(&program);
    assert_eq!(printed, format!("1{};\n", "0".repeat(309)));
    assert_round_trip(&source);
    assert_round_trip(&format!("x = -{} * 2;", "9".repeat(400)));
}
