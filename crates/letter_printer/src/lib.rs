//! letter_printer: AST to source text.
//!
//! Converts [`Node`] trees back into Letter source. Parentheses are inserted
//! only where the grammar needs them, so printing a parsed tree and parsing
//! the result again yields the same tree.

use letter_ast::node::format_number;
use letter_ast::Node;

/// Options for the printer.
#[derive(Debug, Clone)]
pub struct PrinterOptions {
    /// Indentation string for one nesting level.
    pub indent_str: String,
    /// Newline string.
    pub new_line: String,
    /// Whether to emit a trailing newline after a program.
    pub trailing_newline: bool,
}

impl PrinterOptions {
    /// Default options with `width` spaces per indentation level.
    pub fn with_indent_width(width: usize) -> Self {
        Self {
            indent_str: " ".repeat(width),
            ..Self::default()
        }
    }
}

impl Default for PrinterOptions {
    fn default() -> Self {
        Self {
            indent_str: "    ".to_string(),
            new_line: "\n".to_string(),
            trailing_newline: true,
        }
    }
}

/// Binding strength of an expression, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Assignment,
    LogicalOr,
    LogicalAnd,
    Equality,
    Relational,
    Additive,
    Multiplicative,
    Unary,
    Call,
    Member,
}

impl Precedence {
    /// The precedence one step tighter than `self`.
    fn next(self) -> Precedence {
        match self {
            Precedence::Assignment => Precedence::LogicalOr,
            Precedence::LogicalOr => Precedence::LogicalAnd,
            Precedence::LogicalAnd => Precedence::Equality,
            Precedence::Equality => Precedence::Relational,
            Precedence::Relational => Precedence::Additive,
            Precedence::Additive => Precedence::Multiplicative,
            Precedence::Multiplicative => Precedence::Unary,
            Precedence::Unary => Precedence::Call,
            Precedence::Call | Precedence::Member => Precedence::Member,
        }
    }
}

fn operator_precedence(operator: &str) -> Precedence {
    match operator {
        "||" => Precedence::LogicalOr,
        "&&" => Precedence::LogicalAnd,
        "==" | "!=" => Precedence::Equality,
        ">" | ">=" | "<" | "<=" => Precedence::Relational,
        "+" | "-" => Precedence::Additive,
        "*" | "/" => Precedence::Multiplicative,
        _ => Precedence::Assignment,
    }
}

fn expression_precedence(node: &Node) -> Precedence {
    match node {
        Node::AssignmentExpression { .. } => Precedence::Assignment,
        Node::LogicalExpression { operator, .. } | Node::BinaryExpression { operator, .. } => {
            operator_precedence(operator)
        }
        Node::UnaryExpression { .. } => Precedence::Unary,
        Node::CallExpression { .. } => Precedence::Call,
        _ => Precedence::Member,
    }
}

/// The printer converts AST nodes to text.
pub struct Printer {
    output: String,
    indent_level: u32,
    options: PrinterOptions,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self::with_options(PrinterOptions::default())
    }

    pub fn with_options(options: PrinterOptions) -> Self {
        Self {
            output: String::with_capacity(1024),
            indent_level: 0,
            options,
        }
    }

    /// Print a program, or any single statement, one statement per line.
    pub fn print_program(&mut self, node: &Node) -> String {
        self.output.clear();
        self.indent_level = 0;
        self.print_statement(node);
        if self.options.trailing_newline && !self.output.is_empty() {
            self.write_newline();
        }
        std::mem::take(&mut self.output)
    }

    /// Print a single expression without a terminating `;`.
    pub fn print_expression(&mut self, node: &Node) -> String {
        self.output.clear();
        self.indent_level = 0;
        self.print_expr(node, Precedence::Assignment);
        std::mem::take(&mut self.output)
    }

    // ========================================================================
    // Statement printing
    // ========================================================================

    fn print_statement(&mut self, node: &Node) {
        match node {
            Node::Program { body } => {
                for (i, stmt) in body.iter().enumerate() {
                    if i > 0 {
                        self.write_newline();
                    }
                    self.write_indent();
                    self.print_statement(stmt);
                }
            }
            Node::BlockStatement { body } => self.print_block(body),
            Node::ExpressionStatement { expression } => {
                self.print_expr(expression, Precedence::Assignment);
                self.write(";");
            }
            Node::EmptyStatement => self.write(";"),
            Node::VariableStatement { .. } => {
                self.print_variable_list(node);
                self.write(";");
            }
            Node::IfStatement {
                test,
                consequent,
                alternate,
            } => {
                self.write("if (");
                self.print_expr(test, Precedence::Assignment);
                self.write(") ");
                self.print_statement(consequent);
                if let Some(alternate) = alternate {
                    self.write(" else ");
                    self.print_statement(alternate);
                }
            }
            Node::WhileStatement { test, body } => {
                self.write("while (");
                self.print_expr(test, Precedence::Assignment);
                self.write(") ");
                self.print_statement(body);
            }
            Node::DoWhileStatement { body, test } => {
                self.write("do ");
                self.print_statement(body);
                self.write(" while (");
                self.print_expr(test, Precedence::Assignment);
                self.write(");");
            }
            Node::ForStatement {
                init,
                test,
                update,
                body,
            } => self.print_for_statement(init.as_deref(), test.as_deref(), update.as_deref(), body),
            Node::FunctionDeclaration { name, params, body } => {
                self.write("def ");
                self.print_expr(name, Precedence::Member);
                self.write("(");
                self.print_list(params);
                self.write(") ");
                self.print_statement(body);
            }
            Node::ReturnStatement { argument } => {
                self.write("return");
                if let Some(argument) = argument {
                    self.write(" ");
                    self.print_expr(argument, Precedence::Assignment);
                }
                self.write(";");
            }
            Node::ClassDeclaration { id, super_class, body } => {
                self.write("class ");
                self.print_expr(id, Precedence::Member);
                if let Some(super_class) = super_class {
                    self.write(" extends ");
                    self.print_expr(super_class, Precedence::Member);
                }
                self.write(" ");
                self.print_statement(body);
            }
            // A bare expression prints as an expression statement.
            _ => {
                self.print_expr(node, Precedence::Assignment);
                self.write(";");
            }
        }
    }

    fn print_block(&mut self, body: &[Node]) {
        self.write("{");
        if !body.is_empty() {
            self.increase_indent();
            for stmt in body {
                self.write_newline();
                self.write_indent();
                self.print_statement(stmt);
            }
            self.decrease_indent();
            self.write_newline();
            self.write_indent();
        }
        self.write("}");
    }

    /// `let` and its declarations, without the closing `;`.
    fn print_variable_list(&mut self, node: &Node) {
        let Node::VariableStatement { declarations } = node else {
            self.print_expr(node, Precedence::Assignment);
            return;
        };
        self.write("let ");
        for (i, declaration) in declarations.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            match declaration {
                Node::VariableDeclaration { id, init } => {
                    self.print_expr(id, Precedence::Member);
                    if let Some(init) = init {
                        self.write(" = ");
                        self.print_expr(init, Precedence::Assignment);
                    }
                }
                other => self.print_expr(other, Precedence::Assignment),
            }
        }
    }

    fn print_for_statement(&mut self, init: Option<&Node>, test: Option<&Node>, update: Option<&Node>, body: &Node) {
        self.write("for (");
        if let Some(init) = init {
            self.print_variable_list(init);
        }
        self.write(";");
        if let Some(test) = test {
            self.write(" ");
            self.print_expr(test, Precedence::Assignment);
        }
        self.write(";");
        if let Some(update) = update {
            self.write(" ");
            self.print_expr(update, Precedence::Assignment);
        }
        self.write(") ");
        self.print_statement(body);
    }

    // ========================================================================
    // Expression printing
    // ========================================================================

    /// Print `node`, parenthesized if it binds looser than `min`.
    fn print_expr(&mut self, node: &Node, min: Precedence) {
        let needs_parens = expression_precedence(node) < min;
        if needs_parens {
            self.write("(");
        }
        self.print_expr_inner(node);
        if needs_parens {
            self.write(")");
        }
    }

    fn print_expr_inner(&mut self, node: &Node) {
        match node {
            Node::AssignmentExpression { operator, left, right } => {
                self.print_expr(left, Precedence::Member);
                self.write(" ");
                self.write(operator);
                self.write(" ");
                self.print_expr(right, Precedence::Assignment);
            }
            Node::LogicalExpression { operator, left, right } | Node::BinaryExpression { operator, left, right } => {
                let precedence = operator_precedence(operator);
                self.print_expr(left, precedence);
                self.write(" ");
                self.write(operator);
                self.write(" ");
                self.print_expr(right, precedence.next());
            }
            Node::UnaryExpression { operator, argument } => {
                self.write(operator);
                self.print_expr(argument, Precedence::Unary);
            }
            Node::MemberExpression {
                computed,
                object,
                property,
            } => {
                self.print_expr(object, Precedence::Member);
                if *computed {
                    self.write("[");
                    self.print_expr(property, Precedence::Assignment);
                    self.write("]");
                } else {
                    self.write(".");
                    self.print_expr(property, Precedence::Member);
                }
            }
            Node::CallExpression { callee, arguments } => {
                self.print_expr(callee, Precedence::Call);
                self.write("(");
                self.print_list(arguments);
                self.write(")");
            }
            Node::NewExpression { callee, arguments } => {
                self.write("new ");
                self.print_expr(callee, Precedence::Member);
                self.write("(");
                self.print_list(arguments);
                self.write(")");
            }
            Node::ThisExpression => self.write("this"),
            Node::Super => self.write("super"),
            Node::Identifier { name } => self.write(name),
            Node::NumericLiteral { value } => self.write(&format_number(*value)),
            Node::StringLiteral { value } => {
                let quote = if value.contains('"') { "'" } else { "\"" };
                self.write(quote);
                self.write(value);
                self.write(quote);
            }
            Node::BooleanLiteral { value } => self.write(if *value { "true" } else { "false" }),
            Node::NullLiteral => self.write("null"),
            // Statements inside an expression position print as statements.
            _ => self.print_statement(node),
        }
    }

    fn print_list(&mut self, nodes: &[Node]) {
        for (i, node) in nodes.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.print_expr(node, Precedence::Assignment);
        }
    }

    // ========================================================================
    // Core write helpers
    // ========================================================================

    fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    fn write_newline(&mut self) {
        self.output.push_str(&self.options.new_line);
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.output.push_str(&self.options.indent_str);
        }
    }

    fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    fn decrease_indent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }
}

/// Print a program with default options.
pub fn print_program(node: &Node) -> String {
    Printer::new().print_program(node)
}

/// Print an expression with default options.
pub fn print_expression(node: &Node) -> String {
    Printer::new().print_expression(node)
}
