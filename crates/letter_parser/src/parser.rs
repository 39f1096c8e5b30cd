//! The Letter parser: token management and statements.
//!
//! A recursive descent parser with a single token of lookahead. Tokens are
//! pulled from the scanner on demand; every production consumes them through
//! [`Parser::expect`] and hands its children to the [`NodeFactory`].
//! Expression productions live in `expression.rs`.

use letter_ast::{AstFactory, NodeFactory, TokenKind};
use letter_core::text::TextPos;
use letter_diagnostics::{ParseError, ParseResult, SyntaxError};
use letter_scanner::{Scanner, Token};
use tracing::debug;

/// Parses Letter source into nodes built by `F`.
pub struct Parser<F: NodeFactory = AstFactory> {
    pub(crate) scanner: Scanner,
    /// The next unconsumed token, `None` at end of input.
    pub(crate) lookahead: Option<Token>,
    /// End offset of the most recently consumed token.
    pub(crate) last_end: TextPos,
    pub(crate) factory: F,
}

impl Parser<AstFactory> {
    /// Create a parser that builds the typed AST.
    pub fn new() -> Self {
        Self::with_factory(AstFactory)
    }
}

impl Default for Parser<AstFactory> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: NodeFactory> Parser<F> {
    /// Create a parser that builds nodes with `factory`.
    pub fn with_factory(factory: F) -> Self {
        Self {
            scanner: Scanner::default(),
            lookahead: None,
            last_end: 0,
            factory,
        }
    }

    /// Parse a complete program.
    ///
    /// Resets any state left by a previous call, so one parser may be reused
    /// across sources. Stops at the first error.
    pub fn parse(&mut self, source: &str) -> ParseResult<F::Node> {
        debug!(len = source.len(), "parse start");
        self.scanner.init(source);
        self.lookahead = None;
        self.last_end = 0;

        let result = self.parse_source();
        match &result {
            Ok(_) => debug!("parse finished"),
            Err(err) => debug!(error = %err, span = %err.span(), "parse failed"),
        }
        result
    }

    fn parse_source(&mut self) -> ParseResult<F::Node> {
        self.next_token()?;
        self.parse_program()
    }

    // ========================================================================
    // Token management
    // ========================================================================

    /// Advance the lookahead to the next token from the scanner.
    fn next_token(&mut self) -> ParseResult<()> {
        self.lookahead = self.scanner.next_token()?;
        Ok(())
    }

    #[inline]
    pub(crate) fn current_kind(&self) -> Option<TokenKind> {
        self.lookahead.as_ref().map(|t| t.kind)
    }

    #[inline]
    pub(crate) fn at(&self, kind: TokenKind) -> bool {
        self.current_kind() == Some(kind)
    }

    /// Start offset of the lookahead, or the end of input.
    pub(crate) fn token_pos(&self) -> TextPos {
        self.lookahead
            .as_ref()
            .map_or_else(|| self.end_of_input(), |t| t.pos())
    }

    fn end_of_input(&self) -> TextPos {
        self.scanner.source().len() as TextPos
    }

    /// Consume the lookahead if it has kind `kind`.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> ParseResult<Token> {
        let expected = format!("\"{}\"", kind);
        let Some(token) = self.lookahead.take() else {
            return Err(ParseError::unexpected_end_of_input(expected, self.end_of_input()).into());
        };
        if token.kind != kind {
            return Err(ParseError::unexpected_token(token.lexeme, expected, token.span).into());
        }
        self.last_end = token.end();
        self.next_token()?;
        Ok(token)
    }

    /// Error for a lookahead that cannot start `expected`.
    pub(crate) fn unexpected(&self, expected: &str) -> SyntaxError {
        match &self.lookahead {
            Some(token) => ParseError::unexpected_token(token.lexeme.clone(), expected, token.span).into(),
            None => ParseError::unexpected_end_of_input(expected, self.end_of_input()).into(),
        }
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn parse_program(&mut self) -> ParseResult<F::Node> {
        let body = self.parse_statement_list(None)?;
        Ok(self.factory.program(body))
    }

    /// One or more statements, up to `stop` or the end of input.
    fn parse_statement_list(&mut self, stop: Option<TokenKind>) -> ParseResult<Vec<F::Node>> {
        let mut statements = vec![self.parse_statement()?];
        while let Some(kind) = self.current_kind() {
            if Some(kind) == stop {
                break;
            }
            statements.push(self.parse_statement()?);
        }
        Ok(statements)
    }

    pub(crate) fn parse_statement(&mut self) -> ParseResult<F::Node> {
        match self.current_kind() {
            Some(TokenKind::Semicolon) => self.parse_empty_statement(),
            Some(TokenKind::If) => self.parse_if_statement(),
            Some(TokenKind::OpenBrace) => self.parse_block_statement(),
            Some(TokenKind::Let) => self.parse_variable_statement(),
            Some(TokenKind::Def) => self.parse_function_declaration(),
            Some(TokenKind::Class) => self.parse_class_declaration(),
            Some(TokenKind::Return) => self.parse_return_statement(),
            Some(TokenKind::While) | Some(TokenKind::Do) | Some(TokenKind::For) => self.parse_iteration_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_empty_statement(&mut self) -> ParseResult<F::Node> {
        self.expect(TokenKind::Semicolon)?;
        Ok(self.factory.empty_statement())
    }

    fn parse_block_statement(&mut self) -> ParseResult<F::Node> {
        self.expect(TokenKind::OpenBrace)?;
        let body = if self.at(TokenKind::CloseBrace) {
            Vec::new()
        } else {
            self.parse_statement_list(Some(TokenKind::CloseBrace))?
        };
        self.expect(TokenKind::CloseBrace)?;
        Ok(self.factory.block_statement(body))
    }

    fn parse_expression_statement(&mut self) -> ParseResult<F::Node> {
        let expression = self.parse_expression()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(self.factory.expression_statement(expression))
    }

    fn parse_if_statement(&mut self) -> ParseResult<F::Node> {
        self.expect(TokenKind::If)?;
        self.expect(TokenKind::OpenParen)?;
        let test = self.parse_expression()?;
        self.expect(TokenKind::CloseParen)?;
        let consequent = self.parse_statement()?;
        // The innermost `if` claims the `else`.
        let alternate = if self.at(TokenKind::Else) {
            self.expect(TokenKind::Else)?;
            Some(self.parse_statement()?)
        } else {
            None
        };
        Ok(self.factory.if_statement(test, consequent, alternate))
    }

    fn parse_variable_statement(&mut self) -> ParseResult<F::Node> {
        let statement = self.parse_variable_statement_init()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(statement)
    }

    /// `let` and its declaration list, without the closing `;`.
    fn parse_variable_statement_init(&mut self) -> ParseResult<F::Node> {
        self.expect(TokenKind::Let)?;
        let mut declarations = vec![self.parse_variable_declaration()?];
        while self.at(TokenKind::Comma) {
            self.expect(TokenKind::Comma)?;
            declarations.push(self.parse_variable_declaration()?);
        }
        Ok(self.factory.variable_statement(declarations))
    }

    fn parse_variable_declaration(&mut self) -> ParseResult<F::Node> {
        let id = self.parse_identifier()?;
        let init = if self.at(TokenKind::Semicolon) || self.at(TokenKind::Comma) {
            None
        } else {
            self.expect(TokenKind::SimpleAssign)?;
            Some(self.parse_assignment_expression()?)
        };
        Ok(self.factory.variable_declaration(id, init))
    }

    fn parse_iteration_statement(&mut self) -> ParseResult<F::Node> {
        match self.current_kind() {
            Some(TokenKind::While) => self.parse_while_statement(),
            Some(TokenKind::Do) => self.parse_do_while_statement(),
            Some(TokenKind::For) => self.parse_for_statement(),
            _ => Err(self.unexpected("iteration statement")),
        }
    }

    fn parse_while_statement(&mut self) -> ParseResult<F::Node> {
        self.expect(TokenKind::While)?;
        self.expect(TokenKind::OpenParen)?;
        let test = self.parse_expression()?;
        self.expect(TokenKind::CloseParen)?;
        let body = self.parse_statement()?;
        Ok(self.factory.while_statement(test, body))
    }

    fn parse_do_while_statement(&mut self) -> ParseResult<F::Node> {
        self.expect(TokenKind::Do)?;
        let body = self.parse_statement()?;
        self.expect(TokenKind::While)?;
        self.expect(TokenKind::OpenParen)?;
        let test = self.parse_expression()?;
        self.expect(TokenKind::CloseParen)?;
        self.expect(TokenKind::Semicolon)?;
        Ok(self.factory.do_while_statement(body, test))
    }

    fn parse_for_statement(&mut self) -> ParseResult<F::Node> {
        self.expect(TokenKind::For)?;
        self.expect(TokenKind::OpenParen)?;

        let init = if self.at(TokenKind::Semicolon) {
            None
        } else if self.at(TokenKind::Let) {
            Some(self.parse_variable_statement_init()?)
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(TokenKind::Semicolon)?;

        let test = if self.at(TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(TokenKind::Semicolon)?;

        let update = if self.at(TokenKind::CloseParen) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(TokenKind::CloseParen)?;

        let body = self.parse_statement()?;
        Ok(self.factory.for_statement(init, test, update, body))
    }

    fn parse_function_declaration(&mut self) -> ParseResult<F::Node> {
        self.expect(TokenKind::Def)?;
        let name = self.parse_identifier()?;
        self.expect(TokenKind::OpenParen)?;
        let mut params = Vec::new();
        if !self.at(TokenKind::CloseParen) {
            params.push(self.parse_identifier()?);
            while self.at(TokenKind::Comma) {
                self.expect(TokenKind::Comma)?;
                params.push(self.parse_identifier()?);
            }
        }
        self.expect(TokenKind::CloseParen)?;
        let body = self.parse_block_statement()?;
        Ok(self.factory.function_declaration(name, params, body))
    }

    fn parse_return_statement(&mut self) -> ParseResult<F::Node> {
        self.expect(TokenKind::Return)?;
        let argument = if self.at(TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(TokenKind::Semicolon)?;
        Ok(self.factory.return_statement(argument))
    }

    fn parse_class_declaration(&mut self) -> ParseResult<F::Node> {
        self.expect(TokenKind::Class)?;
        let id = self.parse_identifier()?;
        let super_class = if self.at(TokenKind::Extends) {
            self.expect(TokenKind::Extends)?;
            Some(self.parse_identifier()?)
        } else {
            None
        };
        let body = self.parse_block_statement()?;
        Ok(self.factory.class_declaration(id, super_class, body))
    }
}
