//! Expression productions, lowest precedence first.

use letter_ast::{NodeFactory, TokenKind};
use letter_core::text::TextSpan;
use letter_diagnostics::{ParseError, ParseResult};

use crate::parser::Parser;
use crate::precedence::Tier;

impl<F: NodeFactory> Parser<F> {
    pub(crate) fn parse_expression(&mut self) -> ParseResult<F::Node> {
        self.parse_assignment_expression()
    }

    /// Right-associative: `x = y = 1` assigns `y` first.
    pub(crate) fn parse_assignment_expression(&mut self) -> ParseResult<F::Node> {
        let start = self.token_pos();
        let left = self.parse_binary_tier(Tier::LOWEST)?;

        let Some(kind) = self.current_kind().filter(|k| k.is_assignment_operator()) else {
            return Ok(left);
        };
        if !self.factory.is_assignment_target(&left) {
            return Err(ParseError::invalid_assignment_target(TextSpan::from_bounds(start, self.last_end)).into());
        }

        let operator = self.expect(kind)?;
        let right = self.parse_assignment_expression()?;
        Ok(self.factory.assignment_expression(&operator.lexeme, left, right))
    }

    /// Left-associative fold over one operator tier.
    fn parse_binary_tier(&mut self, tier: Tier) -> ParseResult<F::Node> {
        let mut left = self.parse_tier_operand(tier)?;
        while self.at(tier.operator()) {
            let operator = self.expect(tier.operator())?;
            let right = self.parse_tier_operand(tier)?;
            left = tier.build(&self.factory, &operator.lexeme, left, right);
        }
        Ok(left)
    }

    fn parse_tier_operand(&mut self, tier: Tier) -> ParseResult<F::Node> {
        match tier.next() {
            Some(next) => self.parse_binary_tier(next),
            None => self.parse_unary_expression(),
        }
    }

    fn parse_unary_expression(&mut self) -> ParseResult<F::Node> {
        match self.current_kind() {
            Some(kind @ (TokenKind::AdditiveOperator | TokenKind::LogicalNot)) => {
                let operator = self.expect(kind)?;
                let argument = self.parse_unary_expression()?;
                Ok(self.factory.unary_expression(&operator.lexeme, argument))
            }
            _ => self.parse_left_hand_side_expression(),
        }
    }

    fn parse_left_hand_side_expression(&mut self) -> ParseResult<F::Node> {
        self.parse_call_member_expression()
    }

    fn parse_call_member_expression(&mut self) -> ParseResult<F::Node> {
        if self.at(TokenKind::Super) {
            self.expect(TokenKind::Super)?;
            let callee = self.factory.super_expression();
            return self.parse_call_expression(callee);
        }

        let member = self.parse_member_expression()?;
        if self.at(TokenKind::OpenParen) {
            return self.parse_call_expression(member);
        }
        Ok(member)
    }

    /// One call on `callee`, then further calls while `(` follows.
    fn parse_call_expression(&mut self, callee: F::Node) -> ParseResult<F::Node> {
        let arguments = self.parse_arguments()?;
        let mut call = self.factory.call_expression(callee, arguments);
        while self.at(TokenKind::OpenParen) {
            let arguments = self.parse_arguments()?;
            call = self.factory.call_expression(call, arguments);
        }
        Ok(call)
    }

    fn parse_arguments(&mut self) -> ParseResult<Vec<F::Node>> {
        self.expect(TokenKind::OpenParen)?;
        let arguments = if self.at(TokenKind::CloseParen) {
            Vec::new()
        } else {
            self.parse_argument_list()?
        };
        self.expect(TokenKind::CloseParen)?;
        Ok(arguments)
    }

    fn parse_argument_list(&mut self) -> ParseResult<Vec<F::Node>> {
        let mut arguments = vec![self.parse_assignment_expression()?];
        while self.at(TokenKind::Comma) {
            self.expect(TokenKind::Comma)?;
            arguments.push(self.parse_assignment_expression()?);
        }
        Ok(arguments)
    }

    fn parse_member_expression(&mut self) -> ParseResult<F::Node> {
        let mut object = self.parse_primary_expression()?;
        loop {
            match self.current_kind() {
                Some(TokenKind::Dot) => {
                    self.expect(TokenKind::Dot)?;
                    let property = self.parse_identifier()?;
                    object = self.factory.member_expression(false, object, property);
                }
                Some(TokenKind::OpenBracket) => {
                    self.expect(TokenKind::OpenBracket)?;
                    let property = self.parse_expression()?;
                    self.expect(TokenKind::CloseBracket)?;
                    object = self.factory.member_expression(true, object, property);
                }
                _ => return Ok(object),
            }
        }
    }

    fn parse_primary_expression(&mut self) -> ParseResult<F::Node> {
        match self.current_kind() {
            Some(kind) if kind.is_literal() => self.parse_literal(),
            Some(TokenKind::OpenParen) => self.parse_parenthesized_expression(),
            Some(TokenKind::Identifier) => self.parse_identifier(),
            Some(TokenKind::This) => {
                self.expect(TokenKind::This)?;
                Ok(self.factory.this_expression())
            }
            Some(TokenKind::New) => self.parse_new_expression(),
            _ => Err(self.unexpected("expression")),
        }
    }

    /// The inner expression; grouping leaves no node behind.
    fn parse_parenthesized_expression(&mut self) -> ParseResult<F::Node> {
        self.expect(TokenKind::OpenParen)?;
        let expression = self.parse_expression()?;
        self.expect(TokenKind::CloseParen)?;
        Ok(expression)
    }

    fn parse_new_expression(&mut self) -> ParseResult<F::Node> {
        self.expect(TokenKind::New)?;
        let callee = self.parse_member_expression()?;
        let arguments = self.parse_arguments()?;
        Ok(self.factory.new_expression(callee, arguments))
    }

    pub(crate) fn parse_identifier(&mut self) -> ParseResult<F::Node> {
        let token = self.expect(TokenKind::Identifier)?;
        Ok(self.factory.identifier(&token.lexeme))
    }

    // ========================================================================
    // Literals
    // ========================================================================

    fn parse_literal(&mut self) -> ParseResult<F::Node> {
        match self.current_kind() {
            Some(TokenKind::Number) => self.parse_numeric_literal(),
            Some(TokenKind::String) => self.parse_string_literal(),
            Some(TokenKind::True) => self.parse_boolean_literal(true),
            Some(TokenKind::False) => self.parse_boolean_literal(false),
            Some(TokenKind::Null) => {
                self.expect(TokenKind::Null)?;
                Ok(self.factory.null_literal())
            }
            _ => Err(self.unexpected("literal")),
        }
    }

    fn parse_numeric_literal(&mut self) -> ParseResult<F::Node> {
        let token = self.expect(TokenKind::Number)?;
        let value: f64 = token
            .lexeme
            .parse()
            .map_err(|_| ParseError::unexpected_token(token.lexeme.clone(), "number", token.span))?;
        Ok(self.factory.numeric_literal(value))
    }

    fn parse_string_literal(&mut self) -> ParseResult<F::Node> {
        let token = self.expect(TokenKind::String)?;
        // Both delimiters are single-byte quotes.
        let value = &token.lexeme[1..token.lexeme.len() - 1];
        Ok(self.factory.string_literal(value))
    }

    fn parse_boolean_literal(&mut self, value: bool) -> ParseResult<F::Node> {
        self.expect(if value { TokenKind::True } else { TokenKind::False })?;
        Ok(self.factory.boolean_literal(value))
    }
}
