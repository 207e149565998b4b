use super::{ParseErrorKind, Parser};
use crate::ast::*;
use crate::token::TokenKind;

impl Parser<'_> {
    pub(super) fn parse_expression(&mut self) -> Expression {
        match self.current.token.kind {
            TokenKind::Ident if self.peek.token.kind == TokenKind::LParen => {
                Expression::Call(self.parse_call_expression())
            }

            TokenKind::Ident => Expression::Identifier(self.parse_identifier()),

            TokenKind::Int => Expression::Int(self.parse_int_literal()),

            _ => {
                self.report(ParseErrorKind::ExpectedExpression);
                if !self.at_boundary() {
                    self.advance();
                }
                Expression::ParseError
            }
        }
    }

    pub(super) fn parse_int_literal(&mut self) -> IntLiteral {
        let value = match self.current.token.literal.parse() {
            Ok(value) => value,
            Err(_) => {
                self.report(ParseErrorKind::InvalidIntLiteral);
                0
            }
        };

        let token = self.advance();

        IntLiteral {
            value,
            literal: token.literal.to_owned(),
        }
    }

    // the argument list is always empty for now
    pub(super) fn parse_call_expression(&mut self) -> CallExpression {
        let function = self.parse_identifier();

        if !self.eat(TokenKind::LParen) {
            self.report(ParseErrorKind::ExpectedLParen);
        }
        if !self.eat(TokenKind::RParen) {
            self.report(ParseErrorKind::ExpectedRParen);
        }

        CallExpression { function }
    }
}
