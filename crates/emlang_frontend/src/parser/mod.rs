
mod expr;

use emlang_session::diagnostics::prelude::*;

use crate::ast::*;
use crate::scanner::Scanner;
use crate::token::{Keyword, Token, TokenKind};

#[derive(serde::Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub found: TokenKind,
    pub span: Span,
}

#[derive(serde::Serialize, thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("expected a top-level declaration")]
    ExpectedTopLevelDeclaration,

    #[error("expected an identifier")]
    ExpectedIdentifier,

    #[error("expected empty parameter list")]
    ExpectedEmptyParameterList,

    #[error("expected `{{`")]
    ExpectedBlock,

    #[error("unexpected end of file")]
    UnexpectedEof,

    #[error("expected a statement")]
    ExpectedStatement,

    #[error("expected `=`")]
    ExpectedAssignment,

    #[error("expected `;`")]
    ExpectedSemicolon,

    #[error("expected an expression")]
    ExpectedExpression,

    #[error("could not parse integer literal")]
    InvalidIntLiteral,

    #[error("expected `(`")]
    ExpectedLParen,

    #[error("expected `)`")]
    ExpectedRParen,
}

impl ParseError {
    pub fn message(&self) -> String {
        match self.kind {
            ParseErrorKind::UnexpectedEof => self.kind.to_string(),
            _ => format!("{}, found {}", self.kind, self.found.token_name()),
        }
    }
}

impl IntoDiagnostic<SourceId> for ParseError {
    fn into_diagnostic(self, source_id: &SourceId) -> Diagnostic {
        let diagnostic = Diagnostic::error()
            .with_message("syntax error")
            .with_snippet(Snippet::primary(self.message(), *source_id, self.span));

        match self.found {
            TokenKind::Illegal => diagnostic.with_snippet(Snippet::secondary(
                "unexpected character",
                *source_id,
                self.span,
            )),
            _ => diagnostic,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Lookahead<'src> {
    token: Token<'src>,
    span: Span,
}

/// Recursive descent parser with one token of lookahead.
///
/// Errors never stop the parse. Each one is recorded and parsing carries on
/// from the current token, so the returned tree always has the right shape
/// but is only trustworthy when no errors were reported.
pub struct Parser<'src> {
    scanner: Scanner<'src>,

    current: Lookahead<'src>,
    peek: Lookahead<'src>,

    errors: Vec<ParseError>,
}

impl<'src> Parser<'src> {
    pub fn new(mut scanner: Scanner<'src>) -> Self {
        let current = Self::scan(&mut scanner);
        let peek = Self::scan(&mut scanner);

        Self {
            scanner,

            current,
            peek,

            errors: vec![],
        }
    }

    pub fn parse(mut self) -> (Program, Vec<ParseError>) {
        let program = self.parse_program();
        (program, self.errors)
    }

    fn parse_program(&mut self) -> Program {
        let mut declarations = vec![];

        while !self.at(TokenKind::Eof) {
            match self.current.token.kind {
                TokenKind::Keyword(Keyword::Fn) => {
                    let func = self.parse_function_declaration();
                    declarations.push(TopLevelDeclaration::Function(func));
                }

                _ => {
                    self.report(ParseErrorKind::ExpectedTopLevelDeclaration);
                    while !self.at(TokenKind::Keyword(Keyword::Fn)) && !self.at(TokenKind::Eof) {
                        self.advance();
                    }
                }
            }
        }

        Program { declarations }
    }

    fn parse_function_declaration(&mut self) -> FunctionDeclaration {
        // `fn`
        self.advance();

        let name = self.parse_identifier();
        self.parse_empty_parameter_list();

        let return_type = if self.at(TokenKind::Ident) {
            self.parse_identifier()
        } else {
            Identifier::void()
        };

        let body = self.parse_block_statement();

        FunctionDeclaration {
            name,
            return_type,
            body,
        }
    }

    fn parse_empty_parameter_list(&mut self) {
        if self.at(TokenKind::LParen) && self.peek.token.kind == TokenKind::RParen {
            self.advance();
            self.advance();
            return;
        }

        self.report(ParseErrorKind::ExpectedEmptyParameterList);

        if self.eat(TokenKind::LParen) {
            while !matches!(
                self.current.token.kind,
                TokenKind::RParen | TokenKind::LBrace | TokenKind::RBrace | TokenKind::Eof
            ) {
                self.advance();
            }
            self.eat(TokenKind::RParen);
        }
    }

    fn parse_block_statement(&mut self) -> BlockStatement {
        let mut statements = vec![];

        if !self.eat(TokenKind::LBrace) {
            self.report(ParseErrorKind::ExpectedBlock);
            if self.at(TokenKind::Eof) {
                return BlockStatement { statements };
            }
        }

        while !self.at(TokenKind::RBrace) && !self.at(TokenKind::Eof) {
            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
        }

        if self.at(TokenKind::Eof) {
            self.report(ParseErrorKind::UnexpectedEof);
        } else {
            // `}`
            self.advance();
        }

        BlockStatement { statements }
    }

    // always advances at least one token when not at `}` or the end
    fn parse_statement(&mut self) -> Option<Statement> {
        match self.current.token.kind {
            TokenKind::Keyword(Keyword::Return) => {
                Some(Statement::Return(self.parse_return_statement()))
            }

            TokenKind::Ident if self.peek.token.kind == TokenKind::Assign => {
                Some(Statement::Assignment(self.parse_assignment_statement()))
            }

            _ => {
                self.report(ParseErrorKind::ExpectedStatement);
                self.skip_statement();
                None
            }
        }
    }

    fn parse_assignment_statement(&mut self) -> AssignmentStatement {
        let target = self.parse_identifier();

        if !self.eat(TokenKind::Assign) {
            self.report(ParseErrorKind::ExpectedAssignment);
            // treat whatever is there as a mistyped `=`
            if !self.at_boundary() {
                self.advance();
            }
        }

        let value = self.parse_expression();
        self.expect_semicolon();

        AssignmentStatement { target, value }
    }

    fn parse_return_statement(&mut self) -> ReturnStatement {
        // `return`
        self.advance();

        let value = self.parse_expression();
        self.expect_semicolon();

        ReturnStatement { value }
    }

    fn parse_identifier(&mut self) -> Identifier {
        if self.at(TokenKind::Ident) {
            let token = self.advance();
            Identifier::new(token.literal)
        } else {
            self.report(ParseErrorKind::ExpectedIdentifier);
            Identifier::new("")
        }
    }

    fn expect_semicolon(&mut self) {
        if !self.eat(TokenKind::Semicolon) {
            self.report(ParseErrorKind::ExpectedSemicolon);
        }
    }

    /// Skips to the next token that can start a statement, a `}` or the end
    /// of the source. The current token never starts a statement, so at least
    /// one token is consumed.
    fn skip_statement(&mut self) {
        while !self.at_statement_start()
            && !self.at(TokenKind::RBrace)
            && !self.at(TokenKind::Eof)
        {
            self.advance();
        }
    }

    fn at_statement_start(&self) -> bool {
        match self.current.token.kind {
            TokenKind::Keyword(Keyword::Return) => true,
            TokenKind::Ident => self.peek.token.kind == TokenKind::Assign,
            _ => false,
        }
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.current.token.kind == kind
    }

    fn at_boundary(&self) -> bool {
        matches!(
            self.current.token.kind,
            TokenKind::Semicolon | TokenKind::RBrace | TokenKind::Eof
        )
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Moves the lookahead along by one token, returning the token that was
    /// current.
    fn advance(&mut self) -> Token<'src> {
        let next = Self::scan(&mut self.scanner);
        let prev = std::mem::replace(&mut self.current, std::mem::replace(&mut self.peek, next));
        prev.token
    }

    fn scan(scanner: &mut Scanner<'src>) -> Lookahead<'src> {
        let token = scanner.next_token();
        Lookahead {
            token,
            span: scanner.prev_span(),
        }
    }

    fn report(&mut self, kind: ParseErrorKind) {
        self.errors.push(ParseError {
            kind,
            found: self.current.token.kind,
            span: self.current.span,
        });
    }
}
