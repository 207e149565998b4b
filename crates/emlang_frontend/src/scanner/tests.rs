use std::fmt::Write as _;

use emlang_session::diagnostics::prelude::Span;

use super::Scanner;
use crate::samples;
use crate::token::{Keyword, Token, TokenKind};

fn scan_all(source: &str) -> Vec<Token<'_>> {
    let mut scanner = Scanner::new(source);
    let mut tokens = vec![];

    loop {
        let token = scanner.next_token();
        tokens.push(token);

        if token.kind == TokenKind::Eof {
            return tokens;
        }
    }
}

fn pairs(source: &str) -> Vec<(TokenKind, &str)> {
    scan_all(source)
        .into_iter()
        .map(|token| (token.kind, token.literal))
        .collect()
}

fn render_tokens(source: &str) -> String {
    let mut s = String::new();
    for token in scan_all(source) {
        let _ = writeln!(s, "{:?} {:?}", token.kind, token.literal);
    }
    s
}

macro_rules! assert_scans {
    ($source:expr => [$($kind:expr, $literal:expr);* $(;)?]) => {{
        let expected: Vec<(TokenKind, &str)> = vec![$(($kind, $literal)),*];
        assert_eq!(pairs($source), expected, "scanning {:?}", $source);
    }};
}

#[test]
fn empty_source() {
    assert_scans!("" => [TokenKind::Eof, ""]);
}

#[test]
fn illegal_characters() {
    assert_scans!("@" => [TokenKind::Illegal, "@"; TokenKind::Eof, ""]);
    assert_scans!("é?" => [TokenKind::Illegal, "é"; TokenKind::Illegal, "?"; TokenKind::Eof, ""]);
}

#[test]
fn nul_is_not_end_of_input() {
    assert_scans!("a\0b" => [
        TokenKind::Ident, "a";
        TokenKind::Illegal, "\0";
        TokenKind::Ident, "b";
        TokenKind::Eof, "";
    ]);
}

#[test]
fn whitespace_only() {
    assert_scans!(" \t\n\r" => [TokenKind::Eof, ""]);
}

#[test]
fn binary_operators() {
    assert_scans!("+-*/" => [
        TokenKind::Add, "+";
        TokenKind::Sub, "-";
        TokenKind::Mul, "*";
        TokenKind::Div, "/";
        TokenKind::Eof, "";
    ]);
}

#[test]
fn brackets() {
    assert_scans!("(){}" => [
        TokenKind::LParen, "(";
        TokenKind::RParen, ")";
        TokenKind::LBrace, "{";
        TokenKind::RBrace, "}";
        TokenKind::Eof, "";
    ]);
}

#[test]
fn comma_assign_and_semicolon() {
    assert_scans!(",=;" => [
        TokenKind::Comma, ",";
        TokenKind::Assign, "=";
        TokenKind::Semicolon, ";";
        TokenKind::Eof, "";
    ]);
}

#[test]
fn integers() {
    assert_scans!("123" => [TokenKind::Int, "123"; TokenKind::Eof, ""]);
    // no sign, the minus is its own token
    assert_scans!("-7" => [TokenKind::Sub, "-"; TokenKind::Int, "7"; TokenKind::Eof, ""]);
}

#[test]
fn identifiers() {
    assert_scans!("_abc" => [TokenKind::Ident, "_abc"; TokenKind::Eof, ""]);
    assert_scans!("Foo_bar" => [TokenKind::Ident, "Foo_bar"; TokenKind::Eof, ""]);
}

#[test]
fn identifiers_do_not_contain_digits() {
    assert_scans!("abc1" => [TokenKind::Ident, "abc"; TokenKind::Int, "1"; TokenKind::Eof, ""]);
    assert_scans!("1abc" => [TokenKind::Int, "1"; TokenKind::Ident, "abc"; TokenKind::Eof, ""]);
}

#[test]
fn keywords() {
    assert_scans!("fn return" => [
        TokenKind::Keyword(Keyword::Fn), "fn";
        TokenKind::Keyword(Keyword::Return), "return";
        TokenKind::Eof, "";
    ]);
    assert_scans!("returnx fnfn" => [
        TokenKind::Ident, "returnx";
        TokenKind::Ident, "fnfn";
        TokenKind::Eof, "";
    ]);
}

#[test]
fn eof_repeats_forever() {
    let mut scanner = Scanner::new("x");
    assert_eq!(scanner.next_token(), Token::new(TokenKind::Ident, "x"));

    for _ in 0..5 {
        assert_eq!(scanner.next_token(), Token::new(TokenKind::Eof, ""));
        assert_eq!(scanner.prev_span(), Span::empty(1));
    }
}

#[test]
fn every_input_reaches_eof() {
    let mut source: String = (0u8..128).map(char::from).collect();
    source.push_str("ünïcödé → 🦀");

    // each call consumes at least one char until the end
    let tokens = scan_all(&source);
    assert!(tokens.len() <= source.chars().count() + 1);

    let mut scanner = Scanner::new(&source);
    let mut calls = 0;
    while scanner.next_token().kind != TokenKind::Eof {
        calls += 1;
        assert!(calls <= source.len());
    }
    assert_eq!(scanner.next_token().kind, TokenKind::Eof);
}

#[test]
fn whitespace_between_tokens_is_invisible() {
    let tight = "fn main()int{foo=helper();return foo;}";
    let padded = " \n fn\tmain \r\n(  )\tint {\n\n foo =  helper ( ) ;\r\n return\tfoo ; \n}\n\t";

    assert_eq!(pairs(tight), pairs(padded));
}

#[test]
fn spans_cover_literals() {
    let mut scanner = Scanner::new("fn  main\n(");

    scanner.next_token();
    assert_eq!(scanner.prev_span(), Span::new(0, 2));
    scanner.next_token();
    assert_eq!(scanner.prev_span(), Span::new(4, 8));
    scanner.next_token();
    assert_eq!(scanner.prev_span(), Span::new(9, 10));
    scanner.next_token();
    assert_eq!(scanner.prev_span(), Span::empty(10));
    assert_eq!(scanner.prev_span(), scanner.eof_span());
}

#[test]
fn function() {
    insta::assert_snapshot!(render_tokens(samples::FUNCTION), @r#"
    Keyword(Fn) "fn"
    Ident "main"
    LParen "("
    RParen ")"
    Ident "int"
    LBrace "{"
    Keyword(Return) "return"
    Int "1"
    Semicolon ";"
    RBrace "}"
    Eof ""
    "#);
}
