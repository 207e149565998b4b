#[macro_use]
extern crate macro_rules_attribute;

mod parser;
mod scanner;

pub mod ast;
pub mod token;

#[cfg(test)]
mod samples;

pub use parser::{ParseError, ParseErrorKind, Parser};
pub use scanner::Scanner;

use ast::Program;

derive_alias! {
    #[derive(Node!)] = #[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)];
    #[derive(NodeCopy!)] = #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)];
}

pub fn scan(source: &str) -> Scanner<'_> {
    Scanner::new(source)
}

pub fn parse(source: &str) -> (Program, Vec<ParseError>) {
    Parser::new(Scanner::new(source)).parse()
}
