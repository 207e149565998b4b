#[cfg(test)]
mod tests;

use std::str::Chars;

use emlang_session::diagnostics::prelude::Span;
use emlang_utils::peek::Peek;

use crate::token::{Token, TokenKind};

/// Turns source text into tokens, one per call to [`Scanner::next_token`].
///
/// Scanning never fails: characters that don't start a token come out as
/// [`TokenKind::Illegal`], and once the source is exhausted every call
/// returns [`TokenKind::Eof`].
pub struct Scanner<'src> {
    all: &'src str,
    chars: Chars<'src>,

    token_start: usize,
    prev_span: Span,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            all: source,
            chars: source.chars(),

            token_start: 0,
            prev_span: Span::empty(0),
        }
    }

    pub fn next_token(&mut self) -> Token<'src> {
        self.chars.eat_while(|&ch| is_whitespace(ch));

        self.token_start = self.byte_pos();

        let kind = match self.chars.next() {
            None => TokenKind::Eof,

            Some('+') => TokenKind::Add,
            Some('-') => TokenKind::Sub,
            Some('*') => TokenKind::Mul,
            Some('/') => TokenKind::Div,

            Some('=') => TokenKind::Assign,
            Some(',') => TokenKind::Comma,
            Some(';') => TokenKind::Semicolon,

            Some('(') => TokenKind::LParen,
            Some(')') => TokenKind::RParen,
            Some('{') => TokenKind::LBrace,
            Some('}') => TokenKind::RBrace,

            Some(ch) if is_digit(ch) => {
                self.chars.eat_while(|&ch| is_digit(ch));
                TokenKind::Int
            }

            Some(ch) if is_letter(ch) => {
                self.chars.eat_while(|&ch| is_letter(ch));
                TokenKind::lookup_ident(self.token_str())
            }

            Some(_) => TokenKind::Illegal,
        };

        self.prev_span = Span::new(self.token_start, self.byte_pos());

        Token::new(kind, self.token_str())
    }

    /// Span of the token most recently returned by [`Scanner::next_token`].
    pub fn prev_span(&self) -> Span {
        self.prev_span
    }

    pub fn eof_span(&self) -> Span {
        Span::empty(self.all.len())
    }

    fn token_str(&self) -> &'src str {
        &self.all[self.token_start..self.byte_pos()]
    }

    fn byte_pos(&self) -> usize {
        self.all.len() - self.chars.as_str().len()
    }
}

fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}

fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}
