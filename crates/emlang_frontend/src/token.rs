use crate::NodeCopy;

/// A token kind paired with the exact text it was scanned from.
#[derive(NodeCopy!)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub literal: &'src str,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, literal: &'src str) -> Self {
        Self { kind, literal }
    }
}

#[derive(NodeCopy!)]
pub enum TokenKind {
    Illegal,
    Eof,

    Keyword(Keyword),
    Ident,
    Int,

    Add,
    Sub,
    Mul,
    Div,

    LParen,
    RParen,
    LBrace,
    RBrace,

    Assign,
    Comma,
    Semicolon,
}

#[derive(NodeCopy!)]
pub enum Keyword {
    Fn,
    Return,
}

impl TokenKind {
    /// Resolves a scanned identifier against the keyword table.
    pub fn lookup_ident(ident: &str) -> Self {
        match ident {
            "fn" => TokenKind::Keyword(Keyword::Fn),
            "return" => TokenKind::Keyword(Keyword::Return),
            _ => TokenKind::Ident,
        }
    }

    pub fn token_name(&self) -> &'static str {
        match self {
            TokenKind::Illegal => "illegal character",
            TokenKind::Eof => "end of file",
            TokenKind::Keyword(kw) => match kw {
                Keyword::Fn => "keyword `fn`",
                Keyword::Return => "keyword `return`",
            },
            TokenKind::Ident => "identifier",
            TokenKind::Int => "integer",
            TokenKind::Add => "`+`",
            TokenKind::Sub => "`-`",
            TokenKind::Mul => "`*`",
            TokenKind::Div => "`/`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::Assign => "`=`",
            TokenKind::Comma => "`,`",
            TokenKind::Semicolon => "`;`",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Keyword, TokenKind};

    #[test]
    fn keywords_resolve() {
        assert_eq!(TokenKind::lookup_ident("fn"), TokenKind::Keyword(Keyword::Fn));
        assert_eq!(
            TokenKind::lookup_ident("return"),
            TokenKind::Keyword(Keyword::Return)
        );
    }

    #[test]
    fn keywords_are_case_sensitive() {
        assert_eq!(TokenKind::lookup_ident("Fn"), TokenKind::Ident);
        assert_eq!(TokenKind::lookup_ident("RETURN"), TokenKind::Ident);
        assert_eq!(TokenKind::lookup_ident("fnord"), TokenKind::Ident);
    }
}
