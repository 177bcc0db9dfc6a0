use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        // Alternate spellings accepted by the language
        map.insert("pucha", TokenKind::Let);
        map.insert("ponle", TokenKind::Assignment);
        map.insert("sipe", TokenKind::Semicolon);
        // Builtin type names
        map.insert("int", TokenKind::Type);
        map.insert("float", TokenKind::Type);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Eof,
    Illegal,

    Ident,
    Int,
    Float,

    Plus,
    Dash,
    Star,
    Slash,
    Caret,
    Percent,

    Assignment, // =

    Colon,
    Semicolon,
    OpenParen,
    CloseParen,

    // Reserved
    Let,
    Type,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub line: u32,
    pub column: u32,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Token {{\nkind: {},\nliteral: {},\nline: {},\ncolumn: {}}}",
            self.kind, self.literal, self.line, self.column
        )
    }
}

impl Token {
    fn is_one_of_many(&self, kinds: Vec<TokenKind>) -> bool {
        for kind in kinds {
            if kind == self.kind {
                return true;
            }
        }

        false
    }

    pub fn debug(&self) {
        if self.is_one_of_many(vec![
            TokenKind::Ident,
            TokenKind::Int,
            TokenKind::Float,
            TokenKind::Illegal,
        ]) {
            println!("{} ({})", self.kind, self.literal);
        } else {
            println!("{} ()", self.kind);
        }
    }
}
