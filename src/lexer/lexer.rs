use lazy_static::lazy_static;
use regex::Regex;

use crate::{MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type PatternHandler = fn(&mut Lexer, &Regex) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: PatternHandler,
}

lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("[0-9]+(\\.[0-9]+)?").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("\\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("\\/\\/.*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new("\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new("=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
        RegexPattern { regex: Regex::new(";").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
        RegexPattern { regex: Regex::new(":").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon, ":") },
        RegexPattern { regex: Regex::new("\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        RegexPattern { regex: Regex::new("/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: Regex::new("\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
        RegexPattern { regex: Regex::new("\\^").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Caret, "^") },
        RegexPattern { regex: Regex::new("%").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Percent, "%") },
    ];
}

pub struct Lexer {
    source: String,
    pos: usize,
    line: u32,
    column: u32,
}

impl Lexer {
    pub fn new(source: String) -> Lexer {
        Lexer {
            source,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Pulls the next token off the source. Once the source is exhausted
    /// this keeps returning `Eof` tokens on every call.
    pub fn next_token(&mut self) -> Token {
        while !self.at_eof() {
            let mut matched = false;

            for pattern in PATTERNS.iter() {
                let starts_here = match pattern.regex.find(self.remainder()) {
                    Some(found) => found.start() == 0,
                    None => false,
                };

                if !starts_here {
                    continue;
                }

                matched = true;
                if let Some(token) = (pattern.handler)(self, &pattern.regex) {
                    return token;
                }

                // Skip handler consumed input, rescan from the top
                break;
            }

            if !matched {
                let (line, column) = self.location();
                let unrecognised = self.at().to_string();
                self.advance_over(&unrecognised);
                return MK_TOKEN!(TokenKind::Illegal, unrecognised, line, column);
            }
        }

        MK_TOKEN!(TokenKind::Eof, String::from("EOF"), self.line, self.column)
    }

    pub fn location(&self) -> (u32, u32) {
        (self.line, self.column)
    }

    pub fn advance_over(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos += text.len();
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();
    let kind = match RESERVED_LOOKUP.get(matched.as_str()) {
        Some(kind) => *kind,
        None => TokenKind::Ident,
    };

    let (line, column) = lexer.location();
    lexer.advance_over(&matched);
    Some(MK_TOKEN!(kind, matched, line, column))
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();
    let kind = if matched.contains('.') {
        TokenKind::Float
    } else {
        TokenKind::Int
    };

    let (line, column) = lexer.location();
    lexer.advance_over(&matched);
    Some(MK_TOKEN!(kind, matched, line, column))
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();
    lexer.advance_over(&matched);
    None
}
