use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::TokenKind;

/// A recorded, non-fatal description of a grammar violation.
///
/// Carries the 1-based source position of the token that triggered it.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    kind: DiagnosticKind,
    line: u32,
    column: u32,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, line: u32, column: u32) -> Self {
        Diagnostic { kind, line, column }
    }

    pub fn kind(&self) -> &DiagnosticKind {
        &self.kind
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn name(&self) -> &str {
        match &self.kind {
            DiagnosticKind::UnexpectedToken { .. } => "UnexpectedToken",
            DiagnosticKind::NoPrefixParseFn { .. } => "NoPrefixParseFn",
            DiagnosticKind::IntegerParseError { .. } => "IntegerParseError",
            DiagnosticKind::FloatParseError { .. } => "FloatParseError",
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiagnosticKind {
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },
    #[error("no prefix parse function for {kind} found")]
    NoPrefixParseFn { kind: TokenKind },
    #[error("could not parse {literal:?} as an integer")]
    IntegerParseError { literal: String },
    #[error("could not parse {literal:?} as a float")]
    FloatParseError { literal: String },
}
