//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the top-level parsing
//! entry point. The parser uses a Pratt approach with prefix/infix handlers
//! for expression parsing.
//!
//! It maintains lookup tables for:
//! - Prefix handlers for tokens that can begin an expression
//! - Infix handlers for tokens that continue an expression
//! - Operator precedences
//!
//! Grammar violations never abort the parse: each one is recorded as a
//! diagnostic and parsing continues until end of stream.

use std::collections::HashMap;

use crate::{
    ast::statements::Program,
    errors::errors::{Diagnostic, DiagnosticKind},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{
        create_token_lookups, InfixHandler, InfixLookup, Precedence, PrecedenceLookup,
        PrefixHandler, PrefixLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// This struct pulls tokens from the lexer through a two-token cursor
/// (`current_token` / `peek_token`) and maintains the handler lookup
/// tables plus the accumulated diagnostics.
pub struct Parser {
    /// The token source; pulled one token at a time
    lexer: Lexer,
    /// Token being processed right now
    current_token: Token,
    /// One-token lookahead used to decide whether to keep extending
    peek_token: Token,
    /// Diagnostics accumulated so far, in source order
    errors: Vec<Diagnostic>,
    /// Lookup table for prefix (expression start) handlers
    prefix_lookup: PrefixLookup,
    /// Lookup table for infix (expression continuation) handlers
    infix_lookup: InfixLookup,
    /// Lookup table for operator precedences
    precedence_lookup: PrecedenceLookup,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// The cursor is primed with two pulls so that `current_token` holds
    /// the stream's first token and `peek_token` the second; on an empty
    /// source both hold the `Eof` sentinel.
    pub fn new(mut lexer: Lexer) -> Self {
        let current_token = lexer.next_token();
        let peek_token = lexer.next_token();

        Parser {
            lexer,
            current_token,
            peek_token,
            errors: vec![],
            prefix_lookup: HashMap::new(),
            infix_lookup: HashMap::new(),
            precedence_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    /// Returns the lookahead token without advancing.
    pub fn peek_token(&self) -> &Token {
        &self.peek_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    /// Returns the kind of the lookahead token.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek_token.kind
    }

    /// Shifts the cursor one token forward.
    ///
    /// Past end-of-stream the lexer keeps handing out `Eof`, so advancing
    /// is always safe.
    pub fn advance(&mut self) {
        self.current_token = std::mem::replace(&mut self.peek_token, self.lexer.next_token());
    }

    pub fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current_token.kind == kind
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// Checked consumption of the lookahead token.
    ///
    /// If the lookahead matches, advances onto it and returns true.
    /// Otherwise records an `UnexpectedToken` diagnostic and returns false
    /// without moving the cursor; the caller must treat the construct as
    /// failed.
    pub fn expect_peek(&mut self, expected: TokenKind) -> bool {
        if self.peek_token_is(expected) {
            self.advance();
            true
        } else {
            self.peek_error(expected);
            false
        }
    }

    /// Looks up the precedence registered for a token kind.
    ///
    /// Total: kinds with no registered operator rank `Lowest`.
    pub fn precedence_of(&self, kind: TokenKind) -> Precedence {
        match self.precedence_lookup.get(&kind) {
            Some(precedence) => *precedence,
            None => Precedence::Lowest,
        }
    }

    pub fn current_precedence(&self) -> Precedence {
        self.precedence_of(self.current_token.kind)
    }

    pub fn peek_precedence(&self) -> Precedence {
        self.precedence_of(self.peek_token.kind)
    }

    /// Returns the diagnostics recorded so far, in the order they occurred.
    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    /// Records an `UnexpectedToken` diagnostic against the lookahead token.
    pub fn peek_error(&mut self, expected: TokenKind) {
        self.errors.push(Diagnostic::new(
            DiagnosticKind::UnexpectedToken {
                expected,
                found: self.peek_token.kind,
            },
            self.peek_token.line,
            self.peek_token.column,
        ));
    }

    /// Records a `NoPrefixParseFn` diagnostic against the current token.
    pub fn no_prefix_parse_fn_error(&mut self) {
        self.errors.push(Diagnostic::new(
            DiagnosticKind::NoPrefixParseFn {
                kind: self.current_token.kind,
            },
            self.current_token.line,
            self.current_token.column,
        ));
    }

    /// Records a literal conversion diagnostic against the current token.
    pub fn literal_error(&mut self, kind: DiagnosticKind) {
        self.errors.push(Diagnostic::new(
            kind,
            self.current_token.line,
            self.current_token.column,
        ));
    }

    /// Registers a prefix handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `prefix_fn` - The handler invoked when `kind` begins an expression
    pub fn prefix(&mut self, kind: TokenKind, prefix_fn: PrefixHandler) {
        self.prefix_lookup.insert(kind, prefix_fn);
    }

    /// Registers an infix handler and its operator precedence for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `precedence` - The binding strength of this operator
    /// * `infix_fn` - The handler invoked when `kind` continues an expression
    pub fn infix(&mut self, kind: TokenKind, precedence: Precedence, infix_fn: InfixHandler) {
        self.precedence_lookup.insert(kind, precedence);
        self.infix_lookup.insert(kind, infix_fn);
    }

    /// Returns a reference to the prefix handler lookup table.
    pub fn get_prefix_lookup(&self) -> &PrefixLookup {
        &self.prefix_lookup
    }

    /// Returns a reference to the infix handler lookup table.
    pub fn get_infix_lookup(&self) -> &InfixLookup {
        &self.infix_lookup
    }

    /// Parses statements until the `Eof` sentinel.
    ///
    /// A statement whose expression failed to parse is omitted from the
    /// program rather than aborting the loop; the diagnostics list is the
    /// authoritative failure signal.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.current_token_is(TokenKind::Eof) {
            if let Some(stmt) = parse_stmt(self) {
                program.statements.push(stmt);
            }
            self.advance();
        }

        program
    }
}

/// Parses a token stream into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes the handler lookup tables, and parses statements until EOF.
///
/// # Arguments
///
/// * `lexer` - The token source to pull from
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (inspect `errors()` for diagnostics)
/// - The parsed Program
pub fn parse(lexer: Lexer) -> (Parser, Program) {
    let mut parser = Parser::new(lexer);
    create_token_lookups(&mut parser);

    let program = parser.parse_program();

    (parser, program)
}
