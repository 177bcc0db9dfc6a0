use std::collections::HashMap;

use crate::{ast::ast::ExprWrapper, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

/// Operator precedence, ordered weakest to strongest.
///
/// Only `Sum`, `Product` and `Exponent` have operators registered against
/// them; the remaining levels are reserved slots for grammar growth
/// (comparisons, unary prefixes, calls, indexing) and carry no table
/// entries yet.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Exponent,
    Prefix,
    Call,
    Index,
}

pub type PrefixHandler = fn(&mut Parser) -> Option<ExprWrapper>;
pub type InfixHandler = fn(&mut Parser, ExprWrapper) -> Option<ExprWrapper>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Additive
    parser.infix(TokenKind::Plus, Precedence::Sum, parse_infix_expression);
    parser.infix(TokenKind::Dash, Precedence::Sum, parse_infix_expression);

    // Multiplicative
    parser.infix(TokenKind::Star, Precedence::Product, parse_infix_expression);
    parser.infix(TokenKind::Slash, Precedence::Product, parse_infix_expression);
    parser.infix(TokenKind::Percent, Precedence::Product, parse_infix_expression);

    parser.infix(TokenKind::Caret, Precedence::Exponent, parse_infix_expression);

    // Literals and grouping
    parser.prefix(TokenKind::Int, parse_integer_literal);
    parser.prefix(TokenKind::Float, parse_float_literal);
    parser.prefix(TokenKind::OpenParen, parse_grouped_expression);
}

// The tables themselves live inside the parser struct
pub type PrefixLookup = HashMap<TokenKind, PrefixHandler>;
pub type InfixLookup = HashMap<TokenKind, InfixHandler>;
pub type PrecedenceLookup = HashMap<TokenKind, Precedence>;
