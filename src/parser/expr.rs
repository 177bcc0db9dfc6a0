use crate::{
    ast::{
        ast::ExprWrapper,
        expressions::{FloatExpr, InfixExpr, IntegerExpr},
    },
    errors::errors::DiagnosticKind,
    lexer::tokens::TokenKind,
};

use super::{lookups::Precedence, parser::Parser};

/// Precedence-climbing core.
///
/// Builds the leftmost operand with a prefix handler, then keeps folding
/// it into infix nodes while the lookahead binds more strongly than
/// `precedence`. The strict `<` comparison is what makes every registered
/// operator left-associative.
pub fn parse_expression(parser: &mut Parser, precedence: Precedence) -> Option<ExprWrapper> {
    let prefix_fn = match parser.get_prefix_lookup().get(&parser.current_token_kind()) {
        Some(prefix_fn) => *prefix_fn,
        None => {
            parser.no_prefix_parse_fn_error();
            return None;
        }
    };

    let mut left = prefix_fn(parser)?;

    while !parser.peek_token_is(TokenKind::Semicolon) && precedence < parser.peek_precedence() {
        let infix_fn = match parser.get_infix_lookup().get(&parser.peek_token_kind()) {
            Some(infix_fn) => *infix_fn,
            // Lookahead is an operator-free continuation, e.g. Eof or a
            // closing parenthesis; the expression ends here.
            None => return Some(left),
        };

        parser.advance();
        left = infix_fn(parser, left)?;
    }

    Some(left)
}

/// Invoked with the cursor on the operator token.
///
/// The right side is parsed at the operator's own precedence, not one
/// notch lower. A failed right-operand parse leaves `right` absent; the
/// node is still produced and the diagnostic already recorded.
pub fn parse_infix_expression(parser: &mut Parser, left: ExprWrapper) -> Option<ExprWrapper> {
    let operator = parser.current_token().literal.clone();
    let precedence = parser.current_precedence();

    parser.advance();
    let right = parse_expression(parser, precedence);

    Some(ExprWrapper::new(InfixExpr {
        left,
        operator,
        right,
    }))
}

pub fn parse_grouped_expression(parser: &mut Parser) -> Option<ExprWrapper> {
    parser.advance(); // consume the '('
    let expr = parse_expression(parser, Precedence::Lowest);

    if !parser.expect_peek(TokenKind::CloseParen) {
        return None;
    }

    expr
}

pub fn parse_integer_literal(parser: &mut Parser) -> Option<ExprWrapper> {
    match parser.current_token().literal.parse::<i64>() {
        Ok(value) => Some(ExprWrapper::new(IntegerExpr { value })),
        Err(_) => {
            let literal = parser.current_token().literal.clone();
            parser.literal_error(DiagnosticKind::IntegerParseError { literal });
            None
        }
    }
}

pub fn parse_float_literal(parser: &mut Parser) -> Option<ExprWrapper> {
    match parser.current_token().literal.parse::<f64>() {
        Ok(value) => Some(ExprWrapper::new(FloatExpr { value })),
        Err(_) => {
            let literal = parser.current_token().literal.clone();
            parser.literal_error(DiagnosticKind::FloatParseError { literal });
            None
        }
    }
}
