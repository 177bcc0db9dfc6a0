use crate::{
    ast::{ast::StmtWrapper, statements::ExpressionStmt},
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expression, lookups::Precedence, parser::Parser};

/// Statement dispatch. The grammar currently only has expression
/// statements, so this is a single delegation.
pub fn parse_stmt(parser: &mut Parser) -> Option<StmtWrapper> {
    parse_expression_stmt(parser)
}

/// Parses one expression statement: an expression at `Lowest` precedence
/// followed by an optional terminator.
///
/// The terminator is consumed whether or not the expression parsed, so a
/// failed statement does not leave its `;` behind to poison the next one.
pub fn parse_expression_stmt(parser: &mut Parser) -> Option<StmtWrapper> {
    let expression = parse_expression(parser, Precedence::Lowest);

    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }

    expression.map(|expression| StmtWrapper::new(ExpressionStmt { expression }))
}
