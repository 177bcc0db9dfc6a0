//! Utility macros for the frontend.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for simple tokens
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$literal` - The token's string literal
/// * `$line` - 1-based source line
/// * `$column` - 1-based source column
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, "42".to_string(), 1, 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $literal:expr, $line:expr, $column:expr) => {
        Token {
            kind: $kind,
            literal: $literal,
            line: $line,
            column: $column,
        }
    };
}

/// Creates a default lexer handler for simple fixed-text patterns.
///
/// Generates a handler function that emits a token with the given kind
/// and advances the lexer past the matched text.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
/// * `$literal` - The literal string value
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("\\+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $literal:literal) => {
        |lexer: &mut Lexer, _regex: &Regex| -> Option<Token> {
            let (line, column) = lexer.location();
            lexer.advance_over($literal);
            Some(MK_TOKEN!($kind, String::from($literal), line, column))
        }
    };
}
