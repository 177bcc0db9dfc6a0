#![allow(clippy::module_inception)]

use crate::errors::errors::Diagnostic;

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Renders a diagnostic against its source text.
///
/// Produces the block format used by the driver:
///
/// ```text
/// Error: UnexpectedToken (expected next token to be CloseParen, got Eof instead)
/// -> line 1, column 7
///   |
/// 1 | (1 + 2
///   | ------^
/// ```
pub fn render_diagnostic(diagnostic: &Diagnostic, source: &str) -> String {
    let line_number = diagnostic.line();
    let line_text = source.lines().nth(line_number as usize - 1).unwrap_or("");

    let line_string = line_number.to_string();
    let padding = line_string.len() + 2;

    let mut rendered = String::new();
    rendered.push_str(&format!("Error: {} ({})\n", diagnostic.name(), diagnostic));
    rendered.push_str(&format!(
        "-> line {}, column {}\n",
        line_number,
        diagnostic.column()
    ));
    rendered.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    rendered.push_str(&format!(
        "{} | {}\n",
        line_string,
        line_text_removed.trim_end()
    ));

    let arrows = (diagnostic.column() as usize)
        .saturating_sub(removed_whitespace)
        .max(1);
    rendered.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    rendered
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use crate::lexer::lexer::Lexer;
    use crate::parser::parser::parse;

    #[test]
    fn test_render_diagnostic() {
        let source = "(1 + 2";
        let (parser, _) = parse(Lexer::new(source.to_string()));
        assert_eq!(parser.errors().len(), 1);

        let rendered = super::render_diagnostic(&parser.errors()[0], source);
        assert!(rendered.starts_with(
            "Error: UnexpectedToken (expected next token to be CloseParen, got Eof instead)\n"
        ));
        assert!(rendered.contains("-> line 1, column 7\n"));
        assert!(rendered.contains("1 | (1 + 2\n"));
        assert!(rendered.ends_with("  | ------^\n"));
    }

    #[test]
    fn test_render_diagnostic_trims_indentation() {
        let source = "1;\n    @";
        let (parser, _) = parse(Lexer::new(source.to_string()));
        assert_eq!(parser.errors().len(), 1);

        let rendered = super::render_diagnostic(&parser.errors()[0], source);
        assert!(rendered.contains("-> line 2, column 5\n"));
        assert!(rendered.contains("2 | @\n"));
        assert!(rendered.ends_with("  | ^\n"));
    }
}
