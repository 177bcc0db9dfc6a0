use std::{env, fs::read_to_string, process::exit, time::Instant};

use frontend::{
    lexer::{lexer::Lexer, tokens::TokenKind},
    parser::parser::parse,
    render_diagnostic,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: frontend <file> [--tokens]");
        exit(1);
    }

    let file_path: &str = &args[1];
    let source = read_to_string(file_path).expect("Failed to read file!");

    if args.iter().any(|arg| arg == "--tokens") {
        let mut lexer = Lexer::new(source.clone());
        loop {
            let token = lexer.next_token();
            token.debug();
            if token.kind == TokenKind::Eof {
                break;
            }
        }
    }

    let start = Instant::now();
    let (parser, program) = parse(Lexer::new(source.clone()));
    println!("Parsed in {:?}", start.elapsed());

    if !parser.errors().is_empty() {
        for diagnostic in parser.errors() {
            print!("{}", render_diagnostic(diagnostic, &source));
        }
        exit(1);
    }

    println!("{}", pretty_print(format!("{:?}", program)));
}

/// Re-indents a Debug string so nested AST nodes land on their own lines.
fn pretty_print(debug: String) -> String {
    let mut result = String::new();
    let mut indent: usize = 0;
    let mut skip_space = false;

    for c in debug.chars() {
        match c {
            '{' | '(' | '[' => {
                indent += 1;
                result.push(c);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                skip_space = true;
            }
            '}' | ')' | ']' => {
                indent = indent.saturating_sub(1);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                result.push(c);
            }
            ',' => {
                result.push(c);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                skip_space = true;
            }
            ' ' if skip_space => {
                skip_space = false;
            }
            _ => {
                skip_space = false;
                result.push(c);
            }
        }
    }

    result
}
