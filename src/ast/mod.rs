/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Core AST definitions and traits
/// - expressions: Definitions for the expression node types
/// - statements: Definitions for statement nodes and the program root
pub mod ast;
pub mod expressions;
pub mod statements;
