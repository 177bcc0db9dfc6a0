use std::{any::Any, fmt::Display};

use super::ast::{ExprWrapper, Stmt, StmtType, StmtWrapper};

/// Expression Statement
/// A statement consisting of a single expression, e.g. `1 + 2;`
#[derive(Debug, Clone)]
pub struct ExpressionStmt {
    pub expression: ExprWrapper,
}

impl Stmt for ExpressionStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ExpressionStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression)
    }
}

/// Program
/// The root of the AST: an ordered sequence of statements.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub statements: Vec<StmtWrapper>,
}

impl Program {
    pub fn new() -> Self {
        Program { statements: vec![] }
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered = self
            .statements
            .iter()
            .map(|stmt| stmt.to_string())
            .collect::<Vec<String>>();
        write!(f, "{}", rendered.join("\n"))
    }
}
