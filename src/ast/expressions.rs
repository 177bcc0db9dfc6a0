use std::{any::Any, fmt::Display};

use super::ast::{Expr, ExprType, ExprWrapper};

// LITERALS

/// Integer Expression
/// Represents an integer literal in the AST.
#[derive(Debug, Clone)]
pub struct IntegerExpr {
    pub value: i64,
}

impl Expr for IntegerExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::IntegerLiteral
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
}

impl Display for IntegerExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Float Expression
/// Represents a floating point literal in the AST.
#[derive(Debug, Clone)]
pub struct FloatExpr {
    pub value: f64,
}

impl Expr for FloatExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::FloatLiteral
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
}

impl Display for FloatExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

// COMPOUND EXPRESSIONS

/// Infix Expression
/// Represents a binary operation between two operands.
///
/// The right operand is absent when its parse failed; the node still
/// carries everything recovered up to that point.
#[derive(Debug, Clone)]
pub struct InfixExpr {
    pub left: ExprWrapper,
    pub operator: String,
    pub right: Option<ExprWrapper>,
}

impl Expr for InfixExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Infix
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
}

impl Display for InfixExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.right {
            Some(right) => write!(f, "({} {} {})", self.left, self.operator, right),
            None => write!(f, "({} {} <missing>)", self.left, self.operator),
        }
    }
}
