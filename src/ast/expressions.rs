use crate::{lexer::tokens::Token, Span};

use super::ast::Expr;

// LITERALS

/// Literal Expression
/// A leaf holding the token it was parsed from. The token kind decides the
/// type the checker assigns.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub token: Token,
}

// COMPLEX

/// Unary Expression
/// A prefix `+` or `-` applied to an operand.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: Token,
    pub operand: Box<Expr>,
    pub span: Span,
}

/// Binary Expression
/// Any infix operator between two expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
    pub span: Span,
}

/// If Expression
///
/// `elsif` chains nest to the right: the else branch of each `if` is the
/// next `If` in the chain.
#[derive(Debug, Clone, PartialEq)]
pub struct IfExpr {
    pub condition: Box<Expr>,
    pub then_branch: Box<Expr>,
    pub else_branch: Option<Box<Expr>>,
    pub span: Span,
}

/// Compound Expression
/// A brace-delimited block, or the root of a program.
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundExpr {
    pub body: Vec<Expr>,
    pub span: Span,
}
