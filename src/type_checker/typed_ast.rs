//! Typed Abstract Syntax Tree definitions.
//!
//! The typed AST mirrors the untyped AST node for node, adding the
//! inferred type at every level. Only leaf tokens are carried over from
//! the untyped tree.

use std::fmt::Display;

use crate::{ast::types::Type, lexer::tokens::Token, Span};

#[derive(Debug, Clone, PartialEq)]
pub enum TypedExpr {
    Literal(TypedLiteralExpr),
    Unary(TypedUnaryExpr),
    Binary(TypedBinaryExpr),
    If(TypedIfExpr),
    Compound(TypedCompoundExpr),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypedLiteralExpr {
    pub token: Token,
    pub ty: Type,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypedUnaryExpr {
    pub operator: Token,
    pub operand: Box<TypedExpr>,
    pub ty: Type,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypedBinaryExpr {
    pub left: Box<TypedExpr>,
    pub operator: Token,
    pub right: Box<TypedExpr>,
    pub ty: Type,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypedIfExpr {
    pub condition: Box<TypedExpr>,
    pub then_branch: Box<TypedExpr>,
    pub else_branch: Option<Box<TypedExpr>>,
    pub ty: Type,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypedCompoundExpr {
    pub body: Vec<TypedExpr>,
    pub ty: Type,
    pub span: Span,
}

impl TypedExpr {
    pub fn get_type(&self) -> Type {
        match self {
            TypedExpr::Literal(literal) => literal.ty,
            TypedExpr::Unary(unary) => unary.ty,
            TypedExpr::Binary(binary) => binary.ty,
            TypedExpr::If(if_expr) => if_expr.ty,
            TypedExpr::Compound(compound) => compound.ty,
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            TypedExpr::Literal(literal) => &literal.token.span,
            TypedExpr::Unary(unary) => &unary.span,
            TypedExpr::Binary(binary) => &binary.span,
            TypedExpr::If(if_expr) => &if_expr.span,
            TypedExpr::Compound(compound) => &compound.span,
        }
    }
}

// Literals print bare, everything else as `Type(...)`
impl Display for TypedExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypedExpr::Literal(literal) => write!(f, "{}", literal.token),
            TypedExpr::Unary(unary) => write!(
                f,
                "{}({}{})",
                unary.ty, unary.operator.value, unary.operand
            ),
            TypedExpr::Binary(binary) => write!(
                f,
                "{}({} {} {})",
                binary.ty, binary.left, binary.operator.value, binary.right
            ),
            TypedExpr::If(if_expr) => {
                write!(
                    f,
                    "{}(if {} {}",
                    if_expr.ty, if_expr.condition, if_expr.then_branch
                )?;
                if let Some(else_branch) = &if_expr.else_branch {
                    write!(f, " else {}", else_branch)?;
                }
                write!(f, ")")
            }
            TypedExpr::Compound(compound) => {
                if compound.body.is_empty() {
                    return write!(f, "{}({{}})", compound.ty);
                }

                write!(f, "{}({{", compound.ty)?;
                for expr in compound.body.iter() {
                    write!(f, " {}", expr)?;
                }
                write!(f, " }})")
            }
        }
    }
}
