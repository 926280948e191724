use std::fmt::Display;

use crate::Span;

use super::expressions::{BinaryExpr, CompoundExpr, IfExpr, LiteralExpr, UnaryExpr};

/// Expression
///
/// Every node in the language is an expression. Each node owns its
/// children exclusively, so a tree is never shared or cyclic.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(LiteralExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    If(IfExpr),
    Compound(CompoundExpr),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Literal(literal) => &literal.token.span,
            Expr::Unary(unary) => &unary.span,
            Expr::Binary(binary) => &binary.span,
            Expr::If(if_expr) => &if_expr.span,
            Expr::Compound(compound) => &compound.span,
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Literal(literal) => write!(f, "{}", literal.token),
            Expr::Unary(unary) => write!(f, "({}{})", unary.operator.value, unary.operand),
            Expr::Binary(binary) => write!(
                f,
                "({} {} {})",
                binary.left, binary.operator.value, binary.right
            ),
            Expr::If(if_expr) => {
                write!(f, "if {} {}", if_expr.condition, if_expr.then_branch)?;
                if let Some(else_branch) = &if_expr.else_branch {
                    write!(f, " else {}", else_branch)?;
                }
                Ok(())
            }
            Expr::Compound(compound) => {
                if compound.body.is_empty() {
                    return write!(f, "{{}}");
                }

                write!(f, "{{")?;
                for expr in compound.body.iter() {
                    write!(f, " {}", expr)?;
                }
                write!(f, " }}")
            }
        }
    }
}
