use std::collections::HashMap;

use lazy_static::lazy_static;
use log::{debug, trace};

use crate::{
    ast::{
        ast::Expr,
        expressions::{BinaryExpr, CompoundExpr, IfExpr, LiteralExpr, UnaryExpr},
        types::Type,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::typed_ast::{
    TypedBinaryExpr, TypedCompoundExpr, TypedExpr, TypedIfExpr, TypedLiteralExpr, TypedUnaryExpr,
};

/// How a binary operator derives its result type once its operands pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultRule {
    /// The merge of both operand types
    Merged,
    /// Always Bool
    Bool,
}

/// Typing rule for one binary operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorRule {
    /// Types each operand may have. `None` means any type, as long as the
    /// two operand types merge.
    pub accepted: Option<&'static [Type]>,
    pub result: ResultRule,
}

const ADDITIVE: &[Type] = &[Type::Int, Type::Float, Type::String];
const ARITHMETIC: &[Type] = &[Type::Int, Type::Float];
const LOGICAL: &[Type] = &[Type::Bool];

lazy_static! {
    pub static ref OPERATOR_RULES: HashMap<TokenKind, OperatorRule> = {
        let mut map = HashMap::new();

        let additive = OperatorRule { accepted: Some(ADDITIVE), result: ResultRule::Merged };
        map.insert(TokenKind::Plus, additive);
        map.insert(TokenKind::Star, additive);

        let arithmetic = OperatorRule { accepted: Some(ARITHMETIC), result: ResultRule::Merged };
        map.insert(TokenKind::Dash, arithmetic);
        map.insert(TokenKind::Slash, arithmetic);
        map.insert(TokenKind::Percent, arithmetic);
        map.insert(TokenKind::Caret, arithmetic);

        let relational = OperatorRule { accepted: Some(ARITHMETIC), result: ResultRule::Bool };
        map.insert(TokenKind::Less, relational);
        map.insert(TokenKind::LessEquals, relational);
        map.insert(TokenKind::Greater, relational);
        map.insert(TokenKind::GreaterEquals, relational);

        let equality = OperatorRule { accepted: None, result: ResultRule::Bool };
        map.insert(TokenKind::Equals, equality);
        map.insert(TokenKind::NotEquals, equality);

        let logical = OperatorRule { accepted: Some(LOGICAL), result: ResultRule::Bool };
        map.insert(TokenKind::And, logical);
        map.insert(TokenKind::Or, logical);

        map
    };
}

/// Type checks a tree, returning its typed mirror or the first error.
pub fn type_check(ast: &Expr) -> Result<TypedExpr, Error> {
    let typed = type_check_expr(ast)?;
    debug!("type checked tree as {}", typed.get_type());

    Ok(typed)
}

pub fn type_check_expr(ast: &Expr) -> Result<TypedExpr, Error> {
    match ast {
        Expr::Literal(literal) => type_check_literal(literal),
        Expr::Unary(unary) => type_check_unary(unary),
        Expr::Binary(binary) => type_check_binary(binary),
        Expr::If(if_expr) => type_check_if(if_expr),
        Expr::Compound(compound) => type_check_compound(compound),
    }
}

fn type_check_literal(literal: &LiteralExpr) -> Result<TypedExpr, Error> {
    let token = &literal.token;
    let ty = match token.kind {
        TokenKind::Integer => Type::Int,
        TokenKind::Float => Type::Float,
        TokenKind::Char => Type::Char,
        TokenKind::String => Type::String,
        TokenKind::True | TokenKind::False => Type::Bool,
        TokenKind::Identifier => {
            return Err(Error::new(
                ErrorImpl::UnsupportedIdentifier {
                    name: token.value.clone(),
                },
                token.span.start.clone(),
            ));
        }
        kind => {
            return Err(Error::new(
                ErrorImpl::InternalError {
                    message: format!("literal node holds a {:?} token", kind),
                },
                token.span.start.clone(),
            ));
        }
    };

    Ok(TypedExpr::Literal(TypedLiteralExpr {
        token: token.clone(),
        ty,
    }))
}

fn type_check_unary(unary: &UnaryExpr) -> Result<TypedExpr, Error> {
    let operand = type_check_expr(&unary.operand)?;
    let ty = operand.get_type();

    if !ty.is_numeric() {
        return Err(Error::new(
            ErrorImpl::UnaryTypeMismatch {
                operator: unary.operator.value.clone(),
                operand: ty.to_string(),
            },
            unary.operator.span.start.clone(),
        ));
    }

    Ok(TypedExpr::Unary(TypedUnaryExpr {
        operator: unary.operator.clone(),
        operand: Box::new(operand),
        ty,
        span: unary.span.clone(),
    }))
}

fn type_check_binary(binary: &BinaryExpr) -> Result<TypedExpr, Error> {
    let left = type_check_expr(&binary.left)?;
    let right = type_check_expr(&binary.right)?;
    let (left_type, right_type) = (left.get_type(), right.get_type());

    let operator = &binary.operator;
    let position = operator.span.start.clone();

    let Some(rule) = OPERATOR_RULES.get(&operator.kind) else {
        return Err(Error::new(
            ErrorImpl::InternalError {
                message: format!("no typing rule for operator `{}`", operator.value),
            },
            position,
        ));
    };

    if let Some(accepted) = rule.accepted {
        if !accepted.contains(&left_type) || !accepted.contains(&right_type) {
            return Err(Error::new(
                ErrorImpl::OperandTypeMismatch {
                    operator: operator.value.clone(),
                    left: left_type.to_string(),
                    right: right_type.to_string(),
                },
                position,
            ));
        }
    }

    let Some(merged) = left_type.merge(right_type) else {
        return Err(Error::new(
            ErrorImpl::IncompatibleTypes {
                operator: operator.value.clone(),
                left: left_type.to_string(),
                right: right_type.to_string(),
            },
            position,
        ));
    };

    let ty = match rule.result {
        ResultRule::Merged => merged,
        ResultRule::Bool => Type::Bool,
    };

    trace!("{} {} {} -> {}", left_type, operator.value, right_type, ty);

    Ok(TypedExpr::Binary(TypedBinaryExpr {
        left: Box::new(left),
        operator: operator.clone(),
        right: Box::new(right),
        ty,
        span: binary.span.clone(),
    }))
}

/// Without an else branch the value is discarded, so the whole expression
/// is Void. With one, both branches must have exactly the same type; the
/// merge rule does not apply here.
fn type_check_if(if_expr: &IfExpr) -> Result<TypedExpr, Error> {
    let condition = type_check_expr(&if_expr.condition)?;

    if condition.get_type() != Type::Bool {
        return Err(Error::new(
            ErrorImpl::NonBooleanCondition {
                received: condition.get_type().to_string(),
            },
            condition.get_span().start.clone(),
        ));
    }

    let then_branch = type_check_expr(&if_expr.then_branch)?;

    let (else_branch, ty) = match &if_expr.else_branch {
        None => (None, Type::Void),
        Some(else_ast) => {
            let else_branch = type_check_expr(else_ast)?;

            if then_branch.get_type() != else_branch.get_type() {
                return Err(Error::new(
                    ErrorImpl::BranchTypeMismatch {
                        then_type: then_branch.get_type().to_string(),
                        else_type: else_branch.get_type().to_string(),
                    },
                    else_branch.get_span().start.clone(),
                ));
            }

            let ty = then_branch.get_type();
            (Some(Box::new(else_branch)), ty)
        }
    };

    Ok(TypedExpr::If(TypedIfExpr {
        condition: Box::new(condition),
        then_branch: Box::new(then_branch),
        else_branch,
        ty,
        span: if_expr.span.clone(),
    }))
}

fn type_check_compound(compound: &CompoundExpr) -> Result<TypedExpr, Error> {
    let body = compound
        .body
        .iter()
        .map(type_check_expr)
        .collect::<Result<Vec<_>, _>>()?;

    let ty = body.last().map(TypedExpr::get_type).unwrap_or(Type::Void);

    Ok(TypedExpr::Compound(TypedCompoundExpr {
        body,
        ty,
        span: compound.span.clone(),
    }))
}
