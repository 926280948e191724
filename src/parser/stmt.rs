//! Blocks and `if` chains.
//!
//! Both are expressions in this language, but they read like statements:
//! a block holds a sequence of expressions and an `if` picks one of its
//! blocks.

use crate::{
    ast::{
        ast::Expr,
        expressions::{CompoundExpr, IfExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{TokenKind, TokenSource},
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::parser::Parser;

pub fn parse_block_expr<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    let start = parser.expect(TokenKind::OpenCurly)?.span.start;

    let mut body = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseCurly && parser.has_tokens() {
        body.push(parse_expr(parser, BindingPower::Default)?);
    }

    let end = parser.expect(TokenKind::CloseCurly)?.span.end;

    Ok(Expr::Compound(CompoundExpr {
        body,
        span: Span { start, end },
    }))
}

/// Parses `if`, or an `elsif` continuing a chain.
///
/// Every branch body must be a block. An `elsif` becomes a nested `If` in
/// the else slot, so the chain is built by the recursive calls returning.
/// Each `elsif` is one level deeper; the enclosing `parse_expr` restores
/// the depth.
pub fn parse_if_expr<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    let start = parser.advance().span.start;

    let condition = parse_expr(parser, BindingPower::Default)?;
    let then_branch = parse_branch_body(parser)?;

    let else_branch = match parser.current_token_kind() {
        TokenKind::Elsif => {
            parser.descend()?;
            Some(parse_if_expr(parser)?)
        }
        TokenKind::Else => {
            parser.advance();
            Some(parse_branch_body(parser)?)
        }
        _ => None,
    };

    let end = else_branch
        .as_ref()
        .unwrap_or(&then_branch)
        .get_span()
        .end
        .clone();

    Ok(Expr::If(IfExpr {
        condition: Box::new(condition),
        then_branch: Box::new(then_branch),
        else_branch: else_branch.map(Box::new),
        span: Span { start, end },
    }))
}

fn parse_branch_body<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    if parser.current_token_kind() != TokenKind::OpenCurly {
        return Err(parser.expected_error(TokenKind::OpenCurly));
    }

    parse_block_expr(parser)
}

/// `elsif` and `else` are only valid right after a branch body.
pub fn parse_misplaced_branch<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    let token = parser.current_token();

    Err(Error::new(
        ErrorImpl::MisplacedBranch {
            keyword: token.value.clone(),
        },
        token.span.start.clone(),
    ))
}
