use log::trace;

use crate::{
    ast::{
        ast::Expr,
        expressions::{BinaryExpr, LiteralExpr, UnaryExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind, TokenSource},
    Span,
};

use super::{lookups::BindingPower, parser::Parser};

/// Parses an expression whose operators bind tighter than `bp`.
///
/// Every prefix rule and every operator applied on the left adds a level
/// to the tree, so each one descends. The depth is restored on return.
pub fn parse_expr<S: TokenSource>(parser: &mut Parser<S>, bp: BindingPower) -> Result<Expr, Error> {
    let depth = parser.depth();
    let result = parse_expr_nested(parser, bp);
    parser.restore_depth(depth);

    result
}

fn parse_expr_nested<S: TokenSource>(
    parser: &mut Parser<S>,
    bp: BindingPower,
) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud = match parser.get_nud_lookup().get(&token_kind) {
        Some(nud) => *nud,
        None => return Err(unexpected_token(parser)),
    };

    parser.descend()?;
    trace!("nud {:?} at {}", token_kind, parser.get_position().0);
    let mut left = nud(parser)?;

    // While the current token is an operator binding tighter than bp, extend lhs
    while let Some(led) = parser
        .get_led_lookup()
        .get(&parser.current_token_kind())
        .copied()
    {
        let operator_bp = parser
            .get_bp_lookup()
            .get(&parser.current_token_kind())
            .copied()
            .unwrap_or(BindingPower::Default);

        if operator_bp <= bp {
            break;
        }

        parser.descend()?;
        left = led(parser, left, operator_bp)?;
    }

    Ok(left)
}

fn unexpected_token<S: TokenSource>(parser: &Parser<S>) -> Error {
    let token = parser.current_token();

    let error = if token.kind == TokenKind::Unknown {
        ErrorImpl::UnrecognisedToken {
            token: token.value.clone(),
        }
    } else {
        ErrorImpl::UnexpectedToken {
            token: token.value.clone(),
        }
    };

    Error::new(error, token.span.start.clone())
}

pub fn parse_primary_expr<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    if !parser.current_token_kind().is_literal() {
        return Err(unexpected_token(parser));
    }

    Ok(Expr::Literal(LiteralExpr {
        token: parser.advance(),
    }))
}

pub fn parse_binary_expr<S: TokenSource>(
    parser: &mut Parser<S>,
    left: Expr,
    bp: BindingPower,
) -> Result<Expr, Error> {
    let operator = parser.advance();
    let right = parse_expr(parser, bp)?;

    Ok(make_binary(left, operator, right))
}

/// Like `parse_binary_expr`, but the right operand may itself contain the
/// same operator, so `a ^ b ^ c` parses as `a ^ (b ^ c)`.
pub fn parse_right_assoc_expr<S: TokenSource>(
    parser: &mut Parser<S>,
    left: Expr,
    bp: BindingPower,
) -> Result<Expr, Error> {
    let operator = parser.advance();
    let right = parse_expr(parser, bp.weaker())?;

    Ok(make_binary(left, operator, right))
}

fn make_binary(left: Expr, operator: Token, right: Expr) -> Expr {
    Expr::Binary(BinaryExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        },
        left: Box::new(left),
        operator,
        right: Box::new(right),
    })
}

pub fn parse_prefix_expr<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    let bp = parser
        .get_bp_lookup()
        .get(&parser.current_token_kind())
        .copied()
        .unwrap_or(BindingPower::Default);

    let operator = parser.advance();
    let operand = parse_expr(parser, bp)?;

    Ok(Expr::Unary(UnaryExpr {
        span: Span {
            start: operator.span.start.clone(),
            end: operand.get_span().end.clone(),
        },
        operator,
        operand: Box::new(operand),
    }))
}

pub fn parse_grouping_expr<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}
