//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parsing entry points.
//! The parser pulls tokens from any `TokenSource` and dispatches on the
//! current token kind through lookup tables for:
//! - NUD (null denotation) handlers for prefix positions
//! - LED (left denotation) handlers for infix operators
//! - Binding powers for operator precedence

use std::{collections::HashMap, sync::Arc};

use log::debug;

use crate::{
    ast::{ast::Expr, expressions::CompoundExpr},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind, TokenSource},
    Position, Span,
};

use super::{
    expr::parse_expr,
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
    },
};

/// The main parser structure that maintains parsing state.
///
/// This struct holds the token source and the lookup tables used to
/// dispatch on token kinds.
pub struct Parser<S: TokenSource> {
    /// Where tokens are pulled from
    source: S,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup<S>,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup<S>,
    /// Lookup table for infix binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// Depth of the tree currently being built
    depth: usize,
}

/// Deepest tree the parser will build. Checking, printing and dropping a
/// tree all recurse on its depth, so this also bounds them.
pub const MAX_NESTING_DEPTH: usize = 256;

impl<S: TokenSource> Parser<S> {
    /// Creates a new Parser with empty lookup tables.
    ///
    /// # Arguments
    ///
    /// * `source` - The token source to parse from
    pub fn new(source: S) -> Self {
        Parser {
            source,
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.source.current()
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.source.current().kind
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Token {
        self.source.advance()
    }

    /// Builds the error for a missing token of kind `expected` at the
    /// current position. An `Unknown` token is reported as unrecognised
    /// instead.
    pub fn expected_error(&self, expected: TokenKind) -> Error {
        let token = self.current_token();
        let error = if token.kind == TokenKind::Unknown {
            ErrorImpl::UnrecognisedToken {
                token: token.value.clone(),
            }
        } else {
            ErrorImpl::ExpectedToken {
                expected: expected.to_string(),
                received: token.value.clone(),
            }
        };

        Error::new(error, token.span.start.clone())
    }

    /// Expects a token of the specified kind.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise returns an Error.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            Err(self.expected_error(expected_kind))
        } else {
            Ok(self.advance())
        }
    }

    /// Goes one level deeper into the tree, failing past `MAX_NESTING_DEPTH`.
    pub fn descend(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn restore_depth(&mut self, depth: usize) {
        self.depth = depth;
    }

    /// Returns true while the current token is not EOF.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup<S> {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup<S> {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler<S>) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// Prefix registration leaves the binding power table alone, so a token
    /// such as `-` keeps its infix precedence.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler<S>) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }
}

/// Parses a whole program into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes the lookup tables, and parses expressions until EOF.
///
/// # Returns
///
/// The root `Compound` expression holding every top-level expression in
/// order, or the first error encountered.
pub fn parse<S: TokenSource>(source: S) -> Result<Expr, Error> {
    let mut parser = Parser::new(source);
    create_token_lookups(&mut parser);

    let start = Position(0, Arc::clone(&parser.get_position().1));
    let mut body = vec![];

    while parser.has_tokens() {
        body.push(parse_expr(&mut parser, BindingPower::Default)?);
    }

    debug!("parsed {} top-level expressions", body.len());

    Ok(Expr::Compound(CompoundExpr {
        body,
        span: Span {
            start,
            end: parser.get_position(),
        },
    }))
}

/// Parses exactly one expression, which must be followed by EOF.
pub fn parse_expression<S: TokenSource>(source: S) -> Result<Expr, Error> {
    let mut parser = Parser::new(source);
    create_token_lookups(&mut parser);

    let expr = parse_expr(&mut parser, BindingPower::Default)?;

    if parser.has_tokens() {
        return Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: parser.current_token().value.clone(),
                message: String::from("expected end of input"),
            },
            parser.get_position(),
        ));
    }

    Ok(expr)
}
