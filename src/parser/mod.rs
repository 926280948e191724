//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It uses a Pratt parser for expressions
//! with proper operator precedence and handles:
//!
//! - Literals, prefix operators and parenthesised groups
//! - Binary operators, left-associative except `^` and `=`
//! - Brace-delimited blocks
//! - `if` / `elsif` / `else` chains
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.
//! Parsing stops at the first error; no partial tree is returned.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
