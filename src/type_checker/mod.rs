//! Type checking module.
//!
//! This module transforms the untyped AST into a typed AST. It is a
//! bottom-up fold over the tree:
//!
//! - Literals get their type from their token kind
//! - Operators check their operands against a per-operator allow-list and
//!   combine operand types with the merge rule
//! - `if` conditions must be boolean and both branches must agree
//! - Blocks take the type of their last expression
//!
//! The first error aborts the whole check.

pub mod type_checker;
pub mod typed_ast;

#[cfg(test)]
mod tests;
