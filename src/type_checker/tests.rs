//! Unit tests for the type checker.
//!
//! This module contains tests for literal typing, operator rules, the
//! merge rule in binary expressions, `if` typing and block typing.

use super::{type_checker::type_check, typed_ast::TypedExpr};
use crate::{
    ast::types::Type,
    errors::errors::{Error, ErrorImpl},
    lexer::lexer::Lexer,
    parser::parser::{parse, parse_expression},
};

fn check(source: &str) -> Result<TypedExpr, Error> {
    let ast = parse_expression(Lexer::new(source, Some("test.expr".to_string()))).unwrap();
    type_check(&ast)
}

fn type_of(source: &str) -> Type {
    check(source).unwrap().get_type()
}

fn error_name(source: &str) -> String {
    check(source).unwrap_err().get_error_name().to_string()
}

#[test]
fn test_literal_types() {
    assert_eq!(type_of("1"), Type::Int);
    assert_eq!(type_of("1.5"), Type::Float);
    assert_eq!(type_of("'c'"), Type::Char);
    assert_eq!(type_of("\"text\""), Type::String);
    assert_eq!(type_of("true"), Type::Bool);
    assert_eq!(type_of("false"), Type::Bool);
}

#[test]
fn test_identifier_is_unsupported() {
    let error = check("x + 1").unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnsupportedIdentifier {
            name: "x".to_string()
        }
    );
    assert!(!error.is_internal());
}

#[test]
fn test_arithmetic_typed_tree() {
    let typed = check("1 + 2 * 3").unwrap();

    assert_eq!(typed.get_type(), Type::Int);
    assert_eq!(typed.to_string(), "Int(1 + Int(2 * 3))");

    let TypedExpr::Binary(binary) = typed else {
        panic!("Expected binary expression");
    };
    assert_eq!(binary.left.get_type(), Type::Int);
    assert_eq!(binary.right.get_type(), Type::Int);
}

#[test]
fn test_arithmetic_merges_int_and_float() {
    assert_eq!(type_of("1 + 2.5"), Type::Float);
    assert_eq!(type_of("2.5 - 1"), Type::Float);
    assert_eq!(type_of("2 ^ 0.5"), Type::Float);
    assert_eq!(type_of("7 % 2"), Type::Int);
    assert_eq!(type_of("7.0 / 2"), Type::Float);
}

#[test]
fn test_string_concatenation() {
    assert_eq!(type_of("\"a\" + \"b\""), Type::String);
    assert_eq!(type_of("\"a\" * \"b\""), Type::String);
}

#[test]
fn test_string_with_number_is_incompatible() {
    assert_eq!(error_name("\"a\" + 1"), "IncompatibleTypes");
    assert_eq!(error_name("\"a\" * 2"), "IncompatibleTypes");
}

#[test]
fn test_arithmetic_rejects_strings() {
    let error = check("\"a\" - \"b\"").unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::OperandTypeMismatch {
            operator: "-".to_string(),
            left: "String".to_string(),
            right: "String".to_string(),
        }
    );
    assert_eq!(error.get_position().0, 4);
}

#[test]
fn test_additive_rejects_chars_and_bools() {
    assert_eq!(error_name("'a' + 'b'"), "OperandTypeMismatch");
    assert_eq!(error_name("true + 1"), "OperandTypeMismatch");
}

#[test]
fn test_relational_operators_produce_bool() {
    assert_eq!(type_of("1 < 2"), Type::Bool);
    assert_eq!(type_of("1 <= 2.0"), Type::Bool);
    assert_eq!(type_of("1.5 > 2"), Type::Bool);
    assert_eq!(type_of("1 >= 2"), Type::Bool);
    assert_eq!(error_name("\"a\" < \"b\""), "OperandTypeMismatch");
}

#[test]
fn test_equality_accepts_any_mergeable_pair() {
    assert_eq!(type_of("1 == 1"), Type::Bool);
    assert_eq!(type_of("1 == 1.0"), Type::Bool);
    assert_eq!(type_of("'a' != 'b'"), Type::Bool);
    assert_eq!(type_of("\"a\" == \"b\""), Type::Bool);
    assert_eq!(type_of("true == false"), Type::Bool);
    assert_eq!(type_of("{} == {}"), Type::Bool);
}

#[test]
fn test_equality_rejects_unmergeable_pair() {
    let error = check("1 == \"a\"").unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::IncompatibleTypes {
            operator: "==".to_string(),
            left: "Int".to_string(),
            right: "String".to_string(),
        }
    );
}

#[test]
fn test_logical_operators_require_bool() {
    assert_eq!(type_of("true and false"), Type::Bool);
    assert_eq!(type_of("1 < 2 or 2 < 1"), Type::Bool);
    assert_eq!(error_name("1 and 2"), "OperandTypeMismatch");
    assert_eq!(error_name("true or 1"), "OperandTypeMismatch");
}

#[test]
fn test_unary_operators() {
    assert_eq!(type_of("-1"), Type::Int);
    assert_eq!(type_of("-1.5"), Type::Float);
    assert_eq!(type_of("+2"), Type::Int);
    assert_eq!(check("-1").unwrap().to_string(), "Int(-1)");
    assert_eq!(error_name("-true"), "UnaryTypeMismatch");
    assert_eq!(error_name("-\"a\""), "UnaryTypeMismatch");
}

#[test]
fn test_operator_failures_propagate() {
    assert_eq!(error_name("(1 and 2) == true"), "OperandTypeMismatch");
    assert_eq!(error_name("-(1 + 'c')"), "OperandTypeMismatch");
}

#[test]
fn test_assignment_has_no_typing_rule() {
    let error = check("1 = 2").unwrap_err();

    assert!(error.is_internal());
    assert_eq!(error.get_error_name(), "InternalError");
}

#[test]
fn test_if_else_with_equal_branches() {
    let typed = check("if 1 == 1 { 5 } else { 6 }").unwrap();

    assert_eq!(typed.get_type(), Type::Int);

    let TypedExpr::If(if_expr) = typed else {
        panic!("Expected if expression");
    };
    assert_eq!(if_expr.condition.get_type(), Type::Bool);
    assert_eq!(if_expr.then_branch.get_type(), Type::Int);
    assert_eq!(if_expr.else_branch.unwrap().get_type(), Type::Int);
}

#[test]
fn test_if_else_branch_types_must_be_equal() {
    let error = check("if 1 == 1 { 5 } else { 6.0 }").unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::BranchTypeMismatch {
            then_type: "Int".to_string(),
            else_type: "Float".to_string(),
        }
    );
    // The same pair merges fine in a binary expression
    assert_eq!(type_of("5 + 6.0"), Type::Float);
}

#[test]
fn test_if_without_else_is_void() {
    assert_eq!(type_of("if true { 5 }"), Type::Void);
    assert_eq!(type_of("if true { \"s\" }"), Type::Void);
    assert_eq!(type_of("if true { }"), Type::Void);
}

#[test]
fn test_if_without_else_still_checks_body() {
    assert_eq!(error_name("if true { 1 and 2 }"), "OperandTypeMismatch");
}

#[test]
fn test_if_condition_must_be_bool() {
    let error = check("if 1 { 2 } else { 3 }").unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::NonBooleanCondition {
            received: "Int".to_string()
        }
    );
    assert_eq!(error.get_position().0, 3);
}

#[test]
fn test_elsif_chain_types() {
    assert_eq!(
        type_of("if 1 > 2 { 1 } elsif 2 > 3 { 2 } else { 3 }"),
        Type::Int
    );
    assert_eq!(
        type_of("if true { 'a' } elsif false { 'b' } elsif true { 'c' } else { 'd' }"),
        Type::Char
    );
}

#[test]
fn test_elsif_without_else_makes_chain_asymmetric() {
    // The trailing elsif has no else, so it is Void and no longer matches Int
    let error = check("if true { 1 } elsif false { 2 }").unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::BranchTypeMismatch {
            then_type: "Int".to_string(),
            else_type: "Void".to_string(),
        }
    );
}

#[test]
fn test_compound_types() {
    assert_eq!(type_of("{}"), Type::Void);
    assert_eq!(type_of("{ 1 \"a\" 2.0 }"), Type::Float);
    assert_eq!(type_of("{ 1 { } }"), Type::Void);
    assert_eq!(
        check("{ 1 2 }").unwrap().to_string(),
        "Int({ 1 2 })"
    );
}

#[test]
fn test_compound_aborts_on_interior_error() {
    assert_eq!(error_name("{ 1 + 'a' 2 }"), "OperandTypeMismatch");
}

#[test]
fn test_program_root() {
    let ast = parse(Lexer::new("1 + 2 \"x\"", None)).unwrap();
    let typed = type_check(&ast).unwrap();

    let TypedExpr::Compound(root) = &typed else {
        panic!("Expected compound root");
    };
    assert_eq!(root.body.len(), 2);
    assert_eq!(root.body[0].get_type(), Type::Int);
    assert_eq!(typed.get_type(), Type::String);

    let empty = type_check(&parse(Lexer::new("", None)).unwrap()).unwrap();
    assert_eq!(empty.get_type(), Type::Void);
}
