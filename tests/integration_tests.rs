//! Integration tests for the full front end.
//!
//! These tests run source text through tokenization, parsing and type
//! checking, and check the typed tree or the diagnostic that comes out.

use exprlang::{
    ast::{ast::Expr, types::Type},
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::{tokenize, Lexer},
        tokens::TokenStream,
    },
    parser::parser::{parse, parse_expression},
    type_checker::{type_checker::type_check, typed_ast::TypedExpr},
};

fn run(source: &str) -> Result<TypedExpr, Error> {
    let ast = parse(Lexer::new(source, Some("test.expr".to_string())))?;
    type_check(&ast)
}

fn last_type(source: &str) -> Type {
    run(source).unwrap().get_type()
}

#[test]
fn test_precedence_program() {
    let ast = parse_expression(Lexer::new("1 + 2 * 3", None)).unwrap();
    assert_eq!(ast.to_string(), "(1 + (2 * 3))");

    let typed = type_check(&ast).unwrap();
    assert_eq!(typed.get_type(), Type::Int);
    assert_eq!(typed.to_string(), "Int(1 + Int(2 * 3))");
}

#[test]
fn test_string_concatenation_program() {
    assert_eq!(last_type("\"a\" + \"b\""), Type::String);
}

#[test]
fn test_logical_on_ints_program() {
    let ast = parse(Lexer::new("1 and 2", None));
    assert!(ast.is_ok(), "Parsing should succeed");

    let error = type_check(&ast.unwrap()).unwrap_err();
    assert_eq!(error.get_error_name(), "OperandTypeMismatch");
}

#[test]
fn test_if_else_program() {
    assert_eq!(last_type("if 1 == 1 { 5 } else { 6 }"), Type::Int);
}

#[test]
fn test_if_else_asymmetric_program() {
    let error = run("if 1 == 1 { 5 } else { 6.0 }").unwrap_err();
    assert_eq!(error.get_error_name(), "BranchTypeMismatch");
}

#[test]
fn test_unmatched_paren_program() {
    let error = run("(1 + 2").unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::ExpectedToken {
            expected: ")".to_string(),
            received: "EOF".to_string(),
        }
    );
    assert_eq!(error.get_position().0, 6);
    assert_eq!(error.get_position().1.as_str(), "test.expr");
}

#[test]
fn test_multi_line_program() {
    let source = "
        1 + 2
        if 3 > 2 {
            'y'
        } elsif 2 > 3 {
            'n'
        } else {
            '?'
        }
        2 ^ 3 ^ 2 * 1.0
    ";

    let typed = run(source).unwrap();
    let TypedExpr::Compound(root) = &typed else {
        panic!("Expected compound root");
    };

    assert_eq!(root.body.len(), 3);
    assert_eq!(root.body[0].get_type(), Type::Int);
    assert_eq!(root.body[1].get_type(), Type::Char);
    assert_eq!(typed.get_type(), Type::Float);
}

#[test]
fn test_error_position_points_into_source() {
    let source = "1 + 2\n3 + true";
    let error = run(source).unwrap_err();

    assert_eq!(error.get_error_name(), "OperandTypeMismatch");

    let (line, text, column) =
        exprlang::get_line_at_position(source, error.get_position().0).unwrap();
    assert_eq!(line, 2);
    assert_eq!(text, "3 + true");
    assert_eq!(column, 2);
}

#[test]
fn test_pretokenized_pipeline() {
    let tokens = tokenize("{ 1.5 - 2 }", None).unwrap();
    let ast = parse(TokenStream::new(tokens)).unwrap();

    let Expr::Compound(root) = &ast else {
        panic!("Expected compound root");
    };
    assert_eq!(root.body.len(), 1);
    assert_eq!(type_check(&ast).unwrap().get_type(), Type::Float);
}

#[test]
fn test_failure_does_not_affect_next_input() {
    assert!(run("1 +").is_err());
    assert!(run("1 and 2").is_err());
    assert_eq!(last_type("1 < 2"), Type::Bool);
}

#[test]
fn test_deep_nesting_is_a_diagnostic() {
    let source = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    let error = run(&source).unwrap_err();
    assert_eq!(error.get_error_name(), "NestingTooDeep");

    // The next input is unaffected
    assert_eq!(last_type("(1)"), Type::Int);
}

#[test]
fn test_moderately_nested_program() {
    // Each level is a block, a prefix operator and a group
    let depth = 50;
    let source = format!(
        "{}1 + 2.0{}",
        "{ -(".repeat(depth),
        ") }".repeat(depth)
    );

    let typed = run(&source).unwrap();
    assert_eq!(typed.get_type(), Type::Float);
    assert!(typed.to_string().starts_with("Float({ Float({ Float(-"));
}

#[test]
fn test_independent_pipelines_on_threads() {
    let sources = vec![
        ("1 + 2", Some(Type::Int)),
        ("1.0 * 2", Some(Type::Float)),
        ("\"a\" + \"b\"", Some(Type::String)),
        ("if true { 'a' } else { 'b' }", Some(Type::Char)),
        ("1 and 2", None),
        ("(1", None),
    ];

    let handles: Vec<_> = sources
        .into_iter()
        .map(|(source, expected)| {
            std::thread::spawn(move || {
                let result = run(source).ok().map(|typed| typed.get_type());
                (source, result, expected)
            })
        })
        .collect();

    for handle in handles {
        let (source, result, expected) = handle.join().unwrap();
        assert_eq!(result, expected, "{}", source);
    }
}
