//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs:
//! - Class declarations and their members
//! - Variable declarations in both shapes
//! - Control flow and blocks
//! - Assignments, calls and dot chains
//! - Syntax errors

use crate::{
    ast::{
        ast::{Dump, Item, Program},
        declarations::MemberDecl,
        expressions::{Expr, MethodCallExpr},
        statements::{Stmt, VarInit},
    },
    errors::errors::{Error, ErrorImpl, ErrorKind},
    lexer::{lexer::tokenize, tokens::TokenKind},
};

use super::parser::parse;

fn parse_str(source: &str) -> Result<Program, Error> {
    let tokens = tokenize(source, Some("test.cl".to_string())).unwrap();
    parse(tokens)
}

fn outline(source: &str) -> String {
    parse_str(source).unwrap().to_outline()
}

#[test]
fn test_parse_empty_program() {
    assert_eq!(outline(""), "Program\n");
    assert_eq!(outline("// nothing here\n"), "Program\n");
}

#[test]
fn test_parse_empty_class() {
    let program = parse_str("class A is end").unwrap();

    assert_eq!(program.body.len(), 1);
    match &program.body[0] {
        Item::Class(class) => {
            assert_eq!(class.name, "A");
            assert!(class.members.is_empty());
        }
        other => panic!("expected a class, found {:?}", other),
    }
    assert_eq!(program.to_outline(), "Program\n  ClassDeclaration: A\n");
}

#[test]
fn test_parse_class_with_typed_field() {
    assert_eq!(
        outline("class A is var x : Int end"),
        "Program\n  ClassDeclaration: A\n    VariableDeclaration\n      ID: x\n      Type: Int\n"
    );
}

#[test]
fn test_parse_generic_class_with_base() {
    assert_eq!(
        outline("class Box[T] extends Container is end"),
        "Program\n  ClassDeclaration: Box\n    GenericType: T\n    Extends: Container\n"
    );
}

#[test]
fn test_parse_typed_var_with_generic_and_constructor() {
    let program = parse_str("var xs : List[Integer](1, y)").unwrap();

    match &program.body[0] {
        Item::Stmt(Stmt::VarDecl(decl)) => match &decl.value {
            VarInit::Typed { type_name, generic, constructor } => {
                assert_eq!(type_name, "List");
                assert_eq!(generic.as_deref(), Some("Integer"));
                let constructor = constructor.as_ref().unwrap();
                assert_eq!(constructor.arguments, vec![Expr::Integer("1".to_string()), Expr::PropertyAccess("y".to_string())]);
            }
            other => panic!("expected a typed declaration, found {:?}", other),
        },
        other => panic!("expected a variable declaration, found {:?}", other),
    }
}

#[test]
fn test_parse_constructor_call_without_arguments() {
    assert_eq!(
        outline("var p : Point()"),
        "Program\n  VariableDeclaration\n    ID: p\n    Type: Point\n    MethodCall: Point\n      ConstructorCall: Point\n"
    );
}

#[test]
fn test_parse_var_with_initializer() {
    assert_eq!(outline("var x is 1"), "Program\n  VariableDeclaration\n    ID: x\n    Expression: 1\n");
    assert_eq!(outline("var b is true"), "Program\n  VariableDeclaration\n    ID: b\n    Expression: true\n");
}

#[test]
fn test_parse_var_with_omitted_initializer() {
    assert_eq!(
        outline("class A is var x is end"),
        "Program\n  ClassDeclaration: A\n    VariableDeclaration\n      ID: x\n      Expression: null\n"
    );
    assert_eq!(outline("var x is"), "Program\n  VariableDeclaration\n    ID: x\n    Expression: null\n");
}

#[test]
fn test_parse_var_initializer_from_call() {
    assert_eq!(
        outline("var s is a.size()"),
        "Program\n  VariableDeclaration\n    ID: s\n    MethodCall: size\n      ID: a\n"
    );
}

#[test]
fn test_parse_method_call_statement() {
    let program = parse_str("x.foo(1,2)").unwrap();

    let expected = Item::Stmt(Stmt::Expression(Expr::MethodCall(MethodCallExpr {
        method: "foo".to_string(),
        receiver: Box::new(Expr::Identifier("x".to_string())),
        arguments: vec![Expr::Integer("1".to_string()), Expr::Integer("2".to_string())],
    })));
    assert_eq!(program.body, vec![expected]);
    assert_eq!(
        program.to_outline(),
        "Program\n  MethodCall: foo\n    ID: x\n    Expression: 1\n    Expression: 2\n"
    );
}

#[test]
fn test_parse_chained_calls_nest_receivers() {
    assert_eq!(
        outline("a.b.c(1)"),
        "Program\n  MethodCall: c\n    MethodCall: b\n      ID: a\n    Expression: 1\n"
    );
}

#[test]
fn test_parse_member_step_wraps_base_identifier() {
    assert_eq!(outline("a.b.c"), "Program\n  MethodCall: c\n    ID: a\n");
    assert_eq!(outline("a.f(1).g"), "Program\n  MethodCall: g\n    ID: a\n");
}

#[test]
fn test_parse_super_call_restarts_chain() {
    assert_eq!(outline("x super init"), "Program\n  SuperMethodCall: init\n    ID: x\n");
    assert_eq!(outline("x.a.b super init"), "Program\n  SuperMethodCall: init\n    ID: x\n");
}

#[test]
fn test_parse_assignment() {
    assert_eq!(outline("x := 5"), "Program\n  Assignment\n    ID: x\n    Expression: 5\n");
    assert_eq!(
        outline("p.x := y"),
        "Program\n  Assignment\n    MethodCall: x\n      ID: p\n    Expression: y\n"
    );
}

#[test]
fn test_loop_var_cannot_start_assignment() {
    let error = parse_str("l_i := 0").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnexpectedToken {
            expected: vec![TokenKind::Identifier],
            found: TokenKind::LoopVar,
        }
    );
    assert_eq!(error.get_position().0, 0);
}

#[test]
fn test_parse_call_expression_uses_name_as_receiver() {
    assert_eq!(
        outline("x := max(a, b)"),
        "Program\n  Assignment\n    ID: x\n    MethodCall: max\n      ID: max\n      Expression: a\n      PropertyAccess: b\n"
    );
}

#[test]
fn test_parse_method_and_constructor() {
    let source = "
class Counter is
    var count : Integer
    this(start : Integer) is
        count := start
    end
    method inc(by : Integer, twice : Boolean) : Integer is
        return count.plus(by)
    end
    method reset is
    end
end";

    let expected = "\
Program
  ClassDeclaration: Counter
    VariableDeclaration
      ID: count
      Type: Integer
    ConstructorDeclaration
      Parameters
        Parameter: start : Integer
      Block
        Assignment
          ID: count
          Expression: start
    MethodDeclaration: inc
      Parameters
        Parameter: by : Integer
        Parameter: twice : Boolean
      ReturnType: Integer
      Block
        ReturnStatement
          MethodCall: plus
            ID: count
            PropertyAccess: by
    MethodDeclaration: reset
      Block
";
    assert_eq!(outline(source), expected);
}

#[test]
fn test_parse_empty_parameter_list() {
    let program = parse_str("class A is method f() is end end").unwrap();

    match &program.body[0] {
        Item::Class(class) => match &class.members[0] {
            MemberDecl::Method(method) => assert_eq!(method.parameters, Some(vec![])),
            other => panic!("expected a method, found {:?}", other),
        },
        other => panic!("expected a class, found {:?}", other),
    }
}

#[test]
fn test_parse_nested_class() {
    assert_eq!(
        outline("class Outer is class Inner is end end"),
        "Program\n  ClassDeclaration: Outer\n    ClassDeclaration: Inner\n"
    );
}

#[test]
fn test_parse_if_else_statement() {
    let source = "if flag then x := 1 else x := 2 end";

    let expected = "\
Program
  IfStatement
    Expression: flag
    Block
      Assignment
        ID: x
        Expression: 1
    Block
      Assignment
        ID: x
        Expression: 2
";
    assert_eq!(outline(source), expected);
}

#[test]
fn test_parse_while_loop() {
    let source = "while l_go loop l_go := false end";
    // A loop variable is not an expression leaf
    assert!(parse_str(source).is_err());

    let source = "while go loop go := false end";
    assert_eq!(
        outline(source),
        "Program\n  WhileStatement\n    Expression: go\n    Block\n      Assignment\n        ID: go\n        Expression: false\n"
    );
}

#[test]
fn test_parse_multiple_statements() {
    let program = parse_str("var x is 10 var y is 20 x := y").unwrap();
    assert_eq!(program.body.len(), 3);
}

#[test]
fn test_return_outside_block_is_rejected() {
    let error = parse_str("return 1").unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedTokenDetailed");
    assert_eq!(error.kind(), ErrorKind::Syntax);
}

#[test]
fn test_parse_syntax_error_var_without_type_or_value() {
    let error = parse_str("var x").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnexpectedEndOfInput { expected: vec![TokenKind::Colon, TokenKind::Is] }
    );
    assert_eq!(error.get_position().0, 5);
}

#[test]
fn test_parse_syntax_error_var_with_wrong_separator() {
    let error = parse_str("var x := 1").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnexpectedToken {
            expected: vec![TokenKind::Colon, TokenKind::Is],
            found: TokenKind::Assign,
        }
    );
    assert_eq!(error.get_position().0, 6);
}

#[test]
fn test_parse_missing_end() {
    let error = parse_str("class A is var x : Int").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnexpectedEndOfInput { expected: vec![TokenKind::End] }
    );
}

#[test]
fn test_parse_unknown_member() {
    let error = parse_str("class A is x := 1 end").unwrap_err();

    assert!(matches!(error.get_internal_error(), ErrorImpl::UnexpectedTokenDetailed { .. }));
}

#[test]
fn test_arithmetic_is_not_parsed() {
    assert!(parse_str("x := 1 + 2").is_err());
}

#[test]
fn test_bare_call_statement_is_rejected() {
    // Calls as statements need a receiver
    assert!(parse_str("print(1)").is_err());
}

#[test]
fn test_parse_is_deterministic() {
    let source = "class A[T] extends B is var x : C[T](1) method m(a : T) : T is if a then return a end end end";
    let tokens = tokenize(source, None).unwrap();

    assert_eq!(parse(tokens.clone()).unwrap(), parse(tokens).unwrap());
}
