//! Integration tests for the front end.
//!
//! These tests drive the public API end to end, from source text through
//! tokenization and parsing to the token and AST dumps.

use classlang::{
    ast::ast::{Dump, Item},
    errors::errors::ErrorKind,
    lexer::{lexer::tokenize, tokens::dump_tokens},
    parse_source,
    parser::parser::parse,
};
use std::fs;

const LINKED_LIST: &str = "
// A singly linked list of integers
class Node is
    var value : Integer
    var next : Node
    this(v : Integer) is
        value := v
    end
end

class List extends AnyRef is
    var head is
    var size : Integer(0)
    method push(v : Integer) is
        var node : Node(v)
        node.next := head
        head := node
        size := size.Plus(1)
    end
    method isEmpty : Boolean is
        if size.Equal(0) then
            return true
        else
            return false
        end
    end
end

var list : List()
list.push(3)
";

const LINKED_LIST_AST: &str = "\
Program
  ClassDeclaration: Node
    VariableDeclaration
      ID: value
      Type: Integer
    VariableDeclaration
      ID: next
      Type: Node
    ConstructorDeclaration
      Parameters
        Parameter: v : Integer
      Block
        Assignment
          ID: value
          Expression: v
  ClassDeclaration: List
    Extends: AnyRef
    VariableDeclaration
      ID: head
      Expression: null
    VariableDeclaration
      ID: size
      Type: Integer
      MethodCall: Integer
        ConstructorCall: Integer
        Expression: 0
    MethodDeclaration: push
      Parameters
        Parameter: v : Integer
      Block
        VariableDeclaration
          ID: node
          Type: Node
          MethodCall: Node
            ConstructorCall: Node
            PropertyAccess: v
        Assignment
          MethodCall: next
            ID: node
          Expression: head
        Assignment
          ID: head
          Expression: node
        Assignment
          ID: size
          MethodCall: Plus
            ID: size
            Expression: 1
    MethodDeclaration: isEmpty
      ReturnType: Boolean
      Block
        IfStatement
          MethodCall: Equal
            ID: size
            Expression: 0
          Block
            ReturnStatement
              Expression: true
          Block
            ReturnStatement
              Expression: false
  VariableDeclaration
    ID: list
    Type: List
    MethodCall: List
      ConstructorCall: List
  MethodCall: push
    ID: list
    Expression: 3
";

#[test]
fn test_parse_full_program() {
    let program = parse_source(LINKED_LIST, Some("list.txt".to_string())).unwrap();

    assert_eq!(program.body.len(), 4);
    assert!(matches!(program.body[0], Item::Class(_)));
    assert!(matches!(program.body[3], Item::Stmt(_)));
    assert_eq!(program.to_outline(), LINKED_LIST_AST);
}

#[test]
fn test_display_matches_outline() {
    let program = parse_source(LINKED_LIST, None).unwrap();

    assert_eq!(program.to_string(), program.to_outline());
}

#[test]
fn test_pipeline_is_deterministic() {
    let first = tokenize(LINKED_LIST, None).unwrap();
    let second = tokenize(LINKED_LIST, None).unwrap();
    assert_eq!(first, second);

    assert_eq!(parse(first.clone()).unwrap(), parse(first).unwrap());
}

#[test]
fn test_token_dump_one_per_line() {
    let tokens = tokenize("var x is 1 // trailing\n", None).unwrap();

    assert_eq!(dump_tokens(&tokens), "VAR('var')\nID('x')\nIS('is')\nINT_LITERAL('1')\n");
}

#[test]
fn test_lexical_error_aborts_pipeline() {
    let error = parse_source("class A is var x is 1; end", None).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Lexical);
}

#[test]
fn test_syntax_error_aborts_pipeline() {
    let error = parse_source("class A is method m is return end end", None).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Syntax);
}

#[test]
fn test_dumps_written_to_files() {
    let dir = tempfile::tempdir().unwrap();
    let source_path = dir.path().join("input1.txt");
    fs::write(&source_path, "class A is var x : Int end\n").unwrap();

    let source = fs::read_to_string(&source_path).unwrap();
    let tokens = tokenize(&source, Some("input1.txt".to_string())).unwrap();
    let token_path = dir.path().join("input1.tokens.txt");
    fs::write(&token_path, dump_tokens(&tokens)).unwrap();

    let program = parse(tokens).unwrap();
    let ast_path = dir.path().join("astinput1.txt");
    fs::write(&ast_path, program.to_outline()).unwrap();

    assert_eq!(fs::read_to_string(&token_path).unwrap().lines().count(), 8);
    assert_eq!(
        fs::read_to_string(&ast_path).unwrap(),
        "Program\n  ClassDeclaration: A\n    VariableDeclaration\n      ID: x\n      Type: Int\n"
    );
}
