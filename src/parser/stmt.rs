use crate::{
    ast::{
        expressions::ConstructorCallExpr,
        statements::{AssignmentStmt, Block, IfStmt, ReturnStmt, Stmt, VarDeclStmt, VarInit, WhileStmt},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    expr::{at_expr_start, parse_arguments, parse_dot_chain, parse_expr},
    parser::Parser,
    types::parse_generic,
};

const STMT_START: [TokenKind; 5] = [
    TokenKind::Var,
    TokenKind::While,
    TokenKind::If,
    TokenKind::Identifier,
    TokenKind::LoopVar,
];

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    match parser.current_token_kind() {
        Some(TokenKind::Var) => Ok(Stmt::VarDecl(parse_var_decl_stmt(parser)?)),
        Some(TokenKind::While) => parse_while_stmt(parser),
        Some(TokenKind::If) => parse_if_stmt(parser),
        Some(TokenKind::Identifier) | Some(TokenKind::LoopVar) => parse_assignment_or_call(parser),
        _ => Err(parser.unexpected("expected a statement", &STMT_START)),
    }
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<VarDeclStmt, Error> {
    parser.expect(TokenKind::Var)?;
    let identifier = parser.expect(TokenKind::Identifier)?.value;

    let separator = parser.expect_one_of(&[TokenKind::Colon, TokenKind::Is])?;

    let value = if separator.kind == TokenKind::Colon {
        let type_name = parser.expect(TokenKind::Identifier)?.value;
        let generic = parse_generic(parser)?;

        let constructor = if parser.at(TokenKind::OpenParen) {
            Some(ConstructorCallExpr {
                type_name: type_name.clone(),
                arguments: parse_arguments(parser)?,
            })
        } else {
            None
        };

        VarInit::Typed { type_name, generic, constructor }
    } else if at_expr_start(parser) {
        VarInit::Assigned(Some(parse_expr(parser)?))
    } else {
        VarInit::Assigned(None)
    };

    tracing::trace!("variable declaration {}", identifier);
    Ok(VarDeclStmt { identifier, value })
}

/// Parses statements until `end` or `else`, leaving that token unconsumed.
pub fn parse_block(parser: &mut Parser) -> Result<Block, Error> {
    let mut body = vec![];

    while let Some(kind) = parser.current_token_kind() {
        match kind {
            TokenKind::End | TokenKind::Else => break,
            TokenKind::Return => body.push(parse_return_stmt(parser)?),
            _ => body.push(parse_stmt(parser)?),
        }
    }

    Ok(Block { body })
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Return)?;
    let value = parse_expr(parser)?;

    Ok(Stmt::Return(ReturnStmt { value }))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::If)?;

    let condition = parse_expr(parser)?;
    parser.expect(TokenKind::Then)?;
    let then_body = parse_block(parser)?;

    let else_body = if parser.at(TokenKind::Else) {
        parser.expect(TokenKind::Else)?;
        Some(parse_block(parser)?)
    } else {
        None
    };

    parser.expect(TokenKind::End)?;

    Ok(Stmt::If(IfStmt { condition, then_body, else_body }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::While)?;

    let condition = parse_expr(parser)?;
    parser.expect(TokenKind::Loop)?;
    let body = parse_block(parser)?;
    parser.expect(TokenKind::End)?;

    Ok(Stmt::While(WhileStmt { condition, body }))
}

/// Parses `target (:= value)?`, where target is an identifier followed by a
/// dot chain. Loop variables are dispatched here but rejected.
pub fn parse_assignment_or_call(parser: &mut Parser) -> Result<Stmt, Error> {
    let base = parser.expect(TokenKind::Identifier)?.value;
    let target = parse_dot_chain(parser, base)?;

    if parser.at(TokenKind::Assign) {
        parser.expect(TokenKind::Assign)?;
        let value = parse_expr(parser)?;
        return Ok(Stmt::Assignment(AssignmentStmt { target, value }));
    }

    Ok(Stmt::Expression(target))
}
