use crate::{
    ast::expressions::{Expr, MemberExpr, MethodCallExpr, SuperCallExpr},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

const EXPR_START: [TokenKind; 3] = [TokenKind::Identifier, TokenKind::IntLiteral, TokenKind::BooleanLiteral];

/// Returns true if the current token can start an expression.
pub fn at_expr_start(parser: &Parser) -> bool {
    parser
        .current_token_kind()
        .is_some_and(|kind| EXPR_START.contains(&kind))
}

pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        Some(TokenKind::Identifier) => {
            let name = parser.expect(TokenKind::Identifier)?.value;

            match parser.current_token_kind() {
                Some(TokenKind::Dot) | Some(TokenKind::Super) => parse_dot_chain(parser, name),
                Some(TokenKind::OpenParen) => {
                    let arguments = parse_arguments(parser)?;
                    Ok(Expr::MethodCall(MethodCallExpr {
                        method: name.clone(),
                        receiver: Box::new(Expr::Identifier(name)),
                        arguments,
                    }))
                }
                Some(TokenKind::CloseParen) => Ok(Expr::PropertyAccess(name)),
                _ => Ok(Expr::Symbol(name)),
            }
        }
        Some(TokenKind::IntLiteral) => {
            Ok(Expr::Integer(parser.expect(TokenKind::IntLiteral)?.value))
        }
        Some(TokenKind::BooleanLiteral) => {
            let value = parser.expect(TokenKind::BooleanLiteral)?.value;
            Ok(Expr::Boolean(value == "true"))
        }
        _ => Err(parser.unexpected("expected an expression", &EXPR_START)),
    }
}

/// Parses any `.member`, `.method(args)` and `super method` steps after `base`.
///
/// A call step wraps the node built so far as its receiver. A plain member
/// step and a `super` step both start over from the base identifier.
pub fn parse_dot_chain(parser: &mut Parser, base: String) -> Result<Expr, Error> {
    let mut node = Expr::Identifier(base.clone());

    loop {
        match parser.current_token_kind() {
            Some(TokenKind::Super) => {
                parser.expect(TokenKind::Super)?;
                let method = parser.expect(TokenKind::Identifier)?.value;
                tracing::trace!("super call {} on {}", method, base);

                node = Expr::SuperCall(SuperCallExpr {
                    method,
                    base: base.clone(),
                });
            }
            Some(TokenKind::Dot) => {
                parser.expect(TokenKind::Dot)?;
                let member = parser.expect(TokenKind::Identifier)?.value;

                node = if parser.at(TokenKind::OpenParen) {
                    let arguments = parse_arguments(parser)?;
                    Expr::MethodCall(MethodCallExpr {
                        method: member,
                        receiver: Box::new(node),
                        arguments,
                    })
                } else {
                    Expr::Member(MemberExpr {
                        member,
                        receiver: Box::new(Expr::Identifier(base.clone())),
                    })
                };
            }
            _ => break,
        }
    }

    Ok(node)
}

/// Parses `( (Expr (, Expr)*)? )`.
pub fn parse_arguments(parser: &mut Parser) -> Result<Vec<Expr>, Error> {
    parser.expect(TokenKind::OpenParen)?;

    let mut arguments = vec![];

    if parser.at(TokenKind::CloseParen) {
        parser.expect(TokenKind::CloseParen)?;
        return Ok(arguments);
    }

    arguments.push(parse_expr(parser)?);
    while parser.at(TokenKind::Comma) {
        parser.expect(TokenKind::Comma)?;
        arguments.push(parse_expr(parser)?);
    }

    parser.expect(TokenKind::CloseParen)?;
    Ok(arguments)
}
