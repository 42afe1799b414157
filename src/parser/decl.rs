use crate::{
    ast::declarations::{ClassDecl, ConstructorDecl, MemberDecl, MethodDecl, Param},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    parser::Parser,
    stmt::{parse_block, parse_var_decl_stmt},
    types::{parse_generic, parse_typed_name},
};

const MEMBER_START: [TokenKind; 4] = [TokenKind::Var, TokenKind::Method, TokenKind::This, TokenKind::Class];

pub fn parse_class_decl(parser: &mut Parser) -> Result<ClassDecl, Error> {
    parser.expect(TokenKind::Class)?;
    let name = parser.expect(TokenKind::Identifier)?.value;
    tracing::trace!("class declaration {}", name);

    let generic = parse_generic(parser)?;

    let extends = if parser.at(TokenKind::Extends) {
        parser.expect(TokenKind::Extends)?;
        Some(parser.expect(TokenKind::Identifier)?.value)
    } else {
        None
    };

    parser.expect(TokenKind::Is)?;

    let mut members = vec![];
    while parser.has_tokens() && !parser.at(TokenKind::End) {
        members.push(parse_member_decl(parser)?);
    }

    parser.expect(TokenKind::End)?;

    Ok(ClassDecl { name, generic, extends, members })
}

pub fn parse_member_decl(parser: &mut Parser) -> Result<MemberDecl, Error> {
    match parser.current_token_kind() {
        Some(TokenKind::Var) => Ok(MemberDecl::Var(parse_var_decl_stmt(parser)?)),
        Some(TokenKind::Method) => Ok(MemberDecl::Method(parse_method_decl(parser)?)),
        Some(TokenKind::This) => Ok(MemberDecl::Constructor(parse_constructor_decl(parser)?)),
        Some(TokenKind::Class) => Ok(MemberDecl::Class(parse_class_decl(parser)?)),
        _ => Err(parser.unexpected("expected a member declaration", &MEMBER_START)),
    }
}

pub fn parse_method_decl(parser: &mut Parser) -> Result<MethodDecl, Error> {
    parser.expect(TokenKind::Method)?;
    let name = parser.expect(TokenKind::Identifier)?.value;
    tracing::trace!("method declaration {}", name);

    let parameters = if parser.at(TokenKind::OpenParen) {
        Some(parse_parameters(parser)?)
    } else {
        None
    };

    let return_type = if parser.at(TokenKind::Colon) {
        parser.expect(TokenKind::Colon)?;
        Some(parser.expect(TokenKind::Identifier)?.value)
    } else {
        None
    };

    parser.expect(TokenKind::Is)?;
    let body = parse_block(parser)?;
    parser.expect(TokenKind::End)?;

    Ok(MethodDecl { name, parameters, return_type, body })
}

pub fn parse_constructor_decl(parser: &mut Parser) -> Result<ConstructorDecl, Error> {
    parser.expect(TokenKind::This)?;

    let parameters = if parser.at(TokenKind::OpenParen) {
        Some(parse_parameters(parser)?)
    } else {
        None
    };

    parser.expect(TokenKind::Is)?;
    let body = parse_block(parser)?;
    parser.expect(TokenKind::End)?;

    Ok(ConstructorDecl { parameters, body })
}

/// Parses `( (name : Type (, name : Type)*)? )`.
pub fn parse_parameters(parser: &mut Parser) -> Result<Vec<Param>, Error> {
    parser.expect(TokenKind::OpenParen)?;

    let mut parameters = vec![];

    if !parser.at(TokenKind::CloseParen) {
        let (name, type_name) = parse_typed_name(parser)?;
        parameters.push(Param { name, type_name });

        while parser.at(TokenKind::Comma) {
            parser.expect(TokenKind::Comma)?;
            let (name, type_name) = parse_typed_name(parser)?;
            parameters.push(Param { name, type_name });
        }
    }

    parser.expect(TokenKind::CloseParen)?;
    Ok(parameters)
}
