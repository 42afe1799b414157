use crate::{errors::errors::Error, lexer::tokens::TokenKind};

use super::parser::Parser;

/// Parses an optional `[Name]` generic parameter.
pub fn parse_generic(parser: &mut Parser) -> Result<Option<String>, Error> {
    if !parser.at(TokenKind::OpenBracket) {
        return Ok(None);
    }

    parser.expect(TokenKind::OpenBracket)?;
    let generic = parser.expect(TokenKind::Identifier)?.value;
    parser.expect(TokenKind::CloseBracket)?;

    Ok(Some(generic))
}

/// Parses `name : Type`.
pub fn parse_typed_name(parser: &mut Parser) -> Result<(String, String), Error> {
    let name = parser.expect(TokenKind::Identifier)?.value;
    parser.expect(TokenKind::Colon)?;
    let type_name = parser.expect(TokenKind::Identifier)?.value;

    Ok((name, type_name))
}
