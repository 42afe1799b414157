//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parse entry point.
//! The parser is predictive: every production decides what to do from the
//! token under the cursor alone, and the first mismatch aborts the parse.

use std::sync::Arc;

use crate::{
    ast::ast::{Item, Program},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::{decl::parse_class_decl, stmt::parse_stmt};

/// The main parser structure that maintains parsing state.
///
/// A parser owns the token sequence of one document and a cursor into it.
/// It is created per parse and never shared.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token sequence
    pos: usize,
    /// The name of the source file being parsed
    file: Arc<String>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        let file = tokens
            .first()
            .map(|token| Arc::clone(&token.span.start.1))
            .unwrap_or_else(|| Arc::new(String::from("shell")));

        Parser { tokens, pos: 0, file }
    }

    /// Returns the token under the cursor without advancing.
    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the kind of the token under the cursor, `None` at end of input.
    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.current_token().map(|token| token.kind)
    }

    /// Returns true if the token under the cursor has the given kind.
    pub fn at(&self, kind: TokenKind) -> bool {
        self.current_token_kind() == Some(kind)
    }

    /// Expects a token of the specified kind.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_one_of(&[expected_kind])
    }

    /// Consumes and returns the token under the cursor if it matches any of
    /// `expected_kinds`.
    ///
    /// # Errors
    ///
    /// `UnexpectedToken` naming the expected kinds and the kind found, or
    /// `UnexpectedEndOfInput` when no tokens remain.
    pub fn expect_one_of(&mut self, expected_kinds: &[TokenKind]) -> Result<Token, Error> {
        match self.current_token() {
            Some(token) if token.is_one_of_many(expected_kinds) => {
                let token = token.clone();
                self.pos += 1;
                Ok(token)
            }
            Some(token) => Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kinds.to_vec(),
                    found: token.kind,
                },
                token.span.start.clone(),
            )),
            None => Err(self.end_of_input(expected_kinds)),
        }
    }

    /// Builds the error for a dispatch point with no production for the
    /// current token.
    pub fn unexpected(&self, message: &str, expected_kinds: &[TokenKind]) -> Error {
        match self.current_token() {
            Some(token) => Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: token.to_string(),
                    message: String::from(message),
                },
                token.span.start.clone(),
            ),
            None => self.end_of_input(expected_kinds),
        }
    }

    fn end_of_input(&self, expected_kinds: &[TokenKind]) -> Error {
        Error::new(
            ErrorImpl::UnexpectedEndOfInput {
                expected: expected_kinds.to_vec(),
            },
            self.get_position(),
        )
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    /// Returns the source position of the cursor.
    ///
    /// Past the last token this is where that token ends.
    pub fn get_position(&self) -> Position {
        match self.current_token() {
            Some(token) => token.span.start.clone(),
            None => self
                .tokens
                .last()
                .map(|token| token.span.end.clone())
                .unwrap_or_else(|| Position(0, Arc::clone(&self.file))),
        }
    }
}

/// Parses a token sequence into a Program.
///
/// This is the main entry point for parsing. Top-level class declarations
/// and statements are parsed in order until the tokens run out.
pub fn parse(tokens: Vec<Token>) -> Result<Program, Error> {
    let mut parser = Parser::new(tokens);
    let mut body = vec![];

    while parser.has_tokens() {
        let item = if parser.at(TokenKind::Class) {
            Item::Class(parse_class_decl(&mut parser)?)
        } else {
            Item::Stmt(parse_stmt(&mut parser)?)
        };
        body.push(item);
    }

    tracing::debug!("parsed {} into {} top-level items", parser.file, body.len());
    Ok(Program { body })
}
