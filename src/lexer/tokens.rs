use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("var", TokenKind::Var);
        map.insert("class", TokenKind::Class);
        map.insert("is", TokenKind::Is);
        map.insert("end", TokenKind::End);
        map.insert("method", TokenKind::Method);
        map.insert("this", TokenKind::This);
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("loop", TokenKind::Loop);
        map.insert("return", TokenKind::Return);
        map.insert("extends", TokenKind::Extends);
        map.insert("super", TokenKind::Super);
        map.insert("true", TokenKind::BooleanLiteral);
        map.insert("false", TokenKind::BooleanLiteral);
        map
    };
}

/// Identifiers starting with this prefix are loop variables.
pub const LOOP_VAR_PREFIX: &str = "l_";

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    LoopVar,
    IntLiteral,
    BooleanLiteral,

    Assign, // :=

    Colon,
    Dot,
    Plus,
    Minus,
    Mult,
    Div,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    Comma,

    // Reserved
    Var,
    Class,
    Is,
    End,
    Method,
    This,
    If,
    Then,
    Else,
    While,
    Loop,
    Return,
    Extends,
    Super,
}

impl TokenKind {
    /// The tag used in token dumps and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "ID",
            TokenKind::LoopVar => "LOOP_VAR",
            TokenKind::IntLiteral => "INT_LITERAL",
            TokenKind::BooleanLiteral => "BOOLEAN_LITERAL",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Colon => "COLON",
            TokenKind::Dot => "DOT",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Mult => "MULT",
            TokenKind::Div => "DIV",
            TokenKind::OpenParen => "LPAREN",
            TokenKind::CloseParen => "RPAREN",
            TokenKind::OpenBracket => "LBRACKET",
            TokenKind::CloseBracket => "RBRACKET",
            TokenKind::Comma => "COMMA",
            TokenKind::Var => "VAR",
            TokenKind::Class => "CLASS",
            TokenKind::Is => "IS",
            TokenKind::End => "END",
            TokenKind::Method => "METHOD",
            TokenKind::This => "THIS",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::Loop => "LOOP",
            TokenKind::Return => "RETURN",
            TokenKind::Extends => "EXTENDS",
            TokenKind::Super => "SUPER",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

/// Renders as `KIND('lexeme')`.
impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}('{}')", self.kind, self.value)
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}

/// Renders a token sequence one token per line, in scan order.
pub fn dump_tokens(tokens: &[Token]) -> String {
    let mut result = String::new();
    for token in tokens {
        result.push_str(&token.to_string());
        result.push('\n');
    }
    result
}
