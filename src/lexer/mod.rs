//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a sequence of tokens for parsing. It handles:
//!
//! - Tokenization of source code using an ordered table of regex patterns
//! - Recognition of keywords, loop variables, identifiers and literals
//! - Token position tracking for error reporting
//! - Line comments and whitespace handling

pub mod lexer;
pub mod tokens;
