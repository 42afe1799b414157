//! Error types for the front end.
//!
//! This module defines the errors raised while tokenizing and parsing:
//!
//! - Error structures with source position information
//! - Lexical and syntax error variants
//! - Error names and suggestions used when reporting

pub mod errors;
