//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms a
//! token sequence into a `Program`. Every production looks at most one
//! token ahead and there is no backtracking:
//!
//! - Class and member declarations (variables, methods, constructors)
//! - Statement parsing (variable declarations, control flow, assignments)
//! - Expressions (identifiers, literals, calls and dot chains)
//! - Generic parameters and typed names
//!
//! Parsing is fail-fast: the first unexpected token aborts with an error.

pub mod decl;
pub mod expr;
pub mod parser;
pub mod stmt;
pub mod types;

#[cfg(test)]
mod tests;
