/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The program root and the outline dump trait
/// - declarations: Class and class member declarations
/// - expressions: Identifiers, literals, calls and member chains
/// - statements: Blocks, control flow, assignments and variable declarations
pub mod ast;
pub mod declarations;
pub mod expressions;
pub mod statements;
