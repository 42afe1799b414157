use std::fmt::{Debug, Display};

use super::{declarations::ClassDecl, statements::Stmt};

/// Outline Trait
///
/// Renders a node and its children as an indented outline: one label per
/// line, two spaces per nesting depth, children depth-first in order.
pub trait Dump: Debug {
    /// Writes this node at `depth`, followed by its children at `depth + 1`.
    fn dump(&self, out: &mut String, depth: usize);

    fn to_outline(&self) -> String {
        let mut out = String::new();
        self.dump(&mut out, 0);
        out
    }
}

/// Writes a single outline line.
pub fn write_line(out: &mut String, depth: usize, label: &str) {
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str(label);
    out.push('\n');
}

/// The root of every parsed document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub body: Vec<Item>,
}

/// A top-level entry of a program, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Class(ClassDecl),
    Stmt(Stmt),
}

impl Dump for Program {
    fn dump(&self, out: &mut String, depth: usize) {
        write_line(out, depth, "Program");
        for item in &self.body {
            item.dump(out, depth + 1);
        }
    }
}

impl Dump for Item {
    fn dump(&self, out: &mut String, depth: usize) {
        match self {
            Item::Class(class) => class.dump(out, depth),
            Item::Stmt(stmt) => stmt.dump(out, depth),
        }
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_outline())
    }
}
