use std::slice::Iter;

use super::{
    ast::{write_line, Dump},
    expressions::{ConstructorCallExpr, Expr},
};

/// A sequence of statements closed by `end` or `else`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block {
    pub body: Vec<Stmt>,
}

impl Block {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    VarDecl(VarDeclStmt),
    While(WhileStmt),
    If(IfStmt),
    Return(ReturnStmt),
    Assignment(AssignmentStmt),
    /// A call or member chain evaluated for its effect.
    Expression(Expr),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarDeclStmt {
    pub identifier: String,
    pub value: VarInit,
}

/// The two shapes of a variable declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VarInit {
    /// `var x : Type[Generic](args)`
    Typed {
        type_name: String,
        generic: Option<String>,
        constructor: Option<ConstructorCallExpr>,
    },
    /// `var x is expr`, where the expression may be omitted.
    Assigned(Option<Expr>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_body: Block,
    pub else_body: Option<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnStmt {
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentStmt {
    pub target: Expr,
    pub value: Expr,
}

impl Dump for Block {
    fn dump(&self, out: &mut String, depth: usize) {
        write_line(out, depth, "Block");
        for stmt in &self.body {
            stmt.dump(out, depth + 1);
        }
    }
}

impl Dump for Stmt {
    fn dump(&self, out: &mut String, depth: usize) {
        match self {
            Stmt::VarDecl(decl) => decl.dump(out, depth),
            Stmt::While(stmt) => stmt.dump(out, depth),
            Stmt::If(stmt) => stmt.dump(out, depth),
            Stmt::Return(stmt) => stmt.dump(out, depth),
            Stmt::Assignment(stmt) => stmt.dump(out, depth),
            Stmt::Expression(expr) => expr.dump(out, depth),
        }
    }
}

impl Dump for VarDeclStmt {
    fn dump(&self, out: &mut String, depth: usize) {
        write_line(out, depth, "VariableDeclaration");
        write_line(out, depth + 1, &format!("ID: {}", self.identifier));

        match &self.value {
            VarInit::Typed { type_name, generic, constructor } => {
                write_line(out, depth + 1, &format!("Type: {}", type_name));
                if let Some(generic) = generic {
                    write_line(out, depth + 1, &format!("GenericType: {}", generic));
                }
                if let Some(constructor) = constructor {
                    constructor.dump(out, depth + 1);
                }
            }
            VarInit::Assigned(Some(expr)) => expr.dump(out, depth + 1),
            VarInit::Assigned(None) => write_line(out, depth + 1, "Expression: null"),
        }
    }
}

impl Dump for WhileStmt {
    fn dump(&self, out: &mut String, depth: usize) {
        write_line(out, depth, "WhileStatement");
        self.condition.dump(out, depth + 1);
        self.body.dump(out, depth + 1);
    }
}

impl Dump for IfStmt {
    fn dump(&self, out: &mut String, depth: usize) {
        write_line(out, depth, "IfStatement");
        self.condition.dump(out, depth + 1);
        self.then_body.dump(out, depth + 1);
        if let Some(else_body) = &self.else_body {
            else_body.dump(out, depth + 1);
        }
    }
}

impl Dump for ReturnStmt {
    fn dump(&self, out: &mut String, depth: usize) {
        write_line(out, depth, "ReturnStatement");
        self.value.dump(out, depth + 1);
    }
}

impl Dump for AssignmentStmt {
    fn dump(&self, out: &mut String, depth: usize) {
        write_line(out, depth, "Assignment");
        self.target.dump(out, depth + 1);
        self.value.dump(out, depth + 1);
    }
}
