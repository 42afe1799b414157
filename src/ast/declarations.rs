use super::{
    ast::{write_line, Dump},
    statements::{Block, VarDeclStmt},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDecl {
    pub name: String,
    /// The `[T]` parameter after the class name.
    pub generic: Option<String>,
    pub extends: Option<String>,
    pub members: Vec<MemberDecl>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberDecl {
    Var(VarDeclStmt),
    Method(MethodDecl),
    Constructor(ConstructorDecl),
    Class(ClassDecl),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDecl {
    pub name: String,
    /// `None` when the parameter list is omitted entirely, which differs from `()`.
    pub parameters: Option<Vec<Param>>,
    pub return_type: Option<String>,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorDecl {
    pub parameters: Option<Vec<Param>>,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub type_name: String,
}

impl Dump for ClassDecl {
    fn dump(&self, out: &mut String, depth: usize) {
        write_line(out, depth, &format!("ClassDeclaration: {}", self.name));
        if let Some(generic) = &self.generic {
            write_line(out, depth + 1, &format!("GenericType: {}", generic));
        }
        if let Some(extends) = &self.extends {
            write_line(out, depth + 1, &format!("Extends: {}", extends));
        }
        for member in &self.members {
            member.dump(out, depth + 1);
        }
    }
}

impl Dump for MemberDecl {
    fn dump(&self, out: &mut String, depth: usize) {
        match self {
            MemberDecl::Var(decl) => decl.dump(out, depth),
            MemberDecl::Method(decl) => decl.dump(out, depth),
            MemberDecl::Constructor(decl) => decl.dump(out, depth),
            MemberDecl::Class(decl) => decl.dump(out, depth),
        }
    }
}

fn dump_parameters(parameters: &Option<Vec<Param>>, out: &mut String, depth: usize) {
    if let Some(parameters) = parameters {
        write_line(out, depth, "Parameters");
        for param in parameters {
            write_line(out, depth + 1, &format!("Parameter: {} : {}", param.name, param.type_name));
        }
    }
}

impl Dump for MethodDecl {
    fn dump(&self, out: &mut String, depth: usize) {
        write_line(out, depth, &format!("MethodDeclaration: {}", self.name));
        dump_parameters(&self.parameters, out, depth + 1);
        if let Some(return_type) = &self.return_type {
            write_line(out, depth + 1, &format!("ReturnType: {}", return_type));
        }
        self.body.dump(out, depth + 1);
    }
}

impl Dump for ConstructorDecl {
    fn dump(&self, out: &mut String, depth: usize) {
        write_line(out, depth, "ConstructorDeclaration");
        dump_parameters(&self.parameters, out, depth + 1);
        self.body.dump(out, depth + 1);
    }
}
