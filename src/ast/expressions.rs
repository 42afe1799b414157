use super::ast::{write_line, Dump};

/// Expression
///
/// Every value-producing construct. Arithmetic is not part of the language's
/// expressions even though the operators are tokenized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// The base identifier of a dot chain or call receiver.
    Identifier(String),
    /// An identifier used as a plain value.
    Symbol(String),
    /// An identifier immediately closing an argument list.
    PropertyAccess(String),
    /// Unsigned integer literal, kept as its lexeme.
    Integer(String),
    Boolean(bool),
    MethodCall(MethodCallExpr),
    Member(MemberExpr),
    SuperCall(SuperCallExpr),
}

// CALLS AND MEMBERS

/// `receiver.method(args)`, or `method(args)` with the method name as receiver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodCallExpr {
    pub method: String,
    pub receiver: Box<Expr>,
    pub arguments: Vec<Expr>,
}

/// `receiver.member` without a following argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberExpr {
    pub member: String,
    pub receiver: Box<Expr>,
}

/// `base super method`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuperCallExpr {
    pub method: String,
    pub base: String,
}

/// `Type(args)` after a typed variable declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorCallExpr {
    pub type_name: String,
    pub arguments: Vec<Expr>,
}

impl Dump for Expr {
    fn dump(&self, out: &mut String, depth: usize) {
        match self {
            Expr::Identifier(name) => write_line(out, depth, &format!("ID: {}", name)),
            Expr::Symbol(name) => write_line(out, depth, &format!("Expression: {}", name)),
            Expr::PropertyAccess(name) => write_line(out, depth, &format!("PropertyAccess: {}", name)),
            Expr::Integer(value) => write_line(out, depth, &format!("Expression: {}", value)),
            Expr::Boolean(value) => write_line(out, depth, &format!("Expression: {}", value)),
            Expr::MethodCall(call) => call.dump(out, depth),
            Expr::Member(member) => member.dump(out, depth),
            Expr::SuperCall(call) => call.dump(out, depth),
        }
    }
}

impl Dump for MethodCallExpr {
    fn dump(&self, out: &mut String, depth: usize) {
        write_line(out, depth, &format!("MethodCall: {}", self.method));
        self.receiver.dump(out, depth + 1);
        for argument in &self.arguments {
            argument.dump(out, depth + 1);
        }
    }
}

impl Dump for MemberExpr {
    fn dump(&self, out: &mut String, depth: usize) {
        write_line(out, depth, &format!("MethodCall: {}", self.member));
        self.receiver.dump(out, depth + 1);
    }
}

impl Dump for SuperCallExpr {
    fn dump(&self, out: &mut String, depth: usize) {
        write_line(out, depth, &format!("SuperMethodCall: {}", self.method));
        write_line(out, depth + 1, &format!("ID: {}", self.base));
    }
}

impl Dump for ConstructorCallExpr {
    fn dump(&self, out: &mut String, depth: usize) {
        write_line(out, depth, &format!("MethodCall: {}", self.type_name));
        write_line(out, depth + 1, &format!("ConstructorCall: {}", self.type_name));
        for argument in &self.arguments {
            argument.dump(out, depth + 1);
        }
    }
}
