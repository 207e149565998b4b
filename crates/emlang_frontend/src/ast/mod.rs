
use std::fmt;

use crate::Node;

/// Return type given to functions that don't declare one.
pub const VOID: &str = "void";

#[derive(Node!, Default)]
pub struct Program {
    pub declarations: Vec<TopLevelDeclaration>,
}

#[derive(Node!)]
pub enum TopLevelDeclaration {
    Function(FunctionDeclaration),
}

#[derive(Node!)]
pub struct FunctionDeclaration {
    pub name: Identifier,
    pub return_type: Identifier,
    pub body: BlockStatement,
}

#[derive(Node!, Default)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
}

#[derive(Node!)]
pub enum Statement {
    Assignment(AssignmentStatement),
    Return(ReturnStatement),
}

#[derive(Node!)]
pub struct AssignmentStatement {
    pub target: Identifier,
    pub value: Expression,
}

#[derive(Node!)]
pub struct ReturnStatement {
    pub value: Expression,
}

#[derive(Node!)]
pub enum Expression {
    Identifier(Identifier),
    Int(IntLiteral),
    Call(CallExpression),

    /// Stands in for an expression that could not be parsed.
    ParseError,
}

#[derive(Node!)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn void() -> Self {
        Self::new(VOID)
    }
}

#[derive(Node!)]
pub struct IntLiteral {
    pub value: i64,
    /// The literal as written, kept so printing reproduces the source.
    pub literal: String,
}

#[derive(Node!)]
pub struct CallExpression {
    pub function: Identifier,
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.declarations
            .iter()
            .try_for_each(|decl| write!(f, "{decl}"))
    }
}

impl fmt::Display for TopLevelDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopLevelDeclaration::Function(func) => write!(f, "{func}"),
        }
    }
}

impl fmt::Display for FunctionDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fn {}() {} {}", self.name, self.return_type, self.body)
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        for stmt in &self.statements {
            write!(f, "{stmt}")?;
        }
        writeln!(f, "}}")
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Assignment(assign) => write!(f, "{assign}"),
            Statement::Return(ret) => write!(f, "{ret}"),
        }
    }
}

impl fmt::Display for AssignmentStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} = {};", self.target, self.value)
    }
}

impl fmt::Display for ReturnStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "return {};", self.value)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(ident) => write!(f, "{ident}"),
            Expression::Int(int) => write!(f, "{int}"),
            Expression::Call(call) => write!(f, "{call}"),
            Expression::ParseError => f.write_str("<error>"),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for IntLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}

impl fmt::Display for CallExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}()", self.function)
    }
}
