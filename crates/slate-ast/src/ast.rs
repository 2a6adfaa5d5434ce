//! Node definitions for the Slate AST.

use std::fmt;

use slate_core::{DataType, Span};

use crate::control_flow::{If, While};

/// A complete Slate program (compilation unit).
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub declarations: Vec<Declaration>,
}

/// Declarations, at the top level or inside a block.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Function(FunctionDecl),
    Variable(VarDecl),
}

/// Function declaration.
///
/// Functions may be declared inside other functions; they capture
/// enclosing bindings lexically through the scope chain.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub name: String,
    pub params: Vec<Parameter>,
    pub return_type: DataType,
    pub body: Block,
    pub span: Span,
}

/// Function parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub param_type: DataType,
    pub span: Span,
}

/// Variable or constant declaration: `var|const name: type [:= expr]`.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub is_constant: bool,
    pub name: String,
    pub declared_type: DataType,
    pub initializer: Option<Expression>,
    pub span: Span,
}

/// A braced sequence of code items.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub items: Vec<CodeItem>,
    pub span: Span,
}

/// Anything that can appear inside a block: a nested declaration
/// (functions included) or a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeItem {
    Declaration(Declaration),
    Statement(Statement),
}

/// Statements in Slate.
///
/// Each control-flow form has exactly one variant here; earlier tree
/// schemas that carried a second, parser-facing encoding per form were
/// collapsed into this one.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Assignment: `name := expr`
    Assignment {
        name: String,
        value: Expression,
        span: Span,
    },

    /// Print: `print expr`
    Print { expression: Expression, span: Span },

    /// Return: `return [expr]`
    Return {
        value: Option<Expression>,
        span: Span,
    },

    /// Conditional: `if cond { ... } [else { ... }]`
    If(Box<If>),

    /// Pre-tested loop: `while cond { ... }`
    While(Box<While>),
}

impl Declaration {
    /// Returns the span of this declaration.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Function(func) => func.span,
            Self::Variable(var) => var.span,
        }
    }
}

impl CodeItem {
    /// Returns the span of this code item.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Declaration(declaration) => declaration.span(),
            Self::Statement(statement) => statement.span(),
        }
    }
}

impl Statement {
    /// Returns the span of this statement.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Assignment { span, .. } | Self::Print { span, .. } | Self::Return { span, .. } => {
                *span
            }
            Self::If(if_stmt) => if_stmt.span,
            Self::While(while_stmt) => while_stmt.span,
        }
    }
}

/// Expressions in Slate.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Integer literal
    Integer { value: i64, span: Span },

    /// Float literal
    Float { value: f64, span: Span },

    /// Boolean literal
    Boolean { value: bool, span: Span },

    /// Variable reference
    Variable { name: String, span: Span },

    /// Binary operation: `left op right`
    Binary {
        left: Box<Expression>,
        operator: BinaryOperator,
        right: Box<Expression>,
        span: Span,
    },

    /// Unary operation: `op expr`
    Unary {
        operator: UnaryOperator,
        operand: Box<Expression>,
        span: Span,
    },

    /// Function call: `name(args...)`
    Call {
        callee: String,
        arguments: Vec<Expression>,
        span: Span,
    },
}

impl Expression {
    /// Returns the span of this expression.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Integer { span, .. }
            | Self::Float { span, .. }
            | Self::Boolean { span, .. }
            | Self::Variable { span, .. }
            | Self::Binary { span, .. }
            | Self::Unary { span, .. }
            | Self::Call { span, .. } => *span,
        }
    }
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    // Arithmetic
    Add,
    Subtract,
    Multiply,
    Divide,

    // Ordering
    Less,
    LessEqual,
    Greater,
    GreaterEqual,

    // Equality
    Equal,
    NotEqual,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spelling = match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        };
        f.write_str(spelling)
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Negate,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => f.write_str("-"),
        }
    }
}
