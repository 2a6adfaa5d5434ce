//! Error types and result aliases for the Slate front end.
//!
//! Semantic diagnostics are structured values: a [`SemanticError`] kind
//! with named context fields, wrapped together with the offending span.
//! Rendering them for a user is the caller's concern; the `#[error]`
//! message on each variant is the default text a renderer may use.

use miette::{Diagnostic, SourceSpan};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::DataType;
use crate::Span;

/// Top-level error type for the Slate front end.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// A broken invariant inside the compiler itself. Never caused by the
    /// user's program; disjoint from every semantic diagnostic.
    #[error("internal error: {0}")]
    #[diagnostic(code(slate::internal))]
    Internal(String),

    /// A rule violation in the analyzed program.
    #[error("{kind}")]
    #[diagnostic(code(slate::semantic))]
    Semantic {
        kind: SemanticError,
        #[label("here")]
        span: Span,
    },
}

impl Error {
    /// Wraps a semantic diagnostic with the span it points at.
    #[must_use]
    pub fn semantic(kind: SemanticError, span: Span) -> Self {
        Self::Semantic { kind, span }
    }
}

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        SourceSpan::from(span.start.offset..span.end.offset)
    }
}

/// Result type alias using the Slate [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// The closed set of diagnostics the semantic analyzer can raise.
///
/// One variant per rule violation, each carrying exactly the context a
/// renderer needs. Operators appear as their source spelling; type lists
/// are in declaration order.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SemanticError {
    #[error("function '{name}' is already declared")]
    RedeclaredFunction { name: String },

    #[error("identifier '{name}' is already declared in this scope")]
    RedeclaredIdentifier { name: String },

    #[error("undeclared identifier '{name}'")]
    UndeclaredIdentifier { name: String },

    #[error("undeclared function '{name}'")]
    UndeclaredFunction { name: String },

    #[error("function '{name}' cannot be used as a variable")]
    FunctionUsedAsVariable { name: String },

    #[error("'{name}' is not a function")]
    NotAFunction { name: String },

    #[error("variable '{name}' is declared as {declared} but initialized with {actual}")]
    VarDeclTypeMismatch {
        name: String,
        declared: DataType,
        actual: DataType,
    },

    #[error("cannot assign {actual} to '{name}' of type {declared}")]
    AssignmentTypeMismatch {
        name: String,
        declared: DataType,
        actual: DataType,
    },

    #[error("cannot assign to constant '{name}'")]
    AssignmentToConstant { name: String },

    #[error("function '{name}' expects {expected} arguments, found {actual}")]
    WrongNumberOfArguments {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error(
        "invalid argument types for '{name}': expected ({}), found ({})",
        type_list(.expected),
        type_list(.actual)
    )]
    InvalidSignature {
        name: String,
        expected: Vec<DataType>,
        actual: Vec<DataType>,
    },

    #[error("invalid operands to '{operator}': {left} and {right}")]
    InvalidBinaryOperation {
        operator: String,
        left: DataType,
        right: DataType,
    },

    #[error("invalid operand to unary '{operator}': {actual}")]
    InvalidUnaryOperation { operator: String, actual: DataType },

    #[error("condition must be Bool, found {actual}")]
    ConditionNotBool { actual: DataType },

    #[error("function '{function}' returns {expected}, found {actual}")]
    ReturnTypeMismatch {
        function: String,
        expected: DataType,
        actual: DataType,
    },

    #[error("return outside of a function")]
    ReturnOutsideFunction,

    #[error("function '{function}' does not return on every path")]
    MissingReturn { function: String },

    #[error("unreachable code")]
    UnreachableCode,
}

fn type_list(types: &[DataType]) -> String {
    types
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
