//! Shared AST builders for the semantic analysis tests.
//!
//! The parser is a separate component, so tests construct trees directly;
//! these helpers keep that construction readable. Spans are synthetic;
//! no analysis rule depends on them.

#![allow(dead_code)]

use slate_ast::{
    BinaryOperator, Block, CodeItem, Declaration, Expression, FunctionDecl, If, Parameter, Program,
    Statement, UnaryOperator, VarDecl, While,
};
use slate_core::{DataType, Error, SemanticError, Span};

pub fn span() -> Span {
    Span::from_range(0, 0)
}

// --- expressions ---

pub fn int(value: i64) -> Expression {
    Expression::Integer { value, span: span() }
}

pub fn float(value: f64) -> Expression {
    Expression::Float { value, span: span() }
}

pub fn boolean(value: bool) -> Expression {
    Expression::Boolean { value, span: span() }
}

pub fn var(name: &str) -> Expression {
    Expression::Variable {
        name: name.to_string(),
        span: span(),
    }
}

pub fn binary(left: Expression, operator: BinaryOperator, right: Expression) -> Expression {
    Expression::Binary {
        left: Box::new(left),
        operator,
        right: Box::new(right),
        span: span(),
    }
}

pub fn negate(operand: Expression) -> Expression {
    Expression::Unary {
        operator: UnaryOperator::Negate,
        operand: Box::new(operand),
        span: span(),
    }
}

pub fn call(callee: &str, arguments: Vec<Expression>) -> Expression {
    Expression::Call {
        callee: callee.to_string(),
        arguments,
        span: span(),
    }
}

// --- declarations and statements ---

pub fn var_decl(name: &str, declared_type: DataType, initializer: Option<Expression>) -> VarDecl {
    VarDecl {
        is_constant: false,
        name: name.to_string(),
        declared_type,
        initializer,
        span: span(),
    }
}

pub fn const_decl(name: &str, declared_type: DataType, initializer: Expression) -> VarDecl {
    VarDecl {
        is_constant: true,
        name: name.to_string(),
        declared_type,
        initializer: Some(initializer),
        span: span(),
    }
}

pub fn assign(name: &str, value: Expression) -> Statement {
    Statement::Assignment {
        name: name.to_string(),
        value,
        span: span(),
    }
}

pub fn print_stmt(expression: Expression) -> Statement {
    Statement::Print {
        expression,
        span: span(),
    }
}

pub fn ret(value: Option<Expression>) -> Statement {
    Statement::Return {
        value,
        span: span(),
    }
}

pub fn if_stmt(condition: Expression, then_items: Vec<CodeItem>, else_items: Option<Vec<CodeItem>>) -> Statement {
    Statement::If(Box::new(If {
        condition: Box::new(condition),
        then_block: block(then_items),
        else_block: else_items.map(block),
        span: span(),
    }))
}

pub fn while_stmt(condition: Expression, body: Vec<CodeItem>) -> Statement {
    Statement::While(Box::new(While {
        condition: Box::new(condition),
        body: block(body),
        span: span(),
    }))
}

// --- structure ---

pub fn block(items: Vec<CodeItem>) -> Block {
    Block {
        items,
        span: span(),
    }
}

pub fn stmt(statement: Statement) -> CodeItem {
    CodeItem::Statement(statement)
}

pub fn local_var(declaration: VarDecl) -> CodeItem {
    CodeItem::Declaration(Declaration::Variable(declaration))
}

pub fn local_function(declaration: FunctionDecl) -> CodeItem {
    CodeItem::Declaration(Declaration::Function(declaration))
}

pub fn param(name: &str, param_type: DataType) -> Parameter {
    Parameter {
        name: name.to_string(),
        param_type,
        span: span(),
    }
}

pub fn function(
    name: &str,
    params: Vec<Parameter>,
    return_type: DataType,
    body: Vec<CodeItem>,
) -> FunctionDecl {
    FunctionDecl {
        name: name.to_string(),
        params,
        return_type,
        body: block(body),
        span: span(),
    }
}

pub fn program(declarations: Vec<Declaration>) -> Program {
    Program { declarations }
}

pub fn program_of_functions(functions: Vec<FunctionDecl>) -> Program {
    Program {
        declarations: functions.into_iter().map(Declaration::Function).collect(),
    }
}

pub fn program_of_vars(vars: Vec<VarDecl>) -> Program {
    Program {
        declarations: vars.into_iter().map(Declaration::Variable).collect(),
    }
}

// --- running the analyzer ---

/// Asserts that analysis succeeds.
pub fn assert_ok(program: &Program) {
    if let Err(error) = slate_semantic::analyze(program) {
        panic!("expected analysis to succeed, got: {error}");
    }
}

/// Runs the analyzer and unwraps the semantic diagnostic it must produce.
pub fn expect_error(program: &Program) -> SemanticError {
    match slate_semantic::analyze(program) {
        Ok(()) => panic!("expected a semantic error, analysis succeeded"),
        Err(Error::Semantic { kind, .. }) => kind,
        Err(other) => panic!("expected a semantic error, got: {other}"),
    }
}
