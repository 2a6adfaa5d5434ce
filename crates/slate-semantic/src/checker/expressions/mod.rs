//! Expression typing.
//!
//! Expressions are typed bottom-up: every rule returns the resulting type
//! or raises a diagnostic. Split into focused submodules:
//! - `operators`: binary and unary operator rules
//! - `calls`: function call checking

mod calls;
mod operators;

use slate_ast::Expression;
use slate_core::{DataType, Error, Result, SemanticError};

use crate::checker::core::Analyzer;
use crate::symbol_table::SymbolKind;

impl Analyzer {
    /// Types an expression.
    ///
    /// This is the single entry point for expression checking; literal and
    /// identifier rules live here, everything else dispatches to a
    /// specialized method.
    pub(crate) fn check_expression(&mut self, expr: &Expression) -> Result<DataType> {
        match expr {
            Expression::Integer { .. } => Ok(DataType::Int),
            Expression::Float { .. } => Ok(DataType::Float),
            Expression::Boolean { .. } => Ok(DataType::Bool),

            Expression::Variable { name, span } => {
                let symbol = self.symbols.lookup(name).ok_or_else(|| {
                    Error::semantic(
                        SemanticError::UndeclaredIdentifier { name: name.clone() },
                        *span,
                    )
                })?;
                if symbol.kind == SymbolKind::Function {
                    return Err(Error::semantic(
                        SemanticError::FunctionUsedAsVariable { name: name.clone() },
                        *span,
                    ));
                }
                Ok(symbol.symbol_type)
            }

            Expression::Binary {
                left,
                operator,
                right,
                span,
            } => self.check_binary_op(left, *operator, right, *span),

            Expression::Unary {
                operator,
                operand,
                span,
            } => self.check_unary_op(*operator, operand, *span),

            Expression::Call {
                callee,
                arguments,
                span,
            } => self.check_call(callee, arguments, *span),
        }
    }
}
