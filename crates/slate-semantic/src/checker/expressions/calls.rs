//! Function call typing.

use slate_ast::Expression;
use slate_core::{DataType, Error, Result, SemanticError, Span};

use crate::checker::core::Analyzer;
use crate::symbol_table::SymbolKind;

impl Analyzer {
    /// Types a call expression.
    ///
    /// Resolves the callee, checks its kind and arity, then types the
    /// arguments left to right, gating each with the
    /// assignment-compatibility relation against its parameter. The first
    /// incompatible argument fails the whole call, carrying the expected
    /// parameter list and the argument types computed up to that point.
    /// The call's type is the callee's return type.
    pub(super) fn check_call(
        &mut self,
        callee: &str,
        arguments: &[Expression],
        span: Span,
    ) -> Result<DataType> {
        // Copy the signature out of the symbol; typing the arguments
        // below borrows the analyzer again.
        let (param_types, return_type) = {
            let symbol = self.symbols.lookup(callee).ok_or_else(|| {
                Error::semantic(
                    SemanticError::UndeclaredFunction {
                        name: callee.to_string(),
                    },
                    span,
                )
            })?;
            if symbol.kind != SymbolKind::Function {
                return Err(Error::semantic(
                    SemanticError::NotAFunction {
                        name: callee.to_string(),
                    },
                    span,
                ));
            }
            (symbol.param_types.clone(), symbol.return_type)
        };

        if arguments.len() != param_types.len() {
            return Err(Error::semantic(
                SemanticError::WrongNumberOfArguments {
                    name: callee.to_string(),
                    expected: param_types.len(),
                    actual: arguments.len(),
                },
                span,
            ));
        }

        let mut actual_types = Vec::with_capacity(arguments.len());
        for (index, argument) in arguments.iter().enumerate() {
            let argument_type = self.check_expression(argument)?;
            actual_types.push(argument_type);
            if !param_types[index].accepts(argument_type) {
                return Err(Error::semantic(
                    SemanticError::InvalidSignature {
                        name: callee.to_string(),
                        expected: param_types,
                        actual: actual_types,
                    },
                    span,
                ));
            }
        }

        Ok(return_type)
    }
}
