//! Statement and declaration checking.

use slate_ast::{Expression, Statement, VarDecl};
use slate_core::{DataType, Error, Result, SemanticError, Span};

use crate::checker::core::Analyzer;
use crate::symbol_table::{Symbol, SymbolKind};

impl Analyzer {
    /// Checks a statement.
    pub(crate) fn check_statement(&mut self, statement: &Statement) -> Result<()> {
        match statement {
            Statement::Assignment { name, value, span } => {
                self.check_assignment(name, value, *span)
            }
            Statement::Print { expression, .. } => self.check_print(expression),
            Statement::Return { value, span } => self.check_return(value.as_ref(), *span),
            Statement::If(if_stmt) => self.check_if(if_stmt),
            Statement::While(while_stmt) => self.check_while(while_stmt),
        }
    }

    /// Checks a variable or constant declaration.
    ///
    /// Redeclaration is detected before the initializer is typed, and the
    /// name is inserted only after: an initializer cannot refer to the
    /// binding being declared.
    pub(crate) fn check_var_decl(&mut self, var: &VarDecl) -> Result<()> {
        if let Some(kind) = self.redeclaration_of(&var.name) {
            return Err(Error::semantic(kind, var.span));
        }

        if let Some(initializer) = &var.initializer {
            let init_type = self.check_expression(initializer)?;
            if !var.declared_type.accepts(init_type) {
                return Err(Error::semantic(
                    SemanticError::VarDeclTypeMismatch {
                        name: var.name.clone(),
                        declared: var.declared_type,
                        actual: init_type,
                    },
                    var.span,
                ));
            }
        }

        self.declare(
            Symbol::variable(var.name.clone(), var.declared_type, var.is_constant),
            var.span,
        )
    }

    /// Checks an assignment statement.
    ///
    /// The kind check comes before the constness check: assigning to a
    /// function name is a function-used-as-variable error even though the
    /// symbol is also not assignable.
    fn check_assignment(&mut self, name: &str, value: &Expression, span: Span) -> Result<()> {
        // Copy what the rule needs out of the symbol; the RHS walk below
        // borrows the analyzer again.
        let (declared, is_constant) = {
            let symbol = self.symbols.lookup(name).ok_or_else(|| {
                Error::semantic(
                    SemanticError::UndeclaredIdentifier {
                        name: name.to_string(),
                    },
                    span,
                )
            })?;
            if symbol.kind == SymbolKind::Function {
                return Err(Error::semantic(
                    SemanticError::FunctionUsedAsVariable {
                        name: name.to_string(),
                    },
                    span,
                ));
            }
            (symbol.symbol_type, symbol.is_constant)
        };

        if is_constant {
            return Err(Error::semantic(
                SemanticError::AssignmentToConstant {
                    name: name.to_string(),
                },
                span,
            ));
        }

        let value_type = self.check_expression(value)?;
        if !declared.accepts(value_type) {
            return Err(Error::semantic(
                SemanticError::AssignmentTypeMismatch {
                    name: name.to_string(),
                    declared,
                    actual: value_type,
                },
                span,
            ));
        }

        Ok(())
    }

    /// Checks a print statement. Any scalar expression may be printed.
    fn check_print(&mut self, expression: &Expression) -> Result<()> {
        self.check_expression(expression)?;
        Ok(())
    }

    /// Checks a return statement.
    ///
    /// An empty `return` carries `Unit`, which only a `Unit` function
    /// accepts; a returned value must be assignment-compatible with the
    /// enclosing return type. Everything after a `return` in the same
    /// block is dead.
    fn check_return(&mut self, value: Option<&Expression>, span: Span) -> Result<()> {
        let (function, expected) = match &self.current_function {
            Some(context) => (context.name.clone(), context.return_type),
            None => return Err(Error::semantic(SemanticError::ReturnOutsideFunction, span)),
        };

        let actual = match value {
            Some(expr) => self.check_expression(expr)?,
            None => DataType::Unit,
        };

        if !expected.accepts(actual) {
            return Err(Error::semantic(
                SemanticError::ReturnTypeMismatch {
                    function,
                    expected,
                    actual,
                },
                span,
            ));
        }

        self.unreachable = true;
        Ok(())
    }
}
