//! Shared checks and the scoped save/restore combinators.

use slate_ast::Expression;
use slate_core::{DataType, Error, Result, SemanticError, Span};

use crate::checker::core::{Analyzer, FunctionContext};
use crate::symbol_table::{Symbol, SymbolKind};

impl Analyzer {
    /// Runs `body` inside a fresh child scope. The scope is popped on
    /// every exit path, the diagnostic path included.
    pub(crate) fn scoped<T>(&mut self, body: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        self.symbols.enter_scope();
        let result = body(self);
        self.symbols.exit_scope();
        result
    }

    /// Runs `body` inside a fresh scope with `context` installed as the
    /// enclosing function and the reachability flag cleared. Scope,
    /// context, and flag are all restored on every exit path.
    pub(crate) fn function_scope<T>(
        &mut self,
        context: FunctionContext,
        body: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        let saved_function = self.current_function.replace(context);
        let saved_unreachable = std::mem::replace(&mut self.unreachable, false);
        let result = self.scoped(body);
        self.current_function = saved_function;
        self.unreachable = saved_unreachable;
        result
    }

    /// Raises `UnreachableCode` when control cannot reach the current
    /// position.
    pub(crate) fn ensure_reachable(&self, span: Span) -> Result<()> {
        if self.unreachable {
            return Err(Error::semantic(SemanticError::UnreachableCode, span));
        }
        Ok(())
    }

    /// Maps an existing binding for `name` in the innermost scope to the
    /// matching redeclaration diagnostic: clashing with a function reports
    /// the function kind, clashing with anything else the identifier kind.
    pub(crate) fn redeclaration_of(&self, name: &str) -> Option<SemanticError> {
        self.symbols.lookup_local(name).map(|existing| {
            if existing.kind == SymbolKind::Function {
                SemanticError::RedeclaredFunction {
                    name: name.to_string(),
                }
            } else {
                SemanticError::RedeclaredIdentifier {
                    name: name.to_string(),
                }
            }
        })
    }

    /// Inserts `symbol` into the innermost scope, raising the appropriate
    /// redeclaration diagnostic on a clash.
    pub(crate) fn declare(&mut self, symbol: Symbol, span: Span) -> Result<()> {
        if let Some(kind) = self.redeclaration_of(&symbol.name) {
            return Err(Error::semantic(kind, span));
        }
        self.symbols.insert(symbol).map_err(|rejected| {
            Error::Internal(format!("scope already holds '{}'", rejected.name))
        })
    }

    /// Validates that a condition expression has type `Bool` exactly; the
    /// tolerated coercions do not apply to conditions.
    pub(crate) fn check_bool_condition(&mut self, condition: &Expression) -> Result<()> {
        let condition_type = self.check_expression(condition)?;
        if condition_type != DataType::Bool {
            return Err(Error::semantic(
                SemanticError::ConditionNotBool {
                    actual: condition_type,
                },
                condition.span(),
            ));
        }
        Ok(())
    }
}
