//! Program, function, and block checking.

use slate_ast::{Block, CodeItem, Declaration, FunctionDecl, Program, Statement};
use slate_core::{DataType, Error, Result, SemanticError};

use crate::checker::core::{Analyzer, FunctionContext};
use crate::symbol_table::Symbol;

impl Analyzer {
    /// Checks a complete program.
    ///
    /// Two passes over the top-level declarations. The first hoists every
    /// function signature into the global scope, so functions may call one
    /// another regardless of source order. The second checks each
    /// declaration in source order. Variables are never hoisted: a
    /// top-level variable referenced before its declaration is undeclared.
    ///
    /// # Errors
    /// Returns the first rule violation found.
    pub fn check_program(&mut self, program: &Program) -> Result<()> {
        for declaration in &program.declarations {
            if let Declaration::Function(func) = declaration {
                let param_types = func.params.iter().map(|p| p.param_type).collect();
                self.declare(
                    Symbol::function(func.name.clone(), param_types, func.return_type),
                    func.span,
                )?;
            }
        }

        for declaration in &program.declarations {
            match declaration {
                Declaration::Function(func) => self.check_function(func)?,
                Declaration::Variable(var) => self.check_var_decl(var)?,
            }
        }

        Ok(())
    }

    /// Checks a function declaration.
    ///
    /// The body runs in a fresh scope that also holds the parameters; the
    /// body block does not open a second scope of its own. Nested
    /// functions reach enclosing bindings through the scope chain. A
    /// non-`Unit` function must return on every syntactic path.
    pub(crate) fn check_function(&mut self, func: &FunctionDecl) -> Result<()> {
        let context = FunctionContext {
            name: func.name.clone(),
            return_type: func.return_type,
        };
        self.function_scope(context, |this| {
            for param in &func.params {
                this.declare(
                    Symbol::variable(param.name.clone(), param.param_type, false),
                    param.span,
                )?;
            }

            this.check_block(&func.body, false)?;

            if func.return_type != DataType::Unit && !all_paths_return(&func.body) {
                return Err(Error::semantic(
                    SemanticError::MissingReturn {
                        function: func.name.clone(),
                    },
                    func.span,
                ));
            }
            Ok(())
        })
    }

    /// Checks a block of code items in order.
    ///
    /// Once a terminator has been analyzed, every further item in the same
    /// block is unreachable. Control-flow bodies get a child scope of
    /// their own; a function body reuses the function scope.
    pub(crate) fn check_block(&mut self, block: &Block, new_scope: bool) -> Result<()> {
        if new_scope {
            self.scoped(|this| this.check_items(&block.items))
        } else {
            self.check_items(&block.items)
        }
    }

    fn check_items(&mut self, items: &[CodeItem]) -> Result<()> {
        for item in items {
            self.ensure_reachable(item.span())?;
            match item {
                CodeItem::Declaration(Declaration::Function(func)) => self.check_function(func)?,
                CodeItem::Declaration(Declaration::Variable(var)) => self.check_var_decl(var)?,
                CodeItem::Statement(statement) => self.check_statement(statement)?,
            }
        }
        Ok(())
    }
}

/// Syntactic definite-return analysis.
///
/// A block returns if any of its items does. A `return` returns; an `if`
/// returns only when both branches exist and both return, recursively.
/// Nothing else returns. In particular a `while` never counts, whatever
/// its condition: `while true { return 1 }` does not satisfy a non-`Unit`
/// function.
fn all_paths_return(block: &Block) -> bool {
    block.items.iter().any(item_returns)
}

fn item_returns(item: &CodeItem) -> bool {
    match item {
        CodeItem::Statement(Statement::Return { .. }) => true,
        CodeItem::Statement(Statement::If(if_stmt)) => if_stmt
            .else_block
            .as_ref()
            .is_some_and(|else_block| {
                all_paths_return(&if_stmt.then_block) && all_paths_return(else_block)
            }),
        _ => false,
    }
}
