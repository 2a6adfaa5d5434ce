//! Core analyzer state.

use slate_core::DataType;

use crate::symbol_table::SymbolTable;

/// The enclosing function's identity, swapped in and out around every
/// function body.
#[derive(Debug, Clone)]
pub(crate) struct FunctionContext {
    pub(crate) name: String,
    pub(crate) return_type: DataType,
}

/// Semantic analyzer for Slate programs.
///
/// Walks the AST once, depth-first and left-to-right, validating the
/// scoping and typing rules and stopping at the first violation. The
/// analyzer owns all mutable analysis state; the tree itself is read-only.
pub struct Analyzer {
    /// Symbol table for variables, constants, and functions
    pub(crate) symbols: SymbolTable,
    /// Enclosing function; `None` at the top level
    pub(crate) current_function: Option<FunctionContext>,
    /// Set once control cannot reach the next item in the current block
    pub(crate) unreachable: bool,
}

impl Analyzer {
    /// Creates an analyzer with an empty global scope.
    #[must_use]
    pub fn new() -> Self {
        Self {
            symbols: SymbolTable::new(),
            current_function: None,
            unreachable: false,
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}
