//! Symbol table for tracking variables, constants, and functions during
//! semantic analysis.

use std::collections::HashMap;

use slate_core::DataType;

/// What a name is bound to.
///
/// Constants are `Variable` symbols with the `is_constant` flag set;
/// `Function` is disjoint from both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Variable,
    Function,
}

/// A named entity recorded in a scope. Immutable once inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    /// The name of the symbol
    pub name: String,
    /// Whether the name is a binding or a function
    pub kind: SymbolKind,
    /// Declared type of a variable or constant; `Unit` for functions
    pub symbol_type: DataType,
    /// Whether assignment to the symbol is forbidden
    pub is_constant: bool,
    /// Parameter types in declaration order; empty for variables
    pub param_types: Vec<DataType>,
    /// Return type of a function; `Unit` for variables
    pub return_type: DataType,
}

impl Symbol {
    /// Creates a variable or constant symbol.
    #[must_use]
    pub fn variable(name: String, symbol_type: DataType, is_constant: bool) -> Self {
        Self {
            name,
            kind: SymbolKind::Variable,
            symbol_type,
            is_constant,
            param_types: Vec::new(),
            return_type: DataType::Unit,
        }
    }

    /// Creates a function symbol from its signature.
    #[must_use]
    pub fn function(name: String, param_types: Vec<DataType>, return_type: DataType) -> Self {
        Self {
            name,
            kind: SymbolKind::Function,
            symbol_type: DataType::Unit,
            is_constant: false,
            param_types,
            return_type,
        }
    }
}

/// Nested symbol table backing the analyzer's lexical scopes.
///
/// Scopes form an explicit stack whose lifetime matches lexical regions:
/// one is pushed on entering a function or control-flow body and popped on
/// exit. Lookup walks the stack from the innermost scope outward and the
/// first hit wins; insertion touches only the innermost scope and never
/// overwrites.
#[derive(Debug)]
pub struct SymbolTable {
    scopes: Vec<HashMap<String, Symbol>>,
}

impl SymbolTable {
    /// Creates a table holding only the global scope.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scopes: vec![HashMap::new()],
        }
    }

    /// Pushes a fresh innermost scope.
    pub fn enter_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    /// Pops the innermost scope.
    ///
    /// # Panics
    /// Panics when asked to pop the global scope.
    pub fn exit_scope(&mut self) {
        assert!(self.scopes.len() > 1, "cannot exit the global scope");
        self.scopes.pop();
    }

    /// Inserts a symbol into the innermost scope, if the name is not
    /// already bound there. On a duplicate the existing binding is left
    /// intact and the rejected symbol is handed back.
    ///
    /// # Errors
    /// Returns the rejected symbol when its name is already bound in the
    /// innermost scope.
    pub fn insert(&mut self, symbol: Symbol) -> Result<(), Symbol> {
        let scope = self
            .scopes
            .last_mut()
            .expect("symbol table always holds the global scope");
        if scope.contains_key(&symbol.name) {
            return Err(symbol);
        }
        scope.insert(symbol.name.clone(), symbol);
        Ok(())
    }

    /// Looks up a name in the innermost scope only.
    #[must_use]
    pub fn lookup_local(&self, name: &str) -> Option<&Symbol> {
        self.scopes.last().and_then(|scope| scope.get(name))
    }

    /// Looks up a name from the innermost scope outward to the global
    /// scope.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
