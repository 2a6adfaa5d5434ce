//! Semantic analysis for Slate programs.
//!
//! Validates an AST produced by the upstream parser against the Slate
//! scoping and typing rules: nested lexical scopes without redeclaration,
//! restricted implicit conversions, a two-pass top-level walk with
//! function hoisting, definite-return analysis, and dead-code detection
//! after terminators. Analysis is fail-fast: the first violation is
//! returned as a structured diagnostic and the walk stops.

mod checker;
mod symbol_table;

pub use checker::Analyzer;
pub use symbol_table::{Symbol, SymbolKind, SymbolTable};

use slate_ast::Program;
use slate_core::Result;

/// Analyzes a program.
///
/// On success the tree has been validated; nothing externally observable
/// changes. Given the same tree, the outcome is the same on every run.
///
/// # Errors
/// Returns the first scoping or typing violation found, as a structured
/// semantic diagnostic.
pub fn analyze(program: &Program) -> Result<()> {
    Analyzer::new().check_program(program)
}
