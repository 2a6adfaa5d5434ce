//! Abstract syntax tree for Slate programs.
//!
//! The upstream parser produces this tree; the semantic analyzer consumes
//! it read-only. Nodes own their children outright (the tree is a pure
//! tree, never a DAG), so `Box` appears only where a variant needs
//! indirection, never for sharing.

pub mod ast;
pub mod control_flow;

pub use ast::{
    BinaryOperator, Block, CodeItem, Declaration, Expression, FunctionDecl, Parameter, Program,
    Statement, UnaryOperator, VarDecl,
};
pub use control_flow::{If, While};
