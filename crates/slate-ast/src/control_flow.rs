//! Control-flow AST nodes for Slate.

use slate_core::Span;

use crate::ast::{Block, Expression};

/// Conditional statement with an optional else block.
#[derive(Debug, Clone, PartialEq)]
pub struct If {
    /// The condition; must have type `Bool` exactly.
    pub condition: Box<Expression>,
    /// Executed when the condition holds.
    pub then_block: Block,
    /// Executed otherwise, when present.
    pub else_block: Option<Block>,
    /// Source span
    pub span: Span,
}

/// Pre-tested loop: the condition is evaluated before each iteration, so
/// the body may run zero times.
#[derive(Debug, Clone, PartialEq)]
pub struct While {
    /// The condition; must have type `Bool` exactly.
    pub condition: Box<Expression>,
    /// Loop body
    pub body: Block,
    /// Source span
    pub span: Span,
}
