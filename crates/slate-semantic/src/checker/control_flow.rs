//! Control-flow statement checking and reachability tracking.

use slate_ast::{If, While};
use slate_core::Result;

use crate::checker::core::Analyzer;

impl Analyzer {
    /// Checks an if statement.
    ///
    /// Each branch runs in its own child scope, starting from the
    /// pre-statement reachability. Code after the if is dead only when
    /// both branches end unreachable; without an else the fall-through
    /// path keeps everything after the if live.
    pub(crate) fn check_if(&mut self, if_stmt: &If) -> Result<()> {
        self.check_bool_condition(&if_stmt.condition)?;

        let before = self.unreachable;

        self.check_block(&if_stmt.then_block, true)?;
        let then_unreachable = self.unreachable;
        self.unreachable = before;

        match &if_stmt.else_block {
            Some(else_block) => {
                self.check_block(else_block, true)?;
                let else_unreachable = self.unreachable;
                self.unreachable = (then_unreachable && else_unreachable) || before;
            }
            None => self.unreachable = before,
        }

        Ok(())
    }

    /// Checks a while statement.
    ///
    /// The body may run zero times, so whatever it does to reachability is
    /// discarded: code after the loop is exactly as reachable as the loop
    /// itself.
    pub(crate) fn check_while(&mut self, while_stmt: &While) -> Result<()> {
        self.check_bool_condition(&while_stmt.condition)?;

        let before = self.unreachable;
        self.check_block(&while_stmt.body, true)?;
        self.unreachable = before;

        Ok(())
    }
}
