//! Source span tracking for diagnostics.

use serde::{Deserialize, Serialize};

/// A point in the source text: line, column, and byte offset.
///
/// Lines and columns are 1-based; the offset counts bytes from the start
/// of the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Location {
    #[must_use]
    pub const fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}

/// A contiguous region of source text, attached to every AST node by the
/// parser and carried into diagnostics by the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: Location,
    pub end: Location,
}

impl Span {
    #[must_use]
    pub const fn new(start: Location, end: Location) -> Self {
        Self { start, end }
    }

    /// Builds a span from byte offsets alone, with line and column left at
    /// zero. Useful when positions come from a source without line
    /// structure, or for tests that build trees by hand.
    #[must_use]
    pub const fn from_range(start: usize, end: usize) -> Self {
        Self {
            start: Location::new(0, 0, start),
            end: Location::new(0, 0, end),
        }
    }
}
