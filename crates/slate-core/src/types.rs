//! The Slate type lattice and its implicit-conversion rules.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The scalar type of a Slate expression or binding.
///
/// `Unit` is the "no value" sentinel: the return type of a procedure that
/// yields nothing. No expression the parser can produce has type `Unit`
/// except a call to such a procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    Int,
    Float,
    Bool,
    Unit,
}

impl DataType {
    /// Returns true for the arithmetic types (`Int`, `Float`).
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Int | Self::Float)
    }

    /// Returns true for types with a defined comparison (`Int`, `Float`,
    /// `Bool`). Which operators actually accept `Bool` is decided by the
    /// operator rules, not here.
    #[must_use]
    pub const fn is_comparable(self) -> bool {
        matches!(self, Self::Int | Self::Float | Self::Bool)
    }

    /// Assignment compatibility: whether a value of type `source` may be
    /// stored where `self` is expected.
    ///
    /// The relation is reflexive, admits `Int`-to-`Float` widening, and
    /// tolerates the `Bool`/`Int` coercions in both directions. `Float`
    /// narrows into nothing: `Int` and `Bool` both reject it.
    ///
    /// This single relation gates variable initializers, assignment
    /// right-hand sides, and call arguments.
    #[must_use]
    pub const fn accepts(self, source: DataType) -> bool {
        matches!(
            (self, source),
            (Self::Int, Self::Int)
                | (Self::Float, Self::Float)
                | (Self::Bool, Self::Bool)
                | (Self::Unit, Self::Unit)
                | (Self::Float, Self::Int)
                | (Self::Bool, Self::Int)
                | (Self::Int, Self::Bool)
        )
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Int => "Int",
            Self::Float => "Float",
            Self::Bool => "Bool",
            Self::Unit => "Unit",
        };
        f.write_str(name)
    }
}
