//! Core types and utilities shared by the Slate compiler front end.
//!
//! This crate provides the scalar type lattice, source span tracking, and
//! the error/diagnostic types used by every other stage.

pub mod error;
pub mod span;
pub mod types;

pub use error::{Error, Result, SemanticError};
pub use span::{Location, Span};
pub use types::DataType;
