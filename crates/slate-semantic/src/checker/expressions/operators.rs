//! Binary and unary operator typing.

use slate_ast::{BinaryOperator, Expression, UnaryOperator};
use slate_core::{DataType, Error, Result, SemanticError, Span};

use crate::checker::core::Analyzer;

impl Analyzer {
    /// Types a binary operation.
    ///
    /// Three operator families, three rules: arithmetic requires numeric
    /// operands and widens to `Float` when either side is `Float`;
    /// ordering requires numeric operands and yields `Bool`; equality
    /// requires both operands to have exactly one type, with neither
    /// widening nor the tolerated coercions applying there.
    pub(super) fn check_binary_op(
        &mut self,
        left: &Expression,
        operator: BinaryOperator,
        right: &Expression,
        span: Span,
    ) -> Result<DataType> {
        let left_type = self.check_expression(left)?;
        let right_type = self.check_expression(right)?;

        let invalid = || {
            Error::semantic(
                SemanticError::InvalidBinaryOperation {
                    operator: operator.to_string(),
                    left: left_type,
                    right: right_type,
                },
                span,
            )
        };

        match operator {
            BinaryOperator::Add
            | BinaryOperator::Subtract
            | BinaryOperator::Multiply
            | BinaryOperator::Divide => {
                if !left_type.is_numeric() || !right_type.is_numeric() {
                    return Err(invalid());
                }
                if left_type == DataType::Float || right_type == DataType::Float {
                    Ok(DataType::Float)
                } else {
                    Ok(DataType::Int)
                }
            }

            BinaryOperator::Less
            | BinaryOperator::LessEqual
            | BinaryOperator::Greater
            | BinaryOperator::GreaterEqual => {
                if !left_type.is_numeric() || !right_type.is_numeric() {
                    return Err(invalid());
                }
                Ok(DataType::Bool)
            }

            BinaryOperator::Equal | BinaryOperator::NotEqual => {
                if left_type != right_type {
                    return Err(invalid());
                }
                Ok(DataType::Bool)
            }
        }
    }

    /// Types a unary operation. Negation requires a numeric operand and
    /// preserves its type.
    pub(super) fn check_unary_op(
        &mut self,
        operator: UnaryOperator,
        operand: &Expression,
        span: Span,
    ) -> Result<DataType> {
        let operand_type = self.check_expression(operand)?;

        match operator {
            UnaryOperator::Negate => {
                if !operand_type.is_numeric() {
                    return Err(Error::semantic(
                        SemanticError::InvalidUnaryOperation {
                            operator: operator.to_string(),
                            actual: operand_type,
                        },
                        span,
                    ));
                }
                Ok(operand_type)
            }
        }
    }
}
