//! Error types for integer and rational arithmetic.

use thiserror::Error;

/// Errors that can occur during exact arithmetic.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// Division or remainder by zero, including a zero denominator when
    /// constructing a rational.
    #[error("division by zero")]
    DivisionByZero,

    /// A decimal literal that does not match `[+-]?[0-9]+`.
    #[error("malformed decimal literal")]
    MalformedLiteral,

    /// A narrowing conversion whose source magnitude does not fit in the
    /// target type.
    #[error("value out of range for the target type")]
    Overflow,
}
