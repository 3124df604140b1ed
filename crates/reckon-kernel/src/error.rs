//! Error types for the arithmetic engine.
//!
//! The `Display` text of each variant is what the user sees, so keep the
//! wording stable.

use thiserror::Error;

/// An operation whose operands fall outside its mathematical domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Division with a zero divisor.
    #[error("Please do not enter 0 since it is not possible to divide by 0.")]
    DivisionByZero,

    /// Logarithm of zero or a negative number.
    #[error("Cannot take log of a number that is lesser than or equal to 0")]
    NonPositiveArgument,

    /// Logarithm with a zero or negative base.
    #[error("The base cannot be lesser than or equal to 0")]
    NonPositiveBase,

    /// Logarithm with base 1 (of anything but 1).
    #[error("The base cannot be equal to 1")]
    UnitBase,
}

/// A token that names no operator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operator: {0:?}")]
pub struct UnknownOperator(pub String);

/// A continuation answer other than `y`, `n` or `quit`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown choice: {0:?}")]
pub struct UnknownChoice(pub String);
