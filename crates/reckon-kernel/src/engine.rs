//! Arithmetic engine.
//!
//! Every operation takes two operands and yields an [`Outcome`] rounded to
//! [`MAX_DECIMAL_PLACES`]. Operations that can leave their domain report it
//! through [`DomainError`] instead of returning a sentinel value.
//!
//! ```
//! use reckon_kernel::Operator;
//!
//! let op: Operator = "log".parse().unwrap();
//! assert_eq!(op.apply(2.0, 8.0), Ok(3.0));
//! ```

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{DomainError, UnknownOperator};

/// Number of decimal places every result is rounded to.
pub const MAX_DECIMAL_PLACES: usize = 3;

/// Result of a single engine operation.
pub type Outcome = Result<f64, DomainError>;

/// Signature shared by every engine operation.
pub type Operation = fn(f64, f64) -> Outcome;

/// The operators a user can pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exponentiate,
    Logarithm,
}

/// Operator dispatch table, in menu order.
///
/// Indexed by the operator's discriminant, so entry `i` must hold the
/// operator whose discriminant is `i`.
pub static OPERATIONS: [(Operator, Operation); 6] = [
    (Operator::Add, add),
    (Operator::Subtract, subtract),
    (Operator::Multiply, multiply),
    (Operator::Divide, divide),
    (Operator::Exponentiate, exponentiate),
    (Operator::Logarithm, logarithm),
];

impl Operator {
    /// All operators, in menu order.
    pub const ALL: [Operator; 6] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
        Operator::Exponentiate,
        Operator::Logarithm,
    ];

    /// The token a user types to select this operator.
    pub fn token(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Exponentiate => "^",
            Operator::Logarithm => "log",
        }
    }

    /// Look up an operator by its exact token.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.token() == token)
    }

    /// The engine function behind this operator.
    pub fn operation(self) -> Operation {
        OPERATIONS[self as usize].1
    }

    /// Apply this operator to a pair of operands.
    pub fn apply(self, a: f64, b: f64) -> Outcome {
        debug!(operator = self.token(), a, b, "dispatching");
        (self.operation())(a, b)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| UnknownOperator(s.to_string()))
    }
}

/// Round `value` to `places` decimal places.
///
/// Goes through decimal formatting so the result is correctly rounded
/// rather than subject to the error of scaling by a power of ten.
/// NaN and the infinities pass through unchanged.
pub fn round_to(value: f64, places: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.places$}").parse().unwrap_or(value)
}

fn round(value: f64) -> f64 {
    round_to(value, MAX_DECIMAL_PLACES)
}

pub fn add(a: f64, b: f64) -> Outcome {
    Ok(round(a + b))
}

pub fn subtract(a: f64, b: f64) -> Outcome {
    Ok(round(a - b))
}

pub fn multiply(a: f64, b: f64) -> Outcome {
    Ok(round(a * b))
}

/// Divide `a` by `b`. A zero divisor (of either sign) is a domain error.
pub fn divide(a: f64, b: f64) -> Outcome {
    if b == 0.0 {
        return Err(DomainError::DivisionByZero);
    }
    Ok(round(a / b))
}

/// Raise `a` to the power `b`. Non-finite results are returned as-is.
pub fn exponentiate(a: f64, b: f64) -> Outcome {
    Ok(round(a.powf(b)))
}

/// Logarithm of `num` in base `base`.
///
/// Checks run in a fixed order: `num == 1` is always 0, then the argument
/// must be positive, then the base must be positive and not 1.
pub fn logarithm(base: f64, num: f64) -> Outcome {
    if num == 1.0 {
        return Ok(0.0);
    }
    if num <= 0.0 {
        return Err(DomainError::NonPositiveArgument);
    }
    if base <= 0.0 {
        return Err(DomainError::NonPositiveBase);
    }
    if base == 1.0 {
        return Err(DomainError::UnitBase);
    }
    Ok(round(num.log(base)))
}
