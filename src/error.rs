use thiserror::Error;

/// Every failure the calculator can report. All variants are synchronous and
/// leave calculator state untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("square root of negative number: {0}")]
    NegativeSqrt(f64),

    #[error("operand is not a finite number: {0}")]
    NonFiniteOperand(f64),

    #[error("operation produced a non-finite result")]
    NonFiniteResult,

    #[error("syntax error: {0}")]
    Syntax(String),
}
