use crate::ast::{evaluate, ExpressionParser, Operator};
use crate::error::CalcError;
use log::debug;
use std::fmt;

/// Immutable record of one completed operation.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    operation: String,
    result: f64,
}

impl HistoryEntry {
    pub fn operation(&self) -> &str {
        &self.operation
    }

    pub fn result(&self) -> f64 {
        self.result
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.operation, self.result)
    }
}

/// A calculator session: arithmetic, a single-slot memory register and an
/// append-only history of successful operations.
///
/// Every operation runs to completion before returning; a failed operation
/// leaves both memory and history untouched.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    memory: f64,
    history: Vec<HistoryEntry>,
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            memory: 0.0,
            history: Vec::new(),
        }
    }

    pub fn add(&mut self, a: f64, b: f64) -> Result<f64, CalcError> {
        self.binary_operation(a, b, Operator::Add)
    }

    pub fn subtract(&mut self, a: f64, b: f64) -> Result<f64, CalcError> {
        self.binary_operation(a, b, Operator::Subtract)
    }

    pub fn multiply(&mut self, a: f64, b: f64) -> Result<f64, CalcError> {
        self.binary_operation(a, b, Operator::Multiply)
    }

    /// Fails with `CalcError::DivisionByZero` when `b` is zero; the result is
    /// never `inf` or `NaN`.
    pub fn divide(&mut self, a: f64, b: f64) -> Result<f64, CalcError> {
        self.binary_operation(a, b, Operator::Divide)
    }

    pub fn power(&mut self, base: f64, exp: f64) -> Result<f64, CalcError> {
        check_finite(base)?;
        check_finite(exp)?;
        let result = base.powf(exp);
        if !result.is_finite() {
            return Err(CalcError::NonFiniteResult);
        }
        self.record(format!("{}^{}", base, exp), result);
        Ok(result)
    }

    /// Fails with `CalcError::NegativeSqrt` for negative input.
    pub fn sqrt(&mut self, x: f64) -> Result<f64, CalcError> {
        check_finite(x)?;
        if x < 0.0 {
            return Err(CalcError::NegativeSqrt(x));
        }
        let result = x.sqrt();
        self.record(format!("√{}", x), result);
        Ok(result)
    }

    /// `pct` percent of `base`.
    pub fn percentage(&mut self, base: f64, pct: f64) -> Result<f64, CalcError> {
        check_finite(base)?;
        check_finite(pct)?;
        let result = base * pct / 100.0;
        if !result.is_finite() {
            return Err(CalcError::NonFiniteResult);
        }
        self.record(format!("{}% of {}", pct, base), result);
        Ok(result)
    }

    pub fn memory_store(&mut self, value: f64) {
        self.memory = value;
    }

    pub fn memory_recall(&self) -> f64 {
        self.memory
    }

    pub fn memory_clear(&mut self) {
        self.memory = 0.0;
    }

    /// Parses and evaluates an infix arithmetic expression, recording the raw
    /// expression and its result in history on success.
    pub fn evaluate(&mut self, expression: &str) -> Result<f64, CalcError> {
        let ast = ExpressionParser::parse_expression(expression)?;
        let result = evaluate(&ast)?;
        if !result.is_finite() {
            return Err(CalcError::NonFiniteResult);
        }
        self.record(expression.trim().to_string(), result);
        Ok(result)
    }

    /// Successful operations in insertion order.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    fn binary_operation(&mut self, a: f64, b: f64, operator: Operator) -> Result<f64, CalcError> {
        check_finite(a)?;
        check_finite(b)?;
        let result = operator.apply(a, b)?;
        if !result.is_finite() {
            return Err(CalcError::NonFiniteResult);
        }
        self.record(format!("{} {} {}", a, operator.symbol(), b), result);
        Ok(result)
    }

    // Called only once the numeric result exists, so failures never append.
    fn record(&mut self, operation: String, result: f64) {
        debug!("recording history entry: {} = {}", operation, result);
        self.history.push(HistoryEntry { operation, result });
    }
}

fn check_finite(value: f64) -> Result<(), CalcError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CalcError::NonFiniteOperand(value))
    }
}
