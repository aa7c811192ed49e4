pub mod ast;
pub mod calculator;
pub mod error;

pub use calculator::{Calculator, HistoryEntry};
pub use error::CalcError;

use ast::ExpressionParser;

/// Parses and evaluates a single arithmetic expression without any calculator
/// state (no history, no memory).
pub fn evaluate_expression(expression: &str) -> Result<f64, CalcError> {
    let ast = ExpressionParser::parse_expression(expression)?;
    let result = ast::evaluate(&ast)?;
    if !result.is_finite() {
        return Err(CalcError::NonFiniteResult);
    }
    Ok(result)
}
