use crate::ast::AstNode;
use crate::error::CalcError;
use log::debug;

/// Evaluates an AST node to a number.
///
/// Division by zero anywhere in the tree aborts the whole evaluation with
/// `CalcError::DivisionByZero`.
pub fn evaluate(ast: &AstNode) -> Result<f64, CalcError> {
    let result = match ast {
        AstNode::Number(n) => Ok(*n),

        AstNode::BinaryOperation {
            left,
            operator,
            right,
        } => {
            let left_value = evaluate(left)?;
            let right_value = evaluate(right)?;
            operator.apply(left_value, right_value)
        }

        AstNode::Negate(inner) => Ok(-evaluate(inner)?),

        AstNode::Group(inner) => evaluate(inner),
    }?;

    debug!("evaluated {:?} to {}", ast, result);
    Ok(result)
}
