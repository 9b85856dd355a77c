use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Applies a unary operator to an evaluated operand.
///
/// Unary operators apply only to numbers. `not` maps nonzero to 0 and zero
/// to 1.
///
/// # Errors
/// Returns [`RuntimeError::InvalidUnaryOperand`] for any non-number operand.
pub fn apply_unary_op(op: UnaryOperator, operand: &Value, line: usize) -> EvalResult<Value> {
    let Value::Number(num) = operand else {
        return Err(RuntimeError::InvalidUnaryOperand { line });
    };

    Ok(match op {
        UnaryOperator::Plus => Value::Number(*num),
        UnaryOperator::Negate => Value::Number(-num),
        UnaryOperator::Not => (*num == 0.0).into(),
    })
}
