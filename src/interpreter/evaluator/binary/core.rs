use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::{list, string},
            core::EvalResult,
        },
        value::core::Value,
    },
};

/// Applies a binary operator to two evaluated operands.
///
/// Dispatch follows the kind of the left operand. Null operands support
/// only `==`/`!=` (true iff both sides are Null); list and string rules are
/// tried next; two numbers support the full operator set. Every other
/// combination is an invalid-operands error.
///
/// # Errors
/// - [`RuntimeError::DivisionByZero`] / [`RuntimeError::ModuloByZero`] for
///   zero right operands of `/` and `%`.
/// - [`RuntimeError::InvalidOperands`] for unsupported kind combinations.
pub fn apply_binary_op(left: &Value,
                       right: &Value,
                       op: BinaryOperator,
                       line: usize)
                       -> EvalResult<Value> {
    if left.is_null() || right.is_null() {
        let both_null = left.is_null() && right.is_null();
        return match op {
            BinaryOperator::Equal => Ok(both_null.into()),
            BinaryOperator::NotEqual => Ok((!both_null).into()),
            _ => Err(invalid_operands(op, line)),
        };
    }

    if let Value::List(items) = left
       && let Some(result) = list::apply(items, right, op)
    {
        return Ok(result);
    }

    if let Value::String(text) = left
       && let Some(result) = string::apply(text, right, op)
    {
        return Ok(result);
    }

    if let (Value::Number(l), Value::Number(r)) = (left, right) {
        return apply_number_op(*l, *r, op, line);
    }

    Err(invalid_operands(op, line))
}

/// Applies a binary operator to two numbers.
///
/// Comparisons and `and`/`or` yield 1.0/0.0: logical results are numbers,
/// not a distinct boolean type. Both logical operands are always evaluated
/// before this point; there is no short-circuiting in the language.
fn apply_number_op(l: f64, r: f64, op: BinaryOperator, line: usize) -> EvalResult<Value> {
    Ok(match op {
        BinaryOperator::Add => Value::Number(l + r),
        BinaryOperator::Sub => Value::Number(l - r),
        BinaryOperator::Mul => Value::Number(l * r),
        BinaryOperator::Div => {
            if r == 0.0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            Value::Number(l / r)
        },
        BinaryOperator::Mod => {
            if r == 0.0 {
                return Err(RuntimeError::ModuloByZero { line });
            }
            Value::Number(l % r)
        },
        BinaryOperator::Pow => Value::Number(l.powf(r)),
        BinaryOperator::Less => (l < r).into(),
        BinaryOperator::Greater => (l > r).into(),
        BinaryOperator::LessEqual => (l <= r).into(),
        BinaryOperator::GreaterEqual => (l >= r).into(),
        BinaryOperator::Equal => (l == r).into(),
        BinaryOperator::NotEqual => (l != r).into(),
        BinaryOperator::And => (l != 0.0 && r != 0.0).into(),
        BinaryOperator::Or => (l != 0.0 || r != 0.0).into(),
    })
}

/// Builds the generic invalid-operands error for `op`.
pub(in crate::interpreter::evaluator::binary) fn invalid_operands(op: BinaryOperator,
                                                                  line: usize)
                                                                  -> RuntimeError {
    RuntimeError::InvalidOperands { op: op.to_string(),
                                    line }
}
