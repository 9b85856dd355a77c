use rand::Rng;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Applies a one-argument math builtin (`abs`, `ceil`, `floor`, `round`,
/// `sqrt`) to a numeric value.
///
/// The operation is selected by name. Non-numeric arguments produce a type
/// error naming the builtin.
pub fn unary_math(name: &str, args: &[Value], line: usize) -> EvalResult<Value> {
    let op = match name {
        "abs" => f64::abs,
        "ceil" => f64::ceil,
        "floor" => f64::floor,
        "round" => f64::round,
        "sqrt" => f64::sqrt,
        _ => unreachable!(),
    };

    Ok(Value::Number(op(number_arg(args, 0, name, line)?)))
}

/// The `rnd` builtin: a uniform random integer in `[0, n)` as a number.
///
/// The argument is truncated to an integer first; `n <= 0` yields `0`.
pub fn rnd(args: &[Value], line: usize) -> EvalResult<Value> {
    let n = number_arg(args, 0, "rnd", line)? as i64;
    if n <= 0 {
        return Ok(Value::Number(0.0));
    }
    let value = rand::thread_rng().gen_range(0..n);
    Ok(Value::Number(value as f64))
}

/// The `range` builtin.
///
/// Accepts `(end)`, `(start, end)`, or `(start, end, step)`, all numbers.
/// The sequence is built by repeated floating-point addition of the step:
/// ascending while `v < end` when the step is positive, descending while
/// `v > end` when negative. A zero step is an error.
pub fn range(args: &[Value], line: usize) -> EvalResult<Value> {
    for index in 0..args.len() {
        number_arg(args, index, "range", line)?;
    }

    let (start, end, step) = match args.len() {
        1 => (0.0, number_arg(args, 0, "range", line)?, 1.0),
        2 => (number_arg(args, 0, "range", line)?, number_arg(args, 1, "range", line)?, 1.0),
        _ => (number_arg(args, 0, "range", line)?,
              number_arg(args, 1, "range", line)?,
              number_arg(args, 2, "range", line)?),
    };

    if step == 0.0 {
        return Err(RuntimeError::InvalidArgument { details:
                                                       "range() step must not be zero".to_string(),
                                                   line });
    }

    let mut elements = Vec::new();
    let mut v = start;
    if step > 0.0 {
        while v < end {
            elements.push(Value::Number(v));
            v += step;
        }
    } else {
        while v > end {
            elements.push(Value::Number(v));
            v += step;
        }
    }
    Ok(Value::list(elements))
}

/// Extracts the numeric argument at `index`, or reports a type error naming
/// the builtin.
pub(in crate::interpreter::evaluator::function) fn number_arg(args: &[Value],
                                                              index: usize,
                                                              name: &str,
                                                              line: usize)
                                                              -> EvalResult<f64> {
    match args.get(index) {
        Some(Value::Number(n)) => Ok(*n),
        _ => Err(RuntimeError::TypeError { details: format!("{name}() argument must be a number"),
                                           line }),
    }
}
