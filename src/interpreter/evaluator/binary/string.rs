use crate::{ast::BinaryOperator, interpreter::value::core::Value, util::num::format_number};

/// Applies a binary operator whose left operand is a string.
///
/// Returns `None` when no string rule covers the combination, letting the
/// dispatcher fall through to the generic invalid-operands error. The rules:
///
/// - `+` with a string or a number concatenates; numbers render in the
///   canonical format.
/// - `-` with a string removes the right side when it is a suffix of the
///   left, and otherwise returns the left unchanged, never an error.
/// - `*` with a number makes `floor(n)` full copies followed by a partial
///   copy of `floor(len × fraction)` leading characters (truncation, not
///   rounding); a count of zero or less yields the empty string.
/// - the six comparison operators compare lexicographically when the right
///   side is also a string.
pub fn apply(text: &str, right: &Value, op: BinaryOperator) -> Option<Value> {
    match (op, right) {
        (BinaryOperator::Add, Value::String(other)) => Some(format!("{text}{other}").into()),
        (BinaryOperator::Add, Value::Number(n)) => {
            Some(format!("{text}{}", format_number(*n)).into())
        },
        (BinaryOperator::Sub, Value::String(other)) => {
            Some(text.strip_suffix(other.as_str()).unwrap_or(text).into())
        },
        (BinaryOperator::Mul, Value::Number(count)) => Some(repeat(text, *count)),
        (op, Value::String(other)) => compare(text, other, op),
        _ => None,
    }
}

/// Repeats a string a possibly fractional number of times.
fn repeat(text: &str, count: f64) -> Value {
    if count <= 0.0 {
        return Value::String(String::new());
    }

    let full_repeats = count as usize;
    let mut result = text.repeat(full_repeats);

    let fraction = count - full_repeats as f64;
    if fraction > 0.0 {
        let partial = (text.chars().count() as f64 * fraction) as usize;
        result.extend(text.chars().take(partial));
    }
    Value::String(result)
}

/// Compares two strings lexicographically under the comparison operators.
fn compare(left: &str, right: &str, op: BinaryOperator) -> Option<Value> {
    match op {
        BinaryOperator::Equal => Some((left == right).into()),
        BinaryOperator::NotEqual => Some((left != right).into()),
        BinaryOperator::Less => Some((left < right).into()),
        BinaryOperator::LessEqual => Some((left <= right).into()),
        BinaryOperator::Greater => Some((left > right).into()),
        BinaryOperator::GreaterEqual => Some((left >= right).into()),
        _ => None,
    }
}
