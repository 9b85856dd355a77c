use crate::{
    ast::BinaryOperator,
    interpreter::value::core::{ListRef, Value},
};

/// Applies a binary operator whose left operand is a list.
///
/// Returns `None` when no list rule covers the combination. The rules:
///
/// - `+` with another list concatenates into a new list; neither operand is
///   mutated, and the result has a fresh identity.
/// - `*` with a number repeats the elements `floor(n)` times; a count of
///   zero or less yields an empty list. There is no fractional repetition
///   for lists.
pub fn apply(items: &ListRef, right: &Value, op: BinaryOperator) -> Option<Value> {
    match (op, right) {
        (BinaryOperator::Add, Value::List(other)) => {
            let mut elements = items.borrow().clone();
            elements.extend(other.borrow().iter().cloned());
            Some(Value::list(elements))
        },
        (BinaryOperator::Mul, Value::Number(count)) => {
            if *count <= 0.0 {
                return Some(Value::list(Vec::new()));
            }
            let source = items.borrow();
            let mut elements = Vec::with_capacity(source.len() * (*count as usize));
            for _ in 0..*count as usize {
                elements.extend(source.iter().cloned());
            }
            Some(Value::list(elements))
        },
        _ => None,
    }
}
