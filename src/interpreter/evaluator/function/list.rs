use std::cmp::Ordering;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, function::math::number_arg},
        value::core::{ListRef, Value},
    },
};

/// The `len` builtin: the number of characters of a string or elements of a
/// list.
pub fn len(args: &[Value], line: usize) -> EvalResult<Value> {
    match &args[0] {
        Value::String(s) => Ok(Value::Number(s.chars().count() as f64)),
        Value::List(items) => Ok(Value::Number(items.borrow().len() as f64)),
        _ => Err(RuntimeError::TypeError { details:
                                               "len() argument must be a string or a list".to_string(),
                                           line }),
    }
}

/// The `push` builtin: appends a value to a list in place, yielding Null.
///
/// The mutation is visible through every alias of the list.
pub fn push(args: &[Value], line: usize) -> EvalResult<Value> {
    let items = list_arg(args, "push", line)?;
    items.borrow_mut().push(args[1].clone());
    Ok(Value::Null)
}

/// The `pop` builtin: removes and returns the last element, or Null when
/// the list is empty.
pub fn pop(args: &[Value], line: usize) -> EvalResult<Value> {
    let items = list_arg(args, "pop", line)?;
    let popped = items.borrow_mut().pop();
    Ok(popped.unwrap_or(Value::Null))
}

/// The `insert` builtin: inserts a value at an index, yielding Null.
///
/// The index is truncated to an integer and clamped into `[0, len]`, so an
/// out-of-range position inserts at the nearest end.
pub fn insert(args: &[Value], line: usize) -> EvalResult<Value> {
    let items = list_arg(args, "insert", line)?;
    let index = number_arg(args, 1, "insert", line)? as i64;

    let mut elements = items.borrow_mut();
    let index = index.clamp(0, elements.len() as i64) as usize;
    elements.insert(index, args[2].clone());
    Ok(Value::Null)
}

/// The `remove` builtin: removes and returns the element at an index.
///
/// A negative or out-of-range index yields Null and leaves the list
/// untouched; there is no wrapping here.
pub fn remove(args: &[Value], line: usize) -> EvalResult<Value> {
    let items = list_arg(args, "remove", line)?;
    let index = number_arg(args, 1, "remove", line)? as i64;

    let mut elements = items.borrow_mut();
    if index < 0 || index >= elements.len() as i64 {
        return Ok(Value::Null);
    }
    Ok(elements.remove(index as usize))
}

/// The `sort` builtin: sorts a list in place, yielding Null.
///
/// Only all-number and all-string lists are sorted; a mixed-type list is
/// left unchanged, silently.
pub fn sort(args: &[Value], line: usize) -> EvalResult<Value> {
    let items = list_arg(args, "sort", line)?;
    let mut elements = items.borrow_mut();

    if elements.iter().all(|v| matches!(v, Value::Number(_))) {
        elements.sort_by(|a, b| {
                    let (Value::Number(x), Value::Number(y)) = (a, b) else {
                        return Ordering::Equal;
                    };
                    x.partial_cmp(y).unwrap_or(Ordering::Equal)
                });
    } else if elements.iter().all(|v| matches!(v, Value::String(_))) {
        elements.sort_by(|a, b| {
                    let (Value::String(x), Value::String(y)) = (a, b) else {
                        return Ordering::Equal;
                    };
                    x.cmp(y)
                });
    }
    Ok(Value::Null)
}

/// Extracts the list argument in first position, or reports a type error
/// naming the builtin.
fn list_arg<'a>(args: &'a [Value], name: &str, line: usize) -> EvalResult<&'a ListRef> {
    match &args[0] {
        Value::List(items) => Ok(items),
        _ => Err(RuntimeError::TypeError { details: format!("{name}() first argument must be a list"),
                                           line }),
    }
}
