use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::format_number,
};

/// The `parse_num` builtin.
///
/// Parses a string into a number. Unparsable text, like any non-string
/// argument, yields Null rather than an error.
pub fn parse_num(args: &[Value], _line: usize) -> EvalResult<Value> {
    let Value::String(text) = &args[0] else {
        return Ok(Value::Null);
    };
    Ok(text.trim()
           .parse::<f64>()
           .map_or(Value::Null, Value::Number))
}

/// The `to_string` builtin: renders a number in the canonical format.
pub fn to_string(args: &[Value], line: usize) -> EvalResult<Value> {
    let Value::Number(n) = &args[0] else {
        return Err(RuntimeError::TypeError { details:
                                                 "to_string() argument must be a number".to_string(),
                                             line });
    };
    Ok(Value::String(format_number(*n)))
}

/// The `lower` and `upper` builtins, selected by name.
pub fn change_case(name: &str, args: &[Value], line: usize) -> EvalResult<Value> {
    let text = string_arg(args, 0, name, line)?;
    Ok(Value::String(match name {
        "lower" => text.to_lowercase(),
        _ => text.to_uppercase(),
    }))
}

/// The `split` builtin.
///
/// Splits a string on every non-overlapping occurrence of the delimiter,
/// always yielding at least one element. An empty delimiter never advances
/// a search, so the whole string comes back as a single piece.
pub fn split(args: &[Value], line: usize) -> EvalResult<Value> {
    let text = string_arg(args, 0, "split", line)?;
    let delimiter = string_arg(args, 1, "split", line)?;

    let mut parts = Vec::new();
    if delimiter.is_empty() {
        parts.push(Value::String(text.to_string()));
    } else {
        let mut rest = text;
        while let Some(pos) = rest.find(delimiter) {
            parts.push(Value::String(rest[..pos].to_string()));
            rest = &rest[pos + delimiter.len()..];
        }
        parts.push(Value::String(rest.to_string()));
    }
    Ok(Value::list(parts))
}

/// The `join` builtin.
///
/// Concatenates a list of strings with a delimiter between elements. Every
/// element must be a string.
pub fn join(args: &[Value], line: usize) -> EvalResult<Value> {
    let Value::List(items) = &args[0] else {
        return Err(join_type_error(line));
    };
    let Value::String(delimiter) = &args[1] else {
        return Err(join_type_error(line));
    };

    let mut out = String::new();
    for (index, element) in items.borrow().iter().enumerate() {
        let Value::String(piece) = element else {
            return Err(RuntimeError::TypeError { details:
                                                     "join() list elements must be strings".to_string(),
                                                 line });
        };
        if index > 0 {
            out.push_str(delimiter);
        }
        out.push_str(piece);
    }
    Ok(Value::String(out))
}

/// The `replace` builtin: global, non-overlapping replacement.
pub fn replace(args: &[Value], line: usize) -> EvalResult<Value> {
    let text = string_arg(args, 0, "replace", line)?;
    let old = string_arg(args, 1, "replace", line)?;
    let new = string_arg(args, 2, "replace", line)?;
    Ok(Value::String(text.replace(old, new)))
}

fn join_type_error(line: usize) -> RuntimeError {
    RuntimeError::TypeError { details: "join() arguments must be a list and a string".to_string(),
                              line }
}

/// Extracts the string argument at `index`, or reports a type error naming
/// the builtin.
fn string_arg<'a>(args: &'a [Value],
                  index: usize,
                  name: &str,
                  line: usize)
                  -> EvalResult<&'a str> {
    match args.get(index) {
        Some(Value::String(s)) => Ok(s),
        _ => Err(RuntimeError::TypeError { details: format!("{name}() arguments must be strings"),
                                           line }),
    }
}
