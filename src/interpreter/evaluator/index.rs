use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates an indexing expression `base[index]`.
    ///
    /// Indexing is legal only on strings and lists. A negative index wraps
    /// once from the end (`idx = len + idx`); an index still outside
    /// `[0, len)` after wrapping yields Null rather than an error. Indexing
    /// a string yields a one-character string.
    pub(crate) fn eval_index(&mut self,
                             base: &Node,
                             index: &Node,
                             line: usize,
                             env: &mut Environment)
                             -> EvalResult<Value> {
        let container = self.eval(base, env)?;
        let index = self.eval(index, env)?;
        let Value::Number(raw) = index else {
            return Err(RuntimeError::NonNumericIndex { line });
        };
        let idx = raw as i64;

        match container {
            Value::String(text) => {
                let len = text.chars().count() as i64;
                let Some(idx) = wrap_index(idx, len) else {
                    return Ok(Value::Null);
                };
                Ok(text.chars()
                       .nth(idx)
                       .map_or(Value::Null, |c| Value::String(c.to_string())))
            },
            Value::List(items) => {
                let elements = items.borrow();
                let len = elements.len() as i64;
                let Some(idx) = wrap_index(idx, len) else {
                    return Ok(Value::Null);
                };
                Ok(elements.get(idx).cloned().unwrap_or(Value::Null))
            },
            _ => Err(RuntimeError::NotIndexable { line }),
        }
    }

    /// Evaluates a slicing expression `base[start:end]`.
    ///
    /// Slicing is legal only on strings and lists. Missing bounds default to
    /// `0` and the length; negative bounds wrap once from the end; both are
    /// then clamped into `[0, len]`. When `start > end` after clamping the
    /// result is simply empty, never an error. A list slice is a fresh
    /// list, not an alias of the source.
    pub(crate) fn eval_slice(&mut self,
                             base: &Node,
                             start: Option<&Node>,
                             end: Option<&Node>,
                             line: usize,
                             env: &mut Environment)
                             -> EvalResult<Value> {
        let container = self.eval(base, env)?;
        match container {
            Value::String(text) => {
                let len = text.chars().count() as i64;
                let (start, end) = self.slice_bounds(start, end, len, line, env)?;
                if start >= end {
                    return Ok(Value::String(String::new()));
                }
                Ok(Value::String(text.chars().skip(start).take(end - start).collect()))
            },
            Value::List(items) => {
                let len = items.borrow().len() as i64;
                let (start, end) = self.slice_bounds(start, end, len, line, env)?;
                if start >= end {
                    return Ok(Value::list(Vec::new()));
                }
                let elements = items.borrow();
                Ok(Value::list(elements.iter().skip(start).take(end - start).cloned().collect()))
            },
            _ => Err(RuntimeError::NotSliceable { line }),
        }
    }

    /// Evaluates the optional slice bounds, wraps negatives, and clamps both
    /// into `[0, len]`.
    fn slice_bounds(&mut self,
                    start: Option<&Node>,
                    end: Option<&Node>,
                    len: i64,
                    line: usize,
                    env: &mut Environment)
                    -> EvalResult<(usize, usize)> {
        let mut lower = 0;
        let mut upper = len;

        if let Some(node) = start {
            lower = self.slice_bound(node, len, line, env)?;
        }
        if let Some(node) = end {
            upper = self.slice_bound(node, len, line, env)?;
        }

        Ok((lower.clamp(0, len) as usize, upper.clamp(0, len) as usize))
    }

    /// Evaluates one slice bound, wrapping a negative value once.
    fn slice_bound(&mut self,
                   node: &Node,
                   len: i64,
                   line: usize,
                   env: &mut Environment)
                   -> EvalResult<i64> {
        let value = self.eval(node, env)?;
        let Value::Number(raw) = value else {
            return Err(RuntimeError::NonNumericIndex { line });
        };
        let mut bound = raw as i64;
        if bound < 0 {
            bound += len;
        }
        Ok(bound)
    }
}

/// Wraps a possibly negative index and range-checks it.
///
/// Returns `None` when the index is out of `[0, len)` even after wrapping.
fn wrap_index(idx: i64, len: i64) -> Option<usize> {
    let idx = if idx < 0 { len + idx } else { idx };
    if idx < 0 || idx >= len {
        return None;
    }
    Some(idx as usize)
}
