use std::rc::Rc;

use crate::{
    ast::{BinaryOperator, Node},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{binary::core::apply_binary_op, unary::apply_unary_op},
        value::core::{FunctionValue, Value},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// [`RuntimeError`] describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The outcome of executing one statement.
///
/// Control transfer is an ordinary value, not an unwinding mechanism: every
/// block, loop, and call boundary inspects the flow it receives.
/// `Break`/`Continue` are consumed at the nearest enclosing loop, `Return`
/// at the function-call boundary. A signal that reaches a boundary with no
/// handler (the top level, or a function body for break/continue) becomes a
/// dedicated [`RuntimeError`].
#[derive(Debug)]
pub enum Flow {
    /// The statement finished normally.
    Normal,
    /// A `return` is unwinding to the nearest function-call boundary.
    Return {
        /// The returned value.
        value: Value,
        /// The line of the `return` statement.
        line:  usize,
    },
    /// A `break` is unwinding to the nearest loop boundary.
    Break {
        /// The line of the `break` statement.
        line: usize,
    },
    /// A `continue` is unwinding to the nearest loop boundary.
    Continue {
        /// The line of the `continue` statement.
        line: usize,
    },
}

/// Stores the runtime evaluation context.
///
/// The context owns the print-value sink: one ordered, append-only sequence
/// scoped to a single top-level interpretation, reachable from every nested
/// call because the context is threaded by reference through all execution.
pub struct Context {
    pub(crate) output: Vec<Value>,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a fresh context with an empty print sink.
    #[must_use]
    pub fn new() -> Self {
        Self { output: Vec::new() }
    }

    /// Consumes the context, yielding the captured print values in order.
    #[must_use]
    pub fn into_output(self) -> Vec<Value> {
        self.output
    }

    /// Evaluates an expression node and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Evaluation
    /// may mutate shared lists and, through nested assignments, the
    /// environment, but control flow passes through [`Self::exec`] only.
    ///
    /// # Errors
    /// Any [`RuntimeError`] raised while evaluating the node.
    pub fn eval(&mut self, node: &Node, env: &mut Environment) -> EvalResult<Value> {
        match node {
            Node::Number { value, .. } => Ok(Value::Number(*value)),
            Node::Str { value, .. } => Ok(Value::String(value.clone())),
            Node::Null { .. } => Ok(Value::Null),
            Node::Variable { name, line } => env.get(name, *line),
            Node::List { elements, .. } => {
                let mut values = Vec::with_capacity(elements.len());
                for element in elements {
                    values.push(self.eval(element, env)?);
                }
                Ok(Value::list(values))
            },
            Node::Function { params, body, .. } => {
                Ok(Value::Function(Rc::new(FunctionValue { params: params.clone(),
                                                           body:   Rc::clone(body), })))
            },
            Node::UnaryOp { op, operand, line } => {
                let value = self.eval(operand, env)?;
                apply_unary_op(*op, &value, *line)
            },
            Node::BinaryOp { op, left, right, line } => {
                let left = self.eval(left, env)?;
                let right = self.eval(right, env)?;
                apply_binary_op(&left, &right, *op, *line)
            },
            Node::Assign { name, op, value, line } => {
                self.eval_assign(name, *op, value, *line, env)
            },
            Node::Index { base, index, line } => self.eval_index(base, index, *line, env),
            Node::Slice { base, start, end, line } => {
                self.eval_slice(base, start.as_deref(), end.as_deref(), *line, env)
            },
            Node::Call { callee, arguments, line } => {
                self.eval_call(callee, arguments, *line, env)
            },

            // statement forms never appear in expression position; the
            // parser cannot produce them here
            Node::Print { .. }
            | Node::If { .. }
            | Node::For { .. }
            | Node::While { .. }
            | Node::Break { .. }
            | Node::Continue { .. }
            | Node::Return { .. } => {
                Err(RuntimeError::UnknownExpression { line: node.line_number() })
            },
        }
    }

    /// Evaluates an assignment, returning the assigned value.
    ///
    /// For compound forms the right side is evaluated first, then combined
    /// with the variable's current value. Plain `=` may introduce a new
    /// binding; compound forms require one to exist.
    fn eval_assign(&mut self,
                   name: &str,
                   op: Option<BinaryOperator>,
                   value: &Node,
                   line: usize,
                   env: &mut Environment)
                   -> EvalResult<Value> {
        let mut value = self.eval(value, env)?;
        if let Some(op) = op {
            let current = env.get(name, line)?;
            value = apply_binary_op(&current, &value, op, line)?;
        }
        env.set(name, value.clone());
        Ok(value)
    }
}
