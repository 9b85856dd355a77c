use crate::{
    ast::{IfBranch, Node},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{Context, EvalResult, Flow},
        value::core::Value,
    },
};

impl Context {
    /// Executes one statement, driving side effects.
    ///
    /// `print` and `println` are recognized here, and only here, as direct
    /// statement-position forms; expression evaluation does not know about
    /// them. All other expression statements are evaluated and their value
    /// discarded.
    ///
    /// # Returns
    /// The [`Flow`] outcome: `Normal`, or an unwinding
    /// return/break/continue signal for an enclosing boundary to handle.
    ///
    /// # Errors
    /// Any [`RuntimeError`] raised while executing the statement.
    pub fn exec(&mut self, node: &Node, env: &mut Environment) -> EvalResult<Flow> {
        match node {
            Node::Return { expr, line } => {
                let value = self.eval(expr, env)?;
                Ok(Flow::Return { value, line: *line })
            },
            Node::Break { line } => Ok(Flow::Break { line: *line }),
            Node::Continue { line } => Ok(Flow::Continue { line: *line }),
            Node::Print { expr, .. } => {
                let value = match expr.as_ref() {
                    // printing a bare string literal that contains a space
                    // wraps it in quotes
                    Node::Str { value, .. } if value.contains(' ') => {
                        Value::String(format!("\"{value}\""))
                    },
                    _ => self.eval(expr, env)?,
                };
                self.output.push(value);
                Ok(Flow::Normal)
            },
            Node::Call { callee, arguments, .. }
                if arguments.len() == 1
                   && matches!(callee.as_ref(),
                               Node::Variable { name, .. } if name == "println") =>
            {
                let value = self.eval(&arguments[0], env)?;
                self.output.push(value);
                self.output.push(Value::String("\n".to_string()));
                Ok(Flow::Normal)
            },
            Node::If { branches, else_body, .. } => self.exec_if(branches, else_body, env),
            Node::For { var, iterable, body, line } => {
                self.exec_for(var, iterable, body, *line, env)
            },
            Node::While { condition, body, .. } => self.exec_while(condition, body, env),
            _ => {
                self.eval(node, env)?;
                Ok(Flow::Normal)
            },
        }
    }

    /// Executes a statement sequence, stopping at the first signal.
    ///
    /// A non-normal flow is returned immediately so it can unwind to the
    /// enclosing loop or call boundary.
    pub(crate) fn exec_block(&mut self,
                             statements: &[Node],
                             env: &mut Environment)
                             -> EvalResult<Flow> {
        for statement in statements {
            match self.exec(statement, env)? {
                Flow::Normal => {},
                flow => return Ok(flow),
            }
        }
        Ok(Flow::Normal)
    }

    /// Executes an `if` statement.
    ///
    /// Branch conditions are evaluated in order; the first truthy one has
    /// its body executed. If none match, the else body runs (an absent
    /// `else` is simply an empty body).
    fn exec_if(&mut self,
               branches: &[IfBranch],
               else_body: &[Node],
               env: &mut Environment)
               -> EvalResult<Flow> {
        for branch in branches {
            let condition = self.eval(&branch.condition, env)?;
            if condition.is_truthy() {
                return self.exec_block(&branch.body, env);
            }
        }
        self.exec_block(else_body, env)
    }

    /// Executes a `for` loop.
    ///
    /// The iterable must evaluate to a list. Iteration runs over a snapshot
    /// of the elements taken at loop entry, so mutating the list inside the
    /// body does not affect the iteration. The loop variable is rebound in
    /// the current environment each time, with no new scope introduced.
    fn exec_for(&mut self,
                var: &str,
                iterable: &Node,
                body: &[Node],
                line: usize,
                env: &mut Environment)
                -> EvalResult<Flow> {
        let iterable = self.eval(iterable, env)?;
        let Value::List(items) = iterable else {
            return Err(RuntimeError::TypeError { details:
                                                     "for loop iterable must be a list".to_string(),
                                                 line });
        };

        let snapshot = items.borrow().clone();
        for element in snapshot {
            env.set(var, element);
            match self.exec_block(body, env)? {
                Flow::Normal | Flow::Continue { .. } => {},
                Flow::Break { .. } => break,
                flow @ Flow::Return { .. } => return Ok(flow),
            }
        }
        Ok(Flow::Normal)
    }

    /// Executes a `while` loop, re-evaluating the condition before every
    /// iteration.
    fn exec_while(&mut self,
                  condition: &Node,
                  body: &[Node],
                  env: &mut Environment)
                  -> EvalResult<Flow> {
        loop {
            let value = self.eval(condition, env)?;
            if !value.is_truthy() {
                break;
            }
            match self.exec_block(body, env)? {
                Flow::Normal | Flow::Continue { .. } => {},
                Flow::Break { .. } => break,
                flow @ Flow::Return { .. } => return Ok(flow),
            }
        }
        Ok(Flow::Normal)
    }
}
