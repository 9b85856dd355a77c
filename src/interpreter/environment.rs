use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// One flat name-to-value scope.
///
/// There is exactly one environment for the top level and one fresh
/// environment per function call, holding only the bound parameters.
/// Environments are never nested: a function body cannot see the caller's or
/// the defining scope's variables.
#[derive(Debug, Default)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn set(&mut self, name: &str, value: Value) {
        self.variables.insert(name.to_string(), value);
    }

    /// Looks up `name`, cloning its value out of the scope.
    ///
    /// Cloning is what gives the value model its copy semantics: strings and
    /// numbers copy, lists and functions share their backing storage.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UndefinedVariable`] if no binding exists.
    pub fn get(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.variables
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                             line })
    }
}
