use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            core::{Context, EvalResult, Flow},
            function::{list, math, string},
        },
        value::core::{FunctionValue, Value},
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the call's
/// line number, and returns the produced value.
type BuiltinFn = fn(&[Value], usize) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `OneOf(slice)` means the builtin accepts any arity listed in `slice`.
#[derive(Clone, Copy)]
enum Arity {
    Exact(usize),
    OneOf(&'static [usize]),
}

/// Defines builtin functions by generating a static lookup table.
///
/// Each entry provides a name, an arity specification, and a function
/// pointer implementing the builtin.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
    };
}

builtin_functions! {
    "len"        => { arity: Arity::Exact(1), func: list::len },
    "range"      => { arity: Arity::OneOf(&[1, 2, 3]), func: math::range },
    "read"       => { arity: Arity::Exact(0), func: read },
    "stacktrace" => { arity: Arity::Exact(0), func: stacktrace },
    "abs"        => { arity: Arity::Exact(1), func: |args, line| math::unary_math("abs", args, line) },
    "ceil"       => { arity: Arity::Exact(1), func: |args, line| math::unary_math("ceil", args, line) },
    "floor"      => { arity: Arity::Exact(1), func: |args, line| math::unary_math("floor", args, line) },
    "round"      => { arity: Arity::Exact(1), func: |args, line| math::unary_math("round", args, line) },
    "sqrt"       => { arity: Arity::Exact(1), func: |args, line| math::unary_math("sqrt", args, line) },
    "rnd"        => { arity: Arity::Exact(1), func: math::rnd },
    "parse_num"  => { arity: Arity::Exact(1), func: string::parse_num },
    "to_string"  => { arity: Arity::Exact(1), func: string::to_string },
    "lower"      => { arity: Arity::Exact(1), func: |args, line| string::change_case("lower", args, line) },
    "upper"      => { arity: Arity::Exact(1), func: |args, line| string::change_case("upper", args, line) },
    "split"      => { arity: Arity::Exact(2), func: string::split },
    "join"       => { arity: Arity::Exact(2), func: string::join },
    "replace"    => { arity: Arity::Exact(3), func: string::replace },
    "push"       => { arity: Arity::Exact(2), func: list::push },
    "pop"        => { arity: Arity::Exact(1), func: list::pop },
    "insert"     => { arity: Arity::Exact(3), func: list::insert },
    "remove"     => { arity: Arity::Exact(2), func: list::remove },
    "sort"       => { arity: Arity::Exact(1), func: list::sort },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity
    /// constraint.
    fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::OneOf(arr) => arr.contains(&n),
        }
    }
}

impl Context {
    /// Evaluates a call expression.
    ///
    /// Resolution order for a bare-identifier callee: first the builtin
    /// table (with a fixed arity per builtin; a wrong argument count is an
    /// error, not overload resolution), then the identifier as a variable
    /// holding a function value. Any other callee expression is evaluated
    /// generally and must produce a function value.
    ///
    /// # Errors
    /// - [`RuntimeError::ArityMismatch`] when the argument count is wrong.
    /// - [`RuntimeError::NotCallable`] when the callee is not a function.
    /// - Whatever the called code raises.
    pub(crate) fn eval_call(&mut self,
                            callee: &Node,
                            arguments: &[Node],
                            line: usize,
                            env: &mut Environment)
                            -> EvalResult<Value> {
        if let Node::Variable { name, .. } = callee
           && let Some(builtin) = BUILTIN_TABLE.iter().find(|b| b.name == name.as_str())
        {
            if !builtin.arity.check(arguments.len()) {
                return Err(RuntimeError::ArityMismatch { line });
            }
            let args = self.eval_arguments(arguments, env)?;
            return (builtin.func)(&args, line);
        }

        let callee = self.eval(callee, env)?;
        let Value::Function(function) = callee else {
            return Err(RuntimeError::NotCallable { line });
        };
        self.call_function(&function, arguments, line, env)
    }

    /// Calls a user-defined function value.
    ///
    /// Arity is checked before the arguments are evaluated. Arguments are
    /// evaluated eagerly, left to right, in the caller's environment, then
    /// bound by position into a brand-new environment containing only the
    /// parameters; functions are not closures. A `Return` signal ends the
    /// call with its value; running off the end yields Null. A break or
    /// continue escaping the body has no loop to land in and is an error.
    fn call_function(&mut self,
                     function: &FunctionValue,
                     arguments: &[Node],
                     line: usize,
                     env: &mut Environment)
                     -> EvalResult<Value> {
        if arguments.len() != function.params.len() {
            return Err(RuntimeError::ArityMismatch { line });
        }
        let args = self.eval_arguments(arguments, env)?;

        let mut local = Environment::new();
        for (param, value) in function.params.iter().zip(args) {
            local.set(param, value);
        }

        for statement in function.body.iter() {
            match self.exec(statement, &mut local)? {
                Flow::Normal => {},
                Flow::Return { value, .. } => return Ok(value),
                Flow::Break { line } => return Err(RuntimeError::BreakOutsideLoop { line }),
                Flow::Continue { line } => {
                    return Err(RuntimeError::ContinueOutsideLoop { line });
                },
            }
        }
        Ok(Value::Null)
    }

    /// Evaluates call arguments left to right in the caller's environment.
    fn eval_arguments(&mut self,
                      arguments: &[Node],
                      env: &mut Environment)
                      -> EvalResult<Vec<Value>> {
        let mut args = Vec::with_capacity(arguments.len());
        for argument in arguments {
            args.push(self.eval(argument, env)?);
        }
        Ok(args)
    }
}

/// The `read` builtin. Input sources are not wired into the core; the stub
/// yields an empty string.
fn read(_args: &[Value], _line: usize) -> EvalResult<Value> {
    Ok(Value::String(String::new()))
}

/// The `stacktrace` builtin. Call frames are not recorded; the stub yields
/// an empty list.
fn stacktrace(_args: &[Value], _line: usize) -> EvalResult<Value> {
    Ok(Value::list(Vec::new()))
}
