#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read a variable that was never assigned.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A binary operator was applied to operand kinds it does not support.
    InvalidOperands {
        /// The operator, as written in source.
        op:   String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A unary operator was applied to something other than a number.
    InvalidUnaryOperand {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted modulo by zero.
    ModuloByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An index or slice bound was not a number.
    NonNumericIndex {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to index a value that is neither a string nor a list.
    NotIndexable {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to slice a value that is neither a string nor a list.
    NotSliceable {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to call a value that is not a function.
    NotCallable {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a call.
    ArityMismatch {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value had an unexpected or incompatible type.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An argument was invalid or out of range.
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A statement-only node turned up in expression position.
    UnknownExpression {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `break` was executed with no enclosing loop to catch it.
    BreakOutsideLoop {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `continue` was executed with no enclosing loop to catch it.
    ContinueOutsideLoop {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `return` was executed with no enclosing function call.
    ReturnOutsideFunction {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, line } => {
                write!(f, "Error on line {line}: Undefined variable '{name}'.")
            },
            Self::InvalidOperands { op, line } => {
                write!(f, "Error on line {line}: Invalid operands for binary operator '{op}'.")
            },
            Self::InvalidUnaryOperand { line } => {
                write!(f, "Error on line {line}: Unary operators apply only to numbers.")
            },
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::ModuloByZero { line } => write!(f, "Error on line {line}: Modulo by zero."),
            Self::NonNumericIndex { line } => {
                write!(f, "Error on line {line}: Index must be a number.")
            },
            Self::NotIndexable { line } => {
                write!(f, "Error on line {line}: Indexing requires a string or a list.")
            },
            Self::NotSliceable { line } => {
                write!(f, "Error on line {line}: Slicing requires a string or a list.")
            },
            Self::NotCallable { line } => {
                write!(f, "Error on line {line}: Value is not callable.")
            },
            Self::ArityMismatch { line } => {
                write!(f, "Error on line {line}: Argument count mismatch.")
            },
            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },
            Self::InvalidArgument { details, line } => {
                write!(f, "Error on line {line}: Invalid argument: {details}.")
            },
            Self::UnknownExpression { line } => {
                write!(f, "Error on line {line}: Expression is unknown.")
            },
            Self::BreakOutsideLoop { line } => {
                write!(f, "Error on line {line}: 'break' outside of a loop.")
            },
            Self::ContinueOutsideLoop { line } => {
                write!(f, "Error on line {line}: 'continue' outside of a loop.")
            },
            Self::ReturnOutsideFunction { line } => {
                write!(f, "Error on line {line}: 'return' outside of a function.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
