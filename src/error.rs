/// Lexical errors.
///
/// Defines the errors the tokenizer can produce while scanning source text,
/// such as unterminated string literals or malformed numeric exponents.
pub mod lexical_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree.
/// Parse errors include unexpected tokens, mismatched block keywords, and
/// invalid assignment targets.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// undefined variables, invalid operand types, division by zero, or control
/// signals with no matching handler.
pub mod runtime_error;

pub use lexical_error::LexicalError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure an interpretation can end with.
///
/// The first error of any phase aborts the whole run; there is no recovery
/// and no partial result.
#[derive(Debug)]
pub enum Error {
    /// The tokenizer rejected the source text.
    Lexical(LexicalError),
    /// The parser rejected the token stream.
    Parse(ParseError),
    /// Evaluation failed.
    Runtime(RuntimeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexical(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<LexicalError> for Error {
    fn from(e: LexicalError) -> Self {
        Self::Lexical(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
