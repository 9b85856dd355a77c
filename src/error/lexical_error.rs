/// The bare failure kind reported from inside the tokenizer.
///
/// `logos` callbacks can only carry a value of the lexer's error type; the
/// driver combines a kind with the offending slice and line number into a
/// full [`LexicalError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexicalErrorKind {
    /// A character no token rule matches.
    #[default]
    InvalidCharacter,
    /// A string literal with no closing quote before end of input.
    UnterminatedString,
    /// A numeric literal whose exponent marker has no digits.
    MalformedExponent,
    /// Numeric literal text that does not decode to a number.
    InvalidNumber,
}

#[derive(Debug)]
/// Represents all errors that can occur while tokenizing source text.
pub enum LexicalError {
    /// Encountered a character that starts no token.
    InvalidCharacter {
        /// The rejected text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A string literal was still open at the end of input.
    UnterminatedString {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A numeric literal had an `e`/`E` exponent with no digits.
    MalformedExponent {
        /// The literal text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A numeric literal could not be decoded.
    InvalidNumber {
        /// The literal text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl LexicalError {
    /// Attaches the offending slice and line to a raw [`LexicalErrorKind`].
    #[must_use]
    pub fn from_kind(kind: LexicalErrorKind, text: &str, line: usize) -> Self {
        match kind {
            LexicalErrorKind::InvalidCharacter => Self::InvalidCharacter { text: text.to_string(),
                                                                           line },
            LexicalErrorKind::UnterminatedString => Self::UnterminatedString { line },
            LexicalErrorKind::MalformedExponent => Self::MalformedExponent { text:
                                                                                 text.to_string(),
                                                                             line },
            LexicalErrorKind::InvalidNumber => Self::InvalidNumber { text: text.to_string(),
                                                                     line },
        }
    }
}

impl std::fmt::Display for LexicalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { text, line } => {
                write!(f, "Error on line {line}: Unrecognized character: {text}.")
            },
            Self::UnterminatedString { line } => {
                write!(f, "Error on line {line}: Unterminated string literal.")
            },
            Self::MalformedExponent { text, line } => {
                write!(f, "Error on line {line}: Malformed exponent in numeric literal: {text}.")
            },
            Self::InvalidNumber { text, line } => {
                write!(f, "Error on line {line}: Invalid numeric literal: {text}.")
            },
        }
    }
}

impl std::error::Error for LexicalError {}
