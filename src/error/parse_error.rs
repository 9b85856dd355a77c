#[derive(Debug)]
/// Represents all errors that can occur while parsing the token stream.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// A description of what was found (and, where helpful, what was
        /// expected instead).
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input in the middle of a construct.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The left side of an assignment was not a bare identifier.
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The keyword after `end` did not match the block being closed.
    UnmatchedBlockKeyword {
        /// The keyword that should have followed `end`.
        expected: &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::InvalidAssignmentTarget { line } => {
                write!(f, "Error on line {line}: Invalid assignment target.")
            },

            Self::UnmatchedBlockKeyword { expected, line } => {
                write!(f, "Error on line {line}: Expected '{expected}' after 'end'.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
