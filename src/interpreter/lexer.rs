use logos::Logos;

use crate::error::lexical_error::LexicalErrorKind;

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Whitespace, `//` line comments, and `;` statement separators are trivia
/// and never surface as tokens. The end of input is simply the end of the
/// token stream, and lexical failures surface through the error channel as a
/// [`LexicalErrorKind`].
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexicalErrorKind)]
#[logos(skip r"[ \t\r\f]+")]
#[logos(skip r"//[^\n]*")]
#[logos(skip r";")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5`, or `2.1e-10`.
    ///
    /// A leading `-` directly followed by a digit or `.` belongs to the
    /// literal; longest-match therefore lexes `3-5` as two numbers and
    /// `3 - 5` as a subtraction, exactly the look-ahead rule of the
    /// language. An exponent marker without digits is a lexical error.
    #[regex(r"-?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?", lex_number)]
    #[regex(r"-?([0-9]+(\.[0-9]*)?|\.[0-9]+)[eE][+-]?", malformed_exponent)]
    Number(f64),
    /// A double-quoted string literal, with its decoded text as payload.
    ///
    /// The second, quote-less pattern catches literals still open at the end
    /// of input and reports them as a fatal lexical error.
    #[regex(r#""([^"\\]|\\[\s\S])*""#, lex_string)]
    #[regex(r#""([^"\\]|\\[\s\S])*"#, unterminated_string)]
    Str(String),
    /// Identifier tokens; variable or function names such as `x` or `fib`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    /// `print`
    #[token("print")]
    Print,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `nil`
    #[token("nil")]
    Nil,
    /// `function`
    #[token("function")]
    Function,
    /// `return`
    #[token("return")]
    Return,
    /// `if`
    #[token("if")]
    If,
    /// `then`
    #[token("then")]
    Then,
    /// `else`
    #[token("else")]
    Else,
    /// `end`
    #[token("end")]
    End,
    /// `for`
    #[token("for")]
    For,
    /// `in`
    #[token("in")]
    In,
    /// `while`
    #[token("while")]
    While,
    /// `do` (optional after a `for` header or `while` condition)
    #[token("do")]
    Do,
    /// `break`
    #[token("break")]
    Break,
    /// `continue`
    #[token("continue")]
    Continue,
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// `not`, also spelled `!`
    #[token("not")]
    #[token("!")]
    Not,

    /// `+`
    #[token("+")]
    Plus,
    /// `+=`
    #[token("+=")]
    PlusAssign,
    /// `-`
    #[token("-")]
    Minus,
    /// `-=`
    #[token("-=")]
    MinusAssign,
    /// `*`
    #[token("*")]
    Star,
    /// `*=`
    #[token("*=")]
    MulAssign,
    /// `/`
    #[token("/")]
    Slash,
    /// `/=`
    #[token("/=")]
    DivAssign,
    /// `%`
    #[token("%")]
    Percent,
    /// `%=`
    #[token("%=")]
    ModAssign,
    /// `^`
    #[token("^")]
    Caret,
    /// `^=`
    #[token("^=")]
    PowAssign,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `:`
    #[token(":")]
    Colon,

    /// Newlines are trivia, but they advance the line counter.
    #[regex(r"\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    Newline,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Decodes a numeric literal from the current token slice.
fn lex_number(lex: &mut logos::Lexer<Token>) -> Result<f64, LexicalErrorKind> {
    let slice = lex.slice();
    if let Ok(value) = slice.parse() {
        return Ok(value);
    }
    // `5.e3` is valid source; normalize the bare point before the exponent
    slice.replacen(".e", "e", 1)
         .replacen(".E", "E", 1)
         .parse()
         .map_err(|_| LexicalErrorKind::InvalidNumber)
}

/// Rejects a numeric literal whose exponent has no digits.
fn malformed_exponent(_lex: &mut logos::Lexer<Token>) -> Result<f64, LexicalErrorKind> {
    Err(LexicalErrorKind::MalformedExponent)
}

/// Rejects a string literal still open at the end of input.
fn unterminated_string(_lex: &mut logos::Lexer<Token>) -> Result<String, LexicalErrorKind> {
    Err(LexicalErrorKind::UnterminatedString)
}

/// Decodes a terminated string literal, processing escape sequences.
///
/// Unknown escapes keep the backslash and the following character verbatim.
/// Newlines inside the literal still advance the line counter.
fn lex_string(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    let body = &slice[1..slice.len() - 1];
    lex.extras.line += body.chars().filter(|&c| c == '\n').count();

    let mut result = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some('"') => result.push('"'),
            Some('\\') => result.push('\\'),
            Some('b') => result.push('\u{0008}'),
            Some('f') => result.push('\u{000C}'),
            Some('v') => result.push('\u{000B}'),
            Some('a') => result.push('\u{0007}'),
            Some('0') => result.push('\0'),
            Some(other) => {
                result.push('\\');
                result.push(other);
            },
            None => result.push('\\'),
        }
    }
    result
}
