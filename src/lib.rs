//! # briar
//!
//! briar is an embeddable tree-walking interpreter for a small
//! dynamically-typed scripting language: C-like expressions,
//! `if/then/else/end`, `for`-in and `while` loops, first-class functions
//! without closures, lists, strings with Python-style slicing, and a
//! built-in function library.
//!
//! The embedding contract is source text in, output out: [`interpret`]
//! returns a success flag and either the rendered print stream or a
//! diagnostic, while [`run`] hands the host the raw ordered sequence of
//! printed values.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use logos::Logos;

use crate::{
    error::{Error, LexicalError, RuntimeError},
    interpreter::{
        environment::Environment,
        evaluator::core::{Context, Flow},
        lexer::{LexerExtras, Token},
        parser::core::parse_program,
        value::{core::Value, render::render},
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum and related types that represent
/// the syntactic structure of source code as a tree. The AST is built by
/// the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines one closed node type covering every language construct.
/// - Attaches source line numbers to nodes for error reporting.
/// - Shares function bodies so runtime function values keep them alive.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised while interpreting
/// source code. It standardizes error reporting and carries line numbers
/// for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representation, and scoping to provide a complete runtime for the
/// language.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, values,
///   environments.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities shared across the interpreter.
///
/// # Responsibilities
/// - Provides the canonical number formatting used by rendering and string
///   coercion.
pub mod util;

/// Interprets a program, producing the output a host would display.
///
/// On success the second element is the concatenation of every printed
/// value's rendering, in print order, with no separators beyond what the
/// program printed itself. On failure it is the diagnostic text, and
/// whatever was printed before the failure is discarded; the whole run is
/// abandoned.
///
/// # Examples
/// ```
/// use briar::interpret;
///
/// let (ok, output) = interpret("print(1 + 2)");
/// assert!(ok);
/// assert_eq!(output, "3");
///
/// let (ok, output) = interpret("print(missing)");
/// assert!(!ok);
/// assert_eq!(output, "Error on line 1: Undefined variable 'missing'.");
/// ```
#[must_use]
pub fn interpret(source: &str) -> (bool, String) {
    match run(source) {
        Ok(values) => (true, render(&values)),
        Err(error) => (false, error.to_string()),
    }
}

/// Runs a program and returns the ordered sequence of printed values.
///
/// This is the embedding API for hosts that render output themselves. The
/// whole source is tokenized and parsed up front; statements then execute
/// against a single top-level environment. A control signal reaching the
/// top level (`return` outside a function, `break`/`continue` outside a
/// loop) is a runtime error, not a crash.
///
/// # Errors
/// The first lexical, parse, or runtime error, which aborts the entire
/// interpretation.
pub fn run(source: &str) -> Result<Vec<Value>, Error> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();
    let program = parse_program(&mut iter)?;

    let mut context = Context::new();
    let mut globals = Environment::new();
    for statement in &program {
        match context.exec(statement, &mut globals)? {
            Flow::Normal => {},
            Flow::Return { line, .. } => {
                return Err(RuntimeError::ReturnOutsideFunction { line }.into());
            },
            Flow::Break { line } => return Err(RuntimeError::BreakOutsideLoop { line }.into()),
            Flow::Continue { line } => {
                return Err(RuntimeError::ContinueOutsideLoop { line }.into());
            },
        }
    }
    Ok(context.into_output())
}

/// Tokenizes the whole source, pairing each token with its line number.
fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, Error> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push((tok, lexer.extras.line)),
            Err(kind) => {
                return Err(LexicalError::from_kind(kind, lexer.slice(), lexer.extras.line).into());
            },
        }
    }
    Ok(tokens)
}
