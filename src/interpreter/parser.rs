/// Binary expression parsing.
///
/// Implements the precedence-climbing levels from logical `or` down to the
/// (left-associative) power operator.
pub mod binary;
/// Core parsing entry points.
///
/// Contains the parse result alias, the program loop, and expression parsing
/// from the assignment level down.
pub mod core;
/// Statement parsing.
///
/// Parses `print`, `return`, `if`/`else if`/`else`, `for`, `while`, `break`,
/// `continue`, and bare expression statements.
pub mod statement;
/// Unary, postfix, and atom parsing.
///
/// Handles unary operators, call/index/slice postfix chains, literals,
/// parenthesized expressions, list literals, and function literals.
pub mod unary;
/// Utility functions for the parser.
///
/// Provides shared helpers for delimited lists, identifiers, and expected
/// tokens.
pub mod utils;
