/// Binary operator evaluation logic.
///
/// Handles all binary operations across the five value kinds, including the
/// string and list coercion rules.
pub mod binary;
/// Core evaluation logic and context management.
///
/// Contains the evaluation context (which owns the print sink), the result
/// and control-flow types, and expression dispatch.
pub mod core;
/// Statement execution.
///
/// Runs statements against an environment: print capture, conditionals,
/// loops, and the propagation of return/break/continue signals.
pub mod exec;
/// Function call evaluation.
///
/// Handles builtin lookup, user-defined calls, argument binding, and the
/// builtin function library itself.
pub mod function;
/// Indexing and slicing evaluation.
///
/// Implements element access and Python-style slicing for strings and
/// lists, including negative-index wrapping and bound clamping.
pub mod index;
/// Unary operator evaluation logic.
///
/// Implements arithmetic identity, negation, and logical NOT.
pub mod unary;
