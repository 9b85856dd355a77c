/// The environment module holds variable scopes.
///
/// An environment is one flat mapping from names to values. The top level
/// owns one; every function call gets a fresh one containing only its bound
/// parameters. Scopes never nest; the language has no closures.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST against an environment, evaluates
/// expressions, runs statements, captures printed values, and signals
/// control flow (return/break/continue) as explicit result values. It is the
/// core execution engine of the interpreter.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as
/// numbers, strings, identifiers, keywords, operators, and delimiters. This
/// is the first stage of interpretation.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer over a single
/// token of look-ahead and constructs the AST representing the program's
/// statements and expressions. The first malformed construct aborts parsing;
/// there is no recovery.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the five value kinds (null, number, string, list,
/// function), their sharing and copy semantics, truthiness, and the
/// rendering of captured print values.
pub mod value;
