use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Node},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_logical_or, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program: statements until the end of input.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The top-level statement sequence that owns the tree.
///
/// # Errors
/// Propagates the first parse error; there is no recovery.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Node>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();
    while tokens.peek().is_some() {
        statements.push(parse_statement(tokens)?);
    }
    Ok(statements)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, assignment, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := assignment`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_assignment(tokens)
}

/// Parses an assignment, plain or compound.
///
/// Assignment is right-associative and its target must be a bare
/// identifier: the left side is parsed as an ordinary expression first, and
/// anything but a variable in front of an assignment operator is rejected.
///
/// Grammar: `assignment := logical_or (("=" | "+=" | "-=" | "*=" | "/=" |
/// "%=" | "^=") assignment)?`
///
/// # Errors
/// - `InvalidAssignmentTarget` when the left side is not an identifier (for
///   example an index or slice expression).
/// - Propagates any errors from sub-expression parsing.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = parse_logical_or(tokens)?;

    let Some((token, line)) = tokens.peek() else {
        return Ok(expr);
    };
    let Some(op) = assignment_operator(token) else {
        return Ok(expr);
    };
    let line = *line;

    match expr {
        Node::Variable { name, .. } => {
            tokens.next();
            let value = parse_assignment(tokens)?;
            Ok(Node::Assign { name,
                              op,
                              value: Box::new(value),
                              line })
        },
        _ => Err(ParseError::InvalidAssignmentTarget { line }),
    }
}

/// Maps an assignment token to its combining operator.
///
/// Returns `Some(None)` for plain `=`, `Some(Some(op))` for the compound
/// forms, and `None` for anything that is not an assignment operator.
fn assignment_operator(token: &Token) -> Option<Option<BinaryOperator>> {
    match token {
        Token::Equals => Some(None),
        Token::PlusAssign => Some(Some(BinaryOperator::Add)),
        Token::MinusAssign => Some(Some(BinaryOperator::Sub)),
        Token::MulAssign => Some(Some(BinaryOperator::Mul)),
        Token::DivAssign => Some(Some(BinaryOperator::Div)),
        Token::ModAssign => Some(Some(BinaryOperator::Mod)),
        Token::PowAssign => Some(Some(BinaryOperator::Pow)),
        _ => None,
    }
}
