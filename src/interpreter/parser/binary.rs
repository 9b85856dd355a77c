use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Node},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses logical-or expressions, the lowest operator precedence level.
///
/// Grammar: `logical_or := logical_and ("or" logical_and)*`
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, &[BinaryOperator::Or], parse_logical_and)
}

/// Parses logical-and expressions.
///
/// Grammar: `logical_and := equality ("and" equality)*`
fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, &[BinaryOperator::And], parse_equality)
}

/// Parses equality expressions (`==`, `!=`).
///
/// Grammar: `equality := comparison (("==" | "!=") comparison)*`
fn parse_equality<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens,
                           &[BinaryOperator::Equal, BinaryOperator::NotEqual],
                           parse_comparison)
}

/// Parses relational expressions (`<`, `>`, `<=`, `>=`).
///
/// Grammar: `comparison := additive (("<" | ">" | "<=" | ">=") additive)*`
fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens,
                           &[BinaryOperator::Less,
                             BinaryOperator::Greater,
                             BinaryOperator::LessEqual,
                             BinaryOperator::GreaterEqual],
                           parse_additive)
}

/// Parses addition and subtraction expressions.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens,
                           &[BinaryOperator::Add, BinaryOperator::Sub],
                           parse_multiplicative)
}

/// Parses multiplication-level expressions (`*`, `/`, `%`).
///
/// Grammar: `multiplicative := power (("*" | "/" | "%") power)*`
fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens,
                           &[BinaryOperator::Mul, BinaryOperator::Div, BinaryOperator::Mod],
                           parse_power)
}

/// Parses exponentiation expressions.
///
/// This grammar parses `^` left-associatively, so `2 ^ 3 ^ 2` is
/// `(2 ^ 3) ^ 2`, not the mathematically conventional right association.
/// Kept exactly for compatibility.
///
/// Grammar: `power := unary ("^" unary)*`
fn parse_power<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, &[BinaryOperator::Pow], parse_unary)
}

/// Parses one left-associative precedence level.
///
/// Repeatedly combines `parse_operand` results while the next token maps to
/// one of the level's operators.
fn parse_left_associative<'a, I>(tokens: &mut Peekable<I>,
                                 operators: &[BinaryOperator],
                                 parse_operand: impl Fn(&mut Peekable<I>) -> ParseResult<Node>)
                                 -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_operand(tokens)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && operators.contains(&op)
        {
            let line = *line;
            tokens.next();
            let right = parse_operand(tokens)?;
            left = Node::BinaryOp { op,
                                    left: Box::new(left),
                                    right: Box::new(right),
                                    line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Caret => Some(BinaryOperator::Pow),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::And => Some(BinaryOperator::And),
        Token::Or => Some(BinaryOperator::Or),
        _ => None,
    }
}
