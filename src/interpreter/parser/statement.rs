use std::iter::Peekable;

use crate::{
    ast::{IfBranch, Node},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect_token, parse_block, parse_identifier},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - `return expr`
/// - `print(expr)`
/// - an `if` statement
/// - a `for` or `while` loop
/// - `break` / `continue`
/// - a bare expression (which covers assignment)
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Node`].
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Return, line)) => {
            let line = *line;
            tokens.next();
            let expr = parse_expression(tokens)?;
            Ok(Node::Return { expr: Box::new(expr),
                              line })
        },
        Some((Token::Print, _)) => parse_print(tokens),
        Some((Token::If, _)) => parse_if(tokens),
        Some((Token::For, _)) => parse_for(tokens),
        Some((Token::While, _)) => parse_while(tokens),
        Some((Token::Break, line)) => {
            let line = *line;
            tokens.next();
            Ok(Node::Break { line })
        },
        Some((Token::Continue, line)) => {
            let line = *line;
            tokens.next();
            Ok(Node::Continue { line })
        },
        Some(_) => parse_expression(tokens),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses a `print(expr)` statement.
///
/// The parentheses are required. `print` exists only in statement position;
/// it cannot appear inside a larger expression.
fn parse_print<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((_, line)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { line: 0 });
    };
    let line = *line;

    expect_token(tokens, &Token::LParen, "'(' after 'print'", line)?;
    let expr = parse_expression(tokens)?;
    expect_token(tokens, &Token::RParen, "')' after print expression", line)?;

    Ok(Node::Print { expr: Box::new(expr),
                     line })
}

/// Parses an `if` statement with chained `else if` arms and an optional
/// `else` body.
///
/// Syntax:
/// ```text
///     if <condition> then <statements>
///     else if <condition> then <statements>
///     else <statements>
///     end if
/// ```
///
/// # Errors
/// - `UnexpectedToken` if `then` is missing after a condition.
/// - `UnmatchedBlockKeyword` if `end` is not followed by `if`.
fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((_, line)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { line: 0 });
    };
    let line = *line;

    let condition = parse_expression(tokens)?;
    expect_token(tokens, &Token::Then, "'then' after if condition", line)?;
    let body = parse_block(tokens, &[Token::Else, Token::End], line)?;

    let mut branches = vec![IfBranch { condition, body }];
    let mut else_body = Vec::new();

    while let Some((Token::Else, else_line)) = tokens.peek() {
        let else_line = *else_line;
        tokens.next();

        if let Some((Token::If, _)) = tokens.peek() {
            tokens.next();
            let condition = parse_expression(tokens)?;
            expect_token(tokens, &Token::Then, "'then' after else if condition", else_line)?;
            let body = parse_block(tokens, &[Token::Else, Token::End], else_line)?;
            branches.push(IfBranch { condition, body });
        } else {
            else_body = parse_block(tokens, &[Token::End], else_line)?;
            break;
        }
    }

    expect_block_end(tokens, &Token::If, "if", line)?;

    Ok(Node::If { branches,
                  else_body,
                  line })
}

/// Parses a `for ident in expr … end for` loop.
///
/// A `do` keyword may optionally follow the iterable expression.
fn parse_for<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((_, line)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { line: 0 });
    };
    let line = *line;

    let var = parse_identifier(tokens, line)?;
    expect_token(tokens, &Token::In, "'in' after the loop variable", line)?;
    let iterable = parse_expression(tokens)?;
    if let Some((Token::Do, _)) = tokens.peek() {
        tokens.next();
    }

    let body = parse_block(tokens, &[Token::End], line)?;
    expect_block_end(tokens, &Token::For, "for", line)?;

    Ok(Node::For { var,
                   iterable: Box::new(iterable),
                   body,
                   line })
}

/// Parses a `while cond … end while` loop.
///
/// A `do` keyword may optionally follow the condition.
fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((_, line)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { line: 0 });
    };
    let line = *line;

    let condition = parse_expression(tokens)?;
    if let Some((Token::Do, _)) = tokens.peek() {
        tokens.next();
    }

    let body = parse_block(tokens, &[Token::End], line)?;
    expect_block_end(tokens, &Token::While, "while", line)?;

    Ok(Node::While { condition: Box::new(condition),
                     body,
                     line })
}

/// Consumes `end <keyword>`, closing a block.
///
/// # Errors
/// - `UnexpectedToken` when `end` itself is missing.
/// - `UnmatchedBlockKeyword` when the keyword after `end` is wrong.
fn expect_block_end<'a, I>(tokens: &mut Peekable<I>,
                           keyword: &Token,
                           name: &'static str,
                           line: usize)
                           -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::End, _)) => {},
        Some((tok, line)) => {
            return Err(ParseError::UnexpectedToken { token: format!("Expected 'end' to close the {name} block, found {tok:?}"),
                                                     line:  *line, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line }),
    }
    match tokens.next() {
        Some((tok, _)) if tok == keyword => Ok(()),
        Some((_, line)) => {
            Err(ParseError::UnmatchedBlockKeyword { expected: name,
                                                    line:     *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}
