use std::iter::Peekable;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, statement::parse_statement},
    },
};

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by call argument lists and function parameter
/// lists. It repeatedly calls `parse_item`, expecting either a comma to
/// continue the list or the closing token to end it (which is consumed).
/// An immediately encountered closing token produces an empty list; a
/// trailing comma is not allowed here (list literals, which do allow one,
/// have their own loop).
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse, an unexpected token is
/// encountered, or the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token,
    line: usize)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();
        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
            },
            Some((tok, _)) if tok == closing => {
                tokens.next();
                break;
            },
            Some((tok, line)) => {
                return Err(ParseError::UnexpectedToken { token: format!("Expected ',' or {closing:?}, found {tok:?}"),
                                                         line:  *line, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line }),
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier or the
/// input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>,
                                                              line: usize)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(s), _)) => Ok(s.clone()),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected identifier, found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Consumes the next token, requiring it to equal `expected`.
///
/// `context` describes the construct for the error message, e.g.
/// `"'(' after print"`.
///
/// # Errors
/// Returns a `ParseError` naming the expectation when the token differs or
/// the input ends.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                                                          expected: &Token,
                                                          context: &str,
                                                          line: usize)
                                                          -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, _)) if tok == expected => Ok(()),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected {context}, found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Parses statements until one of the terminator tokens is next.
///
/// The terminator itself is left in the stream for the caller to consume.
/// Running out of input before a terminator is an error: blocks must be
/// closed.
pub(in crate::interpreter::parser) fn parse_block<'a, I>(tokens: &mut Peekable<I>,
                                                         terminators: &[Token],
                                                         line: usize)
                                                         -> ParseResult<Vec<Node>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut body = Vec::new();
    loop {
        match tokens.peek() {
            Some((tok, _)) if terminators.contains(tok) => break,
            Some(_) => body.push(parse_statement(tokens)?),
            None => return Err(ParseError::UnexpectedEndOfInput { line }),
        }
    }
    Ok(body)
}
