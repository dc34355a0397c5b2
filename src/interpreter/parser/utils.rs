use std::iter::Peekable;

use crate::{
    error::SyntaxError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Parses `item ("," item)*` followed by `closing`, or just `closing`.
///
/// Shared by call arguments, parameter lists and list literals. A trailing
/// comma is rejected because an item must follow every comma.
///
/// # Errors
/// The first failing item, a token that is neither `,` nor `closing`, or the
/// end of input.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if tokens.next_if(|(tok, _)| tok == closing).is_some() {
        return Ok(Vec::new());
    }

    let mut items = vec![parse_item(tokens)?];
    while tokens.next_if(|(tok, _)| *tok == Token::Comma).is_some() {
        items.push(parse_item(tokens)?);
    }

    match tokens.next() {
        Some((tok, _)) if tok == closing => Ok(items),
        Some((tok, line)) => Err(SyntaxError::ExpectedToken { expected: format!("',' or {closing:?}"),
                                                              found:    format!("{tok:?}"),
                                                              line:     *line, }),
        None => Err(SyntaxError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Consumes an identifier and returns its name.
///
/// # Errors
/// `ExpectedToken` for any other token, `UnexpectedEndOfInput` at the end.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(s), _)) => Ok(s.clone()),
        Some((tok, line)) => Err(SyntaxError::ExpectedToken { expected: "identifier".to_string(),
                                                              found:    format!("{tok:?}"),
                                                              line:     *line, }),
        None => Err(SyntaxError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Consumes the next token if it equals `expected`.
///
/// # Returns
/// The line of the consumed token.
///
/// # Errors
/// Returns `ExpectedToken` naming `description` when a different token is
/// found, or `UnexpectedEndOfInput` at the end of the stream.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                                                          expected: &Token,
                                                          description: &str)
                                                          -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, line)) if tok == expected => Ok(*line),
        Some((tok, line)) => Err(SyntaxError::ExpectedToken { expected: description.to_string(),
                                                              found:    format!("{tok:?}"),
                                                              line:     *line, }),
        None => Err(SyntaxError::UnexpectedEndOfInput { line: 0 }),
    }
}
