use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::SyntaxError,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, statement::parse_statement, utils::expect_token},
    },
};

/// Parses a block delimited by braces.
///
/// A block consists of zero or more statements. Parsing continues until the
/// matching closing `}` token is consumed.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
///
/// # Returns
/// The statements of the block together with the line of the opening brace.
///
/// # Errors
/// - `ExpectedToken` if the stream does not start with `{`.
/// - `UnexpectedEndOfInput` if the closing brace is missing.
/// - Propagates any errors from statement parsing.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<(Vec<Statement>, usize)>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::LBrace, "'{'")?;
    let mut statements = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some(_) => statements.push(parse_statement(tokens)?),
            None => return Err(SyntaxError::UnexpectedEndOfInput { line: 0 }),
        }
    }

    Ok((statements, line))
}
