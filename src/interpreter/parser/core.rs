use std::iter::Peekable;

use crate::{
    ast::{Expr, Program},
    error::SyntaxError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::{binary::parse_logical_or, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Parses a complete source text into a program.
///
/// The text is tokenized first; any tokenization failure is reported as a
/// syntax error. The token stream must then be consumed entirely by
/// top-level statements.
///
/// # Errors
/// Returns the first [`SyntaxError`] encountered.
///
/// # Example
/// ```
/// use quill::interpreter::parser::core::parse;
///
/// let program = parse("x = 1;\nprint x + 1;").unwrap();
/// assert_eq!(program.statements.len(), 2);
///
/// assert!(parse("x = (1;").is_err());
/// ```
pub fn parse(source: &str) -> ParseResult<Program> {
    let tokens = tokenize(source)?;
    let last_line = tokens.last().map_or(1, |(_, line)| *line);

    let mut iter = tokens.iter().peekable();

    parse_program(&mut iter).map_err(|e| match e {
                                // End-of-input errors raised deep in the grammar do not know the
                                // last line, so fill it in here.
                                SyntaxError::UnexpectedEndOfInput { line: 0 } => {
                                    SyntaxError::UnexpectedEndOfInput { line: last_line }
                                },
                                other => other,
                            })
}

/// Parses statements until the token stream is exhausted.
///
/// Grammar: `program := statement*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The program holding every top-level statement in order.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Program>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();

    while tokens.peek().is_some() {
        statements.push(parse_statement(tokens)?);
    }

    Ok(Program { statements })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, logical OR, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := logical_or`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_logical_or(tokens)
}
