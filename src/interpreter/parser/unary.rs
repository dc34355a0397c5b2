use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::SyntaxError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_equality,
            core::{ParseResult, parse_expression},
            utils::{expect_token, parse_comma_separated},
        },
    },
};

/// Parses a logical negation.
///
/// `NOT` is a right-recursive prefix operator, so `NOT NOT x` parses as
/// `NOT (NOT x)`. It binds looser than every comparison: `NOT a == b` negates
/// the whole comparison.
///
/// Grammar:
/// ```text
///     logical_not := "NOT" logical_not
///                  | equality
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or the equality-level expression.
pub fn parse_logical_not<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Not, line)) = tokens.peek() {
        let line = *line;
        tokens.next();
        let expr = parse_logical_not(tokens)?;
        Ok(Expr::UnaryOp { op: UnaryOperator::Not,
                           expr: Box::new(expr),
                           line })
    } else {
        parse_equality(tokens)
    }
}

/// Parses a primary expression followed by any number of index operations.
///
/// `grid[1][2]` parses as `(grid[1])[2]`.
///
/// Grammar: `postfix := primary ("[" expression "]")*`
pub fn parse_postfix<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut node = parse_primary(tokens)?;

    while let Some((Token::LBracket, line)) = tokens.peek() {
        let line = *line;
        tokens.next();
        let index = parse_expression(tokens)?;
        expect_token(tokens, &Token::RBracket, "']' after index")?;
        node = Expr::Index { container: Box::new(node),
                             index: Box::new(index),
                             line };
    }

    Ok(node)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric, string and boolean literals
/// - identifiers
/// - function calls
/// - parenthesized expressions
/// - list literals (`[ ... ]`) and the empty list `[]`
///
/// Grammar (simplified):
/// ```text
///     primary := literal
///              | identifier_or_call
///              | "(" expression ")"
///              | "[" expression ("," expression)* "]"
///              | "[]"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `SyntaxError` on failure.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(SyntaxError::UnexpectedEndOfInput { line: 0 })?;

    match peeked {
        (Token::Real(..) | Token::Integer(..) | Token::Bool(..) | Token::Str(..), _) => {
            parse_literal(tokens)
        },
        (Token::LParen, _) => parse_grouping(tokens),
        (Token::LBracket, _) => parse_list_literal(tokens),
        (Token::EmptyList, line) => {
            let line = *line;
            tokens.next();
            Ok(Expr::ListLiteral { elements: Vec::new(),
                                   line })
        },
        (Token::Identifier(_), _) => parse_identifier_or_call(tokens),
        (tok, line) => Err(SyntaxError::UnexpectedToken { token: format!("{tok:?}"),
                                                          line:  *line, }),
    }
}

/// Parses a literal token into an [`Expr::Literal`].
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (value, line) = match tokens.next() {
        Some((Token::Integer(n), line)) => (LiteralValue::from(*n), *line),
        Some((Token::Real(n), line)) => (LiteralValue::from(*n), *line),
        Some((Token::Bool(b), line)) => (LiteralValue::from(*b), *line),
        Some((Token::Str(s), line)) => (LiteralValue::from(s.as_str()), *line),
        Some((tok, line)) => {
            return Err(SyntaxError::UnexpectedToken { token: format!("{tok:?}"),
                                                      line:  *line, });
        },
        None => return Err(SyntaxError::UnexpectedEndOfInput { line: 0 }),
    };

    Ok(Expr::Literal { value, line })
}

/// Parses `"(" expression ")"`. The parentheses leave no trace in the tree.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect_token(tokens, &Token::LParen, "'('")?;
    let expr = parse_expression(tokens)?;
    expect_token(tokens, &Token::RParen, "')'")?;
    Ok(expr)
}

/// Parses a non-empty list literal.
///
/// `[ ]` written with whitespace is not the empty list and is rejected; only
/// the `[]` token denotes an empty list.
fn parse_list_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::LBracket, "'['")?;

    if let Some((Token::RBracket, line)) = tokens.peek() {
        return Err(SyntaxError::UnexpectedToken { token: format!("{:?}", Token::RBracket),
                                                  line:  *line, });
    }

    let elements = parse_comma_separated(tokens, parse_expression, &Token::RBracket)?;

    Ok(Expr::ListLiteral { elements, line })
}

/// Parses a variable reference or, when followed by `(`, a function call.
fn parse_identifier_or_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, line) = match tokens.next() {
        Some((Token::Identifier(n), line)) => (n.clone(), *line),
        Some((tok, line)) => {
            return Err(SyntaxError::UnexpectedToken { token: format!("{tok:?}"),
                                                      line:  *line, });
        },
        None => {
            return Err(SyntaxError::UnexpectedEndOfInput { line: 0 });
        },
    };

    match tokens.peek() {
        Some((Token::LParen, _)) => {
            tokens.next();
            let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
            Ok(Expr::FunctionCall { name,
                                    arguments,
                                    line })
        },
        _ => Ok(Expr::Variable { name, line }),
    }
}
