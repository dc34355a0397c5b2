use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            unary::{parse_logical_not, parse_postfix},
        },
    },
};

/// Parses one left-associative precedence level.
///
/// Operands are parsed with `next`; any operator for which `accepts` returns
/// `true` folds the operands into a left-leaning `Expr::BinaryOp` chain.
///
/// `next` parses the operands (the next-tighter level) and `accepts` picks
/// this level's operators out of [`token_to_binary_operator`].
fn parse_left_assoc<'a, I>(tokens: &mut Peekable<I>,
                           next: impl Fn(&mut Peekable<I>) -> ParseResult<Expr>,
                           accepts: impl Fn(BinaryOperator) -> bool)
                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = next(tokens)?;

    while let Some(&item) = tokens.peek()
          && let Some(op) = token_to_binary_operator(&item.0)
          && accepts(op)
    {
        let line = item.1;
        tokens.next();
        let right = next(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line };
    }

    Ok(left)
}

/// Entry point for a full expression: `OR` binds loosest of everything.
///
/// Grammar: `logical_or := logical_and ("OR" logical_and)*`
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens, parse_logical_and, |op| op == BinaryOperator::Or)
}

/// `AND` chains, one level above `OR` and one below `NOT`.
///
/// Grammar: `logical_and := logical_not ("AND" logical_not)*`
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens, parse_logical_not, |op| op == BinaryOperator::And)
}

/// Parses `==` and `!=`.
///
/// Grammar: `equality := relational (("==" | "!=") relational)*`
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens, parse_relational, |op| {
        matches!(op, BinaryOperator::Equal | BinaryOperator::NotEqual)
    })
}

/// Ordering comparisons. `a < b < c` is accepted and groups as
/// `(a < b) < c`, comparing the integer result of the first test.
///
/// Grammar: `relational := additive (("<" | "<=" | ">" | ">=") additive)*`
pub fn parse_relational<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens, parse_additive, is_ordering_op)
}

/// `+` and `-`, grouping to the left so `10 - 4 - 3` is `3`.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens, parse_multiplicative, |op| {
        matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    })
}

/// `*`, `/`, `//` and `%`, all sharing one level.
///
/// Grammar: `multiplicative := power (("*" | "/" | "//" | "%") power)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens, parse_power, |op| {
        matches!(op,
                 BinaryOperator::Mul
                 | BinaryOperator::Div
                 | BinaryOperator::FloorDiv
                 | BinaryOperator::Mod)
    })
}

/// `**`, the only right-associative operator: the exponent is parsed by
/// recursing into this level, so `a ** b ** c` becomes `a ** (b ** c)`.
///
/// Grammar: `power := postfix ("**" power)?`
///
/// # Errors
/// Whatever the operand parsers report.
///
/// # Example
/// ```
/// use quill::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{lexer::tokenize, parser::binary::parse_power},
/// };
///
/// let tokens = tokenize("2 ** 3 ** 2").unwrap();
/// let expr = parse_power(&mut tokens.iter().peekable()).unwrap();
///
/// let Expr::BinaryOp { right, .. } = expr else { panic!("expected a power") };
/// assert!(matches!(*right,
///                  Expr::BinaryOp { op: BinaryOperator::Pow, .. }));
/// ```
pub fn parse_power<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let base = parse_postfix(tokens)?;

    if let Some((Token::DoubleStar, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let exponent = parse_power(tokens)?;

        return Ok(Expr::BinaryOp { left: Box::new(base),
                                   op: BinaryOperator::Pow,
                                   right: Box::new(exponent),
                                   line });
    }

    Ok(base)
}

/// The binary operator a token spells, if any. `=` is assignment, not an
/// operator, and maps to `None` like every non-operator token.
///
/// # Example
/// ```
/// use quill::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::DoubleSlash),
///            Some(BinaryOperator::FloorDiv));
/// assert_eq!(token_to_binary_operator(&Token::Equals), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::DoubleSlash => Some(BinaryOperator::FloorDiv),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::DoubleStar => Some(BinaryOperator::Pow),
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

/// Returns `true` for the ordering operators `<`, `<=`, `>` and `>=`.
///
/// # Example
/// ```
/// use quill::{ast::BinaryOperator, interpreter::parser::binary::is_ordering_op};
///
/// assert!(is_ordering_op(BinaryOperator::Less));
/// assert!(!is_ordering_op(BinaryOperator::Equal));
/// ```
#[must_use]
pub const fn is_ordering_op(op: BinaryOperator) -> bool {
    matches!(op,
             BinaryOperator::Less
             | BinaryOperator::Greater
             | BinaryOperator::LessEqual
             | BinaryOperator::GreaterEqual)
}
