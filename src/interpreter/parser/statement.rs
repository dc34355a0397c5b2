use std::iter::Peekable;

use log::trace;

use crate::{
    ast::{AssignTarget, FunctionDef, Statement},
    error::SyntaxError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{expect_token, parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a block (`{ ... }`),
/// - an `if` statement, with or without `else`,
/// - a `while` loop,
/// - a `print` or `return` statement,
/// - a function definition,
/// - an assignment,
/// - an expression used as a statement.
///
/// Keyword-led statements are dispatched on their first token. A function
/// definition is recognised by lookahead; anything else is parsed as an
/// expression, which becomes an assignment target when followed by `=`.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let statement = match tokens.peek() {
        Some((Token::LBrace, _)) => {
            let (statements, line) = parse_block(tokens)?;
            Statement::Block { statements, line }
        },
        Some((Token::If, _)) => parse_if(tokens)?,
        Some((Token::While, _)) => parse_while(tokens)?,
        Some((Token::Print, _)) => parse_print(tokens)?,
        Some((Token::Return, _)) => parse_return(tokens)?,
        Some(_) => match parse_function_definition(tokens)? {
            Some(def) => Statement::Function(def),
            None => parse_assignment_or_expression(tokens)?,
        },
        None => return Err(SyntaxError::UnexpectedEndOfInput { line: 0 }),
    };

    trace!("parsed {} statement on line {}",
           statement.kind(),
           statement.line_number());

    Ok(statement)
}

/// Parses a conditional.
///
/// Grammar:
/// ```text
///     if := "if" "(" expression ")" statement ("else" statement)?
/// ```
///
/// An `else` always attaches to the nearest `if` that has none yet, so
/// `if (a) if (b) x; else y;` gives the `else` to `if (b)`.
fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::If, "'if'")?;
    expect_token(tokens, &Token::LParen, "'(' after 'if'")?;
    let condition = parse_expression(tokens)?;
    expect_token(tokens, &Token::RParen, "')' after condition")?;

    let then_branch = Box::new(parse_statement(tokens)?);

    if let Some((Token::Else, _)) = tokens.peek() {
        tokens.next();
        let else_branch = Box::new(parse_statement(tokens)?);

        return Ok(Statement::IfElse { condition,
                                      then_branch,
                                      else_branch,
                                      line });
    }

    Ok(Statement::If { condition,
                       then_branch,
                       line })
}

/// Parses `"while" "(" expression ")" block`.
fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::While, "'while'")?;
    expect_token(tokens, &Token::LParen, "'(' after 'while'")?;
    let condition = parse_expression(tokens)?;
    expect_token(tokens, &Token::RParen, "')' after condition")?;

    let (body, _) = parse_block(tokens)?;

    Ok(Statement::While { condition,
                          body,
                          line })
}

/// Parses `"print" expression ";"`.
fn parse_print<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::Print, "'print'")?;
    let value = parse_expression(tokens)?;
    expect_token(tokens, &Token::Semicolon, "';'")?;

    Ok(Statement::Print { value, line })
}

/// Parses `"return" expression? ";"`.
fn parse_return<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::Return, "'return'")?;

    if let Some((Token::Semicolon, _)) = tokens.peek() {
        tokens.next();
        return Ok(Statement::Return { value: None,
                                      line });
    }

    let value = parse_expression(tokens)?;
    expect_token(tokens, &Token::Semicolon, "';'")?;

    Ok(Statement::Return { value: Some(value),
                           line })
}

/// Parses a function definition of the form `name(a, b) { ... }`.
///
/// The definition is recognised by scanning ahead on a cloned iterator: an
/// identifier, a balanced parenthesised group, then `{`. A call statement
/// such as `f(1);` fails the scan and leaves the stream untouched.
///
/// # Returns
/// - `Ok(Some(def))` if a definition was parsed,
/// - `Ok(None)` if the tokens do not start a definition.
fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<FunctionDef>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((Token::Identifier(_), line)) = tokens.peek() else {
        return Ok(None);
    };
    let line = *line;

    let mut lookahead = tokens.clone();
    lookahead.next();

    if !matches!(lookahead.next(), Some((Token::LParen, _))) {
        return Ok(None);
    }

    let mut parens = 1;
    while parens > 0 {
        match lookahead.next() {
            Some((Token::LParen, _)) => parens += 1,
            Some((Token::RParen, _)) => parens -= 1,
            Some(_) => {},
            None => return Ok(None),
        }
    }

    if !matches!(lookahead.peek(), Some((Token::LBrace, _))) {
        return Ok(None);
    }

    let name = parse_identifier(tokens)?;
    expect_token(tokens, &Token::LParen, "'('")?;
    let params = parse_comma_separated(tokens, parse_identifier, &Token::RParen)?;
    let (body, _) = parse_block(tokens)?;

    Ok(Some(FunctionDef { name,
                          params,
                          body,
                          line }))
}

/// Parses `target "=" expression ";"` or `expression ";"`.
///
/// The left side is parsed as an ordinary expression first. When an `=`
/// follows, the expression must be a name or an index chain rooted at a
/// name, otherwise the statement is an invalid assignment.
fn parse_assignment_or_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = tokens.peek().map_or(0, |(_, l)| *l);
    let expr = parse_expression(tokens)?;

    if let Some((Token::Equals, eq_line)) = tokens.peek() {
        let eq_line = *eq_line;
        tokens.next();

        let target = AssignTarget::from_expr(expr)
            .ok_or(SyntaxError::InvalidAssignmentTarget { line: eq_line })?;
        let value = parse_expression(tokens)?;
        expect_token(tokens, &Token::Semicolon, "';'")?;

        return Ok(Statement::Assign { target,
                                      value,
                                      line });
    }

    expect_token(tokens, &Token::Semicolon, "';'")?;

    Ok(Statement::Expression { expr, line })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        ast::{AssignTarget, BinaryOperator, Expr, LiteralValue, Statement, UnaryOperator},
        error::SyntaxError,
        interpreter::parser::core::parse,
    };

    fn single(source: &str) -> Statement {
        let mut program = parse(source).unwrap();
        assert_eq!(program.statements.len(), 1, "expected one statement in {source:?}");
        program.statements.remove(0)
    }

    fn expr_of(source: &str) -> Expr {
        match single(source) {
            Statement::Expression { expr, .. } => expr,
            other => panic!("expected an expression statement, got {other:?}"),
        }
    }

    fn int(value: i64) -> Expr {
        Expr::Literal { value: LiteralValue::Integer(value),
                        line:  1, }
    }

    fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
        Expr::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right),
                         line: 1 }
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert_eq!(expr_of("1 + 2 * 3;"),
                   binary(int(1),
                          BinaryOperator::Add,
                          binary(int(2), BinaryOperator::Mul, int(3))));
    }

    #[test]
    fn subtraction_is_left_associative() {
        assert_eq!(expr_of("7 - 2 - 1;"),
                   binary(binary(int(7), BinaryOperator::Sub, int(2)),
                          BinaryOperator::Sub,
                          int(1)));
    }

    #[test]
    fn power_is_right_associative() {
        assert_eq!(expr_of("2 ** 3 ** 2;"),
                   binary(int(2),
                          BinaryOperator::Pow,
                          binary(int(3), BinaryOperator::Pow, int(2))));
    }

    #[test]
    fn not_wraps_the_whole_comparison() {
        let expr = expr_of("NOT 1 == 2;");
        assert_eq!(expr,
                   Expr::UnaryOp { op:   UnaryOperator::Not,
                                   expr: Box::new(binary(int(1), BinaryOperator::Equal, int(2))),
                                   line: 1, });
    }

    #[test]
    fn and_binds_tighter_than_or() {
        assert_eq!(expr_of("1 OR 0 and 0;"),
                   binary(int(1),
                          BinaryOperator::Or,
                          binary(int(0), BinaryOperator::And, int(0))));
    }

    #[test]
    fn index_binds_tighter_than_power() {
        let Expr::BinaryOp { left, op, .. } = expr_of("xs[0] ** 2;") else {
            panic!("expected a binary operation");
        };
        assert_eq!(op, BinaryOperator::Pow);
        assert!(matches!(*left, Expr::Index { .. }));
    }

    #[test]
    fn dangling_else_binds_to_nearest_if() {
        let Statement::If { then_branch, .. } = single("if (a) if (b) x; else y;") else {
            panic!("outer statement should have no else");
        };
        assert!(matches!(*then_branch, Statement::IfElse { .. }));
    }

    #[test]
    fn function_definition_is_told_apart_from_call() {
        match single("add(a, b) { return a + b; }") {
            Statement::Function(def) => {
                assert_eq!(def.name, "add");
                assert_eq!(def.params, vec!["a".to_string(), "b".to_string()]);
                assert_eq!(def.body.len(), 1);
            },
            other => panic!("expected a function definition, got {other:?}"),
        }

        assert!(matches!(expr_of("add(1, 2);"), Expr::FunctionCall { .. }));
    }

    #[test]
    fn nested_index_assignment_keeps_its_root() {
        let Statement::Assign { target, .. } = single("grid[1][2] = 0;") else {
            panic!("expected an assignment");
        };
        assert_eq!(target.root_name(), "grid");
        assert!(matches!(target, AssignTarget::Index { .. }));
    }

    #[test]
    fn literal_cannot_be_assigned() {
        assert_eq!(parse("3 = x;"),
                   Err(SyntaxError::InvalidAssignmentTarget { line: 1 }));
    }

    #[test]
    fn empty_list_needs_the_dedicated_token() {
        assert_eq!(expr_of("[];"),
                   Expr::ListLiteral { elements: vec![],
                                       line:     1, });
        assert!(parse("x = [ ];").is_err());
    }

    #[test]
    fn bare_return_has_no_value() {
        assert_eq!(single("return;"),
                   Statement::Return { value: None,
                                       line:  1, });
    }

    #[test]
    fn missing_semicolon_is_reported() {
        assert!(matches!(parse("print 1"),
                         Err(SyntaxError::UnexpectedEndOfInput { line: 1 })));
        assert!(matches!(parse("x = 1\ny = 2;"),
                         Err(SyntaxError::ExpectedToken { line: 2, .. })));
    }

    #[test]
    fn unclosed_block_is_reported() {
        assert!(matches!(parse("while (1) {\nprint 1;\n"),
                         Err(SyntaxError::UnexpectedEndOfInput { line: 2 })));
    }

    #[test]
    fn statement_lines_are_recorded() {
        let program = parse("x = 1;\n\nprint x;").unwrap();
        let lines: Vec<usize> = program.statements.iter().map(Statement::line_number).collect();
        assert_eq!(lines, vec![1, 3]);
    }
}
