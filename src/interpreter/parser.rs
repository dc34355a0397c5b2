/// Parser entry points and the expression root.
///
/// Turns a token stream into a [`Program`](crate::ast::Program) and exposes
/// the shared `ParseResult` alias.
pub mod core;

/// Prefix `NOT`, postfix indexing and primary expressions.
///
/// Handles literals, names, calls, list literals and parenthesized
/// expressions, the atoms every other precedence level is built from.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the precedence levels from logical OR down to
/// exponentiation.
pub mod binary;

/// Block parsing.
///
/// Parses `{ ... }` groups of statements.
pub mod block;

/// Utility functions for the parser.
///
/// Comma separated lists, identifiers and expected-token checks.
pub mod utils;

/// Statement parsing.
///
/// Function definitions, conditionals, loops, `print`, `return`, assignments
/// and expression statements.
pub mod statement;
