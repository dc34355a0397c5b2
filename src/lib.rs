//! # quill
//!
//! quill is an interpreter for a small block-structured statement language,
//! written in Rust. Programs have integers, reals, strings and lists,
//! variables, `if`/`else`, `while`, `print` and recursive user-defined
//! functions.
//!
//! ```
//! use quill::{Dialect, Value, run};
//!
//! let source = "
//!     fib(n) {
//!         if (n < 2) { return n; }
//!         return fib(n - 1) + fib(n - 2);
//!     }
//!     fib(10);
//! ";
//!
//! assert_eq!(run(source, &Dialect::default()).unwrap(), Value::Integer(55));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides the error types for parsing and evaluation.
///
/// Failures fall into two categories: syntax errors raised while tokenizing
/// or parsing, and semantic errors raised while evaluating. Both carry the
/// source line they refer to.
///
/// # Responsibilities
/// - Defines one enum per category, plus [`Error`] wrapping either.
/// - Implements `Display` and `std::error::Error` for all of them.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, configuration and evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// This module provides conversion routines used by the evaluator: lossless
/// promotion of integers to reals, exponent narrowing and index checking.
pub mod util;

pub use error::{Error, SemanticError, SyntaxError};
pub use interpreter::{
    dialect::Dialect, evaluator::core::Context, parser::core::parse, value::core::Value,
};

use crate::ast::Program;

/// Parses source text and rejects constructs `dialect` disables.
///
/// # Errors
/// Returns the first [`SyntaxError`]: a grammar violation, or
/// [`SyntaxError::FeatureDisabled`] for a construct the dialect turns off.
///
/// # Examples
/// ```
/// use quill::{Dialect, parse_with};
///
/// let no_functions = Dialect { functions: false,
///                              ..Dialect::default() };
///
/// assert!(parse_with("x = 1 + 2;", &no_functions).is_ok());
/// assert!(parse_with("f() { return 1; }", &no_functions).is_err());
/// ```
pub fn parse_with(source: &str, dialect: &Dialect) -> Result<Program, SyntaxError> {
    let program = parse(source)?;
    dialect.check(&program)?;
    Ok(program)
}

/// Parses and evaluates a complete program.
///
/// A fresh [`Context`] with the given dialect is used; `print` statements
/// write to standard output.
///
/// # Returns
/// The program's value: the value of a top-level `return`, otherwise that of
/// the last top-level expression statement, otherwise [`Value::Unit`].
///
/// # Errors
/// Returns an error if parsing or evaluation fails. Evaluation stops at the
/// first semantic error.
///
/// # Examples
/// ```
/// use quill::{Dialect, Error, Value, run};
///
/// let value = run("x = [1, 2, 3];\nx[1];", &Dialect::default()).unwrap();
/// assert_eq!(value, Value::Integer(2));
///
/// // 'y' is not defined
/// let err = run("x = y + 1;", &Dialect::default()).unwrap_err();
/// assert!(matches!(err, Error::Semantic(_)));
/// ```
pub fn run(source: &str, dialect: &Dialect) -> Result<Value, Error> {
    let program = parse_with(source, dialect)?;
    let mut context = Context::with_dialect(dialect.clone());

    Ok(context.evaluate(&program)?)
}
