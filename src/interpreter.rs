/// Grammar and typing configuration.
///
/// The language flavours differ in which constructs are available and how
/// strictly operands are typed. [`Dialect`](dialect::Dialect) captures those
/// choices in one place and can reject a parsed program that uses a disabled
/// construct.
pub mod dialect;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the tree, executes statements, evaluates expressions,
/// manages variable scopes and function calls, and writes `print` output.
///
/// # Responsibilities
/// - Evaluates every statement and expression form.
/// - Keeps the scope stack balanced across calls, including failed ones.
/// - Reports semantic errors such as type mismatches or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// strings, identifiers, operators, delimiters, and keywords. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens paired with their line.
/// - Skips whitespace and `#` comments.
/// - Reports text that matches no token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// the statements of a [`Program`](crate::ast::Program). Expressions are
/// parsed by precedence climbing, one function per precedence level.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Validates the grammar, reporting errors with line information.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Integers, reals, strings, lists and unit, with their display forms and
/// the conversions the evaluator needs.
pub mod value;
