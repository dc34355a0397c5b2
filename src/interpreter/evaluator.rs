/// Core evaluation logic and context management.
///
/// Contains the runtime [`Context`](core::Context), the statement and
/// expression dispatchers and the [`Flow`](core::Flow) control signal.
pub mod core;

/// Variable storage.
///
/// The scope stack: the permanent global scope plus one frame per active
/// function call.
pub mod scope;

/// Blocks, conditionals and loops.
///
/// Propagates `return` out of nested statements and applies the dialect's
/// condition policy.
pub mod control;

/// Binary operator evaluation logic.
///
/// Handles arithmetic, comparisons and logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements logical NOT.
pub mod unary;

/// Indexing.
///
/// Reads from strings and lists and writes into lists.
pub mod index;

/// Function evaluation.
///
/// Handles user-defined function definitions and calls, argument checking and
/// the call-depth bound.
pub mod function;
