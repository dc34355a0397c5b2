/// Dispatches a binary operator to its category.
pub mod core;

/// Arithmetic on numbers and string concatenation.
pub mod arithmetic;

/// Equality and ordering.
pub mod comparison;

/// `AND` and `OR`.
pub mod logic;
