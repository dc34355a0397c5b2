/// Numeric conversion helpers.
///
/// Lossless conversions between `i64`, `u32`, `usize` and `f64` used by the
/// evaluator when promoting operands, raising to a power or turning a runtime
/// integer into a position inside a list or string. Every helper returns a
/// `Result` instead of silently truncating.
pub mod num;
