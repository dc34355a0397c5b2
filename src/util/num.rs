use std::cmp::Ordering;

use ordered_float::OrderedFloat;

use crate::{error::SemanticError, interpreter::evaluator::core::EvalResult};

/// Largest signed integer exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds [`MAX_SAFE_I64_INT`] in absolute
/// value.
///
/// ## Example
/// ```
/// use quill::util::num::{MAX_SAFE_I64_INT, i64_to_f64_checked};
///
/// assert_eq!(i64_to_f64_checked(42, "too big!"), Ok(42.0));
/// assert!(i64_to_f64_checked(MAX_SAFE_I64_INT + 1, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_I64_INT.unsigned_abs() {
        return Err(error);
    }
    Ok(value as f64)
}

/// Orders an integer against a real without rounding the integer.
///
/// NaN sorts above every number, as in [`OrderedFloat`]. Reals outside the
/// `i64` range compare by sign; otherwise the integer part decides and the
/// fraction breaks a tie.
///
/// ## Example
/// ```
/// use std::cmp::Ordering;
///
/// use quill::util::num::cmp_i64_f64;
///
/// assert_eq!(cmp_i64_f64(2, 2.5), Ordering::Less);
/// assert_eq!(cmp_i64_f64(9_007_199_254_740_993, 9_007_199_254_740_992.0),
///            Ordering::Greater);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn cmp_i64_f64(int: i64, real: f64) -> Ordering {
    // 2^63, exactly representable.
    const BOUND: f64 = 9_223_372_036_854_775_808.0;

    if real.is_nan() {
        return OrderedFloat(int as f64).cmp(&OrderedFloat(real));
    }
    if real >= BOUND {
        return Ordering::Less;
    }
    if real < -BOUND {
        return Ordering::Greater;
    }

    int.cmp(&(real.trunc() as i64))
       .then_with(|| OrderedFloat(0.0).cmp(&OrderedFloat(real.fract())))
}

/// Converts a non-negative `i64` exponent to `u32` for `checked_pow`.
///
/// ## Errors
/// Returns [`SemanticError::Overflow`] if the exponent does not fit into a
/// `u32`; any such power of an integer other than 0, 1 or -1 overflows `i64`
/// anyway.
pub fn exponent_to_u32(value: i64, line: usize) -> EvalResult<u32> {
    u32::try_from(value).map_err(|_| SemanticError::Overflow { line })
}

/// Turns a runtime index into a position inside a sequence of length `len`.
///
/// Negative indices and indices at or past `len` are rejected; there is no
/// counting from the end.
///
/// ## Errors
/// Returns [`SemanticError::IndexOutOfBounds`] when the index does not address
/// an element.
///
/// ## Example
/// ```
/// use quill::{error::SemanticError, util::num::checked_index};
///
/// assert_eq!(checked_index(2, 3, 1), Ok(2));
///
/// let err = checked_index(-1, 3, 7).unwrap_err();
/// assert_eq!(err, SemanticError::IndexOutOfBounds { index: -1, len: 3, line: 7 });
/// ```
pub fn checked_index(index: i64, len: usize, line: usize) -> EvalResult<usize> {
    usize::try_from(index).ok()
                          .filter(|i| *i < len)
                          .ok_or(SemanticError::IndexOutOfBounds { index, len, line })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exponent_bounds() {
        assert_eq!(exponent_to_u32(3, 1), Ok(3));
        assert_eq!(exponent_to_u32(i64::from(u32::MAX) + 1, 4),
                   Err(SemanticError::Overflow { line: 4 }));
    }

    #[test]
    fn integer_real_ordering_is_exact() {
        let two_53 = 9_007_199_254_740_992_i64;

        assert_eq!(cmp_i64_f64(two_53 + 1, 9_007_199_254_740_992.0), Ordering::Greater);
        assert_eq!(cmp_i64_f64(two_53, 9_007_199_254_740_992.0), Ordering::Equal);
        assert_eq!(cmp_i64_f64(-3, -2.5), Ordering::Less);
        assert_eq!(cmp_i64_f64(-2, -2.5), Ordering::Greater);
        assert_eq!(cmp_i64_f64(i64::MAX, 9_223_372_036_854_775_808.0), Ordering::Less);
        assert_eq!(cmp_i64_f64(i64::MIN, -9_223_372_036_854_775_808.0), Ordering::Equal);
        assert_eq!(cmp_i64_f64(0, f64::INFINITY), Ordering::Less);
        assert_eq!(cmp_i64_f64(0, f64::NEG_INFINITY), Ordering::Greater);
        assert_eq!(cmp_i64_f64(0, f64::NAN), Ordering::Less);
    }

    #[test]
    fn index_past_end_is_rejected() {
        assert!(checked_index(3, 3, 1).is_err());
        assert!(checked_index(0, 0, 1).is_err());
        assert_eq!(checked_index(0, 1, 1), Ok(0));
    }
}
