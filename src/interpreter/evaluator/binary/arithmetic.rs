use crate::{
    ast::BinaryOperator,
    error::SemanticError,
    interpreter::{
        dialect::ArithmeticMode,
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::{exponent_to_u32, i64_to_f64_checked},
};

impl Context {
    /// Evaluates an arithmetic operation.
    ///
    /// Both operands must be numbers, except that `+` also concatenates two
    /// strings. How an Integer meets a Real depends on the dialect:
    /// [`ArithmeticMode::Promote`] converts the integer to a real,
    /// [`ArithmeticMode::SameType`] rejects the pair.
    ///
    /// `/` always yields a real. `//` and `%` round toward negative infinity,
    /// so the result of `%` takes the sign of the divisor. `**` with a
    /// negative integer exponent yields a real, and zero to a negative power
    /// is a division by zero.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed value.
    ///
    /// # Errors
    /// - `TypeError` for non-numeric operands, or mixed operands in
    ///   `SameType` mode.
    /// - `DivisionByZero` when the divisor of `/`, `//` or `%` is zero, or
    ///   zero is raised to a negative power.
    /// - `Overflow` when an integer result does not fit in 64 bits, or a
    ///   mixed operation promotes an integer beyond 2^53.
    ///
    /// # Example
    /// ```
    /// use quill::{Context, Value, ast::BinaryOperator};
    ///
    /// let context = Context::new();
    ///
    /// let result = context.eval_arithmetic(BinaryOperator::Mod,
    ///                                      &Value::Integer(-7),
    ///                                      &Value::Integer(3),
    ///                                      1);
    /// assert_eq!(result.unwrap(), Value::Integer(2));
    /// ```
    pub fn eval_arithmetic(&self,
                           op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        use Value::{Integer, Real, Str};

        match (left, right) {
            (Str(a), Str(b)) if op == BinaryOperator::Add => {
                let mut joined = String::with_capacity(a.len() + b.len());
                joined.push_str(a);
                joined.push_str(b);
                Ok(Value::from(joined))
            },
            (Integer(a), Integer(b)) => integer_op(op, *a, *b, line),
            (Real(a), Real(b)) => real_op(op, *a, *b, line),
            (Integer(_), Real(_)) | (Real(_), Integer(_)) => {
                if self.dialect.arithmetic == ArithmeticMode::SameType {
                    return Err(operand_error(op, left, right, line));
                }
                real_op(op, as_real(left, line)?, as_real(right, line)?, line)
            },
            _ => Err(operand_error(op, left, right, line)),
        }
    }
}

/// Integer arithmetic with overflow detection.
fn integer_op(op: BinaryOperator, a: i64, b: i64, line: usize) -> EvalResult<Value> {
    use BinaryOperator::{Add, Div, FloorDiv, Mod, Mul, Pow, Sub};

    let overflow = SemanticError::Overflow { line };

    match op {
        Add => a.checked_add(b).map(Value::Integer).ok_or(overflow),
        Sub => a.checked_sub(b).map(Value::Integer).ok_or(overflow),
        Mul => a.checked_mul(b).map(Value::Integer).ok_or(overflow),
        Div => real_op(Div, int_as_real(a), int_as_real(b), line),
        FloorDiv => {
            if b == 0 {
                return Err(SemanticError::DivisionByZero { line });
            }
            let quotient = a.checked_div(b).ok_or(overflow)?;
            if a % b != 0 && (a < 0) != (b < 0) {
                Ok(Value::Integer(quotient - 1))
            } else {
                Ok(Value::Integer(quotient))
            }
        },
        Mod => {
            if b == 0 {
                return Err(SemanticError::DivisionByZero { line });
            }
            let remainder = a.wrapping_rem(b);
            if remainder != 0 && (remainder < 0) != (b < 0) {
                Ok(Value::Integer(remainder + b))
            } else {
                Ok(Value::Integer(remainder))
            }
        },
        Pow => {
            if b < 0 {
                return real_op(Pow, int_as_real(a), int_as_real(b), line);
            }
            a.checked_pow(exponent_to_u32(b, line)?)
             .map(Value::Integer)
             .ok_or(overflow)
        },
        _ => Err(SemanticError::TypeError { details: format!("{op} is not arithmetic"),
                                            line }),
    }
}

/// Floating-point arithmetic.
fn real_op(op: BinaryOperator, a: f64, b: f64, line: usize) -> EvalResult<Value> {
    use BinaryOperator::{Add, Div, FloorDiv, Mod, Mul, Pow, Sub};

    if matches!(op, Div | FloorDiv | Mod) && b == 0.0 {
        return Err(SemanticError::DivisionByZero { line });
    }
    // A negative power of zero divides by zero.
    if op == Pow && a == 0.0 && b < 0.0 {
        return Err(SemanticError::DivisionByZero { line });
    }

    let result = match op {
        Add => a + b,
        Sub => a - b,
        Mul => a * b,
        Div => a / b,
        FloorDiv => (a / b).floor(),
        Mod => {
            let remainder = a % b;
            if remainder != 0.0 && (remainder < 0.0) != (b < 0.0) {
                remainder + b
            } else {
                remainder
            }
        },
        Pow => a.powf(b),
        _ => {
            return Err(SemanticError::TypeError { details: format!("{op} is not arithmetic"),
                                                  line });
        },
    };

    Ok(Value::Real(result))
}

/// Converts an integer operand of `/` or a negative power, whose result is
/// a real anyway, rounding to the nearest real.
#[allow(clippy::cast_precision_loss)]
fn int_as_real(value: i64) -> f64 {
    value as f64
}

/// Promotes the integer side of a mixed operation, refusing integers a real
/// cannot hold exactly.
fn to_real(value: i64, line: usize) -> EvalResult<f64> {
    i64_to_f64_checked(value, SemanticError::Overflow { line })
}

fn as_real(value: &Value, line: usize) -> EvalResult<f64> {
    match value {
        Value::Integer(n) => to_real(*n, line),
        Value::Real(r) => Ok(*r),
        other => Err(SemanticError::TypeError { details: format!("expected a number, found {}",
                                                                 other.type_name()),
                                                line }),
    }
}

fn operand_error(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> SemanticError {
    SemanticError::TypeError { details: format!("unsupported operand types for {op}: {} and {}",
                                                left.type_name(),
                                                right.type_name()),
                               line }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::dialect::Dialect;

    fn arith(op: BinaryOperator, left: Value, right: Value) -> EvalResult<Value> {
        Context::new().eval_arithmetic(op, &left, &right, 1)
    }

    #[test]
    fn division_is_always_real() {
        assert_eq!(arith(BinaryOperator::Div, Value::Integer(6), Value::Integer(3)),
                   Ok(Value::Real(2.0)));
    }

    #[test]
    fn floor_division_and_modulo_round_down() {
        use BinaryOperator::{FloorDiv, Mod};

        assert_eq!(arith(FloorDiv, Value::Integer(5), Value::Integer(2)), Ok(Value::Integer(2)));
        assert_eq!(arith(FloorDiv, Value::Integer(-5), Value::Integer(2)), Ok(Value::Integer(-3)));
        assert_eq!(arith(Mod, Value::Integer(5), Value::Integer(2)), Ok(Value::Integer(1)));
        assert_eq!(arith(Mod, Value::Integer(5), Value::Integer(-3)), Ok(Value::Integer(-1)));
        assert_eq!(arith(Mod, Value::Integer(i64::MIN), Value::Integer(-1)), Ok(Value::Integer(0)));
        assert_eq!(arith(FloorDiv, Value::Real(7.5), Value::Integer(2)), Ok(Value::Real(3.0)));
        assert_eq!(arith(Mod, Value::Real(-1.0), Value::Real(4.0)), Ok(Value::Real(3.0)));
    }

    #[test]
    fn every_zero_divisor_is_rejected() {
        for op in [BinaryOperator::Div, BinaryOperator::FloorDiv, BinaryOperator::Mod] {
            assert_eq!(arith(op, Value::Integer(5), Value::Integer(0)),
                       Err(SemanticError::DivisionByZero { line: 1 }));
            assert_eq!(arith(op, Value::Real(5.0), Value::Real(0.0)),
                       Err(SemanticError::DivisionByZero { line: 1 }));
        }
    }

    #[test]
    fn integer_overflow_is_an_error() {
        assert_eq!(arith(BinaryOperator::Add, Value::Integer(i64::MAX), Value::Integer(1)),
                   Err(SemanticError::Overflow { line: 1 }));
        assert_eq!(arith(BinaryOperator::Pow, Value::Integer(10), Value::Integer(19)),
                   Err(SemanticError::Overflow { line: 1 }));
        assert_eq!(arith(BinaryOperator::FloorDiv, Value::Integer(i64::MIN), Value::Integer(-1)),
                   Err(SemanticError::Overflow { line: 1 }));
    }

    #[test]
    fn negative_exponent_gives_real() {
        assert_eq!(arith(BinaryOperator::Pow, Value::Integer(2), Value::Integer(-2)),
                   Ok(Value::Real(0.25)));
        assert_eq!(arith(BinaryOperator::Pow, Value::Integer(1 << 60), Value::Integer(-1)),
                   Ok(Value::Real(2.0_f64.powi(-60))));
    }

    #[test]
    fn zero_to_a_negative_power_is_rejected() {
        assert_eq!(arith(BinaryOperator::Pow, Value::Integer(0), Value::Integer(-1)),
                   Err(SemanticError::DivisionByZero { line: 1 }));
        assert_eq!(arith(BinaryOperator::Pow, Value::Real(0.0), Value::Real(-0.5)),
                   Err(SemanticError::DivisionByZero { line: 1 }));
        assert_eq!(arith(BinaryOperator::Pow, Value::Integer(0), Value::Integer(0)),
                   Ok(Value::Integer(1)));
    }

    #[test]
    fn integer_division_accepts_large_operands() {
        assert_eq!(arith(BinaryOperator::Div, Value::Integer(1 << 60), Value::Integer(2)),
                   Ok(Value::Real(2.0_f64.powi(59))));
        assert_eq!(arith(BinaryOperator::Div,
                         Value::Integer(9_007_199_254_740_993),
                         Value::Integer(1)),
                   Ok(Value::Real(9_007_199_254_740_992.0)));
        assert_eq!(arith(BinaryOperator::Add, Value::Integer(9_007_199_254_740_993), Value::Real(0.5)),
                   Err(SemanticError::Overflow { line: 1 }));
    }

    #[test]
    fn strings_only_concatenate() {
        assert_eq!(arith(BinaryOperator::Add, Value::from("ab"), Value::from("cd")),
                   Ok(Value::from("abcd")));
        assert!(matches!(arith(BinaryOperator::Mul, Value::from("ab"), Value::Integer(2)),
                         Err(SemanticError::TypeError { .. })));
        assert!(matches!(arith(BinaryOperator::Add, Value::from("ab"), Value::Integer(2)),
                         Err(SemanticError::TypeError { .. })));
    }

    #[test]
    fn same_type_mode_rejects_mixed_operands() {
        let strict = Context::with_dialect(Dialect::strict());
        let mixed = strict.eval_arithmetic(BinaryOperator::Add,
                                           &Value::Integer(1),
                                           &Value::Real(2.0),
                                           4);
        assert!(matches!(mixed, Err(SemanticError::TypeError { line: 4, .. })));

        assert_eq!(arith(BinaryOperator::Add, Value::Integer(1), Value::Real(2.0)),
                   Ok(Value::Real(3.0)));
    }
}
