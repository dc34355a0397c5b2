use std::cmp::Ordering;

use ordered_float::OrderedFloat;

use crate::{
    ast::BinaryOperator,
    error::SemanticError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::cmp_i64_f64,
};

impl Context {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// `==` and `!=` accept any pair of values and compare them with
    /// [`Value::equals`]. The ordering operators accept two numbers or two
    /// strings; numbers compare numerically, with reals in the total order of
    /// [`OrderedFloat`], and strings compare lexicographically.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `line`: Current line number used for error reporting.
    ///
    /// # Returns
    /// `Integer(1)` if the comparison holds, otherwise `Integer(0)`.
    ///
    /// # Example
    /// ```
    /// use quill::{Context, Value, ast::BinaryOperator};
    ///
    /// let result = Context::eval_comparison(BinaryOperator::Less,
    ///                                       &Value::from("apple"),
    ///                                       &Value::from("banana"),
    ///                                       1);
    /// assert_eq!(result.unwrap(), Value::Integer(1));
    ///
    /// let result = Context::eval_comparison(BinaryOperator::Equal,
    ///                                       &Value::Integer(1),
    ///                                       &Value::Real(1.0),
    ///                                       1);
    /// assert_eq!(result.unwrap(), Value::Integer(1));
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        let holds = match op {
            BinaryOperator::Equal => left.equals(right),
            BinaryOperator::NotEqual => !left.equals(right),
            _ => {
                let ordering = order(op, left, right, line)?;

                match op {
                    BinaryOperator::Less => ordering == Ordering::Less,
                    BinaryOperator::LessEqual => ordering != Ordering::Greater,
                    BinaryOperator::Greater => ordering == Ordering::Greater,
                    _ => ordering != Ordering::Less,
                }
            },
        };

        Ok(Value::from(holds))
    }
}

/// Orders two values for `<`, `<=`, `>` and `>=`.
fn order(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> EvalResult<Ordering> {
    use Value::{Integer, Real, Str};

    match (left, right) {
        (Integer(a), Integer(b)) => Ok(a.cmp(b)),
        (Integer(a), Real(b)) => Ok(cmp_i64_f64(*a, *b)),
        (Real(a), Integer(b)) => Ok(cmp_i64_f64(*b, *a).reverse()),
        (Real(a), Real(b)) => Ok(OrderedFloat(*a).cmp(&OrderedFloat(*b))),
        (Str(a), Str(b)) => Ok(a.cmp(b)),
        _ => Err(SemanticError::TypeError { details: format!("cannot order {} and {} with {op}",
                                                             left.type_name(),
                                                             right.type_name()),
                                            line }),
    }
}
