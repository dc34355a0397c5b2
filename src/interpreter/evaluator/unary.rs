use crate::{
    ast::UnaryOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a unary operation on a value.
    ///
    /// The only unary operator is `NOT`, which requires an integer operand
    /// and maps zero to `Integer(1)` and anything else to `Integer(0)`.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use quill::{Context, Value, ast::UnaryOperator};
    ///
    /// let v = Context::eval_unary(UnaryOperator::Not, &Value::Integer(0), 1).unwrap();
    /// assert_eq!(v, Value::Integer(1));
    ///
    /// let v = Context::eval_unary(UnaryOperator::Not, &Value::Integer(-4), 1).unwrap();
    /// assert_eq!(v, Value::Integer(0));
    ///
    /// assert!(Context::eval_unary(UnaryOperator::Not, &Value::from("0"), 1).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Not => {
                let operand = value.as_integer("operand of NOT", line)?;
                Ok(Value::from(operand == 0))
            },
        }
    }
}
