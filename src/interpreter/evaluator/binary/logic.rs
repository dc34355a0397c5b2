use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates `AND` or `OR` on two integer operands.
    ///
    /// Nonzero is true. Both operands have already been evaluated by the
    /// caller, so there is no short-circuiting. The result is `Integer(1)`
    /// or `Integer(0)`.
    ///
    /// # Parameters
    /// - `op`: The logical operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use quill::{Context, Value, ast::BinaryOperator};
    ///
    /// let result = Context::eval_logic(BinaryOperator::Or, &Value::Integer(0), &Value::Integer(7), 1);
    /// assert_eq!(result.unwrap(), Value::Integer(1));
    ///
    /// assert!(Context::eval_logic(BinaryOperator::And, &Value::Real(1.0), &Value::Integer(1), 1).is_err());
    /// ```
    pub fn eval_logic(op: BinaryOperator,
                      left: &Value,
                      right: &Value,
                      line: usize)
                      -> EvalResult<Value> {
        let what = format!("operand of {op}");
        let left = left.as_integer(&what, line)? != 0;
        let right = right.as_integer(&what, line)? != 0;

        Ok(Value::from(match op {
                           BinaryOperator::Or => left || right,
                           _ => left && right,
                       }))
    }
}
