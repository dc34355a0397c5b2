use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a binary operation between two already evaluated values.
    ///
    /// This function routes the operation to specialized handlers depending on
    /// the operator. Arithmetic operators use `eval_arithmetic`, which
    /// consults the dialect's arithmetic mode. Equality and ordering use
    /// `eval_comparison`. Logical operators call `eval_logic`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use quill::{Context, Value, ast::BinaryOperator};
    ///
    /// let context = Context::new();
    /// let left = Value::Integer(7);
    /// let right = Value::Integer(2);
    ///
    /// let result = context.eval_binary(BinaryOperator::Div, &left, &right, 1);
    /// assert_eq!(result.unwrap(), Value::Real(3.5));
    ///
    /// let result = context.eval_binary(BinaryOperator::Less, &left, &right, 1);
    /// assert_eq!(result.unwrap(), Value::Integer(0));
    /// ```
    pub fn eval_binary(&self,
                       op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, FloorDiv, Greater, GreaterEqual, Less, LessEqual, Mod, Mul,
            NotEqual, Or, Pow, Sub,
        };

        match op {
            Add | Sub | Mul | Div | FloorDiv | Mod | Pow => {
                self.eval_arithmetic(op, left, right, line)
            },

            Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual => {
                Self::eval_comparison(op, left, right, line)
            },

            And | Or => Self::eval_logic(op, left, right, line),
        }
    }
}
