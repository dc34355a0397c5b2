use crate::{
    ast::{Expr, Statement},
    interpreter::{
        dialect::ConditionMode,
        evaluator::core::{Context, EvalResult, Flow},
    },
};

impl Context {
    /// Executes statements in order until one returns.
    ///
    /// Blocks share the scope they appear in; variables assigned inside a
    /// block remain visible after it.
    ///
    /// # Returns
    /// [`Flow::Return`] from the first statement that returned, otherwise
    /// [`Flow::Continue`].
    pub fn exec_block(&mut self, statements: &[Statement]) -> EvalResult<Flow> {
        for statement in statements {
            if let Flow::Return(value) = self.eval_statement(statement)? {
                return Ok(Flow::Return(value));
            }
        }

        Ok(Flow::Continue)
    }

    /// Executes an `if` statement, with or without `else`.
    pub(crate) fn exec_if(&mut self,
                          condition: &Expr,
                          then_branch: &Statement,
                          else_branch: Option<&Statement>,
                          line: usize)
                          -> EvalResult<Flow> {
        if self.eval_condition(condition, line)? {
            self.eval_statement(then_branch)
        } else if let Some(else_branch) = else_branch {
            self.eval_statement(else_branch)
        } else {
            Ok(Flow::Continue)
        }
    }

    /// Executes a `while` loop. The condition is re-evaluated before every
    /// iteration; a `return` in the body leaves the loop.
    pub(crate) fn exec_while(&mut self,
                             condition: &Expr,
                             body: &[Statement],
                             line: usize)
                             -> EvalResult<Flow> {
        while self.eval_condition(condition, line)? {
            if let Flow::Return(value) = self.exec_block(body)? {
                return Ok(Flow::Return(value));
            }
        }

        Ok(Flow::Continue)
    }

    /// Evaluates a condition according to the dialect's [`ConditionMode`].
    ///
    /// # Errors
    /// In [`ConditionMode::Integer`], a non-integer condition is a type error.
    fn eval_condition(&mut self, condition: &Expr, line: usize) -> EvalResult<bool> {
        let value = self.eval(condition)?;

        match self.dialect.conditions {
            ConditionMode::Integer => Ok(value.as_integer("condition", line)? != 0),
            ConditionMode::Truthy => Ok(value.is_truthy()),
        }
    }
}
