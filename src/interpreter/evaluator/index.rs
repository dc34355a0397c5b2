use std::rc::Rc;

use crate::{
    ast::{AssignTarget, Expr},
    error::SemanticError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::checked_index,
};

impl Context {
    /// Reads one element of a string or list.
    ///
    /// Indexing a string yields a one-character string. Positions count from
    /// zero; negative positions are out of bounds.
    ///
    /// # Parameters
    /// - `container`: The indexed value.
    /// - `index`: The position; must be an integer.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// - `TypeError` if the container is not a string or list, or the index is
    ///   not an integer.
    /// - `IndexOutOfBounds` if the position does not address an element.
    ///
    /// # Example
    /// ```
    /// use quill::{Context, Value};
    ///
    /// let word = Value::from("héllo");
    /// assert_eq!(Context::eval_index(&word, &Value::Integer(1), 1).unwrap(),
    ///            Value::from("é"));
    ///
    /// let list = Value::from(vec![Value::Integer(1)]);
    /// assert!(Context::eval_index(&list, &Value::Integer(1), 1).is_err());
    /// ```
    pub fn eval_index(container: &Value, index: &Value, line: usize) -> EvalResult<Value> {
        match container {
            Value::Str(s) => {
                let position = index.as_integer("index", line)?;
                let len = s.chars().count();
                let at = checked_index(position, len, line)?;
                s.chars()
                 .nth(at)
                 .map(|c| Value::from(c.to_string()))
                 .ok_or(SemanticError::IndexOutOfBounds { index: position,
                                                          len,
                                                          line })
            },
            Value::List(items) => {
                let position = index.as_integer("index", line)?;
                let at = checked_index(position, items.len(), line)?;
                Ok(items[at].clone())
            },
            other => Err(not_indexable(other, line)),
        }
    }

    /// Stores `value` at an index chain such as `grid[1][2]`.
    ///
    /// The index expressions are evaluated first, outermost first. The root
    /// variable is then resolved (innermost frame, then globals) and updated
    /// in place; lists shared with other variables are copied before the
    /// write, so no other variable observes the change.
    ///
    /// # Errors
    /// - `UndefinedVariable` if the root variable does not exist.
    /// - `TypeError` if a container on the path is not a list. Strings are
    ///   immutable.
    /// - `IndexOutOfBounds` if a position does not address an element.
    pub(crate) fn assign_index(&mut self,
                               target: &AssignTarget,
                               value: Value,
                               line: usize)
                               -> EvalResult<()> {
        let mut index_exprs: Vec<&Expr> = Vec::new();
        let mut cursor = target;
        let root = loop {
            match cursor {
                AssignTarget::Name { name, .. } => break name,
                AssignTarget::Index { target, index, .. } => {
                    index_exprs.push(index);
                    cursor = target.as_ref();
                },
            }
        };
        index_exprs.reverse();

        let mut path = Vec::with_capacity(index_exprs.len());
        for expr in index_exprs {
            let position = self.eval(expr)?;
            path.push(position.as_integer("index", expr.line_number())?);
        }

        let slot = self.get_variable_mut(root)
                       .ok_or_else(|| SemanticError::UndefinedVariable { name: root.clone(),
                                                                         line })?;

        store(slot, &path, value, line)
    }
}

/// Walks `path` from `slot` and replaces the element it ends at.
fn store(slot: &mut Value, path: &[i64], value: Value, line: usize) -> EvalResult<()> {
    let Some((&position, rest)) = path.split_first() else {
        *slot = value;
        return Ok(());
    };

    match slot {
        Value::List(items) => {
            let at = checked_index(position, items.len(), line)?;
            store(&mut Rc::make_mut(items)[at], rest, value, line)
        },
        Value::Str(_) => Err(SemanticError::TypeError { details: "strings are immutable".to_string(),
                                                        line }),
        other => Err(not_indexable(other, line)),
    }
}

fn not_indexable(value: &Value, line: usize) -> SemanticError {
    SemanticError::TypeError { details: format!("cannot index into {}", value.type_name()),
                               line }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::parser::core::parse;

    fn run(context: &mut Context, source: &str) -> EvalResult<Value> {
        context.evaluate(&parse(source).unwrap())
    }

    #[test]
    fn nested_assignment_updates_inner_list() {
        let mut context = Context::new();
        let result = run(&mut context, "grid = [[0, 0], [0, 0]]; grid[1][0] = 5; grid;");
        assert_eq!(result.unwrap().to_string(), "[[0, 0], [5, 0]]");
    }

    #[test]
    fn copies_do_not_alias() {
        let mut context = Context::new();
        let result = run(&mut context, "x = [1, 2]; y = x; y[0] = 9; [x[0], y[0]];");
        assert_eq!(result.unwrap().to_string(), "[1, 9]");
    }

    #[test]
    fn strings_cannot_be_assigned_into() {
        let mut context = Context::new();
        assert!(matches!(run(&mut context, r#"s = "abc"; s[0] = "z";"#),
                         Err(SemanticError::TypeError { .. })));
        assert_eq!(run(&mut context, "s[2];"), Ok(Value::from("c")));
    }

    #[test]
    fn assignment_into_missing_variable_fails() {
        let mut context = Context::new();
        assert!(matches!(run(&mut context, "nope[0] = 1;"),
                         Err(SemanticError::UndefinedVariable { .. })));
    }

    #[test]
    fn negative_and_large_indices_are_out_of_bounds() {
        let mut context = Context::new();
        run(&mut context, "x = [1, 2, 3];").unwrap();
        assert_eq!(run(&mut context, "x[5];"),
                   Err(SemanticError::IndexOutOfBounds { index: 5,
                                                         len:   3,
                                                         line:  1, }));
        assert!(matches!(run(&mut context, "x[0 - 1] = 1;"),
                         Err(SemanticError::IndexOutOfBounds { index: -1, .. })));
    }

    #[test]
    fn index_must_be_an_integer() {
        let mut context = Context::new();
        assert!(matches!(run(&mut context, "[1, 2][1.0];"),
                         Err(SemanticError::TypeError { .. })));
        assert!(matches!(run(&mut context, "5[0];"),
                         Err(SemanticError::TypeError { .. })));
    }
}
