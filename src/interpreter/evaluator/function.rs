use std::{collections::HashMap, rc::Rc};

use log::debug;

use crate::{
    ast::{Expr, FunctionDef},
    error::SemanticError,
    interpreter::{
        evaluator::core::{Context, EvalResult, Flow},
        value::core::Value,
    },
};

impl Context {
    /// Registers a user-defined function. A later definition with the same
    /// name replaces the earlier one.
    pub(crate) fn define_function(&mut self, def: &FunctionDef) {
        debug!("defining {}({}) on line {}",
               def.name,
               def.params.join(", "),
               def.line);

        self.functions.insert(def.name.clone(), Rc::new(def.clone()));
    }

    /// Evaluates a call to a user-defined function.
    ///
    /// The function is retrieved from the context by name and its parameter
    /// count must match the number of arguments. The arguments are evaluated
    /// left to right in the caller's scope. A new frame binding the parameters
    /// is then pushed, the body is executed, and the frame is popped again on
    /// every path, including errors.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Unevaluated argument expressions.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The value of the executed `return`, or [`Value::Unit`] if the body
    /// finishes without one.
    ///
    /// # Errors
    /// - Unknown function name.
    /// - Wrong number of arguments.
    /// - Nesting deeper than the dialect's `max_call_depth`.
    /// - Any error raised while evaluating the arguments or the body.
    pub(crate) fn call_function(&mut self,
                                name: &str,
                                arguments: &[Expr],
                                line: usize)
                                -> EvalResult<Value> {
        let func = self.functions
                       .get(name)
                       .cloned()
                       .ok_or_else(|| SemanticError::UndefinedFunction { name: name.to_string(),
                                                                         line })?;

        if arguments.len() != func.params.len() {
            return Err(SemanticError::ArityMismatch { name: name.to_string(),
                                                      expected: func.params.len(),
                                                      found: arguments.len(),
                                                      line });
        }

        let mut arg_vals = Vec::with_capacity(arguments.len());
        for argument in arguments {
            arg_vals.push(self.eval(argument)?);
        }

        if self.depth() >= self.dialect.max_call_depth {
            debug!("call to {name} on line {line} exceeds depth {}",
                   self.dialect.max_call_depth);
            return Err(SemanticError::CallDepthExceeded { limit: self.dialect.max_call_depth,
                                                          line });
        }

        let frame = func.params
                        .iter()
                        .cloned()
                        .zip(arg_vals)
                        .collect::<HashMap<_, _>>();

        debug!("calling {name} on line {line} at depth {}", self.depth() + 1);

        let flow = self.with_frame(frame, |ctx| ctx.exec_block(&func.body))?;

        Ok(match flow {
               Flow::Return(value) => value,
               Flow::Continue => Value::Unit,
           })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Dialect,
        interpreter::{dialect::DEFAULT_MAX_CALL_DEPTH, parser::core::parse},
    };

    fn run(context: &mut Context, source: &str) -> EvalResult<Value> {
        context.evaluate(&parse(source).unwrap())
    }

    #[test]
    fn redefinition_replaces_the_function() {
        let mut context = Context::new();
        let source = "f() { return 1; } f() { return 2; } f();";
        assert_eq!(run(&mut context, source), Ok(Value::Integer(2)));
    }

    #[test]
    fn arity_is_checked() {
        let mut context = Context::new();
        assert_eq!(run(&mut context, "pair(a, b) { return a; }\npair(1);"),
                   Err(SemanticError::ArityMismatch { name:     "pair".into(),
                                                      expected: 2,
                                                      found:    1,
                                                      line:     2, }));
    }

    #[test]
    fn unknown_function_is_reported() {
        let mut context = Context::new();
        assert!(matches!(run(&mut context, "ghost(1);"),
                         Err(SemanticError::UndefinedFunction { .. })));
    }

    #[test]
    fn parameters_shadow_globals_without_changing_them() {
        let mut context = Context::new();
        let source = "x = 1; set(x) { x = x + 10; return x; } r = set(5); [x, r];";
        assert_eq!(run(&mut context, source).unwrap().to_string(), "[1, 15]");
    }

    #[test]
    fn lists_are_passed_by_value() {
        let mut context = Context::new();
        let source = "poke(xs) { xs[0] = 99; return xs[0]; } a = [1]; [poke(a), a[0]];";
        assert_eq!(run(&mut context, source).unwrap().to_string(), "[99, 1]");
    }

    #[test]
    fn recursion_works() {
        let mut context = Context::new();
        let source = "fact(n) { if (n <= 1) { return 1; } return n * fact(n - 1); } fact(10);";
        assert_eq!(run(&mut context, source), Ok(Value::Integer(3_628_800)));
    }

    #[test]
    fn runaway_recursion_is_bounded() {
        let mut context = Context::new();
        assert_eq!(run(&mut context, "down() { return down(); } down();"),
                   Err(SemanticError::CallDepthExceeded { limit: DEFAULT_MAX_CALL_DEPTH,
                                                          line:  1, }));
        assert_eq!(context.depth(), 0);
    }

    #[test]
    fn default_depth_fits_a_test_thread_stack() {
        let mut context = Context::new().capturing();
        let source = "down(n) {
                          while (1) {
                              if (n > 0) {
                                  { return down(n - 1) + 0 * n; }
                              } else {
                                  return [n][0];
                              }
                          }
                      }";
        run(&mut context, source).unwrap();

        // `down(n)` nests n + 1 calls.
        let deepest = format!("down({});", DEFAULT_MAX_CALL_DEPTH - 1);
        assert_eq!(run(&mut context, &deepest), Ok(Value::Integer(0)));

        let too_deep = format!("down({});", DEFAULT_MAX_CALL_DEPTH);
        assert!(matches!(run(&mut context, &too_deep),
                         Err(SemanticError::CallDepthExceeded { .. })));
        assert_eq!(context.depth(), 0);
    }

    #[test]
    fn custom_depth_limit_applies() {
        let dialect = Dialect { max_call_depth: 3,
                                ..Dialect::default() };
        let mut context = Context::with_dialect(dialect);
        let source = "nest(n) { if (n == 0) { return 0; } return nest(n - 1); }";
        run(&mut context, source).unwrap();
        assert_eq!(run(&mut context, "nest(2);"), Ok(Value::Integer(0)));
        assert!(matches!(run(&mut context, "nest(3);"),
                         Err(SemanticError::CallDepthExceeded { limit: 3, .. })));
        assert_eq!(context.depth(), 0);
    }
}
