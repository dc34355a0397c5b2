use std::collections::HashMap;

use log::trace;

use crate::{
    error::SemanticError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Pushes a new call frame onto the scope stack.
    pub(crate) fn push_scope(&mut self, frame: HashMap<String, Value>) {
        self.scope_stack.push(frame);
        trace!("pushed frame, depth {}", self.depth());
    }

    /// Pops the innermost call frame. The global scope is never popped.
    pub(crate) fn pop_scope(&mut self) {
        if self.scope_stack.len() > 1 {
            self.scope_stack.pop();
        }
        trace!("popped frame, depth {}", self.depth());
    }

    /// Runs `body` inside a new call frame.
    ///
    /// The frame is popped after `body` returns, whether it succeeded or
    /// failed, so the stack is balanced again when the error reaches the
    /// caller.
    ///
    /// # Parameters
    /// - `frame`: Initial bindings of the frame (the call's parameters).
    /// - `body`: Code to run with the frame on top of the stack.
    ///
    /// # Returns
    /// Whatever `body` returns.
    pub(crate) fn with_frame<T>(&mut self,
                                frame: HashMap<String, Value>,
                                body: impl FnOnce(&mut Self) -> EvalResult<T>)
                                -> EvalResult<T> {
        self.push_scope(frame);
        let result = body(self);
        self.pop_scope();
        result
    }

    /// Looks up a variable: the innermost frame first, then the global scope.
    ///
    /// Frames of callers further down the stack are not visible.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        let top = self.scope_stack.last()?;

        top.get(name).or_else(|| self.scope_stack.first()?.get(name))
    }

    /// Mutable counterpart of [`Context::get_variable`].
    pub(crate) fn get_variable_mut(&mut self, name: &str) -> Option<&mut Value> {
        let last = self.scope_stack.len().checked_sub(1)?;
        let scope = if self.scope_stack[last].contains_key(name) { last } else { 0 };

        self.scope_stack[scope].get_mut(name)
    }

    /// Returns a copy of a variable's value.
    ///
    /// # Errors
    /// [`SemanticError::UndefinedVariable`] if neither the innermost frame nor
    /// the global scope binds `name`.
    pub(crate) fn lookup(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.get_variable(name)
            .cloned()
            .ok_or_else(|| SemanticError::UndefinedVariable { name: name.to_string(),
                                                              line })
    }

    /// Binds `name` in the innermost scope, shadowing any global of the same
    /// name while a call is active.
    pub(crate) fn define_local(&mut self, name: &str, value: Value) {
        if let Some(scope) = self.scope_stack.last_mut() {
            scope.insert(name.to_string(), value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_hide_callers_but_not_globals() {
        let mut context = Context::new();
        context.define_local("g", Value::Integer(1));

        context.with_frame(HashMap::new(), |outer| {
                   outer.define_local("local", Value::Integer(2));

                   outer.with_frame(HashMap::new(), |inner| {
                            assert_eq!(inner.get_variable("g"), Some(&Value::Integer(1)));
                            assert_eq!(inner.get_variable("local"), None);
                            Ok(())
                        })
               })
               .unwrap();

        assert_eq!(context.get_variable("local"), None);
    }

    #[test]
    fn frame_is_popped_when_the_body_fails() {
        let mut context = Context::new();

        let result: EvalResult<()> = context.with_frame(HashMap::new(), |ctx| {
                                                ctx.lookup("missing", 3).map(|_| ())
                                            });

        assert_eq!(result,
                   Err(SemanticError::UndefinedVariable { name: "missing".into(),
                                                          line: 3, }));
        assert_eq!(context.depth(), 0);
    }

    #[test]
    fn local_binding_shadows_global() {
        let mut context = Context::new();
        context.define_local("x", Value::Integer(1));

        context.with_frame(HashMap::new(), |ctx| {
                   ctx.define_local("x", Value::Integer(2));
                   *ctx.get_variable_mut("x").unwrap() = Value::Integer(3);
                   assert_eq!(ctx.lookup("x", 1), Ok(Value::Integer(3)));
                   Ok(())
               })
               .unwrap();

        assert_eq!(context.lookup("x", 1), Ok(Value::Integer(1)));
    }

    #[test]
    fn global_scope_survives_extra_pops() {
        let mut context = Context::new();
        context.pop_scope();
        context.define_local("x", Value::Integer(1));
        assert_eq!(context.depth(), 0);
        assert!(context.get_variable("x").is_some());
    }
}
