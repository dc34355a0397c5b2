use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{AssignTarget, Expr, FunctionDef, Program, Statement},
    error::SemanticError,
    interpreter::{dialect::Dialect, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `SemanticError` describing the failure.
pub type EvalResult<T> = Result<T, SemanticError>;

/// The control signal produced by executing a statement.
///
/// Every statement that contains other statements checks the signal of each
/// child and stops as soon as one returns.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Proceed with the next statement.
    Continue,
    /// A `return` was executed; unwind to the enclosing call.
    Return(Value),
}

/// Where `print` statements write.
#[derive(Debug)]
enum Output {
    Stdout,
    Buffer(String),
}

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the scope stack, all user-defined
/// functions, the active [`Dialect`] and the output sink used by `print`.
///
/// ## Usage
///
/// `Context` is created once and reused for every program evaluated with it.
/// Globals and function definitions persist between calls to
/// [`Context::evaluate`], which is what a line-by-line driver relies on.
///
/// ```
/// use quill::{Context, Value, parse};
///
/// let mut context = Context::new().capturing();
///
/// context.evaluate(&parse("x = 20;").unwrap()).unwrap();
/// let value = context.evaluate(&parse("print x; x + 1;").unwrap()).unwrap();
///
/// assert_eq!(value, Value::Integer(21));
/// assert_eq!(context.output(), "20\n");
/// ```
#[derive(Debug)]
pub struct Context {
    /// Scope 0 is the global scope; every active call adds one frame.
    pub(crate) scope_stack: Vec<HashMap<String, Value>>,
    /// User-defined functions by name. Redefinition replaces.
    pub(crate) functions:   HashMap<String, Rc<FunctionDef>>,
    pub(crate) dialect:     Dialect,
    output:                 Output,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a new evaluation context with an empty global scope, no
    /// user-defined functions and the default dialect. `print` writes to
    /// standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_dialect(Dialect::default())
    }

    /// Creates a new evaluation context using `dialect`.
    #[must_use]
    pub fn with_dialect(dialect: Dialect) -> Self {
        Self { scope_stack: vec![HashMap::new()],
               functions: HashMap::new(),
               dialect,
               output: Output::Stdout }
    }

    /// Makes `print` append to an in-memory buffer instead of standard
    /// output. The buffer is read with [`Context::output`].
    #[must_use]
    pub fn capturing(mut self) -> Self {
        self.output = Output::Buffer(String::new());
        self
    }

    /// Everything printed so far when capturing, otherwise the empty string.
    #[must_use]
    pub fn output(&self) -> &str {
        match &self.output {
            Output::Stdout => "",
            Output::Buffer(buffer) => buffer,
        }
    }

    /// The active dialect.
    #[must_use]
    pub const fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    /// Number of function frames currently on the scope stack.
    ///
    /// This is zero whenever no call is in progress, including after a call
    /// that failed.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.scope_stack.len().saturating_sub(1)
    }

    /// Evaluates a whole program.
    ///
    /// Top-level statements run in order. A top-level `return` ends the
    /// program with its value; otherwise the result is the value of the last
    /// top-level expression statement, or [`Value::Unit`] if there is none.
    ///
    /// # Errors
    /// Returns the first [`SemanticError`]; statements before it keep their
    /// effects.
    pub fn evaluate(&mut self, program: &Program) -> EvalResult<Value> {
        let mut last = Value::Unit;

        for statement in &program.statements {
            if let Statement::Expression { expr, .. } = statement {
                last = self.eval(expr)?;
                continue;
            }

            if let Flow::Return(value) = self.eval_statement(statement)? {
                return Ok(value);
            }
        }

        Ok(last)
    }

    /// Executes a single statement.
    ///
    /// Handles function definitions, blocks, conditionals, loops, `print`,
    /// `return`, assignments and plain expression statements. Statements may
    /// modify the context; only `return` produces a value, carried by
    /// [`Flow::Return`].
    ///
    /// # Parameters
    /// - `statement`: Statement to execute.
    ///
    /// # Returns
    /// The control signal for the enclosing statement.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Flow> {
        match statement {
            Statement::Function(def) => {
                self.define_function(def);
                Ok(Flow::Continue)
            },
            Statement::Block { statements, .. } => self.exec_block(statements),
            Statement::If { condition,
                            then_branch,
                            line, } => self.exec_if(condition, then_branch, None, *line),
            Statement::IfElse { condition,
                                then_branch,
                                else_branch,
                                line, } => {
                self.exec_if(condition, then_branch, Some(else_branch.as_ref()), *line)
            },
            Statement::While { condition,
                               body,
                               line, } => self.exec_while(condition, body, *line),
            Statement::Print { value, .. } => {
                let value = self.eval(value)?;
                self.emit(&value);
                Ok(Flow::Continue)
            },
            Statement::Return { value, .. } => {
                let value = match value {
                    Some(expr) => self.eval(expr)?,
                    None => Value::Unit,
                };
                Ok(Flow::Return(value))
            },
            Statement::Assign { target, value, line } => {
                let value = self.eval(value)?;
                match target {
                    AssignTarget::Name { name, .. } => self.define_local(name, value),
                    AssignTarget::Index { .. } => self.assign_index(target, value, *line)?,
                }
                Ok(Flow::Continue)
            },
            Statement::Expression { expr, .. } => {
                self.eval(expr)?;
                Ok(Flow::Continue)
            },
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Operands of
    /// binary operators are always both evaluated, left first, before the
    /// operator is applied; `AND` and `OR` do not short-circuit.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The value of the expression.
    ///
    /// # Example
    /// ```
    /// use quill::{Context, Value, ast::Expr};
    ///
    /// let mut context = Context::new();
    /// let expr = Expr::ListLiteral { elements: vec![],
    ///                                line:     1, };
    ///
    /// assert_eq!(context.eval(&expr).unwrap(), Value::from(vec![]));
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::ListLiteral { elements, .. } => {
                let values = elements.iter()
                                     .map(|element| self.eval(element))
                                     .collect::<EvalResult<Vec<_>>>()?;
                Ok(Value::from(values))
            },
            Expr::Variable { name, line } => self.lookup(name, *line),
            Expr::UnaryOp { op, expr, line } => {
                let operand = self.eval(expr)?;
                Self::eval_unary(*op, &operand, *line)
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                self.eval_binary(*op, &left, &right, *line)
            },
            Expr::Index { container,
                          index,
                          line, } => {
                let container = self.eval(container)?;
                let index = self.eval(index)?;
                Self::eval_index(&container, &index, *line)
            },
            Expr::FunctionCall { name,
                                 arguments,
                                 line, } => self.call_function(name, arguments, *line),
        }
    }

    /// Writes the display form of `value` and a newline to the output sink.
    fn emit(&mut self, value: &Value) {
        match &mut self.output {
            Output::Stdout => println!("{value}"),
            Output::Buffer(buffer) => {
                buffer.push_str(&value.to_string());
                buffer.push('\n');
            },
        }
    }
}
