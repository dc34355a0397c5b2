use clap::ValueEnum;

use crate::{
    ast::{AssignTarget, Expr, LiteralValue, Program, Statement},
    error::SyntaxError,
    interpreter::parser::core::ParseResult,
};

/// How arithmetic treats operands of different numeric types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ArithmeticMode {
    /// Mixed Integer/Real operands promote the integer to a real.
    #[default]
    Promote,
    /// Both operands must have the same numeric type.
    SameType,
}

/// What an `if` or `while` condition may evaluate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ConditionMode {
    /// The condition must be an Integer; nonzero is true.
    #[default]
    Integer,
    /// Any value is accepted: nonzero numbers and non-empty strings or lists
    /// are true, unit is false.
    Truthy,
}

/// Grammar and typing configuration.
///
/// The language comes in several flavours that differ only in which
/// constructs are available and how strictly operands are typed. A `Dialect`
/// selects one of them; the parser and evaluator consult it instead of
/// hard-coding a policy.
///
/// # Example
/// ```
/// use quill::{Dialect, interpreter::dialect::ArithmeticMode};
///
/// let dialect = Dialect { lists: false,
///                         ..Dialect::default() };
/// assert!(quill::parse_with("x = [1];", &dialect).is_err());
///
/// assert_eq!(Dialect::strict().arithmetic, ArithmeticMode::SameType);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialect {
    /// Mixed-type arithmetic policy.
    pub arithmetic:     ArithmeticMode,
    /// Condition typing policy.
    pub conditions:     ConditionMode,
    /// Whether list literals, indexing and index assignment are allowed.
    pub lists:          bool,
    /// Whether function definitions and calls are allowed.
    pub functions:      bool,
    /// Whether the `true` and `false` keywords are allowed.
    pub booleans:       bool,
    /// Maximum number of nested function calls.
    pub max_call_depth: usize,
}

/// Default bound on nested calls.
///
/// One call costs roughly a dozen evaluator frames on the host stack, more in
/// unoptimised builds. This bound keeps a program inside the 2 MiB stack a
/// spawned thread gets by default.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 64;

impl Default for Dialect {
    fn default() -> Self {
        Self { arithmetic:     ArithmeticMode::Promote,
               conditions:     ConditionMode::Integer,
               lists:          true,
               functions:      true,
               booleans:       true,
               max_call_depth: DEFAULT_MAX_CALL_DEPTH, }
    }
}

impl Dialect {
    /// The stricter flavour: arithmetic requires operands of identical type.
    #[must_use]
    pub fn strict() -> Self {
        Self { arithmetic: ArithmeticMode::SameType,
               ..Self::default() }
    }

    /// Rejects any construct this dialect disables.
    ///
    /// The whole tree is walked, including function bodies that are never
    /// called.
    ///
    /// # Errors
    /// Returns [`SyntaxError::FeatureDisabled`] naming the first disabled
    /// construct found, in source order.
    pub fn check(&self, program: &Program) -> ParseResult<()> {
        program.statements
               .iter()
               .try_for_each(|statement| self.check_statement(statement))
    }

    fn check_statement(&self, statement: &Statement) -> ParseResult<()> {
        match statement {
            Statement::Function(def) => {
                require(self.functions, "functions", def.line)?;
                def.body.iter().try_for_each(|s| self.check_statement(s))
            },
            Statement::Block { statements, .. } => {
                statements.iter().try_for_each(|s| self.check_statement(s))
            },
            Statement::If { condition,
                            then_branch,
                            .. } => {
                self.check_expr(condition)?;
                self.check_statement(then_branch)
            },
            Statement::IfElse { condition,
                                then_branch,
                                else_branch,
                                .. } => {
                self.check_expr(condition)?;
                self.check_statement(then_branch)?;
                self.check_statement(else_branch)
            },
            Statement::While { condition, body, .. } => {
                self.check_expr(condition)?;
                body.iter().try_for_each(|s| self.check_statement(s))
            },
            Statement::Print { value, .. } | Statement::Return { value: Some(value), .. } => {
                self.check_expr(value)
            },
            Statement::Return { value: None, .. } => Ok(()),
            Statement::Assign { target, value, .. } => {
                self.check_target(target)?;
                self.check_expr(value)
            },
            Statement::Expression { expr, .. } => self.check_expr(expr),
        }
    }

    fn check_target(&self, target: &AssignTarget) -> ParseResult<()> {
        match target {
            AssignTarget::Name { .. } => Ok(()),
            AssignTarget::Index { target, index, line } => {
                require(self.lists, "lists", *line)?;
                self.check_target(target)?;
                self.check_expr(index)
            },
        }
    }

    fn check_expr(&self, expr: &Expr) -> ParseResult<()> {
        match expr {
            Expr::Literal { value: LiteralValue::Bool(_),
                            line, } => require(self.booleans, "booleans", *line),
            Expr::Literal { .. } | Expr::Variable { .. } => Ok(()),
            Expr::ListLiteral { elements, line } => {
                require(self.lists, "lists", *line)?;
                elements.iter().try_for_each(|e| self.check_expr(e))
            },
            Expr::Index { container,
                          index,
                          line, } => {
                require(self.lists, "lists", *line)?;
                self.check_expr(container)?;
                self.check_expr(index)
            },
            Expr::UnaryOp { expr, .. } => self.check_expr(expr),
            Expr::BinaryOp { left, right, .. } => {
                self.check_expr(left)?;
                self.check_expr(right)
            },
            Expr::FunctionCall { arguments, line, .. } => {
                require(self.functions, "functions", *line)?;
                arguments.iter().try_for_each(|e| self.check_expr(e))
            },
        }
    }
}

fn require(enabled: bool, feature: &'static str, line: usize) -> ParseResult<()> {
    if enabled {
        Ok(())
    } else {
        Err(SyntaxError::FeatureDisabled { feature, line })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::parser::core::parse;

    fn check(source: &str, dialect: &Dialect) -> ParseResult<()> {
        dialect.check(&parse(source)?)
    }

    #[test]
    fn default_dialect_allows_everything() {
        let source = "f(xs) { return xs[0]; }\nprint f([1, 2]);";
        assert_eq!(check(source, &Dialect::default()), Ok(()));
    }

    #[test]
    fn disabled_lists_are_found_inside_function_bodies() {
        let dialect = Dialect { lists: false,
                                ..Dialect::default() };
        let source = "x = 1;\nf() {\n  return [x];\n}";
        assert_eq!(check(source, &dialect),
                   Err(SyntaxError::FeatureDisabled { feature: "lists",
                                                      line:    3, }));
    }

    #[test]
    fn disabled_lists_reject_index_assignment() {
        let dialect = Dialect { lists: false,
                                ..Dialect::default() };
        assert!(matches!(check("x[0] = 1;", &dialect),
                         Err(SyntaxError::FeatureDisabled { feature: "lists", .. })));
    }

    #[test]
    fn disabled_functions_reject_calls_and_definitions() {
        let dialect = Dialect { functions: false,
                                ..Dialect::default() };
        assert!(check("print g(1);", &dialect).is_err());
        assert!(check("g() { }", &dialect).is_err());
        assert_eq!(check("print 1 + 2;", &dialect), Ok(()));
    }

    #[test]
    fn disabled_booleans_reject_keywords() {
        let dialect = Dialect { booleans: false,
                                ..Dialect::default() };
        assert_eq!(check("x = 1;
while (true) { x = 0; }", &dialect),
                   Err(SyntaxError::FeatureDisabled { feature: "booleans",
                                                      line:    2, }));
        assert_eq!(check("x = 1 == 1;", &dialect), Ok(()));
    }
}
