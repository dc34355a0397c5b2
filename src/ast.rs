/// A constant written directly in the source.
///
/// Booleans stay distinct here so the tree records what was written; they
/// become integers only when evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Integer(i64),
    Real(f64),
    /// `true` or `false`.
    Bool(bool),
    /// The text between the quotes.
    Str(String),
}

impl From<i64> for LiteralValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<f64> for LiteralValue {
    fn from(r: f64) -> Self {
        Self::Real(r)
    }
}

impl From<bool> for LiteralValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// An expression node.
///
/// Expressions always produce a value when evaluated. Each node owns its
/// children and records the line it started on.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal {
        value: LiteralValue,
        line:  usize,
    },
    /// `[a, b, c]`, or the empty list token `[]`.
    ListLiteral {
        elements: Vec<Self>,
        line:     usize,
    },
    Variable {
        name: String,
        line: usize,
    },
    /// `NOT x`.
    UnaryOp {
        op:   UnaryOperator,
        expr: Box<Self>,
        line: usize,
    },
    /// Any infix operator. `line` is the operator's line.
    BinaryOp {
        left:  Box<Self>,
        op:    BinaryOperator,
        right: Box<Self>,
        line:  usize,
    },
    /// `container[index]` on a list or a string.
    Index {
        container: Box<Self>,
        index:     Box<Self>,
        line:      usize,
    },
    /// A call to a user-defined function, e.g. `square(x)`.
    FunctionCall {
        name:      String,
        /// Argument expressions, evaluated left to right in the caller.
        arguments: Vec<Self>,
        line:      usize,
    },
}

impl Expr {
    /// The line this expression starts on, used in error messages.
    ///
    /// ## Example
    /// ```
    /// use quill::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::ListLiteral { line, .. }
            | Self::Variable { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::Index { line, .. }
            | Self::FunctionCall { line, .. } => *line,
        }
    }
}

/// The left-hand side of an assignment.
///
/// Only names and index chains rooted at a name can be assigned to:
/// `x = ...`, `x[0] = ...`, `grid[1][2] = ...`.
#[derive(Debug, Clone, PartialEq)]
pub enum AssignTarget {
    /// Binds or rebinds a variable.
    Name {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Replaces one element of a list.
    Index {
        /// The container being written into.
        target: Box<Self>,
        /// The position to overwrite.
        index:  Expr,
        /// Line number in the source code.
        line:   usize,
    },
}

impl AssignTarget {
    /// Converts a parsed expression into an assignment target.
    ///
    /// Returns `None` for expressions that do not denote a storage location,
    /// such as literals, calls or arithmetic.
    ///
    /// ## Example
    /// ```
    /// use quill::ast::{AssignTarget, Expr};
    ///
    /// let name = Expr::Variable { name: "x".into(),
    ///                             line: 1, };
    /// assert!(AssignTarget::from_expr(name).is_some());
    ///
    /// let call = Expr::FunctionCall { name:      "f".into(),
    ///                                 arguments: vec![],
    ///                                 line:      1, };
    /// assert!(AssignTarget::from_expr(call).is_none());
    /// ```
    #[must_use]
    pub fn from_expr(expr: Expr) -> Option<Self> {
        match expr {
            Expr::Variable { name, line } => Some(Self::Name { name, line }),
            Expr::Index { container,
                          index,
                          line, } => Some(Self::Index { target: Box::new(Self::from_expr(*container)?),
                                                        index: *index,
                                                        line }),
            _ => None,
        }
    }

    /// Returns the variable the target is rooted at.
    #[must_use]
    pub fn root_name(&self) -> &str {
        match self {
            Self::Name { name, .. } => name,
            Self::Index { target, .. } => target.root_name(),
        }
    }
}

/// Represents a user-defined function definition.
///
/// A function binds an ordered list of parameter names to a block body.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names.
    pub params: Vec<String>,
    /// The statements of the function body.
    pub body:   Vec<Statement>,
    /// Line number in the source code.
    pub line:   usize,
}

/// Represents a statement.
///
/// Statements do not produce values on their own; they bind variables,
/// print, steer control flow or return from a function.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A user-defined function declaration.
    Function(FunctionDef),
    /// A `{ ... }` group of statements. Blocks do not open a new scope.
    Block {
        /// Statements inside the block.
        statements: Vec<Self>,
        /// Line number in the source code.
        line:       usize,
    },
    /// `if (condition) statement`
    If {
        /// The condition expression.
        condition:   Expr,
        /// Statement executed when the condition holds.
        then_branch: Box<Self>,
        /// Line number in the source code.
        line:        usize,
    },
    /// `if (condition) statement else statement`
    IfElse {
        /// The condition expression.
        condition:   Expr,
        /// Statement executed when the condition holds.
        then_branch: Box<Self>,
        /// Statement executed otherwise.
        else_branch: Box<Self>,
        /// Line number in the source code.
        line:        usize,
    },
    /// `while (condition) { ... }`
    While {
        /// The loop condition, re-evaluated before every iteration.
        condition: Expr,
        /// The statements of the loop body.
        body:      Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `print expr;`
    Print {
        /// The value to print.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `return expr;` or a bare `return;`
    Return {
        /// The returned value; `None` returns unit.
        value: Option<Expr>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `target = expr;`
    Assign {
        /// Where the value is stored.
        target: AssignTarget,
        /// The value which is being assigned.
        value:  Expr,
        /// Line number in the source code.
        line:   usize,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Function(def) => def.line,
            Self::Block { line, .. }
            | Self::If { line, .. }
            | Self::IfElse { line, .. }
            | Self::While { line, .. }
            | Self::Print { line, .. }
            | Self::Return { line, .. }
            | Self::Assign { line, .. }
            | Self::Expression { line, .. } => *line,
        }
    }

    /// A short name for the kind of statement, used in trace logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Function(_) => "function definition",
            Self::Block { .. } => "block",
            Self::If { .. } => "if",
            Self::IfElse { .. } => "if-else",
            Self::While { .. } => "while",
            Self::Print { .. } => "print",
            Self::Return { .. } => "return",
            Self::Assign { .. } => "assignment",
            Self::Expression { .. } => "expression",
        }
    }
}

/// The root of a parsed program: its top-level statements in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level statements.
    pub statements: Vec<Statement>,
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparisons and logic.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// True division (`/`)
    Div,
    /// Floor division (`//`)
    FloorDiv,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`**`)
    Pow,
    /// Logical and (`AND`)
    And,
    /// Logical or (`OR`)
    Or,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Logical NOT (`NOT x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, FloorDiv, Greater, GreaterEqual, Less, LessEqual, Mod, Mul,
            NotEqual, Or, Pow, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            FloorDiv => "//",
            Mod => "%",
            Pow => "**",
            And => "AND",
            Or => "OR",
            Equal => "==",
            NotEqual => "!=",
            Less => "<",
            LessEqual => "<=",
            Greater => ">",
            GreaterEqual => ">=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Not => write!(f, "NOT"),
        }
    }
}
