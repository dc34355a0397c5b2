/// Syntax errors.
///
/// Defines every failure that can occur while tokenizing or parsing source
/// text: unrecognized characters, unexpected or missing tokens, invalid
/// assignment targets and constructs disabled by the active dialect.
pub mod syntax_error;
/// Semantic errors.
///
/// Contains all error types that can be raised while evaluating a program:
/// operand type mismatches, division by zero, out-of-range indices, unknown
/// names, wrong argument counts, overflow and runaway recursion.
pub mod semantic_error;

pub use semantic_error::SemanticError;
pub use syntax_error::SyntaxError;

/// Either of the two error categories a program run can end with.
///
/// The driver only distinguishes the category, see [`Error::label`]; library
/// callers can match on the wrapped value for details.
#[derive(Debug)]
pub enum Error {
    /// The source text did not match the grammar.
    Syntax(SyntaxError),
    /// Evaluation violated a runtime rule.
    Semantic(SemanticError),
}

impl Error {
    /// Returns the fixed console message for this error category.
    ///
    /// # Example
    /// ```
    /// use quill::{Dialect, run};
    ///
    /// let err = run("x = ;", &Dialect::default()).unwrap_err();
    /// assert_eq!(err.label(), "SYNTAX ERROR");
    ///
    /// let err = run("x = 1 / 0;", &Dialect::default()).unwrap_err();
    /// assert_eq!(err.label(), "SEMANTIC ERROR");
    /// ```
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Syntax(_) => "SYNTAX ERROR",
            Self::Semantic(_) => "SEMANTIC ERROR",
        }
    }
}

impl From<SyntaxError> for Error {
    fn from(e: SyntaxError) -> Self {
        Self::Syntax(e)
    }
}

impl From<SemanticError> for Error {
    fn from(e: SemanticError) -> Self {
        Self::Semantic(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Semantic(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(e) => Some(e),
            Self::Semantic(e) => Some(e),
        }
    }
}
