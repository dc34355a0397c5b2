use std::rc::Rc;

use crate::{ast::LiteralValue, error::SemanticError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// assignments, function returns and conditions. There is no boolean type:
/// comparisons and logic produce `Integer(0)` or `Integer(1)`.
///
/// Strings and lists are shared through `Rc` and copied on write, so cloning
/// a `Value` is cheap and two variables never alias one list.
///
/// The derived `PartialEq` is structural (`Integer(1) != Real(1.0)`); the
/// language's `==` is [`Value::equals`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A double precision floating-point number.
    Real(f64),
    /// An immutable string.
    Str(Rc<str>),
    /// An ordered list of values.
    List(Rc<Vec<Self>>),
    /// The result of statements and of functions that return nothing.
    Unit,
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(Rc::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(Rc::from(v))
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(Rc::new(v))
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Integer(i) => (*i).into(),
            LiteralValue::Real(n) => (*n).into(),
            LiteralValue::Bool(b) => (*b).into(),
            LiteralValue::Str(s) => s.as_str().into(),
        }
    }
}

impl Value {
    /// The name of the value's type, as used in error messages.
    ///
    /// # Example
    /// ```
    /// use quill::Value;
    ///
    /// assert_eq!(Value::from(1.5).type_name(), "real");
    /// assert_eq!(Value::from(true).type_name(), "integer");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Str(_) => "string",
            Self::List(_) => "list",
            Self::Unit => "unit",
        }
    }

    /// Returns the integer, or a type error naming `what` was expected.
    ///
    /// # Parameters
    /// - `what`: Describes the operand, e.g. `"condition"` or `"index"`.
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(i64)`: The integer value.
    /// - `Err(SemanticError::TypeError)`: If not an integer.
    pub fn as_integer(&self, what: &str, line: usize) -> EvalResult<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            other => {
                let details = format!("{what} must be an integer, found {}", other.type_name());
                Err(SemanticError::TypeError { details, line })
            },
        }
    }

    /// Lenient truthiness.
    ///
    /// Nonzero numbers and non-empty strings and lists are true; unit is
    /// false.
    ///
    /// # Example
    /// ```
    /// use quill::Value;
    ///
    /// assert!(Value::from("a").is_truthy());
    /// assert!(!Value::from(Vec::new()).is_truthy());
    /// assert!(!Value::Real(0.0).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Integer(n) => *n != 0,
            Self::Real(r) => *r != 0.0,
            Self::Str(s) => !s.is_empty(),
            Self::List(items) => !items.is_empty(),
            Self::Unit => false,
        }
    }

    /// Value equality as the language's `==` sees it.
    ///
    /// Integers and reals compare numerically, strings by content and lists
    /// element by element. Values of unrelated types are never equal.
    ///
    /// # Example
    /// ```
    /// use quill::Value;
    ///
    /// assert!(Value::Integer(2).equals(&Value::Real(2.0)));
    /// assert!(Value::from(vec![Value::Integer(1)]).equals(&Value::from(vec![Value::Real(1.0)])));
    /// assert!(!Value::from("1").equals(&Value::Integer(1)));
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Real(a), Self::Real(b)) => a == b,
            (Self::Integer(a), Self::Real(b)) | (Self::Real(b), Self::Integer(a)) => {
                // Compared in i128 so that reals just past i64::MAX do not
                // saturate onto it.
                b.fract() == 0.0 && (*b as i128) == i128::from(*a)
            },
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::List(a), Self::List(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.equals(y))
            },
            (Self::Unit, Self::Unit) => true,
            _ => false,
        }
    }

    /// Returns a wrapper that displays the value the way it is written in
    /// source: strings are quoted.
    #[must_use]
    pub const fn repr(&self) -> Repr<'_> {
        Repr(self)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r:?}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::List(items) => {
                write!(f, "[")?;

                for (index, value) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{}", value.repr())?;
                }

                write!(f, "]")
            },
            Self::Unit => write!(f, "None"),
        }
    }
}

/// Display adapter produced by [`Value::repr`].
///
/// # Example
/// ```
/// use quill::Value;
///
/// let list = Value::from(vec![Value::from("a"), Value::Real(2.0)]);
/// assert_eq!(list.to_string(), "['a', 2.0]");
/// assert_eq!(Value::from("a").repr().to_string(), "'a'");
/// assert_eq!(Value::from("a").to_string(), "a");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Repr<'a>(&'a Value);

impl std::fmt::Display for Repr<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Value::Str(s) => write!(f, "'{s}'"),
            other => write!(f, "{other}"),
        }
    }
}
