#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum SyntaxError {
    /// No token pattern matched at the current position.
    UnrecognizedInput {
        /// The offending source text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found a token that cannot start or continue the current construct.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A specific token was required but something else was found.
    ExpectedToken {
        /// What the parser was looking for.
        expected: String,
        /// What it found instead.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The last line that was read.
        line: usize,
    },
    /// The left-hand side of `=` is neither a name nor an indexed name.
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The construct is valid in the full grammar but disabled by the active
    /// dialect.
    FeatureDisabled {
        /// Name of the disabled feature.
        feature: &'static str,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl SyntaxError {
    /// Returns the source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnrecognizedInput { line, .. }
            | Self::UnexpectedToken { line, .. }
            | Self::ExpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line }
            | Self::InvalidAssignmentTarget { line }
            | Self::FeatureDisabled { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedInput { text, line } => {
                write!(f, "Error on line {line}: Unrecognized input: {text}.")
            },
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },
            Self::ExpectedToken { expected, found, line } => {
                write!(f, "Error on line {line}: Expected {expected}, found {found}.")
            },
            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },
            Self::InvalidAssignmentTarget { line } => write!(f,
                                                             "Error on line {line}: Only a name or an indexed name can be assigned to."),
            Self::FeatureDisabled { feature, line } => write!(f,
                                                              "Error on line {line}: {feature} are not available in this dialect."),
        }
    }
}

impl std::error::Error for SyntaxError {}
