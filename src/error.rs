//! Error types for the minilisp evaluator

use thiserror::Error;

/// Evaluator errors
///
/// Every error aborts the current line only. The symbol table is left exactly
/// as it was before the failing operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // Syntax errors
    /// The line did not end with a reduced closing delimiter
    ///
    /// **Triggered by:** trailing tokens or an unclosed form
    /// **Example:** `(add 1 2`
    #[error("Syntax error: line must end with a closing delimiter")]
    MissingClosingDelimiter,

    /// A closing delimiter with no open form to close
    ///
    /// **Example:** `)`, `5)`, `(add 1 2))`
    #[error("Syntax error: unmatched closing delimiter")]
    UnmatchedClosingDelimiter,

    // Evaluation errors
    /// Operator name has no binding in the symbol table
    ///
    /// **Example:** `(foo 1 2)`, or `(x 1)` after `(set x nil)`
    #[error("Symbol not found: {name}")]
    UndefinedSymbol {
        /// Symbol name
        name: String,
    },

    /// Operator name is bound, but not to a built-in
    ///
    /// **Example:** `(set x 5)` followed by `(x 1)`
    #[error("Symbol is not callable: {name} ({type_name})")]
    NotCallable {
        /// Symbol name
        name: String,
        /// Type of the bound value
        type_name: String,
    },

    /// Built-in received the wrong number of arguments
    #[error("Wrong arity for {builtin}: expected {expected} arguments, got {got}")]
    WrongArity {
        /// Built-in name
        builtin: String,
        /// Accepted argument count, e.g. `2` or `at least 2`
        expected: String,
        /// Actual argument count
        got: usize,
    },

    /// Built-in received an argument of the wrong kind
    ///
    /// **Example:** `(add 1 a)`, `(set 5 3)`, `(set x hello)`
    #[error("Bad argument type for {builtin}: expected {expected}, got {got}")]
    BadArgumentType {
        /// Built-in name
        builtin: String,
        /// Expected argument kind
        expected: String,
        /// Offending argument as written
        got: String,
    },

    /// Integer division by zero in `div`
    #[error("Division by zero")]
    DivisionByZero,

    /// Writing `print` output failed
    #[error("Output error: {message}")]
    Output {
        /// Underlying I/O error message
        message: String,
    },
}

/// Error classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed line structure
    Syntax,
    /// Failure while resolving or invoking a form
    Eval,
}

impl Error {
    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingClosingDelimiter | Error::UnmatchedClosingDelimiter => ErrorKind::Syntax,
            _ => ErrorKind::Eval,
        }
    }

    /// True for malformed-line errors
    pub fn is_syntax(&self) -> bool {
        self.kind() == ErrorKind::Syntax
    }

    pub(crate) fn wrong_arity(builtin: &str, expected: impl Into<String>, got: usize) -> Self {
        Error::WrongArity {
            builtin: builtin.to_string(),
            expected: expected.into(),
            got,
        }
    }

    pub(crate) fn bad_argument(
        builtin: &str,
        expected: impl Into<String>,
        got: impl Into<String>,
    ) -> Self {
        Error::BadArgumentType {
            builtin: builtin.to_string(),
            expected: expected.into(),
            got: got.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Output {
            message: err.to_string(),
        }
    }
}

/// Result type for minilisp operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_classification() {
        assert_eq!(Error::MissingClosingDelimiter.kind(), ErrorKind::Syntax);
        assert!(Error::UnmatchedClosingDelimiter.is_syntax());
        assert_eq!(Error::DivisionByZero.kind(), ErrorKind::Eval);
        assert!(!Error::wrong_arity("add", "at least 2", 1).is_syntax());
    }

    #[test]
    fn test_messages() {
        let err = Error::UndefinedSymbol {
            name: "foo".to_string(),
        };
        assert_eq!(err.to_string(), "Symbol not found: foo");

        let err = Error::wrong_arity("set", "2", 3);
        assert_eq!(
            err.to_string(),
            "Wrong arity for set: expected 2 arguments, got 3"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io.into();
        assert!(matches!(err, Error::Output { .. }));
    }
}
