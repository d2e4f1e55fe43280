use thiserror::Error;

/// Represents all errors that can occur during execution.
///
/// The first three variants are recoverable: the evaluator reports them and
/// carries on with a default value (`null` for a failed call, `0` for a failed
/// division). The others abort the remaining statements of the current line.
/// Use [`RuntimeError::is_recoverable`] to tell them apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Called a function that has not been defined.
    #[error("Error on line {line}: Undefined function: {name}")]
    UndefinedFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("Error on line {line}: Argument count mismatch: '{name}' expects {expected}, found {found}")]
    ArityMismatch {
        /// The name of the function.
        name:     String,
        /// Number of declared parameters.
        expected: usize,
        /// Number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Attempted division by zero.
    #[error("Error on line {line}: Division by zero")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operator was applied to operands it does not support.
    #[error("Error on line {line}: Type error: {details}")]
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Integer arithmetic overflowed.
    #[error("Error on line {line}: Integer overflow while trying to compute result")]
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A string operation would produce a string too large to build.
    #[error("Error on line {line}: String result of {length} bytes is too long")]
    TextTooLong {
        /// Length in bytes the result would have had, saturated at
        /// `usize::MAX`.
        length: usize,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// Nested calls went deeper than the configured limit.
    #[error("Error on line {line}: Maximum call depth of {limit} exceeded in '{name}'")]
    CallDepthExceeded {
        /// The function whose call went over the limit.
        name:  String,
        /// The configured limit.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A `while` loop ran more iterations than the configured limit.
    #[error("Error on line {line}: Loop stopped after {limit} iterations")]
    LoopLimitExceeded {
        /// The configured limit.
        limit: u64,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl RuntimeError {
    /// Whether the evaluator reports this error and keeps going.
    ///
    /// # Example
    /// ```
    /// use quill::error::RuntimeError;
    ///
    /// assert!(RuntimeError::DivisionByZero { line: 1 }.is_recoverable());
    /// assert!(!RuntimeError::Overflow { line: 1 }.is_recoverable());
    /// ```
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self,
                 Self::UndefinedFunction { .. }
                 | Self::ArityMismatch { .. }
                 | Self::DivisionByZero { .. })
    }

    /// Returns the same error, reported on `line` instead.
    ///
    /// # Example
    /// ```
    /// use quill::error::RuntimeError;
    ///
    /// let error = RuntimeError::DivisionByZero { line: 1 }.at_line(4);
    /// assert_eq!(error.to_string(), "Error on line 4: Division by zero");
    /// ```
    #[must_use]
    pub fn at_line(mut self, line: usize) -> Self {
        match &mut self {
            Self::UndefinedFunction { line: at, .. }
            | Self::ArityMismatch { line: at, .. }
            | Self::DivisionByZero { line: at }
            | Self::TypeError { line: at, .. }
            | Self::Overflow { line: at }
            | Self::TextTooLong { line: at, .. }
            | Self::CallDepthExceeded { line: at, .. }
            | Self::LoopLimitExceeded { line: at, .. } => *at = line,
        }
        self
    }
}
