use thiserror::Error;

/// Represents all errors that can occur during parsing.
///
/// Any of these abandons the line being parsed; nothing from that line is
/// executed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found an unexpected token while parsing.
    #[error("Syntax error on line {line}: Unexpected token '{token}'.")]
    UnexpectedToken {
        /// Source text of the token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    #[error("Syntax error on line {line}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
}
