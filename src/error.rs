/// Lexing errors.
///
/// Defines the error raised when the lexer meets a character that cannot
/// start any token, or an integer literal that cannot be represented.
/// Lexing never aborts on these: the character is skipped and scanning
/// resumes right after it.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning a token sequence into
/// statements. A parse error abandons the whole line it was found on.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during execution. Some of them
/// are reported and execution continues with a default value; the rest abort
/// the remainder of the current line.
pub mod runtime_error;

pub use lex_error::{LexError, LexErrorKind};
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
