use thiserror::Error;

/// The reason a lexer match failed.
///
/// Used as the `logos` error type of [`Token`](crate::interpreter::lexer::Token),
/// so it must be `Default`: a plain unmatched character maps to the default
/// variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    /// No token starts with this character.
    #[default]
    IllegalCharacter,
    /// A run of digits that does not fit in a 64-bit signed integer.
    IntegerTooLarge,
}

/// A single lexical error.
///
/// One is produced per offending character (or oversized literal); the lexer
/// keeps going afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// Found a character that cannot start any token.
    #[error("Error on line {line}: Illegal character '{character}' at position {position}.")]
    IllegalCharacter {
        /// The offending character.
        character: char,
        /// Zero-based character offset into the lexed source.
        position:  usize,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// An integer literal was too large to be represented.
    #[error("Error on line {line}: Integer literal '{literal}' at position {position} is too large.")]
    IntegerTooLarge {
        /// The literal text.
        literal:  String,
        /// Zero-based character offset into the lexed source.
        position: usize,
        /// The source line where the error occurred.
        line:     usize,
    },
}

impl LexError {
    /// Column of the offending input.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::IllegalCharacter { position, .. } | Self::IntegerTooLarge { position, .. } => {
                *position
            },
        }
    }
}
