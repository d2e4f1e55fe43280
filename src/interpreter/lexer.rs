use std::fmt;

use logos::Logos;

use crate::error::{LexError, LexErrorKind};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t\r\f]+")]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    ///
    /// A leading `-` is never part of the literal; the parser folds it into
    /// negative literals where it appears in operand position.
    #[regex(r"[0-9]+", parse_integer)]
    Number(i64),
    /// Double-quoted string literal. The value has its quotes stripped and
    /// escape sequences left as written.
    #[regex(r#""([^"\\\n]|\\.)*""#, strip_quotes)]
    Str(String),
    /// Identifier tokens; variable or function names such as `x` or `add`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `def`
    #[token("def")]
    Def,
    /// `print`
    #[token("print")]
    Print,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `=`
    #[token("=")]
    Equals,
    /// `:`
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `,`
    #[token(",")]
    Comma,

    /// Newlines only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "\"{s}\""),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::If => write!(f, "if"),
            Self::Else => write!(f, "else"),
            Self::While => write!(f, "while"),
            Self::Def => write!(f, "def"),
            Self::Print => write!(f, "print"),
            Self::EqualEqual => write!(f, "=="),
            Self::Equals => write!(f, "="),
            Self::Colon => write!(f, ":"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Comma => write!(f, ","),
            Self::NewLine => writeln!(f),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting. The session driver
/// seeds it with the session line so messages point at the right input.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Ok(i64)`: The parsed integer value.
/// - `Err(LexErrorKind::IntegerTooLarge)`: If the digits overflow `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexErrorKind> {
    lex.slice().parse().map_err(|_| LexErrorKind::IntegerTooLarge)
}

/// Strips the surrounding quotes from a string literal.
fn strip_quotes(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

/// A lazy token stream over one piece of source text.
///
/// Wraps the `logos` lexer so that a failed match never loses input: when a
/// failed match spans more than its first character (an unterminated string,
/// for instance) scanning restarts right after that character. Every illegal
/// character is therefore reported exactly once, and everything after it is
/// still tokenized.
///
/// Items are `(Token, line)` pairs or a [`LexError`].
///
/// # Example
/// ```
/// use quill::interpreter::lexer::{Lexer, Token};
///
/// let items: Vec<_> = Lexer::new("x = 1 $", 1).collect();
///
/// assert_eq!(items[0], Ok((Token::Identifier("x".to_string()), 1)));
/// assert!(items[3].is_err());
/// ```
pub struct Lexer<'s> {
    source: &'s str,
    base:   usize,
    inner:  logos::Lexer<'s, Token>,
}

impl<'s> Lexer<'s> {
    /// Creates a lexer over `source`, numbering lines from `line`.
    #[must_use]
    pub fn new(source: &'s str, line: usize) -> Self {
        Self { source,
               base: 0,
               inner: Token::lexer_with_extras(source, LexerExtras { line }) }
    }

    fn char_offset(&self, byte: usize) -> usize {
        self.source[..byte].chars().count()
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<(Token, usize), LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.inner.next()?;
        let line = self.inner.extras.line;
        let span = self.inner.span();
        let start = self.base + span.start;

        match result {
            Ok(token) => Some(Ok((token, line))),
            Err(LexErrorKind::IntegerTooLarge) => {
                Some(Err(LexError::IntegerTooLarge { literal: self.inner.slice().to_string(),
                                                     position: self.char_offset(start),
                                                     line }))
            },
            Err(LexErrorKind::IllegalCharacter) => {
                let source = self.source;
                let character = source[start..].chars().next()?;
                let resume = start + character.len_utf8();

                if self.base + span.end > resume {
                    self.base = resume;
                    self.inner = Token::lexer_with_extras(&source[resume..], LexerExtras { line });
                }

                Some(Err(LexError::IllegalCharacter { character,
                                                      position: self.char_offset(start),
                                                      line }))
            },
        }
    }
}

/// Tokenizes a whole source string.
///
/// Collects every token that could be recognized together with every lexical
/// error encountered. Lexing never stops early.
///
/// # Example
/// ```
/// use quill::interpreter::lexer::{Token, tokenize};
///
/// let (tokens, errors) = tokenize("print(x) @", 3);
///
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[0], (Token::Print, 3));
/// assert_eq!(errors.len(), 1);
/// ```
#[must_use]
pub fn tokenize(source: &str, line: usize) -> (Vec<(Token, usize)>, Vec<LexError>) {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();

    for item in Lexer::new(source, line) {
        match item {
            Ok(token) => tokens.push(token),
            Err(e) => errors.push(e),
        }
    }

    (tokens, errors)
}
