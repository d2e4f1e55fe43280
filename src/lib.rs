//! # quill
//!
//! quill is a tree-walking interpreter for Quill, a tiny line-oriented
//! scripting language with variables, integer and string values, `==`,
//! `if`/`else`, `while`, single-statement functions and `print`.
//!
//! A session is a [`Context`]; each input line goes through
//! [`parse_and_execute`], which lexes, parses and runs it, reporting every
//! error through the context's print handler instead of returning it.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

pub use crate::{
    config::Config,
    interpreter::{evaluator::core::Context, print_handler::PrintHandler},
};
use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::core::parse_program,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` and `Expr` enums that represent the
/// syntactic structure of source code as a tree. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Attaches source line numbers to AST nodes for error reporting.
pub mod ast;
/// Session limits.
pub mod config;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Separates recoverable runtime conditions from line-aborting ones.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and the runtime environment.
pub mod interpreter;
/// Keeps deep recursion in the parser and evaluator off the end of the
/// stack.
pub mod stack;

/// What happened to one line handed to [`parse_and_execute`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LineReport {
    /// Statements that ran to completion.
    pub executed:    usize,
    /// Diagnostics reported while handling the line.
    pub diagnostics: usize,
    /// Whether the line was cut short by a syntax error or a runtime error.
    pub aborted:     bool,
}

/// Parses a token sequence into statements.
///
/// # Errors
/// Returns the first `ParseError` encountered. An end-of-input error carries
/// the line of the last token.
///
/// # Example
/// ```
/// use quill::{interpreter::lexer::tokenize, parse};
///
/// let (tokens, _) = tokenize("x = 1 print(x)", 1);
/// let statements = parse(&tokens).unwrap();
///
/// assert_eq!(statements.len(), 2);
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> Result<Vec<Statement>, ParseError> {
    let last_line = tokens.last().map_or(0, |(_, line)| *line);

    parse_program(&mut tokens.iter().peekable()).map_err(|e| match e {
        ParseError::UnexpectedEndOfInput { .. } => {
            ParseError::UnexpectedEndOfInput { line: last_line }
        },
        other => other,
    })
}

/// Lexes, parses and executes one line of input.
///
/// Nothing here returns an error to the caller: every problem is reported
/// through `context.printer`, and the session carries on.
///
/// - Illegal characters are reported and skipped; the remaining tokens are
///   still parsed.
/// - A syntax error abandons the whole line before anything runs.
/// - Statements run in order. A runtime error that is not recoverable stops
///   the rest of the line; statements before it keep their effects.
///
/// The `exit` sentinel is the driver's business and is not recognized here.
///
/// # Example
/// ```
/// use quill::{Context, parse_and_execute};
///
/// let mut context = Context::buffered();
/// parse_and_execute(&mut context, "x = 5");
/// let report = parse_and_execute(&mut context, "print(x)");
///
/// assert_eq!(report.executed, 1);
/// assert_eq!(context.printer.output(), "5\n");
/// ```
pub fn parse_and_execute(context: &mut Context, source: &str) -> LineReport {
    let line = context.begin_line();
    let reported_before = context.reported();
    let mut report = LineReport::default();

    let (tokens, lex_errors) = tokenize(source, line);
    for error in &lex_errors {
        context.report(error);
    }

    match parse(&tokens) {
        Ok(statements) => {
            debug!(line, tokens = tokens.len(), statements = statements.len(), "parsed line");

            for statement in &statements {
                if let Err(error) = context.execute(statement) {
                    debug!(line, %error, "line aborted");
                    context.report(&error);
                    report.aborted = true;
                    break;
                }
                report.executed += 1;
            }
        },
        Err(error) => {
            debug!(line, %error, "syntax error");
            context.report(&error);
            report.aborted = true;
        },
    }

    report.diagnostics = context.reported() - reported_before;
    report
}
