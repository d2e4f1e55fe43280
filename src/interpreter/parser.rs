/// Entry points: whole programs and full expressions.
pub mod core;

/// Statement forms: assignment, `print`, `if`, `while` and `def`.
pub mod statement;

/// Binary precedence levels.
///
/// Implements comparison (`==`), additive (`+`, `-`) and multiplicative
/// (`*`, `/`) parsing.
pub mod binary;

/// Operands: literals, variables, parenthesized expressions and calls.
pub mod unary;

/// Helpers shared by the parsing routines.
pub mod utils;
