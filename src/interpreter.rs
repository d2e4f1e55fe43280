/// The evaluator module executes AST nodes.
///
/// The evaluator walks statements for their effect and expressions for their
/// value, reading and writing the session environment.
///
/// # Responsibilities
/// - Executes assignments, `print`, conditionals, loops and definitions.
/// - Evaluates arithmetic, equality, variables and calls.
/// - Reports recoverable runtime conditions and continues.
pub mod evaluator;
/// The environment module holds the session's runtime state.
///
/// One flat variable table and one flat function table, plus the snapshot
/// type used by the function calling convention.
pub mod environment;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens: literals, identifiers, keywords, operators and punctuation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line numbers.
/// - Recognizes keywords, integer and string literals.
/// - Reports every illegal character once and keeps scanning.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// the statements of one program.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (statements, expressions).
/// - Applies operator precedence: `==` below `+`/`-` below `*`/`/`.
/// - Reports the first unexpected token or premature end of input.
pub mod parser;
/// Output destinations for `print` and diagnostics.
pub mod print_handler;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum: integer, real, string, boolean and null.
/// - Implements truthiness, numeric views and `==` semantics.
pub mod value;
