/// Core evaluation logic and context management.
///
/// Contains the runtime context and the two mutually recursive walkers:
/// `execute` for statements and `evaluate` for expressions.
pub mod core;

/// Binary operator evaluation logic.
///
/// Handles arithmetic on integers, reals and strings.
pub mod binary;

/// Function evaluation.
///
/// Handles user-defined function calls with the save/restore calling
/// convention.
pub mod function;
