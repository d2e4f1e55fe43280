use std::fmt::Display;

use tracing::{debug, trace, warn};

use crate::{
    ast::{Expr, Statement},
    config::Config,
    error::RuntimeError,
    interpreter::{environment::Environment, print_handler::PrintHandler, value::core::Value},
    stack::ensure_sufficient_stack,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state for one session: the variable and
/// function tables, the output destination, the session limits, and the
/// number of the line being executed.
///
/// ## Usage
///
/// `Context` is created once per session and reused for every line. The
/// tables persist across lines for the life of the context.
pub struct Context {
    /// Variable and function tables.
    pub environment: Environment,
    /// Destination for `print` output and diagnostics.
    pub printer:     PrintHandler,
    /// Session limits.
    pub config:      Config,
    /// Current nesting of user function calls.
    pub(in crate::interpreter::evaluator) depth: usize,
    /// Line of the outermost active call. Errors raised inside function
    /// bodies are reported against it rather than the line of the `def`.
    pub(in crate::interpreter::evaluator) call_line: Option<usize>,
    line:            usize,
    reported:        usize,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a context writing to stdout/stderr with default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default(), PrintHandler::Stdout)
    }

    /// Creates a context that captures output in memory.
    ///
    /// # Example
    /// ```
    /// use quill::{interpreter::evaluator::core::Context, parse_and_execute};
    ///
    /// let mut context = Context::buffered();
    /// parse_and_execute(&mut context, "print(1 + 1)");
    ///
    /// assert_eq!(context.printer.output(), "2\n");
    /// ```
    #[must_use]
    pub fn buffered() -> Self {
        Self::with_config(Config::default(), PrintHandler::buffer())
    }

    /// Creates a context with explicit limits and output handler.
    #[must_use]
    pub fn with_config(config: Config, printer: PrintHandler) -> Self {
        Self { environment: Environment::new(),
               printer,
               config,
               depth: 0,
               call_line: None,
               line: 0,
               reported: 0 }
    }

    /// Advances to the next session line and returns its number.
    pub(crate) const fn begin_line(&mut self) -> usize {
        self.line += 1;
        self.line
    }

    /// Number of the most recently started line.
    #[must_use]
    pub const fn current_line(&self) -> usize {
        self.line
    }

    /// Total number of diagnostics reported in this session.
    #[must_use]
    pub const fn reported(&self) -> usize {
        self.reported
    }

    /// Writes a diagnostic to the print handler.
    pub fn report(&mut self, error: &impl Display) {
        self.reported += 1;
        self.printer.report(&error.to_string());
    }

    /// Executes a single statement for its effect.
    ///
    /// Recoverable conditions (undefined function, arity mismatch, division
    /// by zero) are reported where they occur and do not surface here. Any
    /// error that is returned aborts the statement.
    ///
    /// # Example
    /// ```
    /// use quill::{
    ///     ast::{Expr, LiteralValue, Statement},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let mut ctx = Context::buffered();
    /// let assign = Statement::Assign { name:  "x".to_string(),
    ///                                  value: Expr::Literal { value: LiteralValue::Integer(5),
    ///                                                         line:  1, },
    ///                                  line:  1, };
    /// ctx.execute(&assign).unwrap();
    ///
    /// let read = Expr::Variable { name: "x".to_string(),
    ///                             line: 1, };
    /// assert_eq!(ctx.evaluate(&read).unwrap(), Value::Integer(5));
    /// ```
    pub fn execute(&mut self, statement: &Statement) -> EvalResult<()> {
        ensure_sufficient_stack(|| self.execute_statement(statement))
    }

    fn execute_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        trace!(line = statement.line_number(), "executing statement");

        match statement {
            Statement::Assign { name, value, .. } => {
                let value = self.evaluate(value)?;
                self.environment.set_variable(name, value);
            },
            Statement::Print { value, .. } => {
                let value = self.evaluate(value)?;
                self.printer.println(&value.to_string());
            },
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.execute(then_branch)?;
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)?;
                }
            },
            Statement::While { condition, body, line } => {
                self.eval_while(condition, body, *line)?;
            },
            Statement::Function(def) => {
                let replaced = self.environment.define_function(def.clone());
                debug!(name = %def.name, params = def.params.len(), replaced, "defined function");
            },
            Statement::Expression { expr, .. } => {
                self.evaluate(expr)?;
            },
        }
        Ok(())
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Unassigned variables read as `0`. A failed division reports the error
    /// and yields `0`; a failed call reports the error and yields `null`, like
    /// every call does.
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult<Value> {
        ensure_sufficient_stack(|| self.evaluate_expr(expr))
    }

    fn evaluate_expr(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Variable { name, .. } => Ok(self.environment.get_variable(name)),
            Expr::BinaryOp { left, op, right, line } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                let result = Self::eval_binary(*op, &left, &right, *line);
                self.recover(result, Value::Integer(0))
            },
            Expr::Equal { left, right, .. } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                Ok(Value::Bool(left.loose_eq(&right)))
            },
            Expr::Call { name, arguments, line } => {
                let result = self.call_function(name, arguments, *line).map(|()| Value::Null);
                self.recover(result, Value::Null)
            },
        }
    }

    /// Runs a `while` loop, honoring the optional iteration limit.
    fn eval_while(&mut self, condition: &Expr, body: &Statement, line: usize) -> EvalResult<()> {
        let mut iterations: u64 = 0;

        while self.evaluate(condition)?.is_truthy() {
            if let Some(limit) = self.config.max_loop_iterations
               && iterations >= limit
            {
                return Err(RuntimeError::LoopLimitExceeded { limit, line });
            }
            iterations += 1;
            self.execute(body)?;
        }

        trace!(line, iterations, "loop finished");
        Ok(())
    }

    /// Turns a recoverable error into a report plus a fallback value.
    ///
    /// Errors that are not recoverable pass through unchanged.
    fn recover(&mut self, result: EvalResult<Value>, fallback: Value) -> EvalResult<Value> {
        match result {
            Err(error) if error.is_recoverable() => {
                let error = self.at_call_line(error);
                warn!(%error, "recovered from runtime error");
                self.report(&error);
                Ok(fallback)
            },
            other => other,
        }
    }

    /// Moves an error raised inside a function body onto the line of the
    /// outermost call. Outside any call the error is returned unchanged.
    fn at_call_line(&self, error: RuntimeError) -> RuntimeError {
        match self.call_line {
            Some(line) => error.at_line(line),
            None => error,
        }
    }
}
