use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates an arithmetic operation between two values.
    ///
    /// - Two integers (booleans count as `0`/`1`) use checked integer
    ///   arithmetic for `+`, `-` and `*`.
    /// - `/` is true division and always produces a real.
    /// - A real operand promotes the other operand to real.
    /// - `+` concatenates two strings; `*` repeats a string by an integer.
    ///
    /// Division by zero returns `RuntimeError::DivisionByZero`, which the
    /// caller reports and replaces with `0`. A string result longer than
    /// [`MAX_TEXT_LEN`] is refused with `RuntimeError::TextTooLong`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use quill::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_binary(BinaryOperator::Div, &Value::Integer(7), &Value::Integer(2), 1);
    /// assert_eq!(result.unwrap(), Value::Real(3.5));
    ///
    /// let result =
    ///     Context::eval_binary(BinaryOperator::Add, &Value::from("ab"), &Value::from("cd"), 1);
    /// assert_eq!(result.unwrap(), Value::from("abcd"));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul};
        use Value::Text;

        match (op, left, right) {
            (Add, Text(a), Text(b)) => concat_text(a, b, line),
            (Mul, Text(s), count) | (Mul, count, Text(s)) if count.as_integer().is_some() => {
                Self::repeat_text(s, count.as_integer().unwrap_or(0), line)
            },
            (Div, ..) => Self::eval_division(left, right, line),
            _ => {
                if let (Some(a), Some(b)) = (left.as_integer(), right.as_integer()) {
                    Self::eval_integer_op(op, a, b, line)
                } else if let (Some(a), Some(b)) = (left.as_real(), right.as_real()) {
                    Ok(Value::Real(match op {
                                       Add => a + b,
                                       BinaryOperator::Sub => a - b,
                                       _ => a * b,
                                   }))
                } else {
                    Err(type_error(op, left, right, line))
                }
            },
        }
    }

    /// Checked `+`, `-` and `*` on integers.
    fn eval_integer_op(op: BinaryOperator, a: i64, b: i64, line: usize) -> EvalResult<Value> {
        let result = match op {
            BinaryOperator::Add => a.checked_add(b),
            BinaryOperator::Sub => a.checked_sub(b),
            BinaryOperator::Mul => a.checked_mul(b),
            BinaryOperator::Div => {
                return Self::eval_division(&Value::Integer(a), &Value::Integer(b), line);
            },
        };
        result.map(Value::Integer)
              .ok_or(RuntimeError::Overflow { line })
    }

    /// True division of any two numbers.
    ///
    /// A zero divisor is reported as division by zero whatever the left
    /// operand is.
    fn eval_division(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        if right.is_zero() {
            return Err(RuntimeError::DivisionByZero { line });
        }
        match (left.as_real(), right.as_real()) {
            (Some(a), Some(b)) => Ok(Value::Real(a / b)),
            _ => Err(type_error(BinaryOperator::Div, left, right, line)),
        }
    }

    /// Repeats a string; a count of zero or less gives the empty string.
    fn repeat_text(text: &str, count: i64, line: usize) -> EvalResult<Value> {
        let count = usize::try_from(count).unwrap_or(0);
        if text.is_empty() {
            return Ok(Value::Text(String::new()));
        }

        let mut result = reserve_text(text.len().saturating_mul(count), line)?;
        for _ in 0..count {
            result.push_str(text);
        }
        Ok(Value::Text(result))
    }
}

/// Longest string, in bytes, that `+` or `*` will build (16 MiB).
pub const MAX_TEXT_LEN: usize = 16 * 1024 * 1024;

/// Concatenates two strings.
fn concat_text(left: &str, right: &str, line: usize) -> EvalResult<Value> {
    let mut result = reserve_text(left.len().saturating_add(right.len()), line)?;
    result.push_str(left);
    result.push_str(right);
    Ok(Value::Text(result))
}

/// Allocates an empty string with room for `length` bytes.
///
/// Refuses with `TextTooLong` when `length` exceeds [`MAX_TEXT_LEN`] or the
/// allocation fails, so an oversized result never takes the session down.
fn reserve_text(length: usize, line: usize) -> EvalResult<String> {
    let too_long = RuntimeError::TextTooLong { length, line };
    if length > MAX_TEXT_LEN {
        return Err(too_long);
    }

    let mut text = String::new();
    text.try_reserve_exact(length).map_err(|_| too_long)?;
    Ok(text)
}

/// Builds the type error for an operator applied to unsupported operands.
fn type_error(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> RuntimeError {
    RuntimeError::TypeError { details: format!("cannot apply '{op}' to {} and {}",
                                               left.type_name(),
                                               right.type_name()),
                              line }
}
