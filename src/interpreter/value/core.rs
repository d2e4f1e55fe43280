use std::fmt;

use crate::ast::LiteralValue;

/// Represents a runtime value in the interpreter.
///
/// This enum models every value a variable can hold or an expression can
/// produce.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    /// Produced only by division, which is always true division.
    Real(f64),
    /// A string value.
    Text(String),
    /// A boolean value (`true` or `false`).
    /// Produced only by the equality operator.
    Bool(bool),
    /// The absence of a value. Every function call evaluates to `Null`.
    Null,
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Integer(n) => Self::Integer(*n),
            LiteralValue::Text(s) => Self::Text(s.clone()),
        }
    }
}

impl Value {
    /// Whether a conditional treats this value as true.
    ///
    /// Non-zero numbers, non-empty strings and `true` are truthy; everything
    /// else, including `null`, is not.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(-1).is_truthy());
    /// assert!(!Value::Text(String::new()).is_truthy());
    /// assert!(!Value::Null.is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        match self {
            Self::Integer(n) => *n != 0,
            Self::Real(r) => *r != 0.0,
            Self::Text(s) => !s.is_empty(),
            Self::Bool(b) => *b,
            Self::Null => false,
        }
    }

    /// Integer view of the value, if it has one.
    ///
    /// Booleans count as `0` and `1` in arithmetic.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            Self::Bool(b) => Some(i64::from(*b)),
            _ => None,
        }
    }

    /// Real view of any numeric value.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_real(&self) -> Option<f64> {
        match self {
            Self::Real(r) => Some(*r),
            Self::Integer(n) => Some(*n as f64),
            Self::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    /// Whether the value is numerically zero. Used as the division guard.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.as_real().is_some_and(|r| r == 0.0)
    }

    /// Equality as the `==` operator sees it.
    ///
    /// Numbers (integers, reals and booleans) compare by numeric value,
    /// strings by content, and `null` only equals `null`. Values of
    /// unrelated types are never equal; comparing them is not an error.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(2).loose_eq(&Value::Real(2.0)));
    /// assert!(!Value::Integer(5).loose_eq(&Value::from("5")));
    /// ```
    #[must_use]
    pub fn loose_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Null, Self::Null) => true,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Text(_) | Self::Null, _) | (_, Self::Text(_) | Self::Null) => false,
            _ => self.as_real() == other.as_real(),
        }
    }

    /// Name of the value's type, for error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Text(_) => "string",
            Self::Bool(_) => "boolean",
            Self::Null => "null",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            // `Debug` keeps the fractional part: `2.0`, not `2`.
            Self::Real(r) => write!(f, "{r:?}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Null => write!(f, "null"),
        }
    }
}
