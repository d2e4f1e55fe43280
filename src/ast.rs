/// Represents a literal value in the language.
///
/// `LiteralValue` covers the constants that can appear directly in source
/// code: integers and double-quoted strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A string literal, quotes stripped, escapes kept as written.
    Text(String),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Expressions are evaluated for their value. Each node exclusively owns its
/// children; the tree has no sharing and no cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A literal value (integer or string).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// An arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Equality comparison (`==`).
    Equal {
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Function call expression (e.g. `add(1, 2)`). Always evaluates to
    /// `null`.
    Call {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use quill::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::Equal { line, .. }
            | Self::Call { line, .. } => *line,
        }
    }
}

/// Represents a user-defined function definition.
///
/// The body is exactly one statement; the language has no blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, in declaration order.
    pub params: Vec<String>,
    /// The statement executed when the function is called.
    pub body:   Box<Statement>,
    /// Line number in the source code.
    pub line:   usize,
}

/// Represents a statement, executed for its effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A variable assignment binding a name to an expression.
    Assign {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `print(expr)`.
    Print {
        /// The expression whose value is printed.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// Conditional with an optional `else` branch.
    If {
        /// The condition expression.
        condition:   Expr,
        /// Statement executed if the condition is truthy.
        then_branch: Box<Self>,
        /// Statement executed otherwise, if present.
        else_branch: Option<Box<Self>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// `while` loop.
    While {
        /// The loop condition, re-evaluated before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Box<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A user-defined function declaration.
    Function(FunctionDef),
    /// A standalone expression evaluated and discarded.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Assign { line, .. }
            | Self::Print { line, .. }
            | Self::If { line, .. }
            | Self::While { line, .. }
            | Self::Expression { line, .. } => *line,
            Self::Function(def) => def.line,
        }
    }
}

/// Represents an arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}
