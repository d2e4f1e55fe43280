use std::{collections::HashMap, rc::Rc};

use crate::{ast::FunctionDef, interpreter::value::core::Value};

/// The session's runtime state: one flat variable table and one flat
/// function table.
///
/// There are no nested scopes. Function calls protect the caller by taking a
/// [`VariableSnapshot`] of the whole variable table and restoring it
/// afterwards.
#[derive(Debug, Default, Clone)]
pub struct Environment {
    variables: HashMap<String, Value>,
    functions: HashMap<String, Rc<FunctionDef>>,
}

/// A saved copy of the variable table, taken before a function call.
#[derive(Debug, Clone)]
pub struct VariableSnapshot(HashMap<String, Value>);

impl Environment {
    /// Creates an environment with no variables and no functions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a variable. A name that was never assigned reads as `0`.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let mut env = Environment::new();
    /// assert_eq!(env.get_variable("y"), Value::Integer(0));
    ///
    /// env.set_variable("y", Value::Integer(3));
    /// assert_eq!(env.get_variable("y"), Value::Integer(3));
    /// ```
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Value {
        self.variables.get(name).cloned().unwrap_or(Value::Integer(0))
    }

    /// Reads a variable without the default, to tell "unset" from `0`.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Binds `name` to `value`, replacing any previous value.
    pub fn set_variable(&mut self, name: &str, value: Value) {
        self.variables.insert(name.to_string(), value);
    }

    /// Registers a function, silently replacing an earlier definition.
    ///
    /// # Returns
    /// `true` if a function with this name already existed.
    pub fn define_function(&mut self, def: FunctionDef) -> bool {
        self.functions.insert(def.name.clone(), Rc::new(def)).is_some()
    }

    /// Looks up a function by name.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<Rc<FunctionDef>> {
        self.functions.get(name).cloned()
    }

    /// Copies the whole variable table.
    #[must_use]
    pub fn snapshot(&self) -> VariableSnapshot {
        VariableSnapshot(self.variables.clone())
    }

    /// Replaces the variable table with a snapshot, discarding every
    /// variable created or changed since it was taken.
    pub fn restore(&mut self, snapshot: VariableSnapshot) {
        self.variables = snapshot.0;
    }

    /// Number of bound variables.
    #[must_use]
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    /// Number of defined functions.
    #[must_use]
    pub fn function_count(&self) -> usize {
        self.functions.len()
    }
}
