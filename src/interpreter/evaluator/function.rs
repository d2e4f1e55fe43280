use tracing::debug;

use crate::{
    ast::{Expr, FunctionDef},
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Calls a user-defined function.
    ///
    /// Calls use one flat variable table instead of a frame per call:
    ///
    /// 1. The whole variable table is snapshotted.
    /// 2. Arguments are evaluated and bound to the parameters one at a time,
    ///    in order, directly in that table. A later argument therefore sees
    ///    the earlier parameters already bound.
    /// 3. The body runs.
    /// 4. The snapshot is restored, dropping every variable the call created
    ///    or changed, parameters and body assignments alike.
    ///
    /// The snapshot is restored even if the body fails. Functions defined by
    /// the body stay defined. Calls have no return value.
    ///
    /// An error escaping the outermost call is reported on that call's line,
    /// not on the line where the failing statement was defined.
    ///
    /// # Errors
    /// - `UndefinedFunction` if no function has this name.
    /// - `ArityMismatch` if the argument count differs from the parameter
    ///   count.
    /// - `CallDepthExceeded` if the call nests deeper than
    ///   `config.max_call_depth`.
    /// - Any error raised while binding arguments or running the body.
    pub(crate) fn call_function(&mut self,
                                name: &str,
                                arguments: &[Expr],
                                line: usize)
                                -> EvalResult<()> {
        let function =
            self.environment
                .function(name)
                .ok_or_else(|| RuntimeError::UndefinedFunction { name: name.to_string(),
                                                                 line })?;

        if arguments.len() != function.params.len() {
            return Err(RuntimeError::ArityMismatch { name: name.to_string(),
                                                     expected: function.params.len(),
                                                     found: arguments.len(),
                                                     line });
        }

        if self.depth >= self.config.max_call_depth {
            return Err(RuntimeError::CallDepthExceeded { name: name.to_string(),
                                                         limit: self.config.max_call_depth,
                                                         line });
        }

        debug!(name, depth = self.depth, "calling function");

        let outermost = self.call_line.is_none();
        if outermost {
            self.call_line = Some(line);
        }

        let snapshot = self.environment.snapshot();
        self.depth += 1;
        let result = self.run_function(&function, arguments);
        self.depth -= 1;
        self.environment.restore(snapshot);

        if outermost {
            self.call_line = None;
            return result.map_err(|error| error.at_line(line));
        }
        result
    }

    /// Binds the arguments and executes the body.
    fn run_function(&mut self, function: &FunctionDef, arguments: &[Expr]) -> EvalResult<()> {
        for (param, argument) in function.params.iter().zip(arguments) {
            let value = self.evaluate(argument)?;
            self.environment.set_variable(param, value);
        }
        self.execute(&function.body)
    }
}
