/// Default limit on nested function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 200;

/// Session limits.
///
/// By default loops are unbounded and only runaway recursion is stopped,
/// since it would otherwise overflow the host stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Deepest allowed nesting of user function calls.
    pub max_call_depth:      usize,
    /// Stop a `while` loop after this many iterations. `None` never stops.
    pub max_loop_iterations: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self { max_call_depth:      DEFAULT_MAX_CALL_DEPTH,
               max_loop_iterations: None, }
    }
}
