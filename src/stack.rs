//! Stack growth for deeply nested input.
//!
//! Parsing and evaluation recurse once per level of nesting, and a line may
//! nest parentheses, calls or conditionals arbitrarily deep. The recursive
//! entry points run inside [`ensure_sufficient_stack`], which moves onto a
//! freshly allocated stack segment when the current one runs low.

/// Grow when less than this much stack remains (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Runs `f`, first growing the stack if the remaining space is below the
/// red zone.
///
/// # Example
/// ```
/// use quill::stack::ensure_sufficient_stack;
///
/// fn depth(n: u32) -> u32 {
///     ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
/// }
///
/// assert_eq!(depth(50_000), 50_000);
/// ```
#[inline]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}
