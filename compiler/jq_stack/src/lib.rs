//! Stack growth for recursive tree walks.
//!
//! The jq parser descends once per nesting level of the source, and the
//! AST builder descends once per nesting level of the parsed tree. Builtin
//! definitions are shallow, but generator input is not trusted to be, so every
//! recursive entry point runs under [`ensure_sufficient_stack`].
//!
//! On native targets the stack is grown on demand with `stacker`. On
//! `wasm32` the closure is called directly.

/// Grow when less than this much stack remains (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if fewer than [`RED_ZONE`] bytes remain.
///
/// ```text
/// fn parse_term(&mut self) -> Result<Term, ParseError> {
///     ensure_sufficient_stack(|| self.parse_term_inner())
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Depth of a right-nested chain `[[[...]]]` built recursively.
    fn nest(depth: u32) -> Vec<u32> {
        ensure_sufficient_stack(|| {
            if depth == 0 {
                Vec::new()
            } else {
                let mut inner = nest(depth - 1);
                inner.push(depth);
                inner
            }
        })
    }

    #[test]
    fn passes_through_value() {
        assert_eq!(ensure_sufficient_stack(|| "jq"), "jq");
    }

    #[test]
    fn passes_through_errors() {
        let result: Result<(), String> = ensure_sufficient_stack(|| Err("bad".to_string()));
        assert_eq!(result, Err("bad".to_string()));
    }

    #[test]
    fn survives_deep_nesting() {
        let chain = nest(200_000);
        assert_eq!(chain.len(), 200_000);
        assert_eq!(chain.first(), Some(&1));
    }
}
