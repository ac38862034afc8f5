//! Stack growth for recursion driven by user input.
//!
//! Three places in the compiler recurse as deep as the input nests:
//!
//! - `requires` chains and nested macro bodies in the parser;
//! - struct member dependencies in the emitter's declaration and
//!   definition passes;
//! - macro evaluation in the emitter.
//!
//! Each recursive step runs inside [`ensure_sufficient_stack`], which moves
//! execution onto a fresh heap-allocated segment when the current one is
//! nearly exhausted. On `wasm32` the closure is called directly.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first switching to a new stack segment if the current one has
/// less than the red zone left.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// `wasm32` manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
