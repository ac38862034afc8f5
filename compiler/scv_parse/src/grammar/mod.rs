//! Grammar productions, split by construct.
//!
//! - [`item`]: `struct`, `trait` and top-level `requires`
//! - [`code`]: `code { ... }` blocks, segments and macros

mod code;
mod item;
