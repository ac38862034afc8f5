//! C++ header emission for scv.
//!
//! Takes a fully merged [`Root`](scv_ir::Root), checks it, and renders one
//! header: provenance comment, `#pragma once`, includes, forward
//! declarations, then one definition per struct in dependency order with
//! trait code expanded in place.

mod emitter;
mod error;
mod types;

pub use emitter::{emit, Emitter};
pub use error::EmitError;
pub use types::PRIMITIVES;
