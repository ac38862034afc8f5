//! Diagnostics for the scv compiler.
//!
//! Each phase reports its first error as a phase-specific error value; those
//! values convert into a [`Diagnostic`] carrying:
//! - an [`ErrorCode`] for searchability (`scv --explain E2006`)
//! - a message saying what went wrong
//! - the [`Position`](scv_ir::Position) where it went wrong
//! - optional notes
//!
//! Rendering is handled by the emitters in [`emitter`].

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
