//! Diagnostic emitters.
//!
//! Each emitter implements [`DiagnosticEmitter`]. Only the human-readable
//! terminal format is provided.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Trait for emitting diagnostics in various formats.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit the closing "aborting" line for `error_count` errors.
    fn emit_summary(&mut self, error_count: usize);
}
