//! Core diagnostic types.

use std::fmt;

use scv_ir::Position;

use crate::ErrorCode;

/// A compile error with its code, location and context.
///
/// Every diagnostic is an error: compilation stops at the first one.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    /// Where the problem is; `None` for problems without a source location,
    /// such as an unreadable input file.
    pub position: Option<Position>,
    /// Short text shown next to the position.
    pub label: Option<String>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            position: None,
            label: None,
            notes: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_label(mut self, position: Position, label: impl Into<String>) -> Self {
        self.position = Some(position);
        self.label = Some(label.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(position) = self.position {
            write!(f, "{position}: ")?;
        }
        write!(f, "error [{}]: {}", self.code, self.message)?;
        if let Some(label) = &self.label {
            write!(f, " ({label})")?;
        }
        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }
        Ok(())
    }
}
