//! Parse error type.

use std::fmt;

use scv_diagnostic::{Diagnostic, ErrorCode};
use scv_ir::Position;
use scv_lexer::{LexError, LexErrorKind};

/// The first problem the parser ran into.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseError {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
    /// Location of the offending token.
    pub position: Position,
    /// Short label shown next to the location, e.g. "found `struct`".
    pub context: Option<String>,
}

impl ParseError {
    pub fn new(code: ErrorCode, message: impl Into<String>, position: Position) -> Self {
        ParseError {
            code,
            message: message.into(),
            position,
            context: None,
        }
    }

    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code)
            .with_message(&self.message)
            .with_label(self.position, self.context.as_deref().unwrap_or("here"))
    }
}

/// A lexical error inside a required file surfaces through the parse of the
/// file that required it.
impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        let error = ParseError::new(err.code(), err.message(), err.position);
        match err.kind {
            LexErrorKind::UnrecognizedCharacter(_) => error.with_context("not part of any token"),
            LexErrorKind::SourceTooLarge { .. } => error,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.position, self.message)
    }
}

impl std::error::Error for ParseError {}
