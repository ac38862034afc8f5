//! Lexer error type.

use std::fmt;

use scv_diagnostic::{Diagnostic, ErrorCode};
use scv_ir::Position;

/// The first character the lexer could not turn into a token.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub position: Position,
    pub kind: LexErrorKind,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// A character that starts no token: a non-ASCII letter, a backtick,
    /// a control character.
    UnrecognizedCharacter(char),
    /// Offsets are 32-bit; larger sources cannot be tokenized.
    SourceTooLarge { len: usize },
}

impl LexError {
    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnrecognizedCharacter(_) => ErrorCode::E0001,
            LexErrorKind::SourceTooLarge { .. } => ErrorCode::E0002,
        }
    }

    pub fn message(&self) -> String {
        match &self.kind {
            LexErrorKind::UnrecognizedCharacter(c) => format!("Unrecognized token '{}'", c.escape_debug()),
            LexErrorKind::SourceTooLarge { len } => {
                format!("source is {len} bytes, more than the lexer can address")
            }
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.message());
        match self.kind {
            LexErrorKind::UnrecognizedCharacter(_) => diag.with_label(self.position, "not part of any token"),
            LexErrorKind::SourceTooLarge { .. } => diag,
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.position, self.message())
    }
}

impl std::error::Error for LexError {}
