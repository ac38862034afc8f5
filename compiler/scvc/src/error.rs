//! Driver errors.

use std::io;
use std::path::{Path, PathBuf};

use scv_diagnostic::{Diagnostic, ErrorCode};
use scv_emit::EmitError;
use scv_lexer::LexError;
use scv_parse::ParseError;
use thiserror::Error;

/// A source file that could not be read.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot find file '{}'", path.display())]
    NotFound { path: PathBuf },

    #[error("permission denied reading '{}'", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("'{}' contains invalid UTF-8 data", path.display())]
    InvalidUtf8 { path: PathBuf },

    #[error("error reading '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    pub(crate) fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound { path },
            io::ErrorKind::PermissionDenied => LoadError::PermissionDenied { path },
            io::ErrorKind::InvalidData => LoadError::InvalidUtf8 { path },
            _ => LoadError::Io { path, source: err },
        }
    }
}

/// Why a compilation stopped.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Emit(#[from] EmitError),

    /// An input named on the command line could not be read.
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("cannot write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CompileError {
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            CompileError::Lex(err) => err.to_diagnostic(),
            CompileError::Parse(err) => err.to_diagnostic(),
            CompileError::Emit(err) => err.to_diagnostic(),
            CompileError::Load(err) => Diagnostic::error(ErrorCode::E3002).with_message(err.to_string()),
            CompileError::Write { .. } => Diagnostic::error(ErrorCode::E3003)
                .with_message(self.to_string())
                .with_note("check that the output directory exists and is writable"),
        }
    }
}

#[cfg(test)]
mod tests;
