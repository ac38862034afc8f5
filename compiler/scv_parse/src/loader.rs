//! Loading files named by `requires` directives.

use std::fmt;

use scv_ir::{FileId, SourceText};

/// Source of a file pulled in by a `requires` directive.
#[derive(Clone, Debug)]
pub struct RequiredSource {
    pub file: FileId,
    pub text: SourceText,
}

/// Resolves and loads files named by `requires` directives, each at most
/// once per compilation session.
pub trait SourceLoader {
    type Error: fmt::Display;

    /// Resolve `name` relative to the file `from` and load it.
    ///
    /// Returns `Ok(None)` when the resolved file was already processed, in
    /// which case the directive is a no-op. A file returned here counts as
    /// processed from then on.
    fn load_required(&mut self, from: FileId, name: &str) -> Result<Option<RequiredSource>, Self::Error>;
}

/// Loader for sources that have no file system behind them.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoRequires;

impl SourceLoader for NoRequires {
    type Error = String;

    fn load_required(&mut self, _from: FileId, name: &str) -> Result<Option<RequiredSource>, String> {
        Err(format!("cannot resolve '{name}' outside of a file-backed session"))
    }
}
