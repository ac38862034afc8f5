//! Source buffers and file identities.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::Span;

/// Index of a loaded file within a compilation session.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, PartialOrd, Ord)]
pub struct FileId(u32);

impl FileId {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        FileId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Owned, cheaply clonable source text of one file.
///
/// Segments of raw code in the AST hold a clone of this handle plus a
/// [`Span`], so the text they refer to lives exactly as long as the last
/// node that needs it.
#[derive(Clone, Eq, PartialEq, Hash, Default)]
pub struct SourceText(Arc<str>);

impl SourceText {
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        SourceText(text.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Text covered by `span`, or the empty string if the span does not fall
    /// on character boundaries inside this buffer.
    pub fn slice(&self, span: Span) -> &str {
        self.0.get(span.to_range()).unwrap_or("")
    }
}

impl Deref for SourceText {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl From<String> for SourceText {
    fn from(text: String) -> Self {
        SourceText(text.into())
    }
}

impl From<&str> for SourceText {
    fn from(text: &str) -> Self {
        SourceText(text.into())
    }
}

impl fmt::Debug for SourceText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SourceText({} bytes)", self.0.len())
    }
}
