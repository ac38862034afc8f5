//! Emission errors.
//!
//! Every semantic check the emitter performs has its own constructor, so
//! messages and error codes stay consistent between call sites.

use std::fmt;

use scv_diagnostic::{Diagnostic, ErrorCode};
use scv_ir::Position;

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct EmitError {
    pub code: ErrorCode,
    pub message: String,
    pub position: Position,
    pub label: Option<String>,
    pub notes: Vec<String>,
}

impl EmitError {
    fn new(code: ErrorCode, message: String, position: Position) -> Self {
        EmitError {
            code,
            message,
            position,
            label: None,
            notes: Vec::new(),
        }
    }

    #[must_use]
    fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub(crate) fn duplicate_type(name: &str, position: Position) -> Self {
        Self::new(ErrorCode::E2001, format!("Type '{name}' already defined"), position)
    }

    pub(crate) fn undefined_type(name: &str, position: Position) -> Self {
        Self::new(ErrorCode::E2002, format!("Type '{name}' not defined"), position)
            .with_label("not a primitive or a declared struct")
    }

    pub(crate) fn member_named_after_type(name: &str, position: Position) -> Self {
        Self::new(ErrorCode::E2003, format!("Cannot name a member '{name}'"), position)
            .with_label(format!("'{name}' is a type name"))
    }

    pub(crate) fn duplicate_trait(name: &str, position: Position) -> Self {
        Self::new(ErrorCode::E2004, format!("Trait '{name}' already defined"), position)
    }

    pub(crate) fn undefined_trait(name: &str, position: Position) -> Self {
        Self::new(ErrorCode::E2005, format!("Trait '{name}' not defined"), position)
    }

    /// `chain` lists the structs from `name` back to `name`.
    pub(crate) fn cyclic_dependency(name: &str, chain: &[&str], position: Position) -> Self {
        Self::new(ErrorCode::E2006, format!("struct {name} depends on itself"), position)
            .with_label("member closes the cycle")
            .with_note(format!("dependency chain: {}", chain.join(" -> ")))
    }

    pub(crate) fn macro_shape(name: &str, expected: &str, position: Position) -> Self {
        Self::new(
            ErrorCode::E2007,
            format!("@{name} expects {expected}"),
            position,
        )
    }

    pub(crate) fn undefined_struct_argument(name: &str, position: Position) -> Self {
        Self::new(ErrorCode::E2008, format!("Struct '{name}' not defined"), position)
            .with_label("argument must name a declared struct")
    }

    pub(crate) fn unrecognized_macro(name: &str, position: Position) -> Self {
        Self::new(ErrorCode::E2009, format!("Unrecognized macro '@{name}'"), position)
            .with_note("available macros: @Type, @Member, @ForMemberIn")
    }

    pub(crate) fn macro_out_of_context(name: &str, needs: &str, position: Position) -> Self {
        Self::new(
            ErrorCode::E2010,
            format!("@{name} can only be used {needs}"),
            position,
        )
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code).with_message(&self.message);
        diag = match &self.label {
            Some(label) => diag.with_label(self.position, label),
            None => diag.at(self.position),
        };
        for note in &self.notes {
            diag = diag.with_note(note);
        }
        diag
    }
}

impl fmt::Display for EmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.position, self.message)
    }
}

impl std::error::Error for EmitError {}

#[cfg(test)]
mod tests;
