//! Shared data types for the scv compiler.
//!
//! Every later phase depends on this crate only for its data shapes:
//!
//! ```text
//! SourceText ──► scv_lexer ──► Vec<Token> ──► scv_parse ──► Root ──► scv_emit
//! ```
//!
//! Tokens borrow from the source buffer they were lexed from. AST nodes never
//! borrow: they carry [`Position`] snapshots for diagnostics, and segments of
//! raw code share the reference-counted [`SourceText`] instead of copying it.

mod ast;
mod source;
mod span;
mod token;
pub mod visitor;

pub use ast::{Code, CodeItem, Item, Macro, Member, Root, Segment, Struct, Trait, TraitRef};
pub use source::{FileId, SourceText};
pub use span::{Position, Span};
pub use token::{Token, TokenKind};
