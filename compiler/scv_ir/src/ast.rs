//! AST for scv spec files.
//!
//! The tree is a closed set of node types:
//!
//! ```text
//! Root
//! ├── Struct ── Member*
//! └── Trait ─── Code*
//!               └── (Segment | Macro)*
//!                             ├── Macro* (arguments)
//!                             └── Code?  (body)
//! ```
//!
//! Passes dispatch with `match` instead of double dispatch.

use crate::{Position, SourceText, Span};

/// A top-level declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Item {
    Struct(Struct),
    Trait(Trait),
}

/// The root of one compile unit.
///
/// Owns every top-level item in source order and keeps separate indices of
/// its structs and traits so passes can iterate either kind directly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Root {
    items: Vec<Item>,
    structs: Vec<usize>,
    traits: Vec<usize>,
}

impl Root {
    pub fn new() -> Self {
        Root::default()
    }

    pub fn push(&mut self, item: Item) {
        let index = self.items.len();
        match &item {
            Item::Struct(_) => self.structs.push(index),
            Item::Trait(_) => self.traits.push(index),
        }
        self.items.push(item);
    }

    /// Adopt every item of `other`, appending its struct and trait indices
    /// after this root's own.
    pub fn merge(&mut self, other: Root) {
        let base = self.items.len();
        self.structs.extend(other.structs.iter().map(|index| index + base));
        self.traits.extend(other.traits.iter().map(|index| index + base));
        self.items.extend(other.items);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn structs(&self) -> impl Iterator<Item = &Struct> + '_ {
        self.structs.iter().filter_map(|&index| match &self.items[index] {
            Item::Struct(decl) => Some(decl),
            Item::Trait(_) => None,
        })
    }

    pub fn traits(&self) -> impl Iterator<Item = &Trait> + '_ {
        self.traits.iter().filter_map(|&index| match &self.items[index] {
            Item::Trait(decl) => Some(decl),
            Item::Struct(_) => None,
        })
    }

    pub fn struct_count(&self) -> usize {
        self.structs.len()
    }

    pub fn trait_count(&self) -> usize {
        self.traits.len()
    }

    /// First struct declared with `name`.
    pub fn find_struct(&self, name: &str) -> Option<&Struct> {
        self.structs().find(|decl| decl.name == name)
    }
}

/// `struct Name [is A, B] { ... }`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Struct {
    pub name: String,
    /// Position of the name token.
    pub pos: Position,
    /// Trait names from the `is` clause, unresolved, in source order.
    pub traits: Vec<TraitRef>,
    pub members: Vec<Member>,
}

/// A trait name as written in an `is` clause.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraitRef {
    pub name: String,
    pub pos: Position,
}

/// `<type> <name>` inside a struct body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member {
    pub ty: String,
    pub name: String,
    /// Position of the type token.
    pub pos: Position,
    /// Position of the name token.
    pub name_pos: Position,
}

/// `trait Name [requires "a.h", <b.h>] { code { ... } ... }`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trait {
    pub name: String,
    pub pos: Position,
    /// Requirement literals with their delimiters, e.g. `"a.h"` or `<b.h>`.
    pub requirements: Vec<String>,
    pub code: Vec<Code>,
}

/// `code { ... }`: raw text interleaved with macro invocations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Code {
    /// Position of the `code` keyword.
    pub pos: Position,
    pub items: Vec<CodeItem>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CodeItem {
    Segment(Segment),
    Macro(Macro),
}

/// A run of raw code, shared with the source buffer it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub pos: Position,
    source: SourceText,
    span: Span,
}

impl Segment {
    pub fn new(pos: Position, source: SourceText, span: Span) -> Self {
        Segment { pos, source, span }
    }

    pub fn text(&self) -> &str {
        self.source.slice(self.span)
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

/// `@Name`, `@Name(args...)`, optionally followed by `code { ... }`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Macro {
    pub name: String,
    /// Position of the `@` (or of the name, for an argument written without one).
    pub pos: Position,
    pub args: Vec<Macro>,
    pub body: Option<Code>,
}
