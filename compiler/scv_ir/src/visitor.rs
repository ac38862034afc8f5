//! AST visitor.
//!
//! Default `visit_*` methods call the matching `walk_*` function, which
//! visits children in source order. Override a `visit_*` method to act on a
//! node and call `walk_*` from it to keep descending.
//!
//! ```text
//! struct CountMacros(usize);
//!
//! impl<'ast> Visitor<'ast> for CountMacros {
//!     fn visit_macro(&mut self, node: &'ast Macro) {
//!         self.0 += 1;
//!         walk_macro(self, node);
//!     }
//! }
//! ```

use crate::{Code, CodeItem, Item, Macro, Member, Root, Segment, Struct, Trait};

pub trait Visitor<'ast> {
    fn visit_root(&mut self, root: &'ast Root) {
        walk_root(self, root);
    }

    fn visit_struct(&mut self, node: &'ast Struct) {
        walk_struct(self, node);
    }

    fn visit_member(&mut self, _node: &'ast Member) {}

    fn visit_trait(&mut self, node: &'ast Trait) {
        walk_trait(self, node);
    }

    fn visit_code(&mut self, node: &'ast Code) {
        walk_code(self, node);
    }

    fn visit_segment(&mut self, _node: &'ast Segment) {}

    fn visit_macro(&mut self, node: &'ast Macro) {
        walk_macro(self, node);
    }
}

pub fn walk_root<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, root: &'ast Root) {
    for item in root.items() {
        match item {
            Item::Struct(node) => visitor.visit_struct(node),
            Item::Trait(node) => visitor.visit_trait(node),
        }
    }
}

pub fn walk_struct<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, node: &'ast Struct) {
    for member in &node.members {
        visitor.visit_member(member);
    }
}

pub fn walk_trait<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, node: &'ast Trait) {
    for code in &node.code {
        visitor.visit_code(code);
    }
}

pub fn walk_code<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, node: &'ast Code) {
    for item in &node.items {
        match item {
            CodeItem::Segment(segment) => visitor.visit_segment(segment),
            CodeItem::Macro(invocation) => visitor.visit_macro(invocation),
        }
    }
}

pub fn walk_macro<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, node: &'ast Macro) {
    for arg in &node.args {
        visitor.visit_macro(arg);
    }
    if let Some(body) = &node.body {
        visitor.visit_code(body);
    }
}
