//! `--verbose-tokenization` and `--verbose-ast` dumps.

use std::fmt::Write as _;
use std::path::Path;

use scv_ir::visitor::{self, Visitor};
use scv_ir::{Code, Macro, Member, Root, Segment, Struct, Token, Trait};

/// One `row:column kind value` line per token, under a header naming `path`.
pub fn format_tokens(path: &Path, tokens: &[Token<'_>]) -> String {
    let mut out = format!("Tokens for '{}' ({} tokens):\n", path.display(), tokens.len());
    for token in tokens {
        let _ = write!(out, "  {}:{} {}", token.row, token.column, token.kind);
        if !token.value.is_empty() {
            let _ = write!(out, " {}", token.value);
        }
        out.push('\n');
    }
    out
}

/// Renders a [`Root`] as an indented outline, two spaces per level.
#[derive(Default)]
pub struct AstPrinter {
    out: String,
    depth: usize,
}

impl AstPrinter {
    pub fn print(root: &Root) -> String {
        let mut printer = AstPrinter::default();
        printer.visit_root(root);
        printer.out
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.out.push_str("  ");
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn nested(&mut self, text: &str, walk: impl FnOnce(&mut Self)) {
        self.line(text);
        self.depth += 1;
        walk(self);
        self.depth -= 1;
    }
}

impl<'ast> Visitor<'ast> for AstPrinter {
    fn visit_root(&mut self, root: &'ast Root) {
        self.nested("Root", |printer| visitor::walk_root(printer, root));
    }

    fn visit_struct(&mut self, node: &'ast Struct) {
        let mut header = format!("Struct {}", node.name);
        if !node.traits.is_empty() {
            let traits: Vec<&str> = node.traits.iter().map(|t| t.name.as_str()).collect();
            let _ = write!(header, " is {}", traits.join(", "));
        }
        self.nested(&header, |printer| visitor::walk_struct(printer, node));
    }

    fn visit_member(&mut self, node: &'ast Member) {
        self.line(&format!("Member {} {}", node.ty, node.name));
    }

    fn visit_trait(&mut self, node: &'ast Trait) {
        let mut header = format!("Trait {}", node.name);
        if !node.requirements.is_empty() {
            let _ = write!(header, " requires {}", node.requirements.join(", "));
        }
        self.nested(&header, |printer| visitor::walk_trait(printer, node));
    }

    fn visit_code(&mut self, node: &'ast Code) {
        self.nested("Code", |printer| visitor::walk_code(printer, node));
    }

    fn visit_segment(&mut self, node: &'ast Segment) {
        self.line(&format!("Segment {:?}", node.text()));
    }

    fn visit_macro(&mut self, node: &'ast Macro) {
        self.nested(&format!("Macro {}", node.name), |printer| {
            visitor::walk_macro(printer, node);
        });
    }
}
