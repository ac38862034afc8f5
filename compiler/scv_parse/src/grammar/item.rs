//! Top-level items: structs, traits and `requires` directives.

use scv_diagnostic::ErrorCode;
use scv_ir::{Member, Root, Struct, Trait, TraitRef, TokenKind};
use scv_stack::ensure_sufficient_stack;
use tracing::debug;

use crate::{parse_source, ParseError, Parser, SourceLoader};

impl<L: SourceLoader + ?Sized> Parser<'_, L> {
    /// `struct Name [is A, B] { Type name[;] ... }`
    pub(crate) fn parse_struct(&mut self) -> Result<Struct, ParseError> {
        self.cursor.expect(TokenKind::Struct)?;
        let name = self.cursor.expect_ident("identifier")?;

        let mut traits = Vec::new();
        if self.cursor.eat(TokenKind::Is).is_some() {
            loop {
                let trait_name = self.cursor.expect_ident("trait name")?;
                traits.push(TraitRef {
                    name: trait_name.value.to_string(),
                    pos: self.cursor.position_of(trait_name),
                });
                if self.cursor.eat(TokenKind::Comma).is_none() {
                    break;
                }
            }
        }

        self.cursor.expect(TokenKind::LBrace)?;
        let mut members = Vec::new();
        while self.cursor.eat(TokenKind::RBrace).is_none() {
            if self.cursor.is_at_end() {
                return Err(self.cursor.expected(TokenKind::RBrace));
            }
            members.push(self.parse_member()?);
        }

        Ok(Struct {
            name: name.value.to_string(),
            pos: self.cursor.position_of(name),
            traits,
            members,
        })
    }

    fn parse_member(&mut self) -> Result<Member, ParseError> {
        let ty = self.cursor.expect_ident("member type")?;
        let name = self.cursor.expect_ident("member name")?;
        self.cursor.eat_symbol(";");

        Ok(Member {
            ty: ty.value.to_string(),
            name: name.value.to_string(),
            pos: self.cursor.position_of(ty),
            name_pos: self.cursor.position_of(name),
        })
    }

    /// `trait Name [requires "a.h", <b.h>] { code { ... } ... }`
    pub(crate) fn parse_trait(&mut self) -> Result<Trait, ParseError> {
        self.cursor.expect(TokenKind::Trait)?;
        let name = self.cursor.expect_ident("identifier")?;

        let requirements = if self.cursor.eat(TokenKind::Requires).is_some() {
            self.parse_requirements()?
        } else {
            Vec::new()
        };

        self.cursor.expect(TokenKind::LBrace)?;
        let mut code = Vec::new();
        while self.cursor.check(TokenKind::Code) {
            code.push(self.parse_code()?);
        }
        self.cursor.expect(TokenKind::RBrace)?;

        Ok(Trait {
            name: name.value.to_string(),
            pos: self.cursor.position_of(name),
            requirements,
            code,
        })
    }

    fn parse_requirements(&mut self) -> Result<Vec<String>, ParseError> {
        let mut requirements = Vec::new();
        loop {
            requirements.push(self.parse_requirement()?);
            if self.cursor.eat(TokenKind::Comma).is_none() {
                return Ok(requirements);
            }
        }
    }

    /// `"header.hpp"` or `<header.hpp>`, kept with its delimiters. The
    /// enclosed tokens are joined by their text without whitespace.
    fn parse_requirement(&mut self) -> Result<String, ParseError> {
        let (open, close, unclosed) = if let Some(open) = self.cursor.eat(TokenKind::Quote) {
            (open, TokenKind::Quote, "Quote never closed")
        } else if let Some(open) = self.cursor.eat(TokenKind::Less) {
            (open, TokenKind::Greater, "Requirement directive never closed")
        } else {
            return Err(ParseError::new(
                ErrorCode::E1006,
                "Expected requirement body, e.g. \"header.hpp\" or <header.hpp>",
                self.cursor.current_position(),
            )
            .with_context(self.cursor.found()));
        };

        let mut literal = String::from(open.text());
        while let Some(token) = self.cursor.eat_unless(close) {
            literal.push_str(token.text());
        }
        if self.cursor.eat(close).is_none() {
            return Err(
                ParseError::new(ErrorCode::E1004, unclosed, self.cursor.position_of(open))
                    .with_context("opened here"),
            );
        }
        literal.push_str(close.spelling());
        Ok(literal)
    }

    /// `requires Name`: load `Name.scv` through the loader and merge its
    /// root into `root`. Already processed files are skipped.
    pub(crate) fn parse_requires(&mut self, root: &mut Root) -> Result<(), ParseError> {
        self.cursor.expect(TokenKind::Requires)?;
        let name_token = self.cursor.expect_ident("file name")?;
        let name = name_token.value;
        let pos = self.cursor.position_of(name_token);

        let loaded = self
            .loader
            .load_required(self.cursor.file(), name)
            .map_err(|err| {
                ParseError::new(
                    ErrorCode::E3001,
                    format!("Cannot load required file '{name}': {err}"),
                    pos,
                )
                .with_context("required here")
            })?;

        let Some(required) = loaded else {
            debug!(name, "already processed, skipping");
            return Ok(());
        };

        debug!(name, file = required.file.raw(), "parsing required file");
        // A `requires` chain recurses once per file.
        let sub_root = ensure_sufficient_stack(|| {
            parse_source(&required.text, required.file, &mut *self.loader)
        })?;
        root.merge(sub_root);
        Ok(())
    }
}
