//! Recursive descent parser for scv spec files.
//!
//! Produces one [`Root`] per file. `requires` directives are resolved
//! through a [`SourceLoader`]; each newly loaded file is lexed, parsed with
//! the same loader, and its root merged into the requiring root at the point
//! of the directive.

mod cursor;
mod error;
mod grammar;
mod loader;

pub use cursor::Cursor;
pub use error::ParseError;
pub use loader::{NoRequires, RequiredSource, SourceLoader};

use scv_diagnostic::ErrorCode;
use scv_ir::{FileId, Item, Root, SourceText, Token, TokenKind};
use tracing::debug;

/// Parser state for one file.
pub(crate) struct Parser<'a, L: SourceLoader + ?Sized> {
    cursor: Cursor<'a>,
    /// Buffer the tokens were lexed from; code segments share it.
    source: &'a SourceText,
    loader: &'a mut L,
}

impl<'a, L: SourceLoader + ?Sized> Parser<'a, L> {
    fn new(tokens: &'a [Token<'a>], source: &'a SourceText, file: FileId, loader: &'a mut L) -> Self {
        Parser {
            cursor: Cursor::new(tokens, file),
            source,
            loader,
        }
    }

    fn parse_root(mut self) -> Result<Root, ParseError> {
        let mut root = Root::new();
        while let Some(token) = self.cursor.current() {
            match token.kind {
                TokenKind::Struct => {
                    let decl = self.parse_struct()?;
                    root.push(Item::Struct(decl));
                }
                TokenKind::Trait => {
                    let decl = self.parse_trait()?;
                    root.push(Item::Trait(decl));
                }
                TokenKind::Requires => self.parse_requires(&mut root)?,
                _ => {
                    return Err(ParseError::new(
                        ErrorCode::E1001,
                        format!("Unexpected token '{}'", token.text()),
                        self.cursor.position_of(token),
                    )
                    .with_context("expected `struct`, `trait` or `requires`"));
                }
            }
        }
        Ok(root)
    }
}

/// Parse the tokens of one file.
///
/// `source` must be the buffer `tokens` were lexed from, and `file` its
/// identity within the session `loader` belongs to.
pub fn parse<L: SourceLoader + ?Sized>(
    tokens: &[Token<'_>],
    source: &SourceText,
    file: FileId,
    loader: &mut L,
) -> Result<Root, ParseError> {
    debug!(file = file.raw(), tokens = tokens.len(), "parsing");
    Parser::new(tokens, source, file, loader).parse_root()
}

/// Lex and parse one file.
pub fn parse_source<L: SourceLoader + ?Sized>(
    source: &SourceText,
    file: FileId,
    loader: &mut L,
) -> Result<Root, ParseError> {
    let tokens = scv_lexer::tokenize(source, file)?;
    parse(&tokens, source, file, loader)
}
