//! Token cursor for navigating the token stream.
//!
//! Consumption is strictly forward with one token of lookahead. There is no
//! EOF token: running off the end of the slice is end of input.

use scv_diagnostic::ErrorCode;
use scv_ir::{FileId, Position, Token, TokenKind};
use tracing::trace;

use crate::ParseError;

pub struct Cursor<'a> {
    tokens: &'a [Token<'a>],
    file: FileId,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token<'a>], file: FileId) -> Self {
        Cursor {
            tokens,
            file,
            pos: 0,
        }
    }

    /// File the tokens were lexed from.
    #[inline]
    pub fn file(&self) -> FileId {
        self.file
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    #[inline]
    pub fn current(&self) -> Option<&'a Token<'a>> {
        self.tokens.get(self.pos)
    }

    /// The most recently consumed token.
    #[inline]
    pub fn previous(&self) -> Option<&'a Token<'a>> {
        self.pos.checked_sub(1).and_then(|index| self.tokens.get(index))
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current().is_some_and(|token| token.kind == kind)
    }

    pub fn advance(&mut self) -> Option<&'a Token<'a>> {
        let token = self.current()?;
        trace!(pos = self.pos, kind = %token.kind, "advance");
        self.pos += 1;
        Some(token)
    }

    /// Consume the current token if it is of `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> Option<&'a Token<'a>> {
        if self.check(kind) {
            self.advance()
        } else {
            None
        }
    }

    /// Consume the current token unless it is of `kind` or input has ended.
    pub fn eat_unless(&mut self, kind: TokenKind) -> Option<&'a Token<'a>> {
        if self.is_at_end() || self.check(kind) {
            None
        } else {
            self.advance()
        }
    }

    pub fn expect(&mut self, kind: TokenKind) -> Result<&'a Token<'a>, ParseError> {
        self.eat(kind).ok_or_else(|| self.expected(kind))
    }

    /// Consume an identifier. `what` names it in the error message, e.g.
    /// "trait name".
    pub fn expect_ident(&mut self, what: &str) -> Result<&'a Token<'a>, ParseError> {
        self.eat(TokenKind::Identifier)
            .ok_or_else(|| self.error_here(ErrorCode::E1002, format!("Expected {what}")))
    }

    /// Consume the current token if it is the punctuation `symbol`.
    pub fn eat_symbol(&mut self, symbol: &str) -> Option<&'a Token<'a>> {
        if self
            .current()
            .is_some_and(|token| token.kind == TokenKind::Symbol && token.value == symbol)
        {
            self.advance()
        } else {
            None
        }
    }

    /// Error for a missing token of `kind` at the current position.
    #[cold]
    pub fn expected(&self, kind: TokenKind) -> ParseError {
        self.error_here(ErrorCode::E1003, format!("Expected {kind}"))
    }

    #[cold]
    #[inline(never)]
    fn error_here(&self, code: ErrorCode, message: String) -> ParseError {
        ParseError::new(code, message, self.current_position()).with_context(self.found())
    }

    /// "found ..." label describing the current token.
    pub fn found(&self) -> String {
        match self.current() {
            Some(token) if token.value.is_empty() => format!("found {}", token.kind),
            Some(token) => format!("found '{}'", token.value),
            None => "found end of input".to_string(),
        }
    }

    #[inline]
    pub fn position_of(&self, token: &Token<'_>) -> Position {
        token.position(self.file)
    }

    /// Position of the current token, or just past the last token at end of
    /// input.
    pub fn current_position(&self) -> Position {
        if let Some(token) = self.current() {
            return self.position_of(token);
        }
        match self.tokens.last() {
            Some(last) => {
                let width = u32::try_from(last.text().len()).unwrap_or(0);
                Position::new(self.file, last.row, last.column.saturating_add(width))
            }
            None => Position::new(self.file, 1, 1),
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
