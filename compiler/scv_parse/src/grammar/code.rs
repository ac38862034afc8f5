//! Code blocks: raw text interleaved with macro invocations.
//!
//! ```text
//! code { <segment> (@Macro <segment>)* }
//! ```
//!
//! Segment text is never copied out of the source buffer. Each segment is a
//! span of the shared [`SourceText`](scv_ir::SourceText):
//! - the first segment starts at its first token, dropping whitespace after `{`
//! - a segment after a macro starts right after the macro's last token
//! - the segment before the closing `}` ends at the first newline after its
//!   content; with no newline there it ends at its content

use scv_diagnostic::ErrorCode;
use scv_ir::{Code, CodeItem, Macro, Position, Segment, Span, Token, TokenKind};
use scv_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ParseError, Parser, SourceLoader};

impl<'a, L: SourceLoader + ?Sized> Parser<'a, L> {
    /// `code { ... }`
    ///
    /// Macro bodies are code blocks, so this recurses as deep as they nest.
    pub(crate) fn parse_code(&mut self) -> Result<Code, ParseError> {
        ensure_sufficient_stack(|| self.parse_code_inner())
    }

    fn parse_code_inner(&mut self) -> Result<Code, ParseError> {
        let keyword = self.cursor.expect(TokenKind::Code)?;
        let pos = self.cursor.position_of(keyword);
        self.cursor.expect(TokenKind::LBrace)?;

        let mut items = Vec::new();
        // Brace depth carries across segments so braces may wrap macros.
        let mut depth = 0usize;
        let mut resume: Option<usize> = None;
        loop {
            let segment_pos = self.cursor.current_position();
            let first = self.cursor.current().map(Token::offset);
            let Some(terminator) = self.scan_segment(&mut depth) else {
                return Err(
                    ParseError::new(ErrorCode::E1005, "Code block never closed", pos)
                        .with_context("block opened here"),
                );
            };

            let end = terminator.offset();
            let start = resume.or(first).unwrap_or(end);
            let closing = terminator.kind == TokenKind::RBrace;
            let span = self.segment_span(start, end, closing);
            items.push(CodeItem::Segment(Segment::new(segment_pos, self.source.clone(), span)));

            if self.cursor.eat(TokenKind::RBrace).is_some() {
                return Ok(Code { pos, items });
            }

            items.push(CodeItem::Macro(self.parse_macro()?));
            resume = self.cursor.previous().map(Token::end);
        }
    }

    /// Advance to the `@` or unmatched `}` that ends the current segment and
    /// return it without consuming it. `None` at end of input.
    fn scan_segment(&mut self, depth: &mut usize) -> Option<&'a Token<'a>> {
        loop {
            let token = self.cursor.current()?;
            match token.kind {
                TokenKind::At => return Some(token),
                TokenKind::RBrace if *depth == 0 => return Some(token),
                TokenKind::RBrace => *depth -= 1,
                TokenKind::LBrace => *depth += 1,
                _ => {}
            }
            self.cursor.advance();
        }
    }

    fn segment_span(&self, start: usize, end: usize, closing: bool) -> Span {
        let end = if closing {
            let text = self.source.get(start..end).unwrap_or("");
            let content = text.trim_end();
            // Spaces or tabs between the content and the newline stay, so the
            // span remains one contiguous range.
            let newline = text[content.len()..].find('\n').map_or(0, |at| at + 1);
            start + content.len() + newline
        } else {
            end
        };
        Span::try_from_range(start..end).unwrap_or(Span::DUMMY)
    }

    /// `@Name[(args)] [code { ... }]`
    pub(crate) fn parse_macro(&mut self) -> Result<Macro, ParseError> {
        let at = self.cursor.expect(TokenKind::At)?;
        let pos = self.cursor.position_of(at);
        self.parse_macro_rest(pos)
    }

    /// A macro argument. The leading `@` is optional here.
    fn parse_macro_arg(&mut self) -> Result<Macro, ParseError> {
        let pos = self.cursor.current_position();
        self.cursor.eat(TokenKind::At);
        self.parse_macro_rest(pos)
    }

    fn parse_macro_rest(&mut self, pos: Position) -> Result<Macro, ParseError> {
        let name = self.cursor.expect_ident("macro identifier")?;

        let args = if self.cursor.eat(TokenKind::LParen).is_some() {
            self.parse_macro_args()?
        } else {
            Vec::new()
        };

        let body = if self.cursor.check(TokenKind::Code) {
            Some(self.parse_code()?)
        } else {
            None
        };

        trace!(name = name.value, args = args.len(), body = body.is_some(), "macro");
        Ok(Macro {
            name: name.value.to_string(),
            pos,
            args,
            body,
        })
    }

    /// Comma-separated arguments after `(`, through the closing `)`.
    fn parse_macro_args(&mut self) -> Result<Vec<Macro>, ParseError> {
        let mut args = Vec::new();
        if self.cursor.eat(TokenKind::RParen).is_some() {
            return Ok(args);
        }
        loop {
            args.push(self.parse_macro_arg()?);
            if self.cursor.eat(TokenKind::Comma).is_none() {
                break;
            }
        }
        self.cursor.expect(TokenKind::RParen)?;
        Ok(args)
    }
}
