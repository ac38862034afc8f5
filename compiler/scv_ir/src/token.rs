//! Token kinds and the token record produced by the lexer.

use std::fmt;

use crate::{FileId, Position, Span};

/// Kind of a lexed token.
///
/// Keyword and single-character kinds imply their own text; only
/// `Identifier` and `Symbol` tokens carry a value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    Identifier,
    /// Any other ASCII punctuation character.
    Symbol,

    // Keywords
    Struct,
    Trait,
    Is,
    Requires,
    Code,

    // Literal symbols
    LBrace,
    RBrace,
    LParen,
    RParen,
    Less,
    Greater,
    Comma,
    Quote,
    At,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 16] = [
        TokenKind::Identifier,
        TokenKind::Symbol,
        TokenKind::Struct,
        TokenKind::Trait,
        TokenKind::Is,
        TokenKind::Requires,
        TokenKind::Code,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::Less,
        TokenKind::Greater,
        TokenKind::Comma,
        TokenKind::Quote,
        TokenKind::At,
    ];

    /// Fixed spelling of keyword and literal-symbol kinds; empty for kinds
    /// whose text lives in the token value.
    pub const fn spelling(self) -> &'static str {
        match self {
            TokenKind::Identifier | TokenKind::Symbol => "",
            TokenKind::Struct => "struct",
            TokenKind::Trait => "trait",
            TokenKind::Is => "is",
            TokenKind::Requires => "requires",
            TokenKind::Code => "code",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Less => "<",
            TokenKind::Greater => ">",
            TokenKind::Comma => ",",
            TokenKind::Quote => "\"",
            TokenKind::At => "@",
        }
    }

    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Struct
                | TokenKind::Trait
                | TokenKind::Is
                | TokenKind::Requires
                | TokenKind::Code
        )
    }

    /// Human-readable name used in "expected ..." messages.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Symbol => "symbol",
            TokenKind::Struct => "`struct`",
            TokenKind::Trait => "`trait`",
            TokenKind::Is => "`is`",
            TokenKind::Requires => "`requires`",
            TokenKind::Code => "`code`",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::Less => "'<'",
            TokenKind::Greater => "'>'",
            TokenKind::Comma => "','",
            TokenKind::Quote => "'\"'",
            TokenKind::At => "'@'",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A token borrowed from the source buffer it was lexed from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token<'src> {
    pub kind: TokenKind,
    /// Source text for identifiers and symbols; empty otherwise.
    pub value: &'src str,
    pub row: u32,
    pub column: u32,
    /// Byte range of the token in its source buffer.
    pub span: Span,
}

impl<'src> Token<'src> {
    /// Byte offset of the first character.
    #[inline]
    pub fn offset(&self) -> usize {
        self.span.start as usize
    }

    /// Byte offset one past the last character.
    #[inline]
    pub fn end(&self) -> usize {
        self.span.end as usize
    }

    /// The token's literal text, falling back to its kind's spelling.
    pub fn text(&self) -> &'src str {
        if self.value.is_empty() {
            self.kind.spelling()
        } else {
            self.value
        }
    }

    #[inline]
    pub fn position(&self, file: FileId) -> Position {
        Position::new(file, self.row, self.column)
    }
}
