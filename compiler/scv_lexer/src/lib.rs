//! Lexer for scv spec files, built on logos.
//!
//! Two layers:
//! 1. **Raw scan**: logos splits the text into words, literal symbols,
//!    other punctuation, whitespace and line comments. A digit cannot start
//!    a token, so it is an unrecognized character like any non-ASCII one.
//! 2. **Cooking**: whitespace and comments are dropped, words are resolved
//!    against the keyword table, and every token gets its row and column.
//!
//! Tokens borrow their text from the source; keyword and literal-symbol
//! tokens carry an empty value because their kind implies their text.

mod keywords;
mod lex_error;

pub use lex_error::{LexError, LexErrorKind};

use logos::Logos;
use scv_ir::{FileId, Position, Span, Token, TokenKind};
use tracing::trace;

/// Raw token from logos, before cooking.
///
/// Identifier-shaped runs stop at whitespace and at ASCII punctuation.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"[ \t\n\x0B\x0C\r]+")]
    Whitespace,

    #[regex(r"[A-Za-z][^\t\n\x0B\x0C\r !-/:-@\[-`{-~]*")]
    Word,

    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("<")]
    Less,
    #[token(">")]
    Greater,
    #[token(",")]
    Comma,
    #[token("\"")]
    Quote,
    #[token("@")]
    At,

    /// ASCII punctuation without a kind of its own. The backtick is not
    /// punctuation to this language.
    #[regex(r"[!#$%&'*+\-./:;=?\[\\\]^_|~]")]
    Symbol,
}

impl RawToken {
    /// Kind of a single-character literal symbol.
    fn literal_kind(self) -> Option<TokenKind> {
        match self {
            RawToken::LBrace => Some(TokenKind::LBrace),
            RawToken::RBrace => Some(TokenKind::RBrace),
            RawToken::LParen => Some(TokenKind::LParen),
            RawToken::RParen => Some(TokenKind::RParen),
            RawToken::Less => Some(TokenKind::Less),
            RawToken::Greater => Some(TokenKind::Greater),
            RawToken::Comma => Some(TokenKind::Comma),
            RawToken::Quote => Some(TokenKind::Quote),
            RawToken::At => Some(TokenKind::At),
            RawToken::LineComment
            | RawToken::Whitespace
            | RawToken::Word
            | RawToken::Symbol => None,
        }
    }
}

/// Tracks 1-based rows and columns while offsets move forward.
struct LineTracker<'src> {
    bytes: &'src [u8],
    /// Offset up to which newlines have been counted.
    scanned: usize,
    row: u32,
    line_start: usize,
}

impl<'src> LineTracker<'src> {
    fn new(source: &'src str) -> Self {
        LineTracker {
            bytes: source.as_bytes(),
            scanned: 0,
            row: 1,
            line_start: 0,
        }
    }

    /// Row and column of `offset`. Offsets must not decrease between calls.
    fn locate(&mut self, offset: usize) -> (u32, u32) {
        for newline in memchr::memchr_iter(b'\n', &self.bytes[self.scanned..offset]) {
            self.row += 1;
            self.line_start = self.scanned + newline + 1;
        }
        self.scanned = offset;
        let column = u32::try_from(offset - self.line_start + 1).unwrap_or(u32::MAX);
        (self.row, column)
    }
}

/// Tokenize `source`, stopping at the first unrecognized character.
///
/// `file` tags the positions of errors so diagnostics can name the file.
pub fn tokenize(source: &str, file: FileId) -> Result<Vec<Token<'_>>, LexError> {
    if u32::try_from(source.len()).is_err() {
        return Err(LexError {
            position: Position::new(file, 1, 1),
            kind: LexErrorKind::SourceTooLarge { len: source.len() },
        });
    }

    let mut tokens = Vec::with_capacity(source.len() / 4);
    let mut lines = LineTracker::new(source);
    let mut raw = RawToken::lexer(source);

    while let Some(result) = raw.next() {
        let range = raw.span();
        let (row, column) = lines.locate(range.start);

        let Ok(raw_token) = result else {
            let character = source[range.start..].chars().next().unwrap_or('\0');
            return Err(LexError {
                position: Position::new(file, row, column),
                kind: LexErrorKind::UnrecognizedCharacter(character),
            });
        };

        let text = raw.slice();
        let (kind, value) = match raw_token {
            RawToken::LineComment | RawToken::Whitespace => continue,
            RawToken::Word => match keywords::lookup(text) {
                Some(keyword) => (keyword, ""),
                None => (TokenKind::Identifier, text),
            },
            RawToken::Symbol => (TokenKind::Symbol, text),
            literal => match literal.literal_kind() {
                Some(kind) => (kind, ""),
                None => continue,
            },
        };

        // Source length was checked against u32 above.
        let span = Span::try_from_range(range).unwrap_or(Span::DUMMY);
        tokens.push(Token {
            kind,
            value,
            row,
            column,
            span,
        });
    }

    trace!(count = tokens.len(), "tokenized");
    Ok(tokens)
}
