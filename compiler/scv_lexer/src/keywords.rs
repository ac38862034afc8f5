//! Keyword resolution.
//!
//! The raw scanner produces one `Word` token for every identifier-shaped run
//! of text; cooking looks the text up here and emits a keyword token on a
//! match, or an identifier carrying the text otherwise.

use scv_ir::TokenKind;

/// Look up a reserved keyword by text.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    match text {
        "is" => Some(TokenKind::Is),
        "code" => Some(TokenKind::Code),
        "trait" => Some(TokenKind::Trait),
        "struct" => Some(TokenKind::Struct),
        "requires" => Some(TokenKind::Requires),
        _ => None,
    }
}
