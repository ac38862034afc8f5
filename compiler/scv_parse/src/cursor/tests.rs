use pretty_assertions::assert_eq;
use scv_diagnostic::ErrorCode;
use scv_ir::{FileId, Position, TokenKind};

use super::*;

fn lex(source: &str) -> Vec<Token<'_>> {
    scv_lexer::tokenize(source, FileId::default()).unwrap()
}

#[test]
fn eat_consumes_only_matching_kind() {
    let tokens = lex("struct A");
    let mut cursor = Cursor::new(&tokens, FileId::default());

    assert!(cursor.eat(TokenKind::Trait).is_none());
    assert!(cursor.eat(TokenKind::Struct).is_some());
    assert_eq!(cursor.eat(TokenKind::Identifier).unwrap().value, "A");
    assert!(cursor.is_at_end());
    assert!(cursor.eat(TokenKind::Identifier).is_none());
}

#[test]
fn eat_unless_stops_at_delimiter_and_end() {
    let tokens = lex("a . b \" c");
    let mut cursor = Cursor::new(&tokens, FileId::default());

    let mut taken = Vec::new();
    while let Some(token) = cursor.eat_unless(TokenKind::Quote) {
        taken.push(token.text());
    }
    assert_eq!(taken, vec!["a", ".", "b"]);
    assert!(cursor.check(TokenKind::Quote));

    cursor.advance();
    assert_eq!(cursor.eat_unless(TokenKind::Quote).unwrap().value, "c");
    assert!(cursor.eat_unless(TokenKind::Quote).is_none());
}

#[test]
fn previous_is_last_consumed_token() {
    let tokens = lex("{ }");
    let mut cursor = Cursor::new(&tokens, FileId::default());
    assert!(cursor.previous().is_none());
    cursor.advance();
    assert_eq!(cursor.previous().unwrap().kind, TokenKind::LBrace);
}

#[test]
fn expect_reports_what_was_found() {
    let tokens = lex("struct A trait");
    let mut cursor = Cursor::new(&tokens, FileId::new(4));
    cursor.advance();
    cursor.advance();

    let err = cursor.expect(TokenKind::LBrace).unwrap_err();
    assert_eq!(err.code, ErrorCode::E1003);
    assert_eq!(err.message, "Expected '{'");
    assert_eq!(err.context.as_deref(), Some("found `trait`"));
    assert_eq!(err.position, Position::new(FileId::new(4), 1, 10));
}

#[test]
fn expect_ident_names_the_expected_thing() {
    let tokens = lex("struct ;");
    let mut cursor = Cursor::new(&tokens, FileId::default());
    cursor.advance();

    let err = cursor.expect_ident("trait name").unwrap_err();
    assert_eq!(err.code, ErrorCode::E1002);
    assert_eq!(err.message, "Expected trait name");
    assert_eq!(err.context.as_deref(), Some("found ';'"));
}

#[test]
fn end_of_input_position_follows_last_token() {
    let tokens = lex("struct\n  Abc");
    let mut cursor = Cursor::new(&tokens, FileId::default());
    cursor.advance();
    cursor.advance();

    assert_eq!(cursor.found(), "found end of input");
    assert_eq!(cursor.current_position(), Position::new(FileId::default(), 2, 6));
}

#[test]
fn empty_stream_positions_at_start() {
    let cursor = Cursor::new(&[], FileId::new(1));
    assert!(cursor.is_at_end());
    assert_eq!(cursor.current_position(), Position::new(FileId::new(1), 1, 1));
}

#[test]
fn eat_symbol_matches_exact_punctuation() {
    let tokens = lex("; .");
    let mut cursor = Cursor::new(&tokens, FileId::default());
    assert!(cursor.eat_symbol(".").is_none());
    assert!(cursor.eat_symbol(";").is_some());
    assert!(cursor.eat_symbol(".").is_some());
    assert!(cursor.eat_symbol(";").is_none());
}
