use pretty_assertions::assert_eq;

use super::*;

#[test]
fn known_codes_are_described_with_their_phase() {
    assert_eq!(
        explain("E2006").unwrap(),
        "E2006: a struct depends on itself, directly or through other structs (semantic check error)"
    );
    assert!(explain("E0001").unwrap().ends_with("(lexer error)"));
    assert!(explain("e1005").unwrap().starts_with("E1005: "));
    assert!(explain("E3003").unwrap().ends_with("(file I/O error)"));
}

#[test]
fn unknown_codes_are_rejected() {
    let err = explain("E9999").unwrap_err();
    assert!(err.starts_with("Unknown error code: E9999"), "{err}");
    assert!(explain("W2001").is_err());
}
