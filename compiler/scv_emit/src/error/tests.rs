use pretty_assertions::assert_eq;
use scv_diagnostic::ErrorCode;
use scv_ir::{FileId, Position};

use super::*;

fn pos() -> Position {
    Position::new(FileId::new(2), 7, 3)
}

#[test]
fn codes_match_their_checks() {
    let cases = [
        (EmitError::duplicate_type("A", pos()), ErrorCode::E2001),
        (EmitError::undefined_type("A", pos()), ErrorCode::E2002),
        (EmitError::member_named_after_type("int", pos()), ErrorCode::E2003),
        (EmitError::duplicate_trait("T", pos()), ErrorCode::E2004),
        (EmitError::undefined_trait("T", pos()), ErrorCode::E2005),
        (EmitError::cyclic_dependency("A", &["A", "A"], pos()), ErrorCode::E2006),
        (EmitError::macro_shape("ForMemberIn", "one argument", pos()), ErrorCode::E2007),
        (EmitError::undefined_struct_argument("A", pos()), ErrorCode::E2008),
        (EmitError::unrecognized_macro("Foo", pos()), ErrorCode::E2009),
        (EmitError::macro_out_of_context("Member", "inside @ForMemberIn", pos()), ErrorCode::E2010),
    ];
    for (error, code) in cases {
        assert_eq!(error.code, code, "{error}");
        assert!(code.is_semantic_error());
    }
}

#[test]
fn cyclic_dependency_names_the_chain() {
    let err = EmitError::cyclic_dependency("A", &["A", "B", "A"], pos());
    assert_eq!(err.message, "struct A depends on itself");
    assert_eq!(err.notes, vec!["dependency chain: A -> B -> A".to_string()]);
}

#[test]
fn diagnostic_keeps_position_label_and_notes() {
    let diag = EmitError::member_named_after_type("int", pos()).to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E2003);
    assert_eq!(diag.message, "Cannot name a member 'int'");
    assert_eq!(diag.position, Some(pos()));
    assert_eq!(diag.label.as_deref(), Some("'int' is a type name"));

    let diag = EmitError::unrecognized_macro("Foo", pos()).to_diagnostic();
    assert_eq!(diag.label, None);
    assert_eq!(diag.position, Some(pos()));
    assert_eq!(diag.notes.len(), 1);
}

#[test]
fn display_prefixes_position() {
    let err = EmitError::duplicate_type("A", pos());
    assert_eq!(err.to_string(), "7:3: Type 'A' already defined");
}
