//! `requires` resolution across files.

use pretty_assertions::assert_eq;
use scv_diagnostic::ErrorCode;
use scvc::CompileError;

use crate::common::{definitions, Workspace};

#[test]
fn required_structs_are_defined_before_their_users() {
    let ws = Workspace::new();
    ws.file("main.scv", "requires geometry\nstruct Shape { Point origin }");
    ws.file("geometry.scv", "struct Point { f32 x; f32 y; }");

    let header = ws.header(&["main.scv"]);
    assert_eq!(definitions(&header), vec!["Point", "Shape"]);
    assert!(header.contains("struct Point;\nstruct Shape;\n"));
}

#[test]
fn diamond_requires_load_the_shared_file_once() {
    let ws = Workspace::new();
    ws.file("main.scv", "requires left\nrequires right\nstruct Top { Left l; Right r; }");
    ws.file("left.scv", "requires common\nstruct Left { Common c }");
    ws.file("right.scv", "requires common\nstruct Right { Common c }");
    ws.file("common.scv", "struct Common { int id }");

    let (session, result) = ws.run(&["main.scv"]);
    assert!(result.unwrap().is_some());

    let loaded: Vec<String> = session
        .files()
        .iter()
        .map(|file| file.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(loaded, vec!["main.scv", "left.scv", "common.scv", "right.scv"]);

    let header = ws.header(&["main.scv"]);
    assert_eq!(definitions(&header), vec!["Common", "Left", "Right", "Top"]);
}

#[test]
fn mutual_requires_terminate() {
    let ws = Workspace::new();
    ws.file("a.scv", "requires b\nstruct A { int a }");
    ws.file("b.scv", "requires a\nstruct B { A a }");

    let header = ws.header(&["a.scv"]);
    assert_eq!(definitions(&header), vec!["A", "B"]);
}

#[test]
fn requires_resolve_relative_to_the_requiring_file() {
    let ws = Workspace::new();
    ws.file("specs/net/packet.scv", "requires header\nstruct Packet { Header h; u8 body; }");
    ws.file("specs/net/header.scv", "struct Header { u16 length }");
    ws.file("header.scv", "struct Decoy {}");

    let header = ws.header(&["specs/net/packet.scv"]);
    assert_eq!(definitions(&header), vec!["Header", "Packet"]);
    assert!(!header.contains("Decoy"));
}

#[test]
fn duplicate_struct_across_files_is_rejected() {
    let ws = Workspace::new();
    ws.file("a.scv", "requires b\nstruct Shared {}");
    ws.file("b.scv", "struct Shared { int x }");

    let (_, err) = ws.error(&["a.scv"]);
    let CompileError::Emit(err) = err else {
        panic!("expected an emit error, got {err:?}");
    };
    assert_eq!(err.code, ErrorCode::E2001);
    assert_eq!(err.position.file.raw(), 0);
    assert_eq!(err.position.row, 2);
}

#[test]
fn missing_required_file_names_the_requiring_file() {
    let ws = Workspace::new();
    ws.file("a.scv", "struct A {}\nrequires nowhere");

    let (_, err) = ws.error(&["a.scv"]);
    let diagnostic = err.to_diagnostic();
    assert_eq!(diagnostic.code, ErrorCode::E3001);
    assert!(diagnostic.message.contains("'nowhere'"), "{}", diagnostic.message);
    let position = diagnostic.position.unwrap();
    assert_eq!((position.row, position.column), (2, 10));
}
