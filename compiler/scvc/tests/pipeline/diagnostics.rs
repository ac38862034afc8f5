//! Errors surfaced by the driver and how they render.

use pretty_assertions::assert_eq;
use scv_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use scv_diagnostic::ErrorCode;
use scvc::{CompileError, LoadError, Session};

use crate::common::Workspace;

fn render(session: &Session, err: &CompileError) -> String {
    let mut out = Vec::new();
    {
        let mut emitter =
            TerminalEmitter::with_color_mode(&mut out, ColorMode::Never, false).with_file_paths(session.file_paths());
        emitter.emit(&err.to_diagnostic());
        emitter.flush();
    }
    String::from_utf8(out).unwrap()
}

#[test]
fn missing_input_is_an_io_error() {
    let ws = Workspace::new();
    let (_, err) = ws.error(&["absent.scv"]);
    assert!(matches!(err, CompileError::Load(LoadError::NotFound { .. })), "{err:?}");
    assert_eq!(err.to_diagnostic().code, ErrorCode::E3002);
}

#[test]
fn errors_in_required_files_point_into_them() {
    let ws = Workspace::new();
    ws.file("main.scv", "requires broken\nstruct Main {}");
    let broken = ws.file("broken.scv", "struct Broken {\n  Unknown u\n}");

    let (session, err) = ws.error(&["main.scv"]);
    let rendered = render(&session, &err);
    assert!(rendered.starts_with("error[E2002]: Type 'Unknown' not defined\n"), "{rendered}");
    assert!(
        rendered.contains(&format!("  --> {}:2:3", broken.display())),
        "{rendered}"
    );
}

#[test]
fn cycle_diagnostic_shows_the_chain() {
    let ws = Workspace::new();
    ws.file("loop.scv", "struct A { B b }\nstruct B { A a }");

    let (session, err) = ws.error(&["loop.scv"]);
    let rendered = render(&session, &err);
    assert!(rendered.starts_with("error[E2006]: struct A depends on itself\n"), "{rendered}");
    assert!(rendered.contains("  = note: dependency chain: A -> B -> A\n"), "{rendered}");
}

#[test]
fn lexer_errors_stop_the_compile() {
    let ws = Workspace::new();
    ws.file("bad.scv", "struct A { int `x }");

    let (_, err) = ws.error(&["bad.scv"]);
    assert!(matches!(err, CompileError::Lex(_)), "{err:?}");
    assert!(!ws.root().join("bad.hpp").exists());
}
