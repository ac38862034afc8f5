use std::io;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use scv_diagnostic::ErrorCode;
use scv_ir::{FileId, Position};

use super::*;

#[test]
fn io_errors_map_to_readable_variants() {
    let path = Path::new("shapes.scv");
    let err = LoadError::from_io(path, io::Error::from(io::ErrorKind::NotFound));
    assert_eq!(err.to_string(), "cannot find file 'shapes.scv'");

    let err = LoadError::from_io(path, io::Error::from(io::ErrorKind::PermissionDenied));
    assert_eq!(err.to_string(), "permission denied reading 'shapes.scv'");

    let err = LoadError::from_io(path, io::Error::from(io::ErrorKind::InvalidData));
    assert_eq!(err.to_string(), "'shapes.scv' contains invalid UTF-8 data");

    let err = LoadError::from_io(path, io::Error::other("disk on fire"));
    assert_eq!(err.to_string(), "error reading 'shapes.scv': disk on fire");
}

#[test]
fn phase_errors_keep_their_codes() {
    let parse = CompileError::from(ParseError::new(
        ErrorCode::E1002,
        "Expected identifier",
        Position::new(FileId::new(1), 1, 8),
    ));
    let diag = parse.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E1002);
    assert_eq!(diag.position.map(|p| p.file), Some(FileId::new(1)));
    assert_eq!(parse.to_string(), "1:8: Expected identifier");
}

#[test]
fn io_failures_use_io_codes() {
    let load = CompileError::from(LoadError::NotFound {
        path: PathBuf::from("a.scv"),
    });
    let diag = load.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E3002);
    assert_eq!(diag.position, None);
    assert_eq!(diag.message, "cannot find file 'a.scv'");

    let write = CompileError::Write {
        path: PathBuf::from("out/a.hpp"),
        source: io::Error::from(io::ErrorKind::NotFound),
    };
    assert_eq!(write.to_diagnostic().code, ErrorCode::E3003);
    assert!(write.to_string().starts_with("cannot write 'out/a.hpp': "));
}
