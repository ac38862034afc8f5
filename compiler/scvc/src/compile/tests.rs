use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn output_is_named_after_the_input_file() {
    assert_eq!(output_path(Path::new("specs/net.scv"), Path::new("gen")), PathBuf::from("gen/net.hpp"));
    assert_eq!(output_path(Path::new("plain"), Path::new(".")), PathBuf::from("./plain.hpp"));
    assert_eq!(output_path(Path::new("a.b.scv"), Path::new("out")), PathBuf::from("out/a.b.hpp"));
}

#[test]
fn timestamp_has_date_and_time() {
    let stamp = timestamp();
    assert_eq!(stamp.len(), "2024-01-31 23:59:59".len(), "{stamp}");
    let bytes = stamp.as_bytes();
    assert_eq!((bytes[4], bytes[7], bytes[10], bytes[13], bytes[16]), (b'-', b'-', b' ', b':', b':'));
}

#[test]
fn no_inputs_compiles_nothing() {
    let mut session = Session::new();
    assert_eq!(compile(&mut session, &CompileOptions::default()).unwrap(), None);
}

#[test]
fn writes_header_into_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("point.scv");
    fs::write(&input, "struct Point { i32 x; i32 y; }\n").unwrap();
    let out = dir.path().join("out");
    fs::create_dir(&out).unwrap();

    let options = CompileOptions {
        inputs: vec![input],
        output_dir: out.clone(),
        ..CompileOptions::default()
    };
    let written = compile(&mut Session::new(), &options).unwrap().unwrap();
    assert_eq!(written, out.join("point.hpp"));

    let header = fs::read_to_string(&written).unwrap();
    assert!(header.starts_with("// File autogenerated by scv on: "));
    assert!(header.ends_with("struct Point {\n\tint32_t x;\n\tint32_t y;\n};\n"));
}

#[test]
fn missing_output_dir_is_a_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("a.scv");
    fs::write(&input, "struct A {}").unwrap();

    let options = CompileOptions {
        inputs: vec![input],
        output_dir: dir.path().join("missing"),
        ..CompileOptions::default()
    };
    let err = compile(&mut Session::new(), &options).unwrap_err();
    assert!(matches!(err, CompileError::Write { .. }), "{err:?}");
}

#[test]
fn semantic_errors_write_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.scv");
    fs::write(&input, "struct A { Missing m }").unwrap();

    let options = CompileOptions {
        inputs: vec![input],
        output_dir: dir.path().to_path_buf(),
        ..CompileOptions::default()
    };
    let err = compile(&mut Session::new(), &options).unwrap_err();
    assert!(matches!(err, CompileError::Emit(_)), "{err:?}");
    assert!(!dir.path().join("bad.hpp").exists());
}
